//! # Todo API ハンドラ
//!
//! Todo の CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `POST /todo` - Todo 作成
//! - `GET /todo` - Todo 一覧
//! - `GET /todo/{id}` - Todo 詳細
//! - `PUT /todo/{id}` - Todo 更新（全置換）
//! - `DELETE /todo/{id}` - Todo 削除
//!
//! ## ステータスコードの方針
//!
//! - パス ID のセグメント自体がない場合はルートに一致せず 404（リソース未指定）
//! - パス ID が整数でない場合は 400
//! - ボディのバインド失敗はすべて 400（axum 既定の 422 は使わない）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::todo::{TaskStatus, Todo, TodoId};

use crate::{
   error::ApiError,
   usecase::todo::{TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
   pub task: String,
}

/// Todo 更新リクエスト
///
/// `status` はデシリアライズ時に列挙へラウンドトリップされ、
/// 未知の文字列はバインド失敗として 400 になる。
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
   pub task:   String,
   pub status: TaskStatus,
}

/// Todo DTO
#[derive(Debug, Serialize)]
pub struct TodoDto {
   pub id:     i64,
   pub task:   String,
   pub status: TaskStatus,
}

impl TodoDto {
   fn from_todo(todo: &Todo) -> Self {
      Self {
         id:     todo.id().as_i64(),
         task:   todo.task().as_str().to_string(),
         status: todo.status(),
      }
   }
}

/// ボディのバインド失敗を 400 に変換する
///
/// axum の既定はデシリアライズ失敗を 422 で返すが、この API は
/// 不正なボディをすべて 400 として扱う。
fn bind_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
   let Json(value) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
   Ok(value)
}

// --- ハンドラ ---

/// POST /todo
///
/// Todo を作成する。ステータスはデフォルト（Created）。
///
/// ## レスポンス
///
/// - `201 Created`: 空ボディ
/// - `400 Bad Request`: バリデーションエラー（task 欠落・空・60 文字超）
/// - `500 Internal Server Error`: 永続化失敗
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let req = bind_json(body)?;

   state.usecase.create(req.task).await?;

   Ok(StatusCode::CREATED)
}

/// GET /todo
///
/// すべての Todo を挿入順で返す。
/// 空のときも 200 と空配列（404 にはしない）。
pub async fn list_todos(State(state): State<Arc<TodoState>>) -> Result<impl IntoResponse, ApiError> {
   let todos = state.usecase.find_all().await?;

   let items: Vec<TodoDto> = todos.iter().map(TodoDto::from_todo).collect();

   Ok((StatusCode::OK, Json(items)))
}

/// GET /todo/{id}
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `404 Not Found`: 該当行なし（空ボディ）
/// - `500 Internal Server Error`: ストア障害
pub async fn get_todo(
   State(state): State<Arc<TodoState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
   let id = TodoId::from_i64(id);

   let todo = state
      .usecase
      .find(id)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("todo: id={}", id)))?;

   Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))))
}

/// PUT /todo/{id}
///
/// Todo を全置換で更新する。対象行が存在しなくても成功を返す。
///
/// ## レスポンス
///
/// - `204 No Content`: 更新成功
/// - `400 Bad Request`: バリデーションエラー
/// - `500 Internal Server Error`: 永続化失敗
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   Path(id): Path<i64>,
   body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let req = bind_json(body)?;

   let input = UpdateTodoInput {
      id:     TodoId::from_i64(id),
      task:   req.task,
      status: req.status,
   };
   state.usecase.update(input).await?;

   Ok(StatusCode::NO_CONTENT)
}

/// DELETE /todo/{id}
///
/// Todo を削除する。対象行が存在しなくても成功を返す（冪等）。
///
/// ## レスポンス
///
/// - `200 OK`: 削除成功（空ボディ）
/// - `500 Internal Server Error`: 永続化失敗
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.delete(TodoId::from_i64(id)).await?;

   Ok(StatusCode::OK)
}
