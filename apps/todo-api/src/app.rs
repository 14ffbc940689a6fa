//! # アプリケーション構築
//!
//! DI（State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handler::{
   TodoState,
   create_todo,
   delete_todo,
   get_todo,
   health_check,
   list_todos,
   update_todo,
};

/// ルーターを構築する
///
/// テストからも同じルーティングを使えるよう、State を受け取る形にしている。
pub fn build_router(todo_state: Arc<TodoState>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/todo", post(create_todo).get(list_todos))
      .route(
         "/todo/{id}",
         get(get_todo).put(update_todo).delete(delete_todo),
      )
      .with_state(todo_state)
      .layer(TraceLayer::new_for_http())
}
