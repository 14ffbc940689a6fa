//! # Todo API エラー定義
//!
//! Todo API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | ボディ |
//! |-----------|----------------|--------|
//! | `Validation` | 400 Bad Request | Problem Details（検証メッセージ） |
//! | `NotFound` | 404 Not Found | 空（パス識別子に対する 404 はメッセージを持たない） |
//! | `Database` | 500 Internal Server Error | Problem Details（固定の detail） |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_shared::ErrorResponse;

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエスト内容の検証エラー
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] todo_infra::InfraError),
}

impl From<todo_domain::DomainError> for ApiError {
   fn from(err: todo_domain::DomainError) -> Self {
      match err {
         todo_domain::DomainError::Validation(msg) => Self::Validation(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation_error(msg)),
         )
            .into_response(),
         ApiError::NotFound(msg) => {
            tracing::debug!("リソースが見つかりません: {}", msg);
            StatusCode::NOT_FOUND.into_response()
         }
         ApiError::Database(e) => {
            // 内部情報はレスポンスに含めず、ログにのみ出力する
            tracing::error!("データベースエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorResponse::internal_error()),
            )
               .into_response()
         }
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   async fn body_json(response: Response) -> serde_json::Value {
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&body).unwrap()
   }

   #[tokio::test]
   async fn test_validationは400とproblem_detailsになる() {
      let response = ApiError::Validation("タスクは必須です".to_string()).into_response();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let json = body_json(response).await;
      assert_eq!(json["title"], "Validation Error");
      assert_eq!(json["detail"], "タスクは必須です");
   }

   #[tokio::test]
   async fn test_not_foundは404で空ボディになる() {
      let response = ApiError::NotFound("todo: id=1".to_string()).into_response();

      assert_eq!(response.status(), StatusCode::NOT_FOUND);
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      assert!(body.is_empty());
   }

   #[tokio::test]
   async fn test_databaseは500で固定のdetailになる() {
      let err = todo_infra::InfraError::from(sqlx::Error::PoolTimedOut);

      let response = ApiError::Database(err).into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let json = body_json(response).await;
      assert_eq!(json["detail"], "内部エラーが発生しました");
      assert_eq!(json["status"], 500);
   }
}
