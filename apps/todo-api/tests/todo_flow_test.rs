//! Todo CRUD の一連の流れを公開 API 経由で検証する統合テスト
//!
//! ルーターはアプリ本体と同じ `build_router` で構築し、
//! リポジトリのみインメモリモックに差し替える。

use std::sync::Arc;

use axum::{
   body::Body,
   http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use todo_api::{app::build_router, handler::TodoState, usecase::TodoUseCaseImpl};
use todo_infra::{mock::MockTodoRepository, repository::TodoRepository};
use tower::ServiceExt;

fn create_app() -> axum::Router {
   let repo = Arc::new(MockTodoRepository::new()) as Arc<dyn TodoRepository>;
   let usecase = TodoUseCaseImpl::new(repo);
   build_router(Arc::new(TodoState { usecase }))
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_作成から削除までの一連の操作が完了する() {
   let app = create_app();

   // 作成 → 201
   let created = app
      .clone()
      .oneshot(json_request(
         Method::POST,
         "/todo",
         serde_json::json!({"task": "buy milk"}),
      ))
      .await
      .unwrap();
   assert_eq!(created.status(), StatusCode::CREATED);

   // 一覧 → 作成した 1 件が返る
   let listed = app
      .clone()
      .oneshot(empty_request(Method::GET, "/todo"))
      .await
      .unwrap();
   assert_eq!(listed.status(), StatusCode::OK);
   assert_eq!(
      body_json(listed).await,
      serde_json::json!([{"id": 1, "task": "buy milk", "status": "Created"}])
   );

   // 更新 → 204
   let updated = app
      .clone()
      .oneshot(json_request(
         Method::PUT,
         "/todo/1",
         serde_json::json!({"task": "buy milk", "status": "Done"}),
      ))
      .await
      .unwrap();
   assert_eq!(updated.status(), StatusCode::NO_CONTENT);

   // 詳細 → 更新後のステータス
   let found = app
      .clone()
      .oneshot(empty_request(Method::GET, "/todo/1"))
      .await
      .unwrap();
   assert_eq!(
      body_json(found).await,
      serde_json::json!({"id": 1, "task": "buy milk", "status": "Done"})
   );

   // 削除 → 200
   let deleted = app
      .clone()
      .oneshot(empty_request(Method::DELETE, "/todo/1"))
      .await
      .unwrap();
   assert_eq!(deleted.status(), StatusCode::OK);

   // 削除後の詳細 → 404
   let missing = app
      .oneshot(empty_request(Method::GET, "/todo/1"))
      .await
      .unwrap();
   assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ヘルスチェックが200を返す() {
   let app = create_app();

   let response = app
      .oneshot(empty_request(Method::GET, "/health"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   let json = body_json(response).await;
   assert_eq!(json["status"], "healthy");
}
