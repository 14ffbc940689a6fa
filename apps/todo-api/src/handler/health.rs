//! # ヘルスチェックハンドラ
//!
//! Todo API の稼働状態を確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **ロードバランサー**: ターゲットグループヘルスチェック
//! - **コンテナオーケストレーター**: liveness probe
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use todo_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}
