//! # Todo API サーバー
//!
//! Todo の CRUD を提供する REST API サーバー。
//!
//! ## 構成
//!
//! リクエストは handler → usecase → repository の順に処理され、
//! PostgreSQL に永続化される:
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌────────────┐     ┌──────────┐
//! │ handler  │ ──→ │ usecase  │ ──→ │ repository │ ──→ │ Postgres │
//! └──────────┘     └──────────┘     └────────────┘     └──────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SERVER_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `SERVER_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_HOST` | **Yes** | PostgreSQL ホスト名 |
//! | `DATABASE_PORT` | **Yes** | PostgreSQL ポート番号 |
//! | `DATABASE_USER` | **Yes** | PostgreSQL ユーザー名 |
//! | `DATABASE_PASSWORD` | **Yes** | PostgreSQL パスワード |
//! | `DATABASE_NAME` | **Yes** | データベース名 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_HOST=localhost DATABASE_PORT=5432 DATABASE_USER=todo \
//! DATABASE_PASSWORD=secret DATABASE_NAME=todo_db cargo run -p todo-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use todo_api::{
   app::build_router,
   config::AppConfig,
   handler::TodoState,
   usecase::TodoUseCaseImpl,
};
use todo_infra::{
   db,
   repository::{PostgresTodoRepository, TodoRepository},
};
use todo_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

/// Todo API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   observability::init_tracing(TracingConfig::from_env("todo-api"));

   // 設定読み込み
   let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Todo API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database.url())
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let todo_repository = Arc::new(PostgresTodoRepository::new(pool)) as Arc<dyn TodoRepository>;
   let usecase = TodoUseCaseImpl::new(todo_repository);
   let todo_state = Arc::new(TodoState { usecase });

   let app = build_router(todo_state);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
   let listener = TcpListener::bind(addr).await?;
   tracing::info!("listening on {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
