//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: sqlx::Error をラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, Decode）

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<sqlx::Error>` の変換や convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
///
/// ## パターンマッチ
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// データベースクエリの実行や行のデコードで発生するエラーの具体的な種別。
/// API 層でこのエラー種別に応じて適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラー、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 行デコードエラー
    ///
    /// 保存済みの値がドメインの表現に変換できなかった場合に使用する。
    #[error("デコードエラー: {0}")]
    Decode(String),
}

impl InfraError {
    /// エラー種別への参照を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// キャプチャされたスパン情報への参照を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 行デコード失敗のエラーを生成する（SpanTrace を捕捉）
    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Decode(message.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InfraErrorKind::Database(e) => Some(e),
            InfraErrorKind::Decode(_) => None,
        }
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Database(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    // ===== From 実装のテスト =====

    #[test]
    fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("todo_repository", op = "find_by_id");
            let _enter = span.enter();

            let err = InfraError::from(sqlx::Error::PoolTimedOut);

            assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
            let trace = format!("{}", err.span_trace());
            assert!(trace.contains("todo_repository"));
        });
    }

    // ===== convenience constructor のテスト =====

    #[test]
    fn test_decodeでdecode種別のエラーを生成する() {
        let err = InfraError::decode("不正なタスクステータス: Foo");

        assert!(matches!(err.kind(), InfraErrorKind::Decode(_)));
        assert_eq!(
            format!("{}", err),
            "デコードエラー: 不正なタスクステータス: Foo"
        );
    }

    #[test]
    fn test_displayはkindの表示に委譲する() {
        let err = InfraError::from(sqlx::Error::PoolTimedOut);

        assert!(format!("{}", err).starts_with("データベースエラー:"));
    }
}
