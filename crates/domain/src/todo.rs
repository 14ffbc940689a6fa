//! # Todo エンティティ
//!
//! タスク管理の中心となる Todo エンティティと、その値オブジェクトを定義する。
//!
//! ## 概念モデル
//!
//! - **Todo**: 永続化済みのタスク（ID はデータベースが採番）
//! - **NewTodo**: 新規作成用の下書き（ID を持たない）
//! - **TaskText**: タスク本文（必須、60 文字以内）
//! - **TaskStatus**: タスクの進捗ステータス
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// タスク本文の最大文字数
pub const TASK_TEXT_MAX_LENGTH: usize = 60;

// =========================================================================
// TodoId
// =========================================================================

/// Todo ID（値オブジェクト）
///
/// データベースの BIGSERIAL が採番するため、ドメイン側で新規生成はしない。
/// 採番後は不変。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    /// 既存の i64 から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TaskText
// =========================================================================

/// タスク本文（値オブジェクト）
///
/// # 不変条件
///
/// - 空でない（trim 後）
/// - [`TASK_TEXT_MAX_LENGTH`] 文字以内（`chars().count()` でカウント）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskText(String);

impl TaskText {
    /// タスク本文を検証して作成する
    ///
    /// # バリデーション
    ///
    /// - trim 後に空文字列は無効
    /// - 60 文字を超える場合は無効
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("タスクは必須です".to_string()));
        }

        if value.chars().count() > TASK_TEXT_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "タスクは {} 文字以内である必要があります",
                TASK_TEXT_MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// 永続化済みデータから復元する
    ///
    /// データベースに保存済みの値は作成時に検証済みのため、再検証しない。
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TaskText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TaskStatus
// =========================================================================

/// タスクステータス
///
/// ワイヤ上およびデータベース上の表現はバリアント名そのまま
/// （`"Created"` / `"InProgress"` / `"Done"`）。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
)]
pub enum TaskStatus {
    /// 作成済み（新規作成時のデフォルト）
    #[default]
    Created,
    /// 着手中
    InProgress,
    /// 完了
    Done,
}

impl TaskStatus {
    /// 静的文字列表現を取得する（DB 保存用）
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(Self::Created),
            "InProgress" => Ok(Self::InProgress),
            "Done" => Ok(Self::Done),
            _ => Err(DomainError::Validation(format!(
                "不正なタスクステータス: {}",
                s
            ))),
        }
    }
}

// =========================================================================
// Todo / NewTodo
// =========================================================================

/// Todo エンティティ（永続化済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:     TodoId,
    task:   TaskText,
    status: TaskStatus,
}

impl Todo {
    /// ID・タスク本文・ステータスから Todo を組み立てる
    ///
    /// 更新時の全置換や、永続化層での行の復元に使用する。
    pub fn new(id: TodoId, task: TaskText, status: TaskStatus) -> Self {
        Self { id, task, status }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn task(&self) -> &TaskText {
        &self.task
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

/// 新規作成用の Todo 下書き
///
/// ID は永続化層が採番するため持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    task:   TaskText,
    status: TaskStatus,
}

impl NewTodo {
    /// ステータスをデフォルト（[`TaskStatus::Created`]）として下書きを作成する
    pub fn new(task: TaskText) -> Self {
        Self {
            task,
            status: TaskStatus::default(),
        }
    }

    pub fn task(&self) -> &TaskText {
        &self.task
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}
