//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **行不在の区別**: 検索で該当行がない場合は `Ok(None)` を返し、
//!   クエリ・接続エラーとは区別する
//! - **冪等な書き込み**: UPDATE / DELETE は一致行が 0 件でも成功として扱う
//!   （存在確認はしない）

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{NewTodo, TaskStatus, TaskText, Todo, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の CRUD 操作を定義する。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todo を挿入し、採番された ID を返す
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError>;

    /// Todo を ID で全置換する（一致行が 0 件でも成功）
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を ID で削除する（一致行が 0 件でも成功）
    async fn delete(&self, id: TodoId) -> Result<(), InfraError>;

    /// ID で Todo を検索する
    ///
    /// 該当行がない場合は `Ok(None)`。
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// すべての Todo を挿入順（ID 昇順）で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// todo テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:     i64,
    task:   String,
    status: String,
}

impl TodoRow {
    /// 行をドメインエンティティに変換する
    ///
    /// DB 上の status がドメインの列挙に含まれない場合はデコードエラー。
    fn into_todo(self) -> Result<Todo, InfraError> {
        let status =
            TaskStatus::from_str(&self.status).map_err(|e| InfraError::decode(e.to_string()))?;

        Ok(Todo::new(
            TodoId::from_i64(self.id),
            TaskText::from_db(self.task),
            status,
        ))
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO todo (task, status) VALUES ($1, $2) RETURNING id")
                .bind(todo.task().as_str())
                .bind(todo.status().as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(TodoId::from_i64(id))
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        // 一致行が 0 件（対象なし）でも成功として扱う
        sqlx::query("UPDATE todo SET task = $2, status = $3 WHERE id = $1")
            .bind(todo.id().as_i64())
            .bind(todo.task().as_str())
            .bind(todo.status().as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>("SELECT id, task, status FROM todo WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(TodoRow::into_todo).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>("SELECT id, task, status FROM todo ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TodoRow::into_todo).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ===== TodoRow 変換のテスト =====

    #[test]
    fn test_into_todo_有効な行をエンティティに変換する() {
        let row = TodoRow {
            id:     1,
            task:   "task".to_string(),
            status: "InProgress".to_string(),
        };

        let todo = row.into_todo().unwrap();

        assert_eq!(todo.id().as_i64(), 1);
        assert_eq!(todo.task().as_str(), "task");
        assert_eq!(todo.status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_into_todo_未知のstatusはデコードエラー() {
        let row = TodoRow {
            id:     1,
            task:   "task".to_string(),
            status: "Broken".to_string(),
        };

        let err = row.into_todo().unwrap_err();

        assert!(matches!(
            err.kind(),
            crate::error::InfraErrorKind::Decode(_)
        ));
    }
}
