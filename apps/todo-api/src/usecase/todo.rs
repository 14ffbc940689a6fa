//! Todo ユースケース
//!
//! 1 操作につきリポジトリ呼び出しは 1 回。リトライや複合ロジックは持たない。

use std::sync::Arc;

use todo_domain::todo::{NewTodo, TaskStatus, TaskText, Todo, TodoId};
use todo_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo 更新の入力
pub struct UpdateTodoInput {
   pub id:     TodoId,
   pub task:   String,
   pub status: TaskStatus,
}

/// Todo ユースケース
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
   pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
      Self { todo_repository }
   }

   /// Todo を作成する
   ///
   /// 1. タスク本文を検証（失敗時はストアに触れない）
   /// 2. ステータスをデフォルト（Created）として下書きを作成
   /// 3. リポジトリに挿入し、採番された ID を返す
   pub async fn create(&self, task: String) -> Result<TodoId, ApiError> {
      let task = TaskText::new(task)?;
      let todo = NewTodo::new(task);

      let id = self.todo_repository.insert(&todo).await?;

      Ok(id)
   }

   /// Todo を全置換で更新する
   ///
   /// 対象行が存在しない場合も成功を返す（存在確認はしない）。
   pub async fn update(&self, input: UpdateTodoInput) -> Result<(), ApiError> {
      let task = TaskText::new(input.task)?;
      let todo = Todo::new(input.id, task, input.status);

      self.todo_repository.update(&todo).await?;

      Ok(())
   }

   /// Todo を削除する（ハードデリート）
   ///
   /// 対象行が存在しない場合も成功を返す。
   pub async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
      self.todo_repository.delete(id).await?;

      Ok(())
   }

   /// ID で Todo を検索する
   ///
   /// 該当行がない場合は `Ok(None)`（エラーではない）。
   pub async fn find(&self, id: TodoId) -> Result<Option<Todo>, ApiError> {
      let todo = self.todo_repository.find_by_id(id).await?;

      Ok(todo)
   }

   /// すべての Todo を挿入順で取得する
   pub async fn find_all(&self) -> Result<Vec<Todo>, ApiError> {
      let todos = self.todo_repository.find_all().await?;

      Ok(todos)
   }
}
