//! # テスト用モックリポジトリ
//!
//! ユースケーステストやハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

/// インメモリ実装の TodoRepository
///
/// 挿入順を保持する `Vec` と採番カウンタで PostgreSQL 実装の振る舞いを模倣する。
/// UPDATE / DELETE の「一致行 0 件でも成功」という冪等性も同じ。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
   todos:   Arc<Mutex<Vec<Todo>>>,
   next_id: Arc<Mutex<i64>>,
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 保存済み Todo を直接追加する（テストの事前状態設定用）
   ///
   /// 採番カウンタは追加した ID まで進める。
   pub fn add_todo(&self, todo: Todo) {
      let mut next = self.next_id.lock().unwrap();
      *next = (*next).max(todo.id().as_i64());
      self.todos.lock().unwrap().push(todo);
   }

   /// 保存されている件数を返す
   pub fn len(&self) -> usize {
      self.todos.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn insert(&self, todo: &NewTodo) -> Result<TodoId, InfraError> {
      let mut next = self.next_id.lock().unwrap();
      *next += 1;
      let id = TodoId::from_i64(*next);

      self.todos
         .lock()
         .unwrap()
         .push(Todo::new(id, todo.task().clone(), todo.status()));

      Ok(id)
   }

   async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
      // 対象行が存在しない場合も成功として扱う（UPDATE の 0 行一致と同じ）
      let mut todos = self.todos.lock().unwrap();
      if let Some(existing) = todos.iter_mut().find(|t| t.id() == todo.id()) {
         *existing = todo.clone();
      }

      Ok(())
   }

   async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
      self.todos.lock().unwrap().retain(|t| t.id() != id);

      Ok(())
   }

   async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .todos
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
      Ok(self.todos.lock().unwrap().clone())
   }
}
