//! TaskTable - タスクの登録と検索
//!
//! # 学習ポイント
//! - BTreeMap による id 順の管理（registered_ids がソート済みになる）
//! - Arc で Parser 間に読み取り専用で共有する

use std::collections::BTreeMap;

use super::builtin;
use super::entry::TaskEntry;
use crate::domain::TaskId;

/// TaskTable は task id と TaskEntry の対応表
///
/// # 使用例
/// ```ignore
/// let mut table = TaskTable::new();
/// table.register(TaskId::new(9), TaskEntry::new("my_op", 1, my_op))?;
/// let entry = table.get(TaskId::new(9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    entries: BTreeMap<TaskId, TaskEntry>,
}

/// RegistryError は TaskTable の操作エラー
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("task id {0} is already registered")]
    AlreadyRegistered(TaskId),
}

impl TaskTable {
    /// 空のテーブル
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// 組み込みのグラフ操作を持つテーブル
    pub fn builtin() -> Self {
        Self {
            entries: builtin::ENTRIES.iter().copied().collect(),
        }
    }

    pub fn register(&mut self, id: TaskId, entry: TaskEntry) -> Result<(), RegistryError> {
        if self.entries.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn registered_ids(&self) -> Vec<TaskId> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &TaskEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
