//! Tasks - タスクテーブル
//!
//! task id → (グラフ操作, 引数の数) の純粋なデータマッピングです。
//! trait object や動的な型解決は使わず、関数ポインタを保持します。
//!
//! - **entry**: TaskEntry（名前, arity, 関数ポインタ）
//! - **registry**: TaskTable（登録と検索）
//! - **builtin**: 組み込みのグラフ操作

pub mod builtin;
pub mod entry;
pub mod registry;

pub use self::entry::{TaskEntry, TaskFn};
pub use self::registry::{RegistryError, TaskTable};
