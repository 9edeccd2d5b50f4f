use std::fmt;

use crate::domain::{Graph, TaskError};

/// グラフ操作のシグネチャ（グラフ, デコード済み引数 → シリアライズ済み response）
pub type TaskFn = fn(&Graph, &[u32]) -> Result<String, TaskError>;

/// TaskEntry はタスクテーブルの 1 行
#[derive(Clone, Copy)]
pub struct TaskEntry {
    /// ログと `--list-tasks` に出す短い名前
    pub name: &'static str,

    /// 操作が受け取る引数の数
    pub arity: usize,

    pub run: TaskFn,
}

impl TaskEntry {
    pub const fn new(name: &'static str, arity: usize, run: TaskFn) -> Self {
        Self { name, arity, run }
    }

    pub fn call(&self, graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
        if args.len() != self.arity {
            return Err(TaskError::BadArguments {
                expected: self.arity,
                actual: args.len(),
            });
        }
        (self.run)(graph, args)
    }
}

impl fmt::Debug for TaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskEntry")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdjacencyMatrix;

    fn vertex_count(graph: &Graph, _args: &[u32]) -> Result<String, TaskError> {
        Ok(graph.vertex_count().to_string())
    }

    #[test]
    fn call_checks_arity_before_running() {
        let entry = TaskEntry::new("vertex_count", 0, vertex_count);
        let graph = Graph::from_matrix(&AdjacencyMatrix::from_rows(vec![vec![0]]).unwrap());

        assert_eq!(entry.call(&graph, &[]), Ok("1".to_string()));
        assert_eq!(
            entry.call(&graph, &[4]),
            Err(TaskError::BadArguments {
                expected: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn debug_omits_the_function_pointer() {
        let entry = TaskEntry::new("vertex_count", 0, vertex_count);
        let s = format!("{entry:?}");
        assert!(s.contains("vertex_count"));
        assert!(s.contains("arity: 0"));
    }
}
