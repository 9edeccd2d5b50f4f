//! Errors - デコード・ディスパッチのエラー型
//!
//! decode の失敗は呼び出し側には bool として見えますが、
//! 内部ではステージごとに区別します（ログと CLI のため）。

use thiserror::Error;

use super::task_id::TaskId;

/// DecodeError はメッセージのデコード失敗の分類
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no chunk boundary found while reading the {0} chunk")]
    ChunkBoundary(&'static str),

    #[error("row {row} contains an empty or non-numeric field")]
    MalformedRow { row: usize },

    #[error("matrix is not square: {rows} rows, row {row} has {len} columns")]
    Shape { rows: usize, row: usize, len: usize },

    #[error("task id chunk {0:?} is not a number")]
    MalformedTaskId(String),

    #[error("unknown task id {0}")]
    UnknownTask(TaskId),

    #[error("argument {index} ({raw:?}) is empty or non-numeric")]
    MalformedArgument { index: usize, raw: String },

    #[error("task {task} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        task: TaskId,
        expected: usize,
        actual: usize,
    },
}

/// TaskError はグラフ操作が引数を受け付けなかった場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("expected {expected} argument(s), got {actual}")]
    BadArguments { expected: usize, actual: usize },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: u32, vertex_count: usize },

    #[error("vertex {to} is unreachable from vertex {from}")]
    Unreachable { from: u32, to: u32 },
}

/// ParserError は get_response の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// decode が成功していない Parser から response を取ろうとした
    #[error("message has not been decoded successfully")]
    NotDecoded,

    #[error("task {task} failed: {source}")]
    Task {
        task: TaskId,
        #[source]
        source: TaskError,
    },
}
