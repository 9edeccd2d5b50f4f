//! Parser: decodes one message and builds its response.
//!
//! A `Parser` is built for a single message, decoded once, asked for one
//! response, then dropped. Decoding is all-or-nothing: the first failing
//! stage moves the parser to `Invalid` and nothing decoded so far is kept.

use std::sync::Arc;

use crate::codec::{ConfigError, WireFormat, decode_rows, next_chunk, string_to_integer};
use crate::domain::{AdjacencyMatrix, DecodeError, DecoderState, Graph, ParserError, TaskId};
use crate::tasks::TaskTable;

/// decode に成功したメッセージの各フィールド
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decoded {
    matrix: AdjacencyMatrix,
    task_id: TaskId,
    args: Vec<u32>,
}

/// Parser は 1 メッセージ分の decode 状態を持つ
#[derive(Debug)]
pub struct Parser {
    message: String,
    format: WireFormat,
    table: Arc<TaskTable>,
    state: DecoderState,
    decoded: Option<Decoded>,
    error: Option<DecodeError>,
}

impl Parser {
    /// 組み込みタスクテーブルと v1 フォーマットで `message` を読む Parser
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_table(message, Arc::new(TaskTable::builtin()))
    }

    pub fn with_table(message: impl Into<String>, table: Arc<TaskTable>) -> Self {
        Self {
            message: message.into(),
            format: WireFormat::default_v1(),
            table,
            state: DecoderState::Initial,
            decoded: None,
            error: None,
        }
    }

    /// ワイヤーフォーマットを差し替える（不正な区切り文字は `ConfigError`）
    pub fn with_format(mut self, format: WireFormat) -> Result<Self, ConfigError> {
        format.validate()?;
        self.format = format;
        Ok(self)
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// メッセージを decode する（失敗は `false`）
    pub fn decode_message(&mut self) -> bool {
        self.decode().is_ok()
    }

    /// メッセージを decode し、失敗理由を返す
    ///
    /// 処理するのは最初の呼び出しだけで、以降は到達済みの結果を返します。
    pub fn decode(&mut self) -> Result<(), DecodeError> {
        if self.state.is_terminal() {
            return match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            };
        }

        self.transition(DecoderState::Decoding);
        match decode_fields(&self.message, &self.format, &self.table) {
            Ok(decoded) => {
                tracing::debug!(
                    dimension = decoded.matrix.dimension(),
                    task_id = %decoded.task_id,
                    args = ?decoded.args,
                    "message decoded"
                );
                self.decoded = Some(decoded);
                self.transition(DecoderState::Valid);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(%err, "message rejected");
                self.error = Some(err.clone());
                self.transition(DecoderState::Invalid);
                Err(err)
            }
        }
    }

    /// decode したタスクを実行し、シリアライズ済みの結果を返す
    ///
    /// `decode` が成功していなければ `NotDecoded`。
    pub fn get_response(&self) -> Result<String, ParserError> {
        let decoded = match (&self.state, &self.decoded) {
            (DecoderState::Valid, Some(decoded)) => decoded,
            _ => return Err(ParserError::NotDecoded),
        };
        let entry = self
            .table
            .get(decoded.task_id)
            .ok_or(ParserError::NotDecoded)?;

        let graph = Graph::from_matrix(&decoded.matrix);
        let response = entry
            .call(&graph, &decoded.args)
            .map_err(|source| ParserError::Task {
                task: decoded.task_id,
                source,
            })?;
        tracing::debug!(task = entry.name, len = response.len(), "response built");
        Ok(response)
    }

    pub fn adjacency_matrix(&self) -> Option<&AdjacencyMatrix> {
        self.decoded.as_ref().map(|d| &d.matrix)
    }

    pub fn task_id(&self) -> Option<TaskId> {
        self.decoded.as_ref().map(|d| d.task_id)
    }

    pub fn args(&self) -> Option<&[u32]> {
        self.decoded.as_ref().map(|d| d.args.as_slice())
    }

    /// `Invalid` になった理由
    pub fn error(&self) -> Option<&DecodeError> {
        self.error.as_ref()
    }

    fn transition(&mut self, next: DecoderState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal decoder transition {:?} -> {next:?}",
            self.state
        );
        tracing::trace!(from = ?self.state, to = ?next, "decoder transition");
        self.state = next;
    }
}

fn decode_fields(
    message: &str,
    format: &WireFormat,
    table: &TaskTable,
) -> Result<Decoded, DecodeError> {
    let sentinel = format.sentinel.as_str();
    let mut cursor = 0;

    // 1) adjacency matrix
    let chunk =
        next_chunk(message, sentinel, &mut cursor).ok_or(DecodeError::ChunkBoundary("matrix"))?;
    let matrix = AdjacencyMatrix::from_decoded_rows(decode_rows(chunk, &format.row_delimiter))?;

    // 2) task id
    let chunk =
        next_chunk(message, sentinel, &mut cursor).ok_or(DecodeError::ChunkBoundary("task id"))?;
    let task_id = string_to_integer(chunk)
        .map(TaskId::new)
        .ok_or_else(|| DecodeError::MalformedTaskId(chunk.to_string()))?;
    let entry = table
        .get(task_id)
        .ok_or(DecodeError::UnknownTask(task_id))?;

    // 3) args: 最後の chunk は末尾まで（末尾の sentinel は省略可）
    let mut args = Vec::new();
    while cursor < message.len() {
        let start = cursor;
        let raw = next_chunk(message, sentinel, &mut cursor).unwrap_or(&message[start..]);
        let value = string_to_integer(raw).ok_or_else(|| DecodeError::MalformedArgument {
            index: args.len(),
            raw: raw.to_string(),
        })?;
        args.push(value);
    }
    if args.len() != entry.arity {
        return Err(DecodeError::ArityMismatch {
            task: task_id,
            expected: entry.arity,
            actual: args.len(),
        });
    }

    Ok(Decoded {
        matrix,
        task_id,
        args,
    })
}
