//! webgtt-core
//!
//! Decoder for the graph task message protocol.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（AdjacencyMatrix, TaskId, Graph, DecoderState, errors）
//! - **codec**: ワイヤーフォーマット（chunk 抽出, CSV, 整数変換, WireFormat）
//! - **tasks**: タスクテーブル（TaskEntry, TaskTable, 組み込みグラフ操作）
//! - **app**: Parser（decode → dispatch → response）

pub mod domain;
pub mod codec;
pub mod tasks;
pub mod app;

pub use app::Parser;
pub use codec::{ConfigError, WireFormat};
pub use domain::{AdjacencyMatrix, DecodeError, DecoderState, Graph, ParserError, TaskError, TaskId};
pub use tasks::{RegistryError, TaskEntry, TaskTable};
