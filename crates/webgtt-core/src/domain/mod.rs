//! Domain model (matrix, task ids, graph, decoder state, errors).

pub mod errors;
pub mod graph;
pub mod matrix;
pub mod state;
pub mod task_id;

pub use self::errors::{DecodeError, ParserError, TaskError};
pub use self::graph::Graph;
pub use self::matrix::AdjacencyMatrix;
pub use self::state::DecoderState;
pub use self::task_id::TaskId;
