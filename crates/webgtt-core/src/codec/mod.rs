//! Codec - メッセージのワイヤーフォーマット
//!
//! ```text
//! <matrix-chunk>#<task-id-chunk>#<arg-chunk>[#<arg-chunk>...]
//! ```
//!
//! - **chunk**: sentinel までの部分文字列を取り出す
//! - **csv**: カンマ区切りの整数列・行列 chunk のデコード
//! - **integer**: atoi 互換の寛容な整数変換
//! - **format**: sentinel / 行区切りの設定（WireFormat）

pub mod chunk;
pub mod csv;
pub mod format;
pub mod integer;

pub use self::chunk::next_chunk;
pub use self::csv::{comma_positions, decode_csv, decode_rows};
pub use self::format::{ConfigError, WireFormat};
pub use self::integer::string_to_integer;
