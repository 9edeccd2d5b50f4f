//! App - Parser（decode → dispatch → response）

pub mod parser;

pub use self::parser::Parser;
