//! AdjacencyMatrix - 正方行列（非負整数）
//!
//! 生の行（`Option<u32>` の列）から検証して構築します。
//! 構築できた時点で「全要素が数値」「正方」が保証されます。

use serde::{Deserialize, Serialize};

use super::errors::DecodeError;
use crate::codec::WireFormat;

/// AdjacencyMatrix は検証済みの正方行列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    /// デコード済みの行を検証する
    ///
    /// 行 `i` に `None` があれば `MalformedRow { row: i }`。
    /// 欠損チェックは全行に対して shape チェックより先に行います。
    pub fn from_decoded_rows(rows: Vec<Vec<Option<u32>>>) -> Result<Self, DecodeError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, fields)| {
                fields
                    .into_iter()
                    .collect::<Option<Vec<u32>>>()
                    .ok_or(DecodeError::MalformedRow { row })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// `rows` が正方であることを確認する
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, DecodeError> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(DecodeError::Shape {
                rows: n,
                row,
                len: r.len(),
            });
        }
        Ok(Self { rows })
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// 行列 chunk にエンコードする
    ///
    /// 各行はカンマ区切りで、行区切りで終端します。chunk の sentinel は付けません。
    pub fn encode(&self, format: &WireFormat) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(u32::to_string).collect();
            out.push_str(&fields.join(","));
            out.push_str(&format.row_delimiter);
        }
        out
    }
}

impl TryFrom<Vec<Vec<u32>>> for AdjacencyMatrix {
    type Error = DecodeError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u32>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}
