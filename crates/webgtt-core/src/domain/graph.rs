//! Graph - AdjacencyMatrix から構築するグラフ
//!
//! 頂点 i と j は `matrix[i][j] != 0` のとき隣接します。
//! 行列の値は重みとして扱わず、0 / 非 0 のみを見ます。

use super::errors::TaskError;
use super::matrix::AdjacencyMatrix;

/// Graph は隣接リスト（頂点ごとの出辺先、昇順）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let adjacency = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w != 0)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();
        Self { adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 引数の頂点番号をインデックスに解決する（範囲外は `VertexOutOfRange`）
    pub fn check_vertex(&self, vertex: u32) -> Result<usize, TaskError> {
        let v = vertex as usize;
        if v < self.vertex_count() {
            Ok(v)
        } else {
            Err(TaskError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// `v` の出辺先（昇順）。存在しない頂点は空
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// `v` の出次数。存在しない頂点は 0
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|n| n.binary_search(&b).is_ok())
    }

    /// 向きを無視した `v` の隣接頂点（昇順・重複なし）
    pub fn undirected_neighbors(&self, v: usize) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&u| self.is_adjacent(v, u) || self.is_adjacent(u, v))
            .collect()
    }

    /// 無向辺の数：どちらかの向きで繋がっている `i <= j` の組
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        (0..n)
            .flat_map(|i| (i..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.is_adjacent(i, j) || self.is_adjacent(j, i))
            .count()
    }
}
