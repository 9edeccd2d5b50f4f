//! Built-in graph operations.
//!
//! Responses are plain text: a single decimal, or a comma separated list
//! with no trailing comma (empty string for an empty list).

use std::collections::VecDeque;

use super::entry::TaskEntry;
use crate::domain::{Graph, TaskError, TaskId};

pub const COLORING: TaskId = TaskId::new(0);
pub const BFS: TaskId = TaskId::new(1);
pub const DEGREE: TaskId = TaskId::new(2);
pub const SHORTEST_PATH: TaskId = TaskId::new(3);
pub const COMPONENTS: TaskId = TaskId::new(4);
pub const EDGE_COUNT: TaskId = TaskId::new(5);

pub const ENTRIES: [(TaskId, TaskEntry); 6] = [
    (COLORING, TaskEntry::new("coloring", 0, coloring)),
    (BFS, TaskEntry::new("bfs", 1, bfs)),
    (DEGREE, TaskEntry::new("degree", 1, degree)),
    (SHORTEST_PATH, TaskEntry::new("shortest_path", 2, shortest_path)),
    (COMPONENTS, TaskEntry::new("components", 0, components)),
    (EDGE_COUNT, TaskEntry::new("edge_count", 0, edge_count)),
];

fn csv<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn bad_arguments(expected: usize, args: &[u32]) -> TaskError {
    TaskError::BadArguments {
        expected,
        actual: args.len(),
    }
}

/// 頂点順の貪欲彩色（辺は無向として扱う）
///
/// 各頂点には、彩色済みの隣接頂点が使っていない最小の色を割り当てます。
pub fn coloring(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    if !args.is_empty() {
        return Err(bad_arguments(0, args));
    }
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];
    for v in 0..n {
        let mut used = vec![false; n + 1];
        for u in graph.undirected_neighbors(v) {
            if let Some(c) = colors[u] {
                used[c] = true;
            }
        }
        colors[v] = used.iter().position(|taken| !taken);
    }
    Ok(csv(colors.into_iter().map(|c| c.unwrap_or_default())))
}

/// source からの幅優先の訪問順（辺の向きに従う）
pub fn bfs(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    let &[source] = args else {
        return Err(bad_arguments(1, args));
    };
    let source = graph.check_vertex(source)?;
    let (order, _) = breadth_first(graph, source);
    Ok(csv(order))
}

pub fn degree(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    let &[vertex] = args else {
        return Err(bad_arguments(1, args));
    };
    let v = graph.check_vertex(vertex)?;
    Ok(graph.degree(v).to_string())
}

/// `from` から `to` への辺数最小の経路（両端を含む）
pub fn shortest_path(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    let &[from, to] = args else {
        return Err(bad_arguments(2, args));
    };
    let start = graph.check_vertex(from)?;
    let goal = graph.check_vertex(to)?;

    let (_, parent) = breadth_first(graph, start);
    if start != goal && parent[goal].is_none() {
        return Err(TaskError::Unreachable { from, to });
    }

    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        // 到達済みなので parent は必ずある
        let Some(p) = parent[cur] else {
            return Err(TaskError::Unreachable { from, to });
        };
        path.push(p);
        cur = p;
    }
    path.reverse();
    Ok(csv(path))
}

/// 連結成分の数（辺は無向として扱う）
pub fn components(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    if !args.is_empty() {
        return Err(bad_arguments(0, args));
    }
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    let mut count = 0;
    for root in 0..n {
        if seen[root] {
            continue;
        }
        count += 1;
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for u in graph.undirected_neighbors(v) {
                if !seen[u] {
                    seen[u] = true;
                    stack.push(u);
                }
            }
        }
    }
    Ok(count.to_string())
}

pub fn edge_count(graph: &Graph, args: &[u32]) -> Result<String, TaskError> {
    if !args.is_empty() {
        return Err(bad_arguments(0, args));
    }
    Ok(graph.edge_count().to_string())
}

/// `source` からの訪問順と BFS 木の親
fn breadth_first(graph: &Graph, source: usize) -> (Vec<usize>, Vec<Option<usize>>) {
    let n = graph.vertex_count();
    let mut seen = vec![false; n];
    let mut parent = vec![None; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::from([source]);
    seen[source] = true;

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &u in graph.neighbors(v) {
            if !seen[u] {
                seen[u] = true;
                parent[u] = Some(v);
                queue.push_back(u);
            }
        }
    }
    (order, parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdjacencyMatrix;

    fn graph(rows: Vec<Vec<u32>>) -> Graph {
        Graph::from_matrix(&AdjacencyMatrix::from_rows(rows).unwrap())
    }

    /// 0 - 1 - 2   3
    fn path_and_isolated() -> Graph {
        graph(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
        ])
    }

    fn triangle() -> Graph {
        graph(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]])
    }

    #[test]
    fn builtin_ids_are_unique() {
        let mut ids: Vec<_> = ENTRIES.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ENTRIES.len());
    }

    #[test]
    fn coloring_uses_smallest_free_color() {
        assert_eq!(coloring(&triangle(), &[]).unwrap(), "0,1,2");
        assert_eq!(coloring(&path_and_isolated(), &[]).unwrap(), "0,1,0,0");
        assert_eq!(coloring(&graph(vec![]), &[]).unwrap(), "");
    }

    #[test]
    fn coloring_sees_one_way_edges() {
        let g = graph(vec![vec![0, 0], vec![1, 0]]);
        assert_eq!(coloring(&g, &[]).unwrap(), "0,1");
    }

    #[test]
    fn bfs_visits_reachable_vertices_in_order() {
        let g = path_and_isolated();
        assert_eq!(bfs(&g, &[1]).unwrap(), "1,0,2");
        assert_eq!(bfs(&g, &[3]).unwrap(), "3");
        assert!(matches!(
            bfs(&g, &[4]),
            Err(TaskError::VertexOutOfRange { vertex: 4, .. })
        ));
    }

    #[test]
    fn degree_counts_out_edges() {
        let g = path_and_isolated();
        assert_eq!(degree(&g, &[1]).unwrap(), "2");
        assert_eq!(degree(&g, &[3]).unwrap(), "0");
    }

    #[test]
    fn shortest_path_includes_endpoints() {
        let g = path_and_isolated();
        assert_eq!(shortest_path(&g, &[0, 2]).unwrap(), "0,1,2");
        assert_eq!(shortest_path(&g, &[2, 2]).unwrap(), "2");
        assert_eq!(
            shortest_path(&g, &[0, 3]),
            Err(TaskError::Unreachable { from: 0, to: 3 })
        );
    }

    #[test]
    fn shortest_path_follows_direction() {
        let g = graph(vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(shortest_path(&g, &[0, 1]).unwrap(), "0,1");
        assert!(shortest_path(&g, &[1, 0]).is_err());
    }

    #[test]
    fn components_and_edges() {
        let g = path_and_isolated();
        assert_eq!(components(&g, &[]).unwrap(), "2");
        assert_eq!(edge_count(&g, &[]).unwrap(), "2");
        assert_eq!(components(&graph(vec![]), &[]).unwrap(), "0");
        assert_eq!(edge_count(&triangle(), &[]).unwrap(), "3");
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        let g = triangle();
        assert_eq!(
            degree(&g, &[]),
            Err(TaskError::BadArguments {
                expected: 1,
                actual: 0
            })
        );
        assert!(matches!(
            components(&g, &[1]),
            Err(TaskError::BadArguments { expected: 0, .. })
        ));
    }
}
