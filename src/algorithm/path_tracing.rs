//! 路径枚举
//!
//! 穷举所有简单路径，用于核对贪心求解器的结果。不读取也不修改边的消耗状态。

use crate::graph::{EdgeId, MultiEdgeGraph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// 路径结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列
    pub edges: Vec<EdgeId>,
    /// 路径瓶颈（最小边容量），单点路径为 0
    pub bottleneck: f64,
}

impl PathResult {
    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            bottleneck: 0.0,
        }
    }

    /// 路径长度（边数）
    pub fn length(&self) -> usize {
        self.edges.len()
    }
}

/// 路径查找器
pub struct PathFinder<'g> {
    graph: &'g MultiEdgeGraph,
    max_depth: usize,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器，默认深度上限为顶点数
    pub fn new(graph: &'g MultiEdgeGraph) -> Self {
        Self {
            graph,
            max_depth: graph.vertex_count(),
        }
    }

    /// 设置搜索深度上限（边数）
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 查找所有简单路径，平行边产生不同的路径
    pub fn all_simple_paths(&self, start: VertexId, end: VertexId) -> Vec<PathResult> {
        let mut results = Vec::new();
        let mut path = PathResult::with_start(start);
        if start == end {
            results.push(path);
            return results;
        }

        let mut visited = HashSet::new();
        visited.insert(start);
        self.dfs_all_paths(start, end, self.max_depth, &mut visited, &mut path, &mut results);

        results
    }

    fn dfs_all_paths(
        &self,
        current: VertexId,
        end: VertexId,
        remaining_depth: usize,
        visited: &mut HashSet<VertexId>,
        path: &mut PathResult,
        results: &mut Vec<PathResult>,
    ) {
        if current == end {
            let mut found = path.clone();
            found.bottleneck = self.edges_bottleneck(&found.edges);
            results.push(found);
            return;
        }

        if remaining_depth == 0 {
            return;
        }

        let incident = self.graph.incident_edges(current).unwrap_or_default();
        for edge in incident {
            let neighbor = match edge.other(current) {
                Some(n) => n,
                None => continue,
            };

            if !visited.contains(&neighbor) {
                visited.insert(neighbor);
                path.vertices.push(neighbor);
                path.edges.push(edge.id());

                self.dfs_all_paths(neighbor, end, remaining_depth - 1, visited, path, results);

                path.edges.pop();
                path.vertices.pop();
                visited.remove(&neighbor);
            }
        }
    }

    fn edges_bottleneck(&self, edges: &[EdgeId]) -> f64 {
        if edges.is_empty() {
            return 0.0;
        }
        edges
            .iter()
            .filter_map(|&id| self.graph.edge(id))
            .map(|e| e.capacity())
            .fold(f64::INFINITY, f64::min)
    }

    /// 穷举得到的最大瓶颈简单路径，瓶颈相同时取最先找到的
    pub fn widest_simple_path(&self, start: VertexId, end: VertexId) -> Option<PathResult> {
        let mut best: Option<PathResult> = None;
        for path in self.all_simple_paths(start, end) {
            match &best {
                Some(b) if b.bottleneck >= path.bottleneck => {}
                _ => best = Some(path),
            }
        }
        best
    }

    /// 顶点序列的实际瓶颈：每跳取最宽的平行边，再取各跳的最小值
    ///
    /// 空序列或某一跳不存在边时返回 None。
    pub fn path_bottleneck(&self, vertices: &[VertexId]) -> Option<f64> {
        match vertices.len() {
            0 => None,
            1 => Some(0.0),
            _ => {
                let mut bottleneck = f64::INFINITY;
                for hop in vertices.windows(2) {
                    let widest = self
                        .graph
                        .edges_between(hop[0], hop[1])
                        .iter()
                        .map(|e| e.capacity())
                        .fold(None, |acc: Option<f64>, c| {
                            Some(acc.map_or(c, |a| a.max(c)))
                        })?;
                    bottleneck = bottleneck.min(widest);
                }
                Some(bottleneck)
            }
        }
    }

    /// 判断两点是否连通（BFS）
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        if start == end {
            return true;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(current) {
                if neighbor == end {
                    return true;
                }
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> MultiEdgeGraph {
        // 0 -30- 1 -40- 2 -50- 3
        //  \__________10_______/
        MultiEdgeGraph::from_edges(4, [(0, 1, 30.0), (1, 2, 40.0), (2, 3, 50.0), (0, 3, 10.0)])
            .unwrap()
    }

    fn vid(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_all_simple_paths() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        let paths = finder.all_simple_paths(vid(0), vid(3));
        assert_eq!(paths.len(), 2);
        let mut bottlenecks: Vec<f64> = paths.iter().map(|p| p.bottleneck).collect();
        bottlenecks.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(bottlenecks, vec![10.0, 30.0]);
    }

    #[test]
    fn test_parallel_edges_are_distinct_paths() {
        let graph = MultiEdgeGraph::from_edges(2, [(0, 1, 3.0), (0, 1, 8.0)]).unwrap();
        let finder = PathFinder::new(&graph);
        assert_eq!(finder.all_simple_paths(vid(0), vid(1)).len(), 2);
        assert_eq!(finder.widest_simple_path(vid(0), vid(1)).unwrap().bottleneck, 8.0);
        assert_eq!(finder.path_bottleneck(&[vid(1), vid(0)]), Some(8.0));
    }

    #[test]
    fn test_widest_simple_path() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        let best = finder.widest_simple_path(vid(0), vid(3)).unwrap();
        assert_eq!(best.bottleneck, 30.0);
        assert_eq!(best.vertices, vec![vid(0), vid(1), vid(2), vid(3)]);
        assert_eq!(best.length(), 3);
    }

    #[test]
    fn test_max_depth_limits_search() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph).with_max_depth(1);

        let paths = finder.all_simple_paths(vid(0), vid(3));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].bottleneck, 10.0);
    }

    #[test]
    fn test_path_bottleneck() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        assert_eq!(finder.path_bottleneck(&[vid(0), vid(1), vid(2)]), Some(30.0));
        assert_eq!(finder.path_bottleneck(&[vid(0), vid(2)]), None);
        assert_eq!(finder.path_bottleneck(&[vid(2)]), Some(0.0));
        assert_eq!(finder.path_bottleneck(&[]), None);
    }

    #[test]
    fn test_is_reachable() {
        let graph = MultiEdgeGraph::from_edges(5, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]).unwrap();
        let finder = PathFinder::new(&graph);

        assert!(finder.is_reachable(vid(0), vid(2)));
        assert!(!finder.is_reachable(vid(0), vid(4)));
        assert!(finder.widest_simple_path(vid(0), vid(4)).is_none());
    }
}
