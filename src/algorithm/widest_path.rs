//! 最宽路径（最大瓶颈容量路径）
//!
//! 贪心标号算法：形状类似 Dijkstra，但以"路径上最小边容量最大"为目标。
//! 每轮从最大堆中取出全局容量最大的边，游标总是跟随被弹出的顶点，
//! 无论该顶点是否获得了新标签。顶点标签一经写入不再修改。
//!
//! 注意：这不是教科书意义上对任意多重图都正确的最宽路径算法，
//! 标准做法（按 `max(current, min(pred, edge))` 松弛并在改进时重新入堆）
//! 会改变结果，需要精确解时使用 [`PathFinder`](super::PathFinder) 穷举。

use crate::error::{Error, Result};
use crate::graph::{EdgeSpec, MultiEdgeGraph, VertexId};
use crate::heap::MaxHeap;
use crate::metrics::SolveStats;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace};

/// 求解结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidestPath {
    /// 瓶颈容量，不可达时为 0
    pub capacity: f64,
    /// 从源点到目标点的顶点序列，不可达时为空
    pub path: Vec<VertexId>,
    /// 求解统计
    pub stats: SolveStats,
}

impl WidestPath {
    fn unreachable(stats: SolveStats) -> Self {
        Self {
            capacity: 0.0,
            path: Vec::new(),
            stats,
        }
    }

    /// 目标是否可达
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// 路径的跳数
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// 顶点标签
#[derive(Debug, Clone, Copy)]
struct PathEntry {
    capacity: f64,
    /// None 表示源点
    predecessor: Option<VertexId>,
}

/// 最宽路径求解器
///
/// 求解会消耗图中的边；同一个图再次求解前必须调用
/// [`MultiEdgeGraph::reset_consumption`]。
pub struct WidestPathSolver<'g> {
    graph: &'g mut MultiEdgeGraph,
}

impl<'g> WidestPathSolver<'g> {
    pub fn new(graph: &'g mut MultiEdgeGraph) -> Self {
        Self { graph }
    }

    /// 计算从 source 到 target 的最大瓶颈路径
    pub fn solve(&mut self, source: VertexId, target: VertexId) -> Result<WidestPath> {
        let mut stats = SolveStats::new();

        if !self.graph.contains_vertex(target) {
            debug!(%target, "目标顶点没有关联边");
            return Ok(WidestPath::unreachable(stats));
        }
        if source == target {
            return Ok(WidestPath {
                capacity: 0.0,
                path: vec![source],
                stats,
            });
        }
        if !self.graph.contains_vertex(source) {
            debug!(%source, "源顶点没有关联边");
            return Ok(WidestPath::unreachable(stats));
        }

        let mut labels: HashMap<VertexId, PathEntry> = HashMap::new();
        labels.insert(
            source,
            PathEntry {
                capacity: 0.0,
                predecessor: None,
            },
        );

        let mut heap = MaxHeap::with_capacity(self.graph.edge_count());
        self.push_unused(source, &mut heap, &mut stats)?;

        if heap.is_empty() {
            stats.exhausted_early = true;
        } else {
            let (first_capacity, mut cursor) = heap.remove_max()?;
            stats.pops += 1;
            if let Entry::Vacant(slot) = labels.entry(cursor) {
                slot.insert(PathEntry {
                    capacity: first_capacity,
                    predecessor: Some(source),
                });
            } else {
                stats.stale_pops += 1;
            }
            // 最近一次写入标签时的瓶颈
            let mut bottleneck = first_capacity;

            let max_rounds = self.graph.edge_count().saturating_sub(1);
            while stats.rounds < max_rounds {
                self.push_unused(cursor, &mut heap, &mut stats)?;
                if heap.is_empty() {
                    stats.exhausted_early = true;
                    break;
                }

                let (capacity, vertex) = heap.remove_max()?;
                stats.rounds += 1;
                stats.pops += 1;

                match labels.entry(vertex) {
                    Entry::Vacant(slot) => {
                        bottleneck = bottleneck.min(capacity);
                        slot.insert(PathEntry {
                            capacity: bottleneck,
                            predecessor: Some(cursor),
                        });
                        trace!(round = stats.rounds, %vertex, via = %cursor, bottleneck, "写入标签");
                    }
                    Entry::Occupied(_) => stats.stale_pops += 1,
                }

                cursor = vertex;
            }
        }

        stats.labeled_vertices = labels.len();
        debug!(
            %source,
            %target,
            rounds = stats.rounds,
            labeled = stats.labeled_vertices,
            stale = stats.stale_pops,
            exhausted_early = stats.exhausted_early,
            "最宽路径搜索结束"
        );

        Self::reconstruct(&labels, source, target, stats)
    }

    /// 取出顶点所有未消耗的边并压入堆
    fn push_unused(
        &mut self,
        vertex: VertexId,
        heap: &mut MaxHeap<f64, VertexId>,
        stats: &mut SolveStats,
    ) -> Result<()> {
        for (capacity, neighbor) in self.graph.consume_unused_neighbors(vertex)? {
            heap.add(capacity, neighbor);
            stats.edges_pushed += 1;
        }
        Ok(())
    }

    /// 沿前驱指针重构路径
    fn reconstruct(
        labels: &HashMap<VertexId, PathEntry>,
        source: VertexId,
        target: VertexId,
        stats: SolveStats,
    ) -> Result<WidestPath> {
        let entry = match labels.get(&target) {
            Some(entry) => *entry,
            None => return Ok(WidestPath::unreachable(stats)),
        };

        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = labels.get(&current).and_then(|e| e.predecessor) {
            if path.len() > labels.len() {
                return Err(Error::AlgorithmError(format!(
                    "顶点 {} 的前驱链存在环",
                    target
                )));
            }
            path.push(prev);
            current = prev;
        }
        if current != source {
            return Err(Error::AlgorithmError(format!(
                "前驱链终止于 {}，而非源点 {}",
                current, source
            )));
        }
        path.reverse();

        Ok(WidestPath {
            capacity: entry.capacity,
            path,
            stats,
        })
    }
}

/// 从边列表构建图
pub fn build_graph<I, E>(vertex_count: usize, edges: I) -> Result<MultiEdgeGraph>
where
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec>,
{
    MultiEdgeGraph::from_edges(vertex_count, edges)
}

/// 构建新图并求解一次最宽路径
pub fn find_maximum_capacity_path<I, E>(
    vertex_count: usize,
    edges: I,
    source: impl Into<VertexId>,
    target: impl Into<VertexId>,
) -> Result<WidestPath>
where
    I: IntoIterator<Item = E>,
    E: Into<EdgeSpec>,
{
    let source = source.into();
    let target = target.into();

    let mut graph = build_graph(vertex_count, edges)?;
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    WidestPathSolver::new(&mut graph).solve(source, target)
}
