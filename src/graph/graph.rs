//! 可消耗多重图
//!
//! 边集中存放在边数组中，邻接表只保存 EdgeId。搜索过程中通过
//! [`MultiEdgeGraph::consume_unused_neighbors`] 逐条消耗边。

use super::edge::{Edge, EdgeId, EdgeSpec};
use super::vertex::VertexId;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

/// 邻接表（多数顶点度数很小）
type Adjacency = SmallVec<[EdgeId; 4]>;

/// 无向带容量多重图
#[derive(Debug, Clone)]
pub struct MultiEdgeGraph {
    /// 声明的顶点数，合法 ID 为 0..vertex_count
    vertex_count: usize,
    /// 边数组
    edges: Vec<Edge>,
    /// 顶点 -> 关联边（按插入顺序）
    adjacency: IndexMap<VertexId, Adjacency>,
}

impl MultiEdgeGraph {
    /// 创建空图
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: IndexMap::new(),
        }
    }

    /// 从边列表构建图，构建时即校验所有输入
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeSpec>,
    {
        let mut graph = Self::new(vertex_count);
        for spec in edges {
            let spec = spec.into();
            graph.add_edge(spec.source, spec.target, spec.capacity)?;
        }
        Ok(graph)
    }

    // ==================== 构建 ====================

    /// 添加无向边
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, capacity: f64) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if capacity.is_nan() || capacity < 0.0 {
            return Err(Error::InvalidCapacity { capacity });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(id, u, v, capacity));
        self.adjacency.entry(u).or_default().push(id);
        // 自环也在同一邻接表中登记两次，消耗时只会产出一次
        self.adjacency.entry(v).or_default().push(id);

        Ok(id)
    }

    /// 校验顶点 ID 是否在声明范围内
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.as_u64() >= self.vertex_count as u64 {
            return Err(Error::VertexOutOfRange {
                id: v,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    // ==================== 消耗 ====================

    /// 取出顶点所有未消耗的关联边，并将其标记为已消耗
    ///
    /// 返回 `(capacity, neighbor)` 序列，按邻接表插入顺序排列。
    /// 在没有新增边的情况下对同一顶点再次调用将返回空序列。
    pub fn consume_unused_neighbors(&mut self, u: VertexId) -> Result<Vec<(f64, VertexId)>> {
        let incident = self.adjacency.get(&u).ok_or(Error::VertexNotFound(u))?;

        let mut result = Vec::new();
        for &edge_id in incident {
            let edge = &mut self.edges[edge_id.index()];
            if edge.is_consumed() {
                continue;
            }
            edge.set_consumed(true);
            if let Some(neighbor) = edge.other(u) {
                result.push((edge.capacity(), neighbor));
            }
        }

        trace!(vertex = %u, count = result.len(), "消耗邻边");
        Ok(result)
    }

    /// 重置所有边的消耗状态，使图可以再次用于搜索
    pub fn reset_consumption(&mut self) {
        for edge in &mut self.edges {
            edge.set_consumed(false);
        }
    }

    /// 已消耗的边数
    pub fn consumed_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_consumed()).count()
    }

    // ==================== 查询 ====================

    /// 顶点是否有邻接记录
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// 声明的顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 至少有一条关联边的顶点数
    pub fn active_vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 顶点的关联边（自环出现一次）
    pub fn incident_edges(&self, v: VertexId) -> Result<Vec<&Edge>> {
        let incident = self.adjacency.get(&v).ok_or(Error::VertexNotFound(v))?;
        let mut edges: Vec<&Edge> = Vec::with_capacity(incident.len());
        // 自环的两次登记总是相邻
        for &id in incident {
            if edges.last().map(|e| e.id()) != Some(id) {
                edges.push(&self.edges[id.index()]);
            }
        }
        Ok(edges)
    }

    /// 两点之间的所有平行边
    pub fn edges_between(&self, u: VertexId, v: VertexId) -> Vec<&Edge> {
        self.adjacency
            .get(&u)
            .map(|incident| {
                let mut edges: Vec<&Edge> = Vec::new();
                for &id in incident {
                    let edge = &self.edges[id.index()];
                    if edge.connects(u, v) && edges.last().map(|e| e.id()) != Some(id) {
                        edges.push(edge);
                    }
                }
                edges
            })
            .unwrap_or_default()
    }

    /// 顶点的邻居（去重，保持首次出现顺序）
    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let mut result = Vec::new();
        if let Some(incident) = self.adjacency.get(&v) {
            for &id in incident {
                if let Some(n) = self.edges[id.index()].other(v) {
                    if !result.contains(&n) {
                        result.push(n);
                    }
                }
            }
        }
        result
    }

    /// 顶点度数（邻接表长度，自环计两次）
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(&v).map(|a| a.len()).unwrap_or(0)
    }

    /// 所有有邻接记录的顶点（按首次出现顺序）
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }
}
