//! 边定义
//!
//! 无向带容量边。每条边在边数组中只存一份，两个端点的邻接表都引用同一个 EdgeId，
//! 因此"已消耗"标记对两端始终一致。

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 边 ID（边数组下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// 无向边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 端点 a（添加时的 source）
    a: VertexId,
    /// 端点 b（添加时的 target）
    b: VertexId,
    /// 容量
    capacity: f64,
    /// 本次搜索中是否已被消耗
    consumed: bool,
}

impl Edge {
    /// 创建未消耗的边
    pub fn new(id: EdgeId, a: VertexId, b: VertexId, capacity: f64) -> Self {
        Self {
            id,
            a,
            b,
            capacity,
            consumed: false,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub(crate) fn set_consumed(&mut self, consumed: bool) {
        self.consumed = consumed;
    }

    /// 从 `from` 出发经过此边到达的另一端点
    ///
    /// 自环返回自身；`from` 不是端点时返回 None。
    pub fn other(&self, from: VertexId) -> Option<VertexId> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// 是否连接 u 和 v（不区分方向）
    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

/// 输入边描述 (source, target, capacity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: VertexId,
    pub target: VertexId,
    pub capacity: f64,
}

impl EdgeSpec {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>, capacity: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            capacity,
        }
    }
}

impl From<(u64, u64, f64)> for EdgeSpec {
    fn from((source, target, capacity): (u64, u64, f64)) -> Self {
        Self::new(source, target, capacity)
    }
}

impl From<(VertexId, VertexId, f64)> for EdgeSpec {
    fn from((source, target, capacity): (VertexId, VertexId, f64)) -> Self {
        Self {
            source,
            target,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_other_endpoint() {
        let e = Edge::new(EdgeId::new(0), VertexId::new(1), VertexId::new(2), 30.0);
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(2)));
        assert_eq!(e.other(VertexId::new(2)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(3)), None);
        assert!(e.connects(VertexId::new(2), VertexId::new(1)));
        assert!(!e.is_consumed());
    }

    #[test]
    fn test_self_loop_other() {
        let e = Edge::new(EdgeId::new(0), VertexId::new(4), VertexId::new(4), 1.0);
        assert_eq!(e.other(VertexId::new(4)), Some(VertexId::new(4)));
    }

    #[test]
    fn test_edge_spec_deserialize() {
        let spec: EdgeSpec =
            serde_json::from_str(r#"{"source": 0, "target": 3, "capacity": 10.5}"#).unwrap();
        assert_eq!(spec, EdgeSpec::from((0, 3, 10.5)));
    }
}
