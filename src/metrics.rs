//! 搜索指标
//!
//! 单次求解过程中的计数，随结果一起返回

use serde::{Deserialize, Serialize};

/// 单次求解统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// 主循环执行的轮数（不含种子弹出）
    pub rounds: usize,
    /// 从堆中弹出的次数（含种子弹出）
    pub pops: usize,
    /// 压入堆的边数
    pub edges_pushed: usize,
    /// 弹出时顶点已有标签、被忽略的次数
    pub stale_pops: usize,
    /// 获得标签的顶点数（含源点）
    pub labeled_vertices: usize,
    /// 是否因堆耗尽而在轮数上限前结束
    pub exhausted_early: bool,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 留在堆中未被弹出的边数
    pub fn unpopped(&self) -> usize {
        self.edges_pushed.saturating_sub(self.pops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialize() {
        let stats = SolveStats {
            rounds: 3,
            pops: 4,
            edges_pushed: 5,
            stale_pops: 1,
            labeled_vertices: 4,
            exhausted_early: true,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let restored: SolveStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, restored);
        assert_eq!(stats.unpopped(), 1);
        assert_eq!(SolveStats::new().unpopped(), 0);
    }
}
