//! WidePath - 容量多重图上的最宽路径求解
//!
//! 计算源点到目标点之间瓶颈容量（路径上最小边容量）最大的路径：
//! - 基于数组的最大堆优先队列
//! - 边可逐条消耗的无向多重图
//! - 贪心标号搜索与路径重构
//! - 简单路径穷举，用于核对结果

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod heap;
pub mod import;
pub mod metrics;

// 重导出常用类型
pub use algorithm::{build_graph, find_maximum_capacity_path, WidestPath, WidestPathSolver};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, EdgeSpec, MultiEdgeGraph, VertexId};
pub use heap::MaxHeap;
pub use metrics::SolveStats;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
