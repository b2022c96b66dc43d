//! 图算法模块
//!
//! 包含贪心最宽路径求解和用于核对的简单路径枚举

mod path_tracing;
mod widest_path;

pub use path_tracing::{PathFinder, PathResult};
pub use widest_path::{build_graph, find_maximum_capacity_path, WidestPath, WidestPathSolver};
