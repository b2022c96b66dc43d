//! 图核心模块
//!
//! 定义顶点、边和可消耗多重图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeId, EdgeSpec};
pub use graph::MultiEdgeGraph;
pub use vertex::VertexId;
