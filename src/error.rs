//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("优先队列为空")]
    EmptyHeap,

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("顶点 {id} 超出范围 (顶点数: {vertex_count})")]
    VertexOutOfRange { id: VertexId, vertex_count: usize },

    #[error("无效的容量: {capacity}")]
    InvalidCapacity { capacity: f64 },

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("算法错误: {0}")]
    AlgorithmError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
