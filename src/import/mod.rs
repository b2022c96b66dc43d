//! 边列表导入模块
//!
//! 支持从 CSV、JSON Lines 读取 (source, target, capacity) 边列表

use crate::error::{Error, Result};
use crate::graph::{EdgeSpec, VertexId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub edges_loaded: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    Csv,
    Jsonl,
}

impl EdgeListFormat {
    /// 根据文件扩展名推断格式，无法识别时按 CSV 处理
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("jsonl") | Some("json") | Some("ndjson") => Self::Jsonl,
            _ => Self::Csv,
        }
    }
}

impl FromStr for EdgeListFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "json" | "ndjson" => Ok(Self::Jsonl),
            other => Err(Error::ParseError(format!("不支持的格式: {}", other))),
        }
    }
}

/// 读取结果
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    pub edges: Vec<EdgeSpec>,
    pub stats: ImportStats,
}

impl EdgeList {
    /// 边列表中出现的最大顶点 ID
    pub fn max_vertex_id(&self) -> Option<VertexId> {
        self.edges
            .iter()
            .flat_map(|e| [e.source, e.target])
            .max()
    }

    /// 能容纳所有顶点的最小顶点数
    ///
    /// 最大顶点 ID + 1 超出 `usize` 时返回 `ImportError`
    pub fn implied_vertex_count(&self) -> Result<usize> {
        let max = match self.max_vertex_id() {
            Some(v) => v,
            None => return Ok(0),
        };
        usize::try_from(max.as_u64())
            .ok()
            .and_then(|v| v.checked_add(1))
            .ok_or_else(|| Error::ImportError(format!("顶点 ID {} 过大，无法推断顶点数", max)))
    }
}

/// 单行边记录
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: u64,
    target: u64,
    capacity: f64,
}

impl From<EdgeRecord> for EdgeSpec {
    fn from(r: EdgeRecord) -> Self {
        EdgeSpec::new(r.source, r.target, r.capacity)
    }
}

/// 边列表读取器
pub struct EdgeListLoader {
    has_header: bool,
}

impl EdgeListLoader {
    /// 创建读取器（CSV 默认带表头）
    pub fn new() -> Self {
        Self { has_header: true }
    }

    /// 设置 CSV 是否带表头
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// 按指定格式读取
    pub fn load<P: AsRef<Path>>(&self, path: P, format: EdgeListFormat) -> Result<EdgeList> {
        match format {
            EdgeListFormat::Csv => self.load_csv(path),
            EdgeListFormat::Jsonl => self.load_jsonl(path),
        }
    }

    /// 从 CSV 读取，列为 source,target,capacity
    pub fn load_csv<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        let start = std::time::Instant::now();
        let file = File::open(path.as_ref())?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_header)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(BufReader::new(file));

        let mut list = EdgeList::default();
        for (line, record) in reader.deserialize::<EdgeRecord>().enumerate() {
            match record {
                Ok(record) => {
                    list.edges.push(record.into());
                    list.stats.edges_loaded += 1;
                }
                Err(e) => {
                    if let csv::ErrorKind::Io(_) = e.kind() {
                        return Err(Error::ImportError(format!("读取 CSV 失败: {}", e)));
                    }
                    warn!(row = line + 1, error = %e, "跳过无效的 CSV 记录");
                    list.stats.errors += 1;
                }
            }
        }

        list.stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            path = %path.as_ref().display(),
            edges = list.stats.edges_loaded,
            errors = list.stats.errors,
            "CSV 边列表读取完成"
        );
        Ok(list)
    }

    /// 从 JSON Lines 读取，每行一个 {"source","target","capacity"} 对象
    pub fn load_jsonl<P: AsRef<Path>>(&self, path: P) -> Result<EdgeList> {
        let start = std::time::Instant::now();
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut list = EdgeList::default();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<EdgeRecord>(&line) {
                Ok(record) => {
                    list.edges.push(record.into());
                    list.stats.edges_loaded += 1;
                }
                Err(e) => {
                    warn!(line = line_no + 1, error = %e, "跳过无效的 JSON 记录");
                    list.stats.errors += 1;
                }
            }
        }

        list.stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            path = %path.as_ref().display(),
            edges = list.stats.edges_loaded,
            errors = list.stats.errors,
            "JSONL 边列表读取完成"
        );
        Ok(list)
    }
}

impl Default for EdgeListLoader {
    fn default() -> Self {
        Self::new()
    }
}
