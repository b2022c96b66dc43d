//! 结果打印器
//!
//! 提供表格、垂直和 JSON 格式的结果输出

use crate::algorithm::WidestPath;
use crate::graph::MultiEdgeGraph;
use prettytable::{format, row, Table};
use std::str::FromStr;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// JSON
    Json,
}

impl FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "vertical" => Ok(Self::Vertical),
            "json" => Ok(Self::Json),
            other => Err(format!("未知的输出格式: {}", other)),
        }
    }
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印求解结果，graph 用于查询每一跳的边容量
    ///
    /// 前驱取自游标，某一跳可能没有对应的边（七顶点样例 0->5 中的 4 -> 5），
    /// 这类跳的容量列显示为 `-`，`--verify` 会对此给出警告。
    pub fn print_result(&self, result: &WidestPath, graph: &MultiEdgeGraph) -> String {
        if self.mode == PrintMode::Json {
            return serde_json::to_string_pretty(result).unwrap_or_default() + "\n";
        }

        if !result.is_reachable() {
            return "Unreachable (capacity 0)\n".to_string();
        }

        let hops = Self::hop_rows(result, graph);
        let output = match self.mode {
            PrintMode::Vertical => Self::format_vertical(&hops),
            _ => Self::format_table(&hops),
        };

        let path: Vec<String> = result.path.iter().map(|v| v.to_string()).collect();
        format!(
            "{}\nPath: {}\nBottleneck capacity: {} ({} hop(s))\n",
            output,
            path.join(" -> "),
            result.capacity,
            result.hops()
        )
    }

    /// 每一跳 (from, to, 最宽平行边容量)
    fn hop_rows(result: &WidestPath, graph: &MultiEdgeGraph) -> Vec<[String; 3]> {
        result
            .path
            .windows(2)
            .map(|hop| {
                let widest = graph
                    .edges_between(hop[0], hop[1])
                    .iter()
                    .map(|e| e.capacity())
                    .fold(None, |acc: Option<f64>, c| Some(acc.map_or(c, |a| a.max(c))));
                [
                    hop[0].to_string(),
                    hop[1].to_string(),
                    widest.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect()
    }

    /// 表格格式
    fn format_table(hops: &[[String; 3]]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "From", "To", "Capacity"]);

        for (i, [from, to, capacity]) in hops.iter().enumerate() {
            table.add_row(row![i + 1, from, to, capacity]);
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(hops: &[[String; 3]]) -> String {
        let mut output = String::new();
        for (i, [from, to, capacity]) in hops.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. hop ***************************\n",
                i + 1
            ));
            output.push_str(&format!("    From: {}\n      To: {}\nCapacity: {}\n", from, to, capacity));
        }
        output
    }

    /// 打印图统计信息
    pub fn print_stats(&self, graph: &MultiEdgeGraph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count()]);
        table.add_row(row!["Active Vertices", graph.active_vertex_count()]);
        table.add_row(row!["Edge Count", graph.edge_count()]);
        table.to_string()
    }
}
