//! WidePath 命令行工具
//!
//! 从边列表文件读取多重图，求解两点之间的最宽路径

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use widepath::algorithm::{PathFinder, WidestPathSolver};
use widepath::cli::{PrintMode, Printer};
use widepath::graph::{MultiEdgeGraph, VertexId};
use widepath::import::{EdgeListFormat, EdgeListLoader};

#[derive(Parser, Debug)]
#[command(name = "widepath")]
#[command(about = "最大瓶颈容量路径求解工具")]
struct Args {
    /// 边列表文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: csv, jsonl（默认按扩展名推断）
    #[arg(short, long)]
    format: Option<EdgeListFormat>,

    /// CSV 没有表头行
    #[arg(long)]
    no_header: bool,

    /// 顶点数（默认为最大顶点 ID + 1）
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    /// 源顶点
    #[arg(short, long)]
    source: u64,

    /// 目标顶点
    #[arg(short, long)]
    target: u64,

    /// 输出格式: table, vertical, json
    #[arg(short, long, default_value = "table")]
    output: PrintMode,

    /// 用穷举搜索核对结果
    ///
    /// 贪心记录的前驱是游标顶点，路径中可能出现输入里不存在的跳
    /// （例如七顶点样例 0->5 的 4 -> 5），此时会给出警告
    #[arg(long)]
    verify: bool,

    /// 打印图统计信息
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("widepath=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let format = args
        .format
        .unwrap_or_else(|| EdgeListFormat::from_extension(&args.input));
    let list = EdgeListLoader::new()
        .with_header(!args.no_header)
        .load(&args.input, format)
        .with_context(|| format!("读取边列表失败: {}", args.input.display()))?;

    if list.edges.is_empty() {
        bail!("边列表为空: {}", args.input.display());
    }

    let vertex_count = match args.vertices {
        Some(n) => n,
        None => {
            let endpoint = args.source.max(args.target);
            let needed = usize::try_from(endpoint)
                .ok()
                .and_then(|v| v.checked_add(1))
                .with_context(|| format!("顶点 ID {} 超出可表示的顶点数", endpoint))?;
            list.implied_vertex_count()
                .context("无法推断顶点数")?
                .max(needed)
        }
    };
    info!(vertex_count, edges = list.edges.len(), "构建图");

    let mut graph = MultiEdgeGraph::from_edges(vertex_count, list.edges.iter().copied())
        .context("构建图失败")?;

    let source = VertexId::new(args.source);
    let target = VertexId::new(args.target);
    graph.check_vertex(source).context("源顶点无效")?;
    graph.check_vertex(target).context("目标顶点无效")?;

    let printer = Printer::new(args.output);
    if args.stats {
        print!("{}", printer.print_stats(&graph));
    }

    let result = WidestPathSolver::new(&mut graph)
        .solve(source, target)
        .context("求解失败")?;
    info!(
        capacity = result.capacity,
        hops = result.hops(),
        rounds = result.stats.rounds,
        "求解完成"
    );

    print!("{}", printer.print_result(&result, &graph));

    if args.verify {
        let finder = PathFinder::new(&graph);
        let best = finder.widest_simple_path(source, target);
        let exact = best.as_ref().map(|p| p.bottleneck).unwrap_or(0.0);
        let actual = finder.path_bottleneck(&result.path);

        println!("Exhaustive optimum: {}", exact);
        if let Some(p) = &best {
            let path: Vec<String> = p.vertices.iter().map(|v| v.to_string()).collect();
            println!("Exhaustive path: {}", path.join(" -> "));
        }
        match actual {
            Some(actual) if actual != result.capacity => {
                warn!(reported = result.capacity, actual, "报告的瓶颈与路径实际瓶颈不一致");
            }
            None if result.hops() > 0 => {
                warn!(reported = result.capacity, "路径中存在输入里没有的跳");
            }
            _ => {}
        }
        if exact != result.capacity {
            warn!(greedy = result.capacity, exact, "贪心结果与穷举最优值不同");
        }
    }

    Ok(())
}
