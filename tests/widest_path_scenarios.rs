//! 最宽路径端到端场景，与穷举结果对照

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use widepath::algorithm::PathFinder;
use widepath::{build_graph, find_maximum_capacity_path, VertexId, WidestPathSolver};

type EdgeList = Vec<(u64, u64, f64)>;

fn ids(raw: &[u64]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId::new).collect()
}

/// 求解并与穷举最优值比较，返回 (贪心结果, 穷举最优)
fn solve_and_enumerate(n: usize, edges: &EdgeList, s: u64, t: u64) -> (widepath::WidestPath, f64) {
    let result = find_maximum_capacity_path(n, edges.iter().copied(), s, t).unwrap();

    let graph = build_graph(n, edges.iter().copied()).unwrap();
    let exact = PathFinder::new(&graph)
        .widest_simple_path(VertexId::new(s), VertexId::new(t))
        .map(|p| p.bottleneck)
        .unwrap_or(0.0);

    (result, exact)
}

fn assert_hops_are_edges(n: usize, edges: &EdgeList, path: &[VertexId]) {
    let graph = build_graph(n, edges.iter().copied()).unwrap();
    for hop in path.windows(2) {
        assert!(
            !graph.edges_between(hop[0], hop[1]).is_empty(),
            "{} -> {} 不是输入中的边",
            hop[0],
            hop[1]
        );
    }
}

#[test]
fn scenario_a_single_hop() {
    let edges = vec![(0, 1, 1.0), (1, 2, 1.0)];
    let (result, exact) = solve_and_enumerate(3, &edges, 0, 1);
    assert_eq!(result.capacity, 1.0);
    assert_eq!(result.path, ids(&[0, 1]));
    assert_eq!(exact, 1.0);
    assert_hops_are_edges(3, &edges, &result.path);
}

#[test]
fn scenario_b_parallel_edges() {
    let edges = vec![
        (0, 1, 30.0),
        (0, 3, 10.0),
        (1, 2, 40.0),
        (2, 3, 50.0),
        (0, 1, 60.0),
        (1, 3, 50.0),
    ];
    let (result, exact) = solve_and_enumerate(4, &edges, 0, 3);
    assert_eq!(exact, 50.0);
    assert_eq!(result.capacity, exact);
    assert_eq!(result.path, ids(&[0, 1, 3]));
    assert_hops_are_edges(4, &edges, &result.path);
}

#[test]
fn scenario_c_long_way_round() {
    let edges = vec![(0, 1, 30.0), (1, 2, 40.0), (2, 3, 50.0), (0, 3, 10.0)];
    let (result, exact) = solve_and_enumerate(4, &edges, 0, 3);
    assert_eq!(exact, 30.0);
    assert_eq!(result.capacity, 30.0);
    assert_eq!(result.path, ids(&[0, 1, 2, 3]));
    assert_hops_are_edges(4, &edges, &result.path);
}

#[test]
fn scenario_d_seven_vertices() {
    let edges = vec![
        (0, 1, 2.0),
        (0, 2, 5.0),
        (1, 3, 4.0),
        (2, 3, 4.0),
        (3, 4, 6.0),
        (3, 5, 4.0),
        (2, 6, 1.0),
        (6, 5, 2.0),
    ];
    let (result, exact) = solve_and_enumerate(7, &edges, 0, 5);
    assert_eq!(exact, 4.0);
    assert_eq!(result.capacity, exact);
    assert_eq!(result.path, ids(&[0, 2, 3, 4, 5]));

    // 前驱记录的是游标，4 -> 5 这一跳不是输入中的边
    let graph = build_graph(7, edges.iter().copied()).unwrap();
    let finder = PathFinder::new(&graph);
    assert_eq!(finder.path_bottleneck(&result.path), None);
    assert_eq!(finder.path_bottleneck(&ids(&[0, 2, 3])), Some(4.0));
}

#[test]
fn target_with_no_edges_is_unreachable() {
    let result = find_maximum_capacity_path(5, [(0, 1, 3.0), (1, 2, 4.0)], 0, 4).unwrap();
    assert_eq!(result.capacity, 0.0);
    assert!(result.path.is_empty());
}

#[test]
fn solver_reuse_after_reset_matches_fresh_graph() {
    let edges = vec![(0, 1, 2.0), (0, 2, 5.0), (1, 3, 4.0), (2, 3, 4.0), (3, 5, 4.0)];
    let mut graph = build_graph(6, edges.iter().copied()).unwrap();

    let first = WidestPathSolver::new(&mut graph)
        .solve(VertexId::new(0), VertexId::new(5))
        .unwrap();
    graph.reset_consumption();
    let second = WidestPathSolver::new(&mut graph)
        .solve(VertexId::new(0), VertexId::new(5))
        .unwrap();

    assert_eq!(first.capacity, second.capacity);
    assert_eq!(first.path, second.path);
    assert_eq!(first.stats, second.stats);
}

/// 随机多重图：可达性与穷举一致，路径首尾正确且不重复经过顶点
#[test]
fn random_graphs_reach_the_same_component() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let n = rng.gen_range(2..8usize);
        let m = rng.gen_range(0..12usize);
        let edges: EdgeList = (0..m)
            .map(|_| {
                (
                    rng.gen_range(0..n as u64),
                    rng.gen_range(0..n as u64),
                    rng.gen_range(1..10u32) as f64,
                )
            })
            .collect();
        let s = rng.gen_range(0..n as u64);
        let t = (s + rng.gen_range(1..n as u64)) % n as u64;

        let result = find_maximum_capacity_path(n, edges.iter().copied(), s, t).unwrap();
        let graph = build_graph(n, edges.iter().copied()).unwrap();
        let finder = PathFinder::new(&graph);
        let reachable = finder.is_reachable(VertexId::new(s), VertexId::new(t));

        assert_eq!(result.is_reachable(), reachable, "edges={:?} s={} t={}", edges, s, t);
        if reachable {
            assert_eq!(result.path.first(), Some(&VertexId::new(s)));
            assert_eq!(result.path.last(), Some(&VertexId::new(t)));
            let distinct: HashSet<_> = result.path.iter().collect();
            assert_eq!(distinct.len(), result.path.len());
            assert!(result.capacity > 0.0);
        } else {
            assert_eq!(result.capacity, 0.0);
        }
        assert!(result.stats.pops <= result.stats.edges_pushed);
    }
}
