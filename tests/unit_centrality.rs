// tests/unit_centrality.rs
//! Tests for the centrality engine.

use pkgrank_core::graph::rank::builder::{from_fragment, from_observations};
use pkgrank_core::graph::rank::queries::get_ranking;
use pkgrank_core::graph::rank::{
    CentralityMeasure, ImportGraph, Orientation, PageRankParams, PageRankRun, RankEngine,
};
use pkgrank_core::graph::{Edge, Graph};

fn rank(graph: &ImportGraph) -> pkgrank_core::graph::rank::Ranking {
    graph.centrality(CentralityMeasure::PageRank, PageRankParams::default())
}

const EDGES: &[(&str, &str)] = &[
    ("app", "web"),
    ("app", "db"),
    ("web", "log"),
    ("db", "log"),
    ("db", "pool"),
    ("pool", "log"),
];

#[test]
fn test_empty_graph_ranks_nothing() {
    let ranking = rank(&ImportGraph::new());
    assert!(ranking.is_empty());
    let (labels, scores) = ranking.split();
    assert!(labels.is_empty());
    assert!(scores.is_empty());
}

#[test]
fn test_update_edge_twice_gives_weight_two() {
    let g = from_observations([("a", "b"), ("a", "b")]);
    assert_eq!(g.weight("a", "b"), Some(2.0));
    assert_eq!(g.len(), 2);
}

#[test]
fn test_scores_sum_to_one() {
    let ranking = rank(&from_observations(EDGES.iter().copied()));
    let total: f64 = ranking.ranking.iter().map(|n| n.score).sum();
    assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
    assert!(ranking.converged);
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward = rank(&from_observations(EDGES.iter().copied()));
    let backward = rank(&from_observations(EDGES.iter().rev().copied()));
    for node in &forward.ranking {
        let other = backward.score_of(&node.label).unwrap();
        assert!((node.score - other).abs() < 1e-9, "{} differs", node.label);
    }
}

#[test]
fn test_substrate_ranks_foundation_first() {
    let ranking = rank(&from_observations(EDGES.iter().copied()));
    assert_eq!(ranking.ranking[0].label, "log");
    let (labels, scores) = ranking.split();
    assert_eq!(labels.len(), 5);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_reversal_changes_top() {
    let g = from_observations(EDGES.iter().copied());
    let substrate = rank(&g);
    let consumer = rank(&g.reversed());
    assert_eq!(consumer.ranking[0].label, "app");
    assert_ne!(substrate.ranking[0].label, consumer.ranking[0].label);
}

#[test]
fn test_ties_break_by_label() {
    let g = from_observations([("z", "hub"), ("m", "hub"), ("a", "hub")]);
    let ranking = rank(&g);
    let labels: Vec<&str> = ranking.ranking.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["hub", "a", "m", "z"]);
}

#[test]
fn test_fragment_weights_carry_over() {
    let mut fragment = Graph::for_unit("app");
    fragment.add_edge(Edge::directed("app", "app", "web")).unwrap();
    fragment.add_edge(Edge::directed("app", "app", "web")).unwrap();
    fragment.add_edge(Edge::directed("app", "app", "db")).unwrap();
    fragment.add_node("orphan".into());

    let g = from_fragment(&fragment);
    assert_eq!(g.weight("app", "web"), Some(2.0));
    assert_eq!(g.weight("app", "db"), Some(1.0));
    assert_eq!(g.len(), 4);
    assert_eq!(g.dependencies("app"), vec!["db", "web"]);
    assert_eq!(g.dependents("web"), vec!["app"]);

    let ranking = RankEngine::rank(
        &fragment,
        Orientation::Substrate,
        CentralityMeasure::PageRank,
        PageRankParams::default(),
    );
    let web = ranking.score_of("web").unwrap();
    let db = ranking.score_of("db").unwrap();
    assert!(web > db);
    assert!(ranking.score_of("orphan").is_some());
}

#[test]
fn test_unknown_measure() {
    assert!("betweenness".parse::<CentralityMeasure>().is_err());
    assert_eq!(
        "outdegree".parse::<CentralityMeasure>().unwrap(),
        CentralityMeasure::Outdegree
    );
    assert_eq!(
        "pagerank".parse::<CentralityMeasure>().unwrap(),
        CentralityMeasure::PageRank
    );
}

#[test]
fn test_degree_measures() {
    let g = from_observations(EDGES.iter().copied());
    let params = PageRankParams::default();

    let indegree = g.centrality(CentralityMeasure::Indegree, params);
    assert_eq!(indegree.measure, CentralityMeasure::Indegree);
    assert_eq!(indegree.ranking[0].label, "log");
    assert_eq!(indegree.score_of("log"), Some(3.0));
    assert_eq!(indegree.score_of("app"), Some(0.0));
    // db and web both have one importer; the label decides.
    let labels: Vec<&str> = indegree.ranking.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["log", "db", "pool", "web", "app"]);

    let outdegree = g.centrality(CentralityMeasure::Outdegree, params);
    assert_eq!(outdegree.ranking[0].label, "app");
    assert_eq!(outdegree.score_of("db"), Some(2.0));
    assert_eq!(outdegree.score_of("log"), Some(0.0));
    assert_eq!(outdegree.iterations, 0);
    assert!(outdegree.converged);

    // Reversal swaps the two.
    let reversed = g.reversed().centrality(CentralityMeasure::Indegree, params);
    assert_eq!(reversed.ranking, outdegree.ranking);
}

#[test]
fn test_degree_ignores_repeated_observations() {
    let g = from_observations([("a", "b"), ("a", "b"), ("c", "b")]);
    let ranking = g.centrality(CentralityMeasure::Indegree, PageRankParams::default());
    assert_eq!(ranking.score_of("b"), Some(2.0));
}

#[test]
fn test_pagerank_reports_delta() {
    let ranking = rank(&from_observations(EDGES.iter().copied()));
    assert_eq!(ranking.measure, CentralityMeasure::PageRank);
    assert!(ranking.iterations > 0);
    assert!(ranking.delta < PageRankParams::default().tolerance);
}

#[test]
fn test_nan_scores_still_sort_deterministically() {
    let g = from_observations([("a", "b"), ("b", "c")]);
    let run = PageRankRun::settled(vec![f64::NAN, 0.5, 0.5]);
    let ranking = get_ranking(&g, CentralityMeasure::PageRank, &run);
    let labels: Vec<&str> = ranking.ranking.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
    let again = get_ranking(&g, CentralityMeasure::PageRank, &run);
    let again: Vec<&str> = again.ranking.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, again);
}
