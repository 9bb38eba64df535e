// tests/integration_pipeline.rs
//! End-to-end: edge list to rendered ranking.

use pkgrank_core::config::Config;
use pkgrank_core::graph::rank::{Orientation, RankEngine};
use pkgrank_core::graph::Scheduler;
use pkgrank_core::input::{self, VersionStripper};
use pkgrank_core::report::{self, OutputFormat};

const INPUT: &str = "
# go list style output
example.com/cmd example.com/server
example.com/cmd example.com/util
example.com/server example.com/util
example.com/server example.com/log
example.com/util example.com/log
";

fn ranking_json(orientation: Orientation) -> serde_json::Value {
    let config = Config::default();
    let manifest = input::parse(INPUT, None).unwrap();
    let run = Scheduler::new(false).run(&manifest, "example.com/cmd").unwrap();
    let ranking = RankEngine::rank(
        &run.graph,
        orientation,
        config.measure().unwrap(),
        config.rank.params(),
    );
    let text = report::render_ranking(
        "example.com/cmd",
        orientation,
        &ranking,
        10,
        OutputFormat::Json,
    )
    .unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_json_ranking_document() {
    let doc = ranking_json(Orientation::Substrate);
    assert_eq!(doc["root"], "example.com/cmd");
    assert_eq!(doc["orientation"], "substrate");
    assert_eq!(doc["converged"], true);
    let rows = doc["ranking"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["label"], "example.com/log");
    let total: f64 = rows.iter().map(|r| r["score"].as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_consumer_ranking_puts_root_first() {
    let doc = ranking_json(Orientation::Consumer);
    assert_eq!(doc["orientation"], "consumer");
    assert_eq!(doc["ranking"][0]["label"], "example.com/cmd");
}

#[test]
fn test_text_table_respects_top() {
    let manifest = input::parse(INPUT, None).unwrap();
    let run = Scheduler::new(false).run(&manifest, "example.com/cmd").unwrap();
    let config = Config::default();
    let ranking = RankEngine::rank(
        &run.graph,
        Orientation::Substrate,
        config.measure().unwrap(),
        config.rank.params(),
    );
    let text =
        report::render_ranking("example.com/cmd", Orientation::Substrate, &ranking, 2, OutputFormat::Text)
            .unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("example.com/log"));
}

#[test]
fn test_edges_output_is_sorted_and_deduplicated_by_container() {
    let manifest = input::parse(INPUT, None).unwrap();
    let run = Scheduler::new(true).run(&manifest, "example.com/cmd").unwrap();
    let text = report::render_edges(&run.graph);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "example.com/cmd example.com/server",
            "example.com/cmd example.com/util",
            "example.com/server example.com/log",
            "example.com/server example.com/util",
            "example.com/util example.com/log",
        ]
    );
}

#[test]
fn test_versioned_root_is_stripped() {
    let stripper = VersionStripper::new().unwrap();
    let manifest = input::parse("tool@latest lib@v2\n", Some(&stripper)).unwrap();
    let root = stripper.strip("tool@latest");
    let run = Scheduler::default().run(&manifest, &root).unwrap();
    assert_eq!(report::render_edges(&run.graph), "tool lib\n");
}
