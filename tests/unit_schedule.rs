// tests/unit_schedule.rs
//! Tests for dependency-ordered scheduling.

use pkgrank_core::error::PkgRankError;
use pkgrank_core::graph::{Scheduler, UnitManifest};
use pkgrank_core::input;

fn manifest(text: &str) -> UnitManifest {
    input::parse(text, None).unwrap()
}

const DIAMOND: &str = "
root x
root y
x shared
y shared
shared leaf
";

#[test]
fn test_waves_follow_dependencies() {
    let m = manifest(DIAMOND);
    let waves = m.waves("root").unwrap();
    assert_eq!(
        waves,
        vec![
            vec!["leaf".to_string()],
            vec!["shared".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec!["root".to_string()],
        ]
    );
}

#[test]
fn test_only_reachable_units_are_scheduled() {
    let m = manifest("root a\nother b\n");
    let waves = m.waves("root").unwrap();
    let scheduled: Vec<&String> = waves.iter().flatten().collect();
    assert_eq!(scheduled, vec!["a", "root"]);
}

#[test]
fn test_cycle_is_reported() {
    let m = manifest("root a\na b\nb a\n");
    let err = m.waves("root").unwrap_err();
    match err {
        PkgRankError::DependencyCycle { units } => {
            assert_eq!(units, vec!["a", "b", "root"]);
        }
        other => panic!("expected cycle, got {other}"),
    }
}

#[test]
fn test_unknown_root() {
    let m = manifest("a b\n");
    assert!(matches!(
        m.waves("zzz"),
        Err(PkgRankError::UnknownRoot(r)) if r == "zzz"
    ));
}

#[test]
fn test_diamond_run_has_one_copy_of_shared_edges() {
    let m = manifest(DIAMOND);
    let run = Scheduler::new(false).run(&m, "root").unwrap();
    assert_eq!(run.graph.size(), 5);
    assert_eq!(run.waves, 4);
    assert_eq!(run.reports.len(), 5);
    assert_eq!(run.total_overlap(), 1);
    let edges: Vec<(String, String)> = run
        .graph
        .directed_edges()
        .into_iter()
        .map(|(s, d, _)| (s.to_string(), d.to_string()))
        .collect();
    let shared_edges = edges.iter().filter(|(s, _)| s == "shared").count();
    assert_eq!(shared_edges, 1);
}

#[test]
fn test_parallel_matches_sequential() {
    let text = "
app web
app db
app log
web http
web log
db log
db pool
http log
pool log
";
    let m = manifest(text);
    let sequential = Scheduler::new(false).run(&m, "app").unwrap();
    let parallel = Scheduler::new(true).run(&m, "app").unwrap();
    assert_eq!(*sequential.graph, *parallel.graph);
    assert_eq!(sequential.total_overlap(), parallel.total_overlap());
}

#[test]
fn test_single_unit_root() {
    let m = manifest("# nothing but a declared root\nsolo solo-dep\n");
    let run = Scheduler::default().run(&m, "solo-dep").unwrap();
    assert_eq!(run.graph.size(), 0);
    assert_eq!(run.graph.order(), 1);
}
