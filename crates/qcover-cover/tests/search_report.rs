use std::fs;

use qcover_anneal::{CancelToken, SamplerConfig};
use qcover_cover::{
    find_minimum_cover, AttemptLog, CoverSearch, SearchConfig, SearchOutcome, SearchReport,
};
use qcover_graph::{canonical_hash, cycle, path, SimpleGraph};

fn quick_config(num_reads: usize) -> SearchConfig {
    SearchConfig {
        num_reads,
        sampler: SamplerConfig {
            sweeps: 300,
            threads: Some(2),
            ..SamplerConfig::default()
        },
        ..SearchConfig::default()
    }
}

#[test]
fn observer_sees_every_attempt() {
    let graph = cycle(6).unwrap();
    let mut log = AttemptLog::new();
    let report = CoverSearch::new(quick_config(50))
        .with_observer(&mut log)
        .run(&graph, 6)
        .unwrap();
    let (k, _) = report.cover().expect("cover");
    assert_eq!(k, 3);
    assert_eq!(log.started(), &[1, 2, 3]);
    assert_eq!(log.summaries(), report.attempts.as_slice());
    let last = log.summaries().last().unwrap();
    assert!(last.found);
    assert_eq!(last.variables, 18);
    assert!(log.summaries()[..2].iter().all(|summary| !summary.found));
    assert!(log.summaries()[..2]
        .iter()
        .all(|summary| summary.candidates_checked == 50));
    assert_eq!(report.graph_hash, canonical_hash(&graph));
}

#[test]
fn attempt_log_writes_csv() {
    let graph = path(4);
    let mut log = AttemptLog::new();
    CoverSearch::new(quick_config(20))
        .with_observer(&mut log)
        .run(&graph, 3)
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("attempts.csv");
    log.write_csv(&csv).unwrap();
    let contents = fs::read_to_string(&csv).unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("k,variables,interactions"));
    assert_eq!(lines.count(), log.summaries().len());
}

#[test]
fn same_seed_reproduces_the_report() {
    let graph = cycle(5).unwrap();
    let first = CoverSearch::new(quick_config(30)).run(&graph, 4).unwrap();
    let second = CoverSearch::new(quick_config(30)).run(&graph, 4).unwrap();
    assert_eq!(first, second);
    let parsed = SearchReport::from_json(&first.to_json().unwrap()).unwrap();
    assert_eq!(parsed, first);
}

#[test]
fn larger_read_budget_never_needs_more_cliques() {
    let graph = cycle(7).unwrap();
    let small = CoverSearch::new(quick_config(5)).run(&graph, 7).unwrap();
    let large = CoverSearch::new(quick_config(40)).run(&graph, 7).unwrap();
    if let Some((k_small, _)) = small.cover() {
        let (k_large, _) = large.cover().expect("larger budget finds a cover");
        assert!(k_large <= k_small);
    }
}

#[test]
fn cancelled_search_reports_cancellation() {
    let graph = cycle(5).unwrap();
    let token = CancelToken::new();
    token.cancel();
    let report = CoverSearch::new(quick_config(10))
        .with_cancel_token(token)
        .run(&graph, 3)
        .unwrap();
    assert_eq!(report.outcome, SearchOutcome::Cancelled);
    assert!(report.attempts.is_empty());
    assert!(report.into_cover().is_none());
}

#[test]
fn exhausted_search_is_not_an_error() {
    let graph = cycle(6).unwrap();
    let report = CoverSearch::new(quick_config(10)).run(&graph, 2).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert_eq!(report.attempts.len(), 2);
}

#[test]
fn invalid_parameters_fail_before_sampling() {
    let graph = cycle(5).unwrap();
    let err = find_minimum_cover(&graph, 0).unwrap_err();
    assert_eq!(err.code(), "invalid-max-k");

    let err = CoverSearch::new(quick_config(0)).run(&graph, 3).unwrap_err();
    assert_eq!(err.code(), "invalid-num-reads");

    let config = SearchConfig {
        penalty_a: -1.0,
        ..quick_config(5)
    };
    let err = CoverSearch::new(config).run(&graph, 3).unwrap_err();
    assert_eq!(err.code(), "invalid-penalty");

    let err = find_minimum_cover(&SimpleGraph::new(), 3).unwrap_err();
    assert_eq!(err.code(), "empty-graph");
}

#[test]
fn label_is_carried_into_the_report() {
    let graph = path(2);
    let mut config = quick_config(5);
    config.seed_policy.label = Some("nightly".to_string());
    let report = CoverSearch::new(config.clone()).run(&graph, 1).unwrap();
    assert_eq!(report.label.as_deref(), Some("nightly"));
    assert_eq!(report.master_seed, config.seed_policy.master_seed);
}
