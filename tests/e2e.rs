mod common;

use common::init_logging;
use common::synthetic_image::{blank_edges, horizontal_edge, set_column, vertical_edge};
use faster_hough::angle::angular_difference;
use faster_hough::hough::{
    find_lines, standard_hough, Line, LineSearchEngine, NeighborhoodClassifier, RunPolicy,
    SearchParameters,
};
use faster_hough::image::ImageU8;
use std::f32::consts::FRAC_PI_2;

const W: usize = 100;
const H: usize = 50;

fn params(vote_threshold: u32) -> SearchParameters {
    SearchParameters::default()
        .with_theta_resolution(360)
        .with_rho_resolution(1.0)
        .with_vote_threshold(vote_threshold)
}

fn strongest(lines: &[Line]) -> Line {
    *lines
        .iter()
        .max_by_key(|l| l.votes)
        .expect("at least one confirmed line")
}

fn cell(lines: &[Line], rho: f32, theta: f32) -> Option<Line> {
    lines
        .iter()
        .copied()
        .find(|l| l.rho == rho && angular_difference(l.theta, theta) < 1e-4)
}

#[test]
fn blank_image_has_no_lines() {
    init_logging();
    let edges = blank_edges(W, H);
    let image = ImageU8::packed(W, H, &edges);
    for threshold in [0, 1, 30, 1000] {
        let lines = find_lines(&image, &params(threshold)).expect("search");
        assert!(lines.is_empty(), "threshold {threshold}: {lines:?}");
    }
}

#[test]
fn horizontal_segment_is_found_near_half_pi() {
    init_logging();
    let edges = horizontal_edge(W, H, 25, 10, 90);
    let image = ImageU8::packed(W, H, &edges);
    let lines = find_lines(&image, &params(30)).expect("search");
    assert!(!lines.is_empty());

    let exact = cell(&lines, 25.0, FRAC_PI_2).expect("row 25 confirmed");
    assert_eq!(exact.votes, 81);

    let top = strongest(&lines);
    assert!(angular_difference(top.theta, FRAC_PI_2) < 0.05, "{top:?}");
    assert!((78..=84).contains(&top.votes), "{top:?}");

    // Every confirmed line is a near-duplicate of the drawn segment.
    for line in &lines {
        assert!(angular_difference(line.theta, FRAC_PI_2) < 0.15, "{line:?}");
        let closest = (10..90)
            .map(|x| line.distance(x as f32, 25.0).abs())
            .fold(f32::INFINITY, f32::min);
        assert!(closest < 2.5, "{line:?} misses the segment by {closest}");
    }
}

#[test]
fn vertical_segment_is_found_at_zero() {
    init_logging();
    let edges = vertical_edge(W, H, 10, 5, 45);
    let image = ImageU8::packed(W, H, &edges);
    let lines = find_lines(&image, &params(30)).expect("search");

    let exact = cell(&lines, 10.0, 0.0).expect("column 10 confirmed");
    assert_eq!(exact.votes, 40);
    // The column right of the segment sees it through the trailing window.
    let beside = cell(&lines, 11.0, 0.0).expect("column 11 confirmed");
    assert_eq!(beside.votes, 42);

    let top = strongest(&lines);
    assert!(angular_difference(top.theta, 0.0) < 0.05, "{top:?}");
    assert!((38..=44).contains(&top.votes), "{top:?}");
}

#[test]
fn single_gap_keeps_or_drops_runs_by_local_threshold() {
    init_logging();
    // Walked bottom to top: K = 15 pixels (rows 30..=44), one gap at row 29,
    // then M = 20 pixels (rows 9..=28).
    let (k, m) = (15u32, 20u32);
    let mut edges = blank_edges(W, H);
    set_column(&mut edges, W, 10, 30, 45);
    set_column(&mut edges, W, 10, 9, 29);
    let image = ImageU8::packed(W, H, &edges);

    let low = params(0).with_local_vote_threshold(10);
    let engine = LineSearchEngine::for_image(&image, low).expect("engine");
    let classifier = NeighborhoodClassifier::new(image);
    let vertical = *engine.angles().get(0).expect("theta 0");
    assert_eq!(engine.score_cell(&classifier, 10.0, &vertical), k + m);

    let high = params(0).with_local_vote_threshold(k as usize);
    let engine = LineSearchEngine::for_image(&image, high).expect("engine");
    assert_eq!(engine.score_cell(&classifier, 10.0, &vertical), m);

    let first = low.with_run_policy(RunPolicy::FirstQualifying);
    let engine = LineSearchEngine::for_image(&image, first).expect("engine");
    assert_eq!(engine.score_cell(&classifier, 10.0, &vertical), k);

    let with_gap = find_lines(&image, &params(30).with_local_vote_threshold(10)).expect("search");
    assert_eq!(cell(&with_gap, 10.0, 0.0).map(|l| l.votes), Some(k + m));
    let dropped =
        find_lines(&image, &params(30).with_local_vote_threshold(k as usize)).expect("search");
    assert!(cell(&dropped, 10.0, 0.0).is_none());
}

#[test]
fn votes_equal_to_threshold_are_not_confirmed() {
    init_logging();
    let edges = vertical_edge(W, H, 10, 5, 45);
    let image = ImageU8::packed(W, H, &edges);
    let at = find_lines(&image, &params(40)).expect("search");
    assert!(cell(&at, 10.0, 0.0).is_none());
    let below = find_lines(&image, &params(39)).expect("search");
    assert_eq!(cell(&below, 10.0, 0.0).map(|l| l.votes), Some(40));
}

#[test]
fn repeated_searches_are_identical() {
    init_logging();
    let mut edges = horizontal_edge(W, H, 25, 10, 90);
    set_column(&mut edges, W, 70, 5, 45);
    let image = ImageU8::packed(W, H, &edges);
    let engine = LineSearchEngine::for_image(&image, params(30)).expect("engine");
    let first = engine.search(image).expect("search");
    let second = engine.search(image).expect("search");
    assert_eq!(first.lines, second.lines);
    assert_eq!(first.stats.cells_walked, second.stats.cells_walked);
    assert_eq!(first.lines, find_lines(&image, &params(30)).expect("search"));
    assert!(first.stats.cells_pruned > 0);
}

#[test]
fn baseline_agrees_on_a_single_segment() {
    init_logging();
    let edges = horizontal_edge(W, H, 25, 10, 90);
    let image = ImageU8::packed(W, H, &edges);
    let baseline = standard_hough(&image, &params(30)).expect("baseline");
    let peak = strongest(&baseline);
    assert!(angular_difference(peak.theta, FRAC_PI_2) < 1e-4, "{peak:?}");
    assert_eq!(peak.rho, 25.0);
    assert_eq!(peak.votes, 80);

    let faster = find_lines(&image, &params(30)).expect("search");
    let top = strongest(&faster);
    assert!(angular_difference(top.theta, peak.theta) < 0.05);
    assert!((top.rho - peak.rho).abs() <= 2.5);
}
