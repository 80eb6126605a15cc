// Integration tests for selection handling and the catalog

use algoviz::algorithm::{classify, growth_curve, AlgorithmKind, Catalog, Category};
use algoviz::error::{PresentationError, VizError};
use algoviz::player::PlaybackState;
use algoviz::session::Session;
use algoviz::steps::Step;
use std::rc::Rc;

fn sink() -> impl FnMut(&Step, usize, usize) -> Result<(), PresentationError> {
    |_, _, _| Ok(())
}

#[test]
fn test_unknown_selection_leaves_state_unchanged() {
    let mut session = Session::new(Catalog::builtin());
    session.select("merge-sort").unwrap();
    session.on_step(&mut sink()).unwrap();
    let before = Rc::clone(session.current().unwrap().sequence());

    let err = session.select("bogo-sort").unwrap_err();
    assert_eq!(
        err,
        VizError::UnknownAlgorithm {
            id: "bogo-sort".to_string()
        }
    );

    let current = session.current().unwrap();
    assert_eq!(current.kind(), AlgorithmKind::MergeSort);
    assert_eq!(current.player().position(), 1);
    assert!(Rc::ptr_eq(&before, current.sequence()));
}

#[test]
fn test_empty_input_leaves_state_unchanged() {
    let mut session = Session::new(Catalog::builtin());
    session.select("bubble-sort").unwrap();
    assert_eq!(session.set_input(Vec::new(), None), Err(VizError::InvalidInput));
    assert_eq!(
        session.current().unwrap().input(),
        &[64, 34, 25, 12, 22, 11, 90]
    );
}

#[test]
fn test_on_start_runs_to_completion() {
    let mut session = Session::new(Catalog::builtin());
    session.select("selection-sort").unwrap();
    let total = session.current().unwrap().player().len();
    assert_eq!(session.on_start(&mut sink()), Ok(total));

    let player = session.current().unwrap().player();
    assert_eq!(player.state(), PlaybackState::Completed);
    assert_eq!(player.current_data(), &[11, 12, 22, 25, 34, 64, 90]);
}

#[test]
fn test_back_replays_from_start() {
    let mut session = Session::new(Catalog::builtin());
    session.select("quick-sort").unwrap();
    for _ in 0..3 {
        session.on_step(&mut sink()).unwrap();
    }

    let mut seen = Vec::new();
    let mut record = |_: &Step, index: usize, _: usize| -> Result<(), PresentationError> {
        seen.push(index);
        Ok(())
    };
    assert!(session.on_back(&mut record).unwrap());
    assert_eq!(seen, vec![0, 1]);
    assert_eq!(session.current().unwrap().player().position(), 2);
}

#[test]
fn test_reset_after_completion() {
    let mut session = Session::new(Catalog::builtin());
    session.select("linear-search").unwrap();
    session.on_start(&mut sink()).unwrap();
    session.on_reset();

    let player = session.current().unwrap().player();
    assert_eq!(player.position(), 0);
    assert_eq!(player.state(), PlaybackState::Idle);
    assert!(player.current_highlight().is_empty());
}

#[test]
fn test_catalog_groups() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.by_category(Category::Sorting).count(), 5);
    assert_eq!(catalog.by_category(Category::Searching).count(), 2);
    assert_eq!(catalog.by_category(Category::Graph).count(), 2);

    let dfs = catalog.select("depth-first-search").unwrap();
    assert_eq!(dfs.time_complexity, "O(V + E)");

    let bfs = catalog.select("breadth-first-search").unwrap();
    assert_eq!(bfs.category(), Category::Graph);
    assert_eq!(bfs.time_complexity, "O(V + E)");
}

#[test]
fn test_oversized_input_keeps_previous_selection() {
    let mut session = Session::new(Catalog::builtin());
    session.select("quick-sort").unwrap();
    let err = session.set_input((0..500).collect(), None).unwrap_err();
    assert!(matches!(err, VizError::InputTooLarge { len: 500, .. }));
    assert_eq!(
        session.current().unwrap().input(),
        &[64, 34, 25, 12, 22, 11, 90]
    );
}

#[test]
fn test_classify_labels() {
    assert_eq!(classify("O(1)"), 1);
    assert_eq!(classify("O(log n)"), 2);
    assert_eq!(classify("O(n)"), 3);
    assert_eq!(classify("O(n log n)"), 4);
    assert_eq!(classify("O(n²)"), 5);
    assert_eq!(classify("O(n^2)"), 5);
    assert_eq!(classify("unknown"), 3);
}

#[test]
fn test_growth_curve_for_catalog_labels() {
    let catalog = Catalog::builtin();
    let bubble = catalog.get(AlgorithmKind::BubbleSort).unwrap();
    let points = growth_curve(bubble.time_complexity);
    assert_eq!(points[3].input_size, 10_000);
    assert_eq!(points[3].operations, 100_000_000.0);

    let merge = catalog.get(AlgorithmKind::MergeSort).unwrap();
    assert_eq!(growth_curve(merge.time_complexity)[1].operations, 660.0);
}
