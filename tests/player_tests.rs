// Integration tests for step playback

use algoviz::algorithm::AlgorithmKind;
use algoviz::error::{PresentationError, VizError};
use algoviz::player::console::ConsoleAdapter;
use algoviz::player::{PlaybackState, StepPlayer};
use algoviz::steps::{generate, Step};
use std::rc::Rc;

/// Records every notification as (index, total, description)
#[derive(Default)]
struct Recorder {
    seen: Vec<(usize, usize, String)>,
}

impl algoviz::player::PresentationAdapter for Recorder {
    fn on_step(&mut self, step: &Step, index: usize, total: usize) -> Result<(), PresentationError> {
        self.seen.push((index, total, step.description.clone()));
        Ok(())
    }
}

fn bubble_player() -> StepPlayer {
    let seq = generate(AlgorithmKind::BubbleSort, &[64, 34, 25, 12, 22, 11, 90], None).unwrap();
    StepPlayer::new(Rc::new(seq))
}

#[test]
fn test_advance_walks_through_states() {
    let mut player = bubble_player();
    let mut rec = Recorder::default();
    let total = player.len();
    assert_eq!(player.state(), PlaybackState::Idle);

    for i in 0..total {
        assert!(player.advance_one(&mut rec).unwrap());
        let expected = if i + 1 == total {
            PlaybackState::Completed
        } else {
            PlaybackState::Stepping
        };
        assert_eq!(player.state(), expected);
    }

    assert_eq!(rec.seen.len(), total);
    assert!(!player.advance_one(&mut rec).unwrap());
    assert_eq!(rec.seen.len(), total, "no callback past the end");
    assert_eq!(player.state(), PlaybackState::Completed);
}

#[test]
fn test_reset_then_run_repeats_notifications() {
    let mut player = bubble_player();

    let mut first = Recorder::default();
    player.run_to_completion(&mut first).unwrap();

    player.reset();
    assert_eq!(player.state(), PlaybackState::Idle);
    assert_eq!(player.position(), 0);

    let mut second = Recorder::default();
    player.run_to_completion(&mut second).unwrap();
    assert_eq!(first.seen, second.seen);

    let indices: Vec<usize> = first.seen.iter().map(|(i, _, _)| *i).collect();
    assert_eq!(indices, (0..player.len()).collect::<Vec<_>>());
}

#[test]
fn test_adapter_failure_keeps_position() {
    let mut player = bubble_player();
    let mut calls = 0;
    let mut flaky = |_: &Step, index: usize, _: usize| -> Result<(), PresentationError> {
        calls += 1;
        if index == 3 {
            Err(PresentationError::new("display gone"))
        } else {
            Ok(())
        }
    };

    let err = player.run_to_completion(&mut flaky).unwrap_err();
    assert_eq!(
        err,
        VizError::Presentation {
            index: 3,
            source: PresentationError::new("display gone")
        }
    );
    assert_eq!(calls, 4);
    assert_eq!(player.position(), 3);
    assert!(!player.is_running());
    assert_eq!(player.state(), PlaybackState::Stepping);
}

#[test]
fn test_players_share_one_sequence() {
    let seq = Rc::new(generate(AlgorithmKind::QuickSort, &[3, 1, 2], None).unwrap());
    let mut a = StepPlayer::new(Rc::clone(&seq));
    let b = StepPlayer::new(Rc::clone(&seq));
    assert_eq!(Rc::strong_count(&seq), 3);

    a.run_to_completion(&mut Recorder::default()).unwrap();
    assert!(a.is_at_end());
    assert_eq!(b.position(), 0);
    assert_eq!(a.current_data(), &[1, 2, 3]);
    assert_eq!(b.current_data(), &[3, 1, 2]);
}

#[test]
fn test_run_until_stops_cooperatively() {
    let mut player = bubble_player();
    let mut budget = 4;
    let applied = player
        .run_until(&mut Recorder::default(), || {
            if budget == 0 {
                return true;
            }
            budget -= 1;
            false
        })
        .unwrap();
    assert_eq!(applied, 4);
    assert_eq!(player.position(), 4);
    assert!(!player.is_running());
}

#[test]
fn test_console_adapter_output() {
    let seq = generate(AlgorithmKind::BinarySearch, &[11, 12, 22, 25, 34, 64, 90], Some(34)).unwrap();
    let mut player = StepPlayer::new(Rc::new(seq));
    let mut console = ConsoleAdapter::new(Vec::new());
    player.run_to_completion(&mut console).unwrap();

    let text = String::from_utf8(console.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "-- 4 steps --");
    assert_eq!(lines.last(), Some(&"[4/4] found: Found 34 at index 4"));
}
