/// Tests for candidate chain resolution
/// Covers precedence order, short-circuiting, and the unresolved path

use std::{cell::Cell, rc::Rc};

use kickoff_server::{resolve, shared::ExperienceId, CandidateSource, Resolution};

struct CountingSource {
    label: &'static str,
    result: Option<ExperienceId>,
    calls: Rc<Cell<usize>>,
}

impl CountingSource {
    fn new(label: &'static str, result: Option<ExperienceId>) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                label,
                result,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl CandidateSource for CountingSource {
    fn label(&self) -> &'static str {
        self.label
    }

    fn candidate(&mut self) -> Option<ExperienceId> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

#[test]
fn single_valid_source_wins_regardless_of_position() {
    for position in 0..3 {
        let mut chain: Vec<Box<dyn CandidateSource>> = Vec::new();
        for slot in 0..3 {
            let result = if slot == position {
                Some(ExperienceId::experience("Winner"))
            } else {
                None
            };
            let (source, _) = CountingSource::new("Slot", result);
            chain.push(Box::new(source));
        }

        assert_eq!(
            resolve(&mut chain),
            Resolution::Resolved {
                id: ExperienceId::experience("Winner"),
                source: "Slot",
            }
        );
    }
}

#[test]
fn first_declared_source_wins_and_the_rest_are_discarded() {
    let (first, first_calls) =
        CountingSource::new("First", Some(ExperienceId::experience("FromFirst")));
    let (second, second_calls) =
        CountingSource::new("Second", Some(ExperienceId::experience("FromSecond")));
    let (third, third_calls) =
        CountingSource::new("Third", Some(ExperienceId::experience("FromThird")));
    let mut chain: Vec<Box<dyn CandidateSource>> =
        vec![Box::new(first), Box::new(second), Box::new(third)];

    let resolution = resolve(&mut chain);

    assert_eq!(
        resolution,
        Resolution::Resolved {
            id: ExperienceId::experience("FromFirst"),
            source: "First",
        }
    );
    // the winner ran exactly once; lower tiers at most once, their output unused
    assert_eq!(first_calls.get(), 1);
    assert!(second_calls.get() <= 1);
    assert!(third_calls.get() <= 1);
}

#[test]
fn sources_above_the_winner_run_exactly_once() {
    let (empty, empty_calls) = CountingSource::new("Empty", None);
    let (winner, winner_calls) =
        CountingSource::new("Winner", Some(ExperienceId::experience("Foo")));
    let mut chain: Vec<Box<dyn CandidateSource>> = vec![Box::new(empty), Box::new(winner)];

    resolve(&mut chain);

    assert_eq!(empty_calls.get(), 1);
    assert_eq!(winner_calls.get(), 1);
}

#[test]
fn empty_chain_is_unresolved() {
    let mut chain: Vec<Box<dyn CandidateSource>> = Vec::new();
    assert_eq!(resolve(&mut chain), Resolution::Unresolved);
}

#[test]
fn all_empty_sources_are_unresolved_with_no_synthesized_fallback() {
    let (first, first_calls) = CountingSource::new("First", None);
    let (second, second_calls) = CountingSource::new("Second", None);
    let mut chain: Vec<Box<dyn CandidateSource>> = vec![Box::new(first), Box::new(second)];

    assert_eq!(resolve(&mut chain), Resolution::Unresolved);
    assert_eq!(first_calls.get(), 1);
    assert_eq!(second_calls.get(), 1);
}

#[test]
fn invalid_candidates_are_skipped() {
    // an empty name is not a valid identifier; the chain must move past it
    let (invalid, _) = CountingSource::new("Invalid", Some(ExperienceId::experience("")));
    let (fallback, _) = CountingSource::new("Fallback", Some(ExperienceId::experience("Bar")));
    let mut chain: Vec<Box<dyn CandidateSource>> = vec![Box::new(invalid), Box::new(fallback)];

    assert_eq!(
        resolve(&mut chain),
        Resolution::Resolved {
            id: ExperienceId::experience("Bar"),
            source: "Fallback",
        }
    );
}
