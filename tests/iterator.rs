use std::cmp::Ordering;

use proptest::prelude::*;

use letterseq::codec::{from_integer, normalize, to_integer};
use letterseq::{Alphabet, LetterIterator};

fn letters(start: &str) -> LetterIterator {
    LetterIterator::new(start, Alphabet::latin_upper()).unwrap()
}

#[test]
fn bounded_iteration_stops_before_the_end_label() {
    let mut iter = letters("A").with_end("D").unwrap();
    assert_eq!(iter.next().as_deref(), Some("A"));
    assert_eq!(iter.next().as_deref(), Some("B"));
    assert_eq!(iter.next().as_deref(), Some("C"));
    assert_eq!(iter.next(), None);
    // Exhaustion is terminal.
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn stride_skips_but_first_value_is_the_start() {
    let mut iter = letters("A").with_stride(2).unwrap();
    assert_eq!(iter.next().as_deref(), Some("A"));
    assert_eq!(iter.next().as_deref(), Some("C"));
    assert_eq!(iter.next().as_deref(), Some("E"));
}

#[test]
fn stride_stops_when_a_step_lands_on_the_end() {
    // Every intermediate label is visited, so a stride of 2 still stops
    // at "D" instead of jumping past it.
    let labels: Vec<String> = letters("A").with_end("D").unwrap().with_stride(2).unwrap().collect();
    assert_eq!(labels, ["A", "C"]);
}

#[test]
fn start_equal_to_end_yields_nothing() {
    let mut iter = letters("D").with_end("D").unwrap();
    assert_eq!(iter.next(), None);
}

#[test]
fn end_matching_is_exact_string_equality() {
    // "AAD" equals "D" in value but not as a string, so the bound is
    // never hit and iteration runs on past it.
    let labels: Vec<String> = letters("C").with_end("AAD").unwrap().take(3).collect();
    assert_eq!(labels, ["C", "D", "E"]);
}

#[test]
fn carry_keeps_the_width_of_the_start_label() {
    let labels: Vec<String> = letters("AAY").take(4).collect();
    assert_eq!(labels, ["AAY", "AAZ", "ABA", "ABB"]);
}

#[test]
fn column_growth_over_a_custom_alphabet() {
    let alphabet = Alphabet::new("012").unwrap();
    let labels: Vec<String> = LetterIterator::new("2", alphabet).unwrap().take(4).collect();
    assert_eq!(labels, ["2", "10", "11", "12"]);
}

proptest! {
    #[test]
    fn iteration_is_strictly_increasing(
        start_value in 0u64..700_000u64,
        stride in 1usize..4,
        takes in 2usize..24,
    ) {
        let alphabet = Alphabet::latin_upper();
        let padded = from_integer(start_value, &alphabet, 8).unwrap();
        let start = normalize(&padded, &alphabet);
        let labels: Vec<String> = LetterIterator::new(&start, alphabet.clone())
            .unwrap()
            .with_stride(stride)
            .unwrap()
            .take(takes)
            .collect();
        prop_assert_eq!(labels.len(), takes);
        for pair in labels.windows(2) {
            prop_assert_eq!(
                letterseq::codec::compare(&pair[0], &pair[1], &alphabet).unwrap(),
                Ordering::Less,
                "{} should precede {}", pair[0], pair[1]
            );
        }
    }

    #[test]
    fn each_step_advances_by_exactly_the_stride(
        start_value in 0u64..100_000u64,
        stride in 1usize..5,
    ) {
        let alphabet = Alphabet::latin_upper();
        let padded = from_integer(start_value, &alphabet, 8).unwrap();
        let start = normalize(&padded, &alphabet);
        let mut iter = LetterIterator::new(&start, alphabet.clone())
            .unwrap()
            .with_stride(stride)
            .unwrap();
        let first = iter.next().unwrap();
        prop_assert_eq!(to_integer(&first, &alphabet).unwrap(), start_value);
        let second = iter.next().unwrap();
        prop_assert_eq!(
            to_integer(&second, &alphabet).unwrap(),
            start_value + stride as u64
        );
    }
}
