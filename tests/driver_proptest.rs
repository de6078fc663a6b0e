// Property tests for the driver against Iterator::fold as the model.
//
// Invariants exercised:
// - Fold equivalence: an index-driven run equals the native left fold for
//   arbitrary data and seed, with the stall guard on or off.
// - Stall cutoff: pinning the state source at an arbitrary index k turns
//   the run into a fold of the first k+1 elements; the stalled repeat of
//   step k is discarded.
// - Reduce equivalence: reduce_entries equals the native fold for
//   arbitrary data.
use proptest::prelude::*;
use step_fold::{reduce_entries, run, Driver, Halt};

proptest! {
    // Property: the index-driven driver is the left fold, guard on or off.
    #[test]
    fn prop_driver_equals_fold(data in proptest::collection::vec(any::<i32>(), 0..200),
                               seed in any::<i64>(),
                               safety in any::<bool>()) {
        let folded = data.iter().fold(seed, |acc, &x| acc * 31 + i64::from(x));
        let driven = run(
            |idx: Option<&usize>, _: Option<&i64>| Some(idx.map_or(0, |i| i + 1)),
            |&idx| idx >= data.len(),
            |&idx, acc| Some(acc.copied().unwrap_or(seed) * 31 + i64::from(data[idx])),
            Some(seed),
            None,
            safety,
        );
        prop_assert_eq!(driven, Some(folded));
    }

    // Property: a source that stops advancing at index k yields the fold
    // of data[..=k] and reports a stall.
    #[test]
    fn prop_stall_folds_prefix(data in proptest::collection::vec(any::<i32>(), 1..50),
                               k in 0usize..50) {
        prop_assume!(k < data.len());
        let halt = Driver::<usize, Vec<i32>>::new()
            .next_state(move |idx, _| Some(idx.map_or(0, |&i| (i + 1).min(k))))
            .should_stop(|_| false)
            .transform(|&idx, acc| {
                let mut next = acc.cloned().unwrap_or_default();
                next.push(data[idx]);
                Some(next)
            })
            .run_halt();

        let expected: Vec<i32> = data[..=k].to_vec();
        match halt {
            Halt::Stalled(result) => prop_assert_eq!(result, Some(expected)),
            other => prop_assert!(false, "expected a stall, got {:?}", other),
        }
    }

    // Property: reduce_entries is the left fold for any sequence.
    #[test]
    fn prop_reduce_equals_fold(data in proptest::collection::vec(any::<u32>(), 0..200),
                               z in any::<u64>()) {
        let folded = data.iter().fold(z, |acc, &x| acc.rotate_left(1) ^ u64::from(x));
        let reduced = reduce_entries(&data, |acc, &x| acc.rotate_left(1) ^ u64::from(x), z);
        prop_assert_eq!(reduced, folded);
    }
}
