// Integration tests for the memoized enumerator and its trace

use catatrace::engine::{run, EnumerateError, Signature, MAX_N};
use catatrace::trace::EventKind;

#[test]
fn counts_match_catalan_numbers() {
    let expected: [u64; 11] = [1, 1, 2, 5, 14, 42, 132, 429, 1430, 4862, 16796];
    for (n, want) in expected.iter().enumerate() {
        let outcome = run(n as i64).expect("run failed");
        assert_eq!(outcome.result, *want, "wrong count for N = {}", n);
    }
}

#[test]
fn zero_run_is_a_single_success() {
    let outcome = run(0).expect("run failed");

    assert_eq!(outcome.result, 1);
    assert_eq!(outcome.trace.len(), 1);

    let event = &outcome.trace[0];
    assert_eq!(event.kind, EventKind::TerminalSuccess);
    assert_eq!(event.sig, Signature::new(0, 0));
    assert_eq!(event.depth, 0);
    assert_eq!(event.sequence, 0);

    assert_eq!(outcome.memo.get(Signature::new(0, 0)), Some(1));
}

#[test]
fn negative_input_is_rejected() {
    assert_eq!(run(-1), Err(EnumerateError::InvalidInput { n: -1 }));
    assert_eq!(run(i64::MIN), Err(EnumerateError::InvalidInput { n: i64::MIN }));
}

#[test]
fn count_overflow_is_reported_not_wrapped() {
    // C(36) is the last Catalan number that fits in a u64
    let outcome = run(MAX_N as i64).expect("run failed");
    assert_eq!(outcome.result, 11_959_798_385_860_453_492);

    assert!(matches!(
        run(MAX_N as i64 + 1),
        Err(EnumerateError::Overflow { .. })
    ));
}

#[test]
fn reruns_are_deterministic() {
    let first = run(2).expect("run failed");
    let second = run(2).expect("run failed");

    assert_eq!(first.trace, second.trace);
    assert_eq!(first.memo, second.memo);
    assert_eq!(first.result, second.result);
}

#[test]
fn n2_trace_is_the_exact_preorder_walk() {
    let outcome = run(2).expect("run failed");
    assert_eq!(outcome.result, 2);

    // (kind, a, b, depth) in issuance order; the push subtree of an interior
    // node completes before its pop marker appears.
    let expected = [
        (EventKind::DescendPush, 0, 0, 0),
        (EventKind::DescendPush, 1, 0, 1),
        (EventKind::DescendPush, 2, 0, 2),
        (EventKind::DescendPop, 2, 0, 2),
        (EventKind::DescendPush, 2, 1, 3),
        (EventKind::DescendPop, 2, 1, 3),
        (EventKind::TerminalSuccess, 2, 2, 4),
        (EventKind::DescendPop, 1, 0, 1),
        (EventKind::DescendPush, 1, 1, 2),
        (EventKind::DescendPop, 1, 1, 2),
        (EventKind::DescendPop, 0, 0, 0),
    ];

    assert_eq!(outcome.trace.len(), expected.len());
    for (i, (kind, a, b, depth)) in expected.iter().enumerate() {
        let event = &outcome.trace[i];
        assert_eq!(event.sequence, i as u64);
        assert_eq!(event.kind, *kind, "kind mismatch at event {}", i);
        assert_eq!(event.sig, Signature::new(*a, *b), "sig mismatch at event {}", i);
        assert_eq!(event.depth, *depth, "depth mismatch at event {}", i);
    }
}

#[test]
fn n3_starts_with_the_push_first_descent() {
    let outcome = run(3).expect("run failed");
    assert_eq!(outcome.result, 5);

    let first = &outcome.trace[0];
    assert_eq!(first.kind, EventKind::DescendPush);
    assert_eq!(first.sig, Signature::new(0, 0));
    assert_eq!(first.depth, 0);

    let second = &outcome.trace[1];
    assert_eq!(second.kind, EventKind::DescendPush);
    assert_eq!(second.sig, Signature::new(1, 0));
    assert_eq!(second.depth, 1);
}

#[test]
fn memo_hits_are_silent() {
    // Each signature is visited once: at most one push marker per signature,
    // even though e.g. (1, 1) for N = 3 is reachable along two call paths.
    for n in 1..=6 {
        let outcome = run(n).expect("run failed");

        let mut push_sigs = std::collections::HashSet::new();
        for event in &outcome.trace {
            if event.kind == EventKind::DescendPush {
                assert!(
                    push_sigs.insert(event.sig),
                    "{} descended twice for N = {}",
                    event.sig,
                    n
                );
            }
        }
    }
}

#[test]
fn trace_and_memo_cover_exactly_the_feasible_signatures() {
    for n in 0..=6u32 {
        let outcome = run(n as i64).expect("run failed");

        // Every feasible signature is reachable, and only (n, n) terminates
        // successfully, so the trace holds two markers per interior node and
        // one for the success leaf.
        let feasible = ((n + 1) * (n + 2) / 2) as usize;
        assert_eq!(outcome.trace.len(), feasible * 2 - 1);
        assert_eq!(outcome.memo.len(), feasible);

        let successes = outcome
            .trace
            .iter()
            .filter(|e| e.kind == EventKind::TerminalSuccess)
            .count();
        assert_eq!(successes, 1);

        // Infeasible states are neither traced nor memoized
        for event in &outcome.trace {
            assert!(event.sig.is_feasible(n));
        }
        assert_eq!(outcome.memo.get(Signature::new(n + 1, 0)), None);
    }
}

#[test]
fn sequences_match_append_order() {
    let outcome = run(4).expect("run failed");
    for (i, event) in outcome.trace.iter().enumerate() {
        assert_eq!(event.sequence, i as u64);
    }
}

#[test]
fn root_memo_entry_holds_the_result() {
    for n in 0..=8 {
        let outcome = run(n).expect("run failed");
        assert_eq!(outcome.memo.get(Signature::new(0, 0)), Some(outcome.result));
    }
}
