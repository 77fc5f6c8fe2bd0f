// Memoized push/pop enumerator with trace recording

use crate::engine::errors::EnumerateError;
use crate::engine::memo::{MemoStore, Signature};
use crate::engine::MAX_N;
use crate::trace::{EventKind, TraceEvent, TraceRecorder};

/// Everything a completed run produces
///
/// The trace is the run-ordered log of first-visit events; the memo maps
/// every resolved signature to its final count. Both are immutable after the
/// run and can be handed to the replay controller and tree aggregator freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The N this run enumerated
    pub n: u32,

    /// Number of valid interleavings of N pushes and N pops (the N-th
    /// Catalan number)
    pub result: u64,

    /// First-visit trace events in issuance order
    pub trace: Vec<TraceEvent>,

    /// Final resolved value of every signature the run visited
    pub memo: MemoStore,
}

/// Per-run mutable state, created fresh for every `run` invocation
///
/// Owning the memo and recorder here keeps a run's side channel isolated:
/// nothing survives into the next run.
struct RunContext {
    n: u32,
    memo: MemoStore,
    recorder: TraceRecorder,
}

impl RunContext {
    fn new(n: u32) -> Self {
        RunContext {
            n,
            memo: MemoStore::new(),
            recorder: TraceRecorder::new(),
        }
    }

    /// Count valid completions from `sig` at recursion depth `depth`.
    ///
    /// Depth-first, push branch before pop branch. Only first visits emit
    /// trace events: memo hits return silently, and infeasible states are
    /// neither traced nor memoized (matching the reference behavior; see
    /// DESIGN.md for the trade-off).
    fn count(&mut self, sig: Signature, depth: u32) -> Result<u64, EnumerateError> {
        if let Some(result) = self.memo.get(sig) {
            return Ok(result);
        }

        if !sig.is_feasible(self.n) {
            return Ok(0);
        }

        if sig.a + sig.b == 2 * self.n {
            self.recorder.append(sig, depth, EventKind::TerminalSuccess);
            self.memo.insert(sig, 1);
            return Ok(1);
        }

        // Interior node: the push marker precedes the entire push subtree,
        // the pop marker precedes the entire pop subtree.
        self.recorder.append(sig, depth, EventKind::DescendPush);
        let pushed = self.count(Signature::new(sig.a + 1, sig.b), depth + 1)?;

        self.recorder.append(sig, depth, EventKind::DescendPop);
        let popped = self.count(Signature::new(sig.a, sig.b + 1), depth + 1)?;

        let total = pushed
            .checked_add(popped)
            .ok_or(EnumerateError::Overflow { sig })?;
        self.memo.insert(sig, total);
        Ok(total)
    }
}

/// Run the enumerator for `n` and return the count, trace, and memo snapshot.
///
/// Fails with [`EnumerateError::InvalidInput`] for negative `n` before any
/// state is created, and with [`EnumerateError::Overflow`] when the count
/// exceeds u64 (first possible at n = 37; see [`MAX_N`]).
pub fn run(n: i64) -> Result<RunOutcome, EnumerateError> {
    if n < 0 {
        return Err(EnumerateError::InvalidInput { n });
    }

    // MAX_N bounds the result below u64::MAX, so the u32 cast cannot be the
    // limiting factor; still, reject absurd inputs up front with the same
    // overflow class they would hit during accumulation.
    if n > MAX_N as i64 {
        return Err(EnumerateError::Overflow {
            sig: Signature::new(0, 0),
        });
    }

    let mut ctx = RunContext::new(n as u32);
    let result = ctx.count(Signature::new(0, 0), 0)?;

    Ok(RunOutcome {
        n: ctx.n,
        result,
        trace: ctx.recorder.into_events(),
        memo: ctx.memo,
    })
}
