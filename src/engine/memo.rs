// Memoization store keyed by call signature

use rustc_hash::FxHashMap;
use std::fmt;

/// A call signature: `a` pushes and `b` pops issued so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    pub a: u32,
    pub b: u32,
}

impl Signature {
    pub fn new(a: u32, b: u32) -> Self {
        Signature { a, b }
    }

    /// Whether this state can still reach a valid interleaving for `n`
    ///
    /// Infeasible when pops outnumber pushes or either budget is exceeded.
    pub fn is_feasible(&self, n: u32) -> bool {
        self.a >= self.b && self.a <= n && self.b <= n
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}, {})", self.a, self.b)
    }
}

/// Resolved results per signature, populated during a single run
///
/// Write-once per key: the enumerator resolves each signature exactly once,
/// and every later lookup is a silent cache hit. A fresh store is created
/// for every run; stores are never reused across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoStore {
    entries: FxHashMap<Signature, u64>,
}

impl MemoStore {
    pub fn new() -> Self {
        MemoStore {
            entries: FxHashMap::default(),
        }
    }

    pub fn get(&self, sig: Signature) -> Option<u64> {
        self.entries.get(&sig).copied()
    }

    pub fn contains(&self, sig: Signature) -> bool {
        self.entries.contains_key(&sig)
    }

    /// Record the resolved result for `sig`.
    ///
    /// Keys are write-once: if `sig` already holds a value, the first value
    /// is kept and the new one is ignored.
    pub fn insert(&mut self, sig: Signature, result: u64) {
        debug_assert!(
            !self.entries.contains_key(&sig),
            "signature {} resolved twice",
            sig
        );
        self.entries.entry(sig).or_insert(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all resolved signatures in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Signature, u64)> + '_ {
        self.entries.iter().map(|(sig, result)| (*sig, *result))
    }
}
