// Memoized enumeration engine

pub mod enumerator;
pub mod errors;
pub mod memo;

pub use enumerator::{run, RunOutcome};
pub use errors::EnumerateError;
pub use memo::{MemoStore, Signature};

/// Largest N whose count fits in a u64
///
/// C(36) = 11_959_798_385_860_453_492 fits; C(37) does not.
pub const MAX_N: u32 = 36;
