//! Streams of `i64` keys for tests and benchmarks

mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
