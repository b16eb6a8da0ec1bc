//! Scanner: match predicate, depth-first walker, report sinks, placeholder fallback.

pub mod fallback;
pub mod predicate;
pub mod report;
pub mod walker;
