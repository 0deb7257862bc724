//! Export of analysis results for display front ends.

mod summary;

pub use summary::*;
