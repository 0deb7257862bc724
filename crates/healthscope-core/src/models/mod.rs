//! Domain models for the HealthScope system.

mod condition;
mod matching;
mod symptom;

pub use condition::*;
pub use matching::*;
pub use symptom::*;
