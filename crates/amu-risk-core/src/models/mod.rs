//! Domain models for AMU risk assessment.

mod animal;
mod assessment;

pub use animal::*;
pub use assessment::*;
