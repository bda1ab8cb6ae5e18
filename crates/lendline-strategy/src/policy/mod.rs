//! Investment policy representation and construction.
//!
//! This module provides the immutable [`Policy`] type and the
//! [`PolicyBuilder`] that validates it against its rating scale.

mod builder;
#[allow(clippy::module_inception)]
mod policy;

pub use builder::PolicyBuilder;
pub use policy::{Policy, MINIMAL_INVESTMENT_INCREMENT};
