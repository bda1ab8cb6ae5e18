//! Strategy building blocks.
//!
//! - [`RatingPolicy`]: per-rating share targets, acceptability and sizing
//! - [`RatingRule`]: declarative acceptability and sizing rule
//! - [`StrategyConfig`]: TOML/JSON configuration resolved into a policy

mod config;
mod rating_policy;
mod rule;

pub use config::{RatingEntry, StrategyConfig};
pub use rating_policy::{AcceptanceFn, InvestmentRange, RangeFn, RatingPolicy};
pub use rule::RatingRule;
