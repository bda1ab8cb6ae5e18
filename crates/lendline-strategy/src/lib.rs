//! # Lendline Strategy
//!
//! Rating-driven loan selection for a marketplace lending portfolio.
//!
//! Given a snapshot of the portfolio and the loans currently on offer, this
//! crate decides which loans are worth pursuing, in what order, and how much
//! to invest into each one.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every decision is computed from explicit inputs
//! - **Total policies**: A [`Policy`] covers every rating on its scale, checked once at build time
//! - **No-match is not an error**: A closed gate or unsuitable loan yields an empty list or zero
//!
//! ## Pipeline
//!
//! 1. [`gate::is_admissible`] checks balance and investment ceiling
//! 2. [`selection::rank_by_demand`] orders ratings by how under-invested they are
//! 3. [`selection::partition_by_rating`] groups the offered loans by rating
//! 4. [`selection::select_matching_loans`] walks the ranking and filters each group
//! 5. [`amount::recommend_amount`] sizes a single investment
//!
//! ## Quick Start
//!
//! ```rust
//! use lendline_core::prelude::*;
//! use lendline_strategy::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let config = StrategyConfig::from_toml_str(r#"
//!     minimum_balance = 200
//!     investment_ceiling = 100000
//!
//!     [defaults]
//!     target_share = 0.125
//!     maximum_share = 0.2
//!     minimum_investment = 200
//!     maximum_investment = 1000
//! "#).unwrap();
//! let strategy = SimpleStrategy::from_config(config).unwrap();
//!
//! let scale = RatingScale::standard();
//! let a = scale.parse("A").unwrap();
//! let portfolio = PortfolioOverview::from_investments(
//!     dec!(5000),
//!     [(a.clone(), dec!(1000)), (scale.parse("B").unwrap(), dec!(9000))],
//! ).unwrap();
//!
//! let loans = vec![Loan::new(7, a, 36, dec!(100000), dec!(20000))];
//! let recommendations = strategy.recommendations(&loans, &portfolio);
//!
//! assert_eq!(recommendations.len(), 1);
//! assert_eq!(recommendations[0].amount, dec!(1000));
//! ```
//!
//! ## Module Overview
//!
//! - [`amount`] - Investment amount recommendation
//! - [`error`] - Construction and configuration errors
//! - [`gate`] - Portfolio admission gate
//! - [`policy`] - Validated strategy policy and its builder
//! - [`selection`] - Demand ranking, partitioning and loan selection
//! - [`strategy`] - Strategy trait and the policy-driven implementation
//! - [`types`] - Rating policies, rules and configuration documents

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod amount;
pub mod error;
pub mod gate;
pub mod policy;
pub mod selection;
pub mod strategy;
pub mod types;

// Re-export error types at crate root
pub use error::{StrategyError, StrategyResult};

// Re-export policy types
pub use policy::{Policy, PolicyBuilder, MINIMAL_INVESTMENT_INCREMENT};

// Re-export building blocks
pub use types::{
    AcceptanceFn, InvestmentRange, RangeFn, RatingEntry, RatingPolicy, RatingRule, StrategyConfig,
};

// Re-export the decision functions
pub use amount::{recommend_amount, round_down_to_increment};
pub use gate::is_admissible;
pub use selection::{partition_by_rating, rank_by_demand, select_matching_loans, LoansByRating};
pub use strategy::{InvestmentStrategy, Recommendation, SimpleStrategy};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lendline_strategy::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{StrategyError, StrategyResult};

    // Policy
    pub use crate::policy::{Policy, PolicyBuilder};
    pub use crate::types::{InvestmentRange, RatingPolicy, RatingRule, StrategyConfig};

    // Strategy
    pub use crate::strategy::{InvestmentStrategy, Recommendation, SimpleStrategy};

    // Decision functions
    pub use crate::amount::recommend_amount;
    pub use crate::gate::is_admissible;
    pub use crate::selection::{partition_by_rating, rank_by_demand, select_matching_loans};
}
