//! Rating-driven loan selection.
//!
//! This module turns a portfolio snapshot and a set of offered loans into an
//! ordered list of loans worth pursuing:
//!
//! - **Demand ranking**: Which ratings the portfolio needs most
//! - **Partitioning**: Offered loans grouped by rating
//! - **Selection**: Loans ordered by demand and term, filtered per rating
//!
//! All functions are pure - they take snapshots and return new collections
//! without modifying state.
//!
//! # Example
//!
//! ```rust,ignore
//! use lendline_strategy::selection::*;
//!
//! let order = rank_by_demand(portfolio.shares(), &policy);
//! let by_rating = partition_by_rating(&loans);
//! let selected = select_matching_loans(&loans, &portfolio, &policy);
//! ```

mod partition;
mod ranking;
mod selector;

pub use partition::{partition_by_rating, LoansByRating};
pub use ranking::rank_by_demand;
pub use selector::select_matching_loans;
