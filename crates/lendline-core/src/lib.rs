//! # Lendline Core
//!
//! Core domain types for the Lendline loan selection library.
//!
//! This crate provides the vocabulary shared by the strategy layer:
//!
//! - **Ratings**: Opaque rating keys and the ordered scale they belong to
//! - **Loans**: Marketplace loans offered for investment
//! - **Portfolio snapshots**: Balance, total invested and per-rating shares
//!
//! ## Design Philosophy
//!
//! - **Exact arithmetic**: Every currency amount and share is a `Decimal`
//! - **Immutable snapshots**: Values are built once and only read afterwards
//! - **Explicit taxonomy**: Ratings come from a supplied scale, not a closed enum
//!
//! ## Example
//!
//! ```rust
//! use lendline_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let scale = RatingScale::standard();
//! let a = scale.parse("A").unwrap();
//! let loan = Loan::new(1, a.clone(), 36, dec!(150000), dec!(40000));
//!
//! let portfolio = PortfolioOverview::from_investments(dec!(5000), [(a, dec!(10000))]).unwrap();
//! assert_eq!(portfolio.shares().share(loan.rating()), dec!(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Loan, PortfolioOverview, Rating, RatingScale, RatingShares};
    pub use rust_decimal::Decimal;
}
