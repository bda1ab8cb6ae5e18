//! Domain types for loan selection.
//!
//! - [`Rating`]: Opaque risk category key
//! - [`RatingScale`]: Ordered enumeration of ratings
//! - [`Loan`]: Marketplace loan offered for investment
//! - [`RatingShares`]: Ordered rating → share map
//! - [`PortfolioOverview`]: Immutable portfolio snapshot

mod loan;
mod portfolio;
mod rating;

pub use loan::Loan;
pub use portfolio::{PortfolioOverview, RatingShares};
pub use rating::{Rating, RatingScale};
