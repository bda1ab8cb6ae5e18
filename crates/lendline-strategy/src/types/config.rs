//! Strategy configuration documents.
//!
//! A [`StrategyConfig`] is loaded from TOML or JSON and resolved into a
//! [`Policy`]. Per-rating settings come from an optional override for the
//! rating, falling back field by field to the shared defaults.

use lendline_core::types::{Rating, RatingScale};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use super::{RatingPolicy, RatingRule};
use crate::policy::MINIMAL_INVESTMENT_INCREMENT;
use crate::{Policy, StrategyError, StrategyResult};

fn default_increment() -> Decimal {
    Decimal::from(MINIMAL_INVESTMENT_INCREMENT)
}

/// Partial per-rating settings.
///
/// Used both for the `[defaults]` table and for each `[overrides.<code>]`
/// table. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingEntry {
    /// Desired fraction of the portfolio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_share: Option<Decimal>,
    /// Fraction of the portfolio at which investing stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_share: Option<Decimal>,
    /// Visit longer terms first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_longer_terms: Option<bool>,
    /// Smallest investment into one loan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_investment: Option<Decimal>,
    /// Largest investment into one loan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_investment: Option<Decimal>,
    /// Largest fraction of a loan's amount to invest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_loan_share: Option<Decimal>,
    /// Shortest acceptable term in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_term: Option<u32>,
    /// Longest acceptable term in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_term: Option<u32>,
    /// Smallest acceptable loan amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_ask: Option<Decimal>,
    /// Largest acceptable loan amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_ask: Option<Decimal>,
}

impl RatingEntry {
    /// Fills every unset field from `fallback`.
    #[must_use]
    pub fn with_fallback(&self, fallback: &RatingEntry) -> RatingEntry {
        RatingEntry {
            target_share: self.target_share.or(fallback.target_share),
            maximum_share: self.maximum_share.or(fallback.maximum_share),
            prefer_longer_terms: self.prefer_longer_terms.or(fallback.prefer_longer_terms),
            minimum_investment: self.minimum_investment.or(fallback.minimum_investment),
            maximum_investment: self.maximum_investment.or(fallback.maximum_investment),
            maximum_loan_share: self.maximum_loan_share.or(fallback.maximum_loan_share),
            minimum_term: self.minimum_term.or(fallback.minimum_term),
            maximum_term: self.maximum_term.or(fallback.maximum_term),
            minimum_ask: self.minimum_ask.or(fallback.minimum_ask),
            maximum_ask: self.maximum_ask.or(fallback.maximum_ask),
        }
    }

    /// Turns a fully resolved entry into a rating policy.
    fn to_rating_policy(&self, rating: &Rating) -> StrategyResult<RatingPolicy> {
        let target_share = share(rating, "target_share", self.target_share)?;
        let maximum_share = share(rating, "maximum_share", self.maximum_share)?;
        let minimum_investment = required(rating, "minimum_investment", self.minimum_investment)?;
        let maximum_investment = required(rating, "maximum_investment", self.maximum_investment)?;

        let mut rule = RatingRule::new(minimum_investment, maximum_investment)
            .with_term_range(self.minimum_term, self.maximum_term)
            .with_ask_range(self.minimum_ask, self.maximum_ask);
        if let Some(loan_share) = self.maximum_loan_share {
            let loan_share = check_share(rating, "maximum_loan_share", loan_share)?;
            rule = rule.with_maximum_loan_share(loan_share);
        }

        Ok(RatingPolicy::from_rule(target_share, maximum_share, rule)
            .with_prefer_longer_terms(self.prefer_longer_terms.unwrap_or(false)))
    }
}

fn required<T>(rating: &Rating, field: &str, value: Option<T>) -> StrategyResult<T> {
    value.ok_or_else(|| StrategyError::missing_field(rating.code(), field))
}

fn share(rating: &Rating, field: &str, value: Option<Decimal>) -> StrategyResult<Decimal> {
    check_share(rating, field, required(rating, field, value)?)
}

fn check_share(rating: &Rating, field: &str, value: Decimal) -> StrategyResult<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(StrategyError::invalid_share(rating.code(), field, value));
    }
    Ok(value)
}

/// Investment strategy configuration.
///
/// # Example
///
/// ```rust
/// use lendline_strategy::types::StrategyConfig;
///
/// let config = StrategyConfig::from_toml_str(r#"
///     minimum_balance = 200
///     investment_ceiling = 100000
///
///     [defaults]
///     target_share = 0.1
///     maximum_share = 0.2
///     minimum_investment = 200
///     maximum_investment = 5000
///
///     [overrides.A]
///     target_share = 0.3
///     maximum_share = 0.4
/// "#).unwrap();
///
/// let policy = config.into_policy().unwrap();
/// assert_eq!(policy.scale().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// Smallest balance at which investing is allowed.
    pub minimum_balance: Decimal,
    /// Total invested above which investing stops.
    pub investment_ceiling: Decimal,
    /// Granularity of recommended amounts.
    #[serde(default = "default_increment")]
    pub investment_increment: Decimal,
    /// Rating codes from best to worst. The standard scale when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Vec<String>>,
    /// Settings shared by every rating.
    #[serde(default)]
    pub defaults: RatingEntry,
    /// Per-rating settings, keyed by rating code.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, RatingEntry>,
}

impl StrategyConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> StrategyResult<Self> {
        toml::from_str(text).map_err(|e| StrategyError::parse("toml", e))
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> StrategyResult<Self> {
        serde_json::from_str(text).map_err(|e| StrategyError::parse("json", e))
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> StrategyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| StrategyError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the configured rating scale.
    pub fn scale(&self) -> StrategyResult<RatingScale> {
        match &self.ratings {
            Some(codes) => Ok(RatingScale::new(codes)?),
            None => Ok(RatingScale::standard()),
        }
    }

    /// Resolves the settings of one rating, override first.
    #[must_use]
    pub fn entry_for(&self, rating: &Rating) -> RatingEntry {
        match self.overrides.get(rating.code()) {
            Some(entry) => entry.with_fallback(&self.defaults),
            None => self.defaults.clone(),
        }
    }

    /// Builds the policy described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is invalid, an override names a rating
    /// outside the scale, a required field is unset for some rating, a share
    /// lies outside `[0, 1]`, or the increment is not positive.
    pub fn into_policy(self) -> StrategyResult<Policy> {
        let scale = self.scale()?;

        for code in self.overrides.keys() {
            let rating = Rating::new(code)?;
            if !scale.contains(&rating) {
                return Err(StrategyError::unknown_rating(rating.code()));
            }
        }

        let mut rating_policies = Vec::with_capacity(scale.len());
        for rating in &scale {
            let entry = self.entry_for(rating);
            rating_policies.push((rating.clone(), entry.to_rating_policy(rating)?));
        }
        debug!(
            ratings = scale.len(),
            overrides = self.overrides.len(),
            "Resolved strategy configuration"
        );

        Policy::builder(scale)
            .minimum_balance(self.minimum_balance)
            .investment_ceiling(self.investment_ceiling)
            .investment_increment(self.investment_increment)
            .rating_policies(rating_policies)
            .build()
    }
}
