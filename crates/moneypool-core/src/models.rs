//! Pool records as delivered by the pool API

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};

/// One contribution to a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Contributor display name
    pub name: String,
    /// Whole currency units
    pub base: i64,
    /// Cents, 0..=99
    pub fraction: i64,
    /// DD.MM.YYYY, may be missing on older records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Transaction {
    /// Create a dated transaction
    pub fn new(name: &str, base: i64, fraction: i64, date: &str) -> Self {
        Self {
            name: name.to_string(),
            base,
            fraction,
            date: Some(date.to_string()),
        }
    }

    /// Check the amount fields
    pub fn validate_amount(&self) -> CoreResult<()> {
        if self.base < 0 {
            return Err(CoreError::InvalidAmount {
                contributor: self.name.clone(),
                reason: format!("base {} is negative", self.base),
            });
        }
        if !(0..=99).contains(&self.fraction) {
            return Err(CoreError::InvalidAmount {
                contributor: self.name.clone(),
                reason: format!("fraction {} is outside 0..=99", self.fraction),
            });
        }
        Ok(())
    }

    /// Exact monetary value, `base + fraction / 100`
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.base) + Decimal::new(self.fraction, 2)
    }
}

/// A pool as returned by `GET <endpoint>/<pool id>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRecord {
    /// Identifier, doubles as the payment memo keyword
    pub name: String,
    /// Display title
    pub title: String,
    /// Whether contributions are still accepted
    #[serde(default)]
    pub open: bool,
    /// Oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
}

// The pool API encodes an empty list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Transaction>>::deserialize(deserializer)?.unwrap_or_default())
}
