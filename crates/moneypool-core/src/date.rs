//! `DD.MM.YYYY` transaction dates

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

/// A transaction date split into its original components.
///
/// The components keep the exact text from the record so a shortened date
/// reads the same as the full one, e.g. `05.03.2023` becomes `05.03.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl PoolDate {
    /// Parse a `DD.MM.YYYY` string, rejecting anything that is not a real calendar date
    pub fn parse(value: &str) -> CoreResult<Self> {
        static DATE_PATTERN: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
        let date_regex = DATE_PATTERN.get_or_init(|| {
            regex::Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").expect("date pattern is valid")
        });

        let invalid = || CoreError::InvalidDate { value: value.to_string() };

        let caps = date_regex.captures(value.trim()).ok_or_else(invalid)?;
        let day = caps[1].to_string();
        let month = caps[2].to_string();
        let year = caps[3].to_string();

        let d: u32 = day.parse().map_err(|_| invalid())?;
        let m: u32 = month.parse().map_err(|_| invalid())?;
        let y: i32 = year.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)?;

        Ok(Self { day, month, year })
    }

    /// Day and month with a trailing dot, year dropped
    pub fn short(&self) -> String {
        format!("{}.{}.", self.day, self.month)
    }
}

impl std::str::FromStr for PoolDate {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoolDate::parse(s)
    }
}

impl std::fmt::Display for PoolDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.day, self.month, self.year)
    }
}
