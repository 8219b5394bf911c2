//! Pool view model
//!
//! Turns a [`PoolRecord`] into the values the page shows: the rounded total,
//! per-transaction amount and date strings, newest-first row order, and the
//! contribution notice. Building is pure; the record is never modified.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::date::PoolDate;
use crate::error::{CoreError, CoreResult};
use crate::models::{PoolRecord, Transaction};

/// Shown for a zero fraction and for a missing date
pub const PLACEHOLDER: &str = "-";

/// Informational tags every pool carries
pub const FIXED_TAGS: [&str; 2] = ["No Goal", "No Limit"];

/// Pool status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Open,
    Closed,
}

impl From<bool> for PoolStatus {
    fn from(open: bool) -> Self {
        if open {
            PoolStatus::Open
        } else {
            PoolStatus::Closed
        }
    }
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolStatus::Open => write!(f, "Open"),
            PoolStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// What the page says below the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Pool is open: ask for contributions, memo must start with `keyword`
    Invite { keyword: String },
    /// Pool is closed
    ThankYou,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub contributor: String,
    pub amount: String,
    pub date: String,
}

/// Display-ready pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolView {
    pub name: String,
    pub title: String,
    pub status: PoolStatus,
    /// Sum of all contributions, two decimal places
    pub total: Decimal,
    /// `total` as text, `.` as decimal separator
    pub total_display: String,
    /// Whether dates were shortened to day and month
    pub all_same_year: bool,
    /// Newest first
    pub rows: Vec<TransactionRow>,
    pub notice: Notice,
    pub tags: Vec<String>,
}

impl PoolView {
    /// Build the view, failing as a whole if any transaction is malformed
    pub fn build(record: &PoolRecord) -> CoreResult<Self> {
        let transactions = &record.transactions;
        for tr in transactions {
            tr.validate_amount()?;
        }

        let total = total(transactions)?;
        let same_year = all_same_year(transactions)?;

        let rows = transactions
            .iter()
            .rev()
            .map(|tr| {
                Ok(TransactionRow {
                    contributor: tr.name.clone(),
                    amount: display_amount(tr),
                    date: display_date(tr, same_year)?,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let status = PoolStatus::from(record.open);
        let notice = match status {
            PoolStatus::Open => Notice::Invite { keyword: record.name.clone() },
            PoolStatus::Closed => Notice::ThankYou,
        };

        log::debug!(
            "Built view for pool '{}': {} rows, total {}",
            record.name,
            rows.len(),
            total
        );

        Ok(Self {
            name: record.name.clone(),
            title: record.title.clone(),
            status,
            total,
            total_display: format_total(total),
            all_same_year: same_year,
            rows,
            notice,
            tags: FIXED_TAGS.iter().map(|t| t.to_string()).collect(),
        })
    }

    /// Whether the pool still accepts contributions
    pub fn is_open(&self) -> bool {
        self.status == PoolStatus::Open
    }
}

/// Exact sum of all transaction amounts, rounded half-up to two places at the end
pub fn total(transactions: &[Transaction]) -> CoreResult<Decimal> {
    let sum = transactions.iter().try_fold(Decimal::ZERO, |acc, tr| {
        acc.checked_add(tr.amount()).ok_or_else(|| CoreError::InternalError {
            message: "total does not fit a decimal".to_string(),
        })
    })?;

    let mut rounded = sum.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    Ok(rounded)
}

/// `15.5` -> `15.50`, `0` -> `0.00`
pub fn format_total(total: Decimal) -> String {
    format!("{:.2}", total)
}

/// `{base},{fraction}` with a dash for a zero fraction; the fraction is not zero-padded
pub fn display_amount(tr: &Transaction) -> String {
    if tr.fraction == 0 {
        format!("{},{}", tr.base, PLACEHOLDER)
    } else {
        format!("{},{}", tr.base, tr.fraction)
    }
}

/// True when every dated transaction has the same year. Undated ones are skipped.
pub fn all_same_year(transactions: &[Transaction]) -> CoreResult<bool> {
    let mut first_year: Option<String> = None;
    let mut same = true;

    for date in transactions.iter().filter_map(|tr| tr.date.as_deref()) {
        let parsed = PoolDate::parse(date)?;
        match &first_year {
            None => first_year = Some(parsed.year),
            Some(year) if *year != parsed.year => same = false,
            Some(_) => {}
        }
    }

    Ok(same)
}

/// `DD.MM.` when all years match, the original string otherwise
pub fn display_date(tr: &Transaction, all_same_year: bool) -> CoreResult<String> {
    let Some(value) = tr.date.as_deref() else {
        return Ok(PLACEHOLDER.to_string());
    };

    let date = PoolDate::parse(value)?;
    if all_same_year {
        Ok(date.short())
    } else {
        Ok(value.to_string())
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(open: bool, transactions: Vec<Transaction>) -> PoolRecord {
        PoolRecord {
            name: "summer-trip".to_string(),
            title: "Summer Trip".to_string(),
            open,
            transactions,
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let pool = record(true, vec![
            Transaction::new("Anna", 10, 0, "01.01.2024"),
            Transaction::new("Ben", 5, 50, "15.06.2024"),
        ]);
        let view = PoolView::build(&pool).unwrap();

        assert_eq!(view.total_display, "15.50");
        assert!(view.all_same_year);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0], TransactionRow {
            contributor: "Ben".to_string(),
            amount: "5,50".to_string(),
            date: "15.06.".to_string(),
        });
        assert_eq!(view.rows[1].amount, "10,-");
        assert_eq!(view.rows[1].date, "01.01.");
    }

    #[test]
    fn test_empty_pool() {
        let view = PoolView::build(&record(false, vec![])).unwrap();
        assert_eq!(view.total_display, "0.00");
        assert_eq!(view.total, Decimal::ZERO);
        assert!(view.rows.is_empty());
        assert!(view.all_same_year);
        assert_eq!(view.notice, Notice::ThankYou);
        assert_eq!(view.status.to_string(), "Closed");
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut transactions = vec![
            Transaction::new("A", 0, 10, "01.01.2024"),
            Transaction::new("B", 0, 20, "02.01.2024"),
            Transaction::new("C", 7, 99, "03.01.2024"),
            Transaction::new("D", 100, 1, "04.01.2024"),
        ];
        let forward = total(&transactions).unwrap();
        transactions.reverse();
        let backward = total(&transactions).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(format_total(forward), "108.30");
    }

    #[test]
    fn test_total_has_no_float_drift() {
        let transactions: Vec<_> = (0..10).map(|i| Transaction::new(&format!("P{}", i), 0, 10, "01.01.2024")).collect();
        assert_eq!(format_total(total(&transactions).unwrap()), "1.00");
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(display_amount(&Transaction::new("A", 3, 0, "01.01.2024")), "3,-");
        assert_eq!(display_amount(&Transaction::new("A", 3, 7, "01.01.2024")), "3,7");
        assert_eq!(display_amount(&Transaction::new("A", 3, 42, "01.01.2024")), "3,42");
    }

    #[test]
    fn test_all_same_year() {
        let single = vec![Transaction::new("A", 1, 0, "05.03.2023")];
        assert!(all_same_year(&single).unwrap());

        let mixed = vec![
            Transaction::new("A", 1, 0, "05.03.2023"),
            Transaction::new("B", 1, 0, "05.03.2024"),
        ];
        assert!(!all_same_year(&mixed).unwrap());
    }

    #[test]
    fn test_mixed_years_keep_full_dates() {
        let pool = record(true, vec![
            Transaction::new("A", 1, 0, "31.12.2023"),
            Transaction::new("B", 2, 0, "01.01.2024"),
        ]);
        let view = PoolView::build(&pool).unwrap();
        assert!(!view.all_same_year);
        assert_eq!(view.rows[0].date, "01.01.2024");
        assert_eq!(view.rows[1].date, "31.12.2023");
    }

    #[test]
    fn test_display_date() {
        let tr = Transaction::new("A", 1, 0, "05.03.2023");
        assert_eq!(display_date(&tr, true).unwrap(), "05.03.");
        assert_eq!(display_date(&tr, false).unwrap(), "05.03.2023");
    }

    #[test]
    fn test_undated_transaction() {
        let undated = Transaction { name: "A".to_string(), base: 1, fraction: 0, date: None };
        let pool = record(true, vec![undated, Transaction::new("B", 2, 0, "05.03.2023")]);
        let view = PoolView::build(&pool).unwrap();
        assert!(view.all_same_year);
        assert_eq!(view.rows[0].date, "05.03.");
        assert_eq!(view.rows[1].date, PLACEHOLDER);
    }

    #[test]
    fn test_rows_are_reversed() {
        let pool = record(true, vec![
            Transaction::new("A", 1, 0, "01.01.2024"),
            Transaction::new("B", 2, 0, "02.01.2024"),
            Transaction::new("C", 3, 0, "03.01.2024"),
        ]);
        let names: Vec<_> = PoolView::build(&pool).unwrap().rows.into_iter().map(|r| r.contributor).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_malformed_date_fails_whole_view() {
        let pool = record(true, vec![
            Transaction::new("A", 1, 0, "01.01.2024"),
            Transaction::new("B", 2, 0, "2024-01-02"),
        ]);
        let err = PoolView::build(&pool).unwrap_err();
        assert_eq!(err, CoreError::InvalidDate { value: "2024-01-02".to_string() });
    }

    #[test]
    fn test_out_of_range_fraction_fails_whole_view() {
        let pool = record(true, vec![Transaction::new("A", 1, 150, "01.01.2024")]);
        assert!(matches!(PoolView::build(&pool), Err(CoreError::InvalidAmount { .. })));
    }

    #[test]
    fn test_open_pool_invites_with_keyword() {
        let view = PoolView::build(&record(true, vec![])).unwrap();
        assert!(view.is_open());
        assert_eq!(view.notice, Notice::Invite { keyword: "summer-trip".to_string() });
        assert_eq!(view.tags, vec!["No Goal", "No Limit"]);
    }

    #[test]
    fn test_view_serializes_for_json_api() {
        let pool = record(true, vec![Transaction::new("A", 5, 50, "15.06.2024")]);
        let json = serde_json::to_value(PoolView::build(&pool).unwrap()).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["total_display"], "5.50");
        assert_eq!(json["notice"]["kind"], "invite");
        assert_eq!(json["rows"][0]["amount"], "5,50");
    }
}
