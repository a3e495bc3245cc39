//! # Scoring Module
//!
//! The reward-points rules. Every function here is pure and deterministic.
//!
//! ## Scoring Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        score_receipt()                                  │
//! │                                                                         │
//! │  Receipt                                                                │
//! │     │                                                                   │
//! │     ├── parse total ─────────── fails? ──► Err(ScoreError)             │
//! │     ├── parse qualifying prices  fails? ──► Err(ScoreError)            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  retailer_points          letters in retailer name              │  │
//! │  │  item_pair_points         5 per two items                       │  │
//! │  │  round_total_points       50 if total is whole                  │  │
//! │  │  quarter_total_points     25 if total / 0.25 is whole           │  │
//! │  │  item_description_points  ceil(price * 0.2) per qualifying item │  │
//! │  │  odd_day_points           6 if day is odd   (bad date → 0)      │  │
//! │  │  afternoon_points         10 if 14 ≤ hour < 16 (bad time → 0)   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Ok(PointsBreakdown) ──► total()                                       │
//! │                                                                         │
//! │  compute_score() = score_receipt().total(), or 0 on Err                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::amount::{is_whole, parse_amount};
use crate::error::ScoreResult;
use crate::types::{Points, PointsBreakdown, PurchaseItem, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Points for every two items on the receipt.
pub const ITEM_PAIR_POINTS: Points = 5;

/// Points when the total has no cents.
pub const ROUND_TOTAL_POINTS: Points = 50;

/// Points when the total is a multiple of [`QUARTER`].
pub const QUARTER_TOTAL_POINTS: Points = 25;

/// Quarter-dollar step used by the quarter-multiple rule.
pub const QUARTER: f64 = 0.25;

/// Price multiplier for items with a qualifying description.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Trimmed description lengths must be a multiple of this.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// Points when the purchase day is odd.
pub const ODD_DAY_POINTS: Points = 6;

/// Points for purchases inside the afternoon window.
pub const AFTERNOON_POINTS: Points = 10;

/// First hour of the afternoon window (inclusive).
pub const AFTERNOON_START_HOUR: i64 = 14;

/// End of the afternoon window (exclusive).
pub const AFTERNOON_END_HOUR: i64 = 16;

// =============================================================================
// Entry Points
// =============================================================================

/// Scores a receipt rule by rule.
///
/// Returns `Err` when the total, or the price of an item whose description
/// qualifies, is not a decimal number.
/// Date and time problems never fail; their rules score 0 instead.
///
/// ## Example
/// ```rust
/// use points_core::{score_receipt, PurchaseItem, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![
///         PurchaseItem::new("Pizza Pie", "12.25"),
///         PurchaseItem::new("Six Pk", "6.49"),
///     ],
///     total: "35.35".to_string(),
/// };
///
/// let breakdown = score_receipt(&receipt).unwrap();
/// assert_eq!(breakdown.retailer, 6);
/// assert_eq!(breakdown.item_descriptions, 5);
/// assert_eq!(breakdown.total(), 22);
/// ```
pub fn score_receipt(receipt: &Receipt) -> ScoreResult<PointsBreakdown> {
    let total = parse_amount("total", &receipt.total)?;
    let item_descriptions = item_description_points(&receipt.items)?;

    Ok(PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        item_pairs: item_pair_points(receipt.items.len()),
        round_total: round_total_points(total),
        quarter_total: quarter_total_points(total),
        item_descriptions,
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    })
}

/// Computes the score for a receipt.
///
/// A malformed total or item price yields `0` for the whole receipt. Use
/// [`score_receipt`] to tell that case apart from a genuine zero.
pub fn compute_score(receipt: &Receipt) -> Points {
    score_receipt(receipt)
        .map(|breakdown| breakdown.total())
        .unwrap_or(0)
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per letter (general category L), in any script.
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters.
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(|&c| is_letter(c)).count() as Points
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Five points for every two items; an odd item out earns nothing.
pub fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * ITEM_PAIR_POINTS
}

/// Fifty points if the total is a whole dollar amount.
pub fn round_total_points(total: f64) -> Points {
    if is_whole(total) {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// Twenty-five points if the total is a multiple of 0.25.
pub fn quarter_total_points(total: f64) -> Points {
    if is_whole(total / QUARTER) {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// Whether an item's description earns the price bonus.
///
/// Only ASCII spaces are trimmed. Length counts characters, not bytes, and
/// an empty description qualifies.
pub fn description_qualifies(short_description: &str) -> bool {
    short_description.trim_matches(' ').chars().count() % DESCRIPTION_LENGTH_MULTIPLE == 0
}

/// Price bonus summed over all qualifying items.
///
/// Only qualifying items have their price parsed; a malformed price on any
/// other item is never read. The per-item bonuses are accumulated as `f64`
/// and truncated toward zero once at the end.
pub fn item_description_points(items: &[PurchaseItem]) -> ScoreResult<Points> {
    let mut bonus = 0.0_f64;

    for (index, item) in items.iter().enumerate() {
        if !description_qualifies(&item.short_description) {
            continue;
        }
        let price = parse_amount(&format!("items[{}].price", index), &item.price)?;
        bonus += (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    }

    Ok(bonus as Points)
}

/// Day of month from a `YYYY-MM-DD` date, or `0` if it does not parse.
///
/// Month and day must be two digits and the date must exist.
pub fn purchase_day(purchase_date: &str) -> u32 {
    if !has_date_shape(purchase_date) {
        return 0;
    }

    NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d")
        .map(|date| date.day())
        .unwrap_or(0)
}

fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Six points if the purchase day is odd.
pub fn odd_day_points(purchase_date: &str) -> Points {
    if purchase_day(purchase_date) % 2 != 0 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Hour from an `HH:MM` time (text before the first `:`), or `0`.
pub fn purchase_hour(purchase_time: &str) -> i64 {
    purchase_time
        .split(':')
        .next()
        .and_then(|hour| hour.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Ten points for purchases from 2:00pm up to, not including, 4:00pm.
pub fn afternoon_points(purchase_time: &str) -> Points {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&purchase_hour(purchase_time)) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
