//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌───────────────────┐   │
//! │  │    Receipt      │   │   PurchaseItem    │   │  PointsBreakdown  │   │
//! │  │  ─────────────  │   │  ───────────────  │   │  ───────────────  │   │
//! │  │  retailer       │   │  shortDescription │   │  one field per    │   │
//! │  │  purchaseDate   │──►│  price (text)     │   │  scoring rule     │   │
//! │  │  purchaseTime   │   └───────────────────┘   │  total()          │   │
//! │  │  items          │                           └───────────────────┘   │
//! │  │  total (text)   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text Amounts
//! `total` and `price` stay as the text the client sent. Parsing happens
//! inside scoring so a malformed amount can be handled by policy instead of
//! being rejected during JSON binding.

use serde::{Deserialize, Deserializer, Serialize};

/// A reward-points score.
///
/// Signed: negative item prices can pull the item-description rule below zero.
pub type Points = i64;

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Absent text fields bind to empty strings so that "missing" and "empty"
/// both fail [`crate::validation::validate_receipt`] the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(default)]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: String,

    /// Purchase time, `HH:MM` (24-hour).
    #[serde(default)]
    pub purchase_time: String,

    /// Items purchased. Absent or `null` binds to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<PurchaseItem>,

    /// Total amount paid, decimal text.
    #[serde(default)]
    pub total: String,
}

/// A single line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    /// Short product description as printed on the receipt.
    #[serde(default)]
    pub short_description: String,

    /// Item price, decimal text.
    #[serde(default)]
    pub price: String,
}

impl PurchaseItem {
    /// Creates an item from a description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        PurchaseItem {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Points Breakdown
// =============================================================================

/// Points earned by each rule in one scoring run.
///
/// ## Rules
/// ```text
/// retailer           1 per letter in the retailer name
/// item_pairs         5 per two items
/// round_total        50 if the total has no cents
/// quarter_total      25 if the total is a multiple of 0.25
/// item_descriptions  ceil(price * 0.2) per item whose trimmed
///                    description length is a multiple of 3
/// odd_day            6 if the purchase day is odd
/// afternoon          10 if purchased from 14:00 up to 16:00
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub item_pairs: Points,
    pub round_total: Points,
    pub quarter_total: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of every rule's points.
    ///
    /// Saturates instead of overflowing (an `inf` price yields `i64::MAX`
    /// from the item-description rule).
    pub fn total(&self) -> Points {
        [
            self.retailer,
            self.item_pairs,
            self.round_total,
            self.quarter_total,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
