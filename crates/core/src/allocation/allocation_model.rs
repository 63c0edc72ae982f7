//! Allocation domain models.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FULL_ALLOCATION_PERCENT;
use crate::errors::{Error, ValidationError};

use super::allocation_constants::*;

// =============================================================================
// Category
// =============================================================================

/// User segment selecting an allocation profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LowIncomeHighDebt,
    YoungProfessional,
    FamilyFocused,
    HighIncomeExperienced,
    SeniorRetired,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::LowIncomeHighDebt,
        Category::YoungProfessional,
        Category::FamilyFocused,
        Category::HighIncomeExperienced,
        Category::SeniorRetired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LowIncomeHighDebt => CATEGORY_LOW_INCOME_HIGH_DEBT,
            Category::YoungProfessional => CATEGORY_YOUNG_PROFESSIONAL,
            Category::FamilyFocused => CATEGORY_FAMILY_FOCUSED,
            Category::HighIncomeExperienced => CATEGORY_HIGH_INCOME_EXPERIENCED,
            Category::SeniorRetired => CATEGORY_SENIOR_RETIRED,
        }
    }

    /// Short human-readable label.
    pub fn description(&self) -> &'static str {
        match self {
            Category::LowIncomeHighDebt => "Low income, high debt",
            Category::YoungProfessional => "Young professional",
            Category::FamilyFocused => "Family focused",
            Category::HighIncomeExperienced => "High income, experienced investor",
            Category::SeniorRetired => "Senior / retired",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::UnsupportedCategory(s.to_string()))
    }
}

// =============================================================================
// Instrument
// =============================================================================

/// Investment vehicle receiving a share of the savings.
///
/// The declaration order is the order used by every profile and result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    #[serde(rename = "Savings Account")]
    SavingsAccount,
    #[serde(rename = "FD/RD")]
    FdRd,
    #[serde(rename = "PPF/EPF/SSY")]
    PpfEpfSsy,
    #[serde(rename = "Gold")]
    Gold,
    #[serde(rename = "Mutual Funds")]
    MutualFunds,
    #[serde(rename = "Stocks")]
    Stocks,
}

impl Instrument {
    /// Every instrument, in declaration order.
    pub const ALL: [Instrument; 6] = [
        Instrument::SavingsAccount,
        Instrument::FdRd,
        Instrument::PpfEpfSsy,
        Instrument::Gold,
        Instrument::MutualFunds,
        Instrument::Stocks,
    ];

    /// Returns the display name of this instrument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Instrument::SavingsAccount => INSTRUMENT_SAVINGS_ACCOUNT,
            Instrument::FdRd => INSTRUMENT_FD_RD,
            Instrument::PpfEpfSsy => INSTRUMENT_PPF_EPF_SSY,
            Instrument::Gold => INSTRUMENT_GOLD,
            Instrument::MutualFunds => INSTRUMENT_MUTUAL_FUNDS,
            Instrument::Stocks => INSTRUMENT_STOCKS,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Instrument {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Instrument::ALL
            .into_iter()
            .find(|instrument| instrument.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown instrument: {}",
                    s
                )))
            })
    }
}

// =============================================================================
// Allocation Profile
// =============================================================================

/// Percentage split across all instruments for one category.
///
/// `percentages` is indexed by [`Instrument::ALL`] order and must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationProfile {
    pub category: Category,
    pub percentages: [u32; 6],
}

impl AllocationProfile {
    pub const fn new(category: Category, percentages: [u32; 6]) -> Self {
        Self {
            category,
            percentages,
        }
    }

    pub fn percentage(&self, instrument: Instrument) -> u32 {
        self.percentages[instrument.index()]
    }

    pub fn total_percentage(&self) -> u32 {
        self.percentages.iter().sum()
    }

    /// True when the split covers exactly the whole amount.
    pub fn is_complete(&self) -> bool {
        self.total_percentage() == FULL_ALLOCATION_PERCENT
    }

    /// Iterates `(instrument, percentage)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Instrument, u32)> + '_ {
        Instrument::ALL
            .into_iter()
            .map(move |instrument| (instrument, self.percentage(instrument)))
    }
}

// =============================================================================
// Allocation Result
// =============================================================================

/// Computed share of the savings for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentAllocation {
    pub instrument: Instrument,
    /// Share of the savings (0-100)
    pub percentage: u32,
    /// Amount rounded to two decimal places
    pub amount: Decimal,
}

/// Percentage and amount pair, keyed by instrument name in [`AllocationResult::to_map`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub percentage: u32,
    pub amount: Decimal,
}

/// Recommended split of one monthly savings amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub category: Category,
    pub monthly_savings: Decimal,
    /// One entry per instrument, in declaration order
    pub allocations: Vec<InstrumentAllocation>,
}

impl AllocationResult {
    pub fn get(&self, instrument: Instrument) -> Option<&InstrumentAllocation> {
        self.allocations.iter().find(|a| a.instrument == instrument)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentAllocation> {
        self.allocations.iter()
    }

    /// Sum of the rounded amounts. May differ from `monthly_savings` by rounding.
    pub fn total_amount(&self) -> Decimal {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    /// String-keyed view: instrument display name to percentage and amount.
    pub fn to_map(&self) -> HashMap<String, AllocationEntry> {
        self.allocations
            .iter()
            .map(|a| {
                (
                    a.instrument.as_str().to_string(),
                    AllocationEntry {
                        percentage: a.percentage,
                        amount: a.amount,
                    },
                )
            })
            .collect()
    }
}
