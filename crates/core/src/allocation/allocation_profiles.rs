//! Static allocation table.
//!
//! Percentages are listed in [`Instrument::ALL`](super::Instrument::ALL) order:
//! Savings Account, FD/RD, PPF/EPF/SSY, Gold, Mutual Funds, Stocks.

use super::allocation_model::{AllocationProfile, Category};

/// One profile per category, in [`Category::ALL`] order.
pub static ALLOCATION_PROFILES: [AllocationProfile; 5] = [
    AllocationProfile::new(Category::LowIncomeHighDebt, [40, 40, 20, 0, 0, 0]),
    AllocationProfile::new(Category::YoungProfessional, [5, 15, 20, 10, 45, 5]),
    AllocationProfile::new(Category::FamilyFocused, [10, 25, 30, 10, 20, 5]),
    AllocationProfile::new(Category::HighIncomeExperienced, [5, 10, 5, 10, 50, 20]),
    AllocationProfile::new(Category::SeniorRetired, [20, 50, 20, 10, 0, 0]),
];

/// Returns the profile for `category`.
pub fn allocation_profile(category: Category) -> &'static AllocationProfile {
    // Table rows follow the enum declaration order.
    &ALLOCATION_PROFILES[category as usize]
}
