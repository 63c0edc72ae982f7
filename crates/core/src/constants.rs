/// Decimal precision for computed allocation amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Sum every allocation profile must reach
pub const FULL_ALLOCATION_PERCENT: u32 = 100;

/// Largest tolerated gap between the savings amount and the sum of its
/// rounded allocations (one cent per instrument)
pub const ROUNDING_TOLERANCE: &str = "0.06";
