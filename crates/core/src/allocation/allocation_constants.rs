/// Category identifiers
///
/// Each constant is the string form a caller passes to select a profile.

/// Low income with outstanding debt. Capital preservation only.
pub const CATEGORY_LOW_INCOME_HIGH_DEBT: &str = "low_income_high_debt";

/// Early career with steady income. Growth-oriented.
pub const CATEGORY_YOUNG_PROFESSIONAL: &str = "young_professional";

/// Household with dependents. Balanced between safety and growth.
pub const CATEGORY_FAMILY_FOCUSED: &str = "family_focused";

/// High income and market experience. Equity-heavy.
pub const CATEGORY_HIGH_INCOME_EXPERIENCED: &str = "high_income_experienced";

/// Retired or close to it. Fixed income first.
pub const CATEGORY_SENIOR_RETIRED: &str = "senior_retired";

// Instrument display names

pub const INSTRUMENT_SAVINGS_ACCOUNT: &str = "Savings Account";

/// Fixed and recurring deposits.
pub const INSTRUMENT_FD_RD: &str = "FD/RD";

/// Public, employee and girl-child provident schemes.
pub const INSTRUMENT_PPF_EPF_SSY: &str = "PPF/EPF/SSY";

pub const INSTRUMENT_GOLD: &str = "Gold";

pub const INSTRUMENT_MUTUAL_FUNDS: &str = "Mutual Funds";

pub const INSTRUMENT_STOCKS: &str = "Stocks";
