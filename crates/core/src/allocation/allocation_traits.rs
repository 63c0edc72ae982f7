use rust_decimal::Decimal;

use crate::errors::Result;

use super::allocation_model::{AllocationProfile, AllocationResult, Category};

/// Trait for allocation advisor operations
pub trait AllocationAdvisorTrait: Send + Sync {
    /// Splits `monthly_savings` according to the profile named by `category`.
    fn suggest_investments(
        &self,
        monthly_savings: Decimal,
        category: &str,
    ) -> Result<AllocationResult>;

    /// Same as [`suggest_investments`](Self::suggest_investments) for an already parsed category.
    fn suggest_for_category(
        &self,
        monthly_savings: Decimal,
        category: Category,
    ) -> Result<AllocationResult>;

    /// Numeric-boundary variant. Rejects NaN and infinite values.
    fn suggest_investments_f64(
        &self,
        monthly_savings: f64,
        category: &str,
    ) -> Result<AllocationResult>;

    fn profiles(&self) -> &'static [AllocationProfile];
}
