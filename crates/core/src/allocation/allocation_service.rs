//! Service projecting allocation profiles onto a savings amount.

use std::str::FromStr;

use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};

use super::allocation_model::{AllocationProfile, AllocationResult, Category, InstrumentAllocation};
use super::allocation_profiles::{allocation_profile, ALLOCATION_PROFILES};
use super::allocation_traits::AllocationAdvisorTrait;

/// Stateless advisor backed by the static allocation table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationAdvisor;

impl AllocationAdvisor {
    pub fn new() -> Self {
        AllocationAdvisor
    }

    fn validate_amount(monthly_savings: Decimal) -> Result<()> {
        if monthly_savings < Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "monthly savings must not be negative, got {}",
                monthly_savings
            )));
        }
        Ok(())
    }

    /// `round(savings * percentage / 100, 2)`, midpoints away from zero.
    fn compute_amount(monthly_savings: Decimal, percentage: u32) -> Result<Decimal> {
        let share = monthly_savings
            .checked_mul(Decimal::from(percentage))
            .ok_or_else(|| {
                Error::InvalidAmount(format!("{} is too large to allocate", monthly_savings))
            })?
            / dec!(100);

        Ok(share.round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    fn allocate(
        profile: &AllocationProfile,
        monthly_savings: Decimal,
    ) -> Result<AllocationResult> {
        let allocations = profile
            .iter()
            .map(|(instrument, percentage)| {
                Ok(InstrumentAllocation {
                    instrument,
                    percentage,
                    amount: Self::compute_amount(monthly_savings, percentage)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(AllocationResult {
            category: profile.category,
            monthly_savings,
            allocations,
        })
    }
}

impl AllocationAdvisorTrait for AllocationAdvisor {
    fn suggest_investments(
        &self,
        monthly_savings: Decimal,
        category: &str,
    ) -> Result<AllocationResult> {
        let category = Category::from_str(category)?;
        self.suggest_for_category(monthly_savings, category)
    }

    fn suggest_for_category(
        &self,
        monthly_savings: Decimal,
        category: Category,
    ) -> Result<AllocationResult> {
        Self::validate_amount(monthly_savings)?;
        debug!(
            "Allocating {} of monthly savings for category {}",
            monthly_savings, category
        );
        Self::allocate(allocation_profile(category), monthly_savings)
    }

    fn suggest_investments_f64(
        &self,
        monthly_savings: f64,
        category: &str,
    ) -> Result<AllocationResult> {
        // Category errors take precedence over amount errors.
        let category = Category::from_str(category)?;
        let amount = Decimal::from_f64(monthly_savings).ok_or_else(|| {
            Error::InvalidAmount(format!("{} is not a representable amount", monthly_savings))
        })?;
        self.suggest_for_category(amount, category)
    }

    fn profiles(&self) -> &'static [AllocationProfile] {
        &ALLOCATION_PROFILES
    }
}

/// Splits `monthly_savings` for `category` using the default advisor.
pub fn suggest_investments(monthly_savings: Decimal, category: &str) -> Result<AllocationResult> {
    AllocationAdvisor.suggest_investments(monthly_savings, category)
}

/// Parses a savings amount typed by a user, e.g. `"20000"` or `"1250.50"`.
pub fn parse_monthly_savings(input: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(input.trim()).map_err(ValidationError::from)?;
    AllocationAdvisor::validate_amount(amount)?;
    Ok(amount)
}
