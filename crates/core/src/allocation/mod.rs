//! Allocation module - categories, instruments, the static profile table
//! and the advisor service.

mod allocation_constants;
mod allocation_model;
mod allocation_profiles;
mod allocation_service;
mod allocation_traits;

pub use allocation_constants::*;
pub use allocation_model::*;
pub use allocation_profiles::{allocation_profile, ALLOCATION_PROFILES};
pub use allocation_service::*;
pub use allocation_traits::AllocationAdvisorTrait;

#[cfg(test)]
mod allocation_service_tests;
