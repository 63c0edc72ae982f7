//! Plain-text rendering of profiles and results.

use std::fmt::Write;

use savings_advisor_core::{AllocationProfile, AllocationResult};

pub fn render_result(result: &AllocationResult) -> String {
    let mut out = format!(
        "{} ({})\n",
        result.category.description(),
        result.category
    );
    for allocation in result.iter() {
        let amount = format!("{:.2}", allocation.amount);
        let _ = writeln!(
            out,
            "  {:<16} {:>3}%  {:>14}",
            allocation.instrument.as_str(),
            allocation.percentage,
            amount
        );
    }
    let total = format!("{:.2}", result.total_amount());
    let _ = write!(out, "  {:<16} {:>4}  {:>14}", "Total", "", total);
    out
}

pub fn render_profile(profile: &AllocationProfile) -> String {
    let split = profile
        .iter()
        .map(|(instrument, percentage)| format!("{} {}%", instrument, percentage))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{:<24} {}: {}",
        profile.category.as_str(),
        profile.category.description(),
        split
    )
}
