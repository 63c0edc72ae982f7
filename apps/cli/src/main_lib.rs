use anyhow::{bail, Context};
use rust_decimal::Decimal;
use savings_advisor_core::{
    parse_monthly_savings, AllocationAdvisor, AllocationAdvisorTrait, AllocationResult,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, Format};
use crate::output;

/// Invocations run when no arguments are given.
const DEMO_SCENARIOS: [(&str, i64, &str); 3] = [
    ("Low income high debt", 20_000, "low_income_high_debt"),
    ("Young professional", 60_000, "young_professional"),
    ("High income experienced", 200_000, "high_income_experienced"),
];

#[derive(Debug, PartialEq)]
pub enum Command {
    Demo,
    List,
    Suggest { amount: Decimal, category: String },
}

impl Command {
    pub fn from_args(args: &[String]) -> anyhow::Result<Self> {
        match args {
            [] => Ok(Command::Demo),
            [flag] if flag == "--list" => Ok(Command::List),
            [amount, category] => {
                let amount = parse_monthly_savings(amount)
                    .with_context(|| format!("Invalid savings amount '{}'", amount))?;
                Ok(Command::Suggest {
                    amount,
                    category: category.clone(),
                })
            }
            _ => bail!("Usage: savings-advisor [--list | <monthly_savings> <category>]"),
        }
    }
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == Format::Json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn run(config: &Config, command: Command) -> anyhow::Result<()> {
    let advisor = AllocationAdvisor::new();

    match command {
        Command::Demo => {
            for (index, (label, amount, category)) in DEMO_SCENARIOS.iter().enumerate() {
                let amount = Decimal::from(*amount);
                println!("Test {}: {}, savings {}", index + 1, label, amount);
                let result = suggest(&advisor, amount, category)?;
                print_result(config, &result)?;
                println!();
            }
        }
        Command::List => {
            for profile in advisor.profiles() {
                println!("{}", output::render_profile(profile));
            }
        }
        Command::Suggest { amount, category } => {
            let result = suggest(&advisor, amount, &category)?;
            print_result(config, &result)?;
        }
    }
    Ok(())
}

fn suggest(
    advisor: &dyn AllocationAdvisorTrait,
    amount: Decimal,
    category: &str,
) -> anyhow::Result<AllocationResult> {
    advisor.suggest_investments(amount, category).map_err(|e| {
        tracing::error!("Allocation failed for '{}': {}", category, e);
        anyhow::Error::new(e)
    })
}

fn print_result(config: &Config, result: &AllocationResult) -> anyhow::Result<()> {
    match config.output_format {
        Format::Json => println!("{}", serde_json::to_string_pretty(result)?),
        Format::Text => println!("{}", output::render_result(result)),
    }
    Ok(())
}
