use serde_json::Value;

use fixed_interest_core::interest::compound::{self, CompoundInterestInput};
use fixed_interest_core::interest::simple::{self, SimpleInterestInput};

use crate::input;
use crate::Cli;

pub fn run_simple(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    let simple_input: SimpleInterestInput = if let Some(ref path) = cli.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        SimpleInterestInput {
            principal: cli
                .principal
                .ok_or("--principal is required for simple mode (or provide --input)")?,
            rate_percent: cli
                .rate
                .ok_or("--rate is required for simple mode (or provide --input)")?,
            time_years: cli
                .time
                .ok_or("--time is required for simple mode (or provide --input)")?,
        }
    };

    let result = simple::simple_interest(&simple_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_compound(cli: &Cli) -> Result<Value, Box<dyn std::error::Error>> {
    let compound_input: CompoundInterestInput = if let Some(ref path) = cli.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        CompoundInterestInput {
            principal: cli
                .principal
                .ok_or("--principal is required for compound mode (or provide --input)")?,
            rate_percent: cli
                .rate
                .ok_or("--rate is required for compound mode (or provide --input)")?,
            time_years: cli
                .time
                .ok_or("--time is required for compound mode (or provide --input)")?,
            periods_per_year: cli.n,
        }
    };

    let result = compound::compound_interest(&compound_input)?;
    Ok(serde_json::to_value(result)?)
}
