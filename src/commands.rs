// One-shot commands: each makes a single backend call, prints the result
// and returns. Output goes to any writer so scripts and tests can capture it.

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;

use crate::api::{ApiClient, HouseData};
use crate::ui::{describe_health, describe_prediction};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the locations known to the backend
    Locations,
    /// Ask the backend for a price estimate
    Predict {
        #[arg(long)]
        location: String,
        #[arg(long)]
        sqft: f64,
        #[arg(long)]
        bhk: u32,
        #[arg(long)]
        bath: u32,
    },
    /// Check whether the backend is responding
    Health,
}

pub fn run(api: &ApiClient, command: Command, out: &mut impl Write) -> Result<()> {
    tracing::debug!(?command, "running one-shot command");
    match command {
        Command::Locations => {
            for location in api.get_locations()? {
                writeln!(out, "{location}")?;
            }
        }
        Command::Predict {
            location,
            sqft,
            bhk,
            bath,
        } => {
            let data = HouseData {
                location,
                sqft,
                bhk,
                bath,
            };
            let prediction = api.predict_price(&data)?;
            writeln!(out, "{}", describe_prediction(&data, &prediction))?;
        }
        Command::Health => {
            let status = api.health_check()?;
            writeln!(out, "{}", describe_health(&status))?;
        }
    }
    Ok(())
}
