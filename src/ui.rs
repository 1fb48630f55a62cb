// UI layer: provides a simple interactive menu using `dialoguer`.
// The flows are small and synchronous; each one makes a single backend
// call behind a spinner and prints the outcome before returning to the menu.

use crate::api::{ApiClient, HealthStatus, HouseData, PricePrediction};
use crate::dropdown::SearchableDropdown;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// The front-end application: owns the API client and the location
/// picker, and renders onto the terminal it was started from.
#[derive(Debug)]
pub struct App {
    api: ApiClient,
    location_picker: SearchableDropdown,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        App {
            api,
            location_picker: SearchableDropdown::new("Location"),
        }
    }

    /// Main interactive menu. Checks the backend once, then runs a simple
    /// select loop until the user chooses "Exit".
    pub fn run(&self) -> Result<()> {
        tracing::info!(base_url = %self.api.base_url(), "starting front-end");
        self.check_backend()?;

        loop {
            let items = ["Predict price", "Browse locations", "Check backend", "Exit"];
            let selection = Select::new()
                .with_prompt("What would you like to do?")
                .items(&items)
                .default(0)
                .interact()?;
            match selection {
                0 => self.handle_predict()?,
                1 => self.handle_browse()?,
                2 => self.check_backend()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn check_backend(&self) -> Result<()> {
        let spinner = spinner("Contacting backend...")?;
        let result = self.api.health_check();
        spinner.finish_and_clear();

        match result {
            Ok(status) => println!("{}", describe_health(&status).green()),
            Err(e) => println!("{}", e.to_string().red()),
        }
        Ok(())
    }

    fn fetch_locations(&self) -> Result<Option<Vec<String>>> {
        let spinner = spinner("Loading locations...")?;
        let result = self.api.get_locations();
        spinner.finish_and_clear();

        match result {
            Ok(locations) => Ok(Some(locations)),
            Err(e) => {
                tracing::warn!(error = ?e, "could not load locations");
                println!("{} {}", "Could not load locations:".red(), e);
                Ok(None)
            }
        }
    }

    fn handle_browse(&self) -> Result<()> {
        let Some(locations) = self.fetch_locations()? else {
            return Ok(());
        };
        if let Some(location) = self.location_picker.pick(&locations)? {
            println!("{} is one of {} known locations.", location.bold(), locations.len());
        }
        Ok(())
    }

    /// Collect the house details and ask the backend for an estimate.
    fn handle_predict(&self) -> Result<()> {
        let Some(locations) = self.fetch_locations()? else {
            return Ok(());
        };
        let Some(location) = self.location_picker.pick(&locations)? else {
            return Ok(());
        };

        let sqft: f64 = Input::new().with_prompt("Total area (sqft)").interact_text()?;
        let bhk: u32 = Input::new().with_prompt("Bedrooms (BHK)").interact_text()?;
        let bath: u32 = Input::new().with_prompt("Bathrooms").interact_text()?;

        let data = HouseData {
            location,
            sqft,
            bhk,
            bath,
        };

        let spinner = spinner("Estimating price...")?;
        let result = self.api.predict_price(&data);
        spinner.finish_and_clear();

        match result {
            Ok(prediction) => println!("{}", describe_prediction(&data, &prediction).green().bold()),
            Err(e) => println!("{} {}", "Prediction failed:".red(), e),
        }
        Ok(())
    }
}

const SPINNER_TEMPLATE: &str = "{spinner} {msg}";

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template(SPINNER_TEMPLATE)?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

pub fn describe_health(status: &HealthStatus) -> String {
    match status.message() {
        Some(message) => format!("Backend is up: {message}"),
        None => "Backend is up".to_string(),
    }
}

pub fn describe_prediction(data: &HouseData, prediction: &PricePrediction) -> String {
    format!(
        "Estimated price for a {} BHK, {} bath, {} sqft home in {}: {:.2}",
        data.bhk, data.bath, data.sqft, data.location, prediction.estimated_price
    )
}
