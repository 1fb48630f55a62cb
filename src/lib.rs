// Library root
// -----------
// This crate exposes a small library surface for the house price
// front-end. The binary (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the prediction backend
//   (locations, predict, health check).
// - `commands`: One-shot subcommands that print a single result.
// - `error`: The error type returned by the API client.
// - `config`: Resolves the backend address from flag, environment and
//   config file.
// - `dropdown`: The reusable searchable selector.
// - `ui`: The interactive terminal application built on the above.
pub mod api;
pub mod commands;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod ui;

pub use api::{ApiClient, HealthStatus, HouseData, PricePrediction};
pub use error::ApiError;
