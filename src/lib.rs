//! # Design patterns: observer and strategy
//!
//! Two small, self-contained demos:
//!
//! ## Observer
//! - [`observer::WeatherData`] publishes [`observer::Measurement`]s
//! - [`display::CurrentConditionsDisplay`] renders each one (push or pull)
//!
//! ## Strategy
//! - [`duck::Duck`] delegates to swappable [`behavior::FlyBehavior`] and
//!   [`behavior::QuackBehavior`] implementations
//!
//! Run them with:
//! ```bash
//! cargo run --bin weather_monitoring [scenario.toml]
//! cargo run --bin sim_u_duck
//! ```

pub mod behavior;
pub mod config;
pub mod demo;
pub mod display;
pub mod duck;
pub mod error;
pub mod logging;
pub mod observer;
pub mod sink;

pub use error::{ConfigError, DuckError};
