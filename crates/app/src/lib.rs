//! `clearlabel-app`: the dashboard shell.
//!
//! Loads configuration and the product fixture, then renders page view models
//! (Dashboard, Products, Add Product, Analytics, Settings) as JSON. All page state
//! is passed explicitly through a [`DashboardContext`].

pub mod config;
pub mod context;
pub mod flow;
pub mod settings;
pub mod views;

pub use config::{AppConfig, ConfigError};
pub use context::{DashboardContext, SAMPLE_FIXTURE, Theme};
pub use flow::replay_draft;
pub use settings::{Profile, ProfileField, UserSettings};
pub use views::{Page, PageView};
