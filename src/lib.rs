pub mod config;
pub mod domain;
pub mod utils;

pub use config::{fixture_file::FixtureSet, CliConfig, OutputFormat};
pub use domain::{ClinicOfficeHours, ClinicalComments, OfficeDay, TimeUnit, WebControl};
pub use utils::error::{FixtureError, Result};
