//! Pages
//!
//! Top-level page components for each route.

pub mod clients;
pub mod dashboard;
pub mod placeholder;
pub mod settings;

pub use clients::Clients;
pub use dashboard::Dashboard;
pub use placeholder::{NotFound, Placeholder, SignedOut};
pub use settings::Settings;
