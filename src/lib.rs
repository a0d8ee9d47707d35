//! # Pantopia
//!
//! Client management dashboard service. Keeps the company list, aggregates
//! it into industry/status distributions for the dashboard charts, and backs
//! the navigation shell (sidebar, theme toggle, sign out).
//!
//! ## Modules
//!
//! - [`company`]: Company records and the snapshot registry
//! - [`aggregate`]: Count-by aggregation, memoization and chart models
//! - [`theme`]: Light/dark theme and palettes
//! - [`session`]: Session provider abstraction for sign out
//! - [`shell`]: Sidebar navigation, active route and logout flow
//! - [`import`]: CSV/JSON record import
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pantopia::aggregate::{aggregate, GroupBy};
//! use pantopia::company::{CompanyRegistry, NewCompany};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = CompanyRegistry::new();
//!     registry.insert(NewCompany::new("Acme", "Tech", "Active")).await?;
//!     registry.insert(NewCompany::new("Globex", "Finance", "Lead")).await?;
//!
//!     let snapshot = registry.snapshot().await;
//!     for entry in &aggregate(&snapshot, GroupBy::Industry) {
//!         println!("{}: {}", entry.key, entry.count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod company;
pub mod config;
pub mod import;
pub mod session;
pub mod shell;
pub mod theme;

// Re-export top-level types for convenience
pub use aggregate::{
    aggregate, count_by, ChartPoint, ChartsView, Distribution, DistributionCache, GroupBy, Series,
    SeriesEntry,
};

pub use company::{Company, CompanyId, CompanyRegistry, NewCompany, RegistryError};

pub use theme::{Palette, Theme, ThemeState};

pub use session::{HttpSessionProvider, LogoutOutcome, SessionError, SessionProvider, UnconfiguredSession};

pub use shell::{Shell, SidebarView};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, SessionConfig};
