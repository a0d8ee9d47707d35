//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod company_charts;
pub mod loading;
pub mod sidebar;

pub use company_charts::CompanyCharts;
pub use loading::{ChartSkeleton, ListSkeleton};
pub use sidebar::Sidebar;
