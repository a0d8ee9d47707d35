//! Company Records
//!
//! This module provides the record model the dashboard summarizes:
//!
//! - **types**: `Company`, `CompanyId` and the `NewCompany` creation input
//! - **registry**: In-memory record list exposed as immutable snapshots
//! - **error**: Error types
//!
//! # Snapshots
//!
//! ```text
//! insert / remove → build new list → swap Arc<[Company]>
//! readers         → clone Arc      → aggregate without holding the lock
//! ```
//!
//! A snapshot is never mutated after it is published, so two snapshots are
//! the same list exactly when they point at the same allocation.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::CompanyRegistry;
pub use types::{Company, CompanyId, NewCompany};
