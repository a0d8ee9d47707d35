//! API Routes
//!
//! Route handlers organized by functionality.

pub mod companies;
pub mod distribution;
pub mod health;
pub mod shell;
