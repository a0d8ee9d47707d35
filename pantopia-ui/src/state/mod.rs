//! State Management
//!
//! Controllers the shell hands to the components that need them. They are
//! passed down as props rather than provided through context, so every
//! consumer names its dependencies.

pub mod session;
pub mod theme;

pub use session::{SessionController, SignOutTarget};
pub use theme::{Theme, ThemeController};
