//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type alias for `Arc<RwLock<T>>`.

pub mod aliases;

pub use aliases::*;
