//! Derives and logging macros shared across the widget modules.

pub use derive_more::Display;
pub use log::{debug, trace, warn};
