pub use crate::core::config::*;
pub use crate::core::error::*;
