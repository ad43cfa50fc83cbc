//! HTTP request handlers organized by functionality.

pub mod health;
pub mod quotes;

pub use health::*;
pub use quotes::*;
