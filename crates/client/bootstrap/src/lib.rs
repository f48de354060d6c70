//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and session assembly that any front end
//! (the line-oriented CLI today) can reuse.
pub mod builder;
pub mod config;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::ClientConfig;
