// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - display backends, configuration, errors
pub mod config;
pub mod display;
pub mod error;

// Re-exports for convenience
pub use application::Simulation;
pub use display::{DisplayService, WindowDisplay};
pub use domain::{Cell, Grid, Pattern, presets};
pub use error::{Error, Result};
