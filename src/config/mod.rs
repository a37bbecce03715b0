// src/config/mod.rs

//! Configuration, read once from the process environment.
//!
//! - [`env`] holds the captured [`EnvSnapshot`].
//! - [`model`] defines [`Settings`] and the variable names.
//! - [`loader`] turns a snapshot into [`Settings`].

pub mod env;
pub mod loader;
pub mod model;

pub use env::EnvSnapshot;
pub use loader::load_settings;
pub use model::Settings;
