// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ProcessBackend` trait and the concrete
//!   `RealProcessBackend` (std `Command` + `wait(2)`), which tests replace
//!   with a fake.
//! - [`supervisor`] drives one child from creation to termination and emits
//!   the start/exit records around it.

pub mod backend;
pub mod supervisor;

pub use backend::{ChildStatus, LaunchPlan, ProcessBackend, RealProcessBackend, Reaped};
pub use supervisor::{ChildState, Supervisor};
