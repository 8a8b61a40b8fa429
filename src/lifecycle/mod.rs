//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build route table → Register actions → Bind listener
//!
//! Shutdown (signals.rs):
//!     Ctrl+C or Shutdown::trigger → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The route table is complete before the listener binds

pub mod signals;
pub mod startup;

pub use signals::Shutdown;
pub use startup::{Application, StartupError};
