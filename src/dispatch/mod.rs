//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! RouteTable::resolve → HandlerName (`canvas#new`)
//!     → registry.rs (look up the registered action)
//!     → action(ActionContext) → Response
//! ```
//!
//! # Design Decisions
//! - Actions are external collaborators; this crate only holds the seam
//! - Registry is filled at startup and read-only afterwards
//! - A resolved handler without an action is a server fault (500), not a 404

pub mod canvas;
pub mod registry;

pub use canvas::register_canvas_actions;
pub use registry::{Action, ActionContext, ActionRegistry, DispatchError};
