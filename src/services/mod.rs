//! Service layer: all reads and mutations over [`crate::state::ConsoleState`].
//!
//! Each module owns one tab of the console. Free async functions take the
//! state by reference; every mutation returns the updated record clone and
//! broadcasts an event. Errors are per-service `thiserror` enums, each
//! implementing [`crate::event::ErrorCode`].

pub mod campaign;
pub mod catalog;
pub mod handoff;
pub mod review;
pub mod roster;
pub mod seed;
pub mod settings;
pub mod stats;
pub mod submission;
pub mod support;
