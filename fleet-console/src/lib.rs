//! Fleet Console - interactive operator front end
//!
//! Text menus over the four fleet registries of `fleet-kernel`:
//! - asset inventory (add / update / search / counts)
//! - load index (upsert, delete, sorted listing, min/max load)
//! - maintenance scheduler (most-urgent-first extraction)
//! - health report intake queue (FIFO)
//!
//! Inputs are validated here before reaching the kernel; the kernel still
//! defends its own invariants.

pub mod console;
mod menus;
pub mod prompt;
pub mod render;

pub use console::Console;
pub use prompt::PromptError;
