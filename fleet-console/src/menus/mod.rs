//! One sub-menu per registry, each an `impl` block on [`crate::Console`].

mod health;
mod inventory;
mod loads;
mod scheduler;
