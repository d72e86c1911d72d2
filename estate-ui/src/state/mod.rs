//! State Management
//!
//! Embedded configuration and global toast/session signals.

pub mod global;

pub use global::{load_config, provide_global_state, GlobalState};
