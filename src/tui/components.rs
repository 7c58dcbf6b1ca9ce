//! Reusable UI components for the user listing TUI.

pub mod skeleton;
pub mod user_table;

pub use skeleton::SkeletonComponent;
pub use user_table::{UserTableComponent, UserTableViewContext};
