//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`plain`]: Print one page of users to stdout and exit
//! - [`users_tui`]: Interactive TUI for browsing user pages
//!
//! Output formatting utilities are in [`output`].

pub mod output;
pub mod plain;
pub mod users_tui;
