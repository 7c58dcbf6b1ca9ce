//! Userdeck library crate providing paginated browsing of random users.
//!
//! The library wraps the public random-users provider: it resolves layered
//! configuration, fetches pages of user records over HTTPS, and drives the
//! terminal UI that displays them as an aligned table with Previous/Next
//! navigation.

pub mod config;
pub mod provider;
pub mod tui;

pub use config::{OperationMode, UserdeckConfig};
pub use provider::{FetchError, HttpUserGateway, PageInfo, UserGateway, UserPage, UserRecord};
