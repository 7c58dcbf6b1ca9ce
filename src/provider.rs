//! User-data provider integration.
//!
//! This module covers everything needed to pull pages of randomly generated
//! user profiles from the remote REST provider: domain models, pagination
//! metadata, the gateway trait plus its reqwest implementation, and the
//! error family shared across the crate.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;

pub use error::FetchError;
pub use gateway::{HttpUserGateway, UserGateway};
pub use models::{UserPage, UserRecord};
pub use pagination::PageInfo;
