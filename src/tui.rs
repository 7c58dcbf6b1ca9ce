//! Terminal User Interface for browsing paginated user records.
//!
//! This module provides an interactive TUI for paging through randomly
//! generated user profiles using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::UserTableApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Fetch Capability Injection
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for the fetch capability.
//! Call [`set_fetch_context`] with a [`UserGateway`] before starting the
//! program; page-load commands issued by `UserTableApp` resolve through the
//! stored gateway. Tests substitute a double through the same seam.

use std::sync::{Arc, OnceLock};

use crate::provider::{FetchError, UserGateway, UserPage};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::UserTableApp;

/// Default page number used when no context was stored.
const FALLBACK_START_PAGE: u32 = 1;

/// Default page size used when no context was stored.
const FALLBACK_PER_PAGE: u8 = 5;

/// Context required to fetch user pages from the provider.
struct FetchContext {
    gateway: Arc<dyn UserGateway>,
    per_page: u8,
    start_page: u32,
}

/// Global storage for the fetch context (gateway and page parameters).
///
/// This is set before the TUI program starts and read by
/// `UserTableApp::init()` and by page-load commands.
static FETCH_CONTEXT: OnceLock<FetchContext> = OnceLock::new();

/// Sets the fetch context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without a
/// context, page loads fail with a configuration error and the table stays
/// empty.
///
/// # Arguments
///
/// * `gateway` - The user gateway page loads resolve through.
/// * `per_page` - Records per page for every request.
/// * `start_page` - The 1-based page shown on startup.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_fetch_context(gateway: Arc<dyn UserGateway>, per_page: u8, start_page: u32) -> bool {
    FETCH_CONTEXT
        .set(FetchContext {
            gateway,
            per_page,
            start_page,
        })
        .is_ok()
}

/// Returns the configured starting page, or page 1 when no context was set.
pub(crate) fn start_page() -> u32 {
    FETCH_CONTEXT
        .get()
        .map_or(FALLBACK_START_PAGE, |context| context.start_page)
}

/// Returns the configured page size, or the fallback when no context was set.
pub(crate) fn per_page() -> u8 {
    FETCH_CONTEXT
        .get()
        .map_or(FALLBACK_PER_PAGE, |context| context.per_page)
}

/// Fetches one page of users through the injected gateway.
///
/// Uses the context set by [`set_fetch_context`]. Returns an error if the
/// context was not set or if the provider call fails.
pub(crate) async fn fetch_page(page: u32) -> Result<UserPage, FetchError> {
    let context = FETCH_CONTEXT.get().ok_or_else(|| FetchError::Configuration {
        message: "fetch context not configured".to_owned(),
    })?;
    context.gateway.fetch_page(page, context.per_page).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::provider::gateway::MockUserGateway;
    use crate::provider::models::UserPage;
    use crate::provider::pagination::PageInfo;

    use super::{fetch_page, per_page, set_fetch_context, start_page};

    // Single test for the OnceLock seam: the context can only be set once
    // per process, so all assertions live here.
    #[tokio::test]
    async fn fetch_page_resolves_through_injected_gateway() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_fetch_page()
            .withf(|page, limit| *page == 2 && *limit == 7)
            .returning(|page, limit| {
                Ok(UserPage {
                    records: Vec::new(),
                    info: PageInfo::new(page, limit),
                })
            });

        assert!(set_fetch_context(Arc::new(gateway), 7, 3));
        assert_eq!(start_page(), 3);
        assert_eq!(per_page(), 7);

        let page = fetch_page(2)
            .await
            .unwrap_or_else(|error| panic!("fetch should succeed: {error}"));
        assert_eq!(page.info.current_page(), 2);
    }
}
