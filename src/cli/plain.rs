//! One-shot plain listing of a user page to stdout.

use std::io::{self, Write};

use userdeck::{FetchError, HttpUserGateway, UserGateway, UserdeckConfig};

use super::output::write_user_listing;

/// Runs the plain listing mode.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the provider call
/// fails, or stdout cannot be written. Unlike the TUI, the one-shot mode
/// surfaces fetch failures to the caller so the exit code reflects them.
pub async fn run(config: &UserdeckConfig) -> Result<(), FetchError> {
    let page_number = config.validated_start_page()?;
    let gateway = HttpUserGateway::new(config.resolve_api_base())?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(&gateway, page_number, config.page_size, &mut stdout).await
}

/// Fetches one page through the given gateway and writes the listing.
pub(crate) async fn run_with_gateway<W: Write>(
    gateway: &dyn UserGateway,
    page_number: u32,
    page_size: u8,
    writer: &mut W,
) -> Result<(), FetchError> {
    let page = gateway.fetch_page(page_number, page_size).await?;
    write_user_listing(writer, &page)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use userdeck::provider::models::test_support::minimal_user;
    use userdeck::{FetchError, PageInfo, UserGateway, UserPage};

    use super::run_with_gateway;

    /// Gateway double that serves a single queued response.
    struct QueuedGateway {
        response: Mutex<Option<Result<UserPage, FetchError>>>,
    }

    impl QueuedGateway {
        fn new(response: Result<UserPage, FetchError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
            }
        }
    }

    #[async_trait]
    impl UserGateway for QueuedGateway {
        async fn fetch_page(&self, _page: u32, _per_page: u8) -> Result<UserPage, FetchError> {
            self.response
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take()
                .unwrap_or_else(|| {
                    Err(FetchError::Configuration {
                        message: "no queued response".to_owned(),
                    })
                })
        }
    }

    #[tokio::test]
    async fn plain_mode_writes_fetched_records() {
        let gateway = QueuedGateway::new(Ok(UserPage {
            records: vec![minimal_user(1, "Ada", "adal")],
            info: PageInfo::new(1, 5),
        }));
        let mut buffer = Vec::new();

        run_with_gateway(&gateway, 1, 5, &mut buffer)
            .await
            .unwrap_or_else(|error| panic!("listing should succeed: {error}"));

        let output =
            String::from_utf8(buffer).unwrap_or_else(|error| panic!("not UTF-8: {error}"));
        assert!(output.contains("Ada"));
        assert!(output.contains("@adal"));
    }

    #[tokio::test]
    async fn plain_mode_propagates_fetch_failure() {
        let gateway = QueuedGateway::new(Err(FetchError::Status {
            status: 500,
            message: "boom".to_owned(),
        }));
        let mut buffer = Vec::new();

        let result = run_with_gateway(&gateway, 1, 5, &mut buffer).await;
        assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));
        assert!(buffer.is_empty());
    }
}
