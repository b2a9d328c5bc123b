pub mod serp_api {
    //! HTTP client for the SerpApi search endpoint. The request is async
    //! reqwest driven on a shared runtime so callers see one blocking call.
    use crate::config::SearchConfig;
    use crate::error::SearchError;
    use crate::model::search_result::search_result::SerpResponse;
    use once_cell::sync::OnceCell;
    use reqwest::Client;
    use serde::Serialize;
    use std::thread;
    use tokio::runtime::{Handle, Runtime};
    use tracing::debug;

    static RUNTIME: OnceCell<Runtime> = OnceCell::new();

    /// Source of raw search responses.
    pub trait SearchBackend: Send + Sync {
        fn fetch(&self, query: &str, api_key: &str) -> Result<SerpResponse, SearchError>;
    }

    /// Query string sent with every request.
    #[derive(Debug, Clone, Serialize, PartialEq, Eq)]
    pub struct SearchParams<'a> {
        pub q: &'a str,
        pub api_key: &'a str,
        pub num: u32,
        pub output: &'static str,
    }

    impl<'a> SearchParams<'a> {
        pub fn new(query: &'a str, api_key: &'a str, num: u32) -> Self {
            Self {
                q: query,
                api_key,
                num,
                output: "json",
            }
        }
    }

    pub struct SerpApiClient {
        client: Client,
        endpoint: String,
        num_results: u32,
    }

    impl SerpApiClient {
        pub fn new(config: &SearchConfig) -> Self {
            Self {
                client: Client::new(),
                endpoint: config.endpoint.clone(),
                num_results: config.num_results,
            }
        }

        async fn fetch_async(&self, query: &str, api_key: &str) -> Result<SerpResponse, SearchError> {
            let params = SearchParams::new(query, api_key, self.num_results);

            let response = self
                .client
                .get(&self.endpoint)
                .query(&params)
                .send()
                .await?
                .error_for_status()?;
            debug!(status = %response.status(), "search provider responded");

            let body = response.text().await?;
            let parsed: SerpResponse = serde_json::from_str(&body)?;
            Ok(parsed)
        }
    }

    fn runtime() -> Result<&'static Runtime, SearchError> {
        RUNTIME
            .get_or_try_init(Runtime::new)
            .map_err(|e| SearchError::Unexpected(format!("Failed to create async runtime: {}", e)))
    }

    impl SearchBackend for SerpApiClient {
        fn fetch(&self, query: &str, api_key: &str) -> Result<SerpResponse, SearchError> {
            debug!(endpoint = %self.endpoint, num = self.num_results, "sending search request");
            let runtime = runtime()?;
            if Handle::try_current().is_err() {
                return runtime.block_on(self.fetch_async(query, api_key));
            }

            // Already on a runtime thread: block_on here would panic.
            thread::scope(|scope| {
                scope
                    .spawn(|| runtime.block_on(self.fetch_async(query, api_key)))
                    .join()
                    .unwrap_or_else(|_| {
                        Err(SearchError::Unexpected("search request thread panicked".to_string()))
                    })
            })
        }
    }

}
