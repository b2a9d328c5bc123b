pub mod web_search {
    //! Web search tool: sends the agent's query to SerpApi and returns the
    //! organic results as plain text.
    use crate::config::SearchConfig;
    use crate::error::{ConfigError, SearchError, SearchOutcome};
    use crate::model::search_result::search_result::ResultSet;
    use crate::tool::serp_api::serp_api::{SearchBackend, SerpApiClient};
    use crate::tool::tool::tool::{Parameter, Tool, ToolCall};
    use serde_json;
    use std::collections::HashMap;
    use std::error::Error;
    use tracing::{info, warn};

    pub struct WebSearchTool {
        tool: Tool,
        config: SearchConfig,
        backend: Box<dyn SearchBackend>,
    }

    impl WebSearchTool {
        pub fn new(config: SearchConfig) -> Self {
            let backend = Box::new(SerpApiClient::new(&config));
            Self::with_backend(config, backend)
        }

        pub fn from_env() -> Result<Self, ConfigError> {
            Ok(Self::new(SearchConfig::from_env()?))
        }

        pub fn with_backend(config: SearchConfig, backend: Box<dyn SearchBackend>) -> Self {
            let mut parameters = HashMap::new();

            let mut query_items = HashMap::new();
            query_items.insert("type".to_string(), "string".to_string());
            parameters.insert(
                "query".to_string(),
                Parameter {
                    items: query_items,
                    description: "The search query to send to the web search engine.".to_string(),
                },
            );

            let tool = Tool {
                name: "web_search".to_string(),
                description: "Search the web with Google through SerpApi. Returns the title, snippet and link of the top organic results.".to_string(),
                parameters,
                required: vec!["query".to_string()],
            };

            Self {
                tool,
                config,
                backend,
            }
        }

        /// Run a search and keep the typed result.
        pub fn search(&self, query: &str) -> Result<ResultSet, SearchError> {
            let api_key = self.config.api_key().ok_or(SearchError::MissingApiKey)?;

            let query = query.trim();
            info!("Searching for: {}", query);
            if query.is_empty() {
                return Err(SearchError::EmptyQuery);
            }

            let response = self.backend.fetch(query, api_key)?;
            ResultSet::from_response(response, self.config.max_results)
        }

        /// Search for the first query in `blocks`; any further entries are
        /// ignored. `_safety` is accepted for the tool interface and unused.
        pub fn search_blocks<S: AsRef<str>>(&self, blocks: &[S], _safety: bool) -> SearchOutcome {
            let Some(first) = blocks.first() else {
                return SearchOutcome::NoSearch;
            };

            let outcome = SearchOutcome::from(self.search(first.as_ref()));
            if outcome.is_failure() {
                warn!(error = %outcome.render(), "web search failed");
            }
            outcome
        }

        pub fn execute<S: AsRef<str>>(&self, blocks: &[S], safety: bool) -> String {
            self.search_blocks(blocks, safety).render()
        }

        pub fn execution_failure_check(&self, output: &str) -> bool {
            output.starts_with("Error") || output.contains("No results found")
        }

        pub fn interpreter_feedback(&self, output: &str) -> String {
            if self.execution_failure_check(output) {
                format!("Web search failed: {}", output)
            } else {
                format!("Web search result:\n{}", output)
            }
        }
    }

    impl ToolCall for WebSearchTool {
        fn get_json(&self) -> Result<serde_json::Value, serde_json::Error> {
            self.tool.get_json()
        }

        fn run(&self, arguments: &str) -> Result<String, Box<dyn Error>> {
            let args: serde_json::Value = serde_json::from_str(arguments)?;
            let query = args
                .get("query")
                .and_then(|v| v.as_str())
                .ok_or("Missing required parameter: query")?;

            let output = self.execute(&[query], true);
            Ok(self.interpreter_feedback(&output))
        }

        fn name(&self) -> &str {
            "web_search"
        }
    }

}
