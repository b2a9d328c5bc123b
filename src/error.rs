use thiserror::Error;

use crate::model::search_result::search_result::ResultSet;

/// Ways a single search call can fail. The `Display` output is the text the
/// agent sees, so callers that only look at strings keep working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Error: No SerpApi key provided.")]
    MissingApiKey,

    #[error("Error: No search query provided.")]
    EmptyQuery,

    #[error("Error during web search: {0}")]
    Transport(String),

    #[error("No results found for the query.")]
    NoResults,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_decode() {
            SearchError::Unexpected(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Unexpected(err.to_string())
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({source})")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Result of one `execute` call before it is flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Results(ResultSet),
    Failed(SearchError),
    NoSearch,
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }

    pub fn render(&self) -> String {
        match self {
            SearchOutcome::Results(results) => results.render(),
            SearchOutcome::Failed(err) => err.to_string(),
            SearchOutcome::NoSearch => "No search performed".to_string(),
        }
    }
}

impl From<Result<ResultSet, SearchError>> for SearchOutcome {
    fn from(result: Result<ResultSet, SearchError>) -> Self {
        match result {
            Ok(results) => SearchOutcome::Results(results),
            Err(err) => SearchOutcome::Failed(err),
        }
    }
}
