pub mod search_result {
    //! Provider response body and the formatted result set built from it.
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    use crate::error::SearchError;

    pub const NO_TITLE: &str = "No title";
    pub const NO_SNIPPET: &str = "No snippet available";
    pub const NO_LINK: &str = "No link available";

    /// Body returned by the provider. Only `organic_results` is read; every
    /// other field in the payload is ignored. Entries stay untyped until they
    /// are rendered so one odd entry cannot fail the whole body.
    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct SerpResponse {
        #[serde(default)]
        pub organic_results: Option<Vec<Value>>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    pub struct OrganicResult {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub snippet: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub link: Option<String>,
    }

    impl OrganicResult {
        pub fn from_value(entry: &Value) -> Self {
            Self {
                title: field_text(entry, "title"),
                snippet: field_text(entry, "snippet"),
                link: field_text(entry, "link"),
            }
        }
    }

    /// Scalars are shown as text; null, arrays and objects count as missing.
    fn field_text(entry: &Value, key: &str) -> Option<String> {
        match entry.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct SearchResult {
        pub title: String,
        pub snippet: String,
        pub link: String,
    }

    impl From<OrganicResult> for SearchResult {
        fn from(result: OrganicResult) -> Self {
            Self {
                title: result.title.unwrap_or_else(|| NO_TITLE.to_string()),
                snippet: result.snippet.unwrap_or_else(|| NO_SNIPPET.to_string()),
                link: result.link.unwrap_or_else(|| NO_LINK.to_string()),
            }
        }
    }

    impl SearchResult {
        pub fn render(&self) -> String {
            format!(
                "Title: {}\nSnippet: {}\nLink: {}",
                self.title, self.snippet, self.link
            )
        }
    }

    /// Ordered hits from one search, never empty.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ResultSet {
        results: Vec<SearchResult>,
    }

    impl ResultSet {
        /// Keep the first `max_results` organic hits. An absent or empty
        /// `organic_results` is `SearchError::NoResults`.
        pub fn from_response(
            response: SerpResponse,
            max_results: usize,
        ) -> Result<Self, SearchError> {
            let results: Vec<SearchResult> = response
                .organic_results
                .unwrap_or_default()
                .iter()
                .take(max_results)
                .map(OrganicResult::from_value)
                .map(SearchResult::from)
                .collect();

            if results.is_empty() {
                return Err(SearchError::NoResults);
            }
            Ok(Self { results })
        }

        pub fn results(&self) -> &[SearchResult] {
            &self.results
        }

        /// Blocks separated by a blank line.
        pub fn render(&self) -> String {
            self.results
                .iter()
                .map(SearchResult::render)
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }

}
