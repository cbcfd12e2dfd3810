use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend readiness, as reported by `GET /status`. Absent flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessStatus {
    pub model_loaded: bool,
    pub embeddings_loaded: bool,
}

impl ReadinessStatus {
    pub fn is_ready(&self) -> bool {
        self.model_loaded && self.embeddings_loaded
    }
}

/// Product identifier; the backend sends numbers but strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(n) => write!(f, "{n}"),
            ResultId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResultId {
    fn from(n: i64) -> Self {
        ResultId::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Absent or null ids are tolerated; the card then shows no id badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResultId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Match percentage, 0 to 100.
    #[serde(default)]
    pub score: f64,
}

/// Body of a successful `POST /search`. A missing or null `results`
/// deserializes as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<SearchResult>,
}

/// Body of any non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SearchResult>>::deserialize(deserializer)?.unwrap_or_default())
}
