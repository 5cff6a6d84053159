use serde_json::Value;

use super::catalog::FileEntry;
use super::core::{new_form, post_form, ApiError, ANALYSE_URL};

/// A question about one table. Only constructible from a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatQuery {
    pub query: String,
    pub table_name: String,
}

impl ChatQuery {
    pub fn new(query: impl Into<String>, file: &FileEntry) -> Self {
        Self {
            query: query.into(),
            table_name: file.table_name.clone(),
        }
    }

    /// Multipart field names and values, in submission order
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("query", self.query.as_str()), ("table_name", self.table_name.as_str())]
    }
}

/// Reply body of `/api/analyse`. The schema is not fixed; the backend
/// currently answers `{"message": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyseReply(pub Value);

impl AnalyseReply {
    /// Text shown in the transcript for this reply
    pub fn display_text(&self) -> String {
        match &self.0 {
            Value::Object(map) => match map.get("message") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => pretty(other),
                None => pretty(&self.0),
            },
            Value::String(s) => s.clone(),
            other => pretty(other),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Submit a query for the selected table
pub async fn analyse(query: &ChatQuery) -> Result<AnalyseReply, ApiError> {
    let form = new_form()?;
    for (name, value) in query.fields() {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    }

    log::info!("Analyse request for table {}", query.table_name);
    let resp = post_form(ANALYSE_URL, &form).await?;
    resp.json::<Value>().map(AnalyseReply)
}
