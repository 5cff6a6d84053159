use serde::{Deserialize, Serialize};

use super::core::{get, ApiError, RawResponse, GET_FILES_URL};

/// An uploaded dataset and the table the backend created for it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEntry {
    pub file_name: String,
    pub table_name: String,
}

impl FileEntry {
    pub fn new(file_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            table_name: table_name.into(),
        }
    }
}

/// Interpret a `/api/getfiles` response. A `null` or empty body is an empty catalog.
pub fn parse_catalog(resp: &RawResponse) -> Result<Vec<FileEntry>, ApiError> {
    if resp.is_success() && resp.body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Option<Vec<FileEntry>> = resp.json()?;
    Ok(entries.unwrap_or_default())
}

/// Fetch the catalog of previously uploaded files
pub async fn get_files() -> Result<Vec<FileEntry>, ApiError> {
    let resp = get(GET_FILES_URL).await?;
    let entries = parse_catalog(&resp);
    match &entries {
        Ok(list) => log::debug!("Catalog loaded: {} file(s)", list.len()),
        Err(e) => log::warn!("Catalog fetch failed: {}", e),
    }
    entries
}
