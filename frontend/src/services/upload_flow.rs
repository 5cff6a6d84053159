//! What an upload attempt means for the user: an optional blocking alert and
//! where to navigate next.

use serde::Deserialize;

use crate::bindings::{error_message_from_body, upload_file, ApiError, FileEntry, RawResponse};
use crate::services::navigation::dashboard_href;

pub const CSV_ONLY_MESSAGE: &str = "Only .csv file supported please provide the correct format";

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Stored; the dashboard opens the new file
    Uploaded(FileEntry),
    /// Stored, but the response did not name the table
    UploadedUnnamed,
    /// Refused or failed, with the message to alert
    Rejected(String),
}

#[derive(Deserialize)]
struct UploadReceipt {
    file_name: Option<String>,
    table_name: Option<String>,
}

impl UploadOutcome {
    /// Client-side check run before anything is sent
    pub fn precheck(file_name: &str) -> Option<Self> {
        if file_name.to_ascii_lowercase().ends_with(".csv") {
            None
        } else {
            Some(UploadOutcome::Rejected(CSV_ONLY_MESSAGE.to_string()))
        }
    }

    pub fn from_response(resp: &RawResponse) -> Self {
        if !resp.is_success() {
            return UploadOutcome::Rejected(error_message_from_body(resp.status, &resp.body));
        }
        match serde_json::from_str::<UploadReceipt>(&resp.body) {
            Ok(UploadReceipt {
                file_name: Some(file_name),
                table_name: Some(table_name),
            }) => UploadOutcome::Uploaded(FileEntry::new(file_name, table_name)),
            Ok(_) => UploadOutcome::UploadedUnnamed,
            Err(e) => {
                log::warn!("Upload succeeded with unreadable body: {}", e);
                UploadOutcome::UploadedUnnamed
            }
        }
    }

    pub fn from_transport_error(err: &ApiError) -> Self {
        UploadOutcome::Rejected(err.to_string())
    }

    pub fn alert_message(&self) -> Option<&str> {
        match self {
            UploadOutcome::Rejected(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn redirect_href(&self) -> String {
        match self {
            UploadOutcome::Uploaded(file) => dashboard_href(Some(file)),
            UploadOutcome::UploadedUnnamed | UploadOutcome::Rejected(_) => dashboard_href(None),
        }
    }
}

/// Validate, send, and classify one upload
pub async fn submit_upload(file: &web_sys::File) -> UploadOutcome {
    let name = file.name();
    if let Some(rejected) = UploadOutcome::precheck(&name) {
        log::info!("Refusing non-CSV upload {}", name);
        return rejected;
    }

    match upload_file(file).await {
        Ok(resp) => UploadOutcome::from_response(&resp),
        Err(e) => {
            log::error!("Upload of {} failed: {}", name, e);
            UploadOutcome::from_transport_error(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_upload_alerts_and_redirects_home() {
        let outcome = UploadOutcome::from_response(&RawResponse::new(400, r#"{"error":"bad file"}"#));
        assert_eq!(outcome.alert_message(), Some("bad file"));
        assert_eq!(outcome.redirect_href(), "/");
    }

    #[test]
    fn test_successful_upload_selects_new_file() {
        let outcome = UploadOutcome::from_response(&RawResponse::new(
            200,
            r#"{"file_name":"a.csv","table_name":"sales_x"}"#,
        ));
        assert_eq!(outcome, UploadOutcome::Uploaded(FileEntry::new("a.csv", "sales_x")));
        assert_eq!(outcome.alert_message(), None);
        assert_eq!(outcome.redirect_href(), "/?file_name=a.csv&table_name=sales_x");
    }

    #[test]
    fn test_success_without_identifiers() {
        let outcome = UploadOutcome::from_response(&RawResponse::new(200, r#"{"message":"Data is loaded"}"#));
        assert_eq!(outcome, UploadOutcome::UploadedUnnamed);
        assert_eq!(outcome.alert_message(), None);
        assert_eq!(outcome.redirect_href(), "/");
    }

    #[test]
    fn test_server_error_without_json() {
        let outcome = UploadOutcome::from_response(&RawResponse::new(500, "Internal Server Error"));
        assert_eq!(outcome.alert_message(), Some("Request failed with status 500"));
    }

    #[test]
    fn test_transport_error_is_rejected() {
        let outcome = UploadOutcome::from_transport_error(&ApiError::Network("offline".into()));
        assert_eq!(outcome.alert_message(), Some("Network error: offline"));
        assert_eq!(outcome.redirect_href(), "/");
    }

    #[test]
    fn test_precheck_extension() {
        assert_eq!(UploadOutcome::precheck("sales.csv"), None);
        assert_eq!(UploadOutcome::precheck("SALES.CSV"), None);
        assert_eq!(
            UploadOutcome::precheck("sales.xlsx"),
            Some(UploadOutcome::Rejected(CSV_ONLY_MESSAGE.to_string()))
        );
    }
}
