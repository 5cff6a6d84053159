//! Client-side routes and the hrefs that carry a selection between them.

use crate::bindings::FileEntry;

pub const DASHBOARD_PATH: &str = "/";
pub const UPLOAD_PATH: &str = "/upload_file";

pub const FILE_NAME_PARAM: &str = "file_name";
pub const TABLE_NAME_PARAM: &str = "table_name";

/// Dashboard href, optionally preselecting a file through the query string
pub fn dashboard_href(file: Option<&FileEntry>) -> String {
    match file {
        Some(file) => format!(
            "{}?{}={}&{}={}",
            DASHBOARD_PATH,
            FILE_NAME_PARAM,
            urlencoding::encode(&file.file_name),
            TABLE_NAME_PARAM,
            urlencoding::encode(&file.table_name),
        ),
        None => DASHBOARD_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_href_without_selection() {
        assert_eq!(dashboard_href(None), "/");
    }

    #[test]
    fn test_dashboard_href_with_selection() {
        let file = FileEntry::new("a.csv", "sales_x");
        assert_eq!(dashboard_href(Some(&file)), "/?file_name=a.csv&table_name=sales_x");
    }

    #[test]
    fn test_dashboard_href_encodes_values() {
        let file = FileEntry::new("q1 sales&returns.csv", "sales_1");
        assert_eq!(
            dashboard_href(Some(&file)),
            "/?file_name=q1%20sales%26returns.csv&table_name=sales_1"
        );
    }
}
