#[cfg(test)]
mod tests {
    use crate::bindings::analyse::{AnalyseReply, ChatQuery};
    use crate::bindings::catalog::{parse_catalog, FileEntry};
    use crate::bindings::core::{error_message_from_body, ApiError, ApiErrorBody, RawResponse};
    use serde_json::json;

    // --- Catalog ---
    #[test]
    fn test_catalog_deserialization() {
        let resp = RawResponse::new(
            200,
            r#"[{"file_name":"fact_sales.csv","table_name":"sales_75885eaab491"},
                {"file_name":"orders.csv","table_name":"orders_9s0t1u2v3w4x"}]"#,
        );
        let entries = parse_catalog(&resp).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], FileEntry::new("fact_sales.csv", "sales_75885eaab491"));
        assert_eq!(entries[1].table_name, "orders_9s0t1u2v3w4x");
    }

    #[test]
    fn test_catalog_empty_and_missing() {
        assert!(parse_catalog(&RawResponse::new(200, "[]")).unwrap().is_empty());
        assert!(parse_catalog(&RawResponse::new(200, "null")).unwrap().is_empty());
        assert!(parse_catalog(&RawResponse::new(200, "")).unwrap().is_empty());
    }

    #[test]
    fn test_catalog_failure_status() {
        let resp = RawResponse::new(502, r#"{"error":"Backend unavailable"}"#);
        let err = parse_catalog(&resp).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: "Backend unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_catalog_malformed_json() {
        let err = parse_catalog(&RawResponse::new(200, "{not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_file_entry_serialization() {
        let value = serde_json::to_value(FileEntry::new("a.csv", "sales_x")).unwrap();
        assert_eq!(value, json!({"file_name": "a.csv", "table_name": "sales_x"}));
    }

    // --- Errors ---
    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(error_message_from_body(400, r#"{"error":"bad file"}"#), "bad file");
    }

    #[test]
    fn test_error_message_from_validation_detail() {
        let msg = error_message_from_body(422, r#"{"detail":[{"msg":"too short"}]}"#);
        assert!(msg.contains("too short"));
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message_from_body(500, "<html>oops</html>"),
            "Request failed with status 500"
        );
        assert_eq!(error_message_from_body(500, r#"{"error":""}"#), "Request failed with status 500");
    }

    #[test]
    fn test_error_body_default_has_no_message() {
        assert_eq!(ApiErrorBody::default().message(), None);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
        let status = ApiError::Status {
            status: 400,
            message: "bad file".into(),
        };
        assert_eq!(status.to_string(), "bad file");
    }

    // --- Analyse ---
    #[test]
    fn test_chat_query_fields() {
        let file = FileEntry::new("a.csv", "sales_x");
        let query = ChatQuery::new("total revenue by region", &file);
        assert_eq!(
            query.fields(),
            [("query", "total revenue by region"), ("table_name", "sales_x")]
        );
    }

    #[test]
    fn test_analyse_reply_string_message() {
        let reply = AnalyseReply(json!({"message": "42 rows"}));
        assert_eq!(reply.display_text(), "42 rows");
    }

    #[test]
    fn test_analyse_reply_structured_message() {
        let reply = AnalyseReply(json!({"message": [{"region": "EU", "total": 10}]}));
        let text = reply.display_text();
        assert!(text.contains("\"region\": \"EU\""));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_analyse_reply_without_message_field() {
        let reply = AnalyseReply(json!({"rows": 3}));
        assert!(reply.display_text().contains("\"rows\": 3"));
        assert_eq!(AnalyseReply(json!("plain")).display_text(), "plain");
    }
}
