//! Page state and display formatting for the search page

use crate::export::ExportRequest;
use crate::search::CreatorRecord;
use serde::Serialize;

/// Abbreviate a subscriber count: `999`, `1.5K`, `2.3M`
pub fn format_followers(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// A creator record plus its display-only fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRow {
    #[serde(flatten)]
    pub record: CreatorRecord,
    pub followers_display: String,
}

impl From<CreatorRecord> for CreatorRow {
    fn from(record: CreatorRecord) -> Self {
        let followers_display = format_followers(record.followers);
        Self {
            record,
            followers_display,
        }
    }
}

/// Everything the search page renders for one request
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageState {
    pub instance_name: String,
    /// Form inputs, echoed back as typed
    pub keyword: String,
    pub min_followers: String,
    pub max_followers: String,
    pub uploaded_after: String,
    /// Rows from the last successful search
    pub results: Vec<CreatorRow>,
    pub error: Option<String>,
    /// Whether the form has been submitted
    pub searched: bool,
    /// JSON body posted back by the export button
    pub export_payload: String,
}

impl PageState {
    /// Replace the result list after a successful search
    pub fn set_results(&mut self, keyword: &str, records: Vec<CreatorRecord>) {
        self.error = None;
        self.export_payload = if records.is_empty() {
            String::new()
        } else {
            let request = ExportRequest {
                keyword: keyword.to_string(),
                creators: records.clone(),
            };
            serde_json::to_string(&request).unwrap_or_default()
        };
        self.results = records.into_iter().map(CreatorRow::from).collect();
    }

    /// Record a failure; previous results are cleared
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.results.clear();
        self.export_payload.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_followers() {
        assert_eq!(format_followers(0), "0");
        assert_eq!(format_followers(999), "999");
        assert_eq!(format_followers(1_000), "1.0K");
        assert_eq!(format_followers(1_500), "1.5K");
        assert_eq!(format_followers(2_300_000), "2.3M");
        assert_eq!(format_followers(1_000_000), "1.0M");
    }

    #[test]
    fn test_set_results_builds_rows_and_payload() {
        let mut page = PageState::default();
        let record = CreatorRecord {
            handle: "Chess Coach".into(),
            followers: 45_600,
            ..Default::default()
        };
        page.set_results("chess", vec![record]);

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].followers_display, "45.6K");

        let payload: ExportRequest = serde_json::from_str(&page.export_payload).unwrap();
        assert_eq!(payload.keyword, "chess");
        assert_eq!(payload.creators[0].handle, "Chess Coach");
    }

    #[test]
    fn test_set_error_clears_results() {
        let mut page = PageState::default();
        page.set_results("chess", vec![CreatorRecord::default()]);
        page.set_error("quotaExceeded");

        assert!(page.results.is_empty());
        assert!(page.export_payload.is_empty());
        assert_eq!(page.error.as_deref(), Some("quotaExceeded"));
    }

    #[test]
    fn test_row_serializes_flat() {
        let row = CreatorRow::from(CreatorRecord {
            last_video: "https://www.youtube.com/watch?v=a".into(),
            followers: 12,
            ..Default::default()
        });
        let value = serde_json::to_value(&row).unwrap();

        assert_eq!(value["lastVideo"], "https://www.youtube.com/watch?v=a");
        assert_eq!(value["followersDisplay"], "12");
    }
}
