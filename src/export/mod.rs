//! Delimited text export of creator results

use crate::search::CreatorRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Column headers, in output order
pub const HEADERS: [&str; 10] = [
    "Channel Name",
    "YouTube Link",
    "Search Keyword",
    "Subscriber Count",
    "Email",
    "Last Video",
    "Last Video Date",
    "Instagram",
    "TikTok",
    "LinkedIn",
];

/// A result set submitted for export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Keyword used for the file name
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub creators: Vec<CreatorRecord>,
}

/// Quote a field only when it would otherwise break the row
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn row(record: &CreatorRecord) -> String {
    let followers = record.followers.to_string();
    let fields: [&str; 10] = [
        &record.handle,
        &record.link,
        &record.keyword,
        &followers,
        &record.email,
        &record.last_video,
        &record.last_video_date,
        &record.instagram,
        &record.tiktok,
        &record.linkedin,
    ];

    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render records as CSV: header line, then one line per record in order.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn to_csv(records: &[CreatorRecord]) -> String {
    std::iter::once(HEADERS.join(","))
        .chain(records.iter().map(row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keyword reduced to characters safe in a file name
fn filename_keyword(keyword: &str) -> String {
    keyword
        .trim()
        .chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => c,
            c if c.is_whitespace() => '-',
            _ => '_',
        })
        .collect()
}

/// Download file name: `youtube-creators-{keyword}-{unix millis}.csv`
pub fn export_filename(keyword: &str, at: DateTime<Utc>) -> String {
    format!(
        "youtube-creators-{}-{}.csv",
        filename_keyword(keyword),
        at.timestamp_millis()
    )
}

/// `Content-Disposition` value with an ASCII name and the exact UTF-8 name
pub fn content_disposition(keyword: &str, at: DateTime<Utc>) -> String {
    let exact = format!(
        "youtube-creators-{}-{}.csv",
        keyword.trim(),
        at.timestamp_millis()
    );

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        export_filename(keyword, at),
        urlencoding::encode(&exact)
    )
}
