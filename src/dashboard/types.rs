//! Media records shown on the dashboard

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a media record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// An uploaded media record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
}

/// Table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Type,
    UploadedAt,
    UploadedBy,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Title,
        Column::Type,
        Column::UploadedAt,
        Column::UploadedBy,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Type => "Type",
            Self::UploadedAt => "Uploaded At",
            Self::UploadedBy => "Uploaded By",
        }
    }
}

impl MediaItem {
    /// Text of one table cell. Dates render as `Mar 10, 2024, 10:00 AM` (UTC).
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Title => self.title.clone(),
            Column::Type => self.kind.as_str().to_string(),
            Column::UploadedAt => self.uploaded_at.format("%b %-d, %Y, %I:%M %p").to_string(),
            Column::UploadedBy => self.uploaded_by.clone(),
        }
    }
}

fn sample(
    id: &str,
    title: &str,
    kind: MediaKind,
    url: &str,
    uploaded_at: DateTime<Utc>,
    uploaded_by: &str,
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        url: url.to_string(),
        uploaded_at,
        uploaded_by: uploaded_by.to_string(),
    }
}

/// The fixed records the dashboard displays
pub fn sample_media() -> Vec<MediaItem> {
    vec![
        sample(
            "1",
            "Introduction Video",
            MediaKind::Video,
            "https://example.com/video1",
            Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap(),
            "John Doe",
        ),
        sample(
            "2",
            "Background Music",
            MediaKind::Audio,
            "https://example.com/audio1",
            Utc.with_ymd_and_hms(2024, 3, 9, 15, 30, 0).unwrap(),
            "Jane Smith",
        ),
        sample(
            "3",
            "Product Demo",
            MediaKind::Video,
            "https://example.com/video2",
            Utc.with_ymd_and_hms(2024, 3, 8, 9, 15, 0).unwrap(),
            "Mike Johnson",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_render_per_column() {
        let items = sample_media();
        let row: Vec<_> = Column::ALL.iter().map(|c| items[1].cell(*c)).collect();
        assert_eq!(
            row,
            vec!["Background Music", "audio", "Mar 9, 2024, 03:30 PM", "Jane Smith"]
        );
        assert_eq!(items[0].cell(Column::UploadedAt), "Mar 10, 2024, 10:00 AM");
    }

    #[test]
    fn serialises_with_wire_names() {
        let value = serde_json::to_value(&sample_media()[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "title": "Introduction Video",
                "type": "video",
                "url": "https://example.com/video1",
                "uploadedAt": "2024-03-10T10:00:00Z",
                "uploadedBy": "John Doe"
            })
        );
    }
}
