use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Server-assigned identifier; absent until the announcement is persisted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,

    /// Identifier of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_announcement_from_backend_document() {
        let announcement: Announcement = serde_json::from_value(json!({
            "_id": "a1",
            "title": "Midterm",
            "description": "Room 204",
            "course": "CS101",
            "createdAt": "2024-10-02T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(announcement.id.as_deref(), Some("a1"));
        assert_eq!(announcement.course.as_deref(), Some("CS101"));
        assert!(announcement.semester.is_none());
        assert!(announcement.created_at.is_some());
    }

    #[test]
    fn test_unsaved_announcement_has_no_id_field() {
        let draft = Announcement {
            title: "Welcome".to_string(),
            description: "First week".to_string(),
            ..Announcement::default()
        };
        let value = serde_json::to_value(&draft).unwrap();

        assert!(value.get("_id").is_none());
        assert_eq!(value["title"], "Welcome");
    }
}
