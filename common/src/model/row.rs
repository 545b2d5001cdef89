//! Wire shape of the `testimonials` table and the mapping to and from the
//! in-memory entity.
//!
//! The remote store speaks in flat rows with one column per field; the
//! application works with a tagged content variant. The conversions here are
//! purely representational: nothing is validated, absent columns stay
//! `None`, and columns that belong to the other variant are omitted from the
//! serialized form so a write can never clobber them.

use serde::{Deserialize, Serialize};

use crate::model::testimonial::{NewTestimonial, Testimonial, TestimonialContent, TestimonialKind};

/// One row of the `testimonials` table, exactly as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRow {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: String,
}

impl From<TestimonialRow> for Testimonial {
    fn from(row: TestimonialRow) -> Self {
        // Rows with an unrecognized type render as written ones.
        let content = match row.kind.as_str() {
            "linkedin" => TestimonialContent::Linkedin {
                headline: row.headline,
                screenshot_url: row.screenshot_url,
                source_url: row.linkedin_url,
            },
            _ => TestimonialContent::Written {
                text: row.text.unwrap_or_default(),
                role: row.role,
                company: row.company,
                avatar_url: row.avatar_url,
            },
        };

        Testimonial {
            id: row.id,
            name: row.name,
            content,
            approved: row.approved,
            verified: row.verified,
            rating: row.rating,
            source: row.source,
            tags: row.tags,
            created_at: row.created_at,
        }
    }
}

impl From<Testimonial> for TestimonialRow {
    fn from(entity: Testimonial) -> Self {
        let kind = entity.content.kind();
        let (text, role, company, avatar_url, headline, screenshot_url, linkedin_url) =
            split_content(entity.content);

        TestimonialRow {
            id: entity.id,
            name: entity.name,
            kind: kind.as_str().to_string(),
            text,
            role,
            company,
            avatar_url,
            headline,
            screenshot_url,
            linkedin_url,
            approved: entity.approved,
            verified: entity.verified,
            rating: entity.rating,
            source: entity.source,
            tags: entity.tags,
            created_at: entity.created_at,
        }
    }
}

/// Insert payload for a new testimonial.
///
/// Server-assigned columns (`id`, `created_at`) and the legacy `verified`
/// flag are absent, and `approved` is always written as `false`: every
/// submission starts pending review, whoever submitted it.
#[derive(Debug, Clone, Serialize)]
pub struct InsertRow {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<NewTestimonial> for InsertRow {
    fn from(draft: NewTestimonial) -> Self {
        let kind = draft.content.kind();
        let (text, role, company, avatar_url, headline, screenshot_url, linkedin_url) =
            split_content(draft.content);

        InsertRow {
            name: draft.name,
            kind: kind.as_str().to_string(),
            text,
            role,
            company,
            avatar_url,
            headline,
            screenshot_url,
            linkedin_url,
            approved: false,
            rating: draft.rating,
            source: draft.source,
            tags: draft.tags,
        }
    }
}

type ContentColumns = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Flattens a content variant into its columns, leaving the other variant's
/// columns `None`.
fn split_content(content: TestimonialContent) -> ContentColumns {
    match content {
        TestimonialContent::Written {
            text,
            role,
            company,
            avatar_url,
        } => (Some(text), role, company, avatar_url, None, None, None),
        TestimonialContent::Linkedin {
            headline,
            screenshot_url,
            source_url,
        } => (None, None, None, None, headline, screenshot_url, source_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written_entity() -> Testimonial {
        Testimonial {
            id: "abc123".to_string(),
            name: "Alex Chen".to_string(),
            content: TestimonialContent::Written {
                text: "The program changed my career.".to_string(),
                role: Some("Ad Operations Manager".to_string()),
                company: None,
                avatar_url: Some("data:image/png;base64,aGk=".to_string()),
            },
            approved: true,
            verified: false,
            rating: Some(5),
            source: None,
            tags: Some(vec!["career".to_string(), "ads".to_string()]),
            created_at: "2024-01-10T09:30:00Z".to_string(),
        }
    }

    fn linkedin_entity() -> Testimonial {
        Testimonial {
            id: "def456".to_string(),
            name: "Sarah Johnson".to_string(),
            content: TestimonialContent::Linkedin {
                headline: Some("Loved every week of it".to_string()),
                screenshot_url: Some("data:image/jpeg;base64,c2hvdA==".to_string()),
                source_url: Some("https://www.linkedin.com/posts/sarah".to_string()),
            },
            approved: false,
            verified: false,
            rating: None,
            source: Some("linkedin".to_string()),
            tags: None,
            created_at: "2024-02-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn written_round_trip_is_lossless() {
        let entity = written_entity();
        let back = Testimonial::from(TestimonialRow::from(entity.clone()));
        assert_eq!(entity, back);
    }

    #[test]
    fn linkedin_round_trip_is_lossless() {
        let entity = linkedin_entity();
        let back = Testimonial::from(TestimonialRow::from(entity.clone()));
        assert_eq!(entity, back);
    }

    #[test]
    fn null_columns_stay_absent() {
        let raw = r#"{
            "id": "x1",
            "name": "Jo",
            "type": "written",
            "text": "Hi",
            "role": null,
            "company": null,
            "avatar_url": null,
            "headline": null,
            "screenshot_url": null,
            "linkedin_url": null,
            "approved": false,
            "verified": false,
            "rating": null,
            "source": null,
            "tags": null,
            "created_at": "2024-03-01T00:00:00Z"
        }"#;
        let row: TestimonialRow = serde_json::from_str(raw).unwrap();
        let entity = Testimonial::from(row);
        match &entity.content {
            TestimonialContent::Written {
                role,
                company,
                avatar_url,
                ..
            } => {
                assert_eq!(role, &None);
                assert_eq!(company, &None);
                assert_eq!(avatar_url, &None);
            }
            other => panic!("expected written content, got {other:?}"),
        }
        assert_eq!(entity.tags, None);
    }

    #[test]
    fn written_row_omits_linkedin_columns() {
        let row = TestimonialRow::from(written_entity());
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("headline"));
        assert!(!object.contains_key("screenshot_url"));
        assert!(!object.contains_key("linkedin_url"));
        assert_eq!(object["type"], "written");
    }

    #[test]
    fn linkedin_row_omits_written_columns() {
        let row = TestimonialRow::from(linkedin_entity());
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("text"));
        assert!(!object.contains_key("role"));
        assert!(!object.contains_key("company"));
        assert!(!object.contains_key("avatar_url"));
    }

    #[test]
    fn insert_always_starts_unapproved() {
        let draft = NewTestimonial {
            name: "Jane Doe".to_string(),
            content: TestimonialContent::Written {
                text: "Great program".to_string(),
                role: None,
                company: None,
                avatar_url: None,
            },
            approved: true,
            rating: None,
            source: None,
            tags: None,
        };
        let insert = InsertRow::from(draft);
        assert!(!insert.approved);

        let value = serde_json::to_value(&insert).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("created_at"));
        assert!(!object.contains_key("verified"));
    }

    #[test]
    fn written_submission_keeps_absent_fields_absent() {
        let draft = NewTestimonial {
            name: "Jane Doe".to_string(),
            content: TestimonialContent::Written {
                text: "Great program".to_string(),
                role: None,
                company: None,
                avatar_url: None,
            },
            approved: false,
            rating: None,
            source: None,
            tags: None,
        };
        let insert = InsertRow::from(draft);
        assert_eq!(insert.text.as_deref(), Some("Great program"));
        assert_eq!(insert.avatar_url, None);
        assert_eq!(insert.kind, "written");

        let value = serde_json::to_value(&insert).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("avatar_url"));
    }

    #[test]
    fn unknown_type_falls_back_to_written() {
        let raw = r#"{
            "id": "x2",
            "name": "Sam",
            "type": "video",
            "text": "A clip",
            "approved": true,
            "verified": false,
            "created_at": "2024-03-02T00:00:00Z"
        }"#;
        let row: TestimonialRow = serde_json::from_str(raw).unwrap();
        let entity = Testimonial::from(row);
        assert!(matches!(
            entity.content,
            TestimonialContent::Written { .. }
        ));
    }
}
