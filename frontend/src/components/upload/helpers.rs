//! Validation and draft assembly for the submission wizard.

use regex::Regex;

use common::model::testimonial::{NewTestimonial, TestimonialContent, TestimonialKind};

use super::state::UploadModal;

/// Turns the current form into a draft, or explains what is missing.
///
/// The image itself is not embedded here: the store client encodes the raw
/// file during `create`, so the draft's image field stays empty.
pub fn build_draft(form: &UploadModal) -> Result<NewTestimonial, String> {
    let kind = form
        .kind
        .ok_or_else(|| "Pick a testimonial type first.".to_string())?;

    let name = form.name.trim();
    if name.is_empty() {
        return Err("Please tell us your name.".to_string());
    }

    let content = match kind {
        TestimonialKind::Written => {
            let text = form.text.trim();
            if text.is_empty() {
                return Err("Please write a few words about your experience.".to_string());
            }
            TestimonialContent::Written {
                text: text.to_string(),
                role: optional(&form.role),
                company: optional(&form.company),
                avatar_url: None,
            }
        }
        TestimonialKind::Linkedin => {
            if form.image.is_none() {
                return Err("Please attach a screenshot of the LinkedIn post.".to_string());
            }
            let source_url = optional(&form.source_url);
            if let Some(url) = &source_url {
                if !valid_linkedin_url(url) {
                    return Err("That link does not look like a LinkedIn URL.".to_string());
                }
            }
            TestimonialContent::Linkedin {
                headline: optional(&form.headline),
                screenshot_url: None,
                source_url,
            }
        }
    };

    Ok(NewTestimonial {
        name: name.to_string(),
        content,
        approved: false,
        rating: None,
        source: None,
        tags: parse_tags(&form.tags),
    })
}

pub fn parse_tags(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

pub fn valid_linkedin_url(url: &str) -> bool {
    Regex::new(r"^https?://([a-z]+\.)?linkedin\.com/")
        .unwrap()
        .is_match(url)
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::upload::state::Step;

    fn written_form() -> UploadModal {
        let mut form = UploadModal::new();
        form.step = Step::Form;
        form.kind = Some(TestimonialKind::Written);
        form.name = "Jane Doe".to_string();
        form.text = "Great program".to_string();
        form
    }

    #[test]
    fn written_draft_keeps_blank_fields_absent() {
        let draft = build_draft(&written_form()).unwrap();
        assert_eq!(draft.name, "Jane Doe");
        match draft.content {
            TestimonialContent::Written {
                text,
                role,
                company,
                avatar_url,
            } => {
                assert_eq!(text, "Great program");
                assert_eq!(role, None);
                assert_eq!(company, None);
                assert_eq!(avatar_url, None);
            }
            other => panic!("expected written content, got {other:?}"),
        }
        assert!(!draft.approved);
    }

    #[test]
    fn written_draft_requires_text() {
        let mut form = written_form();
        form.text = "   ".to_string();
        assert!(build_draft(&form).is_err());
    }

    #[test]
    fn name_is_always_required() {
        let mut form = written_form();
        form.name = String::new();
        assert!(build_draft(&form).is_err());
    }

    #[test]
    fn linkedin_draft_requires_a_screenshot() {
        let mut form = UploadModal::new();
        form.kind = Some(TestimonialKind::Linkedin);
        form.name = "Jane Doe".to_string();
        assert!(build_draft(&form).is_err());
    }

    #[test]
    fn linkedin_urls_are_shape_checked() {
        assert!(valid_linkedin_url("https://www.linkedin.com/posts/jane"));
        assert!(valid_linkedin_url("http://linkedin.com/in/jane"));
        assert!(!valid_linkedin_url("https://example.com/posts/jane"));
        assert!(!valid_linkedin_url("linkedin.com/in/jane"));
    }

    #[test]
    fn tags_split_on_commas_and_drop_blanks() {
        assert_eq!(
            parse_tags("career, ads , ,ops"),
            Some(vec![
                "career".to_string(),
                "ads".to_string(),
                "ops".to_string()
            ])
        );
        assert_eq!(parse_tags("  "), None);
        assert_eq!(parse_tags(""), None);
    }
}
