use serde::{Deserialize, Serialize};

/// The two kinds of testimonial the wall accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialKind {
    Written,
    Linkedin,
}

impl TestimonialKind {
    /// Wire value stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestimonialKind::Written => "written",
            TestimonialKind::Linkedin => "linkedin",
        }
    }
}

/// Content of a testimonial. Exactly one variant's fields are populated,
/// and the variant is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestimonialContent {
    /// A testimonial written directly on the wall.
    Written {
        text: String,
        role: Option<String>,
        company: Option<String>,
        /// Profile picture embedded as a `data:` URI.
        avatar_url: Option<String>,
    },
    /// A screenshot of a testimonial posted on LinkedIn.
    Linkedin {
        headline: Option<String>,
        /// Screenshot embedded as a `data:` URI.
        screenshot_url: Option<String>,
        /// Link back to the original LinkedIn post or profile.
        source_url: Option<String>,
    },
}

impl TestimonialContent {
    pub fn kind(&self) -> TestimonialKind {
        match self {
            TestimonialContent::Written { .. } => TestimonialKind::Written,
            TestimonialContent::Linkedin { .. } => TestimonialKind::Linkedin,
        }
    }

    /// The image belonging to this variant, whichever field carries it.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            TestimonialContent::Written { avatar_url, .. } => avatar_url.as_deref(),
            TestimonialContent::Linkedin { screenshot_url, .. } => screenshot_url.as_deref(),
        }
    }
}

/// A testimonial as the application works with it.
///
/// `id` and `created_at` are assigned by the remote store and never change.
/// After creation a record is only ever touched by a moderator: the
/// `approved` flag can be toggled and the record can be deleted. There is no
/// edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub content: TestimonialContent,
    /// Moderation state. Every submission starts unapproved.
    pub approved: bool,
    /// Legacy flag carried through the schema; this client never sets it.
    pub verified: bool,
    pub rating: Option<u8>,
    pub source: Option<String>,
    pub tags: Option<Vec<String>>,
    /// ISO 8601, server-assigned. Lists are sorted on it, newest first.
    pub created_at: String,
}

/// A submission before it has been stored.
///
/// Carries every entity field except the server-assigned ones (`id`,
/// `created_at`) and the legacy `verified` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: String,
    pub content: TestimonialContent,
    /// Ignored on insert: every submission starts unapproved no matter what
    /// the submitting surface put here.
    pub approved: bool,
    pub rating: Option<u8>,
    pub source: Option<String>,
    pub tags: Option<Vec<String>>,
}
