//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Blog.
//! Derived fields (preview and slug) are private so they can only change
//! together with the field they are computed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slug::{preview, slug_segment, slugify};

/// A title/text submission from the compose or edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub text: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// The fundamental unit of the blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: String,
    title: String,
    text: String,
    /// First 100 characters of `text`, ellipsized
    preview_text: String,
    /// Route path derived from `title` (e.g. "/hello-world")
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn new(id: impl Into<String>, draft: PostDraft) -> Self {
        let PostDraft { title, text } = draft;
        Self {
            id: id.into(),
            preview_text: preview(&text),
            slug: slugify(&title),
            title,
            text,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The slug as one path segment, for building links.
    pub fn slug_segment(&self) -> &str {
        slug_segment(&self.slug)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Replaces title and text, recomputing the derived fields.
    /// Returns the previous slug when the new title changes it.
    pub fn apply(&mut self, draft: PostDraft) -> Option<String> {
        let PostDraft { title, text } = draft;
        let new_slug = slugify(&title);

        self.preview_text = preview(&text);
        self.title = title;
        self.text = text;
        self.updated_at = Some(Utc::now());

        if new_slug == self.slug {
            None
        } else {
            Some(std::mem::replace(&mut self.slug, new_slug))
        }
    }

    /// Snapshot of the content rendered at this post's slug.
    pub fn view(&self) -> PostView {
        PostView {
            id: self.id.clone(),
            title: self.title.clone(),
            text: self.text.clone(),
            slug: self.slug.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The renderable content a slug resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
