//! # rb-ui
//!
//! Askama page templates. Output is HTML-escaped by default. Links to posts
//! are `/` followed by the slug segment run through `urlencode_strict`, so a
//! `/` inside a title can never turn the link into a scheme-relative URL.

use askama::Template;
use rb_core::models::{Post, PostView};

/// Form feedback when another post already has the title.
pub const DUPLICATE_TITLE: &str = "A post with this title already exists.";

/// Form feedback when the title derives an unreachable address.
pub const UNUSABLE_TITLE: &str = "This title can't be used as a post address.";

/// Home page: every live post with its preview.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub posts: &'a [Post],
}

/// A single post rendered at its slug.
#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub post: &'a PostView,
}

/// New-post form; `feedback` marks the title field invalid.
#[derive(Template)]
#[template(path = "compose.html")]
pub struct ComposeTemplate<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub feedback: Option<&'a str>,
}

impl ComposeTemplate<'_> {
    pub fn empty() -> Self {
        ComposeTemplate {
            title: "",
            text: "",
            feedback: None,
        }
    }
}

/// Edit form. `old_title` travels back with the submission.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub old_title: &'a str,
    pub text: &'a str,
    pub feedback: Option<&'a str>,
}

#[derive(Template, Default)]
#[template(path = "about.html")]
pub struct AboutTemplate;

#[derive(Template, Default)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

#[derive(Template, Default)]
#[template(path = "notfound.html")]
pub struct NotFoundTemplate;

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::PostDraft;

    #[test]
    fn test_index_links_encoded_slug_and_preview() {
        let posts = vec![Post::new(
            "123456",
            PostDraft::new("Café Olé", "x".repeat(120)),
        )];
        let html = IndexTemplate { posts: &posts }.render().unwrap();

        assert!(html.contains("/caf%C3%A9-ol%C3%A9"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_index_links_stay_on_this_site() {
        let posts = vec![
            Post::new("111111", PostDraft::new("/evil.example", "")),
            Post::new("222222", PostDraft::new("a/b", "")),
        ];
        let html = IndexTemplate { posts: &posts }.render().unwrap();

        assert!(html.contains("href=\"/%2Fevil.example\""));
        assert!(html.contains("href=\"/a%2Fb\""));
        assert!(!html.contains("href=\"//"));
    }

    #[test]
    fn test_index_without_posts() {
        let html = IndexTemplate { posts: &[] }.render().unwrap();
        assert!(html.contains("No posts yet"));
    }

    #[test]
    fn test_post_escapes_content() {
        let post = Post::new("123456", PostDraft::new("<b>Hi</b>", "<script>x</script>"));
        let html = PostTemplate { post: &post.view() }.render().unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("123456"));
    }

    #[test]
    fn test_compose_marks_duplicate_title() {
        let html = ComposeTemplate {
            title: "Cats",
            text: "again",
            feedback: Some(DUPLICATE_TITLE),
        }
        .render()
        .unwrap();
        assert!(html.contains("is-invalid"));
        assert!(html.contains("already exists"));
        assert!(html.contains("aria-describedby=\"invalidFeedback\""));
        assert!(html.contains("value=\"Cats\""));
        assert!(html.contains("again"));

        let html = ComposeTemplate::empty().render().unwrap();
        assert!(!html.contains("is-invalid"));

        let html = ComposeTemplate {
            title: "..",
            text: "",
            feedback: Some(UNUSABLE_TITLE),
        }
        .render()
        .unwrap();
        assert!(html.contains("be used as a post address"));
    }

    #[test]
    fn test_edit_carries_old_title() {
        let html = EditTemplate {
            id: "123456",
            title: "Dogs",
            old_title: "Cats",
            text: "body",
            feedback: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("name=\"old_title\" value=\"Cats\""));
        assert!(html.contains("name=\"id\" value=\"123456\""));
        assert!(html.contains("value=\"Dogs\""));
    }
}
