//! rusty-blog/crates/rb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Rusty-Blog.

pub mod blog;
pub mod error;
pub mod models;
pub mod slug;
pub mod traits;

// Re-exporting for easier access in other crates
pub use blog::*;
pub use error::*;
pub use models::*;
pub use slug::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_post_creation_derives_fields() {
        let post = Post::new("123456", PostDraft::new("Hello World", "a".repeat(120)));
        assert_eq!(post.id(), "123456");
        assert_eq!(post.slug(), "/hello-world");
        assert_eq!(post.preview_text(), format!("{}...", "a".repeat(100)));
        assert!(post.updated_at().is_none());
    }

    #[test]
    fn test_apply_recomputes_derived_fields() {
        let mut post = Post::new("123456", PostDraft::new("Cats", "short"));

        let old = post.apply(PostDraft::new("Big Dogs", "b".repeat(100)));
        assert_eq!(old.as_deref(), Some("/cats"));
        assert_eq!(post.slug(), "/big-dogs");
        assert_eq!(post.preview_text(), format!("{}...", "b".repeat(100)));

        // Case-only retitle keeps the slug.
        let old = post.apply(PostDraft::new("BIG DOGS", "short"));
        assert_eq!(old, None);
        assert_eq!(post.title(), "BIG DOGS");
        assert_eq!(post.preview_text(), "short");
    }

    #[test]
    fn test_view_mirrors_post() {
        let post = Post::new("654321", PostDraft::new("Cats", "Cats are great"));
        let view = post.view();
        assert_eq!(view.id, post.id());
        assert_eq!(view.title, post.title());
        assert_eq!(view.text, post.text());
        assert_eq!(view.slug, post.slug());
        assert_eq!(view.created_at, post.created_at());
    }
}
