//! Derivations of a post's URL slug and list preview.

/// Number of characters kept in a post preview.
pub const PREVIEW_LEN: usize = 100;

/// Marker appended to a truncated preview.
pub const ELLIPSIS: &str = "...";

/// Turns a title into its route path: spaces become hyphens, the result is
/// lowercased and prefixed with `/`.
///
/// No other characters are rewritten. Callers emitting the slug as a link
/// must percent-encode it.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len() + 1);
    slug.push('/');
    slug.push_str(&title.replace(' ', "-").to_lowercase());
    slug
}

/// The slug without its leading `/`, i.e. the single path segment a link
/// must percent-encode.
pub fn slug_segment(slug: &str) -> &str {
    slug.strip_prefix('/').unwrap_or(slug)
}

/// Whether a slug can be reached by a link at all. Browsers resolve the
/// `.` and `..` segments (even percent-encoded) before requesting, and an
/// empty segment is the home page.
pub fn is_routable(slug: &str) -> bool {
    !matches!(slug_segment(slug), "" | "." | "..")
}

/// Keeps the first `max` characters of `text`, appending [`ELLIPSIS`] when
/// the text is at least `max` characters long.
pub fn truncate(text: &str, max: usize) -> String {
    let mut preview: String = text.chars().take(max).collect();
    if preview.chars().count() >= max {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// Builds the list preview for a post body.
pub fn preview(text: &str) -> String {
    truncate(text, PREVIEW_LEN)
}

/// Case-insensitive title comparison used for uniqueness checks.
pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_hyphenates_and_lowercases() {
        assert_eq!(slugify("Hello World"), "/hello-world");
        assert_eq!(slugify("Rust  Is Fun"), "/rust--is-fun");
        assert_eq!(slugify("already-slugged"), "/already-slugged");
    }

    #[test]
    fn slugify_leaves_other_characters_alone() {
        assert_eq!(slugify("C++ & You?"), "/c++-&-you?");
        assert_eq!(slugify("Café Olé"), "/café-olé");
    }

    #[test]
    fn slug_segment_drops_one_leading_separator() {
        assert_eq!(slug_segment("/hello-world"), "hello-world");
        assert_eq!(slug_segment("//evil.example"), "/evil.example");
        assert_eq!(slug_segment("/"), "");
    }

    #[test]
    fn dot_and_empty_slugs_are_not_routable() {
        assert!(!is_routable(&slugify("")));
        assert!(!is_routable(&slugify(".")));
        assert!(!is_routable(&slugify("..")));
        assert!(is_routable(&slugify("...")));
        assert!(is_routable(&slugify("/evil.example")));
        assert!(is_routable(&slugify("a/..")));
    }

    #[test]
    fn truncate_below_limit_is_unchanged() {
        let text = "a".repeat(99);
        assert_eq!(truncate(&text, 100), text);
    }

    #[test]
    fn truncate_at_limit_gets_ellipsis() {
        let text = "a".repeat(100);
        assert_eq!(truncate(&text, 100), format!("{text}..."));
    }

    #[test]
    fn truncate_above_limit_cuts_and_gets_ellipsis() {
        let text = "a".repeat(150);
        let out = truncate(&text, 100);
        assert_eq!(out, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "é".repeat(100);
        let out = truncate(&text, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with(ELLIPSIS));

        assert_eq!(truncate("ééé", 100), "ééé");
    }

    #[test]
    fn titles_compare_case_insensitively() {
        assert!(same_title("Cats", "cATS"));
        assert!(!same_title("Cats", "Dogs"));
    }
}
