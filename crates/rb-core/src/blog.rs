//! # Blog service
//!
//! Owns one [`PostRepo`] and one [`RouteTable`] and keeps them in lockstep.
//! Each mutating method is a read-validate-write sequence; callers sharing a
//! `Blog` across threads must hold one lock for the whole call.

use log::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::{Post, PostDraft, PostView};
use crate::slug::{is_routable, same_title, slugify};
use crate::traits::{PostRepo, RouteTable};

/// Source of candidate post ids.
pub type IdSource = Box<dyn FnMut() -> String + Send>;

pub struct Blog {
    posts: Box<dyn PostRepo>,
    routes: Box<dyn RouteTable>,
    ids: IdSource,
}

impl Blog {
    pub fn new(posts: Box<dyn PostRepo>, routes: Box<dyn RouteTable>) -> Self {
        Self {
            posts,
            routes,
            ids: Box::new(new_post_id),
        }
    }

    /// Replaces the random 6-digit id generator.
    pub fn with_id_source(mut self, ids: impl FnMut() -> String + Send + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// All live posts, oldest first.
    pub fn list(&self) -> Vec<Post> {
        self.posts.list()
    }

    pub fn find(&self, id: &str) -> Result<Post> {
        self.posts
            .find(id)
            .ok_or_else(|| AppError::post_not_found(id))
    }

    /// Content currently rendered at `slug`.
    pub fn resolve(&self, slug: &str) -> Result<PostView> {
        self.routes
            .resolve(slug)
            .ok_or_else(|| AppError::slug_not_found(slug))
    }

    /// Publishes a new post and registers its slug.
    ///
    /// Fails with [`AppError::DuplicateTitle`], handing the draft back, when a
    /// live post already has the same title (ignoring case) or the same slug,
    /// and with [`AppError::InvalidTitle`] when the slug cannot be linked to.
    pub fn create(&mut self, draft: PostDraft) -> Result<Post> {
        let live = self.posts.list();
        let draft = validate(&live, draft, None)?;
        let id = self.fresh_id(&live);
        Ok(self.publish(Post::new(id, draft)))
    }

    fn publish(&mut self, post: Post) -> Post {
        self.posts.insert(post.clone());
        self.routes.register(post.slug(), post.view());

        info!("post {} created at {}", post.id(), post.slug());
        post
    }

    /// Replaces a post's title and text, moving its route when the slug
    /// changes.
    ///
    /// `previous_title` is the title the edit form was opened with. The post
    /// being edited is exempt from the duplicate check, so keeping the title
    /// (in any casing) always succeeds.
    pub fn update(&mut self, id: &str, draft: PostDraft, previous_title: &str) -> Result<Post> {
        let live = self.posts.list();
        let draft = validate(&live, draft, Some(id))?;

        let mut post = live
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| AppError::post_not_found(id))?;

        if !same_title(post.title(), previous_title) {
            warn!(
                "post {} edited from a stale form (was {:?}, form said {:?})",
                id,
                post.title(),
                previous_title
            );
        }

        let old_slug = post.apply(draft);
        if !self.posts.save(post.clone()) {
            return Err(AppError::Internal(format!("post {id} vanished during update")));
        }
        if let Some(old_slug) = old_slug {
            self.routes.unregister(&old_slug);
            debug!("route {} retired", old_slug);
        }
        self.routes.register(post.slug(), post.view());

        info!("post {} updated at {}", post.id(), post.slug());
        Ok(post)
    }

    /// Draws ids until one is unused by any live post.
    fn fresh_id(&mut self, live: &[Post]) -> String {
        loop {
            let id = (self.ids)();
            if !live.iter().any(|p| p.id() == id) {
                return id;
            }
            debug!("post id {} already taken, drawing again", id);
        }
    }

    /// Removes a post and its route. Unknown ids are ignored.
    ///
    /// `slug` is the route the client believes the post lives at; it is
    /// unregistered too unless another live post owns it.
    pub fn delete(&mut self, id: &str, slug: &str) {
        let removed = self.posts.remove(id);
        match &removed {
            Some(post) => {
                self.routes.unregister(post.slug());
                info!("post {} deleted from {}", post.id(), post.slug());
            }
            None => debug!("delete of unknown post {}", id),
        }

        let stale = removed.as_ref().map_or(true, |p| p.slug() != slug);
        if stale && !self.posts.list().iter().any(|p| p.slug() == slug) {
            self.routes.unregister(slug);
        }
    }
}

/// Hands the draft back if it may be published over `live`, minus the post
/// being edited.
fn validate(live: &[Post], draft: PostDraft, editing: Option<&str>) -> Result<PostDraft> {
    if !is_routable(&slugify(&draft.title)) {
        info!("rejected unroutable title {:?}", draft.title);
        return Err(AppError::InvalidTitle(draft));
    }
    if title_taken(live, &draft.title, editing) {
        info!("rejected duplicate title {:?}", draft.title);
        return Err(AppError::DuplicateTitle(draft));
    }
    Ok(draft)
}

/// Whether `title` collides with a live post other than `editing`.
///
/// Distinct titles can still derive the same slug ("a b" and "a-b"), which
/// would leave two posts behind one route, so slugs are compared as well.
fn title_taken(live: &[Post], title: &str, editing: Option<&str>) -> bool {
    let slug = slugify(title);
    live.iter()
        .filter(|p| Some(p.id()) != editing)
        .any(|p| same_title(p.title(), title) || p.slug() == slug)
}

pub fn new_post_id() -> String {
    let n: u32 = rand::random_range(100_000..1_000_000);
    n.to_string()
}
