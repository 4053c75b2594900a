//! # rb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the Blog service.

use std::sync::{Mutex, MutexGuard};

use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use askama::Template;
use log::info;
use rb_core::error::AppError;
use rb_core::models::PostDraft;
use rb_core::Blog;
use rb_ui::{
    AboutTemplate, ComposeTemplate, ContactTemplate, EditTemplate, IndexTemplate,
    NotFoundTemplate, PostTemplate, DUPLICATE_TITLE, UNUSABLE_TITLE,
};
use serde::Deserialize;

use crate::error::ApiError;

/// State shared across all Actix-web workers.
///
/// The whole [`Blog`] sits behind one mutex so that duplicate checks and the
/// route-table update of a single request are never interleaved with another.
pub struct AppState {
    blog: Mutex<Blog>,
}

impl AppState {
    pub fn new(blog: Blog) -> Self {
        Self {
            blog: Mutex::new(blog),
        }
    }

    pub fn blog(&self) -> Result<MutexGuard<'_, Blog>, ApiError> {
        self.blog
            .lock()
            .map_err(|_| AppError::Internal("blog state lock poisoned".to_string()).into())
    }
}

type HandlerResult = Result<HttpResponse, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub post_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub id: String,
    pub title: String,
    pub text: String,
    pub old_title: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub post_id: String,
    pub post_url: String,
}

/// Renders the post list at "/"
pub async fn index(data: web::Data<AppState>) -> HandlerResult {
    let posts = data.blog()?.list();
    html(StatusCode::OK, IndexTemplate { posts: &posts })
}

pub async fn about() -> HandlerResult {
    html(StatusCode::OK, AboutTemplate)
}

pub async fn contact() -> HandlerResult {
    html(StatusCode::OK, ContactTemplate)
}

pub async fn compose_form() -> HandlerResult {
    html(StatusCode::OK, ComposeTemplate::empty())
}

/// Publishes a post, or redisplays the form if the title is taken or unusable.
pub async fn compose(data: web::Data<AppState>, form: web::Form<ComposeForm>) -> HandlerResult {
    let ComposeForm { title, text } = form.into_inner();

    let created = data.blog()?.create(PostDraft::new(title, text));
    match created {
        Ok(post) => {
            info!("published {} ({})", post.slug(), post.id());
            Ok(redirect_home())
        }
        Err(e) => {
            let (draft, feedback) = rejected_draft(e)?;
            html(
                StatusCode::UNPROCESSABLE_ENTITY,
                ComposeTemplate {
                    title: &draft.title,
                    text: &draft.text,
                    feedback: Some(feedback),
                },
            )
        }
    }
}

/// Renders a post at its slug (e.g. /my-post-title)
pub async fn show_post(data: web::Data<AppState>, path: web::Path<String>) -> HandlerResult {
    let slug = format!("/{}", path.into_inner());
    let post = data.blog()?.resolve(&slug)?;
    html(StatusCode::OK, PostTemplate { post: &post })
}

/// Opens the edit form pre-filled with the post's current values.
pub async fn edit(data: web::Data<AppState>, form: web::Form<EditForm>) -> HandlerResult {
    let post = data.blog()?.find(&form.post_id)?;
    html(
        StatusCode::OK,
        EditTemplate {
            id: post.id(),
            title: post.title(),
            old_title: post.title(),
            text: post.text(),
            feedback: None,
        },
    )
}

pub async fn update(data: web::Data<AppState>, form: web::Form<UpdateForm>) -> HandlerResult {
    let UpdateForm {
        id,
        title,
        text,
        old_title,
    } = form.into_inner();

    let updated = data
        .blog()?
        .update(&id, PostDraft::new(title, text), &old_title);
    match updated {
        Ok(post) => {
            info!("updated {} ({})", post.slug(), post.id());
            Ok(redirect_home())
        }
        Err(e) => {
            let (draft, feedback) = rejected_draft(e)?;
            html(
                StatusCode::UNPROCESSABLE_ENTITY,
                EditTemplate {
                    id: &id,
                    title: &draft.title,
                    old_title: &old_title,
                    text: &draft.text,
                    feedback: Some(feedback),
                },
            )
        }
    }
}

pub async fn delete(data: web::Data<AppState>, form: web::Form<DeleteForm>) -> HandlerResult {
    data.blog()?.delete(&form.post_id, &form.post_url);
    Ok(redirect_home())
}

/// Fallback for every unmatched route.
pub async fn not_found() -> HandlerResult {
    html(StatusCode::NOT_FOUND, NotFoundTemplate)
}

/// Splits a title rejection into the draft to redisplay and its message.
/// Any other error is passed on.
fn rejected_draft(e: AppError) -> Result<(PostDraft, &'static str), ApiError> {
    match e {
        AppError::DuplicateTitle(draft) => Ok((draft, DUPLICATE_TITLE)),
        AppError::InvalidTitle(draft) => Ok((draft, UNUSABLE_TITLE)),
        other => Err(other.into()),
    }
}

fn html(status: StatusCode, page: impl Template) -> HandlerResult {
    let body = page.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}
