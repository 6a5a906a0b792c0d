use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    blogs::{
        dto::{
            BlogDeletedResponse, BlogListResponse, BlogResponse, BlogWrittenResponse,
            FeaturedBlogsResponse,
        },
        repo_types::BlogInput,
        services::pick_featured,
    },
    error::ApiError,
    state::AppState,
};

pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs/", get(list_blogs).post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route("/featured-blogs/", get(featured_blogs))
}

#[instrument(skip(state, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    Json(payload): Json<BlogInput>,
) -> Result<Json<BlogWrittenResponse>, ApiError> {
    let blog = state.blogs.create(&payload).await?;
    info!(blog_id = blog.id, "blog created");
    Ok(Json(BlogWrittenResponse {
        message: "Blog created successfully",
        blog,
    }))
}

#[instrument(skip(state))]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<BlogListResponse>, ApiError> {
    let blogs = state.blogs.list().await?;
    Ok(Json(BlogListResponse { blogs }))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogResponse>, ApiError> {
    match state.blogs.get(id).await? {
        Some(blog) => Ok(Json(BlogResponse { blog })),
        None => {
            warn!(%id, "blog not found");
            Err(ApiError::NotFound("Blog not found"))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BlogInput>,
) -> Result<Json<BlogWrittenResponse>, ApiError> {
    let Some(blog) = state.blogs.update(id, &payload).await? else {
        warn!(%id, "update of missing blog");
        return Err(ApiError::NotFound("Blog not found"));
    };
    info!(blog_id = blog.id, "blog updated");
    Ok(Json(BlogWrittenResponse {
        message: "Blog updated successfully",
        blog,
    }))
}

#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogDeletedResponse>, ApiError> {
    if !state.blogs.delete(id).await? {
        warn!(%id, "delete of missing blog");
        return Err(ApiError::NotFound("Blog not found"));
    }
    info!(blog_id = id, "blog deleted");
    Ok(Json(BlogDeletedResponse {
        message: "Blog deleted successfully",
    }))
}

#[instrument(skip(state))]
pub async fn featured_blogs(
    State(state): State<AppState>,
) -> Result<Json<FeaturedBlogsResponse>, ApiError> {
    let blogs = state.blogs.list().await?;
    let featured = pick_featured(&blogs, &mut rand::thread_rng()).ok_or_else(|| {
        warn!(total = blogs.len(), "not enough blogs to feature");
        ApiError::NotFound("Not enough blogs to display")
    })?;
    Ok(Json(FeaturedBlogsResponse {
        featured_blogs: featured,
    }))
}
