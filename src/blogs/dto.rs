use serde::Serialize;

use crate::blogs::repo_types::Blog;

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub blog: Blog,
}

/// Returned by create and update.
#[derive(Debug, Serialize)]
pub struct BlogWrittenResponse {
    pub message: &'static str,
    pub blog: Blog,
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub blogs: Vec<Blog>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedBlogsResponse {
    pub featured_blogs: Vec<Blog>,
}

#[derive(Debug, Serialize)]
pub struct BlogDeletedResponse {
    pub message: &'static str,
}
