use rand::{seq::SliceRandom, Rng};

use crate::blogs::repo_types::Blog;

pub const FEATURED_COUNT: usize = 3;

/// Draws [`FEATURED_COUNT`] distinct blogs uniformly at random.
/// Returns `None` when there are not enough blogs to choose from.
pub fn pick_featured<R: Rng + ?Sized>(blogs: &[Blog], rng: &mut R) -> Option<Vec<Blog>> {
    if blogs.len() < FEATURED_COUNT {
        return None;
    }
    Some(blogs.choose_multiple(rng, FEATURED_COUNT).cloned().collect())
}
