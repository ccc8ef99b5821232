//! Comments domain repositories

mod comments;

pub use comments::CommentRepository;

use sqlx::PgPool;

/// Bundle of all repositories in the comments domain
#[derive(Clone)]
pub struct CommentsRepositories {
    pub comments: CommentRepository,
}

impl CommentsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            comments: CommentRepository::new(pool),
        }
    }
}
