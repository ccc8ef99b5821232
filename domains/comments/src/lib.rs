//! Comments domain: threaded discussion under videos

pub mod api;
pub mod domain;
pub mod repository;

pub use api::middleware::CommentsState;
pub use api::routes::routes;
pub use domain::entities::{Comment, CommentWithAuthor};
pub use repository::{CommentRepository, CommentsRepositories};
