//! Social domain repositories

mod likes;
mod subscriptions;
mod tweets;

pub use likes::{LikeRepository, LikeTarget};
pub use subscriptions::SubscriptionRepository;
pub use tweets::TweetRepository;

use sqlx::PgPool;

/// Bundle of all repositories in the social domain
#[derive(Clone)]
pub struct SocialRepositories {
    pub likes: LikeRepository,
    pub subscriptions: SubscriptionRepository,
    pub tweets: TweetRepository,
}

impl SocialRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            likes: LikeRepository::new(pool.clone()),
            subscriptions: SubscriptionRepository::new(pool.clone()),
            tweets: TweetRepository::new(pool),
        }
    }
}
