//! Social domain: likes, channel subscriptions, and tweets

pub mod api;
pub mod domain;
pub mod repository;

pub use api::middleware::SocialState;
pub use api::routes::routes;
pub use domain::entities::{LikedVideo, Subscriber, SubscribedChannel, Tweet};
pub use repository::{
    LikeRepository, LikeTarget, SocialRepositories, SubscriptionRepository, TweetRepository,
};
