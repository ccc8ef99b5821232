pub mod likes;
pub mod subscriptions;
pub mod tweets;
