//! Users domain repositories

mod users;
mod watch_history;

pub use users::{NewUser, UserRepository};
pub use watch_history::WatchHistoryRepository;

use sqlx::PgPool;

/// Bundle of all repositories in the users domain
#[derive(Clone)]
pub struct UsersRepositories {
    pub users: UserRepository,
    pub watch_history: WatchHistoryRepository,
}

impl UsersRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            watch_history: WatchHistoryRepository::new(pool),
        }
    }
}
