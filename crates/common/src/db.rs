//! Shared database helpers

use crate::error::Error;

/// Map a sqlx error to `Conflict` when it is a unique-constraint violation,
/// otherwise pass it through as a database error.
pub fn map_unique_violation(err: sqlx::Error, conflict_message: &str) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return Error::Conflict(conflict_message.to_string());
        }
    }
    Error::Database(err)
}
