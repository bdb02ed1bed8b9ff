//! Classification of database driver errors.

/// Returns true if `e` was raised by a `UNIQUE` constraint.
///
/// SQLite reports the violated index in the message only, so the constraint
/// name is not checked; `links.code` is the only unique column.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
