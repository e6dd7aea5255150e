use sea_orm::DbErr;

/// Postgres reports unique violations as SQLSTATE 23505. SeaORM does not
/// surface the code as a typed variant across all drivers, so match on the
/// rendered message the same way for every adapter.
pub fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// Same as `is_unique_violation`, restricted to a named index or constraint.
pub fn is_unique_violation_on(e: &DbErr, constraint: &str) -> bool {
    is_unique_violation(e) && e.to_string().contains(constraint)
}

/// SQLSTATE 23503: the referenced row does not exist.
pub fn is_foreign_key_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}
