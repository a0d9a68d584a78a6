//! Name filtering

use crate::domain::user::User;

/// Filter a listing by case-insensitive substring match on `name`.
///
/// The empty query matches every user.
pub fn filter_by_name(users: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();

    users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
