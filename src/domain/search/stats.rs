//! Derived summary statistics
//!
//! Computed purely from the current listing and its filtered subset; nothing
//! here is stored independently or mutated incrementally.

use std::collections::HashSet;

use crate::domain::user::User;

/// Summary counts shown alongside the directory grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Size of the unfiltered listing
    pub total_users: usize,
    /// Size of the filtered subset
    pub filtered_count: usize,
    /// Distinct `address.city` values in the filtered subset
    pub unique_cities: usize,
    /// Distinct `company.name` values in the filtered subset
    pub unique_companies: usize,
}

impl DirectoryStats {
    /// Recompute all counts from the listing and its filtered subset
    pub fn compute(users: &[User], filtered: &[User]) -> Self {
        let cities: HashSet<&str> = filtered.iter().map(|u| u.address.city.as_str()).collect();
        let companies: HashSet<&str> = filtered.iter().map(|u| u.company.name.as_str()).collect();

        Self {
            total_users: users.len(),
            filtered_count: filtered.len(),
            unique_cities: cities.len(),
            unique_companies: companies.len(),
        }
    }
}
