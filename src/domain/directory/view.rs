//! View selection for the directory page
//!
//! The rendering layer shows exactly one of these states. Precedence is
//! significant: loading masks everything, an error masks the empty and
//! populated states, and an empty result with a query outranks an empty
//! directory.

use super::controller::DirectorySnapshot;

/// The one view the rendering layer should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView {
    /// Fetch in flight
    Loading,
    /// Fetch or validation failed; rendered with a retry affordance
    Error { message: String },
    /// Query matched nothing
    NoResults,
    /// Directory is empty and no query is active
    Empty,
    /// At least one matching entry
    Populated,
}

/// Select the view for the current snapshot, filtered count, and raw query.
///
/// The raw (not debounced) query decides between [`DirectoryView::NoResults`]
/// and [`DirectoryView::Empty`], so clearing the input flips the panel
/// without waiting out the settle window.
pub fn select_view(
    snapshot: &DirectorySnapshot,
    filtered_count: usize,
    raw_query: &str,
) -> DirectoryView {
    if snapshot.is_loading {
        return DirectoryView::Loading;
    }

    if let Some(message) = &snapshot.error {
        return DirectoryView::Error {
            message: message.clone(),
        };
    }

    if filtered_count == 0 {
        if raw_query.is_empty() {
            return DirectoryView::Empty;
        }
        return DirectoryView::NoResults;
    }

    DirectoryView::Populated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::fixtures;

    fn populated_snapshot() -> DirectorySnapshot {
        DirectorySnapshot {
            users: vec![fixtures::user(1, "Leanne Graham", "Gwenborough", "Romaguera-Crona")],
            is_loading: false,
            error: None,
        }
    }

    #[test]
    fn test_loading_masks_everything() {
        let snapshot = DirectorySnapshot {
            is_loading: true,
            error: Some("Service Unavailable".to_string()),
            ..populated_snapshot()
        };

        assert_eq!(select_view(&snapshot, 0, "zzz"), DirectoryView::Loading);
    }

    #[test]
    fn test_error_masks_empty_and_populated() {
        let snapshot = DirectorySnapshot {
            error: Some("Service Unavailable".to_string()),
            ..DirectorySnapshot::default()
        };

        assert_eq!(
            select_view(&snapshot, 0, "zzz"),
            DirectoryView::Error {
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_no_results_requires_non_empty_query() {
        let snapshot = populated_snapshot();

        assert_eq!(select_view(&snapshot, 0, "zzz"), DirectoryView::NoResults);
    }

    #[test]
    fn test_empty_directory_without_query() {
        let snapshot = DirectorySnapshot::default();

        assert_eq!(select_view(&snapshot, 0, ""), DirectoryView::Empty);
    }

    #[test]
    fn test_populated_with_matches() {
        let snapshot = populated_snapshot();

        assert_eq!(select_view(&snapshot, 1, ""), DirectoryView::Populated);
        assert_eq!(select_view(&snapshot, 1, "lean"), DirectoryView::Populated);
    }
}
