//! Query debouncing
//!
//! An explicit pipeline stage between raw keystrokes and the filter: a value
//! is propagated only once it has been stable for the settle window, so the
//! filter and stats recompute at most once per settled query instead of once
//! per keystroke.

use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;

/// Settle window matching the page's input debounce
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

/// Sender half of the query pipeline; one per query stream
#[derive(Debug, Clone)]
pub struct QueryInput {
    tx: mpsc::UnboundedSender<String>,
}

impl QueryInput {
    /// Push the latest raw keystroke value. Returns false once the debouncer
    /// has been dropped.
    pub fn set(&self, query: impl Into<String>) -> bool {
        self.tx.send(query.into()).is_ok()
    }

    /// The explicit clear action resets the query to empty; it settles like
    /// any other keystroke.
    pub fn clear(&self) -> bool {
        self.set("")
    }
}

/// Receiver half: yields a query only after it has been stable for the
/// settle window. A new keystroke inside the window restarts the timer.
#[derive(Debug)]
pub struct QueryDebouncer {
    rx: mpsc::UnboundedReceiver<String>,
    settle: Duration,
}

/// Build a connected input/debouncer pair with the given settle window
pub fn query_pipeline(settle: Duration) -> (QueryInput, QueryDebouncer) {
    let (tx, rx) = mpsc::unbounded_channel();

    (QueryInput { tx }, QueryDebouncer { rx, settle })
}

impl QueryDebouncer {
    /// Wait for the next settled query value.
    ///
    /// Returns `None` once the input side is dropped and every pending value
    /// has been flushed. Closing the input flushes the last pending value
    /// immediately rather than waiting out the window.
    pub async fn next_settled(&mut self) -> Option<String> {
        let mut latest = self.rx.recv().await?;

        loop {
            match tokio::time::timeout(self.settle, self.rx.recv()).await {
                Ok(Some(next)) => latest = next,
                Ok(None) | Err(_) => return Some(latest),
            }
        }
    }

    /// Adapt the debouncer into a stream of settled query values
    pub fn into_stream(self) -> impl Stream<Item = String> {
        futures::stream::unfold(self, |mut debouncer| async move {
            debouncer.next_settled().await.map(|query| (query, debouncer))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_settle_once_with_final_value() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);

        input.set("L");
        input.set("Le");
        input.set("Lean");

        let settled = debouncer.next_settled().await;
        assert_eq!(settled.as_deref(), Some("Lean"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_inside_window_restarts_timer() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);
        let started = Instant::now();

        input.set("Lean");

        let (settled, _) = tokio::join!(debouncer.next_settled(), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            input.set("Leanne");
        });

        assert_eq!(settled.as_deref(), Some("Leanne"));
        // 200ms until the second keystroke, then a full fresh window.
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stable_value_settles_after_one_window() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);
        let started = Instant::now();

        input.set("Lean");

        let settled = debouncer.next_settled().await;

        assert_eq!(settled.as_deref(), Some("Lean"));
        assert!(started.elapsed() >= DEFAULT_SETTLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_input_flushes_pending_value() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);

        input.set("Lean");
        drop(input);

        assert_eq!(debouncer.next_settled().await.as_deref(), Some("Lean"));
        assert_eq!(debouncer.next_settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_empty_input_yields_none() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);
        drop(input);

        assert_eq!(debouncer.next_settled().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_settles_to_empty_query() {
        let (input, mut debouncer) = query_pipeline(DEFAULT_SETTLE);

        input.set("Lean");
        assert_eq!(debouncer.next_settled().await.as_deref(), Some("Lean"));

        input.clear();
        assert_eq!(debouncer.next_settled().await.as_deref(), Some(""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_adapter_yields_settled_values() {
        let (input, debouncer) = query_pipeline(DEFAULT_SETTLE);

        input.set("L");
        input.set("Lean");
        drop(input);

        let settled: Vec<String> = debouncer.into_stream().collect().await;
        assert_eq!(settled, vec!["Lean".to_string()]);
    }
}
