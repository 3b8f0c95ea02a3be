//! Typing reveal
//!
//! Converts a complete message string into a time-paced sequence of growing
//! prefixes for progressive display, or short-circuits to immediate full
//! display. The timer task is a scoped resource: started on construction,
//! stopped on disposal, drop, restart, or natural completion.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// Default delay between revealed characters
pub const DEFAULT_DELAY_PER_CHAR: Duration = Duration::from_millis(10);

/// Lower bound applied to the per-character delay; a zero delay would
/// otherwise produce an unbounded-rate timer
const MIN_DELAY_PER_CHAR: Duration = Duration::from_millis(1);

/// Observable reveal progress
struct RevealState {
    /// Full target content
    source: String,
    /// Number of characters currently revealed
    cursor: usize,
    /// Whether the reveal timer is running
    active: bool,
}

impl RevealState {
    /// Byte offset of the `cursor`-character prefix boundary
    fn prefix_end(&self) -> usize {
        self.source
            .char_indices()
            .nth(self.cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(self.source.len())
    }
}

/// Progressive reveal of one message
///
/// Each instance owns its state exclusively; one revealer exists per
/// displayed message at a time. The emitted sequence is finite and not
/// restartable; `restart` cancels it and begins a fresh one.
pub struct TypingRevealer {
    state: Arc<Mutex<RevealState>>,
    task: Option<JoinHandle<()>>,
}

impl TypingRevealer {
    /// Start revealing `content`
    ///
    /// With `typing` false the returned channel carries exactly one event,
    /// the full string, and no timer is started. With `typing` true it
    /// carries `char-count + 1` growing prefixes (empty through full,
    /// inclusive), one per `delay_per_char` tick; delays below the minimum
    /// interval are clamped.
    ///
    /// # Returns
    /// * `(TypingRevealer, Receiver<String>)` - The revealer handle and the
    ///   prefix sequence. Dropping the receiver stops the timer at the next
    ///   tick.
    pub fn start(
        content: &str,
        typing: bool,
        delay_per_char: Duration,
    ) -> (Self, mpsc::Receiver<String>) {
        let char_count = content.chars().count();

        if !typing {
            // Immediate full display, no timer
            let (tx, rx) = mpsc::channel(1);
            let _ = tx.try_send(content.to_string());
            let state = Arc::new(Mutex::new(RevealState {
                source: content.to_string(),
                cursor: char_count,
                active: false,
            }));
            return (Self { state, task: None }, rx);
        }

        let delay = delay_per_char.max(MIN_DELAY_PER_CHAR);
        // Capacity covers the whole sequence so a slow consumer never
        // stalls the timer
        let (tx, rx) = mpsc::channel(char_count + 1);
        let state = Arc::new(Mutex::new(RevealState {
            source: content.to_string(),
            cursor: 0,
            active: true,
        }));

        debug!(
            char_count = char_count,
            delay_ms = delay.as_millis() as u64,
            "Starting typing reveal"
        );

        let task_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(delay);
            for cursor in 0..=char_count {
                ticker.tick().await;
                let prefix = {
                    let mut st = task_state.lock().await;
                    st.cursor = cursor;
                    st.source[..st.prefix_end()].to_string()
                };
                if tx.send(prefix).await.is_err() {
                    // Consumer went away; stop emitting
                    break;
                }
            }
            task_state.lock().await.active = false;
        });

        (
            Self {
                state,
                task: Some(task),
            },
            rx,
        )
    }

    /// Cancel the in-flight reveal and begin a fresh cycle with new
    /// parameters
    ///
    /// The prior sequence ends where it was; no state carries over.
    pub fn restart(
        &mut self,
        content: &str,
        typing: bool,
        delay_per_char: Duration,
    ) -> mpsc::Receiver<String> {
        self.dispose();
        let (next, rx) = Self::start(content, typing, delay_per_char);
        *self = next;
        rx
    }

    /// The currently revealed prefix
    pub async fn current(&self) -> String {
        let state = self.state.lock().await;
        state.source[..state.prefix_end()].to_string()
    }

    /// Whether the reveal timer is currently running
    pub async fn is_active(&self) -> bool {
        self.state.lock().await.active
    }

    /// Stop the timer; no further prefixes are emitted
    pub fn dispose(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        // The timer task may hold the lock for the length of one state
        // update; skipping the flag then is harmless since the task is gone
        if let Ok(mut state) = self.state.try_lock() {
            state.active = false;
        }
    }
}

impl Drop for TypingRevealer {
    fn drop(&mut self) {
        self.dispose();
    }
}
