//! Debounce component for Bubble Tea applications.
//!
//! A debouncer schedules a callback after a fixed quiet period and
//! invalidates it when a newer trigger arrives, which is the standard shape
//! for search-as-you-type: each keystroke re-arms the timer, and only the
//! message from the last keystroke survives.
//!
//! The component is message-based: [`Model::trigger`] returns a `Cmd` that
//! delivers a [`DebounceMsg`] after the delay, and [`Model::matches`] tells
//! you whether a received message is still current. Stale messages, ones
//! superseded by a later trigger or a [`Model::cancel`], simply fail the
//! check and should be ignored.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_listview::debounce::{Model as Debounce, DebounceMsg};
//! use bubbletea_rs::{Cmd, Msg};
//! use std::time::Duration;
//!
//! struct App {
//!     search: Debounce,
//!     query: String,
//! }
//!
//! impl App {
//!     fn on_keystroke(&mut self, c: char) -> Cmd {
//!         self.query.push(c);
//!         // Re-arms the quiet period; earlier in-flight messages go stale.
//!         self.search.trigger()
//!     }
//!
//!     fn on_message(&mut self, msg: &Msg) {
//!         if let Some(m) = msg.downcast_ref::<DebounceMsg>() {
//!             if self.search.matches(m) {
//!                 // Quiet period elapsed with no newer input: run the search.
//!             }
//!         }
//!     }
//! }
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for debouncer instances.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered when a debounce quiet period elapses.
///
/// Carries the owning debouncer's `id` and the `tag` of the trigger that
/// scheduled it. Check it with [`Model::matches`]; a mismatched tag means a
/// newer trigger superseded this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceMsg {
    /// ID of the debouncer that scheduled this message.
    pub id: i64,
    /// Trigger generation; stale generations are ignored.
    pub tag: u64,
}

/// A debouncer: delayed invocation with cancel-on-retrigger semantics.
///
/// Each instance has a unique ID so multiple debouncers can coexist in one
/// application without stealing each other's messages.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    tag: u64,
    delay: Duration,
}

/// Creates a debouncer with the given quiet period.
pub fn new(delay: Duration) -> Model {
    Model {
        id: next_id(),
        tag: 0,
        delay: delay.max(Duration::from_millis(1)),
    }
}

impl Model {
    /// Returns this debouncer's unique ID.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms (or re-arms) the debouncer.
    ///
    /// Bumps the trigger generation and returns a command that delivers a
    /// [`DebounceMsg`] for the new generation after the quiet period.
    /// Messages scheduled by earlier triggers keep flowing but no longer
    /// pass [`matches`](Self::matches), which is what cancels them.
    pub fn trigger(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.delay, move |_| Box::new(DebounceMsg { id, tag }) as Msg)
    }

    /// Invalidates every in-flight message without scheduling a new one.
    pub fn cancel(&mut self) {
        self.tag += 1;
    }

    /// Returns true if the message belongs to this debouncer and is the
    /// latest generation.
    pub fn matches(&self, msg: &DebounceMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_get_unique_ids() {
        let a = new(Duration::from_millis(250));
        let b = new(Duration::from_millis(250));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_latest_trigger_wins() {
        let mut d = new(Duration::from_millis(250));
        let _first = d.trigger();
        let first_msg = DebounceMsg { id: d.id(), tag: 1 };
        let _second = d.trigger();
        let second_msg = DebounceMsg { id: d.id(), tag: 2 };

        // The first message is stale once the second trigger fired.
        assert!(!d.matches(&first_msg));
        assert!(d.matches(&second_msg));
    }

    #[test]
    fn test_cancel_invalidates_in_flight_messages() {
        let mut d = new(Duration::from_millis(250));
        let _cmd = d.trigger();
        let msg = DebounceMsg { id: d.id(), tag: 1 };
        assert!(d.matches(&msg));
        d.cancel();
        assert!(!d.matches(&msg));
    }

    #[test]
    fn test_other_debouncers_messages_are_ignored() {
        let mut a = new(Duration::from_millis(250));
        let mut b = new(Duration::from_millis(250));
        let _cmd_a = a.trigger();
        let _cmd_b = b.trigger();
        let msg_b = DebounceMsg { id: b.id(), tag: 1 };
        assert!(!a.matches(&msg_b));
        assert!(b.matches(&msg_b));
    }
}
