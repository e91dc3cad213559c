//! Time log model
//!
//! A time log is the unit the timer engine operates on. `start_time`
//! has state-dependent semantics: while running it marks the start of
//! the currently open interval (it is reset on every resume), and
//! `duration` holds only the whole seconds accumulated by previously
//! closed running intervals.

use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable};

/// Timer state derived from the log's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// `end_time` unset, not paused; time is accumulating
    Running,
    /// `end_time` unset, paused; the open interval contributes nothing
    Paused,
    /// `end_time` set; terminal
    Stopped,
}

/// Time log entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: Id,
    pub task_id: Id,
    pub user_id: Id,
    /// Epoch milliseconds; start of the currently open interval
    pub start_time: i64,
    /// Epoch milliseconds, or `null` while the log is still active
    pub end_time: Option<i64>,
    /// Accumulated whole seconds, excluding the currently open interval
    pub duration: u64,
    pub is_paused: bool,
}

impl TimeLog {
    pub fn state(&self) -> TimerState {
        match (self.end_time, self.is_paused) {
            (Some(_), _) => TimerState::Stopped,
            (None, true) => TimerState::Paused,
            (None, false) => TimerState::Running,
        }
    }

    /// An active log is one that has not been stopped yet
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Session time for live display: the accumulated duration plus the
    /// elapsed whole seconds of the open interval while running. Callers
    /// polling this must recompute it every tick.
    pub fn session_seconds(&self, now_millis: i64) -> u64 {
        match self.state() {
            TimerState::Running => self.duration + elapsed_whole_seconds(self.start_time, now_millis),
            TimerState::Paused | TimerState::Stopped => self.duration,
        }
    }
}

/// Whole seconds between two epoch-millisecond stamps, truncated by
/// floor division. Fractional seconds are deliberately lost; reports
/// assume second-granularity integers.
pub fn elapsed_whole_seconds(start_millis: i64, now_millis: i64) -> u64 {
    ((now_millis - start_millis) / 1000).max(0) as u64
}

impl Identifiable for TimeLog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for TimeLog {
    const TYPE_NAME: &'static str = "TimeLog";
}
