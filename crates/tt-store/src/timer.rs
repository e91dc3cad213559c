//! Timer engine
//!
//! The start/pause/resume/stop state machine over a single time log.
//! At most one log per (task, user) pair may be active; starting a new
//! timer implicitly stops the old one. Elapsed time is truncated to
//! whole seconds at every pause/stop boundary.
//!
//! Illegal transitions and unknown ids return `None` without touching
//! any state: callers are expected to query first, but the engine must
//! defend against stale clients without raising.

use tt_models::time_log::elapsed_whole_seconds;
use tt_models::{TimeLog, TimerState};

use crate::store::Store;

impl Store {
    /// The active (non-stopped) log for this (task, user) pair, if any
    pub fn active_log_for_task(&self, task_id: &str, user_id: &str) -> Option<TimeLog> {
        self.data
            .time_logs
            .iter()
            .find(|l| l.task_id == task_id && l.user_id == user_id && l.end_time.is_none())
            .cloned()
    }

    /// Start a fresh running log at `now`. Any log still active for the
    /// same pair is stopped first, which keeps the one-active-log
    /// invariant.
    pub fn start_timer(&mut self, task_id: &str, user_id: &str) -> TimeLog {
        if let Some(active) = self.active_log_for_task(task_id, user_id) {
            self.stop_timer(&active.id);
        }

        let id = self.next_id("log", |id| self.data.time_logs.iter().any(|l| l.id == id));
        let log = TimeLog {
            id,
            task_id: task_id.to_string(),
            user_id: user_id.to_string(),
            start_time: self.clock.now_millis(),
            end_time: None,
            duration: 0,
            is_paused: false,
        };
        self.data.time_logs.push(log.clone());
        self.persist();
        log
    }

    /// Running -> Paused. Banks the elapsed whole seconds of the open
    /// interval into `duration`.
    pub fn pause_timer(&mut self, log_id: &str) -> Option<TimeLog> {
        let now = self.clock.now_millis();
        let updated = {
            let log = self.data.time_logs.iter_mut().find(|l| l.id == log_id)?;
            if log.state() != TimerState::Running {
                return None;
            }
            log.duration += elapsed_whole_seconds(log.start_time, now);
            log.is_paused = true;
            log.clone()
        };
        self.persist();
        Some(updated)
    }

    /// Paused -> Running. Elapsed-time accounting restarts from this
    /// instant, so `start_time` is reset.
    pub fn resume_timer(&mut self, log_id: &str) -> Option<TimeLog> {
        let now = self.clock.now_millis();
        let updated = {
            let log = self.data.time_logs.iter_mut().find(|l| l.id == log_id)?;
            if log.state() != TimerState::Paused {
                return None;
            }
            log.start_time = now;
            log.is_paused = false;
            log.clone()
        };
        self.persist();
        Some(updated)
    }

    /// Running or Paused -> Stopped (terminal). A running log banks its
    /// final interval; a paused one keeps its duration as-is.
    pub fn stop_timer(&mut self, log_id: &str) -> Option<TimeLog> {
        let now = self.clock.now_millis();
        let updated = {
            let log = self.data.time_logs.iter_mut().find(|l| l.id == log_id)?;
            if log.end_time.is_some() {
                return None;
            }
            log.end_time = Some(now);
            if !log.is_paused {
                log.duration += elapsed_whole_seconds(log.start_time, now);
            }
            log.is_paused = false;
            log.clone()
        };
        self.persist();
        Some(updated)
    }
}
