//! Workout timer state machine.
//!
//! The timer has four states: `Stopped`, `Running`, `Paused`, and `Finished`.
//! Active time only ever accumulates in `accumulated_ms`; a running timer
//! additionally carries the instant it was last started. The elapsed time
//! shown to the user is always `accumulated_ms` plus, when running, the gap
//! between `last_started_at` and now. Nothing ticks in the background, so a
//! process crash loses at most nothing: the persisted checkpoint plus the
//! wall clock reconstruct the exact state.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Raw persisted form of a timer: three columns on the workout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerCheckpoint {
    /// Whether the timer was running when the checkpoint was written
    pub running: bool,
    /// Active milliseconds banked by previous run segments
    pub accumulated_ms: u64,
    /// Start instant of the current run segment, if any
    pub last_started_at: Option<Timestamp>,
}

/// Type-safe workout timer state.
///
/// Transitions return a new state rather than mutating in place, so callers
/// can persist the checkpoint first and only then replace their in-memory
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TimerState {
    /// Timer has never been started
    Stopped,

    /// Timer is counting; elapsed = accumulated + (now - last_started_at)
    Running {
        accumulated_ms: u64,
        last_started_at: Timestamp,
    },

    /// Timer is halted with time banked
    Paused { accumulated_ms: u64 },

    /// Workout is complete; elapsed is frozen forever
    Finished { accumulated_ms: u64 },
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Stopped
    }
}

impl TimerState {
    /// Reconstruct timer state from a persisted checkpoint.
    ///
    /// This is a pure read: it never folds the open run segment into the
    /// accumulated total, so applying it repeatedly to the same stored row
    /// always yields the same state. A checkpoint claiming to be running
    /// without a start instant is contradictory and degrades to `Paused`.
    pub fn from_checkpoint(checkpoint: TimerCheckpoint, completed_at: Option<Timestamp>) -> Self {
        if completed_at.is_some() {
            return TimerState::Finished {
                accumulated_ms: checkpoint.accumulated_ms,
            };
        }

        match (checkpoint.running, checkpoint.last_started_at) {
            (true, Some(last_started_at)) => TimerState::Running {
                accumulated_ms: checkpoint.accumulated_ms,
                last_started_at,
            },
            (true, None) => TimerState::Paused {
                accumulated_ms: checkpoint.accumulated_ms,
            },
            (false, _) => {
                if checkpoint.accumulated_ms == 0 {
                    TimerState::Stopped
                } else {
                    TimerState::Paused {
                        accumulated_ms: checkpoint.accumulated_ms,
                    }
                }
            }
        }
    }

    /// Produce the persistable checkpoint for this state.
    pub fn checkpoint(&self) -> TimerCheckpoint {
        match *self {
            TimerState::Stopped => TimerCheckpoint {
                running: false,
                accumulated_ms: 0,
                last_started_at: None,
            },
            TimerState::Running {
                accumulated_ms,
                last_started_at,
            } => TimerCheckpoint {
                running: true,
                accumulated_ms,
                last_started_at: Some(last_started_at),
            },
            TimerState::Paused { accumulated_ms } | TimerState::Finished { accumulated_ms } => {
                TimerCheckpoint {
                    running: false,
                    accumulated_ms,
                    last_started_at: None,
                }
            }
        }
    }

    /// Start or resume the timer at `now`.
    pub fn start(self, now: Timestamp) -> Result<Self> {
        match self {
            TimerState::Stopped => Ok(TimerState::Running {
                accumulated_ms: 0,
                last_started_at: now,
            }),
            TimerState::Paused { accumulated_ms } => Ok(TimerState::Running {
                accumulated_ms,
                last_started_at: now,
            }),
            TimerState::Running { .. } => Err(TrackerError::invalid_input("timer")
                .with_reason("timer is already running")),
            TimerState::Finished { .. } => Err(TrackerError::invalid_input("timer")
                .with_reason("workout is finished; the timer cannot be restarted")),
        }
    }

    /// Pause a running timer at `now`, banking the open segment.
    pub fn pause(self, now: Timestamp) -> Result<Self> {
        match self {
            TimerState::Running {
                accumulated_ms,
                last_started_at,
            } => Ok(TimerState::Paused {
                accumulated_ms: accumulated_ms + segment_ms(last_started_at, now),
            }),
            TimerState::Stopped | TimerState::Paused { .. } => Err(
                TrackerError::invalid_input("timer").with_reason("timer is not running"),
            ),
            TimerState::Finished { .. } => Err(TrackerError::invalid_input("timer")
                .with_reason("workout is finished; the timer cannot be paused")),
        }
    }

    /// Finish the workout at `now`, freezing the elapsed total.
    pub fn finish(self, now: Timestamp) -> Result<Self> {
        match self {
            TimerState::Running {
                accumulated_ms,
                last_started_at,
            } => Ok(TimerState::Finished {
                accumulated_ms: accumulated_ms + segment_ms(last_started_at, now),
            }),
            TimerState::Paused { accumulated_ms } => Ok(TimerState::Finished { accumulated_ms }),
            TimerState::Stopped => Ok(TimerState::Finished { accumulated_ms: 0 }),
            TimerState::Finished { .. } => Err(TrackerError::invalid_input("timer")
                .with_reason("workout is already finished")),
        }
    }

    /// Elapsed active milliseconds as of `now`.
    ///
    /// Pure function of the state: repeated calls with the same `now` return
    /// the same value, and a running timer never mutates itself here.
    pub fn elapsed_ms(&self, now: Timestamp) -> u64 {
        match *self {
            TimerState::Stopped => 0,
            TimerState::Running {
                accumulated_ms,
                last_started_at,
            } => accumulated_ms + segment_ms(last_started_at, now),
            TimerState::Paused { accumulated_ms } | TimerState::Finished { accumulated_ms } => {
                accumulated_ms
            }
        }
    }

    /// Whether the timer is currently counting.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    /// Whether the workout has been finished.
    pub fn is_finished(&self) -> bool {
        matches!(self, TimerState::Finished { .. })
    }
}

/// Length of a run segment, clamped at zero against clock skew.
fn segment_ms(started: Timestamp, now: Timestamp) -> u64 {
    let delta = now.as_millisecond() - started.as_millisecond();
    u64::try_from(delta).unwrap_or(0)
}
