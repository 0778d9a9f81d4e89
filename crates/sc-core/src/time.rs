//! Simulation clock.
//!
//! # Design
//!
//! Simulated time is a non-negative `f64` count of seconds since the start
//! date.  Each scheduling step the host reports how much wall-clock time the
//! frame covered; the clock scales it by the speed multiplier:
//!
//!   sim_delta = frame_secs * speed          (only while playing)
//!   date      = start + elapsed_secs
//!
//! Rates are expressed per hour, so consumers convert `sim_delta` to hours
//! themselves.  This keeps simulated accuracy independent of the frame rate.
//!
//! # States
//!
//! ```text
//! Stopped(elapsed) --play()--> Playing --pause()--> Stopped(elapsed)
//!        any       --reset()-> Stopped(0)
//! ```

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::{CoreError, CoreResult};

/// Owns simulated time, the play/pause state and the speed multiplier.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Simulated wall-clock date of elapsed time zero.
    pub start: NaiveDateTime,
    elapsed_secs: f64,
    speed: f64,
    playing: bool,
}

impl SimClock {
    /// A stopped clock at `start` with a 1× speed multiplier.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            elapsed_secs: 0.0,
            speed: 1.0,
            playing: false,
        }
    }

    /// Start advancing time.
    ///
    /// Returns `false` (and changes nothing) if the clock was already
    /// playing; callers that care must check [`is_playing`](Self::is_playing).
    pub fn play(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// Stop advancing time.  Elapsed time is left untouched.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pause and zero elapsed time.  The speed multiplier is a user setting
    /// and survives a reset.
    pub fn reset(&mut self) {
        self.pause();
        self.elapsed_secs = 0.0;
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the multiplier applied to subsequent advances.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSpeed`] for zero, negative or non-finite values;
    /// the previous multiplier is kept.
    pub fn set_speed(&mut self, multiplier: f64) -> CoreResult<()> {
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(CoreError::InvalidSpeed(multiplier));
        }
        self.speed = multiplier;
        Ok(())
    }

    /// Advance by one scheduling step covering `frame_secs` of wall time.
    ///
    /// Returns the simulated seconds that elapsed, which is `0.0` while the
    /// clock is stopped.
    pub fn advance(&mut self, frame_secs: f64) -> f64 {
        if !self.playing || frame_secs <= 0.0 {
            return 0.0;
        }
        let delta = frame_secs * self.speed;
        self.elapsed_secs += delta;
        delta
    }

    /// Elapsed simulated seconds since the start date.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Simulated calendar date: `start + elapsed`, millisecond resolution.
    ///
    /// Saturates at [`NaiveDateTime::MAX`] once elapsed time runs past the
    /// representable calendar.
    pub fn current_date(&self) -> NaiveDateTime {
        let millis = (self.elapsed_secs * 1_000.0) as i64;
        TimeDelta::try_milliseconds(millis)
            .and_then(|d| self.start.checked_add_signed(d))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Break elapsed time into (hours, minutes, seconds) for display.
    /// Hours are not wrapped into days.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.elapsed_secs.max(0.0) as u64;
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(
            f,
            "{} (+{:02}:{:02}:{:02}, {}x, {})",
            self.current_date().format("%Y-%m-%d %H:%M"),
            h,
            m,
            s,
            self.speed,
            if self.playing { "playing" } else { "stopped" },
        )
    }
}
