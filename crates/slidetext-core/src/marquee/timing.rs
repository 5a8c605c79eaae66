//! L4 Atomic Layer: Closed-form timing for seamless marquee loops
//!
//! Pure functions mapping (display width, content width, velocity, spacing,
//! initial delay) to the three linear motions that make up a slide session.
//! Lengths are in host units (cells for terminals), times in seconds.

use std::fmt;

use serde::Serialize;

/// Inputs to the timing computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideParams {
    /// Visible width of the container (D)
    pub display_width: f64,
    /// Natural single-line width of the content (W)
    pub desired_width: f64,
    /// Length units per second (v)
    pub velocity: f64,
    /// Blank length between repetitions (s)
    pub spacing: f64,
    /// Seconds before the first motion
    pub delay: f64,
}

/// Why a slide was not started. These are policy outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDecline {
    EmptyText,
    NonPositiveVelocity,
    ContentFits,
    NoRoomForSpacing,
}

impl fmt::Display for SlideDecline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SlideDecline::EmptyText => "text is empty",
            SlideDecline::NonPositiveVelocity => "velocity is not positive",
            SlideDecline::ContentFits => "content already fits the container",
            SlideDecline::NoRoomForSpacing => "container is not wider than the spacing",
        };
        f.write_str(reason)
    }
}

/// Derived durations and delays of one slide session, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideTiming {
    /// Time for the window to advance by one display width minus spacing
    pub gap: f64,
    /// Time for one repetition to cross from fully off-right to fully off-left
    pub slide_from_edge: f64,
    /// Period after which a copy's motion repeats
    pub loop_duration: f64,
    /// Time for the primary instance to leave through the left edge
    pub first_leg: f64,
    /// First iteration start of copy 1
    pub copy1_delay: f64,
    /// First iteration start of copy 2
    pub copy2_delay: f64,
}

impl SlideParams {
    /// Check the preconditions of a seamless loop
    pub fn check(&self) -> Result<(), SlideDecline> {
        if !(self.velocity.is_finite() && self.velocity > 0.0) {
            return Err(SlideDecline::NonPositiveVelocity);
        }
        // NaN widths (degenerate measurement) fall through to "fits"
        if !(self.desired_width > self.display_width) {
            return Err(SlideDecline::ContentFits);
        }
        if !(self.display_width > self.spacing) {
            return Err(SlideDecline::NoRoomForSpacing);
        }
        Ok(())
    }

    /// Compute the session timing, or the reason no slide applies
    pub fn timing(&self) -> Result<SlideTiming, SlideDecline> {
        self.check()?;

        let v = self.velocity;
        let gap = (self.display_width - self.spacing) / v;
        let slide_from_edge = (self.display_width + self.desired_width) / v;
        let loop_duration = (slide_from_edge - gap) * 2.0;
        let first_leg = self.desired_width / v;
        let copy1_delay = self.delay + first_leg - gap;
        let copy2_delay = copy1_delay + slide_from_edge - gap;

        Ok(SlideTiming {
            gap,
            slide_from_edge,
            loop_duration,
            first_leg,
            copy1_delay,
            copy2_delay,
        })
    }

    /// Compute the three motions of a session
    pub fn schedule(&self) -> Result<SlideSchedule, SlideDecline> {
        let timing = self.timing()?;
        let copy_motion = |delay: f64| Motion {
            from: self.display_width,
            to: -self.desired_width,
            duration: timing.slide_from_edge,
            delay,
            period: Some(timing.loop_duration),
        };

        Ok(SlideSchedule {
            timing,
            primary: Motion {
                from: 0.0,
                to: -self.desired_width,
                duration: timing.first_leg,
                delay: self.delay,
                period: None,
            },
            copies: [copy_motion(timing.copy1_delay), copy_motion(timing.copy2_delay)],
        })
    }
}

/// A constant-velocity horizontal translation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Offset held before the motion starts
    pub from: f64,
    /// Offset reached at the end of each iteration
    pub to: f64,
    /// Seconds spent travelling from `from` to `to`
    pub duration: f64,
    /// Seconds before the first iteration
    pub delay: f64,
    /// Repeat period, if the motion loops. The end offset is held for the
    /// remainder of each period.
    pub period: Option<f64>,
}

impl Motion {
    /// Offset at `elapsed` seconds after the motion was scheduled
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return self.from;
        }

        let phase = match self.period {
            Some(period) if period > 0.0 => t % period,
            _ => t,
        };

        if self.duration <= 0.0 || phase >= self.duration {
            self.to
        } else {
            lerp(self.from, self.to, phase / self.duration)
        }
    }

    /// Whether this motion keeps moving forever
    #[inline]
    pub fn is_repeating(&self) -> bool {
        self.period.is_some()
    }

    /// Whether a one-shot motion has come to rest
    #[inline]
    pub fn is_finished(&self, elapsed: f64) -> bool {
        !self.is_repeating() && elapsed >= self.delay + self.duration
    }
}

/// The motions of one slide session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideSchedule {
    pub timing: SlideTiming,
    pub primary: Motion,
    pub copies: [Motion; 2],
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
