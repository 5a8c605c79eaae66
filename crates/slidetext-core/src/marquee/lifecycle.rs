//! L3 Molecular Layer: Marquee lifecycle controller
//!
//! Owns the Idle/Sliding state and is the only place motion is started or
//! stopped. Starting is deferred to the host loop's next [`SlidingLabel::poll`]
//! so that the container width reflects a completed layout pass.

use tracing::{debug, info, warn};

use super::content::{Instance, Label};
use super::copies::CopySet;
use super::host::MarqueeHost;
use super::signal::{ResumeSignal, Subscription};
use super::timing::{SlideDecline, SlideParams, SlideSchedule};
use crate::{Error, Result};

/// Velocity used when the caller does not pick one
pub const DEFAULT_VELOCITY: f64 = 100.0;
/// Rest time before the first motion
pub const DEFAULT_DELAY: f64 = 1.0;
/// Gap between repetitions
pub const DEFAULT_SPACING: f64 = 30.0;

/// Arguments of [`SlidingLabel::start`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartOptions {
    pub velocity: f64,
    pub delay: f64,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
            delay: DEFAULT_DELAY,
        }
    }
}

impl StartOptions {
    pub fn new(velocity: f64, delay: f64) -> Self {
        Self { velocity, delay }
    }

    /// Clamp negative or non-finite delays to zero
    fn sanitized(self) -> Self {
        if self.delay.is_finite() && self.delay >= 0.0 {
            return self;
        }
        warn!(delay = self.delay, "invalid marquee delay, using 0");
        Self { delay: 0.0, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Idle,
    Sliding,
}

/// A single-line label that scrolls seamlessly when it overflows its container
pub struct SlidingLabel<S, H> {
    label: Label<S>,
    copies: CopySet<S>,
    host: H,
    spacing: f64,
    display_width: f64,
    state: SlideState,
    /// Parameters of the last `start`, cleared by `stop`
    options: Option<StartOptions>,
    /// A deferred `try_begin_slide` is queued for the next poll
    pending_start: bool,
    schedule: Option<SlideSchedule>,
    resume: Option<Subscription>,
}

impl<S: Clone, H: MarqueeHost<S>> SlidingLabel<S, H> {
    /// Create an idle marquee. Fails if `spacing` is negative or not finite.
    pub fn new(label: Label<S>, host: H, spacing: f64) -> Result<Self> {
        validate_spacing(spacing)?;
        Ok(Self {
            label,
            copies: CopySet::default(),
            host,
            spacing,
            display_width: 0.0,
            state: SlideState::Idle,
            options: None,
            pending_start: false,
            schedule: None,
            resume: None,
        })
    }

    /// Restart from a clean state whenever `signal` reports a resume
    pub fn with_resume_signal(mut self, signal: &ResumeSignal) -> Self {
        self.resume = Some(signal.subscribe());
        self
    }

    pub fn label(&self) -> &Label<S> {
        &self.label
    }

    /// Replace the primary content. An active session keeps showing the old
    /// content until it is restarted.
    pub fn set_label(&mut self, label: Label<S>) {
        self.label = label;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    pub fn set_style(&mut self, style: S) {
        self.label.set_style(style);
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Takes effect on the next start
    pub fn set_spacing(&mut self, spacing: f64) -> Result<()> {
        validate_spacing(spacing)?;
        self.spacing = spacing;
        Ok(())
    }

    pub fn display_width(&self) -> f64 {
        self.display_width
    }

    /// Record the container width from the host's layout pass
    pub fn set_display_width(&mut self, width: f64) {
        self.display_width = width;
    }

    /// Desired (unconstrained) width and container width
    pub fn measure(&self) -> (f64, f64) {
        (self.host.measure(&self.label), self.display_width)
    }

    #[inline]
    pub fn is_sliding(&self) -> bool {
        self.state == SlideState::Sliding
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    /// Whether a start is waiting for the next poll
    pub fn has_pending_start(&self) -> bool {
        self.pending_start
    }

    pub fn options(&self) -> Option<StartOptions> {
        self.options
    }

    /// Schedule of the active session
    pub fn schedule(&self) -> Option<&SlideSchedule> {
        self.schedule.as_ref()
    }

    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    /// Primary first, then the live copies
    pub fn instances(&self) -> impl Iterator<Item = (Instance, &Label<S>)> {
        std::iter::once((Instance::Primary, &self.label)).chain(self.copies.iter())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Request sliding. Ignored while already sliding; otherwise the
    /// feasibility check runs on the next [`poll`](Self::poll).
    pub fn start(&mut self, options: StartOptions) {
        if self.is_sliding() {
            return;
        }
        self.options = Some(options.sanitized());
        self.pending_start = true;
        debug!(velocity = options.velocity, delay = options.delay, "marquee start queued");
    }

    /// Return to Idle: cancel every animation, drop the copies and forget the
    /// start parameters. Also cancels a queued start.
    pub fn stop(&mut self) {
        self.reset_layout();
        self.state = SlideState::Idle;
        self.options = None;
        self.pending_start = false;
    }

    /// Stop and start again with the last parameters, picking up new content
    /// or a new container width
    pub fn restart(&mut self) {
        if let Some(options) = self.options {
            self.stop();
            self.start(options);
        }
    }

    /// Run one turn of deferred work: resume notifications, then a queued start
    pub fn poll(&mut self) {
        if self.resume.as_mut().is_some_and(Subscription::take_pending) {
            self.on_resume();
        }

        if self.pending_start {
            self.pending_start = false;
            if let Err(reason) = self.try_begin_slide() {
                debug!(%reason, "marquee start declined");
            }
        }
    }

    /// Rebuild the session from offset zero after the host may have dropped
    /// in-flight animations
    pub fn on_resume(&mut self) {
        if !self.is_sliding() {
            return;
        }
        debug!("marquee resumed, rebuilding schedule");
        self.reset_layout();
        self.state = SlideState::Idle;
        if let Err(reason) = self.try_begin_slide() {
            debug!(%reason, "marquee no longer slides after resume");
            self.stop();
        }
    }

    fn try_begin_slide(&mut self) -> std::result::Result<(), SlideDecline> {
        let options = self.options.ok_or(SlideDecline::NonPositiveVelocity)?;
        if self.label.is_empty() {
            return Err(SlideDecline::EmptyText);
        }

        let (desired_width, display_width) = self.measure();
        let schedule = SlideParams {
            display_width,
            desired_width,
            velocity: options.velocity,
            spacing: self.spacing,
            delay: options.delay,
        }
        .schedule()?;

        self.state = SlideState::Sliding;
        let copies = self.copies.spawn(&self.label);

        self.host.animate(Instance::Primary, schedule.primary);
        for (instance, motion) in copies.into_iter().zip(schedule.copies) {
            self.host.set_offset(instance, display_width);
            self.host.animate(instance, motion);
        }

        info!(
            desired_width,
            display_width,
            loop_secs = schedule.timing.loop_duration,
            "marquee sliding"
        );
        self.schedule = Some(schedule);
        Ok(())
    }

    fn reset_layout(&mut self) {
        for instance in Instance::ALL {
            self.host.cancel_animations(instance);
        }
        self.copies.destroy();
        self.schedule = None;
    }
}

fn validate_spacing(spacing: f64) -> Result<()> {
    if spacing.is_finite() && spacing >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid("spacing", format!("{spacing} is not a finite, non-negative length")))
    }
}
