use std::borrow::Cow;

use smallvec::SmallVec;

use crate::rig::params::ParameterSet;
use crate::tween::easing::Easing;

/// How often a timeline plays beyond its first cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// `Count(n)` plays `n` extra cycles after the first (so `Count(1)`
    /// plays twice in total).
    Count(u32),
    Infinite,
}

/// One property-interpolation step: drives a single parameter toward an end
/// value over a duration, starting at an offset within the timeline cycle.
///
/// The start value is captured from the parameter set the first time the
/// step is applied after a (re)start, so tweens always depart from wherever
/// the parameter currently is.
#[derive(Debug, Clone)]
pub struct Tween {
    pub(crate) param: Cow<'static, str>,
    pub(crate) to: f32,
    pub(crate) duration: f32,
    pub(crate) easing: Easing,
    pub(crate) start: f32,
    from: Option<f32>,
}

impl Tween {
    /// A tween toward `to`. Default duration 0.5 s, linear easing.
    #[must_use]
    pub fn to(param: impl Into<Cow<'static, str>>, to: f32) -> Self {
        Self {
            param: param.into(),
            to,
            duration: 0.5,
            easing: Easing::Linear,
            start: 0.0,
            from: None,
        }
    }

    #[must_use]
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    #[must_use]
    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

type CompleteFn = Box<dyn FnMut(&mut ParameterSet)>;

/// A scheduled sequence of parameter interpolations.
///
/// Semantics follow the timeline contract of the exercises: configuration is
/// `{repeat, yoyo, paused}`; steps carry `{parameter, end value, duration,
/// easing, start offset}`. `advance` is called once per frame with the
/// owning rig's parameter set. `pause`/`play`/`restart` are idempotent.
pub struct Timeline {
    steps: SmallVec<[Tween; 4]>,
    repeat: Repeat,
    yoyo: bool,
    paused: bool,
    completed: bool,
    time: f32,
    /// Start offset of the most recently inserted step.
    last_start: f32,
    on_complete: Option<CompleteFn>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: SmallVec::new(),
            repeat: Repeat::Count(0),
            yoyo: false,
            paused: false,
            completed: false,
            time: 0.0,
            last_start: 0.0,
            on_complete: None,
        }
    }

    // === Chained configuration ===

    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Starts the timeline paused (play or restart to run it).
    #[must_use]
    pub fn starts_paused(mut self) -> Self {
        self.paused = true;
        self
    }

    /// Appends a step after the end of the current content.
    #[must_use]
    pub fn step(mut self, tween: Tween) -> Self {
        let start = self.cycle_duration();
        self.push_at(start, tween);
        self
    }

    /// Appends a step aligned with the start of the previous step, so both
    /// run concurrently.
    #[must_use]
    pub fn step_with_previous(mut self, tween: Tween) -> Self {
        let start = self.last_start;
        self.push_at(start, tween);
        self
    }

    /// Appends a step at an explicit offset within the cycle.
    #[must_use]
    pub fn step_at(mut self, offset: f32, tween: Tween) -> Self {
        self.push_at(offset.max(0.0), tween);
        self
    }

    /// Registers a callback fired once each time the timeline completes.
    #[must_use]
    pub fn with_on_complete(mut self, f: impl FnMut(&mut ParameterSet) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    fn push_at(&mut self, start: f32, mut tween: Tween) {
        tween.start = start;
        self.last_start = start;
        self.steps.push(tween);
    }

    // === Queries ===

    /// Whether the timeline is currently running (not paused, not done).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.paused && !self.completed && !self.steps.is_empty()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Duration of one cycle: the latest step end.
    #[must_use]
    pub fn cycle_duration(&self) -> f32 {
        self.steps
            .iter()
            .map(|s| s.start + s.duration)
            .fold(0.0_f32, f32::max)
    }

    /// Total play time, or `None` for infinite repeats.
    #[must_use]
    pub fn total_duration(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Infinite => None,
            Repeat::Count(n) => Some(self.cycle_duration() * (n as f32 + 1.0)),
        }
    }

    // === Playback control (idempotent) ===

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes a paused timeline. Completed timelines stay completed; use
    /// [`Timeline::restart`] to replay them.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Rewinds to time zero, clears the completed flag and resumes. Captured
    /// start values are dropped so steps re-anchor to the current parameter
    /// values.
    pub fn restart(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.completed = false;
        for step in &mut self.steps {
            step.from = None;
        }
    }

    // === Per-frame advancement ===

    /// Advances the timeline by `dt` seconds and applies the interpolated
    /// values to `params`. No-op while paused or after completion.
    pub fn advance(&mut self, dt: f32, params: &mut ParameterSet) {
        if !self.is_active() {
            return;
        }

        let cycle = self.cycle_duration();
        if cycle <= f32::EPSILON {
            // Degenerate content (all steps zero-length): snap to end values
            self.apply_at(0.0, params);
            self.finish(params);
            return;
        }

        self.time += dt;

        // 1. Clamp against the total duration for finite repeats
        let total = self.total_duration();
        let finishing = total.is_some_and(|t| self.time >= t);
        let t = match total {
            Some(total) => self.time.min(total),
            None => self.time,
        };

        // 2. Fold into (cycle index, local time)
        let mut cycle_index = (t / cycle) as u32;
        if let Repeat::Count(n) = self.repeat {
            cycle_index = cycle_index.min(n);
        }
        let local = t - cycle_index as f32 * cycle;

        // 3. Yoyo: odd cycles play backwards
        let reversed = self.yoyo && cycle_index % 2 == 1;
        let play_time = if reversed { cycle - local } else { local };

        self.apply_at(play_time, params);

        if finishing {
            self.finish(params);
        }
    }

    fn apply_at(&mut self, time: f32, params: &mut ParameterSet) {
        for step in &mut self.steps {
            if time < step.start {
                continue;
            }

            // Lazily anchor the step to the current parameter value
            let from = match step.from {
                Some(v) => v,
                None => {
                    let v = params.get(&step.param);
                    step.from = Some(v);
                    v
                }
            };

            let u = if step.duration <= f32::EPSILON {
                1.0
            } else {
                ((time - step.start) / step.duration).clamp(0.0, 1.0)
            };
            let eased = step.easing.apply(u);
            params.write(&step.param, from + (step.to - from) * eased);
        }
    }

    fn finish(&mut self, params: &mut ParameterSet) {
        self.completed = true;
        if let Some(cb) = self.on_complete.as_mut() {
            cb(params);
        }
    }
}
