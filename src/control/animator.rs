use std::f32::consts::PI;

use crate::control::intent::Intent;
use crate::rig::params::{ParameterSet, names};
use crate::tween::{Easing, Repeat, Timeline, Tween};

/// Locomotion state of one rig. Walking and Idle are mutually exclusive;
/// Jumping can be entered from either and returns to whichever state the
/// held walk intent indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Idle,
    Walking,
    Jumping,
}

/// Per-rig animation state machine.
///
/// Owns the three stock timelines (idle, walk, jump) plus any in-flight
/// turn tweens, and enforces the exclusion rules: starting the walk pauses
/// the idle, a jump pauses both, and completion restarts whichever side the
/// walk intent selects.
pub struct Animator {
    pub idle: Timeline,
    pub walk: Timeline,
    pub jump: Timeline,
    turns: Vec<Timeline>,

    state: Locomotion,
    walk_intent: bool,

    /// Yaw applied per turn press, radians.
    pub turn_step: f32,
    pub turn_duration: f32,
}

impl Animator {
    /// Wires up a state machine around the three stock timelines. The walk
    /// and jump timelines are paused here regardless of how they were
    /// built; only the idle runs at rest.
    #[must_use]
    pub fn new(idle: Timeline, mut walk: Timeline, mut jump: Timeline) -> Self {
        walk.pause();
        jump.pause();
        Self {
            idle,
            walk,
            jump,
            turns: Vec::new(),
            state: Locomotion::Idle,
            walk_intent: false,
            turn_step: 65.0_f32.to_radians(),
            turn_duration: 0.5,
        }
    }

    #[must_use]
    pub fn state(&self) -> Locomotion {
        self.state
    }

    #[must_use]
    pub fn walk_intent(&self) -> bool {
        self.walk_intent
    }

    /// Number of turn tweens still in flight.
    #[must_use]
    pub fn active_turns(&self) -> usize {
        self.turns.len()
    }

    /// Applies one intent. `Shoot` is not an animation concern and is
    /// ignored here.
    pub fn handle(&mut self, intent: Intent, params: &mut ParameterSet) {
        match intent {
            Intent::StartWalking => {
                self.walk_intent = true;
                if self.state == Locomotion::Idle {
                    self.idle.pause();
                    self.walk.restart();
                    self.state = Locomotion::Walking;
                }
            }
            Intent::StopWalking => {
                self.walk_intent = false;
                if self.state == Locomotion::Walking {
                    self.walk.pause();
                    self.idle.restart();
                    self.state = Locomotion::Idle;
                }
            }
            Intent::Jump => {
                // Re-trigger while airborne is a no-op
                if self.state == Locomotion::Jumping {
                    return;
                }
                self.idle.pause();
                self.walk.pause();
                self.jump.restart();
                self.state = Locomotion::Jumping;
            }
            Intent::TurnLeft => self.push_turn(self.turn_step, params),
            Intent::TurnRight => self.push_turn(-self.turn_step, params),
            Intent::Shoot => {}
        }
    }

    /// One discrete, eased yaw step. Steps may overlap; each tween targets
    /// the current yaw plus the step, so rapid presses accumulate.
    fn push_turn(&mut self, delta: f32, params: &mut ParameterSet) {
        let target = params.get(names::RY) + delta;
        let turn = Timeline::new().step(
            Tween::to(names::RY, target)
                .duration(self.turn_duration)
                .ease(Easing::PowerOut(1)),
        );
        self.turns.push(turn);
    }

    /// Advances every owned timeline and resolves jump completion. Called
    /// once per frame, before the pose update.
    pub fn advance(&mut self, dt: f32, params: &mut ParameterSet) {
        self.idle.advance(dt, params);
        self.walk.advance(dt, params);
        self.jump.advance(dt, params);

        for turn in &mut self.turns {
            turn.advance(dt, params);
        }
        self.turns.retain(Timeline::is_active);

        // Landing: hand control back to whichever state the intent selects
        if self.state == Locomotion::Jumping && !self.jump.is_active() {
            if self.walk_intent {
                self.walk.restart();
                self.state = Locomotion::Walking;
            } else {
                self.idle.restart();
                self.state = Locomotion::Idle;
            }
        }
    }

    // ========================================================================
    // Stock timeline sets
    // ========================================================================

    /// Idle/walk/jump set tuned for [`Figure`](crate::rig::Figure): the
    /// walk swings arms and legs through `walk_rotation`, the jump lifts
    /// `y` with an anticipation-dip bezier while flailing the arms.
    #[must_use]
    pub fn for_figure() -> Self {
        let idle = Timeline::new()
            .with_repeat(Repeat::Infinite)
            .with_yoyo(true)
            .step_at(
                0.0,
                Tween::to(names::LEFT_EYE_SCALE, 0.2)
                    .duration(1.0)
                    .ease(Easing::PowerInOut(1)),
            )
            .step_at(
                0.0,
                Tween::to(names::HEAD_ROTATION, 5.0_f32.to_radians())
                    .duration(0.5)
                    .ease(Easing::PowerInOut(1)),
            )
            .step_at(
                0.5,
                Tween::to(names::HEAD_ROTATION, -5.0_f32.to_radians())
                    .duration(0.5)
                    .ease(Easing::PowerInOut(1)),
            );

        let walk = Timeline::new()
            .with_repeat(Repeat::Infinite)
            .with_yoyo(true)
            .step(
                Tween::to(names::WALK_ROTATION, 45.0_f32.to_radians())
                    .duration(0.25)
                    .ease(Easing::PowerInOut(1)),
            );

        let jump = Timeline::new()
            .with_repeat(Repeat::Count(1))
            .with_yoyo(true)
            .step(
                Tween::to(names::Y, 2.9)
                    .duration(0.25)
                    .ease(Easing::cubic_bezier(0.35, -0.6, 0.3, 1.25)),
            )
            .step_with_previous(
                Tween::to(names::ARM_ROTATION, 90.0_f32.to_radians())
                    .duration(0.25)
                    .ease(Easing::PowerOut(1)),
            )
            .with_on_complete(|params| params.write(names::ARM_ROTATION, 0.0));

        Self::new(idle, walk, jump)
    }

    /// Set tuned for [`Dog`](crate::rig::Dog): two-beat leg swing and a
    /// jump that somersaults through `body_rotation`.
    #[must_use]
    pub fn for_dog() -> Self {
        let idle = Timeline::new()
            .with_repeat(Repeat::Infinite)
            .with_yoyo(true)
            .step_at(
                0.0,
                Tween::to(names::LEFT_EYE_SCALE, 0.2)
                    .duration(1.0)
                    .ease(Easing::PowerInOut(1)),
            )
            .step_at(
                0.0,
                Tween::to(names::HEAD_ROTATION, 5.0_f32.to_radians())
                    .duration(0.5)
                    .ease(Easing::PowerInOut(1)),
            )
            .step_at(
                0.5,
                Tween::to(names::HEAD_ROTATION, -5.0_f32.to_radians())
                    .duration(0.5)
                    .ease(Easing::PowerInOut(1)),
            );

        let walk = Timeline::new()
            .with_repeat(Repeat::Infinite)
            .with_yoyo(true)
            .step(
                Tween::to(names::WALK_ROTATION, 45.0_f32.to_radians()).duration(0.15),
            )
            .step(
                Tween::to(names::WALK_ROTATION, -45.0_f32.to_radians()).duration(0.15),
            );

        let jump = Timeline::new()
            .with_repeat(Repeat::Count(1))
            .with_yoyo(true)
            .step(
                Tween::to(names::Y, 5.0)
                    .duration(0.5)
                    .ease(Easing::cubic_bezier(0.35, -0.6, 0.3, 1.25)),
            )
            .step_with_previous(
                Tween::to(names::BODY_ROTATION, PI)
                    .duration(0.5)
                    .ease(Easing::CircOut),
            );

        Self::new(idle, walk, jump)
    }
}
