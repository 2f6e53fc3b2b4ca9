//! Roll animation: a two state machine (idle / spinning) that brings a randomly
//! chosen face to the front with a decelerating spin.

use bevy_math::{DQuat, DVec3};
use log::{debug, info};
use rand::Rng;
use serde::Deserialize;
use std::f64::consts::TAU;

use crate::constants::roll_constants::{
    ROLL_DURATION_SECS, ROLL_REFERENCE_AXIS, ROLL_TURNS_X, ROLL_TURNS_Y, ROLL_TURNS_Z,
};
use crate::geometry::{DieFaces, Face};

/// Inclusive range of extra full turns around one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct TurnRange {
    pub min: u32,
    pub max: u32,
}

impl TurnRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Parameters of a roll, resolved from the configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollParams {
    pub duration_secs: f64,
    /// The rolled face's normal ends up on this axis (unit length).
    pub reference_axis: DVec3,
    /// Extra turns around x, y and z.
    pub turns: [TurnRange; 3],
}

impl Default for RollParams {
    fn default() -> Self {
        Self {
            duration_secs: ROLL_DURATION_SECS,
            reference_axis: DVec3::from_array(ROLL_REFERENCE_AXIS),
            turns: [
                TurnRange::new(ROLL_TURNS_X.0, ROLL_TURNS_X.1),
                TurnRange::new(ROLL_TURNS_Y.0, ROLL_TURNS_Y.1),
                TurnRange::new(ROLL_TURNS_Z.0, ROLL_TURNS_Z.1),
            ],
        }
    }
}

/// Cubic ease-out: fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Orientation that turns `face` so its normal lies on `reference_axis`,
/// with the face's first edge kept as the label's horizontal.
pub fn target_orientation(face: &Face, reference_axis: DVec3) -> DQuat {
    let to_axis = DQuat::from_rotation_arc(DVec3::Z, reference_axis.normalize());
    (to_axis * face.rotation.inverse()).normalize()
}

/// Whole-turn flourish layered on top of the shortest-arc interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OverRotation {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl OverRotation {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, ranges: &[TurnRange; 3]) -> Self {
        let mut pick = |range: &TurnRange| rng.random_range(range.min..=range.max.max(range.min));
        Self {
            x: pick(&ranges[0]),
            y: pick(&ranges[1]),
            z: pick(&ranges[2]),
        }
    }

    /// Rotation after `fraction` of the turns. Identity (as a rotation) at 0 and 1.
    pub fn at(&self, fraction: f64) -> DQuat {
        DQuat::from_rotation_x(TAU * self.x as f64 * fraction)
            * DQuat::from_rotation_y(TAU * self.y as f64 * fraction)
            * DQuat::from_rotation_z(TAU * self.z as f64 * fraction)
    }
}

/// An active spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
    pub face_index: usize,
    pub start: DQuat,
    pub target: DQuat,
    pub turns: OverRotation,
    pub elapsed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RollPhase {
    #[default]
    Idle,
    Spinning(Spin),
}

/// Output of one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollStep {
    pub orientation: DQuat,
    pub progress: f64,
    pub eased: f64,
    /// Set on the step that finishes the roll.
    pub settled: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollState {
    phase: RollPhase,
    duration: f64,
}

impl Default for RollState {
    fn default() -> Self {
        Self::new(ROLL_DURATION_SECS)
    }
}

impl RollState {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            phase: RollPhase::Idle,
            duration: duration_secs,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn phase(&self) -> &RollPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, RollPhase::Spinning(_))
    }

    /// Linear progress of the active spin in `[0, 1]`, `None` when idle.
    pub fn progress(&self) -> Option<f64> {
        match &self.phase {
            RollPhase::Idle => None,
            RollPhase::Spinning(spin) => Some(self.progress_at(spin.elapsed)),
        }
    }

    fn progress_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Starts a roll towards a uniformly random face, lasting
    /// `params.duration_secs`. Returns `None` and leaves the state untouched
    /// if a roll is already running.
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        current: DQuat,
        faces: &DieFaces,
        params: &RollParams,
        rng: &mut R,
    ) -> Option<Spin> {
        if self.is_spinning() {
            debug!("Roll ignored: die is already spinning");
            return None;
        }
        if faces.is_empty() {
            return None;
        }

        let face_index = rng.random_range(0..faces.len());
        let turns = OverRotation::random(rng, &params.turns);
        let face = faces.face(face_index)?;
        self.duration = params.duration_secs;
        self.begin_towards(current, face, turns, params.reference_axis)
    }

    /// Starts a roll towards a known face.
    pub fn begin_towards(
        &mut self,
        current: DQuat,
        face: &Face,
        turns: OverRotation,
        reference_axis: DVec3,
    ) -> Option<Spin> {
        if self.is_spinning() {
            return None;
        }

        let spin = Spin {
            face_index: face.index,
            start: current.normalize(),
            target: target_orientation(face, reference_axis),
            turns,
            elapsed: 0.0,
        };
        info!(
            "Rolling to face {} (turns x={} y={} z={})",
            face.number(),
            turns.x,
            turns.y,
            turns.z
        );
        self.phase = RollPhase::Spinning(spin);
        Some(spin)
    }

    /// Advances the active spin by `dt` seconds. Returns `None` when idle.
    pub fn advance(&mut self, dt: f64) -> Option<RollStep> {
        let RollPhase::Spinning(spin) = &mut self.phase else {
            return None;
        };
        spin.elapsed += dt.max(0.0);
        let spin = *spin;

        let progress = self.progress_at(spin.elapsed);
        let eased = ease_out_cubic(progress);

        if progress >= 1.0 {
            self.phase = RollPhase::Idle;
            return Some(RollStep {
                orientation: spin.target,
                progress,
                eased,
                settled: Some(spin.face_index),
            });
        }

        let arc = spin.start.slerp(spin.target, eased);
        Some(RollStep {
            orientation: (spin.turns.at(eased) * arc).normalize(),
            progress,
            eased,
            settled: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::game_constants::{FACE_COUNT, SEED};
    use bevy_math::EulerRot;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn same_rotation(a: DQuat, b: DQuat, eps: f64) -> bool {
        a.dot(b).abs() > 1.0 - eps
    }

    #[test]
    fn ease_out_hits_endpoints_and_never_goes_back() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut last = 0.0;
        for i in 1..=100 {
            let value = ease_out_cubic(i as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn seeded_rolls_bring_the_chosen_face_onto_the_axis() {
        let faces = DieFaces::icosahedron(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let axes = [DVec3::Z, DVec3::NEG_Z, DVec3::Y, DVec3::new(1.0, 2.0, -0.5)];

        for axis in axes {
            let params = RollParams {
                reference_axis: axis.normalize(),
                ..RollParams::default()
            };
            for _ in 0..50 {
                let mut state = RollState::new(params.duration_secs);
                let spin = state
                    .begin(DQuat::IDENTITY, &faces, &params, &mut rng)
                    .expect("idle die must start rolling");
                assert!(spin.face_index < FACE_COUNT);

                let normal = faces.faces()[spin.face_index].normal;
                let error = (spin.target * normal - axis.normalize()).length();
                assert!(error < 1e-6, "error {error}");
            }
        }
    }

    #[test]
    fn target_keeps_label_edge_horizontal() {
        let faces = DieFaces::icosahedron(1.0);
        for face in faces.faces() {
            let target = target_orientation(face, DVec3::Z);
            assert!((target * face.tangent).abs_diff_eq(DVec3::X, 1e-9));
        }
    }

    #[test]
    fn slerp_starts_at_start_and_ends_at_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let mut angle = || rng.random_range(-3.0..3.0);
            let a = DQuat::from_euler(EulerRot::XYZ, angle(), angle(), angle());
            let b = DQuat::from_euler(EulerRot::XYZ, angle(), angle(), angle());
            assert!(same_rotation(a.slerp(b, 0.0), a, 1e-9));
            assert!(same_rotation(a.slerp(b, 1.0), b, 1e-9));
        }
    }

    #[test]
    fn first_step_starts_from_current_orientation() {
        let faces = DieFaces::icosahedron(1.0);
        let start = DQuat::from_euler(EulerRot::XYZ, 0.4, 1.1, -0.3);
        let mut state = RollState::new(2.0);
        state.begin_towards(start, &faces.faces()[3], OverRotation { x: 2, y: 3, z: 1 }, DVec3::Z);

        let step = state.advance(0.0).expect("spinning");
        assert_eq!(step.progress, 0.0);
        assert!(same_rotation(step.orientation, start, 1e-9));
    }

    #[test]
    fn progress_is_monotonic_and_clamps_at_one() {
        let faces = DieFaces::icosahedron(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let params = RollParams::default();
        let mut state = RollState::new(params.duration_secs);
        let spin = state
            .begin(DQuat::IDENTITY, &faces, &params, &mut rng)
            .expect("spinning");

        let mut last = 0.0;
        let mut settled = None;
        for _ in 0..200 {
            let Some(step) = state.advance(1.0 / 60.0) else {
                break;
            };
            assert!(step.progress >= last);
            assert!(step.progress <= 1.0);
            last = step.progress;
            if step.settled.is_some() {
                settled = step.settled;
                assert_eq!(step.progress, 1.0);
                assert!(same_rotation(step.orientation, spin.target, 1e-12));
            }
        }

        assert_eq!(settled, Some(spin.face_index));
        assert!(!state.is_spinning());
        assert_eq!(state.progress(), None);
    }

    #[test]
    fn long_frame_finishes_the_roll_at_once() {
        let faces = DieFaces::icosahedron(1.0);
        let mut state = RollState::new(2.0);
        state.begin_towards(DQuat::IDENTITY, &faces.faces()[0], OverRotation::default(), DVec3::Z);
        let step = state.advance(10.0).expect("spinning");
        assert_eq!(step.settled, Some(0));
        assert_eq!(state.advance(1.0), None);
    }

    #[test]
    fn roll_lasts_the_requested_duration() {
        let faces = DieFaces::icosahedron(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let params = RollParams {
            duration_secs: 0.5,
            ..RollParams::default()
        };
        let mut state = RollState::new(2.0);
        state.begin(DQuat::IDENTITY, &faces, &params, &mut rng);
        assert_eq!(state.duration(), 0.5);

        let step = state.advance(0.25).expect("spinning");
        assert_eq!(step.progress, 0.5);
        let step = state.advance(0.25).expect("spinning");
        assert!(step.settled.is_some());
    }

    #[test]
    fn rolling_while_spinning_changes_nothing() {
        let faces = DieFaces::icosahedron(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let params = RollParams::default();
        let mut state = RollState::new(params.duration_secs);
        state.begin(DQuat::IDENTITY, &faces, &params, &mut rng);
        state.advance(0.5);

        let before = state;
        let other_start = DQuat::from_rotation_y(1.0);
        assert!(state.begin(other_start, &faces, &params, &mut rng).is_none());
        assert!(state
            .begin_towards(other_start, &faces.faces()[5], OverRotation::default(), DVec3::X)
            .is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn over_rotation_stays_in_range_and_vanishes_at_rest() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let ranges = RollParams::default().turns;
        for _ in 0..100 {
            let turns = OverRotation::random(&mut rng, &ranges);
            assert!((ranges[0].min..=ranges[0].max).contains(&turns.x));
            assert!((ranges[1].min..=ranges[1].max).contains(&turns.y));
            assert!((ranges[2].min..=ranges[2].max).contains(&turns.z));
            assert!(same_rotation(turns.at(0.0), DQuat::IDENTITY, 1e-12));
            assert!(same_rotation(turns.at(1.0), DQuat::IDENTITY, 1e-9));
        }
    }
}
