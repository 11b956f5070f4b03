//! Cancellable camera and orientation transitions
//!
//! Every active transition is a small explicit state object (start value,
//! target, elapsed time, duration, easing, generation token) advanced by the
//! render host's per-frame driver. Starting a new transition supersedes the
//! in-flight one at its current position; the generation token guarantees a
//! superseded transition never writes again.

use cgmath::{InnerSpace, Vector3, VectorSpace, Zero};

use super::view_camera::ViewCamera;

/// Two positions closer than this are treated as the same camera target
const TARGET_EPSILON: f32 = 1e-4;

/// Easing curve applied to normalized transition time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in/ease-out, the standard curve for all guide moves
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A camera move request: where to go, what to keep looking at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMove {
    pub position: Vector3<f32>,
    pub look_at: Vector3<f32>,
    /// Seconds; zero requests no animation at all
    pub duration: f32,
    pub easing: Easing,
}

impl CameraMove {
    pub fn new(position: Vector3<f32>, look_at: Vector3<f32>, duration: f32) -> Self {
        Self {
            position,
            look_at,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// In-flight interpolation toward a camera target
#[derive(Debug, Clone, Copy)]
struct CameraTransition {
    start: Vector3<f32>,
    request: CameraMove,
    elapsed: f32,
    generation: u64,
}

/// Owns the sole in-flight camera transition
///
/// The camera's position is exclusively written here while a transition is
/// active; hosts should mute orbit-drag input while [CameraAnimator::is_animating]
/// reports `true` rather than fight the animator for the pose.
#[derive(Debug, Default)]
pub struct CameraAnimator {
    active: Option<CameraTransition>,
    generation: u64,
}

impl CameraAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Token identifying the most recent accepted request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts interpolating from the camera's current live position
    ///
    /// Superseding an in-flight transition restarts from wherever the camera
    /// is right now, not from either endpoint. Requests that would not move
    /// anything are ignored: a zero duration means no animation is being
    /// requested and the camera is left exactly as-is, likewise when the
    /// camera already rests at the target or the active transition already
    /// aims there.
    ///
    /// # Returns
    /// `true` if a transition started
    pub fn animate_to(&mut self, camera: &mut ViewCamera, request: CameraMove) -> bool {
        if request.duration <= 0.0 {
            return false;
        }
        let redundant = match &self.active {
            Some(active) => {
                near(active.request.position, request.position)
                    && near(active.request.look_at, request.look_at)
            }
            None => near(camera.position, request.position) && near(camera.target, request.look_at),
        };
        if redundant {
            return false;
        }

        self.generation = self.generation.wrapping_add(1);

        if let Some(superseded) = self.active.take() {
            log::trace!(
                "camera transition {} superseded by {}",
                superseded.generation,
                self.generation
            );
        }
        self.active = Some(CameraTransition {
            start: camera.position,
            request,
            elapsed: 0.0,
            generation: self.generation,
        });
        true
    }

    /// Cancels any in-flight transition, leaving the camera where it is
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
    }

    /// Per-frame driver: eases the position and re-aims every frame
    ///
    /// Re-aiming happens on every intermediate frame, not just the endpoints;
    /// the intermediate orientation differs from a straight interpolation of
    /// the end rotations. Self-terminates once elapsed time reaches the
    /// duration. Writes nothing when idle.
    pub fn advance(&mut self, camera: &mut ViewCamera, dt: f32) {
        let Some(mut transition) = self.active.take() else {
            return;
        };
        // A transition from an older request must never write
        if transition.generation != self.generation {
            return;
        }

        transition.elapsed += dt;
        let t = (transition.elapsed / transition.request.duration).min(1.0);
        let eased = transition.request.easing.apply(t);

        camera.position = transition.start.lerp(transition.request.position, eased);
        camera.look_at(transition.request.look_at);

        if transition.elapsed < transition.request.duration {
            self.active = Some(transition);
        }
    }
}

/// In-flight interpolation of the model root back to identity orientation
#[derive(Debug, Clone, Copy)]
struct OrientationTransition {
    start: Vector3<f32>,
    duration: f32,
    easing: Easing,
    elapsed: f32,
    generation: u64,
}

/// Drives the model root's Euler orientation back to identity
///
/// Same ownership and supersession rules as [CameraAnimator]; the model
/// orientation is exclusively written here while a reset is in flight.
#[derive(Debug, Default)]
pub struct OrientationAnimator {
    active: Option<OrientationTransition>,
    generation: u64,
}

impl OrientationAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Requests the orientation animate back to identity
    ///
    /// A zero duration requests nothing, and a reset that is already in
    /// flight keeps running (it already aims at identity).
    ///
    /// # Returns
    /// `true` if a reset started
    pub fn reset_to_identity(
        &mut self,
        orientation: &mut Vector3<f32>,
        duration: f32,
        easing: Easing,
    ) -> bool {
        if duration <= 0.0 {
            return false;
        }
        if orientation.magnitude() < TARGET_EPSILON && self.active.is_none() {
            return false;
        }
        if self.active.is_some() {
            return false;
        }

        self.generation = self.generation.wrapping_add(1);

        self.active = Some(OrientationTransition {
            start: *orientation,
            duration,
            easing,
            elapsed: 0.0,
            generation: self.generation,
        });
        true
    }

    /// Cancels any in-flight reset, leaving the orientation where it is
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.active = None;
    }

    /// Per-frame driver; self-terminates at the end of the reset
    pub fn advance(&mut self, orientation: &mut Vector3<f32>, dt: f32) {
        let Some(mut transition) = self.active.take() else {
            return;
        };
        if transition.generation != self.generation {
            return;
        }

        transition.elapsed += dt;
        let t = (transition.elapsed / transition.duration).min(1.0);
        let eased = transition.easing.apply(t);

        *orientation = transition.start.lerp(Vector3::zero(), eased);

        if transition.elapsed < transition.duration {
            self.active = Some(transition);
        }
    }
}

fn near(a: Vector3<f32>, b: Vector3<f32>) -> bool {
    (a - b).magnitude2() < TARGET_EPSILON * TARGET_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(position: Vector3<f32>) -> ViewCamera {
        ViewCamera::new(position, Vector3::new(0.0, 0.0, 0.0), 1.0)
    }

    fn run_to_completion(
        animator: &mut CameraAnimator,
        camera: &mut ViewCamera,
        dt: f32,
        max_frames: usize,
    ) {
        for _ in 0..max_frames {
            if !animator.is_animating() {
                return;
            }
            animator.advance(camera, dt);
        }
        panic!("transition did not terminate");
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert!(Easing::EaseInOut.apply(0.25) < 0.25);
        assert!(Easing::EaseInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn test_transition_reaches_target_and_terminates() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 5.0));
        let target = Vector3::new(2.0, 2.2, 5.0);
        let look_at = Vector3::new(0.0, 1.4, 0.0);

        assert!(animator.animate_to(&mut camera, CameraMove::new(target, look_at, 0.8)));
        run_to_completion(&mut animator, &mut camera, 1.0 / 60.0, 120);

        assert!(near(camera.position, target));
        assert_eq!(camera.target, look_at);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_look_at_reaimed_every_frame() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 5.0));
        let look_at = Vector3::new(0.0, 1.4, 0.0);

        animator.animate_to(
            &mut camera,
            CameraMove::new(Vector3::new(3.0, 3.0, -4.0), look_at, 1.2),
        );
        for _ in 0..10 {
            camera.target = Vector3::new(9.0, 9.0, 9.0); // host scribbles over it
            animator.advance(&mut camera, 0.05);
            assert_eq!(camera.target, look_at);
        }
    }

    #[test]
    fn test_supersession_wins_and_old_target_never_reached() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 0.0));
        let target_a = Vector3::new(10.0, 0.0, 0.0);
        let target_b = Vector3::new(0.0, 10.0, 0.0);
        let look_at = Vector3::new(0.0, 1.4, 0.0);

        animator.animate_to(&mut camera, CameraMove::new(target_a, look_at, 1.0));
        for _ in 0..12 {
            animator.advance(&mut camera, 1.0 / 60.0);
        }
        let midway = camera.position;
        assert!(midway.x > 0.0 && midway.x < 10.0);

        // B takes over from the camera's current position, not A's endpoint
        assert!(animator.animate_to(&mut camera, CameraMove::new(target_b, look_at, 1.0)));
        let mut max_x = f32::MIN;
        while animator.is_animating() {
            animator.advance(&mut camera, 1.0 / 60.0);
            max_x = max_x.max(camera.position.x);
        }

        assert!(near(camera.position, target_b));
        // x only shrinks back toward B's 0 after the handover; A's trajectory
        // would have kept growing it toward 10
        assert!(max_x <= midway.x + TARGET_EPSILON);
    }

    #[test]
    fn test_redundant_request_is_ignored() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(2.0, 2.2, 5.0));
        camera.look_at(Vector3::new(0.0, 1.4, 0.0));
        let request = CameraMove::new(Vector3::new(2.0, 2.2, 5.0), Vector3::new(0.0, 1.4, 0.0), 0.8);

        // Already resting at the target
        assert!(!animator.animate_to(&mut camera, request));
        assert!(!animator.is_animating());

        // Already animating toward the target
        let away = CameraMove::new(Vector3::new(5.0, 0.0, 0.0), Vector3::new(0.0, 1.4, 0.0), 1.0);
        assert!(animator.animate_to(&mut camera, away));
        let generation = animator.generation();
        assert!(!animator.animate_to(&mut camera, away));
        assert_eq!(animator.generation(), generation);
    }

    #[test]
    fn test_zero_duration_requests_nothing() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 0.0));
        let before = camera;

        let request = CameraMove::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 1.4, 0.0), 0.0);
        assert!(!animator.animate_to(&mut camera, request));
        assert!(!animator.is_animating());
        assert_eq!(camera.position, before.position);
        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn test_cancel_freezes_in_place() {
        let mut animator = CameraAnimator::new();
        let mut camera = camera_at(Vector3::new(0.0, 0.0, 0.0));

        animator.animate_to(
            &mut camera,
            CameraMove::new(Vector3::new(10.0, 0.0, 0.0), Vector3::zero(), 1.0),
        );
        for _ in 0..6 {
            animator.advance(&mut camera, 1.0 / 60.0);
        }
        let frozen = camera.position;

        animator.cancel();
        for _ in 0..30 {
            animator.advance(&mut camera, 1.0 / 60.0);
        }
        assert_eq!(camera.position, frozen);
    }

    #[test]
    fn test_orientation_reset_reaches_identity() {
        let mut animator = OrientationAnimator::new();
        let mut orientation = Vector3::new(0.5, -1.2, 0.3);

        assert!(animator.reset_to_identity(&mut orientation, 0.8, Easing::default()));
        for _ in 0..120 {
            if !animator.is_animating() {
                break;
            }
            animator.advance(&mut orientation, 1.0 / 60.0);
        }
        assert!(orientation.magnitude() < TARGET_EPSILON);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_orientation_reset_noop_when_upright() {
        let mut animator = OrientationAnimator::new();
        let mut orientation = Vector3::zero();
        assert!(!animator.reset_to_identity(&mut orientation, 0.8, Easing::default()));
        assert!(!animator.is_animating());
    }
}
