//! Scene reconfiguration engine
//!
//! The state machine at the heart of the viewer. On every step change it
//! resolves the step table, rewrites every part's material role in one
//! synchronous pass, and requests camera/orientation transitions from the
//! animators. It is the sole writer of part roles; the animators it owns
//! are the sole writers of the camera pose and model orientation.

use crate::gfx::camera::{CameraAnimator, Easing, OrientationAnimator};
use crate::gfx::part::{PartGeometry, PartSet};
use crate::gfx::scene::Scene;
use crate::guide::classify::{classify, PartGroups};
use crate::guide::completion::CompletionLatch;
use crate::guide::steps::{StepIndex, StepTable};

/// Orientation resets fall back to this duration when the step has no
/// camera move to borrow one from
const DEFAULT_RESET_DURATION: f32 = 0.8;

pub struct GuideEngine {
    table: StepTable,
    groups: PartGroups,
    current: StepIndex,
    camera_animator: CameraAnimator,
    orientation_animator: OrientationAnimator,
    completion: CompletionLatch,
}

impl GuideEngine {
    /// Creates an engine over a step table, starting at the overview
    pub fn new(table: StepTable) -> Self {
        Self {
            table,
            groups: PartGroups::default(),
            current: None,
            camera_animator: CameraAnimator::new(),
            orientation_animator: OrientationAnimator::new(),
            completion: CompletionLatch::new(),
        }
    }

    pub fn table(&self) -> &StepTable {
        &self.table
    }

    /// Classifier output; empty until parts are installed
    pub fn groups(&self) -> &PartGroups {
        &self.groups
    }

    pub fn current_step(&self) -> StepIndex {
        self.current
    }

    /// Whether any camera or orientation transition is in flight
    ///
    /// The render host should mute orbit-drag input while this is true so it
    /// does not fight the animators for the camera.
    pub fn is_animating(&self) -> bool {
        self.camera_animator.is_animating() || self.orientation_animator.is_animating()
    }

    /// Level form of the completion signal: final step currently active
    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }

    /// Edge form: true once per fresh arrival at the final step
    pub fn take_completion_arrival(&mut self) -> bool {
        self.completion.take_arrival()
    }

    /// Installs freshly loaded part geometry
    ///
    /// Classification runs here, once per load, and the active step's
    /// configuration is re-applied so the new parts pick it up immediately.
    /// An empty slice models "asset not yet loaded" and clears the groups.
    pub fn set_parts(&mut self, scene: &mut Scene, geometries: &[PartGeometry]) {
        scene.parts = PartSet::from_geometry(geometries);
        self.groups = if scene.parts.is_empty() {
            PartGroups::default()
        } else {
            classify(&scene.parts)
        };
        self.apply(scene);
    }

    /// Handles a step-index change from the sequencer
    ///
    /// Material assignment completes synchronously within this call; the
    /// camera and orientation requests supersede whatever transitions were
    /// still in flight from a previous step.
    pub fn on_step_change(&mut self, step: StepIndex, scene: &mut Scene) {
        log::debug!("step change: {:?} -> {:?}", self.current, step);
        self.current = step;
        self.apply(scene);
    }

    fn apply(&mut self, scene: &mut Scene) {
        let config = self.table.resolve(self.current);

        for part in scene.parts.iter_mut() {
            part.set_role(config.role_for(part.id, &self.groups));
        }

        if let Some(request) = config.camera {
            self.camera_animator.animate_to(&mut scene.camera, request);
        }
        if config.reset_orientation {
            let (duration, easing) = config
                .camera
                .map(|c| (c.duration, c.easing))
                .unwrap_or((DEFAULT_RESET_DURATION, Easing::default()));
            self.orientation_animator
                .reset_to_identity(&mut scene.model_orientation, duration, easing);
        }

        self.completion
            .update(self.current == Some(self.table.last_index()));
    }

    /// Per-frame tick from the render host's loop
    ///
    /// Advances whichever transitions are live; each self-terminates when
    /// its elapsed time reaches its duration. Nothing here blocks.
    pub fn advance(&mut self, scene: &mut Scene, dt: f32) {
        self.camera_animator.advance(&mut scene.camera, dt);
        self.orientation_animator
            .advance(&mut scene.model_orientation, dt);
    }
}
