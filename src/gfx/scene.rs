use cgmath::{Vector3, Zero};

use crate::gfx::camera::ViewCamera;
use crate::gfx::material::MaterialLibrary;
use crate::gfx::part::PartSet;

/// Scene state owned by the guide core
///
/// Single-writer discipline keeps this lock-free under the host's
/// single-threaded frame loop: part roles are written only by the
/// reconfiguration engine, the camera pose only by the camera animator, and
/// the model orientation only by the orientation animator.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: ViewCamera,
    pub parts: PartSet,
    pub materials: MaterialLibrary,
    /// Euler orientation (radians) of the model root, animated back to
    /// identity by steps that reset the viewpoint
    pub model_orientation: Vector3<f32>,
}

impl Scene {
    /// Creates a scene with the given camera and an empty part set
    pub fn new(camera: ViewCamera) -> Self {
        Self {
            camera,
            parts: PartSet::new(),
            materials: MaterialLibrary::default(),
            model_orientation: Vector3::zero(),
        }
    }
}
