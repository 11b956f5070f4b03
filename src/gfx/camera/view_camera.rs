use cgmath::{perspective, Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Free-flying look-at camera driven by the guide engine
///
/// Unlike an orbit rig, this camera is positioned directly: the transition
/// animator writes `position` each frame and re-aims via [ViewCamera::look_at].
/// While a transition is active the animator is the only writer of the pose;
/// the host's orbit controls take over in between (see
/// [CameraAnimator::is_animating](crate::gfx::camera::CameraAnimator::is_animating)).
#[derive(Debug, Clone, Copy)]
pub struct ViewCamera {
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl ViewCamera {
    pub fn new(position: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(40.0).into(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Re-aims the camera at a world-space point
    pub fn look_at(&mut self, point: Vector3<f32>) {
        self.target = point;
    }

    /// View matrix from the current pose
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.position);
        let target = Point3::from_vec(self.target);
        Matrix4::look_at_rh(eye, target, self.up)
    }

    /// Combined view-projection matrix in wgpu clip space
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        let proj = OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Normalized viewing direction
    pub fn forward(&self) -> Vector3<f32> {
        (self.target - self.position).normalize()
    }

    /// Logs the current pose at debug level
    ///
    /// Handy while authoring a step table: orbit to a good viewpoint, dump
    /// the pose, copy the numbers into a [CameraMove](crate::gfx::camera::CameraMove).
    pub fn log_pose(&self) {
        let offset = self.position - self.target;
        let distance = offset.magnitude();
        let pitch = Deg::from(Rad((offset.y / distance.max(f32::EPSILON)).asin()));
        let yaw = Deg::from(Rad(offset.x.atan2(offset.z)));

        log::debug!(
            "camera pose: position ({:.3}, {:.3}, {:.3}), yaw {:.2}°, pitch {:.2}°, distance {:.3}",
            self.position.x,
            self.position.y,
            self.position.z,
            yaw.0,
            pitch.0,
            distance
        );
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 2.0, 8.0), Vector3::new(0.0, 0.0, 0.0), 1.0)
    }
}
