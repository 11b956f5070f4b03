pub mod transition;
pub mod view_camera;

// Re-export main types
pub use transition::{CameraAnimator, CameraMove, Easing, OrientationAnimator};
pub use view_camera::ViewCamera;
