//! # Kerf Prelude
//!
//! Brings the commonly used types into scope for typical hosts:
//!
//! ```rust
//! use kerf::prelude::*;
//!
//! let mut viewer = kerf::star_guide();
//! viewer.set_parts(&[PartGeometry::new(
//!     "plank",
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.1, 0.1]],
//! )]);
//! viewer.next();
//! viewer.update(1.0 / 60.0);
//! ```

// Re-export the viewer facade
pub use crate::viewer::{CelebrationCallback, Viewer};

// Re-export graphics and scene types
pub use crate::gfx::camera::{CameraAnimator, CameraMove, Easing, OrientationAnimator, ViewCamera};
pub use crate::gfx::material::{MaterialDef, MaterialLibrary, MaterialRole};
pub use crate::gfx::part::{Part, PartGeometry, PartId, PartSet};
pub use crate::gfx::scene::Scene;

// Re-export the guide core
pub use crate::guide::classify::{classify, GroupKind, PartGroups};
pub use crate::guide::completion::CompletionLatch;
pub use crate::guide::engine::GuideEngine;
pub use crate::guide::sequencer::StepSequencer;
pub use crate::guide::steps::{Selector, StepConfig, StepIndex, StepTable};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
