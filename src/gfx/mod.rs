//! # Graphics Module
//!
//! Scene-facing state the guide core reads and writes: parts and their
//! measures, material roles and styles, the view camera, and the transition
//! animators that move it.
//!
//! - **Camera System** ([`camera`]) - Look-at camera plus cancellable transitions
//! - **Part Model** ([`part`]) - Mesh units, bounds, length measures
//! - **Materials** ([`material`]) - Role enum and role → style palette
//! - **Scene State** ([`scene`]) - The aggregate the engine reconfigures
//!
//! Rendering itself (GPU upload, lighting, the frame loop) belongs to the
//! host embedding this crate.

pub mod camera;
pub mod material;
pub mod part;
pub mod scene;

// Re-export commonly used types
pub use camera::ViewCamera;
pub use material::{MaterialDef, MaterialLibrary, MaterialRole};
pub use part::{Part, PartGeometry, PartId, PartSet};
pub use scene::Scene;
