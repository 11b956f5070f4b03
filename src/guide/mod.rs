//! Guide system
//!
//! The step-driven core: classification of parts into semantic groups, the
//! declarative step table, the reconfiguration engine that applies it, step
//! navigation, and the completion signal.

pub mod classify;
pub mod completion;
pub mod engine;
pub mod sequencer;
pub mod steps;

// Re-export main types
pub use classify::{classify, GroupKind, PartGroups};
pub use completion::CompletionLatch;
pub use engine::GuideEngine;
pub use sequencer::StepSequencer;
pub use steps::{Selector, StepConfig, StepIndex, StepTable, StepTableError};
