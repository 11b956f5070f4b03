//! Step configuration table
//!
//! The single source of truth for what each instructional step looks like.
//! Every step declares its material-role rules and optional camera move as
//! data; the reconfiguration engine applies whatever the table resolves, so
//! adding or removing steps never touches engine code.

use cgmath::Vector3;
use thiserror::Error;

use crate::gfx::camera::CameraMove;
use crate::gfx::material::MaterialRole;
use crate::gfx::part::PartId;
use crate::guide::classify::{GroupKind, PartGroups};

/// Externally-owned step cursor: `None` is the overview, `Some(i)` addresses
/// instructional step `i`
pub type StepIndex = Option<usize>;

/// Which parts a role rule addresses
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// A single part by id
    Part(PartId),
    /// Any of the listed part ids
    AnyOf(Vec<PartId>),
    /// Every member of a classifier group
    Group(GroupKind),
    /// Every part
    All,
}

impl Selector {
    /// Whether this selector addresses the given part
    ///
    /// Group selectors fail open: while the classifier has not produced
    /// groups yet they match nothing, and the part falls through to later
    /// rules or the default role. Same for ids that do not exist.
    pub fn matches(&self, id: PartId, groups: &PartGroups) -> bool {
        match self {
            Selector::Part(target) => *target == id,
            Selector::AnyOf(targets) => targets.contains(&id),
            Selector::Group(kind) => groups.contains(*kind, id),
            Selector::All => true,
        }
    }
}

/// One `(selector, role)` entry of a step's assignment rules
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRule {
    pub selector: Selector,
    pub role: MaterialRole,
}

/// Declarative description of a single step's visual and camera state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepConfig {
    /// Ordered rules; first match wins, no match means [MaterialRole::Default]
    pub rules: Vec<RoleRule>,
    /// Camera move for this step; `None` leaves the camera untouched so
    /// steps that reuse the prior viewpoint cause no jitter
    pub camera: Option<CameraMove>,
    /// Whether this step also animates the model root back to identity
    pub reset_orientation: bool,
}

impl StepConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Append a role rule
    pub fn with_rule(mut self, selector: Selector, role: MaterialRole) -> Self {
        self.rules.push(RoleRule { selector, role });
        self
    }

    /// Builder pattern: Set the camera move
    pub fn with_camera(mut self, camera: CameraMove) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Builder pattern: Also reset the model orientation
    pub fn with_orientation_reset(mut self) -> Self {
        self.reset_orientation = true;
        self
    }

    /// Resolves the role for one part: first matching rule wins
    pub fn role_for(&self, id: PartId, groups: &PartGroups) -> MaterialRole {
        self.rules
            .iter()
            .find(|rule| rule.selector.matches(id, groups))
            .map(|rule| rule.role)
            .unwrap_or_default()
    }
}

/// Errors raised while building a custom step table
#[derive(Debug, Error)]
pub enum StepTableError {
    #[error("step table has no authored steps")]
    Empty,
    #[error("{step}: camera duration must be finite and non-negative (got {duration})")]
    InvalidDuration { step: String, duration: f32 },
}

/// Static, ordered mapping from step index to scene configuration
///
/// `resolve` is total over every reachable index: the overview, each
/// authored step, and a defensive fallback for indices past the authored
/// narrative.
#[derive(Debug, Clone)]
pub struct StepTable {
    overview: StepConfig,
    steps: Vec<StepConfig>,
}

impl StepTable {
    /// Builds a table from an overview config and the authored steps
    pub fn new(overview: StepConfig, steps: Vec<StepConfig>) -> Result<Self, StepTableError> {
        if steps.is_empty() {
            return Err(StepTableError::Empty);
        }
        Self::validate_camera(&overview, "overview")?;
        for (i, step) in steps.iter().enumerate() {
            Self::validate_camera(step, &format!("step {}", i))?;
        }
        Ok(Self { overview, steps })
    }

    fn validate_camera(config: &StepConfig, step: &str) -> Result<(), StepTableError> {
        if let Some(camera) = &config.camera {
            if !camera.duration.is_finite() || camera.duration < 0.0 {
                return Err(StepTableError::InvalidDuration {
                    step: step.to_string(),
                    duration: camera.duration,
                });
            }
        }
        Ok(())
    }

    /// Number of authored steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final authored step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Resolves any step index to a concrete configuration
    ///
    /// Indices past the authored steps resolve to a fallback that highlights
    /// exactly the part whose id equals the index, default elsewhere, with
    /// no camera move. That mirrors how the guide historically addressed
    /// parts beyond the narrative; it is kept as documented defensive
    /// behavior, not a feature to build on.
    pub fn resolve(&self, step: StepIndex) -> StepConfig {
        match step {
            None => self.overview.clone(),
            Some(i) if i < self.steps.len() => self.steps[i].clone(),
            Some(i) => StepConfig::new().with_rule(Selector::Part(i), MaterialRole::Highlight),
        }
    }

    /// The authored wooden-star build guide
    ///
    /// Five steps: inventory check (group tints), V-shape intro (highlight +
    /// framing move), gluing (same highlight, camera held), pairing (pair
    /// tints + front framing), and the finished star.
    pub fn for_star_guide() -> Self {
        let look_at = Vector3::new(0.0, 1.4, 0.0);
        let overview_move = CameraMove::new(Vector3::new(2.0, 2.2, 5.0), look_at, 0.8);

        let overview = StepConfig::new()
            .with_camera(overview_move)
            .with_orientation_reset();

        let inventory = StepConfig::new()
            .with_rule(Selector::Group(GroupKind::Short), MaterialRole::ShortGroup)
            .with_rule(Selector::Group(GroupKind::Long), MaterialRole::LongGroup)
            .with_camera(overview_move)
            .with_orientation_reset();

        let v_shape = StepConfig::new()
            .with_rule(Selector::AnyOf(vec![0, 9]), MaterialRole::Highlight)
            .with_camera(CameraMove::new(
                Vector3::new(2.697, 3.585, -4.194),
                look_at,
                1.2,
            ));

        // Same highlight as the V-shape step; the camera deliberately holds
        let gluing = StepConfig::new().with_rule(Selector::AnyOf(vec![0, 9]), MaterialRole::Highlight);

        let pairs: [&[PartId]; 5] = [&[0, 9], &[1, 2], &[3, 6], &[7, 4], &[5, 8]];
        let mut pairing = StepConfig::new();
        for (k, members) in pairs.iter().enumerate() {
            pairing = pairing.with_rule(Selector::AnyOf(members.to_vec()), MaterialRole::Pair(k as u8));
        }
        let pairing = pairing.with_camera(CameraMove::new(
            Vector3::new(-0.290, 1.540, 5.434),
            look_at,
            1.2,
        ));

        let finished = StepConfig::new();

        Self::new(overview, vec![inventory, v_shape, gluing, pairing, finished])
            .expect("star guide table is valid")
    }
}
