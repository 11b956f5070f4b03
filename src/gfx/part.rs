//! Part model for assembly guides
//!
//! Parts are the discrete mesh units of the assembled object. The asset
//! provider hands the viewer raw vertex positions per part; the bounds,
//! length measure, and material role are derived and tracked here.

use cgmath::{InnerSpace, Vector3, Zero};

use crate::gfx::material::MaterialRole;

/// Stable part identity, assigned in load order
pub type PartId = usize;

/// Raw per-part geometry supplied by the asset provider
///
/// Only vertex positions matter to the guide core. Normals, texture
/// coordinates, and GPU buffers stay with the render host.
#[derive(Debug, Clone)]
pub struct PartGeometry {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
}

impl PartGeometry {
    pub fn new(name: &str, positions: Vec<[f32; 3]>) -> Self {
        Self {
            name: name.to_string(),
            positions,
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// Size vector of the box (max - min)
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Magnitude of the size vector
    ///
    /// This is the length measure used to classify parts: robust to the
    /// asset's axis convention, since a plank lying along any axis yields
    /// the same diagonal.
    pub fn diagonal(&self) -> f32 {
        self.size().magnitude()
    }
}

/// One discrete mesh unit of the assembled object
///
/// The length measure is computed once from the part's bounding box at
/// construction and never recomputed. The material role is reassigned on
/// every step transition by the reconfiguration engine, which is its only
/// writer; the spatial transform stays with the scene graph.
#[derive(Debug, Clone)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    length: f32,
    role: MaterialRole,
}

impl Part {
    /// Create a part from loaded geometry, measuring it in the process
    pub fn new(id: PartId, geometry: &PartGeometry) -> Self {
        let length = Aabb::from_vertices(&geometry.positions).diagonal();
        Self {
            id,
            name: geometry.name.clone(),
            length,
            role: MaterialRole::Default,
        }
    }

    /// Bounding-box-derived length measure, fixed at load time
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Currently assigned material role
    pub fn role(&self) -> MaterialRole {
        self.role
    }

    pub(crate) fn set_role(&mut self, role: MaterialRole) {
        self.role = role;
    }
}

/// Ordered collection of parts keyed by [PartId]
///
/// Empty until the asset provider reports a finished load; the guide logic
/// degrades to assigning the default role everywhere while it is empty.
#[derive(Debug, Clone, Default)]
pub struct PartSet {
    parts: Vec<Part>,
}

impl PartSet {
    /// Create an empty part set
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Build a part set from loaded geometry, one part per entry
    pub fn from_geometry(geometries: &[PartGeometry]) -> Self {
        let parts = geometries
            .iter()
            .enumerate()
            .map(|(id, geometry)| Part::new(id, geometry))
            .collect();
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Get a part by id
    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Part> {
        self.parts.iter_mut()
    }

    /// Snapshot of every part's current role, for debugging and inspection
    pub fn roles(&self) -> Vec<(PartId, MaterialRole)> {
        self.parts.iter().map(|p| (p.id, p.role)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_creation() {
        let vertices = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = Aabb::from_vertices(&vertices);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_empty_aabb_is_degenerate() {
        let aabb = Aabb::from_vertices(&[]);
        assert_eq!(aabb.diagonal(), 0.0);
    }

    #[test]
    fn test_diagonal_is_axis_independent() {
        let along_x = Aabb::from_vertices(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let along_z = Aabb::from_vertices(&[[0.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(along_x.diagonal(), along_z.diagonal());
    }

    #[test]
    fn test_part_measures_geometry_once() {
        let geometry = PartGeometry::new("plank", vec![[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]]);
        let part = Part::new(0, &geometry);
        assert_eq!(part.length(), 5.0);
        assert_eq!(part.role(), MaterialRole::Default);
    }

    #[test]
    fn test_part_set_from_geometry() {
        let geometries = vec![
            PartGeometry::new("a", vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]),
            PartGeometry::new("b", vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]),
        ];
        let parts = PartSet::from_geometry(&geometries);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts.get(0).unwrap().name, "a");
        assert_eq!(parts.get(1).unwrap().length(), 2.0);
        assert!(parts.get(2).is_none());
    }
}
