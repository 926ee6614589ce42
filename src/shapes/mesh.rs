use super::Triangle;
use crate::{hit::Hit, materials::Material, math::{Point3, Ray}};

/// A triangle mesh primitive
///
/// Built in memory from a point and index list; all faces share one material
/// and shade flat with their face normals. Loading geometry from files is the
/// caller's business.
pub struct Mesh {
    triangles: Vec<Triangle>,
    material: Material,
}

impl Mesh {
    /// Creates a new `Mesh` from `points` and flat triangle `indices`.
    ///
    /// Fails if the index list is not a multiple of three or references a
    /// point that doesn't exist. Validation happens here so the render loop
    /// never sees a malformed mesh.
    pub fn new(
        points: &[Point3<f32>],
        indices: &[usize],
        material: Material,
    ) -> crate::Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(
                format!("Mesh index count {} is not a multiple of three", indices.len()).into(),
            );
        }
        if let Some(&i) = indices.iter().find(|&&i| i >= points.len()) {
            return Err(
                format!("Mesh index {} out of bounds for {} points", i, points.len()).into(),
            );
        }

        let triangles = indices
            .chunks(3)
            .map(|v| Triangle::new(points[v[0]], points[v[1]], points[v[2]], material))
            .collect();

        Ok(Self {
            triangles,
            material,
        })
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Returns the nearest positive hit among the mesh's triangles.
    ///
    /// Exact distance ties go to the earlier face in index order.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for triangle in &self.triangles {
            if let Some(hit) = triangle.intersect(ray) {
                if nearest.as_ref().map_or(true, |n| hit.t < n.t) {
                    nearest = Some(hit);
                }
            }
        }
        nearest
    }
}
