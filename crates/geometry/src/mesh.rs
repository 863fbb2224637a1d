use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Ordered 3D polyline.
pub type Line3D = Vec<DVec3>;

/// Indexed triangle mesh. Every entry of `indices` is `< vertices.len()`,
/// and each consecutive triple is one triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh3D {
    pub vertices: Vec<DVec3>,
    pub indices: Vec<usize>,
}

impl Mesh3D {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append `other`, rebasing its indices onto this vertex buffer.
    pub fn add_mesh(&mut self, other: &Mesh3D) {
        let offset = self.vertices.len();
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|idx| idx + offset));
    }
}

/// Stitch two borders of equal point count into a triangle ribbon.
///
/// The vertex buffer is the outer border followed by the inner border in
/// reverse, which walks once around the ribbon. Triangles are emitted as a
/// zipper from both ends of that loop towards the seam in the middle: each
/// step adds the quad `(l-1, l, r, r+1)` as two triangles, giving
/// `2 * (N - 1)` triangles for `N` points per border.
pub fn generate_mesh_from_borders(
    inner_border: &[DVec3],
    outer_border: &[DVec3],
) -> Result<Mesh3D, GeometryError> {
    if inner_border.len() != outer_border.len() {
        return Err(GeometryError::BorderLengthMismatch {
            inner: inner_border.len(),
            outer: outer_border.len(),
        });
    }

    let n = outer_border.len();
    let mut mesh = Mesh3D {
        vertices: Vec::with_capacity(2 * n),
        indices: Vec::with_capacity(6 * n.saturating_sub(1)),
    };
    mesh.vertices.extend_from_slice(outer_border);
    mesh.vertices.extend(inner_border.iter().rev());

    if n < 2 {
        return Ok(mesh);
    }

    let num_pts = mesh.vertices.len();
    for (l_idx, r_idx) in (1..n).zip((n..=num_pts - 2).rev()) {
        mesh.indices
            .extend_from_slice(&[l_idx, l_idx - 1, r_idx + 1, r_idx, l_idx, r_idx + 1]);
    }

    Ok(mesh)
}
