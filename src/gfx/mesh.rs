use crate::math::{Triangle, Vector3};
use std::iter::FromIterator;

/// A static triangle soup. Immutable once built.
///
/// Front faces are wound so that their normal points away from the viewer (see
/// [`Renderer`](crate::gfx::Renderer)). Meshes authored with outward-facing normals, which is
/// what most exporters produce, need [`Mesh::reversed_winding`] first.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    #[inline]
    pub fn new(triangles: Vec<Triangle>) -> Mesh {
        Mesh { triangles }
    }

    /// The unit cube spanning `(0, 0, 0)..(1, 1, 1)`, two triangles per face.
    pub fn unit_cube() -> Mesh {
        UNIT_CUBE.iter().copied().collect()
    }

    /// Every triangle with its last two vertices swapped, flipping each face normal.
    pub fn reversed_winding(&self) -> Mesh {
        self.triangles
            .iter()
            .map(|t| Triangle {
                vertices: [t.vertices[0], t.vertices[2], t.vertices[1]],
                shade: t.shade,
            })
            .collect()
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3::new(x, y, z)
}

const UNIT_CUBE: [[Vector3; 3]; 12] = [
    // South
    [v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)],
    [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0)],
    // East
    [v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, 0.0)],
    [v(1.0, 0.0, 0.0), v(1.0, 0.0, 1.0), v(1.0, 1.0, 1.0)],
    // North
    [v(1.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(1.0, 1.0, 1.0)],
    [v(1.0, 0.0, 1.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0)],
    // West
    [v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(0.0, 1.0, 1.0)],
    [v(0.0, 0.0, 1.0), v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
    // Top
    [v(0.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0)],
    [v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0)],
    // Bottom
    [v(1.0, 0.0, 1.0), v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0)],
    [v(1.0, 0.0, 1.0), v(1.0, 0.0, 0.0), v(0.0, 0.0, 0.0)],
];

impl From<Vec<Triangle>> for Mesh {
    #[inline]
    fn from(triangles: Vec<Triangle>) -> Mesh {
        Mesh::new(triangles)
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Mesh {
        Mesh::new(iter.into_iter().collect())
    }
}

impl FromIterator<[Vector3; 3]> for Mesh {
    fn from_iter<I: IntoIterator<Item = [Vector3; 3]>>(iter: I) -> Mesh {
        iter.into_iter().map(Triangle::from).collect()
    }
}
