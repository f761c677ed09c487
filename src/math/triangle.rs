use crate::math::{Matrix4, Vector3, Vector4};
use std::ops::{Index, IndexMut};

/// Three homogeneous vertices in winding order plus one flat shade shared by the whole face.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector4; 3],
    pub shade: f32,
}

impl Triangle {
    #[inline]
    pub fn new(vertices: [Vector4; 3]) -> Triangle {
        Triangle {
            vertices,
            shade: 0.0,
        }
    }

    #[inline]
    pub fn with_shade(self, shade: f32) -> Triangle {
        Triangle { shade, ..self }
    }

    /// Unit face normal from `(v1 - v0) x (v2 - v0)`. Not finite for zero-area triangles.
    #[inline]
    pub fn normal(&self) -> Vector3 {
        let origin = self.vertices[0].narrowed();
        let line1 = self.vertices[1].narrowed() - origin;
        let line2 = self.vertices[2].narrowed() - origin;
        line1.cross(line2).normalized()
    }

    /// Mean z of the three vertices, the key for back-to-front sorting.
    #[inline]
    pub fn average_depth(&self) -> f32 {
        (self.vertices[0].z() + self.vertices[1].z() + self.vertices[2].z()) / 3.0
    }

    /// Every vertex multiplied by `matrix`. The shade carries over.
    #[inline]
    pub fn transformed(&self, matrix: &Matrix4) -> Triangle {
        self.map(|vertex| vertex * matrix)
    }

    #[inline]
    pub fn map<F: FnMut(Vector4) -> Vector4>(&self, mut f: F) -> Triangle {
        Triangle {
            vertices: [
                f(self.vertices[0]),
                f(self.vertices[1]),
                f(self.vertices[2]),
            ],
            shade: self.shade,
        }
    }
}

impl From<[Vector3; 3]> for Triangle {
    #[inline]
    fn from(points: [Vector3; 3]) -> Triangle {
        Triangle::new([
            points[0].widened(1.0),
            points[1].widened(1.0),
            points[2].widened(1.0),
        ])
    }
}

impl Index<usize> for Triangle {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Vector4 {
        &self.vertices[index]
    }
}

impl IndexMut<usize> for Triangle {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.vertices[index]
    }
}
