use crate::math::Vector3;

/// A final triangle in normalised device coordinates (`x`, `y` in `[-1, 1]`, `z` unused).
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct ScreenTriangle(pub [Vector3; 3]);

unsafe impl bytemuck::Zeroable for ScreenTriangle {}

unsafe impl bytemuck::Pod for ScreenTriangle {}

impl ScreenTriangle {
    #[inline]
    pub fn vertices(&self) -> &[Vector3; 3] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// The batch as packed `x, y, z` floats, three vertices per triangle, ready for a vertex
/// pointer style draw call.
#[inline]
pub fn vertex_data(triangles: &[ScreenTriangle]) -> &[f32] {
    bytemuck::cast_slice(triangles)
}

/// Whatever finally puts pixels on a surface.
///
/// Receives one batch per frame, already sorted back-to-front. `shades[i]` is the flat grey
/// level of `triangles[i]`.
pub trait Rasterizer {
    fn fill_triangles(&mut self, triangles: &[ScreenTriangle], shades: &[f32]);
}

impl<F: FnMut(&[ScreenTriangle], &[f32])> Rasterizer for F {
    #[inline]
    fn fill_triangles(&mut self, triangles: &[ScreenTriangle], shades: &[f32]) {
        self(triangles, shades)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn packs_vertices_contiguously() {
        let triangles = [
            ScreenTriangle([
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(2.0, 3.0, 0.0),
                Vector3::new(4.0, 5.0, 0.0),
            ]),
            ScreenTriangle([
                Vector3::new(6.0, 7.0, 0.0),
                Vector3::new(8.0, 9.0, 0.0),
                Vector3::new(10.0, 11.0, 0.0),
            ]),
        ];
        let data = vertex_data(&triangles);
        assert_eq!(18, data.len());
        assert_eq!(&[6.0, 7.0, 0.0], &data[9..12]);
        assert_eq!(36, triangles[0].to_bytes().len());
    }

    #[test]
    fn closures_are_rasterizers() {
        let mut seen = 0;
        {
            let mut rasterizer = |triangles: &[ScreenTriangle], shades: &[f32]| {
                assert_eq!(triangles.len(), shades.len());
                seen += triangles.len();
            };
            rasterizer.fill_triangles(&[ScreenTriangle::default()], &[0.5]);
        }
        assert_eq!(1, seen);
    }
}
