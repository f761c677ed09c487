use std::io::{self, Write};

use crate::{
    gfx::{Rasterizer, ScreenTriangle, Viewport},
    math::Vector2,
};

/// An 8-bit grayscale frame filled in software.
///
/// Rows are stored top-down while device space is y-up, so device `y = 1` is row 0.
#[derive(Debug, Default)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Canvas {
        let width = viewport.width as usize;
        let height = viewport.height as usize;
        Canvas {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn clear(&mut self, value: u8) {
        for pixel in self.data.iter_mut() {
            *pixel = value;
        }
    }

    /// Pixel at column `x` of row `y` (rows counted from the top).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of pixels that differ from `background`.
    pub fn coverage(&self, background: u8) -> usize {
        self.data.iter().filter(|&&p| p != background).count()
    }

    /// Fill one device-space triangle with a flat shade in `[0, 1]`.
    pub fn fill_triangle(&mut self, triangle: &ScreenTriangle, shade: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let value = (shade.max(0.0).min(1.0) * 255.0).round() as u8;

        let half = Vector2::new(self.width as f32 / 2.0, self.height as f32 / 2.0);
        let to_pixels = |i: usize| {
            let v = triangle.0[i];
            Vector2::new((v.x() + 1.0) * half.x(), (v.y() + 1.0) * half.y())
        };
        let (a, b, c) = (to_pixels(0), to_pixels(1), to_pixels(2));

        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let min_x = a.x().min(b.x()).min(c.x()).floor().max(0.0) as usize;
        let min_y = a.y().min(b.y()).min(c.y()).floor().max(0.0) as usize;
        let max_x = (a.x().max(b.x()).max(c.x()).ceil() as usize).min(self.width - 1);
        let max_y = (a.y().max(b.y()).max(c.y()).ceil() as usize).min(self.height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b, c, p);
                let w1 = edge(c, a, p);
                let w2 = edge(a, b, p);
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if inside {
                    let row = self.height - 1 - y;
                    self.data[row * self.width + x] = value;
                }
            }
        }
    }

    /// Binary PGM (P5) dump.
    pub fn write_pgm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "P5\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(&self.data)
    }
}

/// Twice the signed area of `a, b, p`.
#[inline]
fn edge(a: Vector2, b: Vector2, p: Vector2) -> f32 {
    (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x())
}

impl Rasterizer for Canvas {
    fn fill_triangles(&mut self, triangles: &[ScreenTriangle], shades: &[f32]) {
        for (triangle, &shade) in triangles.iter().zip(shades) {
            self.fill_triangle(triangle, shade);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Vector3;

    fn full_screen() -> [ScreenTriangle; 2] {
        [
            ScreenTriangle([
                Vector3::new(-1.0, -1.0, 0.0),
                Vector3::new(1.0, -1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ]),
            ScreenTriangle([
                Vector3::new(-1.0, -1.0, 0.0),
                Vector3::new(-1.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ]),
        ]
    }

    #[test]
    fn fills_both_windings() {
        let mut canvas = Canvas::new((16, 8).into());
        canvas.fill_triangles(&full_screen(), &[1.0, 1.0]);
        assert_eq!(16 * 8, canvas.coverage(0));
    }

    #[test]
    fn later_triangles_paint_over_earlier() {
        let mut canvas = Canvas::new((4, 4).into());
        let [first, second] = full_screen();
        canvas.fill_triangles(&[first, first], &[0.2, 0.8]);
        canvas.fill_triangles(&[second], &[0.0]);
        assert_eq!(Some(204), canvas.pixel(3, 3));
        // Shared diagonal: the second triangle wins.
        assert_eq!(Some(0), canvas.pixel(1, 2));
    }

    #[test]
    fn device_y_points_up() {
        let mut canvas = Canvas::new((4, 4).into());
        let top_left = ScreenTriangle([
            Vector3::new(-1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
        ]);
        canvas.fill_triangle(&top_left, 1.0);
        assert_eq!(Some(255), canvas.pixel(0, 0));
        assert_eq!(Some(0), canvas.pixel(0, 3));
    }

    #[test]
    fn ignores_degenerate_triangles() {
        let mut canvas = Canvas::new((4, 4).into());
        let line = ScreenTriangle([
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
        ]);
        canvas.fill_triangle(&line, 1.0);
        assert_eq!(0, canvas.coverage(0));
    }

    #[test]
    fn writes_pgm() {
        let mut canvas = Canvas::new((2, 1).into());
        canvas.clear(255);
        let mut out = Vec::new();
        canvas.write_pgm(&mut out).expect("writing to a Vec cannot fail");
        assert_eq!(b"P5\n2 1\n255\n\xff\xff".to_vec(), out);
    }
}
