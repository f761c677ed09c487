use crate::math::{Triangle, Vector3, Vector4};
use smallvec::SmallVec;

/// Up to two triangles come out of clipping a single triangle against a plane.
pub type Clipped = SmallVec<[Triangle; 2]>;

/// A half-space boundary. The side the normal points towards is "inside".
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Plane {
    point: Vector3,
    normal: Vector3,
}

impl Plane {
    /// The normal does not need to be unit length.
    #[inline]
    pub fn new(point: Vector3, normal: Vector3) -> Plane {
        Plane {
            point,
            normal: normal.normalized(),
        }
    }

    #[inline]
    pub fn point(&self) -> Vector3 {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Signed distance of a vertex from the plane. Zero or positive means inside.
    #[inline]
    pub fn distance(&self, vertex: Vector4) -> f32 {
        self.normal.dot(vertex.narrowed()) - self.normal.dot(self.point)
    }

    /// Where the segment `start -> end` crosses the plane.
    ///
    /// The segment is parameterised from `start`, so `w` and any other component interpolate
    /// along with the position.
    #[inline]
    pub fn intersect(&self, start: Vector4, end: Vector4) -> Vector4 {
        let plane_d = -self.normal.dot(self.point);
        let start_d = start.narrowed().dot(self.normal);
        let end_d = end.narrowed().dot(self.normal);
        let t = (-plane_d - start_d) / (end_d - start_d);
        start + (end - start) * t
    }

    /// Clip a triangle to the inside half-space.
    ///
    /// Vertices are classified in order and a vertex on the plane counts as inside. When two
    /// vertices survive, the quad is split along the diagonal from the second inside vertex.
    pub fn clip(&self, triangle: &Triangle) -> Clipped {
        let mut inside: SmallVec<[Vector4; 3]> = SmallVec::new();
        let mut outside: SmallVec<[Vector4; 3]> = SmallVec::new();
        for &vertex in triangle.vertices.iter() {
            if self.distance(vertex) >= 0.0 {
                inside.push(vertex);
            } else {
                outside.push(vertex);
            }
        }

        let mut clipped = Clipped::new();
        match inside.len() {
            3 => clipped.push(*triangle),
            2 => {
                let first = self.intersect(inside[0], outside[0]);
                let second = self.intersect(inside[1], outside[0]);
                clipped.push(Triangle {
                    vertices: [inside[0], inside[1], first],
                    shade: triangle.shade,
                });
                clipped.push(Triangle {
                    vertices: [inside[1], first, second],
                    shade: triangle.shade,
                });
            }
            1 => clipped.push(Triangle {
                vertices: [
                    inside[0],
                    self.intersect(inside[0], outside[0]),
                    self.intersect(inside[0], outside[1]),
                ],
                shade: triangle.shade,
            }),
            _ => {}
        }
        clipped
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn near_plane() -> Plane {
        Plane::new((0.0, 0.0, 0.1).into(), (0.0, 0.0, 1.0).into())
    }

    fn triangle(a: (f32, f32, f32), b: (f32, f32, f32), c: (f32, f32, f32)) -> Triangle {
        Triangle::from([a.into(), b.into(), c.into()])
    }

    fn area(points: &[Vector3]) -> f32 {
        let mut sum = Vector3::default();
        for i in 1..points.len().saturating_sub(1) {
            sum += (points[i] - points[0]).cross(points[i + 1] - points[0]);
        }
        sum.length() / 2.0
    }

    fn triangle_area(triangle: &Triangle) -> f32 {
        area(&[
            triangle[0].narrowed(),
            triangle[1].narrowed(),
            triangle[2].narrowed(),
        ])
    }

    // Reference polygon clip used to measure the inside portion independently.
    fn inside_polygon(plane: &Plane, triangle: &Triangle) -> Vec<Vector3> {
        let mut polygon = Vec::new();
        for i in 0..3 {
            let current = triangle[i];
            let next = triangle[(i + 1) % 3];
            let (dc, dn) = (plane.distance(current), plane.distance(next));
            if dc >= 0.0 {
                polygon.push(current.narrowed());
            }
            if (dc >= 0.0) != (dn >= 0.0) {
                let t = dc / (dc - dn);
                let crossing = current.narrowed() + (next.narrowed() - current.narrowed()) * t;
                polygon.push(crossing);
            }
        }
        polygon
    }

    fn contains(triangle: &Triangle, point: Vector3) -> bool {
        let (a, b, c) = (
            triangle[0].narrowed(),
            triangle[1].narrowed(),
            triangle[2].narrowed(),
        );
        let normal = (b - a).cross(c - a);
        let total = normal.dot(normal);
        let u = (c - b).cross(point - b).dot(normal) / total;
        let v = (a - c).cross(point - c).dot(normal) / total;
        let w = 1.0 - u - v;
        let tolerance = -1e-5;
        u >= tolerance && v >= tolerance && w >= tolerance
    }

    fn random_point(rng: &mut StdRng) -> (f32, f32, f32) {
        (
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn normalizes_the_normal() {
        let plane = Plane::new(Vector3::default(), (0.0, 0.0, 5.0).into());
        assert_eq!(Vector3::forward(), plane.normal());
        assert_eq!(2.0, plane.distance(Vector4::point(3.0, 3.0, 2.0)));
    }

    #[test]
    fn discards_fully_outside() {
        let t = triangle((0.0, 0.0, -1.0), (1.0, 0.0, -1.0), (0.0, 1.0, 0.0));
        assert!(near_plane().clip(&t).is_empty());
    }

    #[test]
    fn passes_fully_inside_through_unchanged() {
        let t = triangle((0.0, 0.0, 1.0), (1.0, 0.0, 2.0), (0.0, 1.0, 3.0)).with_shade(0.42);
        let clipped = near_plane().clip(&t);
        assert_eq!(1, clipped.len());
        assert_eq!(t.vertices, clipped[0].vertices);
        assert_eq!(0.42, clipped[0].shade);
    }

    #[test]
    fn one_inside_makes_one_triangle() {
        let t = triangle((0.0, 0.0, 5.0), (-1.0, 0.0, 0.05), (1.0, 0.0, 0.05)).with_shade(0.3);
        let clipped = near_plane().clip(&t);
        assert_eq!(1, clipped.len());
        assert_eq!(t[0], clipped[0][0]);
        assert!((clipped[0][1].z() - 0.1).abs() < 1e-5);
        assert!((clipped[0][2].z() - 0.1).abs() < 1e-5);
        assert!(clipped[0][1].x() < 0.0 && clipped[0][2].x() > 0.0);
        assert_eq!(1.0, clipped[0][1].w());
        assert_eq!(0.3, clipped[0].shade);
    }

    #[test]
    fn two_inside_split_into_quad() {
        let t = triangle((-1.0, -1.0, 5.0), (1.0, -1.0, 5.0), (0.0, 1.0, 0.05)).with_shade(0.7);
        let plane = near_plane();
        let clipped = plane.clip(&t);
        assert_eq!(2, clipped.len());

        let first = plane.intersect(t[0], t[2]);
        let second = plane.intersect(t[1], t[2]);
        assert!((first.z() - 0.1).abs() < 1e-5);
        assert!((second.z() - 0.1).abs() < 1e-5);

        assert_eq!([t[0], t[1], first], clipped[0].vertices);
        assert_eq!([t[1], first, second], clipped[1].vertices);
        assert!(clipped.iter().all(|c| c.shade == 0.7));
    }

    #[test]
    fn vertex_on_plane_counts_as_inside() {
        let t = triangle((0.0, 0.0, 0.1), (1.0, 0.0, 5.0), (0.0, 1.0, -1.0));
        let plane = near_plane();
        assert_eq!(0.0, plane.distance(t[0]));

        let clipped = plane.clip(&t);
        assert_eq!(2, clipped.len());
        assert_eq!(t[0], clipped[0][0]);
        assert_eq!(t[1], clipped[0][1]);
        assert_eq!(t[1], clipped[1][0]);
    }

    #[test]
    fn touching_triangle_survives_whole() {
        let t = triangle((0.0, 0.0, 0.1), (1.0, 0.0, 0.1), (0.0, 1.0, 3.0));
        let clipped = near_plane().clip(&t);
        assert_eq!(1, clipped.len());
        assert_eq!(t.vertices, clipped[0].vertices);
    }

    #[test]
    fn clipping_is_area_conserving() {
        let mut rng = StdRng::seed_from_u64(0xC11F);
        for _ in 0..256 {
            let plane = Plane::new(random_point(&mut rng).into(), random_point(&mut rng).into());
            let t = triangle(
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
            );
            if triangle_area(&t) < 1.0 {
                continue;
            }

            let clipped = plane.clip(&t);
            let expected = area(&inside_polygon(&plane, &t));
            let actual: f32 = clipped.iter().map(triangle_area).sum();
            assert!(
                (expected - actual).abs() <= 1e-3 * expected.max(1.0),
                "expected area {} got {}",
                expected,
                actual
            );

            for _ in 0..64 {
                let (mut a, mut b) = (rng.gen_range(0.0..1.0f32), rng.gen_range(0.0..1.0f32));
                if a + b > 1.0 {
                    a = 1.0 - a;
                    b = 1.0 - b;
                }
                let (p0, p1, p2) = (t[0].narrowed(), t[1].narrowed(), t[2].narrowed());
                let sample = p0 + (p1 - p0) * a + (p2 - p0) * b;
                let d = plane.distance(sample.widened(1.0));
                let covered = clipped.iter().any(|c| contains(c, sample));
                if d > 0.05 {
                    assert!(covered, "inside sample {:?} not covered", sample);
                } else if d < -0.05 {
                    assert!(!covered, "outside sample {:?} covered", sample);
                }
            }
        }
    }

    #[test]
    fn emitted_vertices_lie_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let plane = Plane::new(random_point(&mut rng).into(), random_point(&mut rng).into());
            let t = triangle(
                random_point(&mut rng),
                random_point(&mut rng),
                random_point(&mut rng),
            );
            for clipped in plane.clip(&t) {
                for vertex in clipped.vertices.iter() {
                    assert!(plane.distance(*vertex) >= -1e-3);
                }
            }
        }
    }
}
