use crate::math::Matrix4;
use std::{
    cmp::PartialEq,
    convert::From,
    f32,
    ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign},
};

#[derive(Copy, Clone, Default, Debug)]
pub struct Vector2(pub [f32; 2]);

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2([x, y])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
}

impl PartialEq for Vector2 {
    #[inline]
    fn eq(&self, rhs: &Vector2) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= f32::EPSILON && (self.0[1] - rhs.0[1]).abs() <= f32::EPSILON
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f32) -> Vector2 {
        Vector2([self.0[0] * rhs, self.0[1] * rhs])
    }
}

/// A spatial direction (or a plain 3D position when no homogeneous transform is involved).
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector3(pub [f32; 3]);

unsafe impl bytemuck::Zeroable for Vector3 {}

unsafe impl bytemuck::Pod for Vector3 {}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3([x, y, z])
    }

    #[inline]
    pub const fn splat(f: f32) -> Vector3 {
        Vector3([f, f, f])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub const fn up() -> Vector3 {
        Vector3([0.0, 1.0, 0.0])
    }

    #[inline]
    pub const fn right() -> Vector3 {
        Vector3([1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn forward() -> Vector3 {
        Vector3([0.0, 0.0, 1.0])
    }

    /// Lift into homogeneous space. Use `w = 1` for points and `w = 0` for directions.
    #[inline]
    pub fn widened(&self, w: f32) -> Vector4 {
        Vector4([self.0[0], self.0[1], self.0[2], w])
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.squared_normal().sqrt()
    }

    #[inline]
    pub fn squared_normal(&self) -> f32 {
        self.dot(*self)
    }

    /// Unit-length copy. A zero vector yields NaN components.
    #[inline]
    pub fn normalized(&self) -> Vector3 {
        self / self.length()
    }

    #[inline]
    pub fn cross(&self, rhs: Vector3) -> Vector3 {
        Vector3([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector3) -> f32 {
        (self.0[0] * rhs.0[0]) + (self.0[1] * rhs.0[1]) + (self.0[2] * rhs.0[2])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Vector3 {
    #[inline]
    fn eq(&self, rhs: &Vector3) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= f32::EPSILON
            && (self.0[1] - rhs.0[1]).abs() <= f32::EPSILON
            && (self.0[2] - rhs.0[2]).abs() <= f32::EPSILON
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
        self.0[2] += rhs.0[2];
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.0[0] -= rhs.0[0];
        self.0[1] -= rhs.0[1];
        self.0[2] -= rhs.0[2];
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl Div<f32> for &Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f32) -> Vector3 {
        Vector3([self.0[0] / rhs, self.0[1] / rhs, self.0[2] / rhs])
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from(value: (f32, f32, f32)) -> Vector3 {
        Vector3([value.0, value.1, value.2])
    }
}

/// A homogeneous point or direction.
///
/// Arithmetic runs over all four components, so `point - point` yields a direction (`w = 0`)
/// and `point + direction` stays a point (`w = 1`).
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Vector4(pub [f32; 4]);

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
        Vector4([x, y, z, w])
    }

    /// A position (`w = 1`).
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Vector4 {
        Vector4([x, y, z, 1.0])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0[0] = x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0[1] = y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.0[3]
    }

    /// The spatial components.
    #[inline]
    pub fn narrowed(&self) -> Vector3 {
        Vector3([self.0[0], self.0[1], self.0[2]])
    }

    /// Homogeneous divide. The result always has `w = 1`; a zero `w` yields non-finite
    /// components.
    #[inline]
    pub fn perspective_divided(&self) -> Vector4 {
        let w = self.0[3];
        Vector4([self.0[0] / w, self.0[1] / w, self.0[2] / w, 1.0])
    }
}

impl PartialEq for Vector4 {
    #[inline]
    fn eq(&self, rhs: &Vector4) -> bool {
        (self.0[0] - rhs.0[0]).abs() <= f32::EPSILON
            && (self.0[1] - rhs.0[1]).abs() <= f32::EPSILON
            && (self.0[2] - rhs.0[2]).abs() <= f32::EPSILON
            && (self.0[3] - rhs.0[3]).abs() <= f32::EPSILON
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl Add for Vector4 {
    type Output = Vector4;
    #[inline]
    fn add(self, rhs: Vector4) -> Vector4 {
        Vector4([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl Sub for Vector4 {
    type Output = Vector4;
    #[inline]
    fn sub(self, rhs: Vector4) -> Vector4 {
        Vector4([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl Mul<f32> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: f32) -> Vector4 {
        Vector4([
            self.0[0] * rhs,
            self.0[1] * rhs,
            self.0[2] * rhs,
            self.0[3] * rhs,
        ])
    }
}

/// Row-vector transform: `v' = v * M`.
impl Mul<&Matrix4> for Vector4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: &Matrix4) -> Vector4 {
        let mut ret = Vector4::default();
        for column in 0..4 {
            ret.0[column] = self.0[0] * rhs[0][column]
                + self.0[1] * rhs[1][column]
                + self.0[2] * rhs[2][column]
                + self.0[3] * rhs[3][column];
        }
        ret
    }
}
