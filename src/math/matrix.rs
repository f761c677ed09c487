use crate::math::{Vector3, Vector4};

use std::ops::{Index, Mul};

/// Row-major 4x4 transform. Vectors are rows, so transforms apply as `v * M` and a
/// composition `&a * &b` applies `a` first.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
pub struct Matrix4(pub [Vector4; 4]);

impl Matrix4 {
    #[inline]
    pub const fn identity() -> Matrix4 {
        Matrix4([
            Vector4([1.0, 0.0, 0.0, 0.0]),
            Vector4([0.0, 1.0, 0.0, 0.0]),
            Vector4([0.0, 0.0, 1.0, 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    #[inline]
    pub fn translate(v: Vector3) -> Matrix4 {
        Matrix4([
            Vector4([1.0, 0.0, 0.0, 0.0]),
            Vector4([0.0, 1.0, 0.0, 0.0]),
            Vector4([0.0, 0.0, 1.0, 0.0]),
            Vector4([v.0[0], v.0[1], v.0[2], 1.0]),
        ])
    }

    /// Rotation about the x axis.
    #[inline]
    pub fn rotate_right(angle: f32) -> Matrix4 {
        let sin_theta = angle.sin();
        let cos_theta = angle.cos();
        Matrix4([
            Vector4([1.0, 0.0, 0.0, 0.0]),
            Vector4([0.0, cos_theta, sin_theta, 0.0]),
            Vector4([0.0, -sin_theta, cos_theta, 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    /// Rotation about the y axis.
    #[inline]
    pub fn rotate_up(angle: f32) -> Matrix4 {
        let sin_theta = angle.sin();
        let cos_theta = angle.cos();
        Matrix4([
            Vector4([cos_theta, 0.0, sin_theta, 0.0]),
            Vector4([0.0, 1.0, 0.0, 0.0]),
            Vector4([-sin_theta, 0.0, cos_theta, 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    /// Rotation about the z axis.
    #[inline]
    pub fn rotate_forward(angle: f32) -> Matrix4 {
        let sin_theta = angle.sin();
        let cos_theta = angle.cos();
        Matrix4([
            Vector4([cos_theta, sin_theta, 0.0, 0.0]),
            Vector4([-sin_theta, cos_theta, 0.0, 0.0]),
            Vector4([0.0, 0.0, 1.0, 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    /// Perspective projection taking view space (+z into the screen) to clip space.
    ///
    /// The view-space depth ends up in `w`, so a homogeneous divide maps `near` to z = 0 and
    /// `far` to z = 1. `aspect_ratio` is height over width and scales x.
    ///
    /// Requires `far > near > 0`.
    #[inline]
    pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4 {
        let fov = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
        let depth = far - near;
        Matrix4([
            Vector4([aspect_ratio * fov, 0.0, 0.0, 0.0]),
            Vector4([0.0, fov, 0.0, 0.0]),
            Vector4([0.0, 0.0, far / depth, 1.0]),
            Vector4([0.0, 0.0, (-far * near) / depth, 0.0]),
        ])
    }

    /// Camera-to-world transform for an eye at `position` looking towards `at`.
    ///
    /// `up` is orthogonalised against the forward axis. It must not be parallel to
    /// `at - position`.
    #[inline]
    pub fn point_at(position: Vector3, at: Vector3, up: Vector3) -> Matrix4 {
        let forward = (at - position).normalized();
        let up = (up - forward * up.dot(forward)).normalized();
        let right = up.cross(forward);
        Matrix4([
            right.widened(0.0),
            up.widened(0.0),
            forward.widened(0.0),
            position.widened(1.0),
        ])
    }

    /// Inverse of a rigid (rotation + translation) transform.
    ///
    /// Any other matrix (scales, projections) silently produces garbage.
    #[inline]
    #[rustfmt::skip]
    pub fn quick_inverse(&self) -> Matrix4 {
        let m = &self.0;
        let mut ret = Matrix4([
            Vector4([m[0].0[0], m[1].0[0], m[2].0[0], 0.0]),
            Vector4([m[0].0[1], m[1].0[1], m[2].0[1], 0.0]),
            Vector4([m[0].0[2], m[1].0[2], m[2].0[2], 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ]);
        for column in 0..3 {
            ret.0[3].0[column] = -(m[3].0[0] * ret.0[0].0[column]
                + m[3].0[1] * ret.0[1].0[column]
                + m[3].0[2] * ret.0[2].0[column]);
        }
        ret
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Vector4 {
        &self.0[index]
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        let mut ret = Matrix4::default();
        for (row, out) in ret.0.iter_mut().enumerate() {
            *out = self.0[row] * rhs;
        }
        ret
    }
}
