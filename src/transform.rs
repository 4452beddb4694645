//! Closed-form 4x4 transform builders.
//!
//! Matrices follow the OpenGL column-vector convention: points multiply on
//! the right (`m * p`) and clip space maps eye-space z to [-1, 1] with the
//! camera looking down -z.
//!
//! The plain builders enforce their preconditions with [`check!`], which is
//! fatal when checks are enabled and free otherwise. The `try_` builders
//! always validate and report a [`TransformError`] instead.

use std::f32::consts::PI;

use crate::alg::{Mat, Quat, Vec3};
use crate::check;
use crate::error::{Extent, TransformError, TransformResult};

// OpenGL Programming Guide, 7th Edition, page 807.
pub fn frustum(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> Mat {
    check!(l != r);
    check!(b != t);
    check!(n != f);

    frustum_matrix(l, r, b, t, n, f)
}

// OpenGL Programming Guide, 7th Edition, page 808.
pub fn ortho(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> Mat {
    check!(l != r);
    check!(b != t);
    check!(n != f);

    ortho_matrix(l, r, b, t, n, f)
}

/// Symmetric perspective projection.
/// `v_fov` is the full vertical field of view in degrees.
pub fn perspective(v_fov: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat {
    let (fw, fh) = half_extents(v_fov, aspect, z_near);
    frustum(-fw, fw, -fh, fh, z_near, z_far)
}

// OpenGL Programming Guide, 7th Edition, page 806.
pub fn translation(delta: Vec3) -> Mat {
    let mut result = Mat::identity();

    result.x3 = delta.x;
    result.y3 = delta.y;
    result.z3 = delta.z;

    result
}

/// Rotation of `angle` radians about `axis`, which need not be unit length.
// http://en.wikipedia.org/wiki/Rotation_matrix
pub fn rotation_axis_angle(axis: Vec3, angle: f32) -> Mat {
    check!(axis.mag_squared() != 0.);

    axis_angle_matrix(axis, angle)
}

/// Rotation matrix for a quaternion the caller has already normalized.
// http://www.j3d.org/matrix_faq/matrfaq_latest.html
pub fn rotation_quat(q: Quat) -> Mat {
    let (w, x, y, z) = (q.w, q.x, q.y, q.z);

    Mat::new(
        1. - (2.*y*y + 2.*z*z), 2.*x*y - 2.*z*w,        2.*x*z + 2.*y*w,        0.,
        2.*x*y + 2.*z*w,        1. - (2.*x*x + 2.*z*z), 2.*y*z - 2.*x*w,        0.,
        2.*x*z - 2.*y*w,        2.*y*z + 2.*x*w,        1. - (2.*x*x + 2.*y*y), 0.,
        0.,                     0.,                     0.,                     1.,
    )
}

pub fn try_frustum(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> TransformResult<Mat> {
    validate_volume(l, r, b, t, n, f)?;
    Ok(frustum_matrix(l, r, b, t, n, f))
}

pub fn try_ortho(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> TransformResult<Mat> {
    validate_volume(l, r, b, t, n, f)?;
    Ok(ortho_matrix(l, r, b, t, n, f))
}

pub fn try_perspective(
    v_fov: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
) -> TransformResult<Mat> {
    let (fw, fh) = half_extents(v_fov, aspect, z_near);
    try_frustum(-fw, fw, -fh, fh, z_near, z_far)
}

pub fn try_rotation_axis_angle(axis: Vec3, angle: f32) -> TransformResult<Mat> {
    if axis.mag_squared() == 0. {
        log::debug!("Rejected rotation about {}", axis);
        return Err(TransformError::ZeroAxis);
    }

    Ok(axis_angle_matrix(axis, angle))
}

fn half_extents(v_fov: f32, aspect: f32, z_near: f32) -> (f32, f32) {
    let fh = (v_fov / 360. * PI).tan() * z_near;
    let fw = fh * aspect;

    (fw, fh)
}

fn validate_volume(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> TransformResult<()> {
    let pairs = [
        (Extent::Horizontal, l, r),
        (Extent::Vertical, b, t),
        (Extent::Depth, n, f),
    ];

    for &(extent, low, high) in pairs.iter() {
        if low == high {
            log::debug!("Rejected view volume: {} = {}", extent, low);
            return Err(TransformError::DegenerateVolume { extent, value: low });
        }
    }

    Ok(())
}

fn frustum_matrix(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> Mat {
    Mat::new(
        2.*n / (r - l), 0.,             (r + l) / (r - l),  0.,
        0.,             2.*n / (t - b), (t + b) / (t - b),  0.,
        0.,             0.,             -(f + n) / (f - n), -2.*f*n / (f - n),
        0.,             0.,             -1.,                0.,
    )
}

fn ortho_matrix(
    l: f32, r: f32,
    b: f32, t: f32,
    n: f32, f: f32,
) -> Mat {
    Mat::new(
        2. / (r - l), 0.,           0.,            -(r + l) / (r - l),
        0.,           2. / (t - b), 0.,            -(t + b) / (t - b),
        0.,           0.,           -2. / (f - n), -(f + n) / (f - n),
        0.,           0.,           0.,            1.,
    )
}

fn axis_angle_matrix(axis: Vec3, angle: f32) -> Mat {
    // Zero axis normalizes to NaN, which spreads to every rotation entry
    let u = axis.norm();
    let (x, y, z) = (u.x, u.y, u.z);
    let (s, c) = angle.sin_cos();

    Mat::new(
        c + x*x*(1. - c),   x*y*(1. - c) - z*s, x*z*(1. - c) + y*s, 0.,
        y*x*(1. - c) + z*s, c + y*y*(1. - c),   y*z*(1. - c) - x*s, 0.,
        z*x*(1. - c) - y*s, z*y*(1. - c) + x*s, c + z*z*(1. - c),   0.,
        0.,                 0.,                 0.,                 1.,
    )
}
