//! Closed-form 4x4 transform matrices for OpenGL-style rendering, plus the
//! name hashing and fatal precondition checks that go with them.

pub mod alg;
pub mod config;
pub mod debug;
pub mod error;
pub mod hash;
pub mod ops;
pub mod transform;

pub use crate::alg::{Mat, Quat, Vec3, Vec4};
pub use crate::error::{Extent, OpError, TransformError};
pub use crate::hash::{const_hash, hash, hash_cstr};
pub use crate::transform::{
    frustum, ortho, perspective, translation,
    rotation_axis_angle, rotation_quat,
    try_frustum, try_ortho, try_perspective, try_rotation_axis_angle,
};
