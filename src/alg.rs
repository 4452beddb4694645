#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    #[inline]
    pub fn fwd() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }

    /// Scale to unit length.
    /// A zero vector has no direction; every component comes back NaN.
    pub fn norm(self) -> Vec3 {
        self / self.mag()
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, scalar: f32) -> Vec3 {
        Vec3::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
        )
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {} )",
            self.x, self.y, self.z,
        )
    }
}

/// Homogeneous coordinate, used to push points and directions through a `Mat`
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    #[inline]
    pub fn point(vec: Vec3) -> Vec4 {
        Vec4::new(vec.x, vec.y, vec.z, 1.)
    }

    #[inline]
    pub fn direction(vec: Vec3) -> Vec4 {
        Vec4::new(vec.x, vec.y, vec.z, 0.)
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    // Perspective divide
    pub fn project(self) -> Vec3 {
        self.xyz() / self.w
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Mat {

    /*
     * GLSL expects matrices in column-major order
     * Calculations below are formatted in row-major order
     */

    pub x0: f32, pub y0: f32, pub z0: f32, pub w0: f32,
    pub x1: f32, pub y1: f32, pub z1: f32, pub w1: f32,
    pub x2: f32, pub y2: f32, pub z2: f32, pub w2: f32,
    pub x3: f32, pub y3: f32, pub z3: f32, pub w3: f32,
}

impl Mat {
    pub fn new(
        x0: f32, x1: f32, x2: f32, x3: f32,
        y0: f32, y1: f32, y2: f32, y3: f32,
        z0: f32, z1: f32, z2: f32, z3: f32,
        w0: f32, w1: f32, w2: f32, w3: f32,
    ) -> Mat {
        Mat {
            x0, x1, x2, x3,
            y0, y1, y2, y3,
            z0, z1, z2, z3,
            w0, w1, w2, w3,
        }
    }

    #[inline]
    pub fn identity() -> Mat {
        Mat::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn transpose(self) -> Mat {
        Mat::new(
            self.x0, self.y0, self.z0, self.w0,
            self.x1, self.y1, self.z1, self.w1,
            self.x2, self.y2, self.z2, self.w2,
            self.x3, self.y3, self.z3, self.w3,
        )
    }

    /// Entries in storage (column-major) order, ready for upload
    pub fn to_array(self) -> [f32; 16] {
        [
            self.x0, self.y0, self.z0, self.w0,
            self.x1, self.y1, self.z1, self.w1,
            self.x2, self.y2, self.z2, self.w2,
            self.x3, self.y3, self.z3, self.w3,
        ]
    }

    /// Entries in reading (row-major) order
    pub fn to_rows(self) -> [[f32; 4]; 4] {
        [
            [self.x0, self.x1, self.x2, self.x3],
            [self.y0, self.y1, self.y2, self.y3],
            [self.z0, self.z1, self.z2, self.z3],
            [self.w0, self.w1, self.w2, self.w3],
        ]
    }

    /// Largest absolute entry-wise difference stays within `tolerance`
    pub fn approx_eq(self, other: Mat, tolerance: f32) -> bool {
        self.to_array().iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|entry| entry.is_finite())
    }
}

impl std::ops::Mul for Mat {
    type Output = Mat;

    // Naive matrix multiply
    fn mul(self, m: Mat) -> Mat {
        let x0 = self.x0 * m.x0 + self.x1 * m.y0 + self.x2 * m.z0 + self.x3 * m.w0;
        let x1 = self.x0 * m.x1 + self.x1 * m.y1 + self.x2 * m.z1 + self.x3 * m.w1;
        let x2 = self.x0 * m.x2 + self.x1 * m.y2 + self.x2 * m.z2 + self.x3 * m.w2;
        let x3 = self.x0 * m.x3 + self.x1 * m.y3 + self.x2 * m.z3 + self.x3 * m.w3;

        let y0 = self.y0 * m.x0 + self.y1 * m.y0 + self.y2 * m.z0 + self.y3 * m.w0;
        let y1 = self.y0 * m.x1 + self.y1 * m.y1 + self.y2 * m.z1 + self.y3 * m.w1;
        let y2 = self.y0 * m.x2 + self.y1 * m.y2 + self.y2 * m.z2 + self.y3 * m.w2;
        let y3 = self.y0 * m.x3 + self.y1 * m.y3 + self.y2 * m.z3 + self.y3 * m.w3;

        let z0 = self.z0 * m.x0 + self.z1 * m.y0 + self.z2 * m.z0 + self.z3 * m.w0;
        let z1 = self.z0 * m.x1 + self.z1 * m.y1 + self.z2 * m.z1 + self.z3 * m.w1;
        let z2 = self.z0 * m.x2 + self.z1 * m.y2 + self.z2 * m.z2 + self.z3 * m.w2;
        let z3 = self.z0 * m.x3 + self.z1 * m.y3 + self.z2 * m.z3 + self.z3 * m.w3;

        let w0 = self.w0 * m.x0 + self.w1 * m.y0 + self.w2 * m.z0 + self.w3 * m.w0;
        let w1 = self.w0 * m.x1 + self.w1 * m.y1 + self.w2 * m.z1 + self.w3 * m.w1;
        let w2 = self.w0 * m.x2 + self.w1 * m.y2 + self.w2 * m.z2 + self.w3 * m.w2;
        let w3 = self.w0 * m.x3 + self.w1 * m.y3 + self.w2 * m.z3 + self.w3 * m.w3;

        Mat::new(
            x0, x1, x2, x3,
            y0, y1, y2, y3,
            z0, z1, z2, z3,
            w0, w1, w2, w3,
        )
    }
}

impl std::ops::Mul<Vec4> for Mat {
    type Output = Vec4;

    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4::new(
            self.x0 * vec.x + self.x1 * vec.y + self.x2 * vec.z + self.x3 * vec.w,
            self.y0 * vec.x + self.y1 * vec.y + self.y2 * vec.z + self.y3 * vec.w,
            self.z0 * vec.x + self.z1 * vec.y + self.z2 * vec.z + self.z3 * vec.w,
            self.w0 * vec.x + self.w1 * vec.y + self.w2 * vec.z + self.w3 * vec.w,
        )
    }
}

impl std::fmt::Display for Mat {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "[ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]\n\
            [ {}, {}, {}, {} ]\n[ {}, {}, {}, {} ]",
            self.x0, self.x1, self.x2, self.x3,
            self.y0, self.y1, self.y2, self.y3,
            self.z0, self.z1, self.z2, self.z3,
            self.w0, self.w1, self.w2, self.w3,
        )
    }
}

/// Rotation quaternion, scalar part first
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Quat {
        Quat { w, x, y, z }
    }

    #[inline]
    pub fn identity() -> Quat {
        Quat::new(1., 0., 0., 0.)
    }

    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Quat {
        let axis = axis.norm();
        let half = 0.5 * rad;
        let (sin, cos) = half.sin_cos();

        Quat::new(cos, axis.x * sin, axis.y * sin, axis.z * sin)
    }

    pub fn norm(self) -> Quat {
        let inverse_len = 1. / self.mag();

        Quat {
            w: self.w * inverse_len,
            x: self.x * inverse_len,
            y: self.y * inverse_len,
            z: self.z * inverse_len,
        }
    }

    pub fn mag_squared(self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }
}

impl std::fmt::Display for Quat {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}; {}, {}, {} )",
            self.w, self.x, self.y, self.z,
        )
    }
}
