//! Small vector types and planar helpers shared by the terrain and lighting crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

macro_rules! impl_vec_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl AddAssign for $ty {
            #[inline]
            fn add_assign(&mut self, rhs: $ty) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl SubAssign for $ty {
            #[inline]
            fn sub_assign(&mut self, rhs: $ty) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl Mul<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($f: self.$f * rhs),+ }
            }
        }

        impl Div<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($f: self.$f / rhs),+ }
            }
        }

        impl $ty {
            #[inline]
            pub fn dot(self, rhs: $ty) -> f32 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            #[inline]
            pub fn distance(self, rhs: $ty) -> f32 {
                (self - rhs).length()
            }

            /// Componentwise floor.
            #[inline]
            pub fn floor(self) -> $ty {
                $ty { $($f: self.$f.floor()),+ }
            }

            /// Componentwise fractional part (`v - floor(v)`), always in `[0, 1)`.
            #[inline]
            pub fn fract(self) -> $ty {
                self - self.floor()
            }

            /// Linear blend towards `rhs` by `t` (0 keeps `self`, 1 yields `rhs`).
            #[inline]
            pub fn mix(self, rhs: $ty, t: f32) -> $ty {
                self + (rhs - self) * t
            }
        }
    };
}

impl_vec_ops!(Vec2 { x, y });
impl_vec_ops!(Vec3 { x, y, z });

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Unit vector for polar angle `phi` (from +Z) and azimuth `theta` (from +X).
    #[inline]
    pub fn from_spherical(theta: f32, phi: f32) -> Vec3 {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
    }

    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Below this magnitude a 2D triangle determinant is treated as degenerate.
pub const DEGENERATE_EPSILON: f32 = 1e-8;

/// Barycentric weights of a point relative to triangle `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    /// All weight on the first vertex.
    pub const FIRST: Barycentric = Barycentric {
        alpha: 1.0,
        beta: 0.0,
        gamma: 0.0,
    };

    /// Planar weights via the signed-area ratio. Returns `None` when the triangle is degenerate.
    pub fn compute(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<Barycentric> {
        let det = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
        if det.abs() < DEGENERATE_EPSILON {
            return None;
        }
        let alpha = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / det;
        let beta = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / det;
        Some(Barycentric {
            alpha,
            beta,
            gamma: 1.0 - alpha - beta,
        })
    }

    #[inline]
    pub fn interpolate(&self, a: f32, b: f32, c: f32) -> f32 {
        a * self.alpha + b * self.beta + c * self.gamma
    }

    #[inline]
    pub fn sum(&self) -> f32 {
        self.alpha + self.beta + self.gamma
    }
}

#[inline]
fn edge_sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Inclusive point-in-triangle test; points on an edge or vertex count as inside.
/// Works for either winding.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
