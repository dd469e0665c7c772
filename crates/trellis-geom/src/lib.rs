//! Geometry and atlas primitives for the connected-texture crates (renderer-agnostic).
#![forbid(unsafe_code)]

use core::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
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
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
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
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { self }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Texture coordinate in atlas space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A rectangular atlas region. By convention cell 0 of a texture pair is the
/// plain variant and cell 1 the connected variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub min: Uv,
    pub max: Uv,
}

impl Sprite {
    #[inline]
    pub const fn new(min: Uv, max: Uv) -> Self {
        Self { min, max }
    }

    /// The full unit square; useful for single-texture atlases and tests.
    pub const UNIT: Sprite = Sprite {
        min: Uv { u: 0.0, v: 0.0 },
        max: Uv { u: 1.0, v: 1.0 },
    };

    /// Maps a normalized `[0,1]^2` coordinate into this region.
    #[inline]
    pub fn interpolate(&self, u: f32, v: f32) -> Uv {
        Uv {
            u: self.min.u + (self.max.u - self.min.u) * u,
            v: self.min.v + (self.max.v - self.min.v) * v,
        }
    }
}

/// Normalized sub-rectangle of a sprite (offsets and extents in `[0,1]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One quarter of the 2x2 logical grid on an atlas cell. Connected-variant
/// artwork packs its four segment states into these quadrants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Submap {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Submap {
    pub const ALL: [Submap; 4] = [
        Submap::TopLeft,
        Submap::TopRight,
        Submap::BottomLeft,
        Submap::BottomRight,
    ];

    #[inline]
    pub const fn rect(self) -> SubRect {
        match self {
            Submap::TopLeft => SubRect {
                x: 0.0,
                y: 0.0,
                w: 0.5,
                h: 0.5,
            },
            Submap::TopRight => SubRect {
                x: 0.5,
                y: 0.0,
                w: 0.5,
                h: 0.5,
            },
            Submap::BottomLeft => SubRect {
                x: 0.0,
                y: 0.5,
                w: 0.5,
                h: 0.5,
            },
            Submap::BottomRight => SubRect {
                x: 0.5,
                y: 0.5,
                w: 0.5,
                h: 0.5,
            },
        }
    }
}

/// One quad corner: position plus its current UV assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vert {
    pub pos: Vec3,
    pub uv: Uv,
}

/// A planar face as four corners in winding order. All transforms are pure
/// and return a new quad; there is no identity beyond value equality.
///
/// The canonical corner order is top-left, bottom-left, bottom-right,
/// top-right in texture space, i.e. UVs (0,0), (0,1), (1,1), (1,0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub verts: [Vert; 4],
}

/// Canonical UV assignment for corner `i` of an untransformed quad.
const CORNER_UVS: [Uv; 4] = [
    Uv { u: 0.0, v: 0.0 },
    Uv { u: 0.0, v: 1.0 },
    Uv { u: 1.0, v: 1.0 },
    Uv { u: 1.0, v: 0.0 },
];

impl Quad {
    #[inline]
    pub const fn new(verts: [Vert; 4]) -> Self {
        Self { verts }
    }

    /// Builds a quad from four corner positions with the canonical UVs.
    pub fn from_corners(corners: [Vec3; 4]) -> Self {
        let mut verts = [Vert::default(); 4];
        for (i, pos) in corners.into_iter().enumerate() {
            verts[i] = Vert {
                pos,
                uv: CORNER_UVS[i],
            };
        }
        Self { verts }
    }

    /// Geometric normal from the corner winding.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        let e1 = self.verts[1].pos - self.verts[0].pos;
        let e2 = self.verts[3].pos - self.verts[0].pos;
        e1.cross(e2)
    }

    /// Min/max of the current corner UVs.
    pub fn uv_bounds(&self) -> (Uv, Uv) {
        let mut min = self.verts[0].uv;
        let mut max = self.verts[0].uv;
        for v in &self.verts[1..] {
            min.u = min.u.min(v.uv.u);
            min.v = min.v.min(v.uv.v);
            max.u = max.u.max(v.uv.u);
            max.v = max.v.max(v.uv.v);
        }
        (min, max)
    }

    /// Rotates the texture by `steps * 90` degrees: corner positions stay
    /// put, UV assignments shift around the winding. `steps` is taken mod 4.
    #[must_use]
    pub fn rotate(&self, steps: u8) -> Quad {
        let steps = (steps % 4) as usize;
        let mut out = *self;
        for i in 0..4 {
            out.verts[i].uv = self.verts[(i + steps) % 4].uv;
        }
        out
    }

    /// Remaps the corner UVs onto `submap` of `sprite` (the whole cell when
    /// `None`). Each UV is first normalized within the quad's own UV bounds,
    /// so partial quads keep their relative texture window.
    #[must_use]
    pub fn map_to_subrect(&self, sprite: Sprite, submap: Option<Submap>) -> Quad {
        let rect = match submap {
            Some(s) => s.rect(),
            None => SubRect {
                x: 0.0,
                y: 0.0,
                w: 1.0,
                h: 1.0,
            },
        };
        let (min, max) = self.uv_bounds();
        let du = max.u - min.u;
        let dv = max.v - min.v;
        let mut out = *self;
        for vert in &mut out.verts {
            // Degenerate extents normalize to 0 rather than dividing by zero.
            let nu = if du > 0.0 { (vert.uv.u - min.u) / du } else { 0.0 };
            let nv = if dv > 0.0 { (vert.uv.v - min.v) / dv } else { 0.0 };
            vert.uv = sprite.interpolate(rect.x + nu * rect.w, rect.y + nv * rect.h);
        }
        out
    }
}
