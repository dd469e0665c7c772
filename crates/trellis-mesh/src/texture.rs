use trellis_connect::{ConnectionCtx, Face, resolve};
use trellis_geom::{Quad, Sprite, Submap, Vec3};

use crate::build::{BuildSink, MaterialId};

/// Builds the unit cube face at `origin` with the canonical UV corner order
/// (texture top-left first, as seen from outside the cube). The resolver's
/// rotation tables assume this winding.
pub fn face_quad(face: Face, origin: Vec3) -> Quad {
    let (x0, y0, z0) = (origin.x, origin.y, origin.z);
    let (x1, y1, z1) = (x0 + 1.0, y0 + 1.0, z0 + 1.0);
    let corners = match face {
        Face::PosZ => [
            Vec3::new(x0, y1, z1),
            Vec3::new(x0, y0, z1),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z1),
        ],
        Face::NegZ => [
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y1, z0),
        ],
        Face::PosX => [
            Vec3::new(x1, y1, z1),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y1, z0),
        ],
        Face::NegX => [
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z1),
        ],
        Face::PosY => [
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y1, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x1, y1, z0),
        ],
        Face::NegY => [
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
        ],
    };
    Quad::from_corners(corners)
}

/// A plain/connected sprite pair plus the transform contract that turns a
/// base quad into its final UV mapping.
#[derive(Clone, Copy, Debug)]
pub struct ConnectedTexture {
    sprites: [Sprite; 2],
}

impl ConnectedTexture {
    #[inline]
    pub const fn new(plain: Sprite, connected: Sprite) -> Self {
        Self {
            sprites: [plain, connected],
        }
    }

    #[inline]
    pub const fn plain(&self) -> Sprite {
        self.sprites[0]
    }

    #[inline]
    pub const fn connected(&self) -> Sprite {
        self.sprites[1]
    }

    /// Applies the resolver's consumer contract: rotate the quad, then remap
    /// onto the connected cell at the chosen quadrant, or the plain cell.
    ///
    /// Without a context (item and preview rendering) vertical faces show
    /// the plain cell and side faces the connected cell's top-left quadrant.
    pub fn transform_quad(&self, quad: &Quad, face: Face, ctx: Option<&ConnectionCtx>) -> Quad {
        let Some(ctx) = ctx else {
            return if face.axis().is_vertical() {
                quad.map_to_subrect(self.plain(), None)
            } else {
                quad.map_to_subrect(self.connected(), Some(Submap::TopLeft))
            };
        };
        let r = resolve(face, ctx);
        let q = quad.rotate(r.rotation);
        if r.connected {
            q.map_to_subrect(self.connected(), Some(r.submap.unwrap_or(Submap::TopLeft)))
        } else {
            q.map_to_subrect(self.plain(), None)
        }
    }

    /// Resolves and bakes one visible face of a cube into the sink.
    pub fn emit_face(
        &self,
        builds: &mut impl BuildSink,
        mid: MaterialId,
        face: Face,
        origin: Vec3,
        ctx: &ConnectionCtx,
    ) {
        let quad = self.transform_quad(&face_quad(face, origin), face, Some(ctx));
        builds.build_mut(mid).bake(&quad);
    }
}
