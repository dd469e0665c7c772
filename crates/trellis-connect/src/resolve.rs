use trellis_geom::Submap;

use crate::face::{Axis, Face};
use crate::set::{ConnectionCtx, ConnectionSet};

/// Outcome of connection resolution for one rendered face.
///
/// The consumer rotates the base quad by `rotation` quarter-turns, then maps
/// it onto the connected atlas cell at `submap` when `connected` is true
/// (`None` meaning the default top-left quadrant), or onto the plain cell
/// with no submap otherwise.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resolved {
    pub submap: Option<Submap>,
    pub rotation: u8,
    pub connected: bool,
}

/// True when the neighbor in `dir` already runs a segment of its own along
/// the axis obtained by rotating `dir` about `axis`. Such a connection is
/// claimed from the far side and must not also be claimed by this cube, or
/// the shared segment would be drawn twice.
#[inline]
fn neighbor_claims(ctx: &ConnectionCtx, dir: Face, axis: Axis) -> bool {
    let rot = dir.rotated_around(axis);
    ctx.neighbor(dir).either(rot, rot.opposite())
}

/// Axis-priority pruning of the cube's own connections: exactly one axis
/// group survives. Vertical beats east/west beats north/south, and a
/// horizontal connection whose neighbor already continues elsewhere is
/// dropped entirely.
pub fn pruned(ctx: &ConnectionCtx) -> ConnectionSet {
    use Face::*;
    let own = ctx.own;
    if own.either(PosY, NegY) {
        // A vertical run wins; sideways connections do not alter it.
        own.filter(|f| !f.axis().is_horizontal())
    } else if own.either(PosX, NegX) {
        // East/west beats north/south. An east/west neighbor that is itself
        // part of a vertical run keeps the segment; drop our claim on it.
        own.filter(|f| f != PosZ && f != NegZ)
            .filter(|f| !neighbor_claims(ctx, f, Axis::Z))
    } else {
        // No dominant axis: keep only connections nothing else has claimed,
        // checking both the Y rotation and the rotated direction's own axis.
        own.filter(|f| {
            !neighbor_claims(ctx, f, Axis::Y)
                && !neighbor_claims(ctx, f, f.rotated_around(Axis::Y).axis())
        })
    }
}

/// Quadrant for an opposite pair `(a, b)`: both connected selects the
/// mid-segment art, only `a` the one-ended piece, otherwise the far end.
#[inline]
fn pair_submap(a: Face, b: Face, set: ConnectionSet) -> Submap {
    if set.both(a, b) {
        Submap::BottomLeft
    } else if set.contains(a) {
        Submap::BottomRight
    } else {
        Submap::TopRight
    }
}

/// Resolves the texture variant for `face` of a cube with connectivity `ctx`.
///
/// Pure and total: every face/context combination yields a defined result,
/// with `rotation` always in `[0,4)`.
pub fn resolve(face: Face, ctx: &ConnectionCtx) -> Resolved {
    use Face::*;
    let real = pruned(ctx);

    let mut rotation: u8 = 0;
    let mut submap = None;
    if face.axis().is_horizontal() && real.either(PosY, NegY) {
        submap = Some(pair_submap(PosY, NegY, real));
    } else if real.either(PosX, NegX) {
        rotation = 1;
        submap = Some(pair_submap(PosX, NegX, real));
    } else if real.either(NegZ, PosZ) {
        submap = Some(pair_submap(NegZ, PosZ, real));
        if face == NegY {
            rotation += 2;
        }
    }

    let mut connected = !real.is_empty();

    // Side faces carry the horizontal artwork at four different orientations;
    // bring them into agreement, with south as the zero reference.
    if connected && !real.either(PosY, NegY) {
        rotation += match face {
            PosX => 1,
            NegZ => 2,
            NegX => 3,
            _ => 0,
        };
    }

    // A connection directly behind this face is an end-cap: the run
    // terminates here and the face renders capped, not continued.
    if real.contains(face.opposite()) {
        connected = false;
    }
    // A cube with no surviving connections still shows a short free-standing
    // segment on its sides; top and bottom stay plain.
    if real.is_empty() && face.axis().is_horizontal() {
        connected = true;
    }

    Resolved {
        submap,
        rotation: rotation % 4,
        connected,
    }
}
