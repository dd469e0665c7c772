use std::collections::HashMap;
use std::error::Error;

use hashbrown::HashSet;
use trellis_connect::{ConnectionCtx, Face, resolve};
use trellis_geom::{Sprite, Uv, Vec3};
use trellis_mesh::{ConnectedTexture, MaterialId, MeshBuild};
use trellis_model::{ModelDef, ModelStore, ResourceKey};

/// Cells per row of the stand-in atlas strip.
const ATLAS_SLOTS: usize = 16;

/// Stand-in for the external texture atlas: keys get fixed-size cells in a
/// one-row strip, assigned in first-seen order.
#[derive(Default)]
pub struct AtlasStub {
    slots: hashbrown::HashMap<String, usize>,
}

impl AtlasStub {
    pub fn sprite(&mut self, key: &str) -> Sprite {
        let next = self.slots.len() % ATLAS_SLOTS;
        let slot = *self.slots.entry(key.to_string()).or_insert(next);
        let w = 1.0 / ATLAS_SLOTS as f32;
        Sprite::new(
            Uv::new(slot as f32 * w, 0.0),
            Uv::new((slot + 1) as f32 * w, 1.0),
        )
    }

    pub fn texture_for(&mut self, model: &ModelDef) -> ConnectedTexture {
        ConnectedTexture::new(self.sprite(&model.plain), self.sprite(&model.connected))
    }
}

pub type Grid = HashSet<(i32, i32, i32)>;

/// A deterministic arrangement that exercises every resolver branch: a
/// free-standing column, an east-west run bending south, and a lone block.
pub fn sample_grid(size: i32) -> Grid {
    let n = size.max(4);
    let mut grid = Grid::new();
    for y in 0..n - 2 {
        grid.insert((1, y, 1));
    }
    for x in 1..n - 1 {
        grid.insert((x, 0, n - 2));
    }
    for z in n / 2..n - 1 {
        grid.insert((n - 2, 0, z));
    }
    grid.insert((n - 2, n - 2, 1));
    grid
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MeshStats {
    pub quads: usize,
    pub connected: usize,
    pub plain: usize,
}

/// Meshes every visible face of the grid: probe connectivity, resolve the
/// texture variant, and bake into per-material buffers.
pub fn mesh_grid(grid: &Grid, tex: &ConnectedTexture) -> (HashMap<MaterialId, MeshBuild>, MeshStats) {
    let mut builds: HashMap<MaterialId, MeshBuild> = HashMap::new();
    let mut stats = MeshStats::default();
    for &(x, y, z) in grid.iter() {
        let ctx = ConnectionCtx::probe(|dx, dy, dz| grid.contains(&(x + dx, y + dy, z + dz)));
        for face in Face::ALL {
            let (dx, dy, dz) = face.delta();
            if grid.contains(&(x + dx, y + dy, z + dz)) {
                continue;
            }
            let r = resolve(face, &ctx);
            stats.quads += 1;
            if r.connected {
                stats.connected += 1;
            } else {
                stats.plain += 1;
            }
            let origin = Vec3::new(x as f32, y as f32, z as f32);
            tex.emit_face(&mut builds, MaterialId(0), face, origin, &ctx);
        }
    }
    (builds, stats)
}

/// One full load-and-mesh pass over the sample grid.
pub fn run_pass(store: &ModelStore, key: &ResourceKey, size: i32) -> Result<(), Box<dyn Error>> {
    let model = store.get_or_load(key)?;
    let mut atlas = AtlasStub::default();
    let tex = atlas.texture_for(&model);
    let grid = sample_grid(size);
    let (builds, stats) = mesh_grid(&grid, &tex);
    let verts: usize = builds.values().map(|b| b.pos.len() / 3).sum();
    log::info!(
        "meshed {} blocks with model {}: {} quads ({} connected, {} plain), {} vertices",
        grid.len(),
        model.key,
        stats.quads,
        stats.connected,
        stats.plain,
        verts,
    );
    Ok(())
}
