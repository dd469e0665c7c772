use std::collections::HashMap;

use trellis_geom::Quad;

/// Index of a registered material (one plain/connected texture pair).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

/// Renderer-consumable buffers for one material: interleavable positions,
/// normals, UVs and a triangle index list. The output format is opaque to
/// the resolution engine; nothing here is read back.
#[derive(Default, Clone)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u16>,
}

impl MeshBuild {
    /// Appends a finished quad as two triangles. The normal comes from the
    /// quad's own winding.
    pub fn bake(&mut self, quad: &Quad) {
        let base = (self.pos.len() / 3) as u16;
        let n = quad.normal().normalized();
        for v in &quad.verts {
            self.pos.extend_from_slice(&[v.pos.x, v.pos.y, v.pos.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[v.uv.u, v.uv.v]);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
}

/// Sink for writing into per-material mesh buffers.
pub trait BuildSink {
    fn build_mut(&mut self, mid: MaterialId) -> &mut MeshBuild;
}

impl BuildSink for HashMap<MaterialId, MeshBuild> {
    #[inline]
    fn build_mut(&mut self, mid: MaterialId) -> &mut MeshBuild {
        self.entry(mid).or_default()
    }
}
