//! Draws pyramid tiles of an equirectangular panorama under an
//! off-axis projection.
//!
//! The renderer owns a single unit quad and one shader program; every
//! tile is the same quad stretched by the projection. Tiles are placed
//! by un-projecting clip-space quad corners (a tile has no independent
//! 3-D position; the equirectangular mapping happens in the fragment
//! stage from inverted clip coordinates), so the only per-tile state is
//! the depth uniform and the texture binding.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graphics::{
    GraphicsContext, PixelRect,
    Buffer, BufferDesc, BufferKind,
    Texture,
    ShaderProgram, ProgramDesc, AttributeLocation, UniformLocation,
};
use crate::pano_info;
use super::layer::Layer;
use super::shaders;
use super::tile::Tile;
use super::viewport;

const LOG_SOURCE: &str = "panotile::EquirectRenderer";

/// Unit quad in clip space, two triangles.
const VERTEX_POSITIONS: [f32; 12] = [
    -1.0, -1.0, 0.0, //
    1.0, -1.0, 0.0, //
    1.0, 1.0, 0.0, //
    -1.0, 1.0, 0.0,
];
const TEXTURE_COORDS: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
const VERTEX_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Texture unit the tile sampler is bound to.
const TILE_TEXTURE_UNIT: u32 = 0;

/// Tile pyramid levels distinguishable within one layer's depth band.
/// Tile z and layer z must both stay below this value.
const TILE_LEVELS_PER_LAYER: u32 = 256;

/// Depth uniform for a tile: each layer gets a disjoint band of
/// `TILE_LEVELS_PER_LAYER` depth steps, and within a band a higher
/// pyramid level (more detail) lands nearer. Smaller depth wins under
/// the standard less-than depth test.
pub(crate) fn tile_depth(layer_z: u32, tile_z: u32) -> f32 {
    ((layer_z + 1) * TILE_LEVELS_PER_LAYER - tile_z) as f32
        / (TILE_LEVELS_PER_LAYER * TILE_LEVELS_PER_LAYER) as f32
}

/// Attribute locations resolved once at construction.
struct AttributeSet {
    vertex_position: AttributeLocation,
    texture_coord: AttributeLocation,
}

/// Uniform locations resolved once at construction.
struct UniformSet {
    p_inv_matrix: UniformLocation,
    depth: UniformLocation,
    vcc_matrix: UniformLocation,
    sampler: UniformLocation,
    opacity: UniformLocation,
    width: UniformLocation,
    height: UniformLocation,
    color_offset: UniformLocation,
    color_matrix: UniformLocation,
    texture_x: UniformLocation,
    texture_y: UniformLocation,
    texture_width: UniformLocation,
    texture_height: UniformLocation,
}

/// GPU resources exclusively owned by one renderer instance.
struct Resources {
    vertex_positions: Arc<dyn Buffer>,
    texture_coords: Arc<dyn Buffer>,
    vertex_indices: Arc<dyn Buffer>,
    program: Arc<dyn ShaderProgram>,
    attributes: AttributeSet,
    uniforms: UniformSet,
}

/// Tile renderer for equirectangular panoramas.
///
/// One instance per panorama view. Single-threaded and frame-driven:
/// a render pass (`start_layer` … `render_tile`* … `end_layer`) must
/// fully complete before the next begins on the same instance.
/// `render_tile` outside an open layer is a caller contract violation
/// and is not runtime-checked.
pub struct EquirectRenderer {
    ctx: Arc<dyn GraphicsContext>,
    resources: Option<Resources>,
}

impl EquirectRenderer {
    /// Create the renderer: allocate the unit-quad buffers, compile and
    /// link the equirect program, and resolve all locations once.
    ///
    /// # Errors
    ///
    /// Propagates the backend error on buffer allocation or shader
    /// compilation/link failure. Construction failure is fatal for the
    /// instance; any partially created resources are released before
    /// the error returns.
    pub fn new(ctx: Arc<dyn GraphicsContext>) -> Result<Self> {
        let vertex_positions = ctx.create_buffer(BufferDesc {
            kind: BufferKind::Vertex,
            data: bytemuck::cast_slice(&VERTEX_POSITIONS).to_vec(),
        })?;
        let texture_coords = ctx.create_buffer(BufferDesc {
            kind: BufferKind::Vertex,
            data: bytemuck::cast_slice(&TEXTURE_COORDS).to_vec(),
        })?;
        let vertex_indices = ctx.create_buffer(BufferDesc {
            kind: BufferKind::Index,
            data: bytemuck::cast_slice(&VERTEX_INDICES).to_vec(),
        })?;

        let program = ctx.create_program(ProgramDesc {
            vertex_source: shaders::VERTEX.to_string(),
            fragment_source: shaders::FRAGMENT.to_string(),
            attributes: shaders::ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            uniforms: shaders::UNIFORMS.iter().map(|s| s.to_string()).collect(),
        })?;

        let attributes = AttributeSet {
            vertex_position: program.attribute("aVertexPosition")?,
            texture_coord: program.attribute("aTextureCoord")?,
        };
        let uniforms = UniformSet {
            p_inv_matrix: program.uniform("uPInvMatrix")?,
            depth: program.uniform("uDepth")?,
            vcc_matrix: program.uniform("vccMatrix")?,
            sampler: program.uniform("uSampler")?,
            opacity: program.uniform("uOpacity")?,
            width: program.uniform("uWidth")?,
            height: program.uniform("uHeight")?,
            color_offset: program.uniform("colorOffset")?,
            color_matrix: program.uniform("colorMatrix")?,
            texture_x: program.uniform("textureX")?,
            texture_y: program.uniform("textureY")?,
            texture_width: program.uniform("textureWidth")?,
            texture_height: program.uniform("textureHeight")?,
        };

        pano_info!(LOG_SOURCE, "equirect renderer initialized");

        Ok(Self {
            ctx,
            resources: Some(Resources {
                vertex_positions,
                texture_coords,
                vertex_indices,
                program,
                attributes,
                uniforms,
            }),
        })
    }

    fn resources(&self) -> Result<&Resources> {
        self.resources
            .as_ref()
            .ok_or_else(|| Error::InvalidResource("renderer destroyed".to_string()))
    }

    /// Begin a layer: bind the program and quad, set the clamped
    /// viewport and its compensation matrix, upload the inverted
    /// projection and the layer's effect uniforms.
    ///
    /// `rect` is the target pixel rectangle; it may extend outside the
    /// framebuffer and is clamped with compensation.
    pub fn start_layer(&mut self, layer: &dyn Layer, rect: PixelRect) -> Result<()> {
        let res = self.resources()?;
        let ctx = &self.ctx;

        ctx.use_program(&res.program)?;

        let (clamped, vcc_matrix) = viewport::clamp_to_framebuffer(rect, ctx.framebuffer_size());
        ctx.set_viewport(clamped)?;
        ctx.set_uniform_mat4(res.uniforms.vcc_matrix, &vcc_matrix)?;

        // The same quad serves every tile in every layer; only the
        // projection stretches it.
        ctx.bind_attribute(res.attributes.vertex_position, &res.vertex_positions, 3)?;
        ctx.bind_attribute(res.attributes.texture_coord, &res.texture_coords, 2)?;

        let p_inv = layer.view().projection().inverse();
        ctx.set_uniform_mat4(res.uniforms.p_inv_matrix, &p_inv.as_mat4())?;

        ctx.set_uniform_f32(res.uniforms.width, rect.width as f32)?;
        ctx.set_uniform_f32(res.uniforms.height, rect.height as f32)?;

        let effects = layer.effects();
        let crop = effects.effective_crop();
        ctx.set_uniform_f32(res.uniforms.texture_x, crop.x)?;
        ctx.set_uniform_f32(res.uniforms.texture_y, crop.y)?;
        ctx.set_uniform_f32(res.uniforms.texture_width, crop.width)?;
        ctx.set_uniform_f32(res.uniforms.texture_height, crop.height)?;

        ctx.set_uniform_f32(res.uniforms.opacity, effects.opacity)?;
        ctx.set_uniform_vec4(res.uniforms.color_offset, effects.color_offset)?;
        ctx.set_uniform_mat4(res.uniforms.color_matrix, &effects.color_matrix)?;

        Ok(())
    }

    /// Draw one tile: set its depth, bind its texture, and issue the
    /// indexed draw of the shared quad. The only GPU draw call per
    /// tile; no per-tile allocation.
    ///
    /// `layer_z` is the layer's position in the caller-supplied
    /// stacking order. Both `layer_z` and `tile.z` must stay below 256
    /// for the depth bands to remain disjoint.
    pub fn render_tile(
        &mut self,
        tile: &Tile,
        texture: &Arc<dyn Texture>,
        _layer: &dyn Layer,
        layer_z: u32,
    ) -> Result<()> {
        let res = self.resources()?;

        self.ctx
            .set_uniform_f32(res.uniforms.depth, tile_depth(layer_z, tile.z))?;

        self.ctx
            .set_uniform_i32(res.uniforms.sampler, TILE_TEXTURE_UNIT as i32)?;
        self.ctx.bind_texture(texture, TILE_TEXTURE_UNIT)?;

        self.ctx
            .draw_indexed(&res.vertex_indices, VERTEX_INDICES.len() as u32)
    }

    /// End a layer. No GPU state changes; closes the pairing with
    /// `start_layer`.
    pub fn end_layer(&mut self) -> Result<()> {
        self.resources()?;
        Ok(())
    }

    /// Release the GPU resources. Idempotent: the second and later
    /// calls do nothing. Subsequent rendering calls return
    /// `Error::InvalidResource`.
    pub fn destroy(&mut self) {
        if self.resources.take().is_some() {
            pano_info!(LOG_SOURCE, "equirect renderer destroyed");
        }
    }
}

impl Drop for EquirectRenderer {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
#[path = "equirect_tests.rs"]
mod tests;
