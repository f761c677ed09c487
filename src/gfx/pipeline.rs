use std::collections::VecDeque;

use crate::{
    gfx::{Camera, Mesh, Rasterizer, RenderError, RenderSettings, ScreenTriangle, Viewport},
    math::{Matrix4, Plane, Triangle, Vector3},
};

/// Per-frame counters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FrameStats {
    /// Mesh triangles considered.
    pub triangles: usize,
    /// Rejected as back-facing (or edge-on).
    pub culled: usize,
    /// Rejected for having no usable face normal.
    pub degenerate: usize,
    /// Emitted by the near clip and projected to the screen.
    pub projected: usize,
    /// Handed to the rasterizer after screen-edge clipping.
    pub drawn: usize,
}

/// Software geometry pipeline.
///
/// Every frame: world transform, back-face cull, flat lighting, view transform, near clip,
/// projection to pixels, back-to-front sort, screen-edge clip, then a single batch hand-off to
/// a [`Rasterizer`]. There is no depth buffer; overlapping faces resolve by painter's order.
///
/// Front faces have their normal pointing away from the camera: a face is drawn only when
/// `dot(normal, camera - v0) < 0`. This is the reverse of the usual outward-normal winding, so
/// meshes exported that way (OBJ files, for instance) must be passed through
/// [`Mesh::reversed_winding`] before rendering.
#[derive(Debug)]
pub struct Renderer {
    settings: RenderSettings,
    world: Matrix4,
    projection: Matrix4,
    near_plane: Plane,
    screen_edges: [Plane; 4],

    // Scratch buffers reused across frames.
    to_raster: Vec<Triangle>,
    clip_queue: VecDeque<Triangle>,
    triangles: Vec<ScreenTriangle>,
    shades: Vec<f32>,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Result<Renderer, RenderError> {
        settings.validate()?;
        let renderer = Renderer {
            settings,
            world: Matrix4::identity(),
            projection: settings.projection.matrix(&settings.viewport),
            near_plane: settings.projection.near_plane(),
            screen_edges: settings.viewport.edges(),
            to_raster: Vec::new(),
            clip_queue: VecDeque::new(),
            triangles: Vec::new(),
            shades: Vec::new(),
        };
        log::debug!(
            "Renderer ready: {}x{} fov {} near {} far {}",
            settings.viewport.width,
            settings.viewport.height,
            settings.projection.fov_degrees,
            settings.projection.near,
            settings.projection.far
        );
        Ok(renderer)
    }

    #[inline]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.settings.viewport
    }

    #[inline]
    pub fn projection(&self) -> &Matrix4 {
        &self.projection
    }

    #[inline]
    pub fn world(&self) -> &Matrix4 {
        &self.world
    }

    /// Model-to-world transform applied to the whole mesh.
    #[inline]
    pub fn set_world(&mut self, world: Matrix4) {
        self.world = world;
    }

    /// Rebuild the projection and screen edges for a new output size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), RenderError> {
        viewport.validate()?;
        self.settings.viewport = viewport;
        self.projection = self.settings.projection.matrix(&viewport);
        self.screen_edges = viewport.edges();
        log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        Ok(())
    }

    /// Draw one frame of `mesh` as seen from `camera`.
    pub fn render<R: Rasterizer>(
        &mut self,
        mesh: &Mesh,
        camera: &mut Camera,
        rasterizer: &mut R,
    ) -> FrameStats {
        let mut stats = FrameStats::default();
        let view = camera.view_matrix();
        let eye = camera.position();

        self.to_raster.clear();
        for triangle in mesh.triangles() {
            stats.triangles += 1;
            self.project(triangle, &view, eye, &mut stats);
        }
        stats.projected = self.to_raster.len();

        // Painter's order: farthest first. Stable, so equal depths keep mesh order.
        self.to_raster
            .sort_by(|a, b| b.average_depth().total_cmp(&a.average_depth()));

        self.triangles.clear();
        self.shades.clear();
        let viewport = self.settings.viewport;
        for triangle in &self.to_raster {
            clip_to_screen(&self.screen_edges, triangle, &mut self.clip_queue);
            for clipped in self.clip_queue.drain(..) {
                self.triangles.push(ScreenTriangle([
                    viewport.to_device(clipped[0]),
                    viewport.to_device(clipped[1]),
                    viewport.to_device(clipped[2]),
                ]));
                self.shades.push(clipped.shade);
            }
        }
        stats.drawn = self.triangles.len();

        rasterizer.fill_triangles(&self.triangles, &self.shades);
        log::trace!("{:?}", stats);
        stats
    }

    /// Cull, light, view, near-clip and project one mesh triangle into `to_raster` as pixel
    /// space triangles.
    fn project(
        &mut self,
        triangle: &Triangle,
        view: &Matrix4,
        eye: Vector3,
        stats: &mut FrameStats,
    ) {
        let transformed = triangle.transformed(&self.world);

        let normal = transformed.normal();
        if !normal.is_finite() {
            log::trace!("Skipping degenerate triangle {:?}", triangle.vertices);
            stats.degenerate += 1;
            return;
        }

        let camera_ray = eye - transformed[0].narrowed();
        if normal.dot(camera_ray) >= 0.0 {
            stats.culled += 1;
            return;
        }

        let shade = self.settings.lighting.shade(normal);
        let viewed = transformed.transformed(view).with_shade(shade);

        let viewport = self.settings.viewport;
        for clipped in self.near_plane.clip(&viewed) {
            let projected = clipped
                .transformed(&self.projection)
                .map(|vertex| viewport.to_screen(vertex.perspective_divided()));
            self.to_raster.push(projected);
        }
    }
}

/// Clip a pixel-space triangle against each screen edge in turn, leaving the survivors in
/// `queue`.
///
/// Each edge only sees the fragments that survived the previous edges.
pub fn clip_to_screen(edges: &[Plane; 4], triangle: &Triangle, queue: &mut VecDeque<Triangle>) {
    queue.clear();
    queue.push_back(*triangle);
    for edge in edges.iter() {
        for _ in 0..queue.len() {
            if let Some(fragment) = queue.pop_front() {
                queue.extend(edge.clip(&fragment));
            }
        }
    }
}
