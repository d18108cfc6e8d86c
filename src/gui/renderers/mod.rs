use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::Point3;

use self::path_renderer::PathRenderer;

mod path_renderer;
mod utils;

pub use utils::{to_render_point, to_render_points};

pub struct CompoundRenderer {
    path_renderer: PathRenderer,
    line_renderer: LineRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            path_renderer: PathRenderer::new(),
            line_renderer: LineRenderer::new(),
        }
    }

    /// Submits a closed orbit ring (or any polyline) for this frame.
    pub fn draw_ring(&mut self, points: &[Point3<f32>], color: Point3<f32>) {
        self.path_renderer.add_path(points, color);
    }

    /// Submits a single highlight segment, e.g. the radial tick marking
    /// a focused object's ground-track point.
    pub fn draw_link(&mut self, from: Point3<f32>, to: Point3<f32>, color: Point3<f32>) {
        self.line_renderer.draw_line(from, to, color);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.path_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
