use kiss3d::camera::Camera;
use kiss3d::context::Context;
use kiss3d::renderer::Renderer;
use kiss3d::resource::{
    AllocationType, BufferType, Effect, GPUVec, ShaderAttribute, ShaderUniform,
};

use nalgebra::{Matrix4, Point3};

/// Draws orbit rings and other polylines as GL line segments with a
/// per-vertex color. Paths are submitted in world space once per frame
/// and the buffer is cleared after rendering.
pub struct PathRenderer {
    // OpenGL stuff
    shader: Effect,
    pos: ShaderAttribute<Point3<f32>>,
    color: ShaderAttribute<Point3<f32>>,
    view: ShaderUniform<Matrix4<f32>>,
    proj: ShaderUniform<Matrix4<f32>>,
    line_width: f32,
    // Line data, stored as (pt, color, pt, color)
    lines: GPUVec<Point3<f32>>,
}

impl PathRenderer {
    pub fn new() -> Self {
        let mut shader = Effect::new_from_str(VERTEX_SRC, FRAGMENT_SRC);

        shader.use_program();

        PathRenderer {
            pos: shader
                .get_attrib::<Point3<f32>>("position")
                .expect("Failed to get shader attribute."),
            color: shader
                .get_attrib::<Point3<f32>>("color")
                .expect("Failed to get shader attribute."),
            view: shader
                .get_uniform::<Matrix4<f32>>("view")
                .expect("Failed to get shader uniform."),
            proj: shader
                .get_uniform::<Matrix4<f32>>("proj")
                .expect("Failed to get shader uniform."),
            shader,
            line_width: 1.0,
            lines: GPUVec::new(Vec::new(), BufferType::Array, AllocationType::StreamDraw),
        }
    }

    pub fn add_path(&mut self, points: &[Point3<f32>], color: Point3<f32>) {
        let data = self
            .lines
            .data_mut()
            .as_mut()
            .expect("line buffer is always CPU-resident");
        for pts in points.windows(2) {
            data.push(pts[0]);
            data.push(color);
            data.push(pts[1]);
            data.push(color);
        }
    }
}

impl Renderer for PathRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        if self.lines.len() == 0 {
            return;
        }

        self.shader.use_program();
        self.pos.enable();
        self.color.enable();

        camera.upload(pass, &mut self.proj, &mut self.view);

        self.pos.bind_sub_buffer(&mut self.lines, 1, 0);
        self.color.bind_sub_buffer(&mut self.lines, 1, 1);

        let ctxt = Context::get();
        ctxt.draw_arrays(Context::LINES, 0, (self.lines.len() / 2) as i32);
        ctxt.line_width(self.line_width);

        self.pos.disable();
        self.color.disable();

        self.lines
            .data_mut()
            .as_mut()
            .expect("line buffer is always CPU-resident")
            .clear();
    }
}

/// Vertex shader used by the material to display line.
static VERTEX_SRC: &str = "#version 100
    attribute vec3 position;
    attribute vec3 color;
    varying   vec3 vColor;
    uniform   mat4 proj;
    uniform   mat4 view;
    void main() {
        gl_Position = proj * view * vec4(position, 1.0);
        vColor = color;
    }";

/// Fragment shader used by the material to display line.
static FRAGMENT_SRC: &str = "#version 100
#ifdef GL_FRAGMENT_PRECISION_HIGH
   precision highp float;
#else
   precision mediump float;
#endif

    varying vec3 vColor;
    void main() {
        gl_FragColor = vec4(vColor, 1.0);
    }";
