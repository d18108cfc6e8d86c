use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation3, UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::Rng;

use super::camera::OrbitCamera;
use super::controller::Controller;
use super::renderers::{to_render_point, to_render_points, CompoundRenderer};
use crate::catalog::{hero_orbit, Catalog, DebrisInfo};
use crate::orbit::{discretize_path, OrbitalParameters};

// Object counts and ring resolutions, per scene
const HERO_OBJECT_COUNT: usize = 30;
const HERO_RING_SEGMENTS: usize = 50;
const GLOBE_RING_SEGMENTS: usize = 128;
const DETAIL_RING_SEGMENTS: usize = 64;
const DETAIL_CUBE_SIZE: f32 = 0.2;

// Cosmetic per-frame motion
const EARTH_SPIN_STEP: f32 = 0.001;
const DEBRIS_TUMBLE_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Background swarm of synthetic orbits around the globe.
    Hero,
    /// Every catalog object placed over its ground-track point, with
    /// decorative orbit rings.
    Globe,
    /// A single object up close, its ring flattened by its risk score.
    Detail,
}

impl SceneKind {
    pub fn label(&self) -> &'static str {
        match self {
            SceneKind::Hero => "hero",
            SceneKind::Globe => "globe",
            SceneKind::Detail => "detail",
        }
    }
}

struct DebrisNode {
    id: u32,
    node: SceneNode,
    orbit: OrbitalParameters,
    // Ring polyline, precomputed at scene build (the ring is a static
    // trace; only the object moves along it)
    ring: Vec<Point3<f32>>,
    color: Point3<f32>,
}

pub struct View {
    // Object state
    catalog: Catalog,
    scene: SceneKind,
    time: f64,
    focused_id: u32,
    earth: SceneNode,
    debris: Vec<DebrisNode>,
    // Camera
    camera: OrbitCamera,
    // Misc
    renderer: CompoundRenderer,
    rng: StdRng,
}

impl View {
    pub fn new(
        catalog: Catalog,
        scene: SceneKind,
        focus_id: Option<u32>,
        rng: StdRng,
        window: &mut Window,
    ) -> Self {
        let mut earth = window.add_sphere(1.0);
        // #1e4571, the brand's deep ocean blue
        earth.set_color(0.118, 0.271, 0.443);

        let focused_id = focus_id
            .filter(|id| catalog.get(*id).is_some())
            .or_else(|| catalog.iter().next().map(|d| d.id))
            .unwrap_or(0);

        let mut view = Self {
            catalog,
            scene,
            time: 0.0,
            focused_id,
            earth,
            debris: Vec::new(),
            camera: OrbitCamera::new(5.0),
            renderer: CompoundRenderer::new(),
            rng,
        };
        view.build_scene(window);
        view.update_state_by(0.0);

        view
    }

    pub fn switch_scene(&mut self, scene: SceneKind, window: &mut Window) {
        if scene == self.scene {
            return;
        }
        log::info!("switching to {} scene", scene.label());
        self.scene = scene;
        self.build_scene(window);
        self.update_state_by(0.0);
    }

    fn build_scene(&mut self, window: &mut Window) {
        for d in self.debris.iter_mut() {
            d.node.unlink();
        }
        self.debris.clear();

        match self.scene {
            SceneKind::Hero => {
                let entries: Vec<DebrisInfo> =
                    self.catalog.iter().take(HERO_OBJECT_COUNT).cloned().collect();
                for info in &entries {
                    let orbit = hero_orbit(&mut self.rng);
                    let size = (0.03 + self.rng.random_range(0.0..0.05)) as f32;
                    self.debris.push(Self::create_debris_node(
                        window,
                        info,
                        orbit,
                        size,
                        HERO_RING_SEGMENTS,
                    ));
                }

                self.camera.set_distance_limits(3.0, 8.0);
                self.camera.set_distance(5.0);
                self.camera.set_auto_rotate(0.002);
            }
            SceneKind::Globe => {
                let entries: Vec<DebrisInfo> = self.catalog.iter().cloned().collect();
                for info in &entries {
                    let orbit = info.ring_orbit();
                    let size = (0.02 + self.rng.random_range(0.0..0.03)) as f32;
                    self.debris.push(Self::create_debris_node(
                        window,
                        info,
                        orbit,
                        size,
                        GLOBE_RING_SEGMENTS,
                    ));
                }

                self.camera.set_distance_limits(1.5, 5.0);
                self.camera.set_distance(2.5);
                self.camera.set_auto_rotate(0.0);
            }
            SceneKind::Detail => {
                let info = self
                    .catalog
                    .get(self.focused_id)
                    .or_else(|| self.catalog.iter().next())
                    .cloned();
                if let Some(info) = info {
                    let orbit = info.detail_orbit();
                    self.debris.push(Self::create_debris_node(
                        window,
                        &info,
                        orbit,
                        DETAIL_CUBE_SIZE,
                        DETAIL_RING_SEGMENTS,
                    ));
                    self.focused_id = info.id;
                }

                self.camera.set_distance_limits(2.0, 6.0);
                self.camera.set_distance(3.0);
                self.camera.set_auto_rotate(0.004);
            }
        }
    }

    fn create_debris_node(
        window: &mut Window,
        info: &DebrisInfo,
        orbit: OrbitalParameters,
        size: f32,
        ring_segments: usize,
    ) -> DebrisNode {
        let mut node = window.add_cube(size, size, size);
        let color = info.color();
        node.set_color(color.x, color.y, color.z);

        let ring = to_render_points(
            discretize_path(&orbit, ring_segments)
                .expect("ring segment counts are fixed constants above the minimum"),
        );

        DebrisNode {
            id: info.id,
            node,
            orbit,
            ring,
            color,
        }
    }

    pub fn update_state_by(&mut self, timestep: f64) {
        self.time += timestep;

        // The globe and the debris spin a little every frame, purely for
        // visual effect
        let spin = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), EARTH_SPIN_STEP);
        self.earth.prepend_to_local_rotation(&spin);

        let tumble =
            UnitQuaternion::from_euler_angles(DEBRIS_TUMBLE_STEP, DEBRIS_TUMBLE_STEP, 0.0);
        for d in self.debris.iter_mut() {
            let position: Vector3<f32> = nalgebra::convert(d.orbit.sample_position(self.time));
            d.node.set_local_translation(Translation3::from(position));
            d.node.prepend_to_local_rotation(&tumble);
        }
    }

    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.shift_focus(self.debris.len().saturating_sub(1));
    }

    fn shift_focus(&mut self, offset: usize) {
        if self.debris.is_empty() {
            return;
        }
        let idx = (self.focus_position() + offset) % self.debris.len();
        self.focused_id = self.debris[idx].id;
    }

    fn focus_position(&self) -> usize {
        self.debris
            .iter()
            .position(|d| d.id == self.focused_id)
            .unwrap_or(0)
    }

    pub fn prerender_scene(&mut self, window: &mut Window, controller: &Controller) {
        // Rings are dim, except for the focused object's
        let focus_idx = self.focus_position();
        for (i, d) in self.debris.iter().enumerate() {
            let brightness = if i == focus_idx { 0.6 } else { 0.2 };
            let color = Point3::from(d.color.coords * brightness);
            self.renderer.draw_ring(&d.ring, color);
        }

        // On the globe, tie the focused object back to its ground-track
        // point with a radial tick
        if self.scene == SceneKind::Globe {
            if let Some(info) = self.catalog.get(self.focused_id) {
                let base = info.geo_position().to_cartesian();
                self.renderer.draw_link(
                    to_render_point(base),
                    to_render_point(base * 1.12),
                    info.color(),
                );
            }
        }

        // Draw text
        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.left_hand_text(),
            &Point2::origin(),
            50.0,
            &default_font,
            &text_color,
        );
        window.draw_text(
            &self.time_summary_text(controller),
            // no idea why i have to multiply by 2.0, but there it is
            &Point2::new(window.width() as f32 * 2.0 - 500.0, 0.0),
            50.0,
            &default_font,
            &text_color,
        );
    }

    fn left_hand_text(&self) -> String {
        let info = match self.catalog.get(self.focused_id) {
            Some(info) => info,
            None => return String::from("No object focused"),
        };

        let period = self
            .debris
            .get(self.focus_position())
            .and_then(|d| d.orbit.period())
            .map(|p| format!("{:.1} s", p))
            .unwrap_or_else(|| String::from("N/A"));

        format!(
            "{} [{}]
Origin: {}
Risk: {} ({})
Altitude: {:.0} km
Velocity: {:.1} km/s
Mass: {:.1} kg
Period: {}
Price: {:.3} ETH
Premium: {:.3} ETH/mo
Bounty: {:.2} ETH",
            info.name,
            info.kind.label(),
            info.origin.label(),
            info.risk_score,
            info.risk_band().label(),
            info.altitude_km,
            info.velocity_km_s,
            info.mass_kg(),
            period,
            info.price_eth,
            info.insurance_premium_eth(),
            info.cleanup_bounty_eth(),
        )
    }

    fn time_summary_text(&self, controller: &Controller) -> String {
        format!(
            "Scene: {}{}
Time: {:.1} s
Timestep: {:+.4} s/frame
FPS: {:.0}",
            self.scene.label(),
            if controller.is_paused() { " (paused)" } else { "" },
            self.time,
            controller.timestep(),
            controller.fps(),
        )
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}
