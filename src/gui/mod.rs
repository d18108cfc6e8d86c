use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use rand::rngs::StdRng;

use self::controller::Controller;
use self::view::View;
use crate::catalog::Catalog;

mod camera;
mod controller;
mod renderers;
mod view;

pub use view::SceneKind;

pub struct Simulation {
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(
        catalog: Catalog,
        scene: SceneKind,
        focus_id: Option<u32>,
        rng: StdRng,
        window: &mut Window,
    ) -> Self {
        Self {
            view: View::new(catalog, scene, focus_id, rng, window),
            controller: Controller::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            self.controller.process_event(event, &mut self.view);
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        if let Some(scene) = self.controller.take_pending_scene() {
            self.view.switch_scene(scene, window);
        }
        if !self.controller.is_paused() {
            self.view.update_state_by(self.controller.timestep());
        }
        self.view.prerender_scene(window, &self.controller);
        self.controller.increment_frame_counter();
    }
}
