use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use cubist::{
    camera::PerspectiveCamera,
    driver::{FrameDriver, FrameScheduler},
    renderer::Renderer,
    scene::{BasicMaterial, ObjectBuilder, Scene, Shape},
};
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Next-frame requests ride on the window's redraw mechanism, so the loop
/// follows the display refresh and pauses while the window is hidden.
pub struct RedrawScheduler {
    window: Arc<Window>,
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) {
        self.window.request_redraw();
    }
}

/// One green cube at the origin; nothing else.
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(
        ObjectBuilder::new(Shape::Cube)
            .with_material(BasicMaterial::from_rgba_u8(0, 255, 0, 255))
            .build(),
    );
    scene
}

/// Perspective camera backed off along +Z so the cube at the origin is in
/// front of it rather than inside it.
pub fn build_camera(width: u32, height: u32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(75.0, width as f32 / height.max(1) as f32, 0.1, 1000.0);
    camera.set_position(glam::Vec3::new(0.0, 0.0, 5.0));
    camera.look_at(glam::Vec3::ZERO);
    camera
}

pub struct State {
    is_surface_configured: bool,
    window: Arc<Window>,
    pub driver: FrameDriver<Renderer, RedrawScheduler>,
}

impl State {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let renderer = Renderer::from_winit(window.clone()).await?;
        let window_size = window.inner_size();
        let scene = build_scene();
        let camera = build_camera(window_size.width, window_size.height);
        let scheduler = RedrawScheduler {
            window: window.clone(),
        };
        let driver = FrameDriver::new(scene, camera, renderer, scheduler);

        Ok(Self {
            is_surface_configured: false,
            window,
            driver,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.driver.target_mut().set_size(width, height);
            let surface_size = self.driver.target().size();
            self.driver.camera_mut().update_aspect(surface_size);
            self.is_surface_configured = true;
        }
    }

    pub fn redraw(&mut self) {
        if !self.is_surface_configured {
            // Nothing to draw into yet; keep the loop alive.
            self.window.request_redraw();
            return;
        }
        match self.driver.tick() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
            }
        }
    }
}

pub struct App {
    #[cfg(target_arch = "wasm32")]
    proxy: Option<winit::event_loop::EventLoopProxy<State>>,
    state: Option<State>,
}

impl App {
    pub fn new(#[cfg(target_arch = "wasm32")] event_loop: &EventLoop<State>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let proxy = Some(event_loop.create_proxy());
        Self {
            state: None,
            #[cfg(target_arch = "wasm32")]
            proxy,
        }
    }
}

impl ApplicationHandler<State> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes().with_title("cubist");

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowAttributesExtWebSys;

            // Appends the canvas to the document body, once, at creation.
            window_attributes = window_attributes.with_append(true);

            if let Some(document) = wgpu::web_sys::window().and_then(|w| w.document()) {
                if let Some(loading_text) = document.get_element_by_id("loading_text") {
                    loading_text.remove();
                }
            }
        }

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut state = pollster::block_on(State::new(window)).unwrap();
            state.driver.start();
            self.state = Some(state);
        }

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(proxy) = self.proxy.take() {
                wasm_bindgen_futures::spawn_local(async move {
                    assert!(
                        proxy
                            .send_event(
                                State::new(window).await.expect("Unable to create state")
                            )
                            .is_ok()
                    )
                });
            }
        }
    }

    #[allow(unused_mut)]
    fn user_event(&mut self, _event_loop: &ActiveEventLoop, mut event: State) {
        #[cfg(target_arch = "wasm32")]
        {
            let window_size = event.window.inner_size();
            event.resize(window_size.width, window_size.height);
            event.driver.start();
        }
        self.state = Some(event);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => state.redraw(),
            _ => {}
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        env_logger::init();
    }
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop = EventLoop::with_user_event().build()?;

    let mut app = App::new(
        #[cfg(target_arch = "wasm32")]
        &event_loop,
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_scene_holds_exactly_one_cube() {
        let scene = build_scene();
        assert_eq!(scene.len(), 1);
        let object = scene.iter().next().unwrap();
        assert_eq!(object.shape, Shape::Cube);
        assert_eq!(object.material.color, glam::Vec4::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn setup_camera_is_offset_from_the_origin() {
        let camera = build_camera(800, 600);
        assert_ne!(camera.position().z, 0.0);
        assert_eq!(camera.position().truncate(), glam::Vec2::ZERO);
    }

    #[test]
    fn setup_camera_aspect_matches_viewport() {
        let camera = build_camera(1920, 1080);
        assert_eq!(camera.aspect(), 1920.0 / 1080.0);
    }
}
