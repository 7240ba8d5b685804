use super::camera::PerspectiveCamera;
use super::renderer::Renderer;
use super::scene::Scene;

/// Host capability that arranges for one more frame callback before the next
/// repaint. The winit binding forwards to `Window::request_redraw`, which
/// pauses while the surface is not visible; it is never a fixed-rate timer.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// One render call per frame. Implemented by [`Renderer`] and by test doubles.
pub trait RenderTarget {
    type Error;

    fn render_frame(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), Self::Error>;
}

impl RenderTarget for Renderer {
    type Error = wgpu::SurfaceError;

    fn render_frame(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), Self::Error> {
        self.render(scene, camera)
    }
}

/// Owns the scene, the camera, the render target, and the scheduler, and
/// advances the display indefinitely: every [`tick`](Self::tick) requests the
/// next frame and renders the current one. The loop has no terminal state;
/// it simply stops being called when the host stops delivering frames.
pub struct FrameDriver<T: RenderTarget, S: FrameScheduler> {
    scene: Scene,
    camera: PerspectiveCamera,
    target: T,
    scheduler: S,
    started: bool,
}

impl<T: RenderTarget, S: FrameScheduler> FrameDriver<T, S> {
    pub fn new(scene: Scene, camera: PerspectiveCamera, target: T, scheduler: S) -> Self {
        Self {
            scene,
            camera,
            target,
            scheduler,
            started: false,
        }
    }

    /// Requests the first frame. Idempotent: the initial scheduling request
    /// is issued exactly once no matter how often this is called.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        log::debug!("Starting frame loop");
        self.scheduler.request_frame();
        self.started = true;
    }

    /// One frame: exactly one scheduling request and exactly one render call.
    /// The next frame is requested before rendering, so a render error still
    /// leaves the loop scheduled while the error propagates to the caller.
    pub fn tick(&mut self) -> Result<(), T::Error> {
        self.started = true;
        self.scheduler.request_frame();
        self.target.render_frame(&self.scene, &self.camera)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    enum Call {
        Schedule,
        Render,
    }

    #[derive(Default, Clone)]
    struct CallLog(Rc<RefCell<Vec<Call>>>);

    impl CallLog {
        fn calls(&self) -> Vec<Call> {
            self.0.borrow().clone()
        }

        fn count(&self, call: Call) -> usize {
            self.0.borrow().iter().filter(|c| **c == call).count()
        }
    }

    struct CountingScheduler(CallLog);

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) {
            self.0 .0.borrow_mut().push(Call::Schedule);
        }
    }

    struct CountingTarget(CallLog);

    impl RenderTarget for CountingTarget {
        type Error = Infallible;

        fn render_frame(
            &mut self,
            _scene: &Scene,
            _camera: &PerspectiveCamera,
        ) -> Result<(), Self::Error> {
            self.0 .0.borrow_mut().push(Call::Render);
            Ok(())
        }
    }

    struct FailingTarget;

    impl RenderTarget for FailingTarget {
        type Error = &'static str;

        fn render_frame(
            &mut self,
            _scene: &Scene,
            _camera: &PerspectiveCamera,
        ) -> Result<(), Self::Error> {
            Err("no surface")
        }
    }

    fn driver(log: &CallLog) -> FrameDriver<CountingTarget, CountingScheduler> {
        FrameDriver::new(
            Scene::new(),
            PerspectiveCamera::default(),
            CountingTarget(log.clone()),
            CountingScheduler(log.clone()),
        )
    }

    #[test]
    fn tick_schedules_once_and_renders_once() {
        let log = CallLog::default();
        let mut driver = driver(&log);
        driver.tick().unwrap();
        assert_eq!(log.calls(), vec![Call::Schedule, Call::Render]);
    }

    #[test]
    fn start_is_idempotent() {
        let log = CallLog::default();
        let mut driver = driver(&log);
        driver.start();
        driver.start();
        assert_eq!(log.count(Call::Schedule), 1);
        assert_eq!(log.count(Call::Render), 0);
    }

    #[test]
    fn every_tick_requests_the_next_frame() {
        const TICKS: usize = 100;
        let log = CallLog::default();
        let mut driver = driver(&log);
        driver.start();
        for _ in 0..TICKS {
            driver.tick().unwrap();
        }
        // One request from start plus one per tick: the loop never winds down.
        assert_eq!(log.count(Call::Schedule), TICKS + 1);
        assert_eq!(log.count(Call::Render), TICKS);
    }

    #[test]
    fn render_errors_propagate_with_the_frame_still_scheduled() {
        struct NullScheduler(usize);
        impl FrameScheduler for &mut NullScheduler {
            fn request_frame(&mut self) {
                self.0 += 1;
            }
        }

        let mut scheduler = NullScheduler(0);
        let mut driver = FrameDriver::new(
            Scene::new(),
            PerspectiveCamera::default(),
            FailingTarget,
            &mut scheduler,
        );
        assert_eq!(driver.tick(), Err("no surface"));
        drop(driver);
        assert_eq!(scheduler.0, 1);
    }
}
