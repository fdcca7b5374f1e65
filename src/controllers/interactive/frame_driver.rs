use crate::controllers::ports::renderer::{Renderer, TargetId};
use crate::controllers::ports::settings_source::SettingsSource;
use crate::controllers::settings::settings_manager::SettingsManager;
use crate::core::config::FrameCadence;
use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::viewpoint::Viewpoint;
use log::trace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub committed: bool,
    pub rendered: bool,
}

/// Owns one settings store and one renderer and steps them once per frame:
/// commit staged edits, then redraw if anything was published.
pub struct FrameDriver<V: Viewpoint = CameraSettings> {
    store: Arc<Mutex<SettingsManager<V>>>,
    renderer: Box<dyn Renderer>,
    redraw: Arc<AtomicBool>,
    cadence: FrameCadence,
}

impl<V: Viewpoint> FrameDriver<V> {
    pub fn new(
        mut store: SettingsManager<V>,
        mut renderer: Box<dyn Renderer>,
        cadence: FrameCadence,
    ) -> Self {
        let redraw = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&redraw);
        store.add_observer(move || flag.store(true, Ordering::Release));

        let store = Arc::new(Mutex::new(store));
        renderer.set_settings_source(Arc::clone(&store) as Arc<dyn SettingsSource>);

        Self {
            store,
            renderer,
            redraw,
            cadence,
        }
    }

    /// Shared handle for input sources that edit settings from other threads.
    #[must_use]
    pub fn store(&self) -> Arc<Mutex<SettingsManager<V>>> {
        Arc::clone(&self.store)
    }

    /// Runs `edit` against the store. Edits stay pending until the next tick.
    pub fn update<R>(&self, edit: impl FnOnce(&mut SettingsManager<V>) -> R) -> R {
        edit(&mut self.lock_store())
    }

    pub fn init(&mut self, target: TargetId) {
        self.renderer.init(target);
        self.request_redraw();
    }

    /// Resizes the renderer's frame and fits the store's view to the new aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.lock_store().resize(width, height);
        self.request_redraw();
    }

    pub fn tick(&mut self) -> TickOutcome {
        // The renderer reads the store, so the lock must be gone before rendering.
        let committed = self.lock_store().commit();

        let rendered = if self.redraw.swap(false, Ordering::AcqRel) {
            let rendered = self.renderer.render();
            if !rendered {
                self.request_redraw();
            }
            rendered
        } else {
            false
        };

        if committed || rendered {
            trace!("tick: committed={} rendered={}", committed, rendered);
        }

        TickOutcome {
            committed,
            rendered,
        }
    }

    /// Ticks `ticks` times, sleeping one cadence interval between ticks.
    /// Returns how many ticks produced a frame.
    pub fn run(&mut self, ticks: u32) -> u32 {
        let interval = self.cadence.tick_interval();
        let mut frames = 0;

        for tick in 0..ticks {
            if self.tick().rendered {
                frames += 1;
            }
            if tick + 1 < ticks {
                thread::sleep(interval);
            }
        }

        frames
    }

    fn request_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    fn lock_store(&self) -> MutexGuard<'_, SettingsManager<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::fractal_kind::FractalKind;
    use crate::core::settings::render_settings::RenderSettings;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct MockRendererState {
        target: Option<TargetId>,
        size: Option<(u32, u32)>,
        rendered: Vec<RenderSettings>,
    }

    struct MockRenderer {
        state: Arc<Mutex<MockRendererState>>,
        source: Option<Arc<dyn SettingsSource>>,
    }

    impl MockRenderer {
        fn new() -> (Self, Arc<Mutex<MockRendererState>>) {
            let state = Arc::new(Mutex::new(MockRendererState::default()));
            let renderer = Self {
                state: Arc::clone(&state),
                source: None,
            };
            (renderer, state)
        }
    }

    impl Renderer for MockRenderer {
        fn init(&mut self, target: TargetId) {
            self.state.lock().unwrap().target = Some(target);
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.state.lock().unwrap().size = Some((width, height));
        }

        fn render(&mut self) -> bool {
            let mut state = self.state.lock().unwrap();
            let (Some(_), Some(_), Some(source)) = (state.target, state.size, &self.source)
            else {
                return false;
            };

            let settings = source.settings();
            state.rendered.push(settings);
            true
        }

        fn set_settings_source(&mut self, source: Arc<dyn SettingsSource>) {
            self.source = Some(source);
        }
    }

    fn driver() -> (FrameDriver, Arc<Mutex<MockRendererState>>) {
        let (renderer, state) = MockRenderer::new();
        let driver = FrameDriver::new(
            SettingsManager::new(),
            Box::new(renderer),
            FrameCadence::default(),
        );
        (driver, state)
    }

    fn ready_driver() -> (FrameDriver, Arc<Mutex<MockRendererState>>) {
        let (mut driver, state) = driver();
        driver.init(TargetId(1));
        driver.resize(8, 8);
        driver.tick();
        (driver, state)
    }

    fn frames(state: &Arc<Mutex<MockRendererState>>) -> usize {
        state.lock().unwrap().rendered.len()
    }

    #[test]
    fn test_nothing_renders_before_init_and_resize() {
        let (mut driver, state) = driver();

        assert_eq!(driver.tick(), TickOutcome::default());
        assert_eq!(frames(&state), 0);
    }

    #[test]
    fn test_first_frame_after_setup() {
        let (mut driver, state) = driver();

        driver.init(TargetId(3));
        driver.resize(40, 20);
        let outcome = driver.tick();

        assert!(outcome.rendered);
        assert_eq!(state.lock().unwrap().target, Some(TargetId(3)));
        assert_eq!(state.lock().unwrap().size, Some((40, 20)));
        assert_eq!(frames(&state), 1);
        assert_eq!(state.lock().unwrap().rendered[0].camera.aspect, 2.0);
    }

    #[test]
    fn test_idle_ticks_do_not_redraw() {
        let (mut driver, state) = ready_driver();

        for _ in 0..5 {
            assert_eq!(driver.tick(), TickOutcome::default());
        }
        assert_eq!(frames(&state), 1);
    }

    #[test]
    fn test_edits_render_once_per_tick() {
        let (mut driver, state) = ready_driver();

        driver.update(|store| {
            store.zoom(2.0);
            store.zoom(2.0);
            store.set_max_iterations(64);
        });
        let outcome = driver.tick();

        assert_eq!(
            outcome,
            TickOutcome {
                committed: true,
                rendered: true
            }
        );
        let state = state.lock().unwrap();
        assert_eq!(state.rendered.len(), 2);
        assert_eq!(state.rendered[1].camera.scale, 0.25);
        assert_eq!(state.rendered[1].fractal.max_iterations, 64);
    }

    #[test]
    fn test_renderer_sees_committed_settings_only() {
        let (mut driver, state) = ready_driver();

        driver.update(|store| store.set_fractal_type(FractalKind::Julia));
        driver.renderer.render();

        assert_eq!(
            state.lock().unwrap().rendered[1].fractal.kind,
            FractalKind::Mandelbrot
        );
    }

    #[test]
    fn test_failed_render_is_retried() {
        let (mut driver, state) = driver();
        driver.resize(8, 8);

        assert!(!driver.tick().rendered);
        assert!(!driver.tick().rendered);

        driver.init(TargetId(9));
        assert!(driver.tick().rendered);
        assert_eq!(frames(&state), 1);
    }

    #[test]
    fn test_store_handle_edits_from_another_thread() {
        let (mut driver, state) = ready_driver();

        let store = driver.store();
        thread::spawn(move || {
            store
                .lock()
                .unwrap()
                .set_fractal_type(FractalKind::MengerSponge)
        })
        .join()
        .unwrap();

        assert!(driver.tick().committed);
        assert_eq!(
            state.lock().unwrap().rendered[1].fractal.kind,
            FractalKind::MengerSponge
        );
    }

    #[test]
    fn test_extra_observers_still_fire() {
        let (mut driver, _) = driver();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        driver.update(|store| {
            store.add_observer(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            store.zoom(3.0);
        });
        driver.tick();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_counts_frames() {
        let (mut driver, state) = driver();
        driver.init(TargetId(1));
        driver.resize(8, 8);
        driver.cadence = FrameCadence { tick_hz: 1000 };

        assert_eq!(driver.run(3), 1);
        assert_eq!(frames(&state), 1);
    }
}
