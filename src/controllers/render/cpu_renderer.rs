use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::ports::renderer::{Renderer, TargetId};
use crate::controllers::ports::settings_source::SettingsSource;
use crate::core::actions::generate_fractal::render_frame::{Parallelism, render_frame};
use crate::core::config::RenderConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, trace, warn};
use std::sync::Arc;
use std::time::Instant;

pub struct CpuRenderer {
    target: TargetId,
    buffer: PixelBuffer,
    source: Option<Arc<dyn SettingsSource>>,
    presenter: Arc<dyn FramePresenter>,
    config: RenderConfig,
    parallelism: Parallelism,
}

impl CpuRenderer {
    pub fn new(
        presenter: Arc<dyn FramePresenter>,
        config: RenderConfig,
        parallelism: Parallelism,
    ) -> Self {
        Self {
            target: TargetId::UNSET,
            buffer: PixelBuffer::default(),
            source: None,
            presenter,
            config,
            parallelism,
        }
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn target(&self) -> TargetId {
        self.target
    }
}

impl Renderer for CpuRenderer {
    fn init(&mut self, target: TargetId) {
        self.target = target;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.buffer.resize(width, height);
    }

    fn render(&mut self) -> bool {
        if !self.target.is_set() || self.buffer.is_empty() {
            debug!(
                "render skipped: target {:?}, size {}x{}",
                self.target,
                self.buffer.width(),
                self.buffer.height()
            );
            return false;
        }

        let Some(source) = &self.source else {
            debug!("render skipped: no settings source");
            return false;
        };

        let settings = source.settings();
        let start = Instant::now();
        render_frame(&mut self.buffer, &settings, &self.config, self.parallelism);
        trace!(
            "rendered {} at {}x{} in {:?}",
            settings.fractal.kind,
            self.buffer.width(),
            self.buffer.height(),
            start.elapsed()
        );

        if let Err(error) = self.presenter.present(self.target, &self.buffer) {
            warn!("frame for target {:?} dropped: {}", self.target, error);
        }

        true
    }

    fn set_settings_source(&mut self, source: Arc<dyn SettingsSource>) {
        self.source = Some(source);
    }
}
