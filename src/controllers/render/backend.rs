use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::ports::renderer::Renderer;
use crate::controllers::render::cpu_renderer::CpuRenderer;
use crate::core::actions::generate_fractal::render_frame::Parallelism;
use crate::core::config::RenderConfig;
use log::info;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    CpuParallel,
    CpuSerial,
}

impl BackendKind {
    /// Picks the parallel CPU backend when the host offers more than one hardware thread.
    #[must_use]
    pub fn probe() -> Self {
        let threads = thread::available_parallelism().map_or(1, NonZeroUsize::get);

        Self::for_thread_count(threads)
    }

    #[must_use]
    pub fn for_thread_count(threads: usize) -> Self {
        if threads > 1 {
            Self::CpuParallel
        } else {
            Self::CpuSerial
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CpuParallel => "CPU (rayon)",
            Self::CpuSerial => "CPU (single thread)",
        }
    }

    #[must_use]
    pub const fn parallelism(self) -> Parallelism {
        match self {
            Self::CpuParallel => Parallelism::Rayon,
            Self::CpuSerial => Parallelism::Serial,
        }
    }
}

pub fn create_renderer(
    kind: BackendKind,
    presenter: Arc<dyn FramePresenter>,
    config: RenderConfig,
) -> Box<dyn Renderer> {
    info!("using {} renderer", kind.display_name());

    Box::new(CpuRenderer::new(presenter, config, kind.parallelism()))
}
