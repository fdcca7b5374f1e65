use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::ports::renderer::TargetId;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Keeps a copy of the last presented frame for hosts that pull frames
/// instead of being pushed them.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    latest: Mutex<Option<(TargetId, PixelBuffer)>>,
    presented: AtomicU64,
}

impl LatestFramePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<PixelBuffer> {
        self.lock()
            .as_ref()
            .map(|(_, frame)| frame.clone())
    }

    #[must_use]
    pub fn latest_target(&self) -> Option<TargetId> {
        self.lock().as_ref().map(|(target, _)| *target)
    }

    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented.load(Ordering::Acquire)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<(TargetId, PixelBuffer)>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FramePresenter for LatestFramePresenter {
    fn present(&self, target: TargetId, frame: &PixelBuffer) -> std::io::Result<()> {
        let mut latest = self.lock();
        match latest.as_mut() {
            // reuse the allocation when the size is unchanged
            Some((stored_target, stored))
                if stored.width() == frame.width() && stored.height() == frame.height() =>
            {
                *stored_target = target;
                stored.pixels_mut().copy_from_slice(frame.pixels());
            }
            _ => *latest = Some((target, frame.clone())),
        }
        drop(latest);

        self.presented.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
