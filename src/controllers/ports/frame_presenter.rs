use crate::controllers::ports::renderer::TargetId;
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FramePresenter: Send + Sync {
    fn present(&self, target: TargetId, frame: &PixelBuffer) -> std::io::Result<()>;
}
