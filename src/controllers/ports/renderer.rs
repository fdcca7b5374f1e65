use crate::controllers::ports::settings_source::SettingsSource;
use std::sync::Arc;

/// Opaque handle of a presentation surface. Zero means no surface is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetId(pub u32);

impl TargetId {
    pub const UNSET: Self = Self(0);

    #[must_use]
    pub fn is_set(self) -> bool {
        self != Self::UNSET
    }
}

/// A rendering backend. Backends are interchangeable: the same settings and
/// image size give the same frame.
pub trait Renderer: Send {
    fn init(&mut self, target: TargetId);

    fn resize(&mut self, width: u32, height: u32);

    /// Renders the source's current settings and presents the frame. Does nothing
    /// and returns `false` until a target, a non-empty size and a source are all set.
    fn render(&mut self) -> bool;

    fn set_settings_source(&mut self, source: Arc<dyn SettingsSource>);
}
