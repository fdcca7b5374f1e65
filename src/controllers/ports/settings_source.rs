use crate::core::settings::render_settings::RenderSettings;
use std::sync::{Mutex, PoisonError};

/// Anything that can hand a renderer a complete, committed settings snapshot.
pub trait SettingsSource: Send + Sync {
    fn settings(&self) -> RenderSettings;
}

impl SettingsSource for RenderSettings {
    fn settings(&self) -> RenderSettings {
        *self
    }
}

impl<S: SettingsSource> SettingsSource for Mutex<S> {
    fn settings(&self) -> RenderSettings {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .settings()
    }
}
