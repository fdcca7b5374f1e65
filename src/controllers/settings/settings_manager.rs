use crate::controllers::ports::settings_source::SettingsSource;
use crate::controllers::settings::observers::ObserverRegistry;
use crate::core::config::{StoreConfig, TypeSwitchPolicy};
use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::fractal_settings::FractalSettings;
use crate::core::settings::params::{
    JuliaParams, JuliabulbParams, MandelboxParams, MandelbulbParams,
};
use crate::core::settings::render_settings::{RenderSettings, StagedSettings};
use crate::core::settings::viewpoint::Viewpoint;
use log::{debug, trace};

/// Pending/committed staging of render settings.
///
/// Mutators only touch the pending slot and mark it dirty. [`Self::commit`]
/// publishes pending as the committed snapshot and then notifies observers, at most
/// once per batch of mutations. Rejected input (non-positive zoom, zero-sized resize,
/// rotation of a 2D view, ...) is a logged no-op and does not mark the slot dirty.
///
/// The store is single-writer: callers that share it across threads serialise
/// access themselves (see `FrameDriver`).
#[derive(Debug)]
pub struct SettingsManager<V: Viewpoint = CameraSettings> {
    pending: StagedSettings<V>,
    committed: StagedSettings<V>,
    need_commit: bool,
    config: StoreConfig,
    observers: ObserverRegistry,
}

impl<V: Viewpoint> SettingsManager<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FractalKind::default(), StoreConfig::default())
    }

    #[must_use]
    pub fn with_config(kind: FractalKind, config: StoreConfig) -> Self {
        let kind = if V::supports(kind) {
            kind
        } else {
            debug!(
                "{} needs a 3D camera, starting with {}",
                kind,
                FractalKind::default()
            );
            FractalKind::default()
        };
        let pending = StagedSettings::for_kind(kind);

        Self {
            committed: pending.clone(),
            pending,
            need_commit: false,
            config,
            observers: ObserverRegistry::default(),
        }
    }

    pub fn zoom(&mut self, factor: f64) {
        if self.pending.view.zoom(factor) {
            self.mark_dirty();
        } else {
            debug!("zoom rejected: factor {}", factor);
        }
    }

    /// Pans by `dx`/`dy` and, for cameras, lifts by `dz`. Offsets are relative to the
    /// current zoom level.
    pub fn move_view(&mut self, dx: f64, dy: f64, dz: f64) {
        if self.pending.view.translate(dx, dy, dz) {
            self.mark_dirty();
        } else {
            debug!("move rejected: ({}, {}, {})", dx, dy, dz);
        }
    }

    pub fn rotate_camera(&mut self, yaw: f64, pitch: f64) {
        if self.pending.fractal.kind.is_2d() {
            debug!("rotate ignored for 2D fractal {}", self.pending.fractal.kind);
            return;
        }

        if self.pending.view.rotate(yaw, pitch) {
            self.mark_dirty();
        } else {
            debug!("rotate rejected: yaw {} pitch {}", yaw, pitch);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("resize rejected: {}x{}", width, height);
            return;
        }

        let aspect = f64::from(width) / f64::from(height);
        if self.pending.view.set_aspect(aspect) {
            self.mark_dirty();
        }
    }

    /// Replaces the pending fractal settings and view with the defaults for `kind`.
    /// Kinds the view representation cannot frame are rejected.
    /// The current aspect carries over; whether the other variants' parameter blocks
    /// survive is decided by [`StoreConfig::type_switch`].
    pub fn set_fractal_type(&mut self, kind: FractalKind) {
        if !V::supports(kind) {
            debug!("fractal type rejected: {} needs a 3D camera", kind);
            return;
        }

        let aspect = self.pending.view.aspect();

        let fractal = match self.config.type_switch {
            TypeSwitchPolicy::ResetAll => FractalSettings::for_kind(kind),
            TypeSwitchPolicy::PreserveTuning => {
                self.pending.fractal.switched_preserving_tuning(kind)
            }
        };

        let mut view = V::default_for(kind);
        view.set_aspect(aspect);

        self.pending = StagedSettings { view, fractal };
        self.mark_dirty();
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        if max_iterations == 0 {
            debug!("max iterations rejected: must be at least 1");
            return;
        }

        self.pending.fractal.max_iterations = max_iterations;
        self.mark_dirty();
    }

    pub fn set_julia_params(&mut self, params: JuliaParams) {
        self.pending.fractal.julia = params;
        self.mark_dirty();
    }

    pub fn set_mandelbulb_params(&mut self, params: MandelbulbParams) {
        self.pending.fractal.mandelbulb = params;
        self.mark_dirty();
    }

    pub fn set_mandelbox_params(&mut self, params: MandelboxParams) {
        self.pending.fractal.mandelbox = params;
        self.mark_dirty();
    }

    pub fn set_juliabulb_params(&mut self, params: JuliabulbParams) {
        self.pending.fractal.juliabulb = params;
        self.mark_dirty();
    }

    /// Publishes pending as committed and runs every observer, in registration order,
    /// on the calling thread. Returns `false` without notifying when nothing changed.
    ///
    /// Observers must not call back into this store.
    pub fn commit(&mut self) -> bool {
        if !self.need_commit {
            return false;
        }

        self.committed = self.pending.clone();
        self.need_commit = false;

        trace!(
            "committed {} settings, notifying {} observer(s)",
            self.committed.fractal.kind,
            self.observers.len()
        );
        self.observers.notify_all();

        true
    }

    pub fn add_observer(&mut self, observer: impl Fn() + Send + Sync + 'static) {
        self.observers.add(Box::new(observer));
    }

    /// Snapshot of the committed settings. Never reflects uncommitted edits.
    #[must_use]
    pub fn get_settings(&self) -> RenderSettings {
        self.committed.to_render_settings()
    }

    #[must_use]
    pub fn committed(&self) -> &StagedSettings<V> {
        &self.committed
    }

    #[must_use]
    pub fn pending(&self) -> &StagedSettings<V> {
        &self.pending
    }

    #[must_use]
    pub fn needs_commit(&self) -> bool {
        self.need_commit
    }

    fn mark_dirty(&mut self) {
        self.need_commit = true;
    }
}

impl<V: Viewpoint> Default for SettingsManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Viewpoint> SettingsSource for SettingsManager<V> {
    fn settings(&self) -> RenderSettings {
        self.get_settings()
    }
}
