use fractal_engine::{
    BackendKind, FractalKind, FrameCadence, FrameDriver, PpmFilePresenter, RenderConfig,
    SettingsManager, StoreConfig, TargetId, create_renderer,
};
use log::info;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const OUTPUT_DIR: &str = "output";
const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    render_all(Path::new(OUTPUT_DIR), WIDTH, HEIGHT)
}

/// Renders one still of every fractal kind at its default view into `dir`.
fn render_all(dir: &Path, width: u32, height: u32) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let backend = BackendKind::probe();

    for &kind in FractalKind::ALL {
        let path = dir.join(format!("{}.ppm", file_stem(kind)));
        let presenter = Arc::new(PpmFilePresenter::new(&path));
        let renderer = create_renderer(backend, presenter, RenderConfig::default());
        let store: SettingsManager = SettingsManager::with_config(kind, StoreConfig::default());

        let mut driver = FrameDriver::new(store, renderer, FrameCadence::default());
        driver.init(TargetId(1));
        driver.resize(width, height);

        if driver.tick().rendered {
            info!("{} -> {}", kind, path.display());
        } else {
            return Err(format!("{} did not render", kind).into());
        }
    }

    Ok(())
}

fn file_stem(kind: FractalKind) -> String {
    kind.display_name().to_lowercase().replace(' ', "_")
}
