mod app;
mod convert;
mod messages;
mod panels;
mod states;

use std::path::{Path, PathBuf};

use anyhow::Context;
use pinmark_core::config::AnnotatorConfig;

const CONFIG_ENV: &str = "PINMARK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "pinmark.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Pinmark"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinmark",
        options,
        Box::new(|cc| Ok(Box::new(app::PinmarkApp::new(&cc.egui_ctx, config)))),
    )
}

/// Config from `$PINMARK_CONFIG`, else `./pinmark.toml` if present, else defaults.
fn load_config() -> AnnotatorConfig {
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(p) => PathBuf::from(p),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
        None => return AnnotatorConfig::default(),
    };

    match AnnotatorConfig::load(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
    {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("{e:#}; using defaults");
            AnnotatorConfig::default()
        }
    }
}
