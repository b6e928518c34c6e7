use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use stepform::document::{standard_steps, STANDARD_TITLES};
use stepform::{ChoiceGroup, FormDocument, LayoutError};
use tracing::warn;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Labels shown by the form. Missing step titles fall back to the
/// standard ones.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub step_titles: Vec<String>,
    pub services: Vec<String>,
    pub budgets: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Contact request".into(),
            step_titles: STANDARD_TITLES.iter().map(|t| t.to_string()).collect(),
            services: vec![
                "Development".into(),
                "Web Design".into(),
                "Marketing".into(),
                "Other".into(),
            ],
            budgets: vec![
                "$5.000 - $10.000".into(),
                "$10.000 - $20.000".into(),
                "$20.000 - $50.000".into(),
                "$50.000 +".into(),
            ],
        }
    }
}

impl FormConfig {
    /// Build the four-step document from the configured labels.
    pub fn document(&self) -> Result<FormDocument, LayoutError> {
        standard_steps()
            .into_iter()
            .enumerate()
            .fold(FormDocument::builder(), |builder, (i, items)| {
                let title = self
                    .step_titles
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| STANDARD_TITLES[i].to_string());
                builder.step(title, items)
            })
            .options(ChoiceGroup::Services, self.services.iter().cloned())
            .options(ChoiceGroup::Budget, self.budgets.iter().cloned())
            .build()
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate: f64,
    pub frame_rate: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: 4.0,
            frame_rate: 30.0,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from(&get_config_dir(), &get_data_dir())
    }

    fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            warn!("No configuration file found, using built-in labels");
        }

        builder.build()?.try_deserialize()
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stepform", env!("CARGO_PKG_NAME"))
}

pub fn ensure_data_and_config_dirs_exist() -> std::io::Result<()> {
    let data_dir = get_data_dir();
    let config_dir = get_config_dir();

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(())
}
