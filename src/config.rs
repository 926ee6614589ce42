use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    film::FilmSettings,
    integrators::WhittedParams,
    math::Vec2,
    renderer::RenderSettings,
};

/// Run configuration for the renderer binary
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u16,
    /// Output height in pixels
    pub height: u16,
    /// Maximum mirror recursion depth
    pub max_depth: u32,
    /// Worker count, 0 picks the machine's logical core count
    pub threads: usize,
    pub use_single_render_thread: bool,
    /// Output image path
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 3,
            threads: 0,
            use_single_render_thread: false,
            output: PathBuf::from("glint.png"),
        }
    }
}

impl RenderConfig {
    /// Loads the configuration from a YAML file.
    ///
    /// A missing file yields the defaults; a malformed one is a startup
    /// error, surfaced before any rendering begins.
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            log::info!("No config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str(&std::fs::read_to_string(path)?)?;
        log::info!("Config loaded from '{}'", path.display());
        Ok(config)
    }

    pub fn film_settings(&self) -> FilmSettings {
        FilmSettings {
            res: Vec2::new(self.width, self.height),
            ..FilmSettings::default()
        }
    }

    pub fn whitted_params(&self) -> WhittedParams {
        WhittedParams {
            max_depth: self.max_depth,
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            threads: self.threads,
            use_single_render_thread: self.use_single_render_thread,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::RenderConfig;

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.threads, 0);
        assert_eq!(config.output, PathBuf::from("glint.png"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = RenderConfig::load(Path::new("does/not/exist.yaml")).unwrap();
        assert_eq!(config.width, RenderConfig::default().width);
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let config: RenderConfig = serde_yaml::from_str("width: 320\nmax_depth: 5\n").unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.max_depth, 5);
        // Unset fields keep their defaults
        assert_eq!(config.height, 480);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(serde_yaml::from_str::<RenderConfig>("width: [not a number]").is_err());
    }
}
