use std::path::PathBuf;
use std::time::Duration;

/// デフォルトの上映情報ページURL
pub const DEFAULT_SOURCE_URL: &str = "https://silverbirdcinemas.com/cinema/accra/";

#[derive(Debug, Clone)]
pub struct CinemaConfig {
    pub source_url: String,
    pub timeout: Duration,
    pub template_glob: String,
    pub assets_dir: PathBuf,
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(60),
            template_glob: "templates/**/*.html".to_string(),
            assets_dir: PathBuf::from("./assets"),
        }
    }
}

impl CinemaConfig {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_template_glob(mut self, glob: impl Into<String>) -> Self {
        self.template_glob = glob.into();
        self
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}
