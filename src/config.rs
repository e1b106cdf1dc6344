use anyhow::{anyhow, Result};
use url::Url;

use crate::data::{DataSource, FileSource, HttpSource};

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_url: String,
    pub data_file: Option<String>,
    pub out_path: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            data_file: None,
            out_path: "out/heatmap.html".to_string(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_url: std::env::var("HEATMAP_DATA_URL").unwrap_or(defaults.data_url),
            data_file: std::env::var("HEATMAP_DATA_FILE").ok().filter(|p| !p.trim().is_empty()),
            out_path: std::env::var("HEATMAP_OUT").unwrap_or(defaults.out_path),
            title: std::env::var("HEATMAP_TITLE").unwrap_or(defaults.title),
        }
    }

    /// A local file wins over the URL when both are configured.
    pub fn source(&self) -> Result<Box<dyn DataSource + Send + Sync>> {
        if let Some(path) = &self.data_file {
            return Ok(Box::new(FileSource::new(path)));
        }
        let url = Url::parse(&self.data_url)
            .map_err(|e| anyhow!("invalid HEATMAP_DATA_URL {:?}: {}", self.data_url, e))?;
        match url.scheme() {
            "http" | "https" => Ok(Box::new(HttpSource::new(url))),
            other => Err(anyhow!("unsupported scheme {:?} in HEATMAP_DATA_URL", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_reference_dataset() {
        let cfg = Config::default();
        assert_eq!(cfg.data_url, DEFAULT_DATA_URL);
        assert!(cfg.data_file.is_none());
        assert_eq!(cfg.out_path, "out/heatmap.html");
    }

    #[test]
    fn test_file_source_overrides_url() {
        let cfg = Config {
            data_file: Some("fixtures/temps.json".to_string()),
            ..Config::default()
        };
        let source = cfg.source().unwrap();
        assert_eq!(source.describe(), "file:fixtures/temps.json");
    }

    #[test]
    fn test_rejects_bad_url() {
        let cfg = Config {
            data_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(cfg.source().is_err());

        let cfg = Config {
            data_url: "ftp://example.com/data.json".to_string(),
            ..Config::default()
        };
        assert!(cfg.source().is_err());
    }
}
