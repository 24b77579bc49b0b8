mod file_config;

pub use file_config::{DatasetConfig, FileConfig};

use crate::dataset::{
    DatasetFiles, DEFAULT_CREDITS_FILE, DEFAULT_KEYWORDS_FILE, DEFAULT_MOVIES_FILE,
};
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub dataset: DatasetFiles,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        // A missing directory is reported by the batch run, on request.
        if data_dir.exists() && !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Unknown logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let dataset_file = file.dataset.unwrap_or_default();
        let dataset = DatasetFiles {
            movies: data_dir.join(
                dataset_file
                    .movies_file
                    .as_deref()
                    .unwrap_or(DEFAULT_MOVIES_FILE),
            ),
            credits: data_dir.join(
                dataset_file
                    .credits_file
                    .as_deref()
                    .unwrap_or(DEFAULT_CREDITS_FILE),
            ),
            keywords: data_dir.join(
                dataset_file
                    .keywords_file
                    .as_deref()
                    .unwrap_or(DEFAULT_KEYWORDS_FILE),
            ),
        };

        Ok(Self {
            data_dir,
            port,
            logging_level,
            frontend_dir_path,
            dataset,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_with_dir(dir: &TempDir) -> CliConfig {
        CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            port: 5000,
            logging_level: RequestsLoggingLevel::Path,
            frontend_dir_path: None,
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("Headers"),
            Some(RequestsLoggingLevel::Headers)
        ));
        assert!(matches!(
            parse_logging_level("body"),
            Some(RequestsLoggingLevel::Body)
        ));
        assert!(parse_logging_level("verbose").is_none());
    }

    #[test]
    fn cli_only() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with_dir(&dir);

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.port, 5000);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Path);
        assert_eq!(config.dataset.movies, dir.path().join(DEFAULT_MOVIES_FILE));
        assert_eq!(config.dataset.credits, dir.path().join(DEFAULT_CREDITS_FILE));
        assert_eq!(
            config.dataset.keywords,
            dir.path().join(DEFAULT_KEYWORDS_FILE)
        );
    }

    #[test]
    fn defaults_to_data_dir() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn toml_overrides_cli() {
        let cli_dir = TempDir::new().unwrap();
        let file_dir = TempDir::new().unwrap();
        let cli = cli_with_dir(&cli_dir);
        let file = FileConfig {
            data_dir: Some(file_dir.path().to_string_lossy().into_owned()),
            port: Some(8080),
            logging_level: Some("body".to_owned()),
            frontend_dir_path: Some("/srv/dashboard".to_owned()),
            dataset: Some(DatasetConfig {
                keywords_file: Some("kw.csv".to_owned()),
                ..Default::default()
            }),
        };

        let config = AppConfig::resolve(&cli, Some(file)).unwrap();

        assert_eq!(config.data_dir, file_dir.path());
        assert_eq!(config.port, 8080);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Body);
        assert_eq!(config.frontend_dir_path.as_deref(), Some("/srv/dashboard"));
        assert_eq!(config.dataset.keywords, file_dir.path().join("kw.csv"));
        assert_eq!(
            config.dataset.movies,
            file_dir.path().join(DEFAULT_MOVIES_FILE)
        );

        let server = config.server_config();
        assert_eq!(server.port, 8080);
        assert_eq!(server.requests_logging_level, RequestsLoggingLevel::Body);
    }

    #[test]
    fn rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let cli = cli_with_dir(&dir);

        let file = FileConfig {
            logging_level: Some("verbose".to_owned()),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, Some(file)).is_err());

        let not_a_dir = dir.path().join("movies.csv");
        std::fs::write(&not_a_dir, "id\n").unwrap();
        let cli = CliConfig {
            data_dir: Some(not_a_dir),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli, None).is_err());
    }
}
