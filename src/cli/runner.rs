//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server;
use crate::config::AppConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::loader::{self, LoadOutcome};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Effective configuration: file, then environment, then flags
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.cli.config.as_deref())?;
        if let Some(url) = &self.cli.api_url {
            config.api.base_url.clone_from(url);
            config.validate()?;
        }
        Ok(config)
    }

    /// Run the CLI command
    ///
    /// A loader failure has already been logged by the loader and only sets
    /// the exit code. Other errors are returned to the caller.
    pub async fn run(&self) -> Result<ExitCode> {
        let config = self.config()?;
        let start = Instant::now();

        match &self.cli.command {
            Commands::Albums { page } => {
                let client = client_for(&config)?;
                let url = page.to_url("albums")?;
                self.emit(loader::load_albums(&client, &url).await, start)
            }
            Commands::Tracks { page } => {
                let client = client_for(&config)?;
                let url = page.to_url("tracks")?;
                self.emit(loader::load_tracks(&client, &url).await, start)
            }
            Commands::Artists { page } => {
                let client = client_for(&config)?;
                let url = page.to_url("artists")?;
                self.emit(loader::load_artists(&client, &url).await, start)
            }
            Commands::Album { hash } => {
                let client = client_for(&config)?;
                self.emit(loader::load_album(&client, hash).await, start)
            }
            Commands::Track { hash } => {
                let client = client_for(&config)?;
                self.emit(loader::load_track(&client, hash).await, start)
            }
            Commands::Artist { hash } => {
                let client = client_for(&config)?;
                self.emit(loader::load_artist(&client, hash).await, start)
            }
            Commands::Serve { port } => {
                let port = port.unwrap_or(config.server.port);
                server::serve(&config, port).await?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Config => {
                self.print(&config)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Print a loaded view
    fn emit<V: Serialize>(&self, outcome: LoadOutcome<V>, start: Instant) -> Result<ExitCode> {
        match outcome {
            LoadOutcome::Loaded(view) => {
                info!("Loaded in {:?}", start.elapsed());
                self.print(&view)?;
                Ok(ExitCode::SUCCESS)
            }
            LoadOutcome::Failed(_) => Ok(ExitCode::FAILURE),
        }
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

fn client_for(config: &AppConfig) -> Result<HttpClient> {
    HttpClient::with_config(config.api.http_client_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_diagnostics;
    use clap::Parser;
    use std::io::Write;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_api_url_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: \"http://from-file:8000\"").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "tamaya-web",
            "-C",
            &config_path,
            "--api-url",
            "http://from-flag:8000",
            "config",
        ])
        .unwrap();

        let config = Runner::new(cli).config().unwrap();
        assert_eq!(config.api.base_url, "http://from-flag:8000");
    }

    #[test]
    fn test_invalid_api_url_flag_is_rejected() {
        let cli =
            Cli::try_parse_from(["tamaya-web", "--api-url", "nonsense", "config"]).unwrap();
        assert!(Runner::new(cli).config().is_err());
    }

    #[tokio::test]
    async fn test_loader_failure_sets_exit_code_and_logs_once() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/albums"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
            .mount(&backend)
            .await;

        let cli = Cli::try_parse_from(["tamaya-web", "--api-url", &backend.uri(), "albums"])
            .unwrap();

        let diagnostics = capture_diagnostics();
        let code = Runner::new(cli).run().await.unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(diagnostics.count(), 1);
    }

    #[tokio::test]
    async fn test_loaded_view_exits_successfully() {
        let backend = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/albums"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": []})))
            .expect(1)
            .mount(&backend)
            .await;

        let cli = Cli::try_parse_from([
            "tamaya-web",
            "--api-url",
            &backend.uri(),
            "albums",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(Runner::new(cli).run().await.unwrap(), ExitCode::SUCCESS);
    }
}
