//! Settings resolution: flags, environment, then the config file.
//!
//! The config file is plain text with one `name value` pair per line, where
//! `name` is a long flag name:
//!
//! ```text
//! # ~/.config/readerctl/config
//! api-token abc123
//! debug true
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use tracing::debug;

use readwise_reader::{ApiToken, BaseUrl, Client, ClientConfig, DumpTarget};

use crate::cli::GlobalArgs;

/// Values read from a config file.
#[derive(Debug, Default, PartialEq)]
pub struct FileConfig {
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub debug: Option<bool>,
}

impl FileConfig {
    /// Load a config file; a missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file {}", path.display()));
            }
        };

        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config file contents.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, value) = match line.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (line, ""),
            };
            let line_no = index + 1;

            match name.trim_start_matches('-') {
                "api-token" | "t" => config.api_token = Some(value.to_string()),
                "base-url" => config.base_url = Some(value.to_string()),
                "debug" => config.debug = Some(parse_bool(value, line_no)?),
                "config" | "c" => {}
                other => bail!("unknown option {other:?} on line {line_no}"),
            }
        }

        Ok(config)
    }
}

fn parse_bool(value: &str, line_no: usize) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => bail!("invalid boolean {value:?} on line {line_no}"),
    }
}

/// Flag (or env) token first, then the config file; blank values don't count.
fn pick_token(flag: Option<String>, file: Option<String>) -> Option<String> {
    flag.into_iter()
        .chain(file)
        .find(|token| !token.trim().is_empty())
}

/// Default config path, `<user config dir>/readerctl/config`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "readerctl").map(|dirs| dirs.config_dir().join("config"))
}

/// No API token was found in any source.
#[derive(Debug)]
pub struct MissingToken;

impl fmt::Display for MissingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("api token is required (use --api-token, READERCTL_API_TOKEN or the config file)")
    }
}

impl std::error::Error for MissingToken {}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub struct Settings {
    pub api_token: ApiToken,
    pub base_url: BaseUrl,
    pub debug: bool,
}

impl Settings {
    /// Resolve settings from parsed flags (which already include env vars)
    /// and the config file.
    pub fn resolve(args: &GlobalArgs) -> Result<Self> {
        let path = args.config.clone().or_else(default_config_path);
        let file = match &path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Self::merge(args, file)
    }

    fn merge(args: &GlobalArgs, file: FileConfig) -> Result<Self> {
        let token = pick_token(args.api_token.clone(), file.api_token).ok_or(MissingToken)?;

        let base_url = match args.base_url.clone().or(file.base_url) {
            Some(url) => BaseUrl::new(&url).context("Invalid base URL")?,
            None => BaseUrl::default(),
        };

        Ok(Self {
            api_token: ApiToken::new(token).context("Invalid API token")?,
            base_url,
            debug: args.debug || file.debug.unwrap_or(false),
        })
    }

    /// Build a library client from these settings.
    pub fn client(&self) -> Result<Client> {
        let dump = if self.debug {
            DumpTarget::Stderr
        } else {
            DumpTarget::Off
        };
        let config = ClientConfig::builder()
            .base_url(self.base_url.clone())
            .user_agent(concat!("readerctl/", env!("CARGO_PKG_VERSION")))
            .dump(dump)
            .build();

        Client::with_config(self.api_token.clone(), config).context("Failed to create client")
    }
}
