//! Configuration management for the secure Gmail skill
//!
//! Handles env file discovery, environment layering, and configuration loading.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result, SkillError};

/// Name of the env file looked up in the skill directory
pub const ENV_FILE_NAME: &str = ".env";

/// Overrides the fallback env file location
pub const ENV_FILE_OVERRIDE_VAR: &str = "OPENCLAW_ENV_FILE";

/// Where an env file was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvOrigin {
    /// `.env` next to the skill
    Local,

    /// User-level file, usually `~/.openclaw/.env`
    Fallback,
}

/// A discovered env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    pub path: PathBuf,
    pub origin: EnvOrigin,
}

/// Candidate env file locations
#[derive(Debug, Clone)]
pub struct EnvPaths {
    /// `<skill_dir>/.env`
    pub local: PathBuf,

    /// User-level fallback, if a home directory could be resolved
    pub fallback: Option<PathBuf>,
}

impl EnvPaths {
    /// Build the candidate paths for a skill directory
    pub fn for_skill_dir(skill_dir: &Path) -> Self {
        let fallback = match fallback_env_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("No fallback env file location: {}", e);
                None
            }
        };

        Self {
            local: skill_dir.join(ENV_FILE_NAME),
            fallback,
        }
    }

    /// Find the env file to load. The local file always wins.
    pub fn locate(&self) -> Option<EnvFile> {
        locate_env_file(&self.local, self.fallback.as_deref())
    }
}

/// Directory of the running executable, used as the default skill directory
pub fn default_skill_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        SkillError::Config(ConfigError::InvalidConfig {
            message: format!("executable has no parent directory: {}", exe.display()),
        })
    })
}

/// User-level env file: `$OPENCLAW_ENV_FILE` or `~/.openclaw/.env`
pub fn fallback_env_path() -> Result<PathBuf> {
    resolve_fallback_env_path(std::env::var_os(ENV_FILE_OVERRIDE_VAR), dirs::home_dir())
}

/// Pick the fallback env file from an override value and a home directory.
///
/// An empty override is ignored.
pub fn resolve_fallback_env_path(
    override_path: Option<OsString>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = home.ok_or(ConfigError::HomeNotFound)?;
    Ok(home.join(".openclaw").join(ENV_FILE_NAME))
}

/// Process variables that are valid UTF-8. Anything else cannot be a setting we read.
pub fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}

/// Pick the first existing env file. The fallback is not consulted when the local file exists.
pub fn locate_env_file(local: &Path, fallback: Option<&Path>) -> Option<EnvFile> {
    if local.is_file() {
        return Some(EnvFile {
            path: local.to_path_buf(),
            origin: EnvOrigin::Local,
        });
    }

    fallback.filter(|p| p.is_file()).map(|p| EnvFile {
        path: p.to_path_buf(),
        origin: EnvOrigin::Fallback,
    })
}

/// Parse a dotenv file into key/value pairs.
///
/// A missing file yields an empty map. Any other failure is reported.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let env_file_error = |e: dotenvy::Error| {
        SkillError::Config(ConfigError::EnvFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_error(e)),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(env_file_error)?;
        vars.insert(key, value);
    }

    Ok(vars)
}

/// Read-only snapshot of configuration variables.
///
/// Process variables override values from the env file. The process
/// environment itself is never modified.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    paths: EnvPaths,
    source: Option<EnvFile>,
}

impl Environment {
    /// Discover and load the env file for `skill_dir`, then layer the process environment on top
    pub fn load(skill_dir: &Path) -> Result<Self> {
        let paths = EnvPaths::for_skill_dir(skill_dir);
        Self::load_from(paths, process_vars())
    }

    /// Same as [`Environment::load`] with explicit paths and process variables
    pub fn load_from<I>(paths: EnvPaths, process_vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let source = paths.locate();

        let file_vars = match &source {
            Some(file) => {
                let vars = load_env_file(&file.path)?;
                tracing::info!(
                    "Loaded {} variables from {:?} env file {}",
                    vars.len(),
                    file.origin,
                    file.path.display()
                );
                vars
            }
            None => {
                tracing::debug!("No env file found; using process environment only");
                HashMap::new()
            }
        };

        Ok(Self::from_parts(paths, source, file_vars, process_vars))
    }

    /// Build an environment from already-loaded parts
    pub fn from_parts<I>(
        paths: EnvPaths,
        source: Option<EnvFile>,
        file_vars: HashMap<String, String>,
        process_vars: I,
    ) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = file_vars;
        vars.extend(process_vars);

        Self {
            vars,
            paths,
            source,
        }
    }

    /// Look up a variable
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// The env file that was loaded, if any
    pub fn source(&self) -> Option<&EnvFile> {
        self.source.as_ref()
    }
}

/// Composio API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration for the secure Gmail skill
#[derive(Debug, Clone)]
pub struct Config {
    /// Composio API key
    pub api_key: ApiKey,

    /// Composio backend base URL, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Resolve configuration, failing closed when the API key is absent
    pub fn from_environment(env: &Environment) -> Result<Self> {
        let api_key = env
            .get(composio::API_KEY_VAR)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                var: composio::API_KEY_VAR.to_string(),
                local: env.paths.local.display().to_string(),
                fallback: env
                    .paths
                    .fallback
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "~/.openclaw/.env".to_string()),
            })?;

        let base_url = env
            .get(composio::BASE_URL_VAR)
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(composio::DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env
            .get(composio::TIMEOUT_VAR)
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(composio::DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key: ApiKey::new(api_key),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Composio API constants
pub mod composio {
    /// Required credential
    pub const API_KEY_VAR: &str = "COMPOSIO_API_KEY";

    /// Optional backend override
    pub const BASE_URL_VAR: &str = "COMPOSIO_BASE_URL";

    /// Optional request timeout in seconds
    pub const TIMEOUT_VAR: &str = "COMPOSIO_TIMEOUT_SECS";

    /// Hosted Composio backend
    pub const DEFAULT_BASE_URL: &str = "https://backend.composio.dev";

    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "x-api-key";
}
