//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. The user config file (`~/.config/mqlint/config.<ext>`)
//! 3. Project config found by walking up from the search root
//! 4. Explicit files (`--config`)
//! 5. `MQLINT_*` environment variables
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Project file names (in order of precedence, highest first):
//! - `mqlint.<ext>` in current directory or any parent
//! - `.mqlint.<ext>` in current directory or any parent
//!
//! Only the closest directory holding any config contributes. The walk
//! stops at a directory containing `.git`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use mqlint_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let run = config.run_configuration().unwrap();
//! println!("max problems: {}", run.max_problems);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::diagnostic::DiagnosticCode;
use crate::dialect::Dialect;
use crate::engine::{DEFAULT_MAX_PROBLEMS, RunConfiguration};
use crate::error::{ConfigError, ConfigResult, LintResult};

/// The configuration for mqlint.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and from `MQLINT_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Most diagnostics reported per document (default: 100).
    pub max_problems: Option<usize>,
    /// Dialect forced for every file, regardless of extension.
    pub dialect: Option<Dialect>,
    /// Dialect for files whose extension does not name one (`.mqh`, stdin).
    pub default_dialect: Option<Dialect>,
    /// Run the checkers at all.
    ///
    /// When `false` the CLI reports nothing and the MCP server drops every
    /// published diagnostic.
    pub validation_enabled: bool,
    /// Diagnostic codes never reported (e.g. `magic-number`).
    pub disabled_codes: Option<Vec<String>>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Applies to files read by the CLI and documents sent to the MCP
    /// server. Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            max_problems: None,
            dialect: None,
            default_dialect: None,
            validation_enabled: true,
            disabled_codes: None,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Build the per-run settings handed to the checkers.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::UnknownCode`](crate::error::LintError::UnknownCode)
    /// when `disabled_codes` names a code that does not exist.
    pub fn run_configuration(&self) -> LintResult<RunConfiguration> {
        let disabled = self
            .disabled_codes
            .iter()
            .flatten()
            .map(|tag| tag.parse::<DiagnosticCode>())
            .collect::<LintResult<Vec<_>>>()?;
        Ok(RunConfiguration::default()
            .with_max_problems(self.max_problems.unwrap_or(DEFAULT_MAX_PROBLEMS))
            .with_disabled(disabled))
    }

    /// Pick the dialect for a file.
    ///
    /// A forced `dialect` wins, then the file extension, then
    /// `default_dialect`, then MQL5.
    pub fn resolve_dialect(&self, path: Option<&Utf8Path>) -> Dialect {
        self.dialect
            .or_else(|| {
                path.and_then(Utf8Path::extension)
                    .and_then(Dialect::from_extension)
            })
            .or(self.default_dialect)
            .unwrap_or_default()
    }

    /// Effective input size limit, `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "mqlint";

/// Prefix for environment overrides (`MQLINT_MAX_PROBLEMS=20`).
const ENV_PREFIX: &str = "MQLINT_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/mqlint/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order after discovered files, later ones winning.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `MQLINT_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/mqlint/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // MQLINT_DIALECT=mql4, MQLINT_MAX_PROBLEMS=20, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            validation_enabled = config.validation_enabled,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns every match from the closest directory that has any,
    /// dotfiles before regular files (low to high precedence).
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let dotfiles = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!(".{APP_NAME}.{ext}")));
            let regular = CONFIG_EXTENSIONS
                .iter()
                .map(|ext| dir.join(format!("{APP_NAME}.{ext}")));
            let found: Vec<Utf8PathBuf> = dotfiles.chain(regular).filter(|p| p.is_file()).collect();

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config beside the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/mqlint/` on Linux, `~/Library/Application Support/mqlint/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn load_file(contents: &str, name: &str) -> Config {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();
        config
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.validation_enabled);
        assert!(!config.disable_input_limit);
        assert!(config.dialect.is_none());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validation_enabled);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let config = load_file(
            "log_level = \"debug\"\nlog_dir = \"/tmp/mqlint\"\nmax_problems = 7\n",
            "config.toml",
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_dir.as_deref().map(Utf8Path::as_str), Some("/tmp/mqlint"));
        assert_eq!(config.max_problems, Some(7));
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "max_problems = 10").unwrap();
        let over = tmp.path().join("override.toml");
        fs::write(&over, "max_problems = 20").unwrap();

        let base = Utf8PathBuf::try_from(base).unwrap();
        let over = Utf8PathBuf::try_from(over).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.max_problems, Some(20));
        assert_eq!(sources.primary_file(), Some(over.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("Experts").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".mqlint.toml"), "dialect = \"mql4\"").unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.dialect, Some(Dialect::Mql4));
        assert!(!sources.project_files.is_empty());
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".mqlint.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".mqlint.toml"), r#"log_level = "warn""#).unwrap();
        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!sources.project_files.is_empty());
        assert_eq!(sources.explicit_files.len(), 1);
    }

    #[test]
    fn dotfile_before_regular() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".mqlint.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("mqlint.toml"), r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join("mqlint.toml"), "max_problems = 3").unwrap();
        fs::write(child.join(".mqlint.toml"), r#"log_level = "error""#).unwrap();

        let child = Utf8PathBuf::try_from(child).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(config.max_problems.is_none());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn yaml_project_config_discovered() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("mqlint.yaml"),
            "default_dialect: mql4\ndisabled_codes: [magic-number]\n",
        )
        .unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.default_dialect, Some(Dialect::Mql4));
        assert_eq!(config.disabled_codes, Some(vec!["magic-number".to_string()]));
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_or_error_succeeds_with_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.json");
        fs::write(&config_path, r#"{"validation_enabled": false}"#).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load_or_error()
            .unwrap();
        assert!(!config.validation_enabled);
    }

    #[test]
    fn invalid_dialect_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "dialect = \"mql6\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("mqlint"));
        }
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let config = load_file(
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
            "config.toml",
        );
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn input_limit_defaults_to_five_mib() {
        assert_eq!(
            Config::default().input_limit(),
            Some(crate::DEFAULT_MAX_INPUT_BYTES)
        );
    }

    #[test]
    fn run_configuration_applies_cap_and_codes() {
        let config = Config {
            max_problems: Some(5),
            disabled_codes: Some(vec!["magic-number".into(), "deep-nesting".into()]),
            ..Config::default()
        };
        let run = config.run_configuration().unwrap();
        assert_eq!(run.max_problems, 5);
        assert_eq!(
            run.disabled_codes,
            [DiagnosticCode::MagicNumber, DiagnosticCode::DeepNesting]
        );
        assert_eq!(
            Config::default().run_configuration().unwrap().max_problems,
            DEFAULT_MAX_PROBLEMS
        );
    }

    #[test]
    fn run_configuration_rejects_unknown_codes() {
        let config = Config {
            disabled_codes: Some(vec!["no-such-code".into()]),
            ..Config::default()
        };
        let err = config.run_configuration().unwrap_err();
        assert!(matches!(err, LintError::UnknownCode { ref name, .. } if name == "no-such-code"));
    }

    #[test]
    fn dialect_resolution_order() {
        let mut config = Config::default();
        assert_eq!(config.resolve_dialect(None), Dialect::Mql5);
        assert_eq!(
            config.resolve_dialect(Some(Utf8Path::new("a.mq4"))),
            Dialect::Mql4
        );

        config.default_dialect = Some(Dialect::Mql4);
        assert_eq!(
            config.resolve_dialect(Some(Utf8Path::new("Include/a.mqh"))),
            Dialect::Mql4
        );
        assert_eq!(
            config.resolve_dialect(Some(Utf8Path::new("a.mq5"))),
            Dialect::Mql5
        );

        config.dialect = Some(Dialect::Mql5);
        assert_eq!(
            config.resolve_dialect(Some(Utf8Path::new("a.mq4"))),
            Dialect::Mql5
        );
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let yaml = "validation_enabled: false\nmax_problems: 12\ndialect: mql4\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.validation_enabled);
        assert_eq!(config.max_problems, Some(12));
        assert_eq!(config.dialect, Some(Dialect::Mql4));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "dialect = \"mql5\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: Test environment; mutex serializes env access across tests.
        unsafe {
            std::env::set_var("MQLINT_DIALECT", "mql4");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.dialect, Some(Dialect::Mql4));

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("MQLINT_DIALECT");
        }
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_disables_validation() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: Test environment; mutex serializes env access across tests.
        unsafe {
            std::env::set_var("MQLINT_VALIDATION_ENABLED", "false");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();

        assert!(!config.validation_enabled);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("MQLINT_VALIDATION_ENABLED");
        }
    }
}
