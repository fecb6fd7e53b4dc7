use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Base name probed in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "central";

/// Prefix for environment overrides (`CENTRAL__CODEC__PRETTY=true`).
pub const ENV_PREFIX: &str = "CENTRAL";

/// Custom error type for config loading.
#[central_derive::central_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: with `Some(path)` the file must exist; its format follows the
///    extension (`toml`, `json`, `yaml`, ...). With `None`, a `central.*` file in the
///    working directory is used if present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `CENTRAL__`, nested with double
///    underscores (`CENTRAL__LOGGING__LEVEL` maps to `logging.level`).
///
/// Missing keys fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or unreadable, or if
/// the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use central_kernel::config::load_config;
/// use central_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.logging.console);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, None)
}

/// Same layering as [`load_config`], with overrides read from `vars` instead of the
/// process environment. Keys keep their `CENTRAL__` form.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with_env<T, I, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: Map<String, String> = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    build(path, Some(vars))
}

fn build<T>(path: Option<impl AsRef<Path>>, vars: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        }
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(vars),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
