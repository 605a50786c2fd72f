use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use canti_config::{self as cli, CONFIG_FILE_NAME, OutputFormat, TomlConfig};
use canti_core::RepositorySettings;

/// Settings after merging CLI flags, environment, `canti.toml` and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub repository: RepositorySettings,
    pub format: OutputFormat,
    /// The configuration file that contributed, if any.
    pub source: Option<PathBuf>,
}

/// A parsed configuration file together with its location.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: TomlConfig,
}

impl LoadedConfig {
    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Load an explicit `--config` file, or discover one.
///
/// Discovery looks for `./canti.toml`, then `<config_dir>/canti/canti.toml`.
pub(crate) fn load_config(global: &cli::GlobalArgs) -> Result<Option<LoadedConfig>> {
    let path = match &global.config {
        Some(path) => path.clone(),
        None => match discover() {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    let config = TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(Some(LoadedConfig { path, config }))
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("canti").join(CONFIG_FILE_NAME);
    user.is_file().then_some(user)
}

pub fn resolve(global: &cli::GlobalArgs, loaded: Option<&LoadedConfig>) -> Result<ResolvedConfig> {
    let toml = loaded.map(|l| &l.config);
    let profile = match (&global.profile, toml) {
        (Some(name), Some(config)) => Some(
            config
                .profile(name)
                .ok_or_else(|| anyhow!("Unknown profile `{name}`"))?,
        ),
        (Some(name), None) => {
            return Err(anyhow!(
                "Unknown profile `{name}`: no {CONFIG_FILE_NAME} was found"
            ));
        }
        (None, _) => None,
    };

    let from_file = |dir: &String| match loaded {
        Some(l) => l.base_dir().join(dir),
        None => PathBuf::from(dir),
    };
    let directory = global
        .dir
        .clone()
        .or_else(|| profile.and_then(|p| p.directory.as_ref()).map(from_file))
        .or_else(|| toml.and_then(|t| t.corpus.directory.as_ref()).map(from_file))
        .unwrap_or_else(|| PathBuf::from("."));

    let defaults = RepositorySettings::default();
    let words_file = profile
        .and_then(|p| p.words_file.clone())
        .or_else(|| toml.and_then(|t| t.corpus.words_file.clone()))
        .unwrap_or(defaults.words_file);

    let format = match global.format {
        Some(format) => format,
        None => match profile
            .and_then(|p| p.format.as_deref())
            .or_else(|| toml.and_then(|t| t.output.format.as_deref()))
        {
            Some(name) => cli::parse_format(name)
                .ok_or_else(|| anyhow!("Invalid output format `{name}` in configuration"))?,
            None => OutputFormat::Text,
        },
    };

    Ok(ResolvedConfig {
        repository: RepositorySettings {
            directory,
            words_file,
        },
        format,
        source: loaded.map(|l| l.path.clone()),
    })
}
