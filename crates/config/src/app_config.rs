// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path, ConfigLocation};
use crate::validation::Modulus;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use gf2_field::Gf2Field;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{debug, Level};

pub const DEFAULT_CONFIG_NAME: &str = "gf2poly.config.yaml";
pub const ENV_PREFIX: &str = "GF2POLY_";

/// How results are printed
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn default_modulus() -> Modulus {
    // x^8 + x^4 + x^3 + x + 1
    Modulus::new(0x11b)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppConfig {
    /// The field modulus, GF(256) with the AES polynomial unless configured
    #[serde(default = "default_modulus")]
    modulus: Modulus,
    /// Default message degree bound for decoding
    #[serde(default)]
    degree_bound: Option<usize>,
    #[serde(default)]
    log_level: LogLevel,
    /// Reject reducible moduli. Interpolation and decoding require an irreducible one regardless
    #[serde(default = "default_true")]
    strict_modulus: bool,
    #[serde(default)]
    output: OutputFormat,
    /// The file this configuration was read from, if any
    #[serde(default)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            modulus: default_modulus(),
            degree_bound: None,
            log_level: LogLevel::default(),
            strict_modulus: true,
            output: OutputFormat::default(),
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn modulus(&self) -> u64 {
        self.modulus.value()
    }

    pub fn degree_bound(&self) -> Option<usize> {
        self.degree_bound
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn strict_modulus(&self) -> bool {
        self.strict_modulus
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Builds the configured field, checking irreducibility when `strict_modulus` is set.
    pub fn field(&self) -> Result<Gf2Field> {
        let modulus = self.modulus();
        let field = if self.strict_modulus {
            Gf2Field::new_irreducible(modulus)
        } else {
            Gf2Field::new(modulus)
        };
        field.with_context(|| format!("Invalid field modulus {}", self.modulus))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Could not serialize configuration")
    }
}

/// Value struct for passing configuration from the cli to the configuration
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulus: Option<Modulus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_bound: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

/// Value struct recording which file the configuration came from
#[derive(Serialize)]
struct FoundConfigFile {
    config_file: PathBuf,
}

/// Load the config at the config_file or the default location if not provided.
///
/// Precedence, lowest first: built-in defaults, the YAML file, `GF2POLY_*` environment
/// variables, then the command line.
pub fn load_config(config_file: Option<&Path>, overrides: CliOverrides) -> Result<AppConfig> {
    let location = resolve_config_path(
        find_in_parent,                  // finding strategy
        &env::current_dir()?,            // cwd
        OsDirs::config_dir().as_deref(), // default config folder
        DEFAULT_CONFIG_NAME,             // gf2poly.config.yaml
        config_file,                     // config file passed on the command line
    );

    let mut figment = Figment::from(Serialized::defaults(&AppConfig::default()));

    let source = match &location {
        ConfigLocation::Explicit(path) => {
            // An explicit file has to exist, surface the io error as is
            std::fs::metadata(path)?;
            Some(path)
        }
        ConfigLocation::Found(path) => Some(path),
        ConfigLocation::Default(path) if path.exists() => Some(path),
        ConfigLocation::Default(_) | ConfigLocation::None => None,
    };

    if let Some(path) = source {
        debug!(path = %path.display(), "Loading configuration file");
        figment = figment.merge(Yaml::file(path)).merge(Serialized::defaults(
            &FoundConfigFile {
                config_file: path.clone(),
            },
        ));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(&overrides))
        .extract()
        .context("Could not parse configuration")
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gf2poly"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            let home = format!("{}", jail.directory().to_string_lossy());
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));

            let config =
                load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;

            assert_eq!(config, AppConfig::default());
            assert_eq!(config.modulus(), 0x11b);
            assert_eq!(config.degree_bound(), None);
            assert_eq!(config.output(), OutputFormat::Plain);
            assert!(config.strict_modulus());
            assert_eq!(config.config_file(), None);

            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some(Path::new("/nope")), CliOverrides::default()) else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<std::io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        Ok(())
    }

    #[test]
    fn test_config() {
        Jail::expect_with(|jail| {
            let home = format!("{}", jail.directory().to_string_lossy());
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));

            let Some(expected_config_dir) = OsDirs::config_dir() else {
                return Ok(());
            };
            let filename = expected_config_dir.join(DEFAULT_CONFIG_NAME);
            jail.create_dir(&expected_config_dir)?;
            jail.create_file(
                filename.clone(),
                r#"
modulus: "0b1011"
degree_bound: 1
output: json
log_level: debug
"#,
            )?;

            let config =
                load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;

            assert_eq!(config.modulus(), 0b1011);
            assert_eq!(config.degree_bound(), Some(1));
            assert_eq!(config.output(), OutputFormat::Json);
            assert_eq!(config.log_level(), LogLevel::Debug);
            assert_eq!(config.config_file(), Some(filename.as_path()));
            let field = config.field().map_err(|e| e.to_string())?;
            assert_eq!(field.to_string(), "GF(2^3) mod 0xb");

            Ok(())
        });
    }

    #[test]
    fn test_config_found_in_parent() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "modulus: 283\nstrict_modulus: false\n")?;
            jail.create_dir("nested/deeper")?;
            jail.change_dir("nested/deeper")?;

            let config =
                load_config(None, CliOverrides::default()).map_err(|e| e.to_string())?;
            assert_eq!(config.modulus(), 283);
            assert!(!config.strict_modulus());
            assert!(config
                .config_file()
                .is_some_and(|p| p.ends_with(DEFAULT_CONFIG_NAME)));

            Ok(())
        });
    }

    #[test]
    fn test_config_env_vars_and_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.yaml", "modulus: 0x11d\ndegree_bound: 4\n")?;
            jail.set_env("GF2POLY_DEGREE_BOUND", "6");
            jail.set_env("GF2POLY_OUTPUT", "json");

            let config = load_config(Some(Path::new("custom.yaml")), CliOverrides::default())
                .map_err(|e| e.to_string())?;
            assert_eq!(config.modulus(), 0x11d);
            assert_eq!(config.degree_bound(), Some(6));
            assert_eq!(config.output(), OutputFormat::Json);

            let overrides = CliOverrides {
                modulus: Some(Modulus::new(0b1011)),
                degree_bound: Some(2),
                ..Default::default()
            };
            let config = load_config(Some(Path::new("custom.yaml")), overrides)
                .map_err(|e| e.to_string())?;
            assert_eq!(config.modulus(), 0b1011);
            assert_eq!(config.degree_bound(), Some(2));

            Ok(())
        });
    }

    #[test]
    fn test_reducible_modulus_rejected_when_strict() {
        let config = AppConfig {
            modulus: Modulus::new(0b101),
            ..Default::default()
        };
        assert!(config.field().is_err());

        let config = AppConfig {
            strict_modulus: false,
            ..config
        };
        assert!(config.field().is_ok());
    }
}
