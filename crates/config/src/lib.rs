//! Layered settings for `bkconv`.
//!
//! Lowest to highest precedence:
//!
//! 1. built-in defaults,
//! 2. `config.{toml,yaml,json}` in the platform config directory,
//! 3. a file passed with `--config`,
//! 4. `BKCONV_`-prefixed environment variables, with `__` between nested
//!    keys (`BKCONV_CONVERT__RESTORE_AUTHOR=true`).

pub mod error;

use crate::error::{ErrorKind, Result};
use bkconv_convert::{MapOptions, SourceResolver, SourceTarget};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

const ENV_PREFIX: &str = "BKCONV_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing level when `RUST_LOG` isn't set.
    pub log_level: String,
    pub sources: SourcesConfig,
    pub convert: ConvertConfig,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            sources: SourcesConfig::default(),
            convert: ConvertConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Where entries without a source key end up.
    pub default: SourceTarget,
    /// Extra or replacement Kotatsu key mappings, checked before the
    /// built-in ones.
    pub overrides: BTreeMap<String, SourceTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub restore_author: bool,
}

impl Config {
    /// Load every layer, using the platform config directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user_dir = ProjectDirs::from("", "", "bkconv").map(|dirs| dirs.config_dir().to_path_buf());
        Self::load_from(user_dir.as_deref(), explicit)
    }

    /// Load every layer, looking for the user's files in `user_dir`.
    pub fn load_from(user_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(user_dir, explicit)?.extract().or_raise(|| ErrorKind::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn figment(user_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dir) = user_dir {
            tracing::debug!(dir = %dir.display(), "looking for user configuration");
            figment = figment
                .merge(Toml::file(dir.join("config.toml")))
                .merge(Yaml::file(dir.join("config.yaml")))
                .merge(Json::file(dir.join("config.json")));
        }
        if let Some(path) = explicit {
            figment = merge_explicit(figment, path)?;
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            exn::bail!(ErrorKind::Invalid(format!("unknown log level `{}`", self.log_level)));
        }
        let default = &self.sources.default;
        if default.name.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("default source name is empty".to_string()));
        }
        if default.lang.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("default source language is empty".to_string()));
        }
        for (key, target) in &self.sources.overrides {
            if key.is_empty() || target.name.trim().is_empty() {
                exn::bail!(ErrorKind::Invalid(format!("source override `{key}` needs a key and a name")));
            }
        }
        Ok(())
    }

    pub fn resolver(&self) -> SourceResolver {
        SourceResolver::with(self.sources.overrides.clone(), self.sources.default.clone())
    }

    pub fn map_options(&self) -> MapOptions {
        MapOptions { restore_author: self.convert.restore_author }
    }
}

fn merge_explicit(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.is_file() {
        exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
    }
    let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
    let figment = match extension.as_deref() {
        Some("toml") => figment.merge(Toml::file_exact(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => exn::bail!(ErrorKind::UnsupportedFormat(PathBuf::from(path))),
    };
    Ok(figment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    fn load(jail: &Jail, explicit: Option<&str>) -> Result<Config> {
        let user_dir = jail.directory().join("user");
        Config::load_from(Some(user_dir.as_path()), explicit.map(Path::new))
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            let config = load(jail, None).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.log_level, "info");
            assert_eq!(config.sources.default, SourceTarget::new("MangaDex", "all", 1));
            assert!(!config.convert.restore_author);
            Ok(())
        });
    }

    #[test]
    fn test_user_file() {
        Jail::expect_with(|jail| {
            std::fs::create_dir(jail.directory().join("user")).unwrap();
            jail.create_file(
                "user/config.toml",
                r#"
                log_level = "debug"

                [sources.overrides.MANGAKAKALOT]
                name = "Mangakakalot"
                lang = "en"
                "#,
            )?;
            let config = load(jail, None).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.sources.overrides["MANGAKAKALOT"], SourceTarget::new("Mangakakalot", "en", 1));
            Ok(())
        });
    }

    #[rstest]
    #[case("settings.toml", "[convert]\nrestore_author = true\n")]
    #[case("settings.yaml", "convert:\n  restore_author: true\n")]
    #[case("settings.yml", "convert:\n  restore_author: true\n")]
    #[case("settings.json", r#"{"convert": {"restore_author": true}}"#)]
    fn test_explicit_file_formats(#[case] name: &str, #[case] contents: &str) {
        Jail::expect_with(|jail| {
            jail.create_file(name, contents)?;
            let config = load(jail, Some(name)).unwrap();
            assert!(config.map_options().restore_author);
            Ok(())
        });
    }

    #[test]
    fn test_precedence() {
        Jail::expect_with(|jail| {
            std::fs::create_dir(jail.directory().join("user")).unwrap();
            jail.create_file("user/config.toml", "log_level = \"warn\"\n[sources.default]\nname = \"User\"\nlang = \"en\"\n")?;
            jail.create_file("explicit.toml", "log_level = \"error\"\n")?;
            jail.set_env("BKCONV_LOG_LEVEL", "trace");
            jail.set_env("BKCONV_SOURCES__DEFAULT__LANG", "ja");
            let config = load(jail, Some("explicit.toml")).unwrap();
            assert_eq!(config.log_level, "trace");
            assert_eq!(config.sources.default, SourceTarget::new("User", "ja", 1));
            Ok(())
        });
    }

    #[test]
    fn test_resolver_uses_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file("c.toml", "[sources.overrides.MANGADEX]\nname = \"MangaDex\"\nlang = \"en\"\n")?;
            let config = load(jail, Some("c.toml")).unwrap();
            assert_eq!(config.resolver().resolve("MANGADEX").id, 2499283573021220255);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        Jail::expect_with(|jail| {
            let err = load(jail, Some("nope.toml")).unwrap_err();
            assert_eq!(*err, ErrorKind::NotFound(PathBuf::from("nope.toml")));
            Ok(())
        });
    }

    #[test]
    fn test_unsupported_format() {
        Jail::expect_with(|jail| {
            jail.create_file("config.ini", "log_level = debug")?;
            let err = load(jail, Some("config.ini")).unwrap_err();
            assert_eq!(*err, ErrorKind::UnsupportedFormat(PathBuf::from("config.ini")));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file() {
        Jail::expect_with(|jail| {
            jail.create_file("c.toml", "log_level = [")?;
            assert_eq!(*load(jail, Some("c.toml")).unwrap_err(), ErrorKind::Parse);
            Ok(())
        });
    }

    #[rstest]
    #[case("log_level = \"loud\"")]
    #[case("[sources.default]\nname = \"\"")]
    #[case("[sources.default]\nlang = \" \"")]
    #[case("[sources.overrides.X]\nname = \"\"\nlang = \"en\"")]
    fn test_validation(#[case] contents: &str) {
        Jail::expect_with(|jail| {
            jail.create_file("c.toml", contents)?;
            let err = load(jail, Some("c.toml")).unwrap_err();
            assert!(matches!(*err, ErrorKind::Invalid(_)));
            Ok(())
        });
    }
}
