//! Configuration resolution with hierarchical merge
//!
//! The `ConfigResolver` loads and merges configuration from multiple sources
//! in a defined hierarchy, with later sources overriding earlier ones key by
//! key.

use crate::Result;
use pattern_fs::{ConfigStore, NormalizedPath, StudioPath};
use pattern_meta::StudioConfig;
use std::path::PathBuf;

/// Resolves configuration by merging multiple sources
///
/// Configuration is loaded from a hierarchy of sources:
/// 1. Global defaults (`<config_dir>/pattern-studio/config.toml`)
/// 2. Project config (`.patterns/config.toml`)
/// 3. Local overrides (`.patterns/config.local.toml`)
///
/// Missing layers are skipped. Tables merge recursively; any other value in
/// a later layer replaces the earlier one.
pub struct ConfigResolver {
    root: NormalizedPath,

    /// Override for the global config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: NormalizedPath, global_config_dir: PathBuf) -> Self {
        Self {
            root,
            global_config_dir_override: Some(global_config_dir),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join("pattern-studio"))
    }

    /// Resolve the configuration by merging all layers.
    ///
    /// # Errors
    /// Invalid TOML in any layer, a value of the wrong type, or a merged
    /// configuration that fails [`StudioConfig::validate`].
    pub fn resolve(&self) -> Result<StudioConfig> {
        let mut merged = toml::Table::new();

        // Layer 1 - Global defaults
        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = NormalizedPath::new(global_dir.join("config.toml"));
            if global_config_path.is_file() {
                tracing::debug!(%global_config_path, "Loading global config (layer 1)");
                merge_tables(&mut merged, read_layer(&global_config_path)?);
            } else {
                tracing::debug!(%global_config_path, "No global config found (layer 1)");
            }
        }

        // Layer 2 - Project config
        let project_config_path = self.root.join(StudioPath::ConfigFile.as_str());
        if project_config_path.is_file() {
            tracing::debug!(%project_config_path, "Loading project config (layer 2)");
            merge_tables(&mut merged, read_layer(&project_config_path)?);
        }

        // Layer 3 - Local overrides
        let local_config_path = self.root.join(StudioPath::LocalConfigFile.as_str());
        if local_config_path.is_file() {
            tracing::debug!(%local_config_path, "Loading local config (layer 3)");
            merge_tables(&mut merged, read_layer(&local_config_path)?);
        }

        let config: StudioConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Check if a project configuration exists
    pub fn has_config(&self) -> bool {
        self.root.join(StudioPath::ConfigFile.as_str()).is_file()
    }

    /// Check if local overrides exist
    pub fn has_local_overrides(&self) -> bool {
        self.root.join(StudioPath::LocalConfigFile.as_str()).is_file()
    }
}

fn read_layer(path: &NormalizedPath) -> Result<toml::Table> {
    Ok(ConfigStore::new().load(path)?)
}

fn merge_tables(base: &mut toml::Table, layer: toml::Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pattern_meta::Mode;
    use std::fs;
    use tempfile::TempDir;

    fn resolver(temp: &TempDir) -> ConfigResolver {
        ConfigResolver::with_global_config_dir(
            NormalizedPath::new(temp.path().join("project")),
            temp.path().join("global"),
        )
    }

    fn write(path: PathBuf, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn resolve_returns_defaults_when_no_config_exists() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(&temp);

        assert!(!resolver.has_config());
        assert!(!resolver.has_local_overrides());
        assert_eq!(resolver.resolve().unwrap(), StudioConfig::default());
    }

    #[test]
    fn later_layers_override_field_by_field() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path().join("global/config.toml"),
            "[patterns]\ndirectory = \"global-patterns\"\n[query]\nper_page = 10\n",
        );
        write(
            temp.path().join("project/.patterns/config.toml"),
            "[core]\nmode = \"api\"\n[patterns]\nextension = \"html\"\n",
        );
        write(
            temp.path().join("project/.patterns/config.local.toml"),
            "[query]\nper_page = 5\n",
        );

        let resolver = resolver(&temp);
        assert!(resolver.has_config());
        assert!(resolver.has_local_overrides());

        let config = resolver.resolve().unwrap();
        assert_eq!(config.core.mode, Some(Mode::Api));
        assert_eq!(config.patterns.directory, "global-patterns");
        assert_eq!(config.patterns.extension, "html");
        assert_eq!(config.query.per_page, 5);
        assert!(config.import.auto_import);
    }

    #[test]
    fn invalid_toml_names_the_layer() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path().join("project/.patterns/config.toml"),
            "[core\nmode = ",
        );

        let err = resolver(&temp).resolve().unwrap_err();
        match err {
            Error::Fs(pattern_fs::Error::ConfigParse { path, .. }) => {
                assert!(path.ends_with(".patterns/config.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path().join("project/.patterns/config.toml"),
            "[query]\nper_page = 0\n",
        );
        assert!(matches!(
            resolver(&temp).resolve(),
            Err(Error::Meta(_))
        ));
    }

    #[test]
    fn merge_replaces_scalars_and_recurses_tables() {
        let mut base: toml::Table = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
        let layer: toml::Table = toml::from_str("a = 2\n[t]\ny = 3\n").unwrap();
        merge_tables(&mut base, layer);
        assert_eq!(base["a"].as_integer(), Some(2));
        assert_eq!(base["t"]["x"].as_integer(), Some(1));
        assert_eq!(base["t"]["y"].as_integer(), Some(3));
    }
}
