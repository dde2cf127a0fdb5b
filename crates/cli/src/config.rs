use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "KINSHIP_CONFIG";

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tree: Option<PathBuf>,
    pub names: Option<PathBuf>,
    pub simplify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tree: None,
            names: None,
            simplify: default_simplify(),
        }
    }
}

fn default_simplify() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    tree: Option<PathBuf>,
    names: Option<PathBuf>,
    simplify: Option<bool>,
}

impl Settings {
    /// Reads `explicit`, or the file named by `KINSHIP_CONFIG`, or nothing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => env::var(CONFIG_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        };
        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Relative paths inside the file resolve against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let raw: RawConfig = toml::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        log::debug!("Loaded config from {}", path.display());

        Ok(Self {
            tree: raw.tree.map(|tree| base.join(tree)),
            names: raw.names.map(|names| base.join(names)),
            simplify: raw.simplify.unwrap_or_else(default_simplify),
        })
    }

    pub fn with_overrides(mut self, tree: Option<PathBuf>, names: Option<PathBuf>) -> Self {
        if tree.is_some() {
            self.tree = tree;
        }
        if names.is_some() {
            self.names = names;
        }
        self
    }

    pub fn tree(&self) -> Result<&Path> {
        self.tree
            .as_deref()
            .ok_or_else(|| anyhow!("No family tree given: pass --tree or set `tree` in the config"))
    }
}
