use anyhow::Context;
use bacteriaguard_core::config::AppConfig;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON config file on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> anyhow::Result<AppConfig> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read config {}", self.path.display()))?;
        serde_json::from_str(&text).with_context(|| {
            format!(
                "{} is not a valid config (`config init --force` rewrites it)",
                self.path.display()
            )
        })
    }

    /// Loads the config, falling back to defaults when the file does not exist yet.
    pub fn load_or_default(&self) -> anyhow::Result<AppConfig> {
        if !self.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(crate::defaults::default_app_config());
        }
        self.load()
    }

    /// Writes `cfg` next to the target and renames it into place, so readers
    /// never see a half-written file.
    pub fn save(&self, cfg: &AppConfig) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create config directory {}", dir.display()))?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("cannot stage config in {}", dir.display()))?;
        serde_json::to_writer_pretty(staged.as_file_mut(), cfg).context("encode config")?;
        staged.as_file_mut().write_all(b"\n")?;

        staged
            .persist(&self.path)
            .with_context(|| format!("cannot replace config {}", self.path.display()))?;
        log::debug!("saved config to {}", self.path.display());
        Ok(())
    }
}
