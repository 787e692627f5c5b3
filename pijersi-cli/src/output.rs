//! Setup shared by every command: configuration and output directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use pijersi_draw::GeneratorConfig;

/// Options resolved once from the global command line flags
#[derive(Clone, Debug)]
pub struct Session {
    pub config: GeneratorConfig,
    pub output: PathBuf,
    /// Board cell side in drawing units
    pub cell_size: f64,
}

impl Session {
    /// Load the configuration file if one is given, then create the output directory
    pub fn open(config: Option<&Path>, output: &Path, cell_size: f64) -> Result<Self> {
        let config = load_config(config)?;
        create_output_directory(output)?;

        Ok(Self {
            config,
            output: output.to_path_buf(),
            cell_size,
        })
    }

    /// Destination of a file stem inside the output directory
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output.join(format!("{}.svg", stem))
    }
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => {
            let config = GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

fn create_output_directory(output: &Path) -> Result<()> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}
