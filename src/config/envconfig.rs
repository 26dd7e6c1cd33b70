use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Layered loading for config structs: `.env`, then `APP_`-prefixed
/// environment variables with `__` separating nested keys
/// (`APP_DATABASE__URL`, `APP_GENERAL__PORT`, ...).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        // Crate-root .env first, then whatever dotenvy finds from the cwd.
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let builder = config_rs::Config::builder().add_source(
            config_rs::Environment::with_prefix(Self::PREFIX)
                .prefix_separator("_")
                .separator(Self::SEPARATOR)
                .try_parsing(true),
        );
        Self::from_builder(builder)
    }

    /// Loads from a TOML document instead of the process environment.
    fn from_toml_str(raw: &str) -> Result<Self> {
        let builder = config_rs::Config::builder()
            .add_source(config_rs::File::from_str(raw, config_rs::FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config_rs::ConfigBuilder<config_rs::builder::DefaultState>,
    ) -> Result<Self> {
        let settings = builder
            .build()
            .context("failed to read config sources")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
