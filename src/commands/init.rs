//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::Lang;

/// Create `_config.yml` and an empty content root for every language.
///
/// An existing `_config.yml` is left alone.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    let config = if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
        SiteConfig::load(&config_path)?
    } else {
        let config = SiteConfig::default();
        let yaml = format!("# Blog configuration\n{}", serde_yaml::to_string(&config)?);
        fs::write(&config_path, yaml)?;
        config
    };

    let content_dir = target_dir.join(&config.content_dir);
    for lang in Lang::ALL {
        fs::create_dir_all(content_dir.join(lang.as_str()))?;
    }

    Ok(())
}
