//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::content::Lang;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub site_name: String,
    /// Default social preview image, relative to `url`
    pub image: String,
    /// Home-page description per language
    pub descriptions: BTreeMap<Lang, String>,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Document filename inside each post directory
    pub document: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let descriptions = BTreeMap::from([
            (
                Lang::En,
                "I'm Doğan, a software engineer passionate about front-end development, \
                 JavaScript and Node.js. On my blog, I share my expertise and experiences \
                 in tech, as well as my interests in role-playing games, computer games, \
                 sci-fi and more."
                    .to_string(),
            ),
            (
                Lang::Tr,
                "Ben Doğan, front-end geliştirme, JavaScript ve Node.js tutkusu olan bir \
                 yazılım mühendisiyim. Blogumda teknoloji alanındaki uzmanlığımı ve \
                 deneyimlerimi, ayrıca rol yapma oyunları, bilgisayar oyunları, bilim kurgu \
                 ve daha fazlasına olan ilgimi paylaşıyorum."
                    .to_string(),
            ),
        ]);

        Self {
            title: "Doğan Öztürk | Blog".to_string(),
            author: "Doğan Öztürk".to_string(),
            site_name: "doganozturk.dev".to_string(),
            image: "/images/avatar.jpg".to_string(),
            descriptions,

            url: "https://doganozturk.dev".to_string(),

            content_dir: "content/posts".to_string(),
            public_dir: "out".to_string(),
            document: crate::content::loader::DEFAULT_DOCUMENT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Home-page description for a language (empty if not configured)
    pub fn description(&self, lang: Lang) -> &str {
        self.descriptions.get(&lang).map(String::as_str).unwrap_or("")
    }
}
