//! YAML configuration.
//!
//! Every field has a default, so an empty file (or no file at all) builds
//! the stock showcase deck.
//!
//! ```yaml
//! output: showcase.pptx
//! typeface: Segoe UI
//! palette:
//!   accent-primary: "#00D4FF"
//!   background: "#101020"
//! properties:
//!   title: DeskBot AI Companion
//!   author: DeskBot Team
//! ```

use crate::common::{Error, RGBColor, Result};
use crate::ooxml::pptx::theme::DEFAULT_TYPEFACE;
use crate::ooxml::pptx::{DocumentProperties, MutableTheme};
use crate::theme::{Role, Theme};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "DeskBot_International_Presentation.pptx";
const THEME_NAME: &str = "DeskBot";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the deck is written
    pub output: PathBuf,
    /// Role overrides, `#RRGGBB` or `RRGGBB`
    pub palette: BTreeMap<Role, String>,
    pub properties: PropertiesConfig,
    /// Latin typeface of the theme's major and minor fonts
    pub typeface: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesConfig {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            title: Some("DeskBot AI Companion".to_string()),
            author: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            palette: BTreeMap::new(),
            properties: PropertiesConfig::default(),
            typeface: DEFAULT_TYPEFACE.to_string(),
        }
    }
}

impl Config {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config =
            serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            },
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reject unusable settings and warn about suspicious ones.
    pub fn validate(&self) -> Result<()> {
        if self.typeface.trim().is_empty() {
            return Err(Error::Config("typeface must not be empty".to_string()));
        }
        if !has_pptx_extension(&self.output) {
            warn!(
                "output path {} does not end in .pptx; PowerPoint may refuse to open it",
                self.output.display()
            );
        }
        Ok(())
    }

    /// The showcase palette with this config's overrides applied.
    pub fn theme(&self) -> Result<Theme> {
        let overrides = self
            .palette
            .iter()
            .map(|(role, hex)| Ok((*role, RGBColor::from_hex(hex)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Theme::showcase().with_overrides(overrides))
    }

    /// The theme part written into the package, derived from `palette`.
    pub fn package_theme(&self, palette: &Theme) -> MutableTheme {
        MutableTheme::from_palette(THEME_NAME, palette, &self.typeface)
    }

    pub fn document_properties(&self) -> DocumentProperties {
        let mut properties = DocumentProperties::new();
        if let Some(title) = &self.properties.title {
            properties = properties.title(title);
        }
        if let Some(author) = &self.properties.author {
            properties = properties.creator(author);
        }
        properties
    }
}

fn has_pptx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pptx"))
}
