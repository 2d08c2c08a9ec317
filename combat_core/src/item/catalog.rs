//! Base item catalog - static item definitions loaded from TOML

use crate::config::ConfigError;
use crate::enchantment::EnchantmentType;
use crate::types::ItemType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// A base item definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub level: u32,
    /// Enchantments every instance of this base item carries
    #[serde(default)]
    pub passive_enchantments: Vec<EnchantmentType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BaseItemsConfig {
    #[serde(rename = "items")]
    items: Vec<BaseItem>,
}

/// Registry of base items by id
#[derive(Debug, Clone, Default)]
pub struct BaseItemCatalog {
    items: HashMap<String, BaseItem>,
}

impl BaseItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog from the bundled `base_items.toml`
    pub fn with_defaults() -> Self {
        let toml = include_str!("../../config/base_items.toml");
        parse_base_items(toml).unwrap_or_else(|error| {
            tracing::error!(%error, "bundled base item catalog failed to parse");
            Self::new()
        })
    }

    pub fn register(&mut self, item: BaseItem) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn get(&self, id: &str) -> Option<&BaseItem> {
        self.items.get(id)
    }

    /// Passive enchantments for a base item id (empty when unknown)
    pub fn passive_enchantments(&self, id: &str) -> &[EnchantmentType] {
        self.get(id)
            .map(|item| item.passive_enchantments.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn into_catalog(config: BaseItemsConfig) -> BaseItemCatalog {
    let mut catalog = BaseItemCatalog::new();
    for item in config.items {
        catalog.register(item);
    }
    catalog
}

/// Load a base item catalog from a TOML file
pub fn load_base_items(path: &Path) -> Result<BaseItemCatalog, ConfigError> {
    let config: BaseItemsConfig = crate::config::load_toml(path)?;
    Ok(into_catalog(config))
}

/// Load a base item catalog from a TOML string
pub fn parse_base_items(content: &str) -> Result<BaseItemCatalog, ConfigError> {
    let config: BaseItemsConfig = crate::config::parse_toml(content)?;
    Ok(into_catalog(config))
}

/// The bundled catalog, parsed once per process
pub fn default_catalog() -> &'static BaseItemCatalog {
    static CATALOG: OnceLock<BaseItemCatalog> = OnceLock::new();
    CATALOG.get_or_init(BaseItemCatalog::with_defaults)
}
