use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const EMBEDDED_GENERALS: &str = include_str!("../assets/generals.json5");

/// A hireable general as listed by the catalog. Read-only; adventures copy from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralArchetype {
    #[serde(rename = "type")]
    pub general_type: String,
    pub name: String,
    pub capacity: u32,
}

/// Source of general archetypes. Queried once at startup.
pub trait CatalogProvider {
    fn load_general_archetypes(&self) -> anyhow::Result<Vec<GeneralArchetype>>;
}

/// The catalog shipped with the editor.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl CatalogProvider for EmbeddedCatalog {
    fn load_general_archetypes(&self) -> anyhow::Result<Vec<GeneralArchetype>> {
        json5::from_str(EMBEDDED_GENERALS).context("parsing embedded generals catalog")
    }
}

impl CatalogProvider for Vec<GeneralArchetype> {
    fn load_general_archetypes(&self) -> anyhow::Result<Vec<GeneralArchetype>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    archetypes: Vec<GeneralArchetype>,
}

impl Catalog {
    pub fn load(provider: &dyn CatalogProvider) -> anyhow::Result<Arc<Catalog>> {
        let archetypes = provider.load_general_archetypes()?;
        tracing::info!("Loaded general catalog with {} entries", archetypes.len());
        Ok(Arc::new(Self { archetypes }))
    }

    pub fn from_archetypes(archetypes: Vec<GeneralArchetype>) -> Arc<Catalog> {
        Arc::new(Self { archetypes })
    }

    pub fn archetypes(&self) -> &[GeneralArchetype] {
        &self.archetypes
    }

    pub fn by_type(&self, general_type: &str) -> Option<&GeneralArchetype> {
        self.archetypes
            .iter()
            .find(|a| a.general_type == general_type)
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, EmbeddedCatalog};

    #[test]
    fn embedded_catalog_parses_with_unique_types() {
        let catalog = Catalog::load(&EmbeddedCatalog).unwrap();
        assert!(!catalog.archetypes().is_empty());
        for a in catalog.archetypes() {
            assert!(a.capacity > 0);
            assert_eq!(catalog.by_type(&a.general_type), Some(a));
        }
    }
}
