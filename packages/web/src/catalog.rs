//! Sample job catalog bundled with the web build.

use board_core::Catalog;

const JOBS_JSON: &str = include_str!("../assets/jobs.json");

/// Catalog shared with every page through context.
///
/// Holds the decode error text instead of the catalog when the bundled
/// payload is invalid, so pages can show it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog(pub Result<Catalog, String>);

pub fn load() -> LoadedCatalog {
    match Catalog::from_json(JOBS_JSON) {
        Ok(catalog) => {
            tracing::info!(jobs = catalog.len(), "Loaded job catalog");
            LoadedCatalog(Ok(catalog))
        }
        Err(e) => {
            tracing::error!("Failed to load job catalog: {}", e);
            LoadedCatalog(Err(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        let LoadedCatalog(result) = load();
        assert!(matches!(result, Ok(ref catalog) if !catalog.is_empty()));
    }
}
