//! Catalog and order history loading.
//!
//! Both are JSON files under the content directory, read once at startup:
//!
//! ```text
//! content/
//! ├── catalog.json   # [Product]
//! └── orders.json    # [Order]
//! ```
//!
//! A missing file falls back to the copy compiled into the binary, so the
//! storefront runs from any working directory.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use fungi_fresh_core::{Catalog, CatalogError, Order, Product};

const BUILTIN_CATALOG: &str = include_str!("../content/catalog.json");
const BUILTIN_ORDERS: &str = include_str!("../content/orders.json");

/// Errors that can occur while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Load the product catalog from `content_dir/catalog.json`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// two products share an id.
pub fn load_catalog(content_dir: &Path) -> Result<Catalog, ContentError> {
    let products: Vec<Product> = load_json(&content_dir.join("catalog.json"), BUILTIN_CATALOG)?;
    tracing::info!(products = products.len(), "Loaded catalog");
    Ok(Catalog::new(products)?)
}

/// Load the mock order history from `content_dir/orders.json`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_orders(content_dir: &Path) -> Result<Vec<Order>, ContentError> {
    let orders: Vec<Order> = load_json(&content_dir.join("orders.json"), BUILTIN_ORDERS)?;
    tracing::info!(orders = orders.len(), "Loaded order history");
    Ok(orders)
}

/// The catalog compiled into the binary.
///
/// # Errors
///
/// Returns an error only if the embedded file is malformed.
pub fn builtin_catalog() -> Result<Catalog, ContentError> {
    let products: Vec<Product> = parse_json("built-in catalog", BUILTIN_CATALOG)?;
    Ok(Catalog::new(products)?)
}

/// The order history compiled into the binary.
///
/// # Errors
///
/// Returns an error only if the embedded file is malformed.
pub fn builtin_orders() -> Result<Vec<Order>, ContentError> {
    parse_json("built-in orders", BUILTIN_ORDERS)
}

fn load_json<T: DeserializeOwned>(path: &Path, fallback: &str) -> Result<T, ContentError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_json(&path.display().to_string(), &raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Content file {:?} not found, using built-in copy", path);
            parse_json(&format!("built-in {}", path.display()), fallback)
        }
        Err(source) => Err(ContentError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json<T: DeserializeOwned>(origin: &str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use fungi_fresh_core::{OrderStatus, Price, ProductId};

    use super::*;

    #[test]
    fn test_builtin_catalog_has_farm_products() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 6);

        let button = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(button.name, "Button Mushroom");
        assert_eq!(button.price, Price::new(180));

        let shiitake = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(shiitake.price, Price::new(150));
    }

    #[test]
    fn test_builtin_orders() {
        let orders = builtin_orders().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id.as_str(), "FF-9021");
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[0].display_date(), "Oct 12, 2023");
    }

    #[test]
    fn test_missing_directory_uses_builtin() {
        let dir = std::env::temp_dir().join("fungi-fresh-no-such-content");
        let catalog = load_catalog(&dir).unwrap();
        assert_eq!(catalog, builtin_catalog().unwrap());
        assert_eq!(load_orders(&dir).unwrap().len(), 2);
    }

    #[test]
    fn test_files_override_builtin() {
        let dir = std::env::temp_dir().join(format!("fungi-fresh-content-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("catalog.json"),
            r#"[{"id": 9, "name": "Lion's Mane", "price": 400, "image_url": "", "description": ""}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&dir).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(9)).unwrap().name, "Lion's Mane");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("fungi-fresh-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("orders.json"), "{ not json").unwrap();

        assert!(matches!(
            load_orders(&dir),
            Err(ContentError::Parse { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result: Result<Vec<Product>, _> = parse_json(
            "test",
            r#"[
                {"id": 1, "name": "A", "price": 1, "image_url": "", "description": ""},
                {"id": 1, "name": "B", "price": 2, "image_url": "", "description": ""}
            ]"#,
        );
        let err = Catalog::new(result.unwrap()).map_err(ContentError::from).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 1"));
    }
}
