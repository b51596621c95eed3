use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A promotional bundle as published in `promociones.json`.
///
/// Loaded once per session and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionRecord {
    pub id: String,
    pub nombre: String,
    pub marca: String,
    #[serde(default)]
    pub talles: Vec<String>,
    #[serde(default)]
    pub articulos: Vec<ArticleRecord>,
    /// Reference pricing, informational only.
    #[serde(default)]
    pub precios: Vec<PriceRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub codigo: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRef {
    pub label: String,
    pub valor: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("No se pudo cargar promociones desde /promociones.json: {message}")]
    Load { message: String },
    #[error("promociones.json inválido: {detail}")]
    Malformed { detail: String },
}

/// Validates and deserializes the raw catalog payload.
///
/// The payload must be a JSON array; anything else is `Malformed`. Each
/// element is checked against the `PromotionRecord` schema so a broken
/// record fails at load time rather than at first use.
pub fn parse_catalog(payload: &serde_json::Value) -> Result<Vec<PromotionRecord>, CatalogError> {
    let entries = payload.as_array().ok_or_else(|| CatalogError::Malformed {
        detail: "debe ser un array".to_string(),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry.clone()).map_err(|e| CatalogError::Malformed {
                detail: format!("registro {}: {}", i, e),
            })
        })
        .collect()
}

/// Looks up a promotion by id. `None` when no promotion is active or the id
/// is unknown.
pub fn find_promotion<'a>(
    catalog: &'a [PromotionRecord],
    id: Option<&str>,
) -> Option<&'a PromotionRecord> {
    let id = id?;
    catalog.iter().find(|p| p.id == id)
}
