//! Diacritic-insensitive substring search over the promotion catalog.

use crate::catalog::PromotionRecord;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases and strips combining diacritical marks (NFD decomposition),
/// so "ITUZAINGÓ" and "ituzaingo" compare equal.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn fuzzy_includes(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(needle)
}

/// True when the normalized query appears in the promotion name, brand, or
/// any article code or description.
pub fn promotion_matches(promo: &PromotionRecord, normalized_query: &str) -> bool {
    fuzzy_includes(&promo.nombre, normalized_query)
        || fuzzy_includes(&promo.marca, normalized_query)
        || promo.articulos.iter().any(|a| {
            fuzzy_includes(&a.codigo, normalized_query) || fuzzy_includes(&a.desc, normalized_query)
        })
}

/// Filters the catalog by a free-text query, preserving catalog order.
/// A blank query returns the whole catalog.
pub fn filter_catalog<'a>(
    catalog: &'a [PromotionRecord],
    query: &str,
) -> Vec<&'a PromotionRecord> {
    if query.trim().is_empty() {
        return catalog.iter().collect();
    }
    let needle = normalize(query);
    catalog
        .iter()
        .filter(|p| promotion_matches(p, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArticleRecord;

    fn promo(id: &str, nombre: &str, marca: &str, articulos: &[(&str, &str)]) -> PromotionRecord {
        PromotionRecord {
            id: id.to_string(),
            nombre: nombre.to_string(),
            marca: marca.to_string(),
            talles: vec![],
            articulos: articulos
                .iter()
                .map(|(codigo, desc)| ArticleRecord {
                    codigo: codigo.to_string(),
                    desc: desc.to_string(),
                })
                .collect(),
            precios: vec![],
        }
    }

    fn sample() -> Vec<PromotionRecord> {
        vec![
            promo("p1", "Promo Boxer", "Kaury", &[("03-3200", "Boxer algodón")]),
            promo("p2", "Camisón verano", "Sigry", &[("11-0001", "Camisón liso")]),
            promo("p3", "Medias pack", "Ituzaingó Textil", &[("77-9000", "Soquete")]),
        ]
    }

    #[test]
    fn blank_query_returns_full_catalog_in_order() {
        let catalog = sample();
        let ids: Vec<&str> = filter_catalog(&catalog, "   ")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn matches_name_brand_article_code_and_description() {
        let catalog = sample();
        assert_eq!(filter_catalog(&catalog, "boxer").len(), 1);
        assert_eq!(filter_catalog(&catalog, "KAURY").len(), 1);
        assert_eq!(filter_catalog(&catalog, "11-0001").len(), 1);
        assert_eq!(filter_catalog(&catalog, "soquete").len(), 1);
        assert!(filter_catalog(&catalog, "no-match").is_empty());
    }

    #[test]
    fn diacritics_are_ignored_on_both_sides() {
        let catalog = sample();
        let with = filter_catalog(&catalog, "ITUZAINGÓ");
        let without = filter_catalog(&catalog, "ITUZAINGO");
        assert_eq!(with, without);
        assert_eq!(with[0].id, "p3");

        // query with diacritic against plain text
        assert_eq!(filter_catalog(&catalog, "camisón")[0].id, "p2");
        assert_eq!(filter_catalog(&catalog, "camison")[0].id, "p2");
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample();
        let once: Vec<PromotionRecord> = filter_catalog(&catalog, "promo")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_catalog(&once, "promo");
        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn normalize_strips_marks_and_lowercases() {
        assert_eq!(normalize("MORÓN"), "moron");
        assert_eq!(normalize("algodón Ñandú"), "algodon nandu");
    }
}
