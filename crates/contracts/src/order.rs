use crate::catalog::{find_promotion, PromotionRecord};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of an order line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub Uuid);

impl LineItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// One (branch, promotion, article, size, quantity) tuple destined for
/// export. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub id: LineItemId,
    pub sucursal: String,
    /// Promotion display name, shown in the order table.
    pub promo: String,
    /// Promotion id, the key written to the export file.
    pub promo_id: String,
    pub art: String,
    pub talle: String,
    pub cantidad: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Elegí una sucursal")]
    MissingSucursal,
    #[error("Elegí una promoción")]
    MissingPromo,
    #[error("Seleccioná al menos un artículo (o activá 'Todos los artículos')")]
    NoArticulos,
    #[error("Seleccioná al menos un talle (o activá 'Todos los talles')")]
    NoTalles,
}

/// Expands the current selection into line items, one per (article, size)
/// pair in article-major order. Preconditions are checked in a fixed order
/// and the first violation aborts with no items produced. Committing the
/// same combination twice on purpose yields distinct items; no deduplication
/// happens here or later.
pub fn expand_selection(
    selection: &Selection,
    catalog: &[PromotionRecord],
) -> Result<Vec<OrderLineItem>, ValidationError> {
    let sucursal = selection
        .sucursal
        .as_deref()
        .ok_or(ValidationError::MissingSucursal)?;
    let promo = find_promotion(catalog, selection.promo_id.as_deref())
        .ok_or(ValidationError::MissingPromo)?;

    let articulos = selection.effective_articulos(promo);
    if articulos.is_empty() {
        return Err(ValidationError::NoArticulos);
    }
    let talles = selection.effective_talles(promo);
    if talles.is_empty() {
        return Err(ValidationError::NoTalles);
    }

    let cantidad = selection.cantidad();
    let mut items = Vec::with_capacity(articulos.len() * talles.len());
    for art in &articulos {
        for talle in &talles {
            items.push(OrderLineItem {
                id: LineItemId::new_v4(),
                sucursal: sucursal.to_string(),
                promo: promo.nombre.clone(),
                promo_id: promo.id.clone(),
                art: art.clone(),
                talle: talle.clone(),
                cantidad,
            });
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArticleRecord;

    fn catalog() -> Vec<PromotionRecord> {
        vec![PromotionRecord {
            id: "p1".to_string(),
            nombre: "Promo Box".to_string(),
            marca: "Kaury".to_string(),
            talles: vec!["S".to_string(), "M".to_string()],
            articulos: vec![
                ArticleRecord {
                    codigo: "A1".to_string(),
                    desc: "x".to_string(),
                },
                ArticleRecord {
                    codigo: "A2".to_string(),
                    desc: "y".to_string(),
                },
            ],
            precios: vec![],
        }]
    }

    fn base_selection() -> Selection {
        let mut sel = Selection::default();
        sel.set_sucursal("MORENO");
        sel.set_promo("p1");
        sel
    }

    #[test]
    fn expands_the_cartesian_product_article_major() {
        let mut sel = base_selection();
        sel.toggle_articulo("A1");
        sel.toggle_articulo("A2");
        sel.set_todos_talles(true);
        sel.set_cantidad_input("2");

        let items = expand_selection(&sel, &catalog()).unwrap();
        let pairs: Vec<(&str, &str)> = items
            .iter()
            .map(|i| (i.art.as_str(), i.talle.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("A1", "S"), ("A1", "M"), ("A2", "S"), ("A2", "M")]
        );
        assert!(items.iter().all(|i| i.cantidad == 2));
        assert!(items.iter().all(|i| i.sucursal == "MORENO"));
        assert!(items.iter().all(|i| i.promo_id == "p1"));
    }

    #[test]
    fn all_articles_single_size_scenario() {
        let mut sel = base_selection();
        sel.set_todos_articulos(true);
        sel.toggle_talle("S");
        sel.set_cantidad_input("3");

        let items = expand_selection(&sel, &catalog()).unwrap();
        assert_eq!(items.len(), 2);
        for (item, art) in items.iter().zip(["A1", "A2"]) {
            assert_eq!(item.sucursal, "MORENO");
            assert_eq!(item.promo, "Promo Box");
            assert_eq!(item.promo_id, "p1");
            assert_eq!(item.art, art);
            assert_eq!(item.talle, "S");
            assert_eq!(item.cantidad, 3);
        }
    }

    #[test]
    fn each_item_gets_a_fresh_id() {
        let mut sel = base_selection();
        sel.set_todos_articulos(true);
        sel.set_todos_talles(true);

        let items = expand_selection(&sel, &catalog()).unwrap();
        let mut ids: Vec<Uuid> = items.iter().map(|i| i.id.value()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn preconditions_fail_in_order() {
        let catalog = catalog();

        let sel = Selection::default();
        assert_eq!(
            expand_selection(&sel, &catalog),
            Err(ValidationError::MissingSucursal)
        );

        let mut sel = Selection::default();
        sel.set_sucursal("MERLO");
        assert_eq!(
            expand_selection(&sel, &catalog),
            Err(ValidationError::MissingPromo)
        );

        // promotion gone from the catalog counts as missing too
        let mut sel = Selection::default();
        sel.set_sucursal("MERLO");
        sel.set_promo("desconocida");
        assert_eq!(
            expand_selection(&sel, &catalog),
            Err(ValidationError::MissingPromo)
        );

        let mut sel = base_selection();
        assert_eq!(
            expand_selection(&sel, &catalog),
            Err(ValidationError::NoArticulos)
        );

        sel.toggle_articulo("A1");
        assert_eq!(
            expand_selection(&sel, &catalog),
            Err(ValidationError::NoTalles)
        );
    }
}
