//! Rendering of the order list into the downloadable text document.
//!
//! The format is a fixed contract consumed by downstream tooling: a header
//! line, one semicolon-joined line per item, trailing newline.

use crate::order::OrderLineItem;
use chrono::NaiveDate;
use thiserror::Error;

pub const EXPORT_HEADER: &str = "# SUCURSAL;PROMO_ID;ARTICULO;TALLE;CANTIDAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No hay nada para descargar aún")]
    EmptyOrder,
}

/// Renders the full export document. An empty order produces no document.
pub fn render_order_txt(items: &[OrderLineItem]) -> Result<String, ExportError> {
    if items.is_empty() {
        return Err(ExportError::EmptyOrder);
    }

    let mut out = String::new();
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for item in items {
        out.push_str(&format!(
            "{};{};{};{};{}\n",
            item.sucursal, item.promo_id, item.art, item.talle, item.cantidad
        ));
    }
    Ok(out)
}

/// `pedido_promos_YYYY-MM-DD.txt`
pub fn export_filename(date: NaiveDate) -> String {
    format!("pedido_promos_{}.txt", date.format("%Y-%m-%d"))
}
