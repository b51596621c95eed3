//! Form state for the order being built, independent of the view layer.

use crate::catalog::PromotionRecord;

/// Everything the user has picked so far: branch, active promotion, explicit
/// article/size selections, the two "all" toggles and the raw quantity input.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub sucursal: Option<String>,
    pub promo_id: Option<String>,
    pub articulos: Vec<String>,
    pub talles: Vec<String>,
    pub todos_articulos: bool,
    pub todos_talles: bool,
    /// Raw text from the quantity field; coerced by [`Selection::cantidad`].
    pub cantidad_input: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            sucursal: None,
            promo_id: None,
            articulos: Vec::new(),
            talles: Vec::new(),
            todos_articulos: false,
            todos_talles: false,
            cantidad_input: "1".to_string(),
        }
    }
}

impl Selection {
    pub fn set_sucursal(&mut self, sucursal: &str) {
        self.sucursal = Some(sucursal.to_string());
    }

    /// Activates a promotion. Switching to a different promotion discards the
    /// article/size selections, both "all" toggles and the quantity; they
    /// refer to the previous promotion's lists and must not leak into the new
    /// one.
    pub fn set_promo(&mut self, id: &str) {
        if self.promo_id.as_deref() == Some(id) {
            return;
        }
        self.promo_id = Some(id.to_string());
        self.articulos.clear();
        self.talles.clear();
        self.todos_articulos = false;
        self.todos_talles = false;
        self.cantidad_input = "1".to_string();
    }

    pub fn toggle_articulo(&mut self, codigo: &str) {
        if let Some(pos) = self.articulos.iter().position(|c| c == codigo) {
            self.articulos.remove(pos);
        } else {
            self.articulos.push(codigo.to_string());
        }
    }

    pub fn toggle_talle(&mut self, talle: &str) {
        if let Some(pos) = self.talles.iter().position(|t| t == talle) {
            self.talles.remove(pos);
        } else {
            self.talles.push(talle.to_string());
        }
    }

    /// The "all articles" toggle stands in for every article of the active
    /// promotion, so enabling it drops the explicit selection.
    pub fn set_todos_articulos(&mut self, on: bool) {
        self.todos_articulos = on;
        if on {
            self.articulos.clear();
        }
    }

    pub fn set_todos_talles(&mut self, on: bool) {
        self.todos_talles = on;
        if on {
            self.talles.clear();
        }
    }

    pub fn set_cantidad_input(&mut self, raw: &str) {
        self.cantidad_input = raw.to_string();
    }

    /// Quantity as committed to line items: a positive integer, defaulting to
    /// 1 for empty, non-numeric, zero or negative input.
    pub fn cantidad(&self) -> u32 {
        match self.cantidad_input.trim().parse::<i64>() {
            Ok(n) if n > 0 => n.min(u32::MAX as i64) as u32,
            _ => 1,
        }
    }

    /// Article codes a commit would use: the promotion's full list when the
    /// "all" toggle is on, the explicit selection otherwise.
    pub fn effective_articulos(&self, promo: &PromotionRecord) -> Vec<String> {
        if self.todos_articulos {
            promo.articulos.iter().map(|a| a.codigo.clone()).collect()
        } else {
            self.articulos.clone()
        }
    }

    pub fn effective_talles(&self, promo: &PromotionRecord) -> Vec<String> {
        if self.todos_talles {
            promo.talles.clone()
        } else {
            self.talles.clone()
        }
    }

    /// "Limpiar selección": resets everything except the chosen branch.
    pub fn clear(&mut self) {
        let sucursal = self.sucursal.take();
        *self = Self::default();
        self.sucursal = sucursal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArticleRecord;

    fn promo() -> PromotionRecord {
        PromotionRecord {
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
        }
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = Selection::default();
        sel.toggle_articulo("A1");
        sel.toggle_articulo("A2");
        sel.toggle_articulo("A1");
        assert_eq!(sel.articulos, vec!["A2"]);

        sel.toggle_talle("S");
        sel.toggle_talle("S");
        assert!(sel.talles.is_empty());
    }

    #[test]
    fn enabling_all_clears_explicit_selection() {
        let mut sel = Selection::default();
        sel.toggle_articulo("A1");
        sel.set_todos_articulos(true);
        assert!(sel.articulos.is_empty());
        assert!(sel.todos_articulos);

        sel.toggle_talle("S");
        sel.set_todos_talles(true);
        assert!(sel.talles.is_empty());
    }

    #[test]
    fn effective_sets_honor_the_all_toggles() {
        let promo = promo();
        let mut sel = Selection::default();
        sel.toggle_articulo("A2");
        sel.toggle_talle("M");
        assert_eq!(sel.effective_articulos(&promo), vec!["A2"]);
        assert_eq!(sel.effective_talles(&promo), vec!["M"]);

        sel.set_todos_articulos(true);
        sel.set_todos_talles(true);
        assert_eq!(sel.effective_articulos(&promo), vec!["A1", "A2"]);
        assert_eq!(sel.effective_talles(&promo), vec!["S", "M"]);
    }

    #[test]
    fn switching_promotion_resets_selection() {
        let mut sel = Selection::default();
        sel.set_sucursal("MORENO");
        sel.set_promo("p1");
        sel.toggle_articulo("A1");
        sel.set_todos_talles(true);
        sel.set_cantidad_input("7");

        // re-selecting the same promotion keeps the state
        sel.set_promo("p1");
        assert_eq!(sel.articulos, vec!["A1"]);

        sel.set_promo("p2");
        assert!(sel.articulos.is_empty());
        assert!(sel.talles.is_empty());
        assert!(!sel.todos_articulos);
        assert!(!sel.todos_talles);
        assert_eq!(sel.cantidad(), 1);
        assert_eq!(sel.sucursal.as_deref(), Some("MORENO"));
    }

    #[test]
    fn cantidad_coercion() {
        let mut sel = Selection::default();
        for (raw, expected) in [
            ("3", 3),
            (" 12 ", 12),
            ("", 1),
            ("abc", 1),
            ("0", 1),
            ("-5", 1),
            ("2.5", 1),
        ] {
            sel.set_cantidad_input(raw);
            assert_eq!(sel.cantidad(), expected, "input {:?}", raw);
        }
    }

    #[test]
    fn clear_keeps_the_branch() {
        let mut sel = Selection::default();
        sel.set_sucursal("MERLO");
        sel.set_promo("p1");
        sel.toggle_articulo("A1");
        sel.clear();
        assert_eq!(sel.sucursal.as_deref(), Some("MERLO"));
        assert!(sel.promo_id.is_none());
        assert!(sel.articulos.is_empty());
    }
}
