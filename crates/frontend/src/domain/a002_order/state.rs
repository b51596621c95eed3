use contracts::catalog::PromotionRecord;
use contracts::order::{expand_selection, LineItemId, OrderLineItem, ValidationError};
use contracts::selection::Selection;
use leptos::prelude::*;

/// Order state shared through context: the form selection and the
/// accumulated line items. All transitions go through the reducer methods on
/// [`Selection`] or through the operations below; the view layer never
/// touches the vectors directly.
#[derive(Clone, Copy)]
pub struct OrderStore {
    pub selection: RwSignal<Selection>,
    pub items: RwSignal<Vec<OrderLineItem>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(Selection::default()),
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Expands the current selection against the catalog and appends the
    /// resulting line items. On a validation failure nothing changes.
    pub fn commit(&self, catalog: &[PromotionRecord]) -> Result<usize, ValidationError> {
        let selection = self.selection.get_untracked();
        let new_items = expand_selection(&selection, catalog)?;
        let count = new_items.len();
        self.items.update(|items| items.extend(new_items));
        log::info!("committed {} line items", count);
        Ok(count)
    }

    /// Removes a single line item; no-op when the id is not present.
    pub fn remove(&self, id: LineItemId) {
        self.items.update(|items| items.retain(|i| i.id != id));
    }

    pub fn clear_all(&self) {
        self.items.set(Vec::new());
    }
}
