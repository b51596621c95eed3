use super::api;
use contracts::catalog::PromotionRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Catalog state shared through context: the loaded promotions plus the
/// loading/error flags the status card renders.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub promos: RwSignal<Vec<PromotionRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            promos: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// One-shot load at startup. No retry and no refresh; the catalog is
    /// immutable for the rest of the session.
    pub fn load(&self) {
        let store = *self;
        store.loading.set(true);
        store.error.set(None);

        spawn_local(async move {
            match api::fetch_catalog().await {
                Ok(promos) => {
                    log::info!("catalog loaded: {} promotions", promos.len());
                    store.promos.set(promos);
                }
                Err(e) => {
                    log::error!("catalog load failed: {}", e);
                    store.error.set(Some(e.to_string()));
                }
            }
            store.loading.set(false);
        });
    }
}
