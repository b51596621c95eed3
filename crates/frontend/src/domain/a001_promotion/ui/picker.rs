use crate::domain::a001_promotion::state::CatalogStore;
use crate::domain::a002_order::state::OrderStore;
use crate::shared::components::ui::{Input, Select};
use contracts::branches::SUCURSALES;
use contracts::catalog::PromotionRecord;
use contracts::search::filter_catalog;
use leptos::prelude::*;

/// At most this many matches are previewed under the search box. The filter
/// itself is unbounded.
const PREVIEW_LIMIT: usize = 6;

/// Branch selector plus catalog search with a row of promotion preview
/// buttons.
#[component]
pub fn PedidoCard() -> impl IntoView {
    let catalog = use_context::<CatalogStore>().expect("CatalogStore not provided in context");
    let order = use_context::<OrderStore>().expect("OrderStore not provided in context");

    let (busqueda, set_busqueda) = signal(String::new());

    let branch_options: Vec<(String, String)> =
        std::iter::once(("".to_string(), "Elegí sucursal".to_string()))
            .chain(SUCURSALES.iter().map(|s| (s.to_string(), s.to_string())))
            .collect();

    let sucursal = Signal::derive(move || order.selection.get().sucursal.unwrap_or_default());
    let active_promo_id = Signal::derive(move || order.selection.get().promo_id);

    let preview = move || -> Vec<PromotionRecord> {
        let promos = catalog.promos.get();
        let query = busqueda.get();
        filter_catalog(&promos, &query)
            .into_iter()
            .take(PREVIEW_LIMIT)
            .cloned()
            .collect()
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Datos del pedido"</h2>
            <div class="card__grid">
                <Select
                    label="Sucursal"
                    value=sucursal
                    options=Signal::derive(move || branch_options.clone())
                    on_change=Callback::new(move |v: String| {
                        // the placeholder row carries an empty value
                        if !v.is_empty() {
                            order.selection.update(|sel| sel.set_sucursal(&v));
                        }
                    })
                />
                <Input
                    label="Buscar promoción o artículo"
                    value=busqueda
                    placeholder="Ej: BOXER, 03-3200, KAURY, SIGRY…"
                    on_input=Callback::new(move |v: String| set_busqueda.set(v))
                />
            </div>
            <div class="promo-preview">
                <For
                    each=preview
                    key=|p| p.id.clone()
                    children=move |promo: PromotionRecord| {
                        let id = promo.id.clone();
                        let id_for_class = promo.id.clone();
                        let is_active = move || {
                            active_promo_id.get().as_deref() == Some(id_for_class.as_str())
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "promo-preview__item promo-preview__item--active"
                                    } else {
                                        "promo-preview__item"
                                    }
                                }
                                on:click=move |_| {
                                    order.selection.update(|sel| sel.set_promo(&id));
                                }
                            >
                                <div class="promo-preview__marca">{promo.marca.clone()}</div>
                                <div class="promo-preview__nombre">{promo.nombre.clone()}</div>
                            </button>
                        }
                    }
                />
            </div>
        </section>
    }
}
