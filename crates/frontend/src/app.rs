use crate::domain::a001_promotion::state::CatalogStore;
use crate::domain::a001_promotion::ui::{CatalogStatus, PedidoCard, PromoCard};
use crate::domain::a002_order::state::OrderStore;
use crate::domain::a002_order::ui::OrderList;
use crate::shared::components::ui::Badge;
use crate::shared::notice::{Notice, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let catalog = CatalogStore::new();

    // Shared state lives in context; the view layer only calls the store
    // operations.
    provide_context(catalog);
    provide_context(OrderStore::new());
    provide_context(NoticeService::new());

    // The catalog is fetched exactly once per session.
    catalog.load();

    view! {
        <div class="app">
            <header class="app__header">
                <Badge variant="primary">"RÍO – Pedidos por Promoción"</Badge>
                <h1 class="app__title">"Generador de pedidos"</h1>
            </header>

            <Notice />
            <CatalogStatus />
            <PedidoCard />
            <PromoCard />
            <OrderList />
        </div>
    }
}
