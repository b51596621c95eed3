use crate::domain::a002_order::state::OrderStore;
use crate::shared::components::ui::Button;
use crate::shared::export;
use crate::shared::notice::NoticeService;
use contracts::export::{export_filename, render_order_txt};
use contracts::order::OrderLineItem;
use leptos::prelude::*;

/// Accumulated line items with per-row removal and the export/clear actions.
#[component]
pub fn OrderList() -> impl IntoView {
    let order = use_context::<OrderStore>().expect("OrderStore not provided in context");
    let notice = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let count = move || order.items.with(|items| items.len());
    let is_empty = Signal::derive(move || order.items.with(|items| items.is_empty()));

    let vaciar = Callback::new(move |_: leptos::ev::MouseEvent| {
        order.clear_all();
    });

    let descargar = Callback::new(move |_: leptos::ev::MouseEvent| {
        let items = order.items.get_untracked();
        match render_order_txt(&items) {
            Ok(txt) => {
                let filename = export::today()
                    .map(export_filename)
                    .unwrap_or_else(|| "pedido_promos.txt".to_string());
                match export::download_text(&filename, &txt) {
                    Ok(()) => log::info!("exported {} line items to {}", items.len(), filename),
                    Err(e) => {
                        log::error!("download failed: {}", e);
                        notice.show("No se pudo generar la descarga");
                    }
                }
            }
            Err(e) => notice.show(e.to_string()),
        }
    });

    view! {
        <section class="card">
            <h2 class="card__title">
                {move || format!("Lista del pedido ({})", count())}
            </h2>

            {move || {
                if is_empty.get() {
                    view! {
                        <div class="order-table__empty">
                            "Todavía no agregaste combinaciones. Armá el pedido y aparecerá acá."
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <table class="order-table">
                            <thead>
                                <tr>
                                    <th>"Sucursal"</th>
                                    <th>"Promo"</th>
                                    <th>"Artículo"</th>
                                    <th>"Talle"</th>
                                    <th>"Cant."</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || order.items.get()
                                    key=|item| item.id.value()
                                    children=move |item: OrderLineItem| {
                                        let id = item.id;
                                        view! {
                                            <tr>
                                                <td>{item.sucursal.clone()}</td>
                                                <td>{item.promo.clone()}</td>
                                                <td class="order-table__codigo">{item.art.clone()}</td>
                                                <td>{item.talle.clone()}</td>
                                                <td class="order-table__cantidad">{item.cantidad}</td>
                                                <td class="order-table__actions">
                                                    <Button
                                                        variant="ghost"
                                                        on_click=Callback::new(move |_| order.remove(id))
                                                    >
                                                        "Quitar"
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}

            <div class="card__actions">
                <Button variant="secondary" disabled=is_empty on_click=vaciar>
                    "Vaciar"
                </Button>
                <Button disabled=is_empty on_click=descargar>
                    "Descargar TXT"
                </Button>
            </div>
        </section>
    }
}
