use crate::domain::a001_promotion::state::CatalogStore;
use crate::domain::a002_order::state::OrderStore;
use crate::shared::components::ui::{Badge, Button, Checkbox, Input};
use crate::shared::format::format_precio;
use crate::shared::notice::NoticeService;
use contracts::catalog::{find_promotion, PromotionRecord};
use leptos::prelude::*;

/// Article/size selection for the active promotion. Renders nothing until a
/// promotion is chosen.
#[component]
pub fn PromoCard() -> impl IntoView {
    let catalog = use_context::<CatalogStore>().expect("CatalogStore not provided in context");
    let order = use_context::<OrderStore>().expect("OrderStore not provided in context");

    let active_promo = Signal::derive(move || -> Option<PromotionRecord> {
        let sel = order.selection.get();
        let promos = catalog.promos.get();
        find_promotion(&promos, sel.promo_id.as_deref()).cloned()
    });

    view! {
        {move || active_promo.get().map(|promo| view! { <PromoCardBody promo=promo /> })}
    }
}

#[component]
fn PromoCardBody(promo: PromotionRecord) -> impl IntoView {
    let catalog = use_context::<CatalogStore>().expect("CatalogStore not provided in context");
    let order = use_context::<OrderStore>().expect("OrderStore not provided in context");
    let notice = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let todos_articulos = Signal::derive(move || order.selection.get().todos_articulos);
    let todos_talles = Signal::derive(move || order.selection.get().todos_talles);
    let cantidad_input = Signal::derive(move || order.selection.get().cantidad_input.clone());

    let agregar = Callback::new(move |_: leptos::ev::MouseEvent| {
        let promos = catalog.promos.get_untracked();
        if let Err(e) = order.commit(&promos) {
            notice.show(e.to_string());
        }
    });

    let limpiar = Callback::new(move |_: leptos::ev::MouseEvent| {
        order.selection.update(|sel| sel.clear());
    });

    let articulos = promo.articulos.clone();
    let talles = promo.talles.clone();
    let precios = promo.precios.clone();

    view! {
        <section class="card">
            <h2 class="card__title">{promo.nombre.clone()}</h2>
            <div class="card__grid card__grid--three">
                <div>
                    <div class="panel__header">
                        <h3 class="panel__title">"Artículos"</h3>
                        <Checkbox
                            id="todos-articulos"
                            label="Todos"
                            checked=todos_articulos
                            on_change=Callback::new(move |on: bool| {
                                order.selection.update(|sel| sel.set_todos_articulos(on));
                            })
                        />
                    </div>
                    <div class="article-list">
                        {articulos
                            .into_iter()
                            .map(|a| {
                                let codigo_toggle = a.codigo.clone();
                                let codigo_checked = a.codigo.clone();
                                let checked = Signal::derive(move || {
                                    order
                                        .selection
                                        .get()
                                        .articulos
                                        .iter()
                                        .any(|c| c == &codigo_checked)
                                });
                                view! {
                                    <label class="article-list__row">
                                        <span class="article-list__left">
                                            {move || {
                                                let codigo = codigo_toggle.clone();
                                                (!todos_articulos.get()).then(move || view! {
                                                    <input
                                                        type="checkbox"
                                                        class="form__checkbox"
                                                        checked=move || checked.get()
                                                        on:change=move |_| {
                                                            order
                                                                .selection
                                                                .update(|sel| sel.toggle_articulo(&codigo));
                                                        }
                                                    />
                                                })
                                            }}
                                            <span class="article-list__codigo">{a.codigo.clone()}</span>
                                        </span>
                                        <span class="article-list__desc">{a.desc.clone()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <div class="panel__header">
                        <h3 class="panel__title">"Talles"</h3>
                        <Checkbox
                            id="todos-talles"
                            label="Todos"
                            checked=todos_talles
                            on_change=Callback::new(move |on: bool| {
                                order.selection.update(|sel| sel.set_todos_talles(on));
                            })
                        />
                    </div>
                    <div class="chip-row">
                        {talles
                            .into_iter()
                            .map(|t| {
                                let talle_toggle = t.clone();
                                let talle_checked = t.clone();
                                let selected = Signal::derive(move || {
                                    order
                                        .selection
                                        .get()
                                        .talles
                                        .iter()
                                        .any(|x| x == &talle_checked)
                                });
                                view! {
                                    <button
                                        class=move || {
                                            if selected.get() { "chip chip--active" } else { "chip" }
                                        }
                                        disabled=move || todos_talles.get()
                                        on:click=move |_| {
                                            order.selection.update(|sel| sel.toggle_talle(&talle_toggle));
                                        }
                                    >
                                        {t}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="card__grid card__grid--two">
                        <Input
                            label="Cantidad"
                            input_type="number"
                            value=cantidad_input
                            on_input=Callback::new(move |v: String| {
                                order.selection.update(|sel| sel.set_cantidad_input(&v));
                            })
                        />
                        <div class="panel__actions">
                            <Button on_click=agregar>"Agregar a la lista"</Button>
                        </div>
                    </div>

                    {(!precios.is_empty()).then(|| view! {
                        <div class="precios">
                            <div class="precios__title">"Referencia de precios (informativo)"</div>
                            <ul class="precios__list">
                                {precios
                                    .iter()
                                    .map(|p| view! {
                                        <li class="precios__item">
                                            <span>{p.label.clone()}</span>
                                            <Badge variant="secondary">
                                                {format!("$ {}", format_precio(p.valor))}
                                            </Badge>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                </div>

                <div>
                    <div class="help">
                        <div class="help__title">"Cómo funciona"</div>
                        <ol class="help__steps">
                            <li>"Elegí la sucursal."</li>
                            <li>"Buscá y seleccioná la promoción."</li>
                            <li>"Elegí artículos o activá Todos."</li>
                            <li>"Elegí talles o activá Todos."</li>
                            <li>"Indicá cantidad y presioná Agregar."</li>
                        </ol>
                    </div>
                    <div class="help__hint">
                        "El archivo " <code>"promociones.json"</code>
                        " se toma automáticamente desde la raíz. Actualizalo cuando cambien las promos."
                    </div>
                    <div class="panel__actions">
                        <Button variant="secondary" on_click=limpiar>"Limpiar selección"</Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
