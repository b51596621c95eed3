use crate::domain::a001_promotion::state::CatalogStore;
use leptos::prelude::*;

/// Loading indicator and persistent error banner for the one-shot catalog
/// fetch.
#[component]
pub fn CatalogStatus() -> impl IntoView {
    let catalog = use_context::<CatalogStore>().expect("CatalogStore not provided in context");

    view! {
        {move || catalog.loading.get().then(|| view! {
            <section class="card card--status">
                "Cargando promociones desde " <code>"/promociones.json"</code> "…"
            </section>
        })}
        {move || catalog.error.get().map(|message| view! {
            <section class="card card--error" role="alert">
                <div class="card--error__title">"No se pudo cargar el archivo."</div>
                <div>{message}</div>
                <div class="card--error__hint">
                    "Colocá " <code>"promociones.json"</code>
                    " en la raíz del deploy, con el formato acordado."
                </div>
            </section>
        })}
    }
}
