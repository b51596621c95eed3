use leptos::prelude::*;

/// Service for the single dismissable notice the app shows for validation
/// and export failures.
#[derive(Clone, Copy)]
pub struct NoticeService {
    message: RwSignal<Option<String>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

/// Renders the active notice, if any, with a dismiss button.
#[component]
pub fn Notice() -> impl IntoView {
    let notice = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        {move || {
            notice.message.get().map(|message| view! {
                <div class="notice" role="alert">
                    <span class="notice__text">{message}</span>
                    <button
                        class="notice__dismiss"
                        on:click=move |_| notice.dismiss()
                    >
                        "×"
                    </button>
                </div>
            })
        }}
    }
}
