// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by the pages: loading and error
// states, buttons, form inputs, stars and the category chip.

use leptos::prelude::*;

use crate::web_app::model::{star_states, MediaCategory};

/// Loading spinner component
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-green-700"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-600 text-sm">{error}</p>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Reactive disabled flag
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-5 py-2 bg-green-800 text-white rounded-full hover:bg-green-900 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-semibold shadow-sm";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text input bound to a signal
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, password, ...)
    #[prop(into, default = Signal::stored("text"))]
    input_type: Signal<&'static str>,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-green-600 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=move || input_type.get()
            placeholder=placeholder
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Five-star rating display
#[component]
pub fn StarRating(
    rating: f64,
    #[prop(default = "text-base")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {star_states(rating).into_iter().map(|lit| {
                let color = if lit { "text-yellow-400" } else { "text-white/30" };
                view! { <span class=format!("{} {}", color, size)>"★"</span> }
            }).collect_view()}
        </div>
    }
}

/// Coloured category chip
#[component]
pub fn CategoryChip(category: MediaCategory) -> impl IntoView {
    view! {
        <span
            class="px-2.5 py-0.5 text-xs font-medium rounded-full text-white"
            style=format!("background-color: {}", category.color())
        >
            {category.to_string()}
        </span>
    }
}
