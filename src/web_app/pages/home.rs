// web_app/pages/home.rs - Landing page
//
// Hero banner followed by every media record the API lists.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::MediaSummary;
use crate::web_app::server_fns::{error_message, fetch_medias};

#[component]
pub fn HomePage() -> impl IntoView {
    let medias = Resource::new(|| (), |_| fetch_medias(String::new()));

    view! {
        <Hero />
        <section class="max-w-7xl mx-auto px-4 py-12">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Latest uploads"</h2>
            <Suspense fallback=move || view! { <Loading message="Loading media..." /> }>
                {move || medias.get().map(|result| match result {
                    Ok(items) => view! { <MediaGrid items=items /> }.into_any(),
                    Err(e) => view! { <ErrorDisplay error=error_message(&e) /> }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn MediaGrid(items: Vec<MediaSummary>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="text-gray-500">"Nothing has been uploaded yet."</p> }.into_any();
    }

    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {items.into_iter().map(|media| view! { <MediaCard media=media /> }).collect_view()}
        </div>
    }
    .into_any()
}
