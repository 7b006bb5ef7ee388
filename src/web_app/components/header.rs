// web_app/components/header.rs - Site header with live search
//
// Brand link, navigation, upload button, mobile drawer and the search box.
// The search box drives `SearchState` with browser timers:
// - every keystroke clears the pending timeout and starts a new one
// - when it fires, the lookup runs through `ServerLookup` (fetch_medias)
// - answers for an outdated query are dropped by `SearchState::settle`
// - a window-level pointerdown outside the search region hides the dropdown
// The quiet period comes from the server's search settings once loaded.
// Unmounting clears the timeout and removes the window listener.

use std::time::Duration;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::web_app::model::{MediaSummary, SITE_MENU};
use crate::web_app::search::{LookupRequest, MediaLookup, QueryChange, SearchState, Settlement, DEFAULT_DEBOUNCE};
use crate::web_app::server_fns::{search_settings, ServerLookup};
use super::media_card::MediaCard;

#[component]
pub fn Header(
    /// Quiet period used until the server's search settings arrive
    #[prop(default = DEFAULT_DEBOUNCE)]
    debounce: Duration,
) -> impl IntoView {
    let search = RwSignal::new(SearchState::new());
    let debounce = StoredValue::new(debounce);
    let search_region = NodeRef::<html::Div>::new();
    let pending = StoredValue::new_local(None::<TimeoutHandle>);
    let outside_listener = StoredValue::new_local(None::<WindowListenerHandle>);
    let mobile_open = RwSignal::new(false);
    let navigate = use_navigate();

    let clear_pending = move || {
        pending.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    let run_lookup = move |request: LookupRequest| {
        spawn_local(async move {
            let outcome = ServerLookup.search(&request.term).await;
            let failure = outcome.as_ref().err().cloned();

            match search.try_update(|s| s.settle(&request, outcome)) {
                Some(Settlement::Failed) => {
                    if let Some(err) = failure {
                        tracing::error!("Error fetching search results: {}", err);
                    }
                }
                Some(Settlement::Stale) => {
                    tracing::debug!("Discarding stale search results for '{}'", request.term);
                }
                // Applied, or the header is already gone
                _ => {}
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        clear_pending();

        if let Some(QueryChange::Scheduled(ticket)) = search.try_update(|s| s.set_query(text)) {
            let fire = move || {
                pending.set_value(None);
                if let Some(Some(request)) = search.try_update(|s| s.begin_lookup(ticket)) {
                    run_lookup(request);
                }
            };
            match set_timeout_with_handle(fire, debounce.get_value()) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(_) => tracing::warn!("Could not schedule search lookup"),
            }
        }
    };

    let on_focus = move |_| {
        if search.try_update_untracked(|s| s.reopen()) == Some(true) {
            search.notify();
        }
    };

    // Browser only: pick up SEARCH_DEBOUNCE_MS from the server
    Effect::new(move || {
        spawn_local(async move {
            match search_settings().await {
                Ok(settings) => debounce.set_value(settings.debounce()),
                Err(e) => tracing::warn!("Using default search debounce: {}", e),
            }
        });
    });

    // Browser only: effects do not run during server rendering
    Effect::new(move || {
        let listener = window_event_listener(ev::pointerdown, move |ev| {
            let inside = search_region
                .get_untracked()
                .map(|region| {
                    let target = event_target::<web_sys::Node>(&ev);
                    region.contains(Some(&target))
                })
                .unwrap_or(false);
            if search.try_update_untracked(|s| s.pointer_down(inside)) == Some(true) {
                search.notify();
            }
        });
        outside_listener.set_value(Some(listener));
    });

    on_cleanup(move || {
        clear_pending();
        outside_listener.update_value(|slot| {
            if let Some(listener) = slot.take() {
                listener.remove();
            }
        });
        search.try_update(|s| s.dispose());
    });

    let dropdown_visible = move || search.with(|s| s.dropdown_visible());
    let results = move || search.with(|s| s.results().to_vec());
    let go_upload = move |_| navigate("/admin/upload", Default::default());

    view! {
        <header class="fixed top-0 w-full z-50 backdrop-blur-md bg-black/60 border-b border-white/10">
            <nav class="max-w-7xl mx-auto px-4 py-3 flex flex-wrap items-center justify-between gap-4">
                <a
                    href="/"
                    class="text-white font-bold tracking-widest border border-white/30 px-4 py-2 rounded-lg hover:border-white"
                >
                    "ELVCO"
                </a>

                <button
                    type="button"
                    class="sm:hidden text-white text-2xl"
                    aria-label="menu"
                    on:click=move |_| mobile_open.set(true)
                >
                    "☰"
                </button>

                <div class="hidden sm:flex items-center gap-2">
                    {SITE_MENU.into_iter().map(|item| view! {
                        <a href=item.path class="text-white px-3 py-2 rounded-lg hover:bg-white/10">
                            {item.label}
                        </a>
                    }).collect_view()}
                </div>

                <div node_ref=search_region class="relative flex-1 max-w-md hidden sm:block">
                    <input
                        type="search"
                        placeholder="Search..."
                        class="w-full px-4 py-2 rounded-xl bg-white/10 text-white placeholder-white/60 \
                               border border-white/20 focus:border-white/60 outline-none"
                        prop:value=move || search.with(|s| s.query().to_string())
                        on:input=on_input
                        on:focus=on_focus
                    />
                    <Show when=dropdown_visible>
                        <div class="absolute top-full mt-2 w-full max-h-[400px] overflow-y-auto \
                                    rounded-xl bg-black/90 backdrop-blur-md shadow-2xl p-2 space-y-1">
                            <For
                                each=results
                                key=|media: &MediaSummary| media.id
                                children=|media| view! { <MediaCard media=media compact=true /> }
                            />
                        </div>
                    </Show>
                </div>

                <button
                    type="button"
                    class="px-5 py-2 rounded-xl font-bold text-white bg-gradient-to-r from-green-500 to-lime-400 \
                           hover:scale-105 active:scale-95 transition-transform"
                    on:click=go_upload
                >
                    "Upload"
                </button>
            </nav>

            <Show when=move || mobile_open.get()>
                <div class="fixed inset-0 z-50 flex justify-end" on:click=move |_| mobile_open.set(false)>
                    <div class="w-4/5 max-w-[300px] h-full bg-black/90 backdrop-blur-md pt-4">
                        {SITE_MENU.into_iter().map(|item| view! {
                            <a
                                href=item.path
                                class="block text-white px-6 py-3 hover:bg-white/10"
                                on:click=move |_| mobile_open.set(false)
                            >
                                {item.label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
