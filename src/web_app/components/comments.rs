// web_app/components/comments.rs - Comment list and interactive rating

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::model::{star_states, Comment, Session};
use crate::web_app::server_fns::rate_media;

/// Comments in posting order
#[component]
pub fn CommentSection(
    #[prop(into)]
    comments: Signal<Vec<Comment>>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <Show
                when=move || comments.with(|c| !c.is_empty())
                fallback=|| view! { <p class="text-gray-500 text-sm">"No comments yet. Be the first!"</p> }
            >
                {move || comments.get().into_iter().map(|comment| {
                    let initial = comment.username.chars().next().unwrap_or('?').to_ascii_uppercase();
                    view! {
                        <div class="flex items-start gap-3 p-3 rounded-xl bg-white shadow-sm">
                            <span class="w-9 h-9 rounded-full bg-green-800 text-white flex items-center justify-center font-bold">
                                {initial.to_string()}
                            </span>
                            <div>
                                <div class="flex items-baseline gap-2">
                                    <span class="font-semibold text-gray-900">{comment.username.clone()}</span>
                                    <span class="text-xs text-gray-400">
                                        {comment.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                    </span>
                                </div>
                                <p class="text-gray-700">{comment.text.clone()}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </Show>
        </div>
    }
}

/// Clickable five-star rating.
///
/// Shows `initial` until the user picks a value, then submits it.
#[component]
pub fn Rating(media_id: i64, initial: f64) -> impl IntoView {
    let session = use_context::<RwSignal<Session>>();
    let current = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);

    let choose = move |value: u8| {
        let previous = current.get_untracked();
        current.set(f64::from(value));
        let token = session.and_then(|s| s.with_untracked(Session::token));
        spawn_local(async move {
            if let Err(e) = rate_media(media_id, value, token).await {
                tracing::error!("Failed to rate media {}: {}", media_id, e);
                current.set(previous);
                error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="flex flex-col">
            <div class="flex items-center gap-0.5">
                {move || star_states(current.get()).into_iter().enumerate().map(|(i, lit)| {
                    let value = (i + 1) as u8;
                    let color = if lit { "text-yellow-400" } else { "text-gray-300" };
                    view! {
                        <button
                            type="button"
                            class=format!("text-2xl {} hover:scale-110 transition-transform", color)
                            title=format!("Rate {}", value)
                            on:click=move |_| choose(value)
                        >
                            "★"
                        </button>
                    }
                }).collect_view()}
            </div>
            {move || error.get().map(|e| view! { <span class="text-xs text-red-600">{e}</span> })}
        </div>
    }
}
