// web_app/pages/media_details.rs - Single media view
//
// Player or image, title/category/rating, description, and two tabs:
// details (uploader, date, tags) and comments. New comments appear
// immediately under the session's display name and are then posted.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::*;
use crate::web_app::model::{Comment, Media, NewComment, Session};
use crate::web_app::server_fns::{error_message, fetch_media, submit_comment};

pub const BANNER_IMAGE: &str = "/assets/images/images3.jpg";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailsTab {
    #[default]
    Details,
    Comments,
}

#[component]
pub fn MediaDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let media_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let media = Resource::new(
        move || media_id.get(),
        |id| async move {
            match id {
                Some(id) => fetch_media(id).await,
                None => Err(ServerFnError::new("Invalid media id")),
            }
        },
    );

    view! {
        <div class="min-h-screen bg-gray-50">
            <button
                type="button"
                class="fixed top-5 left-5 z-10 px-4 py-2 rounded-full bg-white/80 backdrop-blur shadow"
                on:click=move |_| {
                    if let Err(e) = window().history().and_then(|h| h.back()) {
                        tracing::warn!("History back failed: {:?}", e);
                    }
                }
            >
                "← Back"
            </button>

            <Suspense fallback=move || view! { <Loading message="Loading media..." /> }>
                {move || media.get().map(|result| match result {
                    Ok(media) => view! { <MediaView media=media /> }.into_any(),
                    Err(e) => view! {
                        <div class="max-w-3xl mx-auto pt-24 px-4">
                            <ErrorDisplay error=error_message(&e) />
                        </div>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn MediaView(media: Media) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let comments = RwSignal::new(media.comments.clone());
    let draft = RwSignal::new(String::new());
    let tab = RwSignal::new(DetailsTab::Details);
    let media_id = media.id;

    let add_comment = move |()| {
        let text = draft.get_untracked();
        let Some(new_comment) = NewComment::new(media_id, &text) else {
            return;
        };
        let (author, token) = session.with_untracked(|s| (s.display_name().to_string(), s.token()));
        comments.update(|list| list.push(Comment::optimistic(&author, &text, Utc::now())));
        draft.set(String::new());

        spawn_local(async move {
            if let Err(e) = submit_comment(new_comment, token).await {
                tracing::error!("Failed to submit comment on media {}: {}", media_id, e);
            }
        });
    };

    let hero_image = if media.category.is_playable() {
        BANNER_IMAGE.to_string()
    } else {
        media.url.clone().unwrap_or_else(|| BANNER_IMAGE.to_string())
    };
    let title = media.display_title().to_string();
    let avatar = title.chars().next().unwrap_or('?').to_ascii_uppercase().to_string();
    let url = media.url.clone().unwrap_or_default();
    let details = media.clone();

    view! {
        <div
            class="h-[40vh] md:h-[60vh] bg-cover bg-center"
            style=format!(
                "background-image: linear-gradient(to bottom, rgba(0,0,0,0.2), rgba(0,0,0,0.7)), url({})",
                hero_image
            )
        ></div>

        <div class="max-w-5xl mx-auto -mt-16 relative z-10 px-4 pb-12">
            <div class="bg-white rounded-2xl shadow-xl overflow-hidden">
                <div class="p-6 grid md:grid-cols-3 gap-6">
                    <div class="md:col-span-2 rounded-xl overflow-hidden bg-black flex items-center justify-center min-h-[400px]">
                        {if media.category.is_playable() {
                            view! { <video controls src=url class="w-full max-h-[600px] object-contain"></video> }.into_any()
                        } else {
                            view! { <img src=url alt=title.clone() class="w-full max-h-[600px] object-contain" /> }.into_any()
                        }}
                    </div>

                    <div class="space-y-4">
                        <CategoryChip category=media.category />
                        <h1 class="text-3xl font-bold text-gray-900">{title.clone()}</h1>
                        <div class="flex items-center gap-2">
                            <Rating media_id=media.id initial=media.rating />
                            <span class="text-sm text-gray-500">{format!("({} rating)", media.rating)}</span>
                        </div>
                        <hr />
                        <h2 class="font-bold">"Description"</h2>
                        <p class="text-gray-600">
                            {media.description.clone().unwrap_or_else(|| "No description available.".to_string())}
                        </p>
                    </div>
                </div>

                <div class="border-b border-gray-200 flex justify-center gap-8">
                    <TabButton tab=tab value=DetailsTab::Details label="Details" />
                    <TabButton tab=tab value=DetailsTab::Comments label="Comments" />
                </div>

                <div class="p-6">
                    <Show
                        when=move || tab.get() == DetailsTab::Details
                        fallback=move || view! {
                            <CommentSection comments=comments />
                            <div class="mt-6 p-3 rounded-xl bg-white shadow flex items-center gap-3">
                                <span class="w-9 h-9 rounded-full bg-gray-200 flex items-center justify-center font-bold">
                                    {avatar.clone()}
                                </span>
                                <TextInput value=draft placeholder="Add a comment..." />
                                <Button
                                    on_click=Callback::new(add_comment)
                                    disabled=Signal::derive(move || draft.with(|d| d.trim().is_empty()))
                                >
                                    "Post"
                                </Button>
                            </div>
                        }
                    >
                        <DetailsPanel media=details.clone() />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(tab: RwSignal<DetailsTab>, value: DetailsTab, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if tab.get() == value {
                    "py-3 border-b-4 border-green-800 text-green-800 font-bold"
                } else {
                    "py-3 border-b-4 border-transparent text-gray-500"
                }
            }
            on:click=move |_| tab.set(value)
        >
            {label}
        </button>
    }
}

#[component]
fn DetailsPanel(media: Media) -> impl IntoView {
    let uploader = media.uploader.clone().unwrap_or_else(|| "Unknown User".to_string());
    let upload_date = media
        .upload_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown Date".to_string());

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <div class="p-4 rounded-xl bg-black/[0.02]">
                <h3 class="font-bold mb-2">"Uploaded By"</h3>
                <div class="flex items-center gap-3">
                    <span class="w-9 h-9 rounded-full bg-gray-200 flex items-center justify-center font-bold">
                        {media.uploader_initial().to_string()}
                    </span>
                    <span>{uploader}</span>
                </div>
            </div>
            <div class="p-4 rounded-xl bg-black/[0.02]">
                <h3 class="font-bold mb-2">"Upload Date"</h3>
                <span>{upload_date}</span>
            </div>
            <div class="p-4 rounded-xl bg-black/[0.02] md:col-span-2">
                <h3 class="font-bold mb-2">"Tags"</h3>
                {if media.tags.is_empty() {
                    view! { <p class="text-sm text-gray-500">"No tags available"</p> }.into_any()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-2">
                            {media.tags.iter().map(|tag| view! {
                                <span class="px-3 py-1 text-xs rounded-full bg-green-800/10 text-green-800">{tag.clone()}</span>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_tab_default() {
        assert_eq!(DetailsTab::default(), DetailsTab::Details);
    }
}
