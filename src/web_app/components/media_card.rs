// web_app/components/media_card.rs - Media card
//
// Card linking to the media details page: thumbnail background, title,
// stars and category chip. The compact variant is the row shown inside
// the header search dropdown.

use leptos::prelude::*;

use crate::web_app::model::{thumbnail_for, MediaSummary};
use super::common::{CategoryChip, StarRating};

/// Grid/dropdown card for one media summary
#[component]
pub fn MediaCard(
    media: MediaSummary,
    /// Single-row layout used by the search dropdown
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    // Keyed by id so server render and hydration agree on the picture
    let thumbnail = thumbnail_for(&media, media.id.unsigned_abs() as usize);
    let href = format!("/media/{}", media.id);
    let playable = media.category.is_playable();

    if compact {
        return view! {
            <a href=href class="flex items-center gap-3 p-2 rounded-lg hover:bg-white/10 transition-colors">
                <div
                    class="w-16 h-12 rounded-md bg-cover bg-center flex-shrink-0"
                    style=format!("background-image: url({})", thumbnail)
                ></div>
                <div class="flex-1 min-w-0">
                    <p class="text-white font-semibold truncate">{media.title.clone()}</p>
                    <StarRating rating=media.average_rating size="text-xs" />
                </div>
                <CategoryChip category=media.category />
            </a>
        }
        .into_any();
    }

    view! {
        <a href=href class="block group">
            <div
                class="relative min-h-[280px] rounded-2xl overflow-hidden shadow-xl bg-cover bg-center \
                       flex flex-col justify-between transform group-hover:-translate-y-2 transition-transform"
                style=format!(
                    "background-image: linear-gradient(rgba(0,0,0,0.2), rgba(0,0,0,0.8)), url({})",
                    thumbnail
                )
            >
                <div class="p-4 flex justify-end">
                    <CategoryChip category=media.category />
                </div>

                {playable.then(|| view! {
                    <div class="flex justify-center">
                        <span class="w-14 h-14 rounded-full bg-white/20 backdrop-blur flex items-center justify-center text-white text-2xl">
                            "▶"
                        </span>
                    </div>
                })}

                <div class="p-4">
                    <h3 class="text-white font-bold text-lg mb-1 line-clamp-2">{media.title.clone()}</h3>
                    <StarRating rating=media.average_rating />
                </div>
            </div>
        </a>
    }
    .into_any()
}
