// web_app/components/hero.rs - Landing banner

use leptos::prelude::*;

pub const HERO_IMAGE: &str = "/assets/images/images3.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-gradient-to-br from-[rgb(45,108,34)] to-[rgb(31,56,15)] pt-28 pb-16">
            <div class="max-w-7xl mx-auto px-4 grid md:grid-cols-2 gap-8 items-center relative z-10">
                <div>
                    <h2 class="text-4xl md:text-6xl font-extrabold text-white mb-4">
                        "Discover Amazing Content"
                    </h2>
                    <p class="text-xl text-white/80 mb-8">
                        "Explore our collection of stunning images from around the world"
                    </p>
                    <a
                        href="/medias"
                        class="inline-block px-8 py-3 rounded-full bg-white text-green-900 font-bold \
                               hover:scale-105 active:scale-95 transition-transform"
                    >
                        "Explore Now"
                    </a>
                </div>
                <div class="rounded-2xl overflow-hidden shadow-2xl">
                    <img src=HERO_IMAGE alt="Featured media" class="w-full h-full object-cover" />
                </div>
            </div>
        </section>
    }
}
