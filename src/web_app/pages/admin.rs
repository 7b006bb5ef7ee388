// web_app/pages/admin.rs - Admin dashboard shell
//
// Sidebar built from ADMIN_MENU with the active entry highlighted, and a
// nested <Outlet/> for the dashboard sub-pages. Only admins see the shell;
// everyone else gets a sign-in prompt that returns here afterwards.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::web_app::model::{NavItem, Session, ADMIN_MENU};

/// Whether a sidebar entry matches the current path
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    trimmed == item.path
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let mobile_open = RwSignal::new(false);

    let is_admin = move || session.with(|s| s.is_admin());

    view! {
        <Show
            when=is_admin
            fallback=|| view! {
                <div class="min-h-screen pt-24 flex flex-col items-center gap-4">
                    <h1 class="text-2xl font-bold text-gray-900">"Admin area"</h1>
                    <p class="text-gray-600">"Sign in with an admin account to continue."</p>
                    <a href="/login?redirect=/admin" class="px-5 py-2 rounded-full bg-green-800 text-white font-semibold">
                        "Sign in"
                    </a>
                </div>
            }
        >
            <div class="min-h-screen pt-16 flex">
                <button
                    type="button"
                    class="sm:hidden fixed top-20 left-4 z-40 px-3 py-2 rounded-lg bg-green-800 text-white"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>

                <aside class=move || {
                    if mobile_open.get() {
                        "fixed inset-y-0 left-0 z-30 w-64 pt-20 bg-white shadow-xl"
                    } else {
                        "hidden sm:block w-64 pt-6 bg-white border-r border-gray-200"
                    }
                }>
                    <div class="px-6 pb-4 text-lg font-bold text-green-800">"Dashboard"</div>
                    <nav class="flex flex-col">
                        {ADMIN_MENU.into_iter().map(|item| {
                            let class = move || {
                                let pathname = location.pathname.get();
                                if is_active(&item, &pathname) {
                                    "px-6 py-3 bg-green-800/10 text-green-800 font-semibold border-r-4 border-green-800"
                                } else {
                                    "px-6 py-3 text-gray-600 hover:bg-gray-100"
                                }
                            };
                            view! {
                                <a href=item.path class=class on:click=move |_| mobile_open.set(false)>
                                    {item.label}
                                </a>
                            }
                        }).collect_view()}
                    </nav>
                </aside>

                <section class="flex-1 p-6 bg-gray-50">
                    <Outlet />
                </section>
            </div>
        </Show>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let name = move || session.with(|s| s.display_name().to_string());

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{move || format!("Welcome back, {}", name())}</h1>
            <div class="grid sm:grid-cols-2 gap-4">
                <a href="/admin/upload" class="block p-6 rounded-2xl bg-white shadow hover:shadow-lg transition-shadow">
                    <h2 class="font-bold text-green-800">"Upload Media"</h2>
                    <p class="text-sm text-gray-500">"Add images, videos or movies to the catalogue."</p>
                </a>
                <a href="/medias" class="block p-6 rounded-2xl bg-white shadow hover:shadow-lg transition-shadow">
                    <h2 class="font-bold text-green-800">"Browse Catalogue"</h2>
                    <p class="text-sm text-gray-500">"See the media as visitors see it."</p>
                </a>
            </div>
            <button
                type="button"
                class="text-sm text-gray-500 underline"
                on:click=move |_| session.update(|s| s.sign_out())
            >
                "Sign out"
            </button>
        </div>
    }
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-white shadow space-y-2">
            <h1 class="text-2xl font-bold text-gray-900">"Upload Media"</h1>
            <p class="text-gray-500">"Media uploads are handled by the catalogue service."</p>
        </div>
    }
}
