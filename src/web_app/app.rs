// web_app/app.rs - Root application component
//
// Sets up meta tags, the shared session signal, the header and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::Header;
use crate::web_app::model::Session;
use crate::web_app::pages::*;

pub const APP_TITLE: &str = "ELVCO Media";
pub const STYLESHEET: &str = "/pkg/elvco_web.css";

/// Root application component
///
/// The signed-in user lives in a `RwSignal<Session>` provided as context;
/// login and sign-up replace it, the admin area reads it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(Session::default()));

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Browse, rate and discuss images, videos and movies" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Stylesheet id="leptos" href=STYLESHEET />

        <Router>
            <Header />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/medias") view=HomePage />
                    <Route path=path!("/media/:id") view=MediaDetailsPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignUpPage />
                    <ParentRoute path=path!("/admin") view=AdminDashboard>
                        <Route path=path!("") view=DashboardHome />
                        <Route path=path!("upload") view=UploadPanel />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-green-800 text-white rounded-full hover:bg-green-900 transition-colors"
                >
                    "Back to Home"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    // Split so this file's own source does not match
    const MAIN_TAG: &str = concat!("<", "main");

    #[test]
    fn test_pages_do_not_nest_main() {
        assert_eq!(include_str!("app.rs").matches(MAIN_TAG).count(), 1);

        let pages = [
            ("home", include_str!("pages/home.rs")),
            ("media_details", include_str!("pages/media_details.rs")),
            ("login", include_str!("pages/login.rs")),
            ("signup", include_str!("pages/signup.rs")),
            ("admin", include_str!("pages/admin.rs")),
        ];
        for (name, source) in pages {
            assert!(!source.contains(MAIN_TAG), "{} page renders its own main element", name);
        }
    }
}
