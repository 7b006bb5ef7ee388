// web_app/pages/login.rs - Login form
//
// On success the user is stored in the `Session` context and sent on:
// admins to the dashboard, everyone else to `?redirect=` or home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::ev::SubmitEvent;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::web_app::components::{Button, ErrorDisplay, TextInput};
use crate::web_app::model::{login_redirect, Credentials, Session};
use crate::web_app::server_fns::{error_message, login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let redirect = query.with_untracked(|q| q.get("redirect"));
        let navigate = navigate.clone();

        spawn_local(async move {
            match login(credentials).await {
                Ok(user) => {
                    tracing::info!("Login successful: {}", user.username);
                    error.set(None);
                    let target = login_redirect(&user, redirect.as_deref());
                    session.set(Session::signed_in(user));
                    navigate(&target, Default::default());
                }
                Err(e) => error.set(Some(error_message(&e))),
            }
        });
    };

    view! {
        <AuthCard title="Welcome back">
            <form on:submit=on_submit class="space-y-4">
                <TextInput value=username placeholder="Username" />
                <div class="flex gap-2">
                    <TextInput
                        value=password
                        placeholder="Password"
                        input_type=Signal::derive(move || if show_password.get() { "text" } else { "password" })
                    />
                    <button
                        type="button"
                        class="text-sm text-gray-500 hover:text-gray-800"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>
                {move || error.get().map(|e| view! { <ErrorDisplay error=e /> })}
                <Button button_type="submit" class="w-full">"Log In"</Button>
            </form>
            <p class="text-sm text-gray-600 mt-6 text-center">
                "Don't have an account? "
                <a href="/signup" class="text-green-800 font-semibold hover:underline">"Sign up"</a>
            </p>
        </AuthCard>
    }
}

/// Centered card shared by the login and sign-up pages
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-[rgb(45,108,34)] to-[rgb(31,56,15)] px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-2xl p-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-6 text-center">{title}</h1>
                {children()}
            </div>
        </div>
    }
}
