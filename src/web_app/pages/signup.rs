// web_app/pages/signup.rs - Sign-up form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::ev::SubmitEvent;
use leptos_router::hooks::use_navigate;

use crate::web_app::components::{Button, ErrorDisplay, TextInput};
use crate::web_app::model::Credentials;
use crate::web_app::server_fns::{error_message, sign_up};
use super::login::AuthCard;

#[component]
pub fn SignUpPage() -> impl IntoView {
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
        let navigate = navigate.clone();

        spawn_local(async move {
            match sign_up(credentials).await {
                Ok(user) => {
                    tracing::info!("Sign-up successful: {}", user.username);
                    error.set(None);
                    navigate("/login", Default::default());
                }
                Err(e) => error.set(Some(error_message(&e))),
            }
        });
    };

    view! {
        <AuthCard title="Create an account">
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
                <Button button_type="submit" class="w-full">"Sign Up"</Button>
            </form>
            <p class="text-sm text-gray-600 mt-6 text-center">
                "Already have an account? "
                <a href="/login" class="text-green-800 font-semibold hover:underline">"Log in"</a>
            </p>
        </AuthCard>
    }
}
