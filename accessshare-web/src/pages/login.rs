use reqwest::StatusCode;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session::Session;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<SessionState>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = LoginRequest {
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let session = Session::new(dispatch.clone());
            spawn_local(async move {
                match session.login(&credentials).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::UNAUTHORIZED => {
                                    "Invalid email or password".to_string()
                                }
                                _ => format!("Sign in failed: {status}"),
                            },
                        );
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center py-16 px-4">
            <div class="w-full max-w-md rounded-lg border border-gray-200 shadow-sm bg-white">
                <form class="p-8 space-y-4" onsubmit={onsubmit}>
                    <h2 class="text-2xl font-bold text-gray-900">{"Sign in"}</h2>
                    if let Some(message) = &*error {
                        <div class="rounded-md bg-red-50 p-3 text-sm text-red-700">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div>
                        <label class="block text-sm text-gray-500" for="email">{"Email"}</label>
                        <input
                            id="email"
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500" for="password">{"Password"}</label>
                        <input
                            id="password"
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <button
                        class="w-full rounded-md bg-primary-600 py-2 text-white hover:bg-primary-700 disabled:opacity-50"
                        type="submit"
                        disabled={disable_submit}
                    >
                        {if is_busy { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
