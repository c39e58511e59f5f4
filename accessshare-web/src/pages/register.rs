use reqwest::StatusCode;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session::Session;

fn text_input_callback(handle: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let full_name = use_state(String::new);
    let phone_number = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<SessionState>();

    let onsubmit = {
        let email_handle = email.clone();
        let username_handle = username.clone();
        let password_handle = password.clone();
        let full_name_handle = full_name.clone();
        let phone_number_handle = phone_number.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let full_name_value = (*full_name_handle).trim().to_string();
            let phone_number_value = (*phone_number_handle).trim().to_string();
            let details = RegisterRequest {
                email: (*email_handle).clone(),
                username: (*username_handle).clone(),
                password: (*password_handle).clone(),
                full_name: (!full_name_value.is_empty()).then_some(full_name_value),
                phone_number: (!phone_number_value.is_empty()).then_some(phone_number_value),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let session = Session::new(dispatch.clone());
            spawn_local(async move {
                match session.register(&details).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        let message = err.status().map_or_else(
                            || "Unable to connect to server".to_string(),
                            |status| match status {
                                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                                    "An account with this email or username already exists"
                                        .to_string()
                                }
                                _ => format!("Registration failed: {status}"),
                            },
                        );
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit =
        (*email).is_empty() || (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center py-16 px-4">
            <div class="w-full max-w-md rounded-lg border border-gray-200 shadow-sm bg-white">
                <form class="p-8 space-y-4" onsubmit={onsubmit}>
                    <h2 class="text-2xl font-bold text-gray-900">{"Create your account"}</h2>
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
                            oninput={text_input_callback(email.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500" for="username">{"Username"}</label>
                        <input
                            id="username"
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={text_input_callback(username.clone())}
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
                            oninput={text_input_callback(password.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500" for="full-name">{"Full name (optional)"}</label>
                        <input
                            id="full-name"
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                            type="text"
                            value={(*full_name).clone()}
                            oninput={text_input_callback(full_name.clone())}
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500" for="phone-number">{"Phone number (optional)"}</label>
                        <input
                            id="phone-number"
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                            type="tel"
                            value={(*phone_number).clone()}
                            oninput={text_input_callback(phone_number.clone())}
                        />
                    </div>
                    <button
                        class="w-full rounded-md bg-primary-600 py-2 text-white hover:bg-primary-700 disabled:opacity-50"
                        type="submit"
                        disabled={disable_submit}
                    >
                        {if is_busy { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
