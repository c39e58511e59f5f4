use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session::Session;

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let (_state, dispatch) = use_store::<SessionState>();
    let user = use_selector(|state: &SessionState| state.user.clone());
    let message = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();

    let Some(user) = (*user).clone() else {
        // The route guard redirects before this renders; render nothing
        // for the frame where state has already been cleared.
        return html! {};
    };

    let on_delete = {
        let message_handle = message.clone();
        let busy_handle = busy.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            busy_handle.set(true);
            message_handle.set(None);
            let message_ref = message_handle.clone();
            let busy_ref = busy_handle.clone();
            let navigator_handle = navigator.clone();
            let session = Session::new(dispatch.clone());
            spawn_local(async move {
                match session.delete_account().await {
                    Ok(result) if result.success => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Ok(result) => message_ref.set(Some(result.message)),
                    Err(_) => {
                        message_ref.set(Some(
                            "Unable to delete your account right now".to_string(),
                        ));
                    }
                }
                busy_ref.set(false);
            });
        })
    };

    let is_busy = *busy;

    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{"Your account"}</h1>
                <dl class="mt-6 space-y-3">
                    <div>
                        <dt class="text-sm text-gray-400">{"Username"}</dt>
                        <dd class="text-gray-900">{ user.username.clone() }</dd>
                    </div>
                    <div>
                        <dt class="text-sm text-gray-400">{"Email"}</dt>
                        <dd class="text-gray-900">{ user.email.clone() }</dd>
                    </div>
                    if let Some(full_name) = &user.full_name {
                        <div>
                            <dt class="text-sm text-gray-400">{"Full name"}</dt>
                            <dd class="text-gray-900">{ full_name.clone() }</dd>
                        </div>
                    }
                    if let Some(phone_number) = &user.phone_number {
                        <div>
                            <dt class="text-sm text-gray-400">{"Phone number"}</dt>
                            <dd class="text-gray-900">{ phone_number.clone() }</dd>
                        </div>
                    }
                </dl>
            </div>

            <div class="border-t border-gray-200 pt-6">
                <h2 class="text-lg font-semibold text-red-700">{"Delete account"}</h2>
                <p class="mt-2 text-sm text-gray-500">
                    {"This removes your account and everything attached to it. There is no undo."}
                </p>
                if let Some(text) = &*message {
                    <div class="mt-3 rounded-md bg-red-50 p-3 text-sm text-red-700">
                        <span>{text.clone()}</span>
                    </div>
                }
                <button
                    class="mt-4 rounded-md border border-red-600 px-4 py-2 text-red-700 hover:bg-red-50 disabled:opacity-50"
                    onclick={on_delete}
                    disabled={is_busy}
                >
                    {if is_busy { "Deleting..." } else { "Delete my account" }}
                </button>
            </div>
        </div>
    }
}
