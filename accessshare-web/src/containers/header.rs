use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, use_store};

use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session::Session;

#[function_component(Header)]
pub fn header() -> Html {
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<SessionState>();
    let user = use_selector(|state: &SessionState| state.user.clone());
    let user_opt = (*user).clone();

    let on_logout = {
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let session = Session::new(dispatch.clone());
            session.logout();
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Home);
            }
        })
    };

    html! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <Link<MainRoute> to={MainRoute::Home} classes="flex items-center">
                    <span class="text-2xl font-bold text-primary-600">{"AccessShare"}</span>
                </Link<MainRoute>>
                {
                    user_opt.as_ref().map_or_else(
                        || html! {
                            <div class="flex items-center gap-4">
                                <Link<MainRoute> to={MainRoute::Login} classes="text-gray-500 hover:text-gray-900">
                                    {"Sign in"}
                                </Link<MainRoute>>
                                <Link<MainRoute>
                                    to={MainRoute::Register}
                                    classes="px-4 py-2 rounded-md bg-primary-600 text-white hover:bg-primary-700"
                                >
                                    {"Join"}
                                </Link<MainRoute>>
                            </div>
                        },
                        |user| html! {
                            <div class="flex items-center gap-4">
                                <Link<MainRoute> to={MainRoute::Account} classes="text-gray-500 hover:text-gray-900">
                                    { user.username.clone() }
                                </Link<MainRoute>>
                                <a href="#" onclick={on_logout.clone()} class="text-gray-500 hover:text-gray-900">
                                    {"Sign out"}
                                </a>
                            </div>
                        },
                    )
                }
            </div>
        </nav>
    }
}
