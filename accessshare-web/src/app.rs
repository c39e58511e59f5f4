use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::Loading;
use crate::models::session_state::SessionState;
use crate::routes::MainRoute;
use crate::session::Session;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<SessionState>();

    // One verification pass on mount; afterwards the session store drives
    // every transition.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            log("app: running initial session check");
            let session = Session::new(dispatch);
            spawn_local(async move { session.check().await });
            || ()
        });
    }

    if state.is_loading {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
