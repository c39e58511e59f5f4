use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-4 text-center">
            <h1 class="text-3xl font-bold text-gray-900">{"Page not found"}</h1>
            <p class="text-gray-500">{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="text-primary-600 hover:text-primary-700">
                {"Back to home"}
            </Link<MainRoute>>
        </div>
    }
}
