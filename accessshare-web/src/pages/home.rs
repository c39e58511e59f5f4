use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::models::session_state::SessionState;
use crate::routes::MainRoute;

/// Landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user.clone());

    let greeting = (*user).as_ref().map_or_else(
        || html! {
            <p class="mt-4 text-lg text-gray-500">
                {"Share assistive devices, donate blood and find caregivers in your community."}
            </p>
        },
        |user| html! {
            <p class="mt-4 text-lg text-gray-500">
                { format!("Welcome back, {}.", user.username) }
            </p>
        },
    );

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-gray-900">{"Healthcare access, shared."}</h1>
            { greeting }

            <div class="mt-12 grid gap-8 md:grid-cols-3">
                <Link<MainRoute> to={MainRoute::Devices} classes="block rounded-lg border border-gray-200 p-6 hover:shadow-md">
                    <i class="fa-solid fa-wheelchair text-2xl text-primary-600"></i>
                    <h2 class="mt-3 text-lg font-semibold text-gray-900">{"Assistive Devices"}</h2>
                    <p class="mt-1 text-sm text-gray-500">{"Borrow or lend equipment nearby."}</p>
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::BloodDonation} classes="block rounded-lg border border-gray-200 p-6 hover:shadow-md">
                    <i class="fa-solid fa-droplet text-2xl text-primary-600"></i>
                    <h2 class="mt-3 text-lg font-semibold text-gray-900">{"Blood Donation"}</h2>
                    <p class="mt-1 text-sm text-gray-500">{"Request or volunteer to donate."}</p>
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Caregivers} classes="block rounded-lg border border-gray-200 p-6 hover:shadow-md">
                    <i class="fa-solid fa-hands-holding-child text-2xl text-primary-600"></i>
                    <h2 class="mt-3 text-lg font-semibold text-gray-900">{"Caregivers"}</h2>
                    <p class="mt-1 text-sm text-gray-500">{"Find or offer care and support."}</p>
                </Link<MainRoute>>
            </div>
        </div>
    }
}
