use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::containers::layout::Layout;
use crate::models::session_state::SessionState;
use crate::pages::{AccountPage, ErrorPage, HomePage, InfoPage, LoginPage, RegisterPage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/account")]
    Account,
    #[at("/about")]
    About,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/impact")]
    Impact,
    #[at("/devices")]
    Devices,
    #[at("/blood-donation")]
    BloodDonation,
    #[at("/caregivers")]
    Caregivers,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let is_authenticated = *use_selector(|state: &SessionState| state.is_authenticated);

    match props.route.clone() {
        MainRoute::Home => html! {
            <Layout>
                <HomePage />
            </Layout>
        },
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! {
                    <Layout>
                        <LoginPage />
                    </Layout>
                }
            }
        }
        MainRoute::Register => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! {
                    <Layout>
                        <RegisterPage />
                    </Layout>
                }
            }
        }
        MainRoute::Account => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout>
                    <AccountPage />
                </Layout>
            }
        }
        MainRoute::About => info_page(
            "Our Mission",
            "AccessShare connects people who need assistive devices, blood \
             donations and care with neighbours ready to help.",
        ),
        MainRoute::HowItWorks => info_page(
            "How It Works",
            "Create an account, post what you need or what you can offer, \
             and AccessShare matches you with your community.",
        ),
        MainRoute::Impact => info_page(
            "Impact",
            "Every match on AccessShare keeps a device in use, a donor \
             connected and a caregiver supported.",
        ),
        MainRoute::Devices => info_page(
            "Assistive Devices",
            "Borrow, lend or donate wheelchairs, hearing aids and other \
             assistive equipment.",
        ),
        MainRoute::BloodDonation => info_page(
            "Blood Donation",
            "Post urgent blood requests or volunteer as a donor in your \
             area.",
        ),
        MainRoute::Caregivers => info_page(
            "Caregivers",
            "Find trusted caregivers nearby, or offer your time to someone \
             who needs it.",
        ),
        MainRoute::Contact => info_page(
            "Contact Us",
            "Questions or feedback? Write to support@accessshare.org and \
             we'll get back to you.",
        ),
        MainRoute::Faq => info_page(
            "FAQ",
            "Answers to the questions we hear most often about sharing, \
             borrowing and donating.",
        ),
        MainRoute::Privacy => info_page(
            "Privacy Policy",
            "What AccessShare stores about you, and how to remove it.",
        ),
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}

fn info_page(title: &'static str, blurb: &'static str) -> Html {
    html! {
        <Layout>
            <InfoPage {title} {blurb} />
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_match_footer_destinations() {
        assert_eq!(MainRoute::About.to_path(), "/about");
        assert_eq!(MainRoute::HowItWorks.to_path(), "/how-it-works");
        assert_eq!(MainRoute::Impact.to_path(), "/impact");
        assert_eq!(MainRoute::Devices.to_path(), "/devices");
        assert_eq!(MainRoute::BloodDonation.to_path(), "/blood-donation");
        assert_eq!(MainRoute::Caregivers.to_path(), "/caregivers");
        assert_eq!(MainRoute::Contact.to_path(), "/contact");
        assert_eq!(MainRoute::Faq.to_path(), "/faq");
        assert_eq!(MainRoute::Privacy.to_path(), "/privacy");
    }

    #[test]
    fn auth_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::Account.to_path(), "/account");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(MainRoute::recognize("/nope"), Some(MainRoute::NotFound));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
    }

    #[test]
    fn route_equality() {
        assert_eq!(MainRoute::Home, MainRoute::Home);
        assert_ne!(MainRoute::Login, MainRoute::Register);
    }
}
