use js_sys::Date;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// A single footer navigation link.
struct FooterLink {
    name: &'static str,
    route: MainRoute,
}

/// A titled group of footer links.
struct FooterSection {
    title: &'static str,
    links: &'static [FooterLink],
}

const FOOTER_SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "About",
        links: &[
            FooterLink {
                name: "Our Mission",
                route: MainRoute::About,
            },
            FooterLink {
                name: "How It Works",
                route: MainRoute::HowItWorks,
            },
            FooterLink {
                name: "Impact",
                route: MainRoute::Impact,
            },
        ],
    },
    FooterSection {
        title: "Services",
        links: &[
            FooterLink {
                name: "Assistive Devices",
                route: MainRoute::Devices,
            },
            FooterLink {
                name: "Blood Donation",
                route: MainRoute::BloodDonation,
            },
            FooterLink {
                name: "Caregivers",
                route: MainRoute::Caregivers,
            },
        ],
    },
    FooterSection {
        title: "Support",
        links: &[
            FooterLink {
                name: "Contact Us",
                route: MainRoute::Contact,
            },
            FooterLink {
                name: "FAQ",
                route: MainRoute::Faq,
            },
            FooterLink {
                name: "Privacy Policy",
                route: MainRoute::Privacy,
            },
        ],
    },
];

/// Page footer: brand column, link groups and the copyright bar.
#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="bg-white border-t border-gray-200">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:py-16 lg:px-8">
                <div class="grid grid-cols-2 gap-8 md:grid-cols-4">
                    <div class="col-span-2 md:col-span-1">
                        <Link<MainRoute> to={MainRoute::Home} classes="flex items-center">
                            <span class="text-2xl font-bold text-primary-600">{"AccessShare"}</span>
                        </Link<MainRoute>>
                        <p class="mt-4 text-sm text-gray-500">
                            {"Empowering communities through accessible healthcare solutions and support."}
                        </p>
                        <div class="mt-6 flex space-x-6">
                            <a href="#" class="text-gray-400 hover:text-gray-500" aria-label="Facebook">
                                <i class="fa-brands fa-facebook text-2xl"></i>
                            </a>
                            <a href="#" class="text-gray-400 hover:text-gray-500" aria-label="Twitter">
                                <i class="fa-brands fa-twitter text-2xl"></i>
                            </a>
                        </div>
                    </div>

                    { for FOOTER_SECTIONS.iter().map(|section| html! {
                        <div key={section.title}>
                            <h3 class="text-sm font-semibold text-gray-400 tracking-wider uppercase">
                                { section.title }
                            </h3>
                            <ul class="mt-4 space-y-4">
                                { for section.links.iter().map(|link| html! {
                                    <li key={link.name}>
                                        <Link<MainRoute>
                                            to={link.route.clone()}
                                            classes="text-base text-gray-500 hover:text-gray-900"
                                        >
                                            { link.name }
                                        </Link<MainRoute>>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="mt-12 border-t border-gray-200 pt-8">
                    <p class="text-base text-gray-400 text-center">
                        { format!("© {year} AccessShare. All rights reserved.") }
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_link_groups() {
        let titles: Vec<_> = FOOTER_SECTIONS
            .iter()
            .map(|section| section.title)
            .collect();
        assert_eq!(titles, ["About", "Services", "Support"]);
    }

    #[test]
    fn every_group_has_three_links() {
        for section in &FOOTER_SECTIONS {
            assert_eq!(section.links.len(), 3, "group {}", section.title);
        }
    }

    #[test]
    fn link_names_and_destinations() {
        let links: Vec<_> = FOOTER_SECTIONS
            .iter()
            .flat_map(|section| section.links.iter())
            .map(|link| (link.name, link.route.clone()))
            .collect();

        assert_eq!(
            links,
            [
                ("Our Mission", MainRoute::About),
                ("How It Works", MainRoute::HowItWorks),
                ("Impact", MainRoute::Impact),
                ("Assistive Devices", MainRoute::Devices),
                ("Blood Donation", MainRoute::BloodDonation),
                ("Caregivers", MainRoute::Caregivers),
                ("Contact Us", MainRoute::Contact),
                ("FAQ", MainRoute::Faq),
                ("Privacy Policy", MainRoute::Privacy),
            ]
        );
    }
}
