use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

use crate::components::Footer;
use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "light")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <div class="min-h-screen flex flex-col bg-white">
            <Header />
            <main class="flex-grow">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
