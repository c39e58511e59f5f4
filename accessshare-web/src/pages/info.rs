use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoPageProps {
    pub title: &'static str,
    #[prop_or_default]
    pub blurb: &'static str,
}

/// Static content page behind the footer links.
#[function_component(InfoPage)]
pub fn info_page(props: &InfoPageProps) -> Html {
    html! {
        <div class="max-w-3xl mx-auto p-8 space-y-4">
            <h1 class="text-3xl font-bold text-gray-900">{ props.title }</h1>
            <p class="text-gray-500">{ props.blurb }</p>
        </div>
    }
}
