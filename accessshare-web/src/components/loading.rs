use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-white">
            <div class="text-xl font-medium flex items-center gap-2 text-primary-600">
                <i class="fa-solid fa-hand-holding-heart"></i>
                <span>{"AccessShare"}</span>
            </div>
            <div class="mt-3 text-sm text-gray-500">{"Checking your session..."}</div>
        </div>
    }
}
