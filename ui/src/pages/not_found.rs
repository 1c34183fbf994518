use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <div class="py-32 text-center space-y-6">
            <h1 class="text-6xl font-bold text-gray-900 dark:text-white">{"404"}</h1>
            <p class="text-xl text-gray-600 dark:text-gray-300">
                {"This page wandered off the map."}
            </p>
            <Link<Route> to={Route::Home} classes="inline-block px-6 py-3 rounded-full bg-amber-400 text-gray-900 font-medium hover:bg-amber-300">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
