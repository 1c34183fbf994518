use content::data::HEADER_NAV;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::anchors::use_scroll_to;
use crate::theme::ThemeToggle;

#[function_component]
pub fn Header() -> Html {
    let menu_open = use_state(|| false);
    let scroll_to = use_scroll_to();

    let nav_buttons = |extra_classes: &'static str| {
        HEADER_NAV
            .iter()
            .map(|item| {
                let onclick = {
                    let scroll_to = scroll_to.clone();
                    let menu_open = menu_open.clone();
                    let section = item.section;
                    Callback::from(move |_: MouseEvent| {
                        menu_open.set(false);
                        scroll_to.emit(section);
                    })
                };
                html! {
                    <button
                        key={item.label}
                        {onclick}
                        class={classes!(
                            "font-medium", "text-gray-700", "dark:text-gray-300",
                            "hover:text-amber-500", "transition-colors",
                            extra_classes
                        )}
                    >
                        {item.label}
                    </button>
                }
            })
            .collect::<Html>()
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/90 dark:bg-gray-900/90 border-b border-amber-100 dark:border-gray-700 backdrop-blur-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                        <span class="p-2 rounded-full bg-amber-400 text-white dark:text-gray-900">{"📍"}</span>
                        <span class="text-xl font-bold text-gray-900 dark:text-white">{"WanderDuo"}</span>
                    </Link<Route>>

                    <nav class="hidden md:flex items-center space-x-8">
                        {nav_buttons("text-sm")}
                        <ThemeToggle />
                        <Link<Route> to={Route::Itinerary} classes="px-6 py-2 rounded-full font-medium bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-md">
                            {"Plan Your Trip"}
                        </Link<Route>>
                    </nav>

                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            onclick={toggle_menu}
                            class="p-2 rounded-full text-gray-700 dark:text-gray-300"
                            aria-label="Toggle menu"
                            aria-expanded={(*menu_open).to_string()}
                        >
                            {if *menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <div class="md:hidden py-4 border-t border-amber-100 dark:border-gray-700 flex flex-col">
                        {nav_buttons("block w-full text-left px-4 py-2 text-base")}
                        <div onclick={close_menu} class="mx-4 mt-4">
                            <Link<Route> to={Route::Itinerary} classes="block px-6 py-3 rounded-full font-medium text-center bg-amber-400 text-gray-900">
                                {"Plan Your Trip"}
                            </Link<Route>>
                        </div>
                    </div>
                }
            </div>
        </header>
    }
}
