use content::{Section, data::FOOTER_NAV};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::anchors::use_scroll_to;

const SERVICES: &[&str] = &[
    "Custom Itineraries",
    "Budget Planning",
    "Travel Consultation",
    "Group Travel",
];

const SOCIAL: &[&str] = &["Instagram", "YouTube", "Facebook", "Twitter"];

#[function_component]
pub fn Footer() -> Html {
    let scroll_to = use_scroll_to();

    let to_newsletter = scroll_to.reform(|_: MouseEvent| Section::Newsletter);

    let quick_links = FOOTER_NAV
        .iter()
        .map(|item| {
            let section = item.section;
            let onclick = scroll_to.reform(move |_: MouseEvent| section);
            html! {
                <li key={item.label}>
                    <button {onclick} class="text-gray-600 dark:text-gray-400 hover:text-amber-500 transition-colors">
                        {item.label}
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <footer class="bg-gray-50 dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="md:col-span-2 space-y-4">
                        <Link<Route> to={Route::Home} classes="text-xl font-bold text-gray-900 dark:text-white">
                            {"WanderDuo"}
                        </Link<Route>>
                        <p class="text-gray-600 dark:text-gray-400 max-w-md">
                            {"Two friends sharing our budget travel adventures and helping fellow wanderers \
                              explore the world without breaking the bank."}
                        </p>
                        <div class="flex space-x-4">
                            { for SOCIAL.iter().map(|label| html! {
                                <a href="#" aria-label={*label} class="text-sm text-gray-500 dark:text-gray-400 hover:text-amber-500">
                                    {*label}
                                </a>
                            }) }
                        </div>
                        <div class="flex items-center justify-between p-4 rounded-xl bg-amber-50 dark:bg-gray-800 max-w-md">
                            <p class="text-sm text-gray-700 dark:text-gray-300">{"Weekly travel tips in your inbox"}</p>
                            <button onclick={to_newsletter} class="px-4 py-2 rounded-full bg-amber-400 text-gray-900 text-sm font-medium hover:bg-amber-300">
                                {"Subscribe"}
                            </button>
                        </div>
                    </div>

                    <div>
                        <h3 class="font-semibold text-gray-900 dark:text-white mb-4">{"Quick Links"}</h3>
                        <ul class="space-y-2">{quick_links}</ul>
                    </div>

                    <div>
                        <h3 class="font-semibold text-gray-900 dark:text-white mb-4">{"Services"}</h3>
                        <ul class="space-y-2">
                            { for SERVICES.iter().map(|service| html! {
                                <li key={*service}>
                                    <Link<Route> to={Route::Itinerary} classes="text-gray-600 dark:text-gray-400 hover:text-amber-500">
                                        {*service}
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-gray-200 dark:border-gray-700 text-sm text-gray-500 dark:text-gray-400 text-center">
                    {"© 2024 WanderDuo. All rights reserved."}
                </div>
            </div>
        </footer>
    }
}
