use content::data::sample_itinerary;
use content::{ItineraryDay, Section, Selection};
use yew::prelude::*;

use crate::anchors::use_scroll_to;
use crate::components::Disclosure;
use crate::hooks::use_title;

/// Day opened on arrival.
const FIRST_DAY: u32 = 1;

fn day_details(day: &ItineraryDay) -> Html {
    html! {
        <div class="grid md:grid-cols-2 gap-6 pt-2">
            <div>
                <h4 class="font-semibold mb-2">{"Activities"}</h4>
                <ul class="space-y-1 text-gray-700 dark:text-gray-300">
                    { for day.activities.iter().map(|activity| html! {
                        <li key={*activity}>{"• "}{*activity}</li>
                    }) }
                </ul>
            </div>
            <dl class="space-y-2 text-sm">
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">{"Accommodation"}</dt>
                    <dd>{day.accommodation}</dd>
                </div>
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">{"Meals"}</dt>
                    <dd>{day.meals}</dd>
                </div>
                <div>
                    <dt class="text-gray-500 dark:text-gray-400">{"Budget"}</dt>
                    <dd class="font-semibold text-amber-500">{day.budget}</dd>
                </div>
            </dl>
        </div>
    }
}

#[function_component]
pub fn ItineraryPage() -> Html {
    use_title("Itinerary Preview");

    let itinerary = sample_itinerary();
    let open_day = use_state(|| Selection::open(FIRST_DAY));
    let scroll_to = use_scroll_to();
    let order = scroll_to.reform(|_: MouseEvent| Section::Contact);

    let days = itinerary
        .days
        .iter()
        .map(|day| {
            let number = day.day;
            let on_toggle = {
                let open_day = open_day.clone();
                Callback::from(move |()| {
                    let mut next = (*open_day).clone();
                    next.select(number);
                    open_day.set(next);
                })
            };
            html! {
                <Disclosure
                    key={number}
                    title={html! {
                        <div class="flex items-center gap-4">
                            <span class="w-10 h-10 flex items-center justify-center rounded-full bg-amber-400 text-gray-900 font-bold">
                                {number}
                            </span>
                            <span class="font-semibold text-gray-900 dark:text-white">{day.location}</span>
                        </div>
                    }}
                    open={open_day.is_selected(&number)}
                    {on_toggle}
                >
                    {day_details(day)}
                </Disclosure>
            }
        })
        .collect::<Html>();

    html! {
        <div class="max-w-4xl mx-auto px-4 py-16 space-y-10">
            <header class="text-center space-y-4">
                <p class="text-sm uppercase tracking-wider text-amber-500 font-semibold">
                    {"Sample Itinerary"}
                </p>
                <h1 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white">
                    {itinerary.title}
                </h1>
                <div class="flex flex-wrap justify-center gap-6 text-gray-600 dark:text-gray-300">
                    <span>{"💵 "}{itinerary.total_budget}</span>
                    <span>{"🌏 "}{itinerary.countries.join(" · ")}</span>
                    <span>{format!("📅 {} days", itinerary.days.len())}</span>
                </div>
            </header>

            <div class="space-y-4">{days}</div>

            <div class="p-8 rounded-2xl bg-amber-50 dark:bg-gray-800 text-center space-y-4">
                <h2 class="text-2xl font-bold">{"Want one built for you?"}</h2>
                <p class="text-gray-600 dark:text-gray-300">
                    {"Every custom itinerary comes with day-by-day plans, bookings advice and a budget you can stick to."}
                </p>
                <button
                    onclick={order}
                    class="px-8 py-3 rounded-full font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-md"
                >
                    {"Order Custom Itinerary"}
                </button>
            </div>
        </div>
    }
}
