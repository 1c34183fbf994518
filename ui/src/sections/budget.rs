use content::data::{SAVINGS_TIPS, budget_trips};
use content::{BudgetTripKey, Section, format_usd};
use yew::prelude::*;

use crate::anchors::use_scroll_to;
use crate::components::SectionHeading;

#[function_component]
pub fn BudgetSection() -> Html {
    let trips = use_memo((), |_| budget_trips());
    let selected = use_state(|| BudgetTripKey::SoutheastAsia);
    let scroll_to = use_scroll_to();

    let Some(trip) = trips.iter().find(|trip| trip.key == *selected) else {
        tracing::warn!(key = %*selected, "no budget trip for key");
        return html! {};
    };

    let tabs = trips
        .iter()
        .map(|candidate| {
            let key = candidate.key;
            let onclick = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| selected.set(key))
            };
            let active = key == *selected;
            html! {
                <button
                    key={key.to_string()}
                    {onclick}
                    class={classes!(
                        "px-5", "py-2", "rounded-full", "font-medium", "transition-colors",
                        if active {
                            "bg-amber-400 text-gray-900 shadow-md"
                        } else {
                            "bg-white dark:bg-gray-700 text-gray-700 dark:text-gray-300 hover:bg-amber-100"
                        }
                    )}
                    aria-pressed={active.to_string()}
                >
                    {candidate.name}
                </button>
            }
        })
        .collect::<Html>();

    let rows = trip
        .breakdown
        .iter()
        .map(|line| {
            let share = trip.share(line);
            html! {
                <div key={line.category} class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span class="font-medium">{line.category}</span>
                        <span>{format!("{} ({share}%)", format_usd(line.amount))}</span>
                    </div>
                    <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-600 overflow-hidden">
                        <div class="h-full bg-amber-400" style={format!("width: {share}%")}></div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let get_quote = scroll_to.reform(|_: MouseEvent| Section::Contact);

    html! {
        <section id={Section::Budget.anchor()} class="py-20 bg-amber-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Budget"
                    accent="Breakdowns"
                    subtitle="Exactly what our trips cost, line by line."
                />
                <div class="flex flex-wrap justify-center gap-3 mb-10">{tabs}</div>

                <div class="grid lg:grid-cols-2 gap-8">
                    <div class="p-8 rounded-2xl bg-white dark:bg-gray-700 shadow-lg space-y-6">
                        <div class="flex justify-between items-end">
                            <div>
                                <p class="text-sm text-gray-500 dark:text-gray-400">{"Total"}</p>
                                <p class="text-4xl font-bold text-amber-500">{format_usd(trip.total)}</p>
                            </div>
                            <div class="text-right">
                                <p class="text-sm text-gray-500 dark:text-gray-400">{"Per day"}</p>
                                <p class="text-2xl font-semibold">{format_usd(trip.daily)}</p>
                            </div>
                        </div>
                        {rows}
                    </div>
                    <div class="p-8 rounded-2xl bg-white dark:bg-gray-700 shadow-lg">
                        <h3 class="text-xl font-bold mb-4">{"Money-Saving Tips"}</h3>
                        <ul class="space-y-3">
                            { for trip.tips.iter().map(|tip| html! {
                                <li key={*tip} class="flex gap-3">
                                    <span class="text-amber-500">{"✓"}</span>
                                    <span class="text-gray-700 dark:text-gray-300">{*tip}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 mt-12">
                    { for SAVINGS_TIPS.iter().map(|(title, description)| html! {
                        <div key={*title} class="p-6 rounded-xl bg-white dark:bg-gray-700 shadow">
                            <h4 class="font-semibold mb-2 text-gray-900 dark:text-white">{*title}</h4>
                            <p class="text-sm text-gray-600 dark:text-gray-300">{*description}</p>
                        </div>
                    }) }
                </div>

                <div class="text-center mt-12">
                    <button
                        onclick={get_quote}
                        class="px-8 py-3 rounded-full font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-md"
                    >
                        {"Get a Custom Budget Plan"}
                    </button>
                </div>
            </div>
        </section>
    }
}
