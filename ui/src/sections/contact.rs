use content::forms::{BUDGET_RANGES, TRAVEL_STYLES};
use content::{FormKind, Section};
use yew::prelude::*;

use crate::components::SectionHeading;
use crate::hooks::{UseFormHandle, use_form};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-amber-400";

fn text_field(
    form: &UseFormHandle,
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
) -> Html {
    html! {
        <label class="block space-y-1">
            <span class="text-sm font-medium">
                {label}{if required { " *" } else { "" }}
            </span>
            <input
                type={input_type}
                {name}
                {required}
                value={form.value(name)}
                oninput={form.oninput()}
                class={INPUT_CLASS}
            />
        </label>
    }
}

fn choice_field(
    form: &UseFormHandle,
    name: &'static str,
    label: &'static str,
    choices: &'static [&'static str],
) -> Html {
    let current = form.value(name);
    html! {
        <label class="block space-y-1">
            <span class="text-sm font-medium">{label}</span>
            <select {name} onchange={form.onchange()} class={INPUT_CLASS}>
                <option value="" selected={current.as_str().is_empty()}>{"Select..."}</option>
                { for choices.iter().map(|choice| html! {
                    <option key={*choice} value={*choice} selected={current.as_str() == *choice}>
                        {*choice}
                    </option>
                }) }
            </select>
        </label>
    }
}

#[function_component]
pub fn ContactSection() -> Html {
    let form = use_form(FormKind::Contact);

    let body = if form.is_submitted() {
        html! {
            <div class="text-center py-16 space-y-4" role="status">
                <div class="text-6xl">{"✈️"}</div>
                <h3 class="text-2xl font-bold text-gray-900 dark:text-white">{"Thank you!"}</h3>
                <p class="text-gray-600 dark:text-gray-300">
                    {"We've received your request and will be in touch within 48 hours."}
                </p>
            </div>
        }
    } else {
        html! {
            <form onsubmit={form.onsubmit()} class="space-y-6" novalidate={true}>
                <div class="grid md:grid-cols-2 gap-6">
                    {text_field(&form, "name", "Your Name", "text", true)}
                    {text_field(&form, "email", "Email", "email", true)}
                    {text_field(&form, "destination", "Dream Destination", "text", false)}
                    {text_field(&form, "duration", "Trip Length", "text", false)}
                    {choice_field(&form, "budget", "Budget Range", BUDGET_RANGES)}
                    {choice_field(&form, "travelStyle", "Travel Style", TRAVEL_STYLES)}
                </div>
                <label class="block space-y-1">
                    <span class="text-sm font-medium">{"Tell us about your trip"}</span>
                    <textarea
                        name="message"
                        rows="5"
                        value={form.value("message")}
                        oninput={form.oninput()}
                        class={INPUT_CLASS}
                    />
                </label>
                if let Some(error) = form.error() {
                    <p class="text-sm text-red-600 dark:text-red-400" role="alert">
                        {error.to_string()}
                    </p>
                }
                <button
                    type="submit"
                    class="w-full py-4 rounded-full text-lg font-semibold bg-amber-400 text-gray-900 hover:bg-amber-300 shadow-md"
                >
                    {"Send My Request"}
                </button>
            </form>
        }
    };

    html! {
        <section id={Section::Contact.anchor()} class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Plan Your"
                    accent="Trip"
                    subtitle="Tell us where you want to go and we'll build an itinerary around your budget."
                />
                <div class="p-8 rounded-2xl bg-amber-50 dark:bg-gray-800 shadow-xl">
                    {body}
                </div>
            </div>
        </section>
    }
}
