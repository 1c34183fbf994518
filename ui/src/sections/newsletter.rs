use content::data::NEWSLETTER_BENEFITS;
use content::{FormKind, Section};
use yew::prelude::*;

use crate::hooks::use_form;

#[function_component]
pub fn NewsletterSection() -> Html {
    let form = use_form(FormKind::Newsletter);

    html! {
        <section id={Section::Newsletter.anchor()} class="py-20 bg-gradient-to-r from-amber-400 to-orange-500">
            <div class="max-w-3xl mx-auto px-4 text-center text-gray-900">
                <h2 class="text-4xl font-bold mb-4">{"Join Our Travel Community"}</h2>
                <p class="text-lg mb-8">
                    {"Monthly stories, deals and planning tips, straight to your inbox."}
                </p>
                if form.is_submitted() {
                    <div class="p-6 rounded-2xl bg-white/90 shadow-lg" role="status">
                        <p class="text-xl font-semibold">{"🎉 You're subscribed!"}</p>
                        <p>{"Check your inbox for a welcome guide."}</p>
                    </div>
                } else {
                    <form onsubmit={form.onsubmit()} class="flex flex-col sm:flex-row gap-3" novalidate={true}>
                        <input
                            type="email"
                            name="email"
                            placeholder="Your email address"
                            value={form.value("email")}
                            oninput={form.oninput()}
                            class="flex-1 px-5 py-4 rounded-full bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-gray-900"
                            aria-label="Email address"
                        />
                        <button
                            type="submit"
                            class="px-8 py-4 rounded-full font-semibold bg-gray-900 text-white hover:bg-gray-800"
                        >
                            {"Subscribe"}
                        </button>
                    </form>
                    if let Some(error) = form.error() {
                        <p class="mt-3 text-sm font-medium text-red-900" role="alert">
                            {error.to_string()}
                        </p>
                    }
                }
                <ul class="flex flex-wrap justify-center gap-6 mt-8 text-sm">
                    { for NEWSLETTER_BENEFITS.iter().map(|benefit| html! {
                        <li key={*benefit}>{"✓ "}{*benefit}</li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
