use content::data::faqs;
use content::{Section, Selection};
use yew::prelude::*;

use crate::components::{Disclosure, SectionHeading};

#[function_component]
pub fn FaqSection() -> Html {
    let items = faqs();
    // the first answer starts expanded
    let open = use_state(|| Selection::open(0usize));

    html! {
        <section id={Section::Faq.anchor()} class="py-20 bg-amber-50 dark:bg-gray-800">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    lead="Frequently Asked"
                    accent="Questions"
                />
                <div class="space-y-4">
                    { for items.iter().enumerate().map(|(index, faq)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |()| {
                                let mut next = (*open).clone();
                                next.select_within(index, items.len());
                                open.set(next);
                            })
                        };
                        html! {
                            <Disclosure
                                key={index}
                                title={html! {
                                    <span class="font-semibold text-gray-900 dark:text-white">{faq.question}</span>
                                }}
                                open={open.is_selected(&index)}
                                {on_toggle}
                            >
                                <p class="text-gray-700 dark:text-gray-300 leading-relaxed">{faq.answer}</p>
                            </Disclosure>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
