use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    /// Plain leading words, e.g. "Our Travel".
    pub lead: AttrValue,
    /// Highlighted trailing word(s), e.g. "Stories".
    pub accent: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// The two-tone heading every home section opens with.
#[function_component]
pub fn SectionHeading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-6 text-gray-900 dark:text-white">
                {&props.lead}
                <span class="text-amber-500">{" "}{&props.accent}</span>
            </h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="text-xl max-w-3xl mx-auto text-gray-700 dark:text-gray-300">
                    {subtitle}
                </p>
            }
        </div>
    }
}
