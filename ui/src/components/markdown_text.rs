//! Renders article markdown.
//!
//! Uses pulldown-cmark with raw HTML disabled, so anything HTML-like in the
//! source is escaped rather than rendered.

use pulldown_cmark::{Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = use_memo(props.text.clone(), |text| render_markdown(text));

    let base_classes = classes!(
        "prose",
        "prose-lg",
        "prose-amber",
        "dark:prose-invert",
        "max-w-none",
        "prose-headings:font-bold",
        "prose-table:text-sm",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(AttrValue::from((*html_content).clone())) }
        </div>
    }
}

fn render_markdown(markdown: &str) -> String {
    // Do NOT enable ENABLE_RAW_HTML
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
