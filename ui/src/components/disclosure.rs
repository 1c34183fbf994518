use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DisclosureProps {
    pub title: Html,
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub children: Html,
}

/// A header button that shows or hides its children. Whether it is open is
/// decided by the parent, which keeps at most one panel open.
#[function_component]
pub fn Disclosure(props: &DisclosureProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());
    let chevron = if props.open { "▲" } else { "▼" };

    html! {
        <div class="rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 overflow-hidden">
            <button
                {onclick}
                class="w-full flex items-center justify-between px-6 py-4 text-left hover:bg-amber-50 dark:hover:bg-gray-700 transition-colors"
                aria-expanded={props.open.to_string()}
            >
                <div class="flex-1">{props.title.clone()}</div>
                <span class="ml-4 text-amber-500">{chevron}</span>
            </button>
            if props.open {
                <div class="px-6 pb-6">
                    {props.children.clone()}
                </div>
            }
        </div>
    }
}
