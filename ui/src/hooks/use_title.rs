use yew::prelude::*;

const SITE_NAME: &str = "WanderDuo";

/// Sets the document title to "`page` | WanderDuo", or just the site name
/// for an empty `page`. No cleanup on unmount since each page sets its own
/// title, and unmount/mount ordering isn't guaranteed during route
/// transitions.
#[hook]
pub fn use_title(page: &str) {
    let title = if page.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{page} | {SITE_NAME}")
    };
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
