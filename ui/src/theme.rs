use content::{MemoryStorage, PreferenceStorage, StorageError, ThemeStore};
use yew::prelude::*;

/// [`PreferenceStorage`] backed by `window.localStorage`.
///
/// Falls back to an in-memory map when the browser offers no storage
/// (private windows, disabled cookies), so the toggle still works for the
/// session.
pub struct BrowserStorage {
    local: Option<web_sys::Storage>,
    fallback: MemoryStorage,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let local = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if local.is_none() {
            tracing::debug!("localStorage unavailable, theme won't persist");
        }
        Self {
            local,
            fallback: MemoryStorage::new(),
        }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        match &self.local {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => self.fallback.read(key),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match &self.local {
            Some(storage) => storage.set_item(key, value).map_err(|e| {
                StorageError::WriteRejected {
                    key: key.to_string(),
                    reason: format!("{e:?}"),
                }
            }),
            None => self.fallback.write(key, value),
        }
    }
}

/// What views see of the theme: the current flag and a way to flip it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub dark: bool,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

/// Owns the [`ThemeStore`] for the lifetime of the app and applies the
/// `dark` class for tailwind's class-based dark variants.
#[function_component]
pub fn ThemeProvider(props: &ThemeProviderProps) -> Html {
    let store = use_mut_ref(|| ThemeStore::init(BrowserStorage::new()));
    let dark = {
        let store = store.clone();
        use_state(move || store.borrow().get())
    };

    let toggle = {
        let dark = dark.clone();
        Callback::from(move |()| {
            let now_dark = store.borrow_mut().toggle();
            tracing::debug!(dark = now_dark, "theme toggled");
            dark.set(now_dark);
        })
    };

    let context = ThemeContext {
        dark: *dark,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class={classes!(dark.then_some("dark"))}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("use_theme must be used within a ThemeProvider")
}

// Theme toggle component
#[function_component]
pub fn ThemeToggle() -> Html {
    let theme = use_theme();

    let onclick = theme.toggle.reform(|_: MouseEvent| ());

    let (icon, title) = if theme.dark {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <button
            class="p-2 rounded-full hover:bg-amber-100 dark:hover:bg-gray-700 transition-colors"
            {onclick}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}
