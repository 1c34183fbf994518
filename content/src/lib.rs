//! Content and interactive state for the WanderDuo travel site.
//!
//! The `ui` crate renders what lives here. Everything is plain Rust so the
//! behaviour behind the page (story filtering, single-selection panels, the
//! dark mode store and the local form buffers) can be tested without a
//! browser.

pub mod budget;
pub mod data;
pub mod filter;
pub mod forms;
pub mod map;
pub mod model;
pub mod selection;
pub mod theme;

pub use budget::format_usd;
pub use filter::{Category, StoryFilter, categories, filter_posts};
pub use forms::{FormBuffer, FormError, FormKind, FormStatus, SubmissionTicket};
pub use map::MapSelection;
pub use model::*;
pub use selection::{Lightbox, Selection};
pub use theme::{
    MemoryStorage, PreferenceStorage, StorageError, THEME_STORAGE_KEY,
    ThemeStore,
};
