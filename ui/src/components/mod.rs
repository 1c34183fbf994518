pub mod disclosure;
pub mod layout;
pub mod lightbox;
pub mod markdown_text;
pub mod section_heading;
pub mod story_card;

pub use disclosure::Disclosure;
pub use lightbox::LightboxOverlay;
pub use markdown_text::MarkdownText;
pub use section_heading::SectionHeading;
pub use story_card::StoryCard;
