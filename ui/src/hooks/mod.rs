pub mod use_form;
pub mod use_title;

pub use use_form::{UseFormHandle, use_form};
pub use use_title::use_title;
