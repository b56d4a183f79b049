pub mod assets;
pub mod errors;
pub mod html;

pub use assets::stylesheet_response;
pub use errors::plain_error_response;
pub use html::{html_response, html_with_status, redirect};
