//! Small string helpers shared by the loader, cards and page rendering

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
