//! Landing page content: document model, defaults and HTTP handlers.

pub mod defaults;
pub mod handlers;
pub mod model;

pub use defaults::default_content;
pub use model::{Section, SiteContent, SiteData};
