// changelog document module

pub mod render;
pub mod store;
pub mod types;

pub use render::{render_document, render_to_file};
pub use store::{load_document, load_document_repairing, repair_json_text, save_document};
pub use types::{ChangelogDocument, DEFAULT_DESCRIPTION, VersionEntry};
