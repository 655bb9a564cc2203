//! Chores core: pure text and path rules, no IO.
mod email;
mod image;
mod target_url;
mod title;

pub use email::{extract_emails, EmailMatch, EMAIL_PATTERN};
pub use image::{FileEntry, ImageFilter, DEFAULT_IMAGE_EXTENSIONS};
pub use target_url::{validate_target_url, UrlError};
pub use title::{decode_entities, extract_title, normalize_title, PageTitle, NO_TITLE};
