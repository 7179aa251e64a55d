//! Outbound link construction for resolved values.
//!
//! Pure mapping tables from a resolution outcome to a destination URL:
//! explorer pages for addresses, platform/profile/search URLs for text
//! records. Reused directly by UI and settings layers.

mod explorer;
mod text_record;

pub use explorer::explorer_url;
pub use text_record::text_record_url;
