//! Identifier syntax and classification.
//!
//! This module turns raw identifier strings into canonical queries:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ 1. Validator (is_valid)                                  │
//! │    - total syntax gate, never panics                     │
//! └──────────────────────────────────────────────────────────┘
//!                          │ accepted
//!                          ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ 2. Classifier (classify)                                 │
//! │    - `:`-tail, `.eth` terminal, or recognized suffix     │
//! │    - independent L2 subdomain detection                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Classification precedence
//!
//! Given an identifier, the request kind is derived as:
//!
//! 1. **Colon tail** (`name.eth:btc`) -> the tail names the chain or record
//! 2. **Terminal `.eth`** -> plain `eth` address lookup
//! 3. **Recognized suffix** (`name.btc`, `name.x`) -> chain or record lookup
//! 4. Anything else -> `InvalidFormat` / `UnrecognizedSuffix`
//!
//! The recognized-suffix tables in [`suffixes`] are the single source of
//! truth shared with the explorer mapper.

mod classify;
mod suffixes;
mod validator;

pub use classify::classify;
pub use suffixes::{
    chain_symbol, is_recognized_suffix, l2_network_for, text_record_kind, CHAIN_SYMBOLS,
};
pub use validator::is_valid;
