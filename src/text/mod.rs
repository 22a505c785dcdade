//! Text Processing Module
//!
//! Turns raw tokens into their canonical indexable form and splits noise-word
//! lists into set entries. Everything here is pure: no storage access, no
//! failure modes.
//!
//! ## Submodules
//! - **`normalize`**: Token normalization (lower-casing, stemming hook,
//!   non-alphabetic stripping).
//! - **`noise`**: Whitespace splitting of noise-word text.

pub mod noise;
pub mod normalize;
