//! Candidate extraction from releases pages
//!
//! # Modules
//!
//! - [`traits`]: `CandidateExtractor` trait
//! - [`anchors`]: DOM-based extraction of anchor `href` values (default)
//! - [`text`]: Pattern-based extraction of absolute links from raw text
//! - [`types`]: `ExtractStrategy` selection

pub mod anchors;
pub mod text;
pub mod traits;
pub mod types;

pub use anchors::AnchorExtractor;
pub use text::TextExtractor;
pub use traits::CandidateExtractor;
pub use types::ExtractStrategy;
