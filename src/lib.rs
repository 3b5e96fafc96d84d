//! Discovers every published WordPress core release and renders a Satis
//! manifest listing them as installable Composer packages.
//!
//! ```text
//! releases page ──▶ parser ──▶ release ──▶ repository ──▶ manifest
//!   (source)      (extract)   (validate)   (sort/query)   (merge/write)
//! ```

pub mod config;
pub mod logging;
pub mod manifest;
pub mod parser;
pub mod pipeline;
pub mod release;
pub mod repository;
pub mod source;
pub mod version;
