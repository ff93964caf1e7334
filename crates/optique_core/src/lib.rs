//! # optique_core: Mathematical Foundation for Option Analytics
//!
//! ## Foundation Layer Role
//!
//! optique_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::normal`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other optique_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error type derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optique_core::math::normal::{norm_cdf, norm_pdf};
//!
//! // Φ(0) = 0.5, φ(0) = 1/√(2π)
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
