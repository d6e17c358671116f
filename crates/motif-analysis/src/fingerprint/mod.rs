//! Source fingerprinting: component source → `ComponentFingerprint`.

pub mod cache;
pub mod extractor;
pub mod signature;
pub mod types;

pub use cache::FingerprintCache;
pub use extractor::{fingerprint, SourceFingerprinter};
pub use signature::structural_signature;
pub use types::ComponentFingerprint;
