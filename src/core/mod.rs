//! Core building blocks: render options, pre-flight validation, field
//! substitution and document assembly. These are consumed by the
//! high-level `api` module.
pub mod assemble;
pub mod params;
pub mod template;
pub mod validate;
