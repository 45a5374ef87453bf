//! # numscope Prelude
//!
//! Convenient re-exports of the most commonly used types and functions.
//! A debugger front-end typically needs everything here: the value trait to
//! implement, the registry to install into, and the decode entry point.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all numscope operations
pub use crate::Error;

/// The result type used throughout numscope
pub use crate::Result;

// ================================================================================================
// Host Interface
// ================================================================================================

/// The value accessor contract a debugger front-end implements
pub use crate::value::HostValue;

/// Field names of the safe-numbers memory layout
pub use crate::value::{BASIS_FIELD, HIGH_FIELD, LOW_FIELD};

// ================================================================================================
// Decoding Pipeline
// ================================================================================================

/// Type-name classification
pub use crate::classify::{classify, Bounds, Inner, TypeVariant, Width};

/// Layer resolution and value reconstruction
pub use crate::{reconstruct::reconstruct, resolve::resolve};

/// Display formatting
pub use crate::format::{display_string, group_digits};

// ================================================================================================
// Facade and Registration
// ================================================================================================

/// The decode entry point, drill-down child, and renderer chain
pub use crate::decoder::{
    decode, register, storage_child, PrinterRegistry, Renderer, RENDERER_NAME,
};
