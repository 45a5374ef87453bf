// Copyright 2025 The numscope authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # numscope
//!
//! The decoding core behind debugger pretty-printing of the `safe_numbers`
//! checked integer type family. Raw debugger memory views show these types as
//! opaque nested structures; `numscope` turns them back into a single decimal
//! number, annotated with the declared valid range where the type carries one.
//!
//! ## Features
//!
//! - **Type-name classification** - Recognizes the seven supported numeric
//!   variants from canonical and alias spellings, including the two bounds in
//!   template parameter text
//! - **Layer resolution** - Walks 0-3 nested `basis_` wrappers to the raw
//!   storage, driven by the classification
//! - **Exact reconstruction** - Width-correct masking, including the split
//!   low/high representation of 128-bit values
//! - **Host agnostic** - One small trait is all a GDB, LLDB, or embedded
//!   front-end needs to implement
//! - **Never aborts the session** - Malformed values render as a short
//!   diagnostic string; unknown types fall back to the host's own rendering
//!
//! ## Quick Start
//!
//! Classification and formatting work on plain strings and integers:
//!
//! ```rust
//! use numscope::prelude::*;
//!
//! let variant = classify("boost::safe_numbers::bounded_uint<10, 20>").unwrap();
//! assert_eq!(variant.bounds().unwrap().min, "10");
//!
//! assert_eq!(display_string(15, &variant), "[10, 20] 15");
//! assert_eq!(group_digits(1_234_567), "1,234,567");
//! ```
//!
//! Decoding a live value additionally needs a [`HostValue`] implementation
//! wrapping the front-end's native value handle; see [`decoder::decode`] for
//! a complete example. Registration installs the decoder into the host's
//! renderer chain once per session:
//!
//! ```rust,ignore
//! let mut chain: PrinterRegistry<MyValue> = PrinterRegistry::new();
//! numscope::register(&mut chain);          // idempotent
//! let display = chain.render(&some_value); // None -> host default rendering
//! ```
//!
//! ## Architecture
//!
//! Data flows one way through the pipeline, each stage owning only its own
//! output:
//!
//! - [`classify()`](classify::classify) - type-name string to tagged [`TypeVariant`]
//! - [`resolve`](resolve::resolve) - variant plus root value to raw storage
//! - [`reconstruct`](reconstruct::reconstruct) - raw storage to exact `u128`
//! - [`display_string`](format::display_string) - value plus variant to display text
//! - [`decode`] - the facade composing the four stages
//!
//! ## Error Handling
//!
//! An unrecognized type name is not an error: [`decode`] returns `None` and
//! the host keeps its default rendering. The only failure mode is a value
//! whose layout disagrees with its type name, surfaced as
//! [`Error::MissingField`] and rendered as `<invalid {variant}: {detail}>`.
//! Failures are local to a single value.

#[macro_use]
pub(crate) mod error;


/// Convenient re-exports of the most commonly used types and functions.
pub mod prelude;

/// Type-name classification: spellings, widths, bounds
pub mod classify;

/// Decoder facade and host registration
pub mod decoder;

/// Display-string construction
pub mod format;

/// Exact integer reconstruction from resolved storage
pub mod reconstruct;

/// Layer resolution down to raw storage
pub mod resolve;

/// The host debugger value interface
pub mod value;

/// `numscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`], used consistently for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `numscope` Error type
///
/// The single error type for all operations in this crate. See
/// [`error handling`](crate#error-handling) for how decode failures are
/// surfaced to the host.
pub use error::Error;

/// Classification entry point and the classified type model.
///
/// # Example
///
/// ```rust
/// use numscope::{classify, TypeVariant, Width};
///
/// assert_eq!(classify("u64"), Some(TypeVariant::Plain(Width::W64)));
/// assert_eq!(classify("int"), None);
/// ```
pub use classify::{classify, Bounds, Inner, TypeVariant, Width};

/// The decode facade, drill-down accessor, and renderer chain.
pub use decoder::{decode, register, storage_child, PrinterRegistry, RENDERER_NAME};

/// Grouped-decimal rendering and display-string construction.
pub use format::{display_string, group_digits};

/// The value accessor contract consumed from the host debugger.
pub use value::HostValue;
