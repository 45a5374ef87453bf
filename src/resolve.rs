//! Layer resolution: walking `basis_` wrappers down to raw storage.
//!
//! Every type in the family keeps its payload in a field named `basis_`;
//! the only difference between variants is how many of those layers sit
//! between the displayed value and the raw integer. Classification fixes the
//! layer count, so resolution is a single parametric walk instead of one
//! hand-written field chain per variant.

use crate::{
    classify::{Inner, TypeVariant},
    value::{HostValue, BASIS_FIELD},
    Result,
};

/// Number of `basis_` layers between a value of this variant and its raw
/// storage. A verified wrapper always adds exactly one.
#[must_use]
pub fn layer_count(variant: &TypeVariant) -> usize {
    match variant {
        TypeVariant::Plain(_) => 1,
        TypeVariant::Bounded(_) | TypeVariant::Verified(Inner::Plain(_)) => 2,
        TypeVariant::Verified(Inner::Bounded(_)) => 3,
    }
}

/// Walks the nesting layers of `root` and returns the value holding the raw
/// numeric storage.
///
/// # Errors
///
/// [`Error::MissingField`](crate::Error::MissingField) if a `basis_` layer the
/// classification promised is absent; resolution never guesses at alternate
/// layouts.
pub fn resolve<'a, V: HostValue>(variant: &TypeVariant, root: &'a V) -> Result<&'a V> {
    let mut storage = root;
    for _ in 0..layer_count(variant) {
        storage = storage
            .field(BASIS_FIELD)
            .ok_or(missing_field!(BASIS_FIELD))?;
    }
    Ok(storage)
}
