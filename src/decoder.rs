//! Decoder facade and host registration.
//!
//! [`decode`] composes the pipeline stages in their fixed order: classify the
//! type name, resolve the storage layers, reconstruct the integer, format the
//! display string. [`PrinterRegistry`] models the host's renderer lookup
//! chain, into which [`register`] installs the safe-numbers decoder exactly
//! once per session.

use crate::{
    classify::{classify, TypeVariant},
    format::display_string,
    reconstruct::reconstruct,
    resolve::resolve,
    value::{HostValue, BASIS_FIELD},
    Result,
};

/// Registration name under which the safe-numbers renderer is installed.
pub const RENDERER_NAME: &str = "safe_numbers";

/// Decodes a host value into its display string.
///
/// Returns `None` when the type name is not part of the safe-numbers family,
/// in which case the host keeps its default rendering and the decoder
/// contributes nothing, not even an error message. A value whose layout
/// disagrees with its classified type name yields a short bracketed
/// diagnostic (`<invalid u128: missing field `high`>`) rather than a panic;
/// a decode call never aborts the host session.
///
/// # Examples
///
/// ```rust
/// use numscope::{decode, HostValue};
///
/// // A minimal stand-in for a debugger value: a u8 holding 200.
/// struct Plain8 {
///     basis: Option<Box<Plain8>>,
///     bits: u128,
/// }
///
/// impl HostValue for Plain8 {
///     fn type_name(&self) -> &str {
///         "boost::safe_numbers::u8"
///     }
///     fn field(&self, name: &str) -> Option<&Self> {
///         match name {
///             "basis_" => self.basis.as_deref(),
///             _ => None,
///         }
///     }
///     fn as_unsigned(&self) -> u128 {
///         self.bits
///     }
///     fn byte_size(&self) -> usize {
///         1
///     }
/// }
///
/// let value = Plain8 {
///     basis: Some(Box::new(Plain8 { basis: None, bits: 200 })),
///     bits: 0,
/// };
/// assert_eq!(decode(&value), Some("200".to_string()));
/// ```
#[must_use]
pub fn decode<V: HostValue>(value: &V) -> Option<String> {
    let variant = classify(value.type_name())?;
    Some(match decode_classified(value, &variant) {
        Ok(display) => display,
        Err(error) => format!("<invalid {}: {}>", variant.name(), error),
    })
}

fn decode_classified<V: HostValue>(value: &V, variant: &TypeVariant) -> Result<String> {
    let storage = resolve(variant, value)?;
    let raw = reconstruct(storage, variant.width())?;
    Ok(display_string(raw, variant))
}

/// The single drill-down child exposed for interactive expansion: the
/// immediate `basis_` field of the value. Pure pass-through, no decoding.
///
/// # Errors
///
/// [`Error::MissingField`](crate::Error::MissingField) if the value has no
/// `basis_` member.
pub fn storage_child<'a, V: HostValue>(value: &'a V) -> Result<&'a V> {
    value.field(BASIS_FIELD).ok_or(missing_field!(BASIS_FIELD))
}

/// A renderer in the host's lookup chain: returns `Some(display)` for values
/// it handles and `None` to pass the value along the chain.
pub type Renderer<V> = fn(&V) -> Option<String>;

/// The host debugger's pretty-printer dispatch chain.
///
/// Renderers are tried in installation order; the first `Some` wins and an
/// unhandled value falls through to the host's default rendering. Each
/// renderer is keyed by a registration name, so installing the same renderer
/// twice is a no-op and never duplicates output.
pub struct PrinterRegistry<V: HostValue> {
    renderers: Vec<(&'static str, Renderer<V>)>,
}

impl<V: HostValue> PrinterRegistry<V> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        PrinterRegistry {
            renderers: Vec::new(),
        }
    }

    /// Installs a renderer under a registration name. Idempotent: a name
    /// already present in the chain is left untouched.
    pub fn install(&mut self, name: &'static str, renderer: Renderer<V>) {
        if self.renderers.iter().any(|(existing, _)| *existing == name) {
            return;
        }
        self.renderers.push((name, renderer));
    }

    /// Number of installed renderers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns `true` if no renderer is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Runs a value through the chain. `None` means no renderer claimed the
    /// value and the host's default rendering applies.
    #[must_use]
    pub fn render(&self, value: &V) -> Option<String> {
        self.renderers
            .iter()
            .find_map(|(_, renderer)| renderer(value))
    }
}

impl<V: HostValue> Default for PrinterRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the safe-numbers decoder into the host's renderer chain, keyed by
/// [`RENDERER_NAME`]. Called once at load time; calling it again is a no-op.
pub fn register<V: HostValue>(registry: &mut PrinterRegistry<V>) {
    registry.install(RENDERER_NAME, decode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MockValue;

    #[test]
    fn test_decode_unrecognized_contributes_nothing() {
        let value = MockValue::wrapped("std::vector<int>", 1, MockValue::leaf(5, 4));
        assert_eq!(decode(&value), None);
    }

    #[test]
    fn test_decode_diagnostic_on_layout_mismatch() {
        let value = MockValue::leaf(5, 1).with_type_name("verified_u8");
        assert_eq!(
            decode(&value).as_deref(),
            Some("<invalid verified_u8: missing field `basis_`>")
        );
    }

    #[test]
    fn test_storage_child_is_immediate_basis() {
        let value = MockValue::wrapped("u8", 1, MockValue::leaf(7, 1));
        let child = storage_child(&value).unwrap();
        assert_eq!(child.as_unsigned(), 7);

        let bare = MockValue::leaf(7, 1);
        assert!(storage_child(&bare).is_err());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let value = MockValue::wrapped("u16", 1, MockValue::leaf(60_000, 2));

        let mut registry: PrinterRegistry<MockValue> = PrinterRegistry::new();
        assert!(registry.is_empty());

        register(&mut registry);
        let once = registry.render(&value);
        assert_eq!(once.as_deref(), Some("60,000"));
        assert_eq!(registry.len(), 1);

        register(&mut registry);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.render(&value), once);
    }

    #[test]
    fn test_chain_falls_through_to_default() {
        let mut registry: PrinterRegistry<MockValue> = PrinterRegistry::new();
        register(&mut registry);

        let value = MockValue::leaf(5, 4).with_type_name("int");
        assert_eq!(registry.render(&value), None);
    }
}
