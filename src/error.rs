use thiserror::Error;

macro_rules! missing_field {
    ($field:expr) => {
        crate::Error::MissingField { field: $field }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Decode failures are deliberately narrow: a type name that does not belong to the
/// safe-numbers family is *not* an error (classification returns `None` and the host
/// falls back to its default rendering). The only genuine failure mode is a value
/// whose memory layout disagrees with its classified type name.
///
/// Every failure is local to the value being decoded; one malformed value never
/// affects the decoding of any other value, and errors are surfaced to the host as
/// a diagnostic display string rather than propagated as a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An expected named field was absent while unwrapping a value.
    ///
    /// This indicates a layering mismatch between the classified type name and the
    /// value's actual layout, or an unsupported ABI. The decoder facade renders it
    /// as `<invalid {variant}: {error}>` instead of aborting the host session.
    #[error("missing field `{field}`")]
    MissingField {
        /// The field the host value did not expose
        field: &'static str,
    },
}
