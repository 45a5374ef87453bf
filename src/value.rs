//! Host debugger value access.
//!
//! The decoder never talks to a debugger directly. Front-ends (a GDB
//! pretty-printer, an LLDB summary provider, an embedded debug console)
//! wrap their native value handles in [`HostValue`] and hand them to
//! [`decode`](crate::decoder::decode). The trait is the complete contract:
//! a type name, named-child lookup, an unsigned read, and the storage size.
//! Nothing here mutates the inspected process.

/// A live value exposed by the host debugger's introspection interface.
///
/// Implementations typically wrap a `gdb.Value` or an LLDB `SBValue`-style
/// handle. Child lookup doubles as the has-field predicate: probing for the
/// `low` member is how the split 128-bit representation is detected.
pub trait HostValue: Sized {
    /// The declared type name of this value, exactly as the host spells it
    /// (qualifiers and reference markers included).
    fn type_name(&self) -> &str;

    /// Looks up a named child field, or `None` if no such member exists.
    fn field(&self, name: &str) -> Option<&Self>;

    /// Reads this value as an unsigned integer. Hosts may sign- or
    /// zero-extend narrow storage; callers mask to the declared width.
    fn as_unsigned(&self) -> u128;

    /// Size of this value's storage in bytes.
    fn byte_size(&self) -> usize;

    /// Returns `true` if a named child field exists.
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Name of the storage member at every nesting layer of the safe-numbers
/// family. Each wrapper type holds its payload in a field of this name.
pub const BASIS_FIELD: &str = "basis_";

/// Name of the low 64-bit half of the split 128-bit representation.
pub const LOW_FIELD: &str = "low";

/// Name of the high 64-bit half of the split 128-bit representation.
pub const HIGH_FIELD: &str = "high";
