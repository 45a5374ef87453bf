//! Type-name classification for the safe-numbers family.
//!
//! The host hands us a raw type-name string; this module decides which of the
//! supported variants it denotes and, for bounded types, extracts the two
//! range bounds from the template parameter text.
//!
//! # Recognized spellings
//!
//! - Canonical plain storage: `boost::safe_numbers::detail::unsigned_integer_basis<P>`
//!   where `P` selects the width (`unsigned char`, `unsigned short`,
//!   `unsigned int`, `unsigned long`/`unsigned long long`, or
//!   `boost::safe_numbers::int128::uint128_t`).
//! - Short aliases `u8`..`u128`, under any namespace qualification.
//! - `bounded_uint<Min, Max>`, under any namespace qualification.
//! - Canonical verified storage: `boost::safe_numbers::detail::verified_type_basis<Inner>`
//!   where `Inner` is a canonical plain or bounded spelling.
//! - Verified aliases `verified_u8`..`verified_u128` and
//!   `verified_bounded_integer<Min, Max>`, under any namespace qualification.
//!
//! A leading `const ` qualifier and a trailing reference marker are stripped
//! before matching. Pointer types are rejected outright: dereferencing is a
//! distinct operation the decoder does not perform. Anything else that fails
//! to match classifies to `None` and the host keeps its default rendering.
//!
//! Bound parameters are opaque text. They are split on the top-level comma,
//! whitespace-trimmed, and stripped of trailing integer-literal suffix
//! letters, but never evaluated.

use strum::{EnumCount, EnumIter};

/// Storage width of a plain safe integer, in bits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, EnumCount)]
pub enum Width {
    /// 8-bit storage (`u8`)
    W8,
    /// 16-bit storage (`u16`)
    W16,
    /// 32-bit storage (`u32`)
    W32,
    /// 64-bit storage (`u64`)
    W64,
    /// 128-bit storage (`u128`), held as two 64-bit words
    W128,
}

impl Width {
    /// Number of significant bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
        }
    }

    /// Bit mask selecting exactly [`bits`](Self::bits) low bits.
    #[must_use]
    pub const fn mask(self) -> u128 {
        match self {
            Width::W128 => u128::MAX,
            _ => (1 << self.bits()) - 1,
        }
    }

    /// The short alias name (`"u8"` .. `"u128"`).
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Width::W8 => "u8",
            Width::W16 => "u16",
            Width::W32 => "u32",
            Width::W64 => "u64",
            Width::W128 => "u128",
        }
    }

    /// The `verified_*` alias name for this width.
    #[must_use]
    pub const fn verified_alias(self) -> &'static str {
        match self {
            Width::W8 => "verified_u8",
            Width::W16 => "verified_u16",
            Width::W32 => "verified_u32",
            Width::W64 => "verified_u64",
            Width::W128 => "verified_u128",
        }
    }
}

/// The two range bounds carried in a bounded type's template parameters.
///
/// Both sides are the literal expressions from the type name with trailing
/// integer-literal suffix letters stripped (`10U` becomes `10`). They are
/// retained as text and never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    /// Lower bound, verbatim from the type name
    pub min: String,
    /// Upper bound, verbatim from the type name
    pub max: String,
}

impl Bounds {
    /// Creates bounds from already-extracted literal text.
    #[must_use]
    pub fn new(min: &str, max: &str) -> Self {
        Bounds {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// The integer layout wrapped by a verified type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inner {
    /// A plain width-only integer
    Plain(Width),
    /// A range-bounded integer
    Bounded(Bounds),
}

/// A classified safe-numbers type.
///
/// The closed set of shapes the decoder understands. `Verified` adds exactly
/// one extra nesting layer around its inner layout and never changes width
/// or bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeVariant {
    /// A bare bounded-width unsigned integer
    Plain(Width),
    /// An integer constrained to a declared `[min, max]` range.
    ///
    /// The type name alone does not reveal which storage width the range
    /// selected, so bounded variants carry no width; reconstruction discovers
    /// it from the value itself.
    Bounded(Bounds),
    /// A checked wrapper around a plain or bounded integer
    Verified(Inner),
}

impl TypeVariant {
    /// Storage width, when the type name alone determines it.
    ///
    /// `None` for bounded shapes, whose width is discovered structurally
    /// during reconstruction.
    #[must_use]
    pub fn width(&self) -> Option<Width> {
        match self {
            TypeVariant::Plain(width) | TypeVariant::Verified(Inner::Plain(width)) => Some(*width),
            TypeVariant::Bounded(_) | TypeVariant::Verified(Inner::Bounded(_)) => None,
        }
    }

    /// Declared bounds, for bounded-shaped variants.
    #[must_use]
    pub fn bounds(&self) -> Option<&Bounds> {
        match self {
            TypeVariant::Bounded(bounds) | TypeVariant::Verified(Inner::Bounded(bounds)) => {
                Some(bounds)
            }
            TypeVariant::Plain(_) | TypeVariant::Verified(Inner::Plain(_)) => None,
        }
    }

    /// Short variant name used in diagnostics (`"u8"`, `"bounded_uint"`, ...).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TypeVariant::Plain(width) => width.alias(),
            TypeVariant::Bounded(_) => "bounded_uint",
            TypeVariant::Verified(Inner::Plain(width)) => width.verified_alias(),
            TypeVariant::Verified(Inner::Bounded(_)) => "verified_bounded_uint",
        }
    }
}

const BASIS_CANONICAL: &str = "boost::safe_numbers::detail::unsigned_integer_basis";
const VERIFIED_CANONICAL: &str = "boost::safe_numbers::detail::verified_type_basis";

/// Classifies a type name into the safe-numbers variant it denotes.
///
/// Returns `None` for pointers and for any name outside the supported family;
/// the caller falls back to the host's default rendering in that case.
///
/// # Examples
///
/// ```rust
/// use numscope::{classify, TypeVariant, Width};
///
/// assert_eq!(
///     classify("boost::safe_numbers::u32"),
///     Some(TypeVariant::Plain(Width::W32))
/// );
///
/// let bounded = classify("bounded_uint<10U, 20ULL>").unwrap();
/// let bounds = bounded.bounds().unwrap();
/// assert_eq!((bounds.min.as_str(), bounds.max.as_str()), ("10", "20"));
///
/// // Pointers are never decoded.
/// assert_eq!(classify("boost::safe_numbers::u32 *"), None);
/// ```
#[must_use]
pub fn classify(type_name: &str) -> Option<TypeVariant> {
    let name = strip_qualifiers(type_name)?;
    if let Some(width) = classify_plain(name) {
        return Some(TypeVariant::Plain(width));
    }
    if let Some(bounds) = classify_bounded(name) {
        return Some(TypeVariant::Bounded(bounds));
    }
    classify_verified(name).map(TypeVariant::Verified)
}

/// Strips a leading constness qualifier and a trailing reference marker.
/// Pointer types are rejected, not stripped.
fn strip_qualifiers(raw: &str) -> Option<&str> {
    let mut name = raw.trim();
    if let Some(rest) = name.strip_prefix("const ") {
        name = rest.trim_start();
    }
    if name.ends_with('*') {
        return None;
    }
    if let Some(rest) = name.strip_suffix('&') {
        name = rest.trim_end();
    }
    if name.is_empty() {
        return None;
    }
    Some(name)
}

fn classify_plain(name: &str) -> Option<Width> {
    if name.contains('<') {
        return canonical_basis_width(name);
    }
    match qualified_tail(name)? {
        "u8" => Some(Width::W8),
        "u16" => Some(Width::W16),
        "u32" => Some(Width::W32),
        "u64" => Some(Width::W64),
        "u128" => Some(Width::W128),
        _ => None,
    }
}

fn classify_bounded(name: &str) -> Option<Bounds> {
    let (head, params) = split_template(name)?;
    if qualified_tail(head)? != "bounded_uint" {
        return None;
    }
    parse_bounds(params)
}

fn classify_verified(name: &str) -> Option<Inner> {
    let Some((head, params)) = split_template(name) else {
        // Width-carrying aliases have no template parameters.
        return match qualified_tail(name)? {
            "verified_u8" => Some(Inner::Plain(Width::W8)),
            "verified_u16" => Some(Inner::Plain(Width::W16)),
            "verified_u32" => Some(Inner::Plain(Width::W32)),
            "verified_u64" => Some(Inner::Plain(Width::W64)),
            "verified_u128" => Some(Inner::Plain(Width::W128)),
            _ => None,
        };
    };
    if head == VERIFIED_CANONICAL {
        let inner = params.trim();
        if let Some(width) = canonical_basis_width(inner) {
            return Some(Inner::Plain(width));
        }
        return classify_bounded(inner).map(Inner::Bounded);
    }
    if qualified_tail(head)? == "verified_bounded_integer" {
        return parse_bounds(params).map(Inner::Bounded);
    }
    None
}

/// Width of the canonical `unsigned_integer_basis<P>` spelling, if `name` is one.
fn canonical_basis_width(name: &str) -> Option<Width> {
    let (head, param) = split_template(name)?;
    if head != BASIS_CANONICAL {
        return None;
    }
    match param.trim() {
        "unsigned char" => Some(Width::W8),
        "unsigned short" => Some(Width::W16),
        "unsigned int" => Some(Width::W32),
        // The platform's two 64-bit storage spellings are identical to us.
        "unsigned long" | "unsigned long long" => Some(Width::W64),
        "boost::safe_numbers::int128::uint128_t" => Some(Width::W128),
        _ => None,
    }
}

/// Splits `head<params>` at the outermost angle brackets.
fn split_template(name: &str) -> Option<(&str, &str)> {
    let open = name.find('<')?;
    let close = name.rfind('>')?;
    if close < open {
        return None;
    }
    Some((&name[..open], name[open + 1..close].trim()))
}

/// Strips any `ns::`-style qualification, requiring every leading segment to
/// be a plain identifier. Returns the final segment.
fn qualified_tail(name: &str) -> Option<&str> {
    let Some(idx) = name.rfind("::") else {
        return Some(name);
    };
    for segment in name[..idx].split("::") {
        if segment.is_empty()
            || !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return None;
        }
    }
    Some(&name[idx + 2..])
}

/// Splits bounded template parameters on the top-level comma and strips each
/// side down to its literal text.
fn parse_bounds(params: &str) -> Option<Bounds> {
    let mut depth = 0usize;
    for (idx, ch) in params.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                let min = strip_literal_suffix(params[..idx].trim());
                let max = strip_literal_suffix(params[idx + 1..].trim());
                if min.is_empty() || max.is_empty() {
                    return None;
                }
                return Some(Bounds::new(min, max));
            }
            _ => {}
        }
    }
    None
}

/// Strips trailing unsignedness/length suffix letters from an integer literal
/// (`10U` -> `10`, `20ULL` -> `20`).
fn strip_literal_suffix(text: &str) -> &str {
    text.trim_end_matches(['u', 'U', 'l', 'L'])
}
