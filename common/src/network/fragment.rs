//! # Address Fragments
//!
//! A fragment is one segment of an IP address: an octet of an IPv4 address or
//! a hextet of an IPv6 address.
//!
//! Every fragment is normalized at construction:
//! * Numbers outside the family's range are clamped to the nearest bound
//!   (saturating, never wrapping). This is not an error.
//! * Input of the wrong type, or IPv6 text that is not 1 to 4 hex digits, is
//!   rejected with a [`FragmentError`]. No fragment is produced.
//!
//! Fragments are immutable `Copy` values. Fragments of the same family are
//! totally ordered by numeric magnitude.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::FragmentError;
use crate::network::raw::RawValue;
use crate::utils::hex;

pub const IPV4_RANGE_MIN: i128 = 0;
pub const IPV4_RANGE_MAX: i128 = u8::MAX as i128;
pub const IPV6_RANGE_MIN: i128 = 0;
pub const IPV6_RANGE_MAX: i128 = u16::MAX as i128;

/// Address family of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub const fn range_min(self) -> i128 {
        match self {
            Family::V4 => IPV4_RANGE_MIN,
            Family::V6 => IPV6_RANGE_MIN,
        }
    }

    pub const fn range_max(self) -> i128 {
        match self {
            Family::V4 => IPV4_RANGE_MAX,
            Family::V6 => IPV6_RANGE_MAX,
        }
    }

    /// Whether `raw` is kept as-is by the integer path, i.e. not clamped.
    pub fn contains(self, raw: i128) -> bool {
        (self.range_min()..=self.range_max()).contains(&raw)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Contract shared by [`FragmentV4`] and [`FragmentV6`].
///
/// Ordering comes from the `Ord` supertrait and is only meaningful between
/// fragments of the same family, which the type system enforces here. Use
/// [`Fragment`] to hold either family.
pub trait AddressFragment: Sized + Copy + Ord + fmt::Display {
    /// Canonical representation of the fragment's value.
    type Value;

    const FAMILY: Family;

    /// Builds a fragment from loosely-typed input, choosing the construction
    /// path from the input's type.
    fn from_raw(raw: RawValue) -> Result<Self, FragmentError>;

    /// Saturating clamp of an integer into the family's range.
    fn clamp(raw: i128) -> Self::Value;

    fn value(&self) -> Self::Value;

    fn range_min() -> Self::Value;

    fn range_max() -> Self::Value;

    fn family(&self) -> Family {
        Self::FAMILY
    }

    /// Canonical display form.
    fn render(&self) -> String {
        self.to_string()
    }
}

fn log_clamp(family: Family, raw: i128, clamped: &dyn fmt::Display) {
    if !family.contains(raw) {
        debug!(%family, %raw, %clamped, "fragment input clamped to range");
    }
}

// ─── IPv4 ────────────────────────────────────────────────────────────────────

/// One octet of an IPv4 address, `0..=255`, rendered in decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentV4 {
    value: u8,
}

impl FragmentV4 {
    /// Builds an octet from any integer, clamping it to `0..=255`.
    pub fn new(raw: i128) -> Self {
        let value = Self::clamp_range(raw);
        trace!(%raw, value, "built IPv4 fragment");
        Self { value }
    }

    pub fn clamp_range(raw: i128) -> u8 {
        let clamped = raw.clamp(IPV4_RANGE_MIN, IPV4_RANGE_MAX) as u8;
        log_clamp(Family::V4, raw, &clamped);
        clamped
    }

    pub fn as_u8(&self) -> u8 {
        self.value
    }
}

impl AddressFragment for FragmentV4 {
    type Value = u8;

    const FAMILY: Family = Family::V4;

    /// Only integers are accepted. Strings and floats are not coerced.
    fn from_raw(raw: RawValue) -> Result<Self, FragmentError> {
        match raw {
            RawValue::Int(i) => Ok(Self::new(i)),
            other => Err(FragmentError::InvalidInputType {
                family: Self::FAMILY,
                kind: other.kind(),
            }),
        }
    }

    fn clamp(raw: i128) -> u8 {
        Self::clamp_range(raw)
    }

    fn value(&self) -> u8 {
        self.value
    }

    fn range_min() -> u8 {
        IPV4_RANGE_MIN as u8
    }

    fn range_max() -> u8 {
        IPV4_RANGE_MAX as u8
    }
}

impl From<u8> for FragmentV4 {
    fn from(value: u8) -> Self {
        Self { value }
    }
}

impl fmt::Display for FragmentV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ─── IPv6 ────────────────────────────────────────────────────────────────────

/// One hextet of an IPv6 address, rendered as 4 uppercase hex digits.
///
/// Both construction paths produce the same fixed-width form, so `"a"` and
/// `10` both become `000A`. The numeric value doubles as the sort key, which
/// orders exactly like the rendered strings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FragmentV6 {
    sort_key: u16,
}

impl FragmentV6 {
    /// Integer path: clamps to `0..=0xFFFF`.
    pub fn from_int(raw: i128) -> Self {
        let sort_key = raw.clamp(IPV6_RANGE_MIN, IPV6_RANGE_MAX) as u16;
        let fragment = Self { sort_key };
        log_clamp(Family::V6, raw, &fragment);
        trace!(%raw, value = %fragment, "built IPv6 fragment");
        fragment
    }

    /// String path: accepts 1 to 4 hex digits in either case.
    pub fn parse(s: &str) -> Result<Self, FragmentError> {
        let sort_key = hex::partition_value(s).ok_or_else(|| FragmentError::InvalidFormat {
            input: s.to_string(),
        })?;
        let fragment = Self { sort_key };
        trace!(input = s, value = %fragment, "built IPv6 fragment");
        Ok(fragment)
    }

    pub fn clamp_range(raw: i128) -> String {
        Self::from_int(raw).value()
    }

    /// Normalizes a partition string to its canonical 4-digit uppercase form.
    pub fn clamp_range_str(s: &str) -> Result<String, FragmentError> {
        Self::parse(s).map(|fragment| fragment.value())
    }

    pub fn as_u16(&self) -> u16 {
        self.sort_key
    }
}

impl AddressFragment for FragmentV6 {
    type Value = String;

    const FAMILY: Family = Family::V6;

    fn from_raw(raw: RawValue) -> Result<Self, FragmentError> {
        match raw {
            RawValue::Int(i) => Ok(Self::from_int(i)),
            RawValue::Str(s) => Self::parse(&s),
            other => Err(FragmentError::InvalidInputType {
                family: Self::FAMILY,
                kind: other.kind(),
            }),
        }
    }

    fn clamp(raw: i128) -> String {
        Self::clamp_range(raw)
    }

    fn value(&self) -> String {
        hex::num_to_hex(self.sort_key)
    }

    fn range_min() -> String {
        hex::num_to_hex(IPV6_RANGE_MIN as u16)
    }

    fn range_max() -> String {
        hex::num_to_hex(IPV6_RANGE_MAX as u16)
    }
}

impl From<u16> for FragmentV6 {
    fn from(sort_key: u16) -> Self {
        Self { sort_key }
    }
}

impl FromStr for FragmentV6 {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FragmentV6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.sort_key)
    }
}

// ─── Either family ───────────────────────────────────────────────────────────

/// A fragment of either family.
///
/// Fragments of different families are never equal and have no ordering:
/// `partial_cmp` returns `None` for a mixed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    V4(FragmentV4),
    V6(FragmentV6),
}

impl Fragment {
    pub fn from_raw(family: Family, raw: RawValue) -> Result<Self, FragmentError> {
        match family {
            Family::V4 => FragmentV4::from_raw(raw).map(Fragment::V4),
            Family::V6 => FragmentV6::from_raw(raw).map(Fragment::V6),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Fragment::V4(_) => Family::V4,
            Fragment::V6(_) => Family::V6,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl PartialOrd for Fragment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Fragment::V4(a), Fragment::V4(b)) => Some(a.cmp(b)),
            (Fragment::V6(a), Fragment::V6(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<FragmentV4> for Fragment {
    fn from(fragment: FragmentV4) -> Self {
        Fragment::V4(fragment)
    }
}

impl From<FragmentV6> for Fragment {
    fn from(fragment: FragmentV6) -> Self {
        Fragment::V6(fragment)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::V4(fragment) => fmt::Display::fmt(fragment, f),
            Fragment::V6(fragment) => fmt::Display::fmt(fragment, f),
        }
    }
}

// ─── serde ───────────────────────────────────────────────────────────────────

// Fragments serialize to their rendered form and deserialize through the same
// raw-input dispatch as every other constructor.

impl Serialize for FragmentV4 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for FragmentV6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn deserialize_raw<'de, D: Deserializer<'de>, F: AddressFragment>(
    deserializer: D,
) -> Result<F, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    F::from_raw(RawValue::from(value)).map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for FragmentV4 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_raw(deserializer)
    }
}

impl<'de> Deserialize<'de> for FragmentV6 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_raw(deserializer)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
