//! Hexadecimal helpers for IPv6 partitions.

/// Width of a canonical IPv6 partition.
pub const PARTITION_WIDTH: usize = 4;

/// Returns `true` if `s` denotes a valid IPv6 partition: 1 to 4 hex digits,
/// either case. Signs, whitespace and a `0x` prefix are rejected.
pub fn is_ipv6_partition(s: &str) -> bool {
    (1..=PARTITION_WIDTH).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Formats `value` as a zero-padded, uppercase, 4-digit hex string.
pub fn num_to_hex(value: u16) -> String {
    format!("{value:0width$X}", width = PARTITION_WIDTH)
}

/// Numeric value of a partition, `None` unless it passes [`is_ipv6_partition`].
pub(crate) fn partition_value(s: &str) -> Option<u16> {
    if !is_ipv6_partition(s) {
        return None;
    }
    u16::from_str_radix(s, 16).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
