#![cfg(test)]
use ipgen_common::network::{AddressFragment, Fragment, FragmentV4, FragmentV6};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sorting a shuffled collection of octets must match numeric order.
#[test]
fn sort_v4_collection() {
    let mut octets: Vec<FragmentV4> = [200, -3, 17, 999, 0, 42, 255]
        .into_iter()
        .map(FragmentV4::new)
        .collect();
    octets.sort();

    let rendered: Vec<String> = octets.iter().map(|o| o.render()).collect();
    assert_eq!(rendered, ["0", "0", "17", "42", "200", "255", "255"]);
}

/// Mixing the integer and string construction paths still orders numerically.
#[test]
fn sort_v6_mixed_paths() {
    let mut hextets = vec![
        FragmentV6::parse("0F00").unwrap(),
        FragmentV6::from_int(0xFF),
        FragmentV6::parse("b").unwrap(),
        FragmentV6::from_int(70_000),
        FragmentV6::parse("a0").unwrap(),
        FragmentV6::from_int(-1),
    ];
    hextets.sort();

    let rendered: Vec<String> = hextets.iter().map(|h| h.render()).collect();
    assert_eq!(rendered, ["0000", "000B", "00A0", "00FF", "0F00", "FFFF"]);
}

#[test]
fn clamped_values_collapse_in_sets() {
    let set: BTreeSet<FragmentV4> = [256, 300, 255, -1, 0].into_iter().map(FragmentV4::new).collect();
    assert_eq!(set.len(), 2);
    assert_eq!(set.first().map(FragmentV4::as_u8), Some(0));
    assert_eq!(set.last().map(FragmentV4::as_u8), Some(255));

    let set: BTreeSet<FragmentV6> = ["ff", "00ff", "00FF", "FF"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn mixed_families_are_unordered() {
    let v4 = Fragment::from(FragmentV4::new(1));
    let v6 = Fragment::from(FragmentV6::from_int(1));

    assert_eq!(v4.partial_cmp(&v6), None);
    assert!(!(v4 < v6) && !(v4 > v6));
    assert_ne!(v4, v6);

    let other = Fragment::from(FragmentV6::from_int(2));
    assert_eq!(v6.partial_cmp(&other), Some(Ordering::Less));
}
