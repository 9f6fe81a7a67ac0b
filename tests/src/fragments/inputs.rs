#![cfg(test)]
use ipgen_common::error::FragmentError;
use ipgen_common::network::{AddressFragment, Family, Fragment, FragmentV4, FragmentV6, RawValue};

#[test]
fn tokens_dispatch_to_the_right_path() {
    // JSON integer: integer path
    let hextet = FragmentV6::from_raw(RawValue::from_token("1234")).unwrap();
    assert_eq!(hextet.render(), "04D2");

    // Quoted or bare text: string path
    let hextet = FragmentV6::from_raw(RawValue::from_token("\"1234\"")).unwrap();
    assert_eq!(hextet.render(), "1234");
    let hextet = FragmentV6::from_raw(RawValue::from_token("beef")).unwrap();
    assert_eq!(hextet.render(), "BEEF");
}

#[test]
fn v4_never_coerces() {
    for token in ["\"10\"", "1.5", "true", "null", "{}", "[1]", "ten"] {
        let err = FragmentV4::from_raw(RawValue::from_token(token)).unwrap_err();
        assert!(
            matches!(err, FragmentError::InvalidInputType { family: Family::V4, .. }),
            "{token} gave {err:?}"
        );
    }
}

#[test]
fn v6_rejects_malformed_text() {
    for token in ["GHIJ", "\"12345\"", "\"\"", "fff f", "::1"] {
        let err = FragmentV6::from_raw(RawValue::from_token(token)).unwrap_err();
        assert!(matches!(err, FragmentError::InvalidFormat { .. }), "{token} gave {err:?}");
    }
    assert!(matches!(
        FragmentV6::from_raw(RawValue::from_token("2.5")),
        Err(FragmentError::InvalidInputType { family: Family::V6, kind: "float" })
    ));
}

#[test]
fn deserialize_address_parts() {
    let octets: Vec<FragmentV4> = serde_json::from_str("[192, 168, 1, 300]").unwrap();
    let dotted: Vec<String> = octets.iter().map(|o| o.render()).collect();
    assert_eq!(dotted.join("."), "192.168.1.255");

    let hextets: Vec<FragmentV6> = serde_json::from_str(r#"["fe80", 0, "0", 1]"#).unwrap();
    let rendered: Vec<String> = hextets.iter().map(|h| h.render()).collect();
    assert_eq!(rendered.join(":"), "FE80:0000:0000:0001");

    assert!(serde_json::from_str::<Vec<FragmentV4>>(r#"[1, "2"]"#).is_err());
}

#[test]
fn fragment_bounds() -> anyhow::Result<()> {
    assert_eq!(FragmentV4::range_min(), 0);
    assert_eq!(FragmentV4::range_max(), 255);
    assert_eq!(FragmentV6::range_min(), "0000");
    assert_eq!(FragmentV6::range_max(), "FFFF");

    let fragment = Fragment::from_raw(Family::V6, RawValue::Int(-10))?;
    assert_eq!(fragment.render(), FragmentV6::range_min());
    assert_eq!(fragment.family(), Family::V6);
    Ok(())
}

#[test]
fn exponent_shaped_partitions_take_the_string_path() {
    for (token, expected) in [("1e3", "01E3"), ("12E4", "12E4"), ("0e0", "00E0"), ("10e1", "10E1")] {
        let hextet = FragmentV6::from_raw(RawValue::from_token(token)).unwrap();
        assert_eq!(hextet.render(), expected);
    }
}

#[test]
fn huge_integer_literals_clamp() {
    let octet = FragmentV4::from_raw(RawValue::from_token("99999999999999999999")).unwrap();
    assert_eq!(octet.render(), "255");
    let octet = FragmentV4::from_raw(RawValue::from_token("-99999999999999999999")).unwrap();
    assert_eq!(octet.render(), "0");

    let octet: FragmentV4 = serde_json::from_str("99999999999999999999").unwrap();
    assert_eq!(octet.render(), "255");
    let hextet: FragmentV6 = serde_json::from_str("99999999999999999999").unwrap();
    assert_eq!(hextet.render(), "FFFF");
    let hextet: FragmentV6 = serde_json::from_str("-99999999999999999999").unwrap();
    assert_eq!(hextet.render(), "0000");

    // Exponent forms stay floats outside the token path
    assert!(serde_json::from_str::<FragmentV4>("1e20").is_err());
}
