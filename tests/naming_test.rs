use kothi::error::Error;
use kothi::naming::derive;

#[test]
fn test_class_identifier() {
    assert_eq!(derive("kot-printer").unwrap().class_identifier, "KotPrinterPlugin");
    assert_eq!(derive("payment-gateway").unwrap().class_identifier, "PaymentGatewayPlugin");
    assert_eq!(derive("x").unwrap().class_identifier, "XPlugin");
    assert_eq!(derive("v2-api").unwrap().class_identifier, "V2ApiPlugin");
    assert_eq!(derive("a-1b").unwrap().class_identifier, "A1bPlugin");
}

#[test]
fn test_slug_is_raw_name() {
    assert_eq!(derive("kot-printer").unwrap().slug, "kot-printer");
}

#[test]
fn test_derive_is_deterministic() {
    for name in ["kot-printer", "payment-gateway", "x", "table-qr-menu"] {
        let first = derive(name).unwrap();
        let second = derive(name).unwrap();
        assert_eq!(first, second);

        let class = &first.class_identifier;
        assert!(class.ends_with("Plugin"));
        assert!(class.chars().next().unwrap().is_ascii_uppercase());
        assert!(class.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn test_invalid_names() {
    let names = [
        "",
        "Bad_Name",
        "-leading",
        "trailing-",
        "double--hyphen",
        "1st",
        "kot printer",
        "kot.printer",
    ];
    for name in names {
        match derive(name) {
            Err(Error::InvalidName { name: reported }) => assert_eq!(reported, name),
            other => panic!("Expected InvalidName for {name:?}, got {other:?}"),
        }
    }
}
