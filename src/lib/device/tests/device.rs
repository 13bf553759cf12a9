use device::{ClassId, DeviceId, Driver, Error, ErrorKind};

static IDS: [DeviceId; 2] = [
    DeviceId::new("vendor,soc-clk", 0),
    DeviceId::new("vendor,soc-clk-v2", 2),
];

static DRIVER: Driver = Driver::new("soc-clk", ClassId::Clk, &IDS);

#[test]
fn test_driver_matches_compatible() {
    assert_eq!(DRIVER.name(), "soc-clk");
    assert_eq!(DRIVER.id(), ClassId::Clk);
    assert_eq!(DRIVER.of_match().len(), 2);

    let m = DRIVER.matches("vendor,soc-clk-v2").map(|m| m.data());
    assert_eq!(m, Some(2));
    assert!(DRIVER.matches("vendor,soc-pinctrl").is_none());
}

#[test]
fn test_error_kind_is_its_own_error() {
    assert_eq!(ErrorKind::OutOfRange.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        format!("{}", ErrorKind::NoDevice),
        "The device could not be found"
    );
}
