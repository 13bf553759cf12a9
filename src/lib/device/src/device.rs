use crate::ClassId;

/// A driver for a feature or peripheral
///
/// Drivers all belong to a class, representing a class of devices of the
/// same type. The device needs information to set itself up, which is
/// found by matching compatible strings from the device tree against
/// `of_match`.
#[derive(Clone, Copy, Debug)]
pub struct Driver {
    /// Device name
    name: &'static str,
    /// Identifies the class we belong to
    id: ClassId,
    /// List of compatible strings to match, and any identifying data
    /// for each.
    of_match: &'static [DeviceId],
}

impl Driver {
    pub const fn new(name: &'static str, id: ClassId, of_match: &'static [DeviceId]) -> Self {
        Self { name, id, of_match }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn of_match(&self) -> &[DeviceId] {
        self.of_match
    }

    /// Find the match entry for a device tree `compatible` string
    pub fn matches(&self, compatible: &str) -> Option<&DeviceId> {
        self.of_match.iter().find(|m| m.compatible == compatible)
    }
}

/// Lists the compatible strings supported by a driver
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceId {
    /// Compatible string
    compatible: &'static str,
    /// Data for this compatible string
    data: u32,
}

impl DeviceId {
    pub const fn new(compatible: &'static str, data: u32) -> Self {
        Self { compatible, data }
    }

    pub fn compatible(&self) -> &str {
        self.compatible
    }

    pub fn data(&self) -> u32 {
        self.data
    }
}
