//! HID device model and device selection.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::SystemTime;

use crate::host::DeviceProperties;
use crate::{Error, Result};

/// Enumerated HID device.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeviceInfo {
    /// Zero-based position in the enumeration order.
    pub index: usize,
    pub vendor_id: u16,
    pub product_id: u16,
    pub product: String,
    pub manufacturer: String,
    pub serial_number: String,
}

impl DeviceInfo {
    /// Creates the entry for the device at the specified enumeration index.
    #[must_use]
    pub fn new(index: usize, p: &DeviceProperties) -> Self {
        Self {
            index,
            vendor_id: p.vendor_id,
            product_id: p.product_id,
            product: p.product.clone(),
            manufacturer: p.manufacturer.clone(),
            serial_number: p.serial_number.clone(),
        }
    }
}

impl Display for DeviceInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {:04X}:{:04X}", self.index, self.vendor_id, self.product_id)?;
        if !self.product.is_empty() {
            write!(f, " ({})", self.product)?;
        }
        Ok(())
    }
}

/// USB device descriptor fields with resolved strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeviceDescriptor {
    pub class: u8,
    pub sub_class: u8,
    pub protocol: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    /// Device release number, such as `"2.10"`.
    pub bcd_device: String,
    pub manufacturer: String,
    pub product: String,
    pub serial_number: String,
}

impl From<&DeviceProperties> for DeviceDescriptor {
    fn from(p: &DeviceProperties) -> Self {
        Self {
            class: p.class,
            sub_class: p.sub_class,
            protocol: p.protocol,
            vendor_id: p.vendor_id,
            product_id: p.product_id,
            bcd_device: format_bcd(p.bcd_device),
            manufacturer: p.manufacturer.clone(),
            product: p.product.clone(),
            serial_number: p.serial_number.clone(),
        }
    }
}

/// Formats a BCD release number as `<major>.<minor>`. The major byte is
/// printed in decimal and each minor nibble is a decimal digit.
#[must_use]
pub fn format_bcd(v: u16) -> String {
    let minor = v & 0xFF;
    format!("{}.{:02}", v >> 8, (minor >> 4) * 10 + (minor & 0x0F))
}

/// Input report received from a device.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HidReport {
    pub timestamp: SystemTime,
    /// Report ID or 0 if the device does not use report IDs.
    pub report_id: u8,
    pub data: Vec<u8>,
}

impl HidReport {
    /// Creates a report from an interrupt transfer. If the device uses report
    /// IDs, the first byte of the transfer is the ID.
    #[must_use]
    pub fn from_transfer(timestamp: SystemTime, b: &[u8], uses_report_ids: bool) -> Self {
        let (report_id, data) = match b.split_first() {
            Some((&id, data)) if uses_report_ids => (id, data),
            _ => (0, b),
        };
        Self {
            timestamp,
            report_id,
            data: data.to_vec(),
        }
    }
}

/// Device selector given on the command line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeviceSpecifier {
    /// Index from the device list.
    Index(usize),
    /// Vendor and product IDs.
    VidPid { vendor_id: u16, product_id: u16 },
}

impl DeviceSpecifier {
    /// Returns the single listed device matching the specifier.
    pub fn resolve<'a>(&self, devs: &'a [DeviceInfo]) -> Result<&'a DeviceInfo> {
        match *self {
            Self::Index(i) => devs.iter().find(|d| d.index == i),
            Self::VidPid {
                vendor_id,
                product_id,
            } => {
                let mut it = (devs.iter())
                    .filter(|d| d.vendor_id == vendor_id && d.product_id == product_id);
                let first = it.next();
                let rest = it.count();
                if rest > 0 {
                    return Err(Error::AmbiguousDevice { count: rest + 1 });
                }
                first
            }
        }
        .ok_or_else(|| Error::DeviceNotFound {
            specifier: self.to_string(),
        })
    }
}

impl FromStr for DeviceSpecifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDeviceSpecifier {
            input: s.to_owned(),
        };
        let t = s.trim();
        if t.is_empty() {
            return Err(invalid());
        }
        if t.contains(':') {
            let mut parts = t.split(':');
            let (Some(v), Some(p), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(invalid());
            };
            return match (parse_id(v), parse_id(p)) {
                (Some(vendor_id), Some(product_id)) => Ok(Self::VidPid {
                    vendor_id,
                    product_id,
                }),
                _ => Err(invalid()),
            };
        }
        if !t.bytes().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        t.parse().map(Self::Index).map_err(|_| invalid())
    }
}

impl Display for DeviceSpecifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Index(i) => write!(f, "index {i}"),
            Self::VidPid {
                vendor_id,
                product_id,
            } => write!(f, "{vendor_id:04X}:{product_id:04X}"),
        }
    }
}

/// Parses a hexadecimal vendor or product ID with an optional `0x` prefix.
fn parse_id(s: &str) -> Option<u16> {
    let h = (s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))).unwrap_or(s);
    if h.is_empty() || !h.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(h, 16)
        .ok()
        .and_then(|v| u16::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use matches::assert_matches;

    use super::*;

    fn dev(index: usize, vendor_id: u16, product_id: u16) -> DeviceInfo {
        DeviceInfo {
            index,
            vendor_id,
            product_id,
            ..DeviceInfo::default()
        }
    }

    #[test]
    fn parse_index() {
        assert_eq!("0".parse::<DeviceSpecifier>(), Ok(DeviceSpecifier::Index(0)));
        assert_eq!(" 12\t".parse::<DeviceSpecifier>(), Ok(DeviceSpecifier::Index(12)));
        assert_eq!("007".parse::<DeviceSpecifier>(), Ok(DeviceSpecifier::Index(7)));
    }

    #[test]
    fn parse_vid_pid() {
        let want = DeviceSpecifier::VidPid {
            vendor_id: 0x046D,
            product_id: 0xC077,
        };
        for s in ["046D:C077", "046d:c077", "0x046D:0XC077", " 46d:0xc077 "] {
            assert_eq!(s.parse::<DeviceSpecifier>(), Ok(want), "{s}");
        }
        assert_eq!(
            "0:FFFF".parse::<DeviceSpecifier>(),
            Ok(DeviceSpecifier::VidPid {
                vendor_id: 0,
                product_id: 0xFFFF
            })
        );
    }

    #[test]
    fn parse_invalid() {
        for s in [
            "", "  ", "-1", "+1", "1.5", "abc", ":", "046D:", ":C077", "046D:C077:1", "0x:1",
            "10000:1", "1:10000", "G:1", "1:+1", "0x0x1:1",
        ] {
            assert_matches!(
                s.parse::<DeviceSpecifier>(),
                Err(Error::InvalidDeviceSpecifier { input }) if input == s
            );
        }
        let huge = "99999999999999999999999999";
        assert_matches!(
            huge.parse::<DeviceSpecifier>(),
            Err(Error::InvalidDeviceSpecifier { .. })
        );
    }

    #[test]
    fn resolve() {
        let devs = [dev(0, 0x046D, 0xC077), dev(1, 0x05AC, 0x024F), dev(2, 0x046D, 0xC077)];
        assert_eq!(DeviceSpecifier::Index(1).resolve(&devs), Ok(&devs[1]));
        assert_matches!(
            DeviceSpecifier::Index(3).resolve(&devs),
            Err(Error::DeviceNotFound { specifier }) if specifier == "index 3"
        );
        let spec = DeviceSpecifier::VidPid {
            vendor_id: 0x05AC,
            product_id: 0x024F,
        };
        assert_eq!(spec.resolve(&devs), Ok(&devs[1]));
        let spec = DeviceSpecifier::VidPid {
            vendor_id: 0x046D,
            product_id: 0xC077,
        };
        assert_matches!(
            spec.resolve(&devs),
            Err(Error::AmbiguousDevice { count: 2 })
        );
        let spec = DeviceSpecifier::VidPid {
            vendor_id: 0x1234,
            product_id: 0xABCD,
        };
        assert_matches!(
            spec.resolve(&devs),
            Err(Error::DeviceNotFound { specifier }) if specifier == "1234:ABCD"
        );
        assert_matches!(
            DeviceSpecifier::Index(0).resolve(&[]),
            Err(Error::DeviceNotFound { .. })
        );
    }

    #[test]
    fn bcd() {
        assert_eq!(format_bcd(0x0210), "2.10");
        assert_eq!(format_bcd(0x0100), "1.00");
        assert_eq!(format_bcd(0x1234), "18.34");
        assert_eq!(format_bcd(0x0000), "0.00");
        assert_eq!(format_bcd(0x0199), "1.99");
        // Nibbles outside 0-9 are still weighted as decimal digits
        assert_eq!(format_bcd(0x011A), "1.20");
        assert_eq!(format_bcd(0x02A0), "2.100");
        assert_eq!(format_bcd(0xFFFF), "255.165");
    }

    #[test]
    fn descriptor_from_properties() {
        let p = DeviceProperties {
            vendor_id: 0x046D,
            product_id: 0xC077,
            bcd_device: 0x7200,
            product: "USB Optical Mouse".to_owned(),
            manufacturer: "Logitech".to_owned(),
            ..DeviceProperties::default()
        };
        let d = DeviceDescriptor::from(&p);
        assert_eq!(d.bcd_device, "114.00");
        assert_eq!(d.product, "USB Optical Mouse");
        assert_eq!(d.serial_number, "");

        let i = DeviceInfo::new(4, &p);
        assert_eq!(i.to_string(), "#4 046D:C077 (USB Optical Mouse)");
        assert_eq!(DeviceInfo::new(0, &DeviceProperties::default()).to_string(), "#0 0000:0000");
    }

    #[test]
    fn report_from_transfer() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_millis(1);
        let r = HidReport::from_transfer(t, &[0x02, 0x10, 0x20], true);
        assert_eq!((r.report_id, r.data.as_slice()), (2, [0x10, 0x20].as_slice()));
        let r = HidReport::from_transfer(t, &[0x02, 0x10, 0x20], false);
        assert_eq!((r.report_id, r.data.as_slice()), (0, [0x02, 0x10, 0x20].as_slice()));
        let r = HidReport::from_transfer(t, &[], true);
        assert_eq!((r.report_id, r.data.len()), (0, 0));
        assert_eq!(r.timestamp, t);
    }
}
