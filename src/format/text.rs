//! Human-readable output.

use std::fmt::{Display, Write};

use inspect_hid_report::{CollectionNode, ReportDescriptor, Usage};

use super::{clock, hex};
use crate::device::{DeviceDescriptor, DeviceInfo, HidReport};

/// Returns the device list as a table.
#[must_use]
pub fn device_list(devs: &[DeviceInfo]) -> String {
    if devs.is_empty() {
        return "No HID devices found.".to_owned();
    }
    let mut s = format!("{:5}  {:6}  {:6}  Product Name\n", "#", "VID", "PID");
    s.push_str(&"-".repeat(60));
    for d in devs {
        let _ = write!(
            s,
            "\n{:<5}  0x{:04X}  0x{:04X}  {}",
            d.index, d.vendor_id, d.product_id, d.product
        );
    }
    s
}

/// Returns the labelled fields of a device descriptor.
#[must_use]
pub fn device_descriptor(d: &DeviceDescriptor) -> String {
    let byte = |v: u8| format!("0x{v:02X} ({v})");
    let fields = [
        ("bDeviceClass", byte(d.class)),
        ("bDeviceSubClass", byte(d.sub_class)),
        ("bDeviceProtocol", byte(d.protocol)),
        ("idVendor", format!("0x{:04X}", d.vendor_id)),
        ("idProduct", format!("0x{:04X}", d.product_id)),
        ("bcdDevice", d.bcd_device.clone()),
        ("iManufacturer", d.manufacturer.clone()),
        ("iProduct", d.product.clone()),
        ("iSerialNumber", d.serial_number.clone()),
    ];
    let mut s = format!("Device Descriptor:\n{}", "-".repeat(40));
    for (name, v) in fields {
        let _ = write!(s, "\n  {name:16} : {v}");
    }
    s
}

/// Returns the collection tree of a report descriptor followed by its raw
/// bytes.
#[must_use]
pub fn report_descriptor(d: &ReportDescriptor) -> String {
    collections(d.collections(), d.raw())
}

/// Returns an indented collection tree followed by the raw descriptor bytes.
#[must_use]
pub fn collections(nodes: &[CollectionNode], raw: &[u8]) -> String {
    let mut s = String::new();
    if nodes.is_empty() {
        s.push_str("No collections found\n");
    }
    for n in nodes {
        collection(&mut s, n, 0);
    }
    if !raw.is_empty() {
        let _ = write!(s, "\nRaw Descriptor ({} bytes):", raw.len());
        raw_lines(&mut s, raw);
    }
    s.truncate(s.trim_end().len());
    s
}

/// Returns a report descriptor parse failure with the raw bytes that could
/// not be parsed.
#[must_use]
pub fn descriptor_error(e: &impl Display, raw: &[u8]) -> String {
    let mut s = format!("Parse error: {e}\n\nRaw Descriptor ({} bytes):", raw.len());
    raw_lines(&mut s, raw);
    s
}

/// Returns a timestamped input report.
#[must_use]
pub fn hid_report(r: &HidReport) -> String {
    let t = clock(r.timestamp);
    let data = if r.data.is_empty() {
        "(empty)".to_owned()
    } else {
        hex(&r.data)
    };
    if r.report_id == 0 {
        format!("[{t}] {data}")
    } else {
        format!("[{t}] Report ID {}: {data}", r.report_id)
    }
}

/// Returns an error message for stderr.
#[must_use]
pub fn error(e: &impl Display) -> String {
    format!("Error: {e}")
}

fn collection(s: &mut String, n: &CollectionNode, depth: usize) {
    let pad = "  ".repeat(depth);
    let u = Usage::resolve(n.usage_page, n.usage);
    let _ = writeln!(s, "{pad}Collection ({})", n.kind);
    let _ = writeln!(s, "{pad}  Usage Page: {} (0x{:04X})", u.page_name(), u.page);
    let _ = writeln!(s, "{pad}  Usage: {} (0x{:04X})", u.name(), u.id);
    for it in &n.items {
        let _ = writeln!(s, "{pad}  {it}");
    }
    for c in &n.children {
        collection(s, c, depth + 1);
    }
}

fn raw_lines(s: &mut String, raw: &[u8]) {
    for line in raw.chunks(16) {
        let _ = write!(s, "\n  {}", hex(line));
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use inspect_hid_report::{CollectionKind, Item};

    use super::*;

    const MOUSE: &[u8] = &[0x05, 0x01, 0x09, 0x02, 0xA1, 0x01, 0xC0];

    fn mouse(product: &str) -> DeviceInfo {
        DeviceInfo {
            index: 0,
            vendor_id: 0x046D,
            product_id: 0xC077,
            product: product.to_owned(),
            ..DeviceInfo::default()
        }
    }

    #[test]
    fn empty_device_list() {
        assert_eq!(device_list(&[]), "No HID devices found.");
    }

    #[test]
    fn device_table() {
        let mut kbd = mouse("Apple Keyboard");
        (kbd.index, kbd.vendor_id, kbd.product_id) = (12, 0x05AC, 0x024F);
        let s = device_list(&[mouse("USB Optical Mouse"), kbd]);
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(
            lines,
            [
                "#      VID     PID     Product Name",
                "------------------------------------------------------------",
                "0      0x046D  0xC077  USB Optical Mouse",
                "12     0x05AC  0x024F  Apple Keyboard",
            ]
        );
    }

    #[test]
    fn descriptor_fields() {
        let d = DeviceDescriptor {
            class: 0,
            sub_class: 0,
            protocol: 0,
            vendor_id: 0x046D,
            product_id: 0xC077,
            bcd_device: "72.00".to_owned(),
            manufacturer: "Logitech".to_owned(),
            product: "USB Optical Mouse".to_owned(),
            serial_number: String::new(),
        };
        let s = device_descriptor(&d);
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], "Device Descriptor:");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "  bDeviceClass     : 0x00 (0)");
        assert_eq!(lines[5], "  idVendor         : 0x046D");
        assert_eq!(lines[7], "  bcdDevice        : 72.00");
        assert_eq!(lines[8], "  iManufacturer    : Logitech");
        assert_eq!(lines[10], "  iSerialNumber    : ");
        assert_eq!(lines.len(), 11);

        let d = DeviceDescriptor {
            class: 0xEF,
            ..d
        };
        assert!(device_descriptor(&d).contains("  bDeviceClass     : 0xEF (239)"));
    }

    #[test]
    fn collection_tree() {
        let mut app = CollectionNode::new(0x01, 0x02, CollectionKind::Application);
        let mut phy = CollectionNode::new(0x01, 0x01, CollectionKind::Physical);
        phy.items.push(Item::GReportSize(1));
        app.children.push(phy);
        let s = collections(&[app], &[0x05, 0x01]);
        assert_eq!(
            s,
            "Collection (Application)\n\
             \x20 Usage Page: Generic Desktop Page (0x0001)\n\
             \x20 Usage: Mouse (0x0002)\n\
             \x20 Collection (Physical)\n\
             \x20   Usage Page: Generic Desktop Page (0x0001)\n\
             \x20   Usage: Pointer (0x0001)\n\
             \x20   Report Size (1)\n\
             \n\
             Raw Descriptor (2 bytes):\n\
             \x20 05 01"
        );
    }

    #[test]
    fn parsed_descriptor() {
        let d = ReportDescriptor::parse(MOUSE).unwrap();
        let s = report_descriptor(&d);
        assert!(s.contains("Collection (Application)"));
        assert!(s.contains("Usage Page: Generic Desktop Page"));
        assert!(s.contains("Usage: Mouse"));
        assert!(s.contains("05 01 09 02 A1 01 C0"));
    }

    #[test]
    fn unknown_usage_page() {
        let c = CollectionNode::new(0xFFFF, 0x01, CollectionKind::Application);
        assert!(collections(&[c], &[]).contains("0xFFFF"));
    }

    #[test]
    fn no_collections() {
        assert_eq!(collections(&[], &[]), "No collections found");
        let s = collections(&[], &[0x05, 0x01]);
        assert!(s.starts_with("No collections found\n"));
    }

    #[test]
    fn raw_dump_wraps() {
        let raw: Vec<u8> = (0..20).collect();
        let s = collections(&[], &raw);
        assert!(s.contains("\n  00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n  10 11 12 13"));
    }

    #[test]
    fn parse_error() {
        let e = ReportDescriptor::parse(&[0x05, 0x01, 0x09, 0x02, 0x26]).unwrap_err();
        let s = descriptor_error(&e, &[0x05, 0x01, 0x09, 0x02, 0x26]);
        assert!(s.starts_with("Parse error: truncated item at offset 4"));
        assert!(s.contains("05 01 09 02"));
    }

    #[test]
    fn reports() {
        let t = UNIX_EPOCH + Duration::from_millis(1_705_314_645_123);
        let c = clock(t);
        let mut r = HidReport {
            timestamp: t,
            report_id: 0,
            data: vec![0x01, 0x02, 0x03, 0x04],
        };
        assert_eq!(hid_report(&r), format!("[{c}] 01 02 03 04"));
        r.report_id = 2;
        assert_eq!(hid_report(&r), format!("[{c}] Report ID 2: 01 02 03 04"));
        r.data.clear();
        assert_eq!(hid_report(&r), format!("[{c}] Report ID 2: (empty)"));
    }

    #[test]
    fn report_time_is_local() {
        let t = UNIX_EPOCH + Duration::from_millis(1_705_314_645_123);
        let r = HidReport {
            timestamp: t,
            report_id: 0,
            data: vec![0xFF],
        };
        let local = chrono::DateTime::<chrono::Local>::from(t);
        let want = format!("[{}] FF", local.format("%H:%M:%S%.3f"));
        assert_eq!(hid_report(&r), want);
        assert_eq!(&hid_report(&r)[9..14], ".123]");
    }

    #[test]
    fn errors() {
        let e = crate::Error::DeviceDisconnected;
        assert_eq!(error(&e), "Error: Device was disconnected.");
    }
}
