//! JSON output. Object keys are sorted.

use std::fmt::Display;

use inspect_hid_report::{CollectionNode, ReportDescriptor, Usage};
use serde::Serialize;

use super::{hex, rfc3339};
use crate::device::{DeviceDescriptor, DeviceInfo, HidReport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeviceInfoJson<'a> {
    index: usize,
    vendor_id: String,
    product_id: String,
    product_name: &'a str,
    manufacturer: &'a str,
    serial_number: &'a str,
}

#[derive(Serialize)]
#[allow(non_snake_case)]
struct DeviceDescriptorJson<'a> {
    bDeviceClass: u8,
    bDeviceSubClass: u8,
    bDeviceProtocol: u8,
    idVendor: String,
    idProduct: String,
    bcdDevice: &'a str,
    iManufacturer: &'a str,
    iProduct: &'a str,
    iSerialNumber: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionJson {
    usage_page: u16,
    usage_page_name: String,
    usage: u16,
    usage_name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    children: Vec<CollectionJson>,
    items: Vec<String>,
}

impl From<&CollectionNode> for CollectionJson {
    fn from(n: &CollectionNode) -> Self {
        let u = Usage::resolve(n.usage_page, n.usage);
        Self {
            usage_page: u.page,
            usage_page_name: u.page_name(),
            usage: u.id,
            usage_name: u.name(),
            kind: n.kind.name(),
            children: n.children.iter().map(Self::from).collect(),
            items: n.items.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDescriptorJson {
    collections: Vec<CollectionJson>,
    raw_bytes: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorErrorJson {
    error: String,
    raw_bytes: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HidReportJson {
    timestamp: String,
    report_id: u8,
    data: String,
}

/// Returns the device list as a JSON array.
#[must_use]
pub fn device_list(devs: &[DeviceInfo]) -> String {
    let v: Vec<_> = (devs.iter())
        .map(|d| DeviceInfoJson {
            index: d.index,
            vendor_id: hex16(d.vendor_id),
            product_id: hex16(d.product_id),
            product_name: &d.product,
            manufacturer: &d.manufacturer,
            serial_number: &d.serial_number,
        })
        .collect();
    encode(&v)
}

/// Returns a device descriptor keyed by USB field names.
#[must_use]
pub fn device_descriptor(d: &DeviceDescriptor) -> String {
    encode(&DeviceDescriptorJson {
        bDeviceClass: d.class,
        bDeviceSubClass: d.sub_class,
        bDeviceProtocol: d.protocol,
        idVendor: hex16(d.vendor_id),
        idProduct: hex16(d.product_id),
        bcdDevice: &d.bcd_device,
        iManufacturer: &d.manufacturer,
        iProduct: &d.product,
        iSerialNumber: &d.serial_number,
    })
}

/// Returns the collection tree and raw bytes of a report descriptor.
#[must_use]
pub fn report_descriptor(d: &ReportDescriptor) -> String {
    collections(d.collections(), d.raw())
}

/// Returns a collection tree and raw descriptor bytes.
#[must_use]
pub fn collections(nodes: &[CollectionNode], raw: &[u8]) -> String {
    encode(&ReportDescriptorJson {
        collections: nodes.iter().map(CollectionJson::from).collect(),
        raw_bytes: hex(raw),
    })
}

/// Returns a report descriptor parse failure with the raw bytes.
#[must_use]
pub fn descriptor_error(e: &impl Display, raw: &[u8]) -> String {
    encode(&DescriptorErrorJson {
        error: e.to_string(),
        raw_bytes: hex(raw),
    })
}

/// Returns an input report as a single-line JSON object.
#[must_use]
pub fn hid_report(r: &HidReport) -> String {
    encode(&HidReportJson {
        timestamp: rfc3339(r.timestamp),
        report_id: r.report_id,
        data: hex(&r.data),
    })
}

fn hex16(v: u16) -> String {
    format!("0x{v:04x}")
}

/// Serializes via `serde_json::Value`, whose maps are ordered by key.
fn encode(v: &impl Serialize) -> String {
    serde_json::to_value(v).map_or_else(|_| "null".to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use inspect_hid_report::{CollectionKind, Item};
    use serde_json::{json, Value};

    use super::*;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn device_list_json() {
        assert_eq!(device_list(&[]), "[]");
        let d = DeviceInfo {
            index: 3,
            vendor_id: 0x046D,
            product_id: 0xC07E,
            product: "Gaming Mouse".to_owned(),
            manufacturer: "Logitech".to_owned(),
            serial_number: "ABC".to_owned(),
        };
        let s = device_list(&[d]);
        assert_eq!(
            s,
            r#"[{"index":3,"manufacturer":"Logitech","productId":"0xc07e","productName":"Gaming Mouse","serialNumber":"ABC","vendorId":"0x046d"}]"#
        );
    }

    #[test]
    fn device_descriptor_json() {
        let d = DeviceDescriptor {
            class: 0xEF,
            sub_class: 2,
            protocol: 1,
            vendor_id: 0x05AC,
            product_id: 0x024F,
            bcd_device: "2.10".to_owned(),
            manufacturer: "Apple".to_owned(),
            product: "Keyboard".to_owned(),
            serial_number: String::new(),
        };
        let s = device_descriptor(&d);
        assert_eq!(
            parse(&s),
            json!({
                "bDeviceClass": 239,
                "bDeviceSubClass": 2,
                "bDeviceProtocol": 1,
                "idVendor": "0x05ac",
                "idProduct": "0x024f",
                "bcdDevice": "2.10",
                "iManufacturer": "Apple",
                "iProduct": "Keyboard",
                "iSerialNumber": "",
            })
        );
        assert!(s.starts_with(r#"{"bDeviceClass":239,"bDeviceProtocol":1,"bDeviceSubClass":2,"#));
    }

    #[test]
    fn collections_json() {
        let mut app = CollectionNode::new(0x01, 0x02, CollectionKind::Application);
        let mut btn = CollectionNode::new(0x01, 0x0009_0001, CollectionKind::Logical);
        btn.items.push(Item::GReportCount(3));
        app.children.push(btn);
        let v = parse(&collections(&[app], &[0x05, 0x01, 0x09, 0x02]));
        assert_eq!(
            v,
            json!({
                "collections": [{
                    "usagePage": 1,
                    "usagePageName": "Generic Desktop Page",
                    "usage": 2,
                    "usageName": "Mouse",
                    "type": "Application",
                    "items": [],
                    "children": [{
                        "usagePage": 9,
                        "usagePageName": "Button",
                        "usage": 1,
                        "usageName": "Button 1",
                        "type": "Logical",
                        "items": ["Report Count (3)"],
                        "children": [],
                    }],
                }],
                "rawBytes": "05 01 09 02",
            })
        );
    }

    #[test]
    fn empty_descriptor_json() {
        let d = ReportDescriptor::parse(&[]).unwrap();
        assert_eq!(report_descriptor(&d), r#"{"collections":[],"rawBytes":""}"#);
    }

    #[test]
    fn descriptor_error_json() {
        let s = descriptor_error(&"bad item", &[0x05, 0x01, 0x09, 0x02]);
        assert_eq!(s, r#"{"error":"bad item","rawBytes":"05 01 09 02"}"#);
    }

    #[test]
    fn report_json() {
        let r = HidReport {
            timestamp: UNIX_EPOCH + Duration::from_millis(1_705_314_645_123),
            report_id: 1,
            data: vec![0x00, 0x0A, 0xFF],
        };
        assert_eq!(
            hid_report(&r),
            r#"{"data":"00 0A FF","reportId":1,"timestamp":"2024-01-15T10:30:45.123Z"}"#
        );
        let r = HidReport { data: Vec::new(), report_id: 0, ..r };
        assert_eq!(parse(&hid_report(&r))["data"], "");
        assert_eq!(parse(&hid_report(&r))["reportId"], 0);
    }
}
