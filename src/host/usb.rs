use std::fmt::{Display, Formatter};
use std::time::Duration;

use rusb::UsbContext;
use tracing::{debug, trace, warn};

use super::*;

type Device = rusb::Device<rusb::Context>;
type DeviceHandle = rusb::DeviceHandle<rusb::Context>;

const TIMEOUT: Duration = Duration::from_millis(1000);

/// HID interface class code (\[HID\] Section 4.1).
const HID_CLASS: u8 = 0x03;
/// HID class descriptor type (\[HID\] Section 7.1).
const HID_DESCRIPTOR: u8 = 0x21;
/// Report descriptor type (\[HID\] Section 7.1).
const REPORT_DESCRIPTOR: u8 = 0x22;
/// Standard GET_DESCRIPTOR request.
const GET_DESCRIPTOR: u8 = 0x06;

/// Provides access to USB HID devices via libusb.
#[derive(Debug)]
pub struct Usb {
    ctx: rusb::Context,
}

impl Usb {
    /// Returns a new `Usb` instance for accessing USB HID devices.
    pub fn new() -> Result<Self> {
        Ok(Self {
            ctx: Self::new_ctx()?,
        })
    }

    #[cfg(windows)]
    fn new_ctx() -> rusb::Result<rusb::Context> {
        // UsbDk isn't required, but it's more feature-rich and simpler to use
        // than WinUSB or other alternatives
        rusb::Context::with_options(&[rusb::UsbOption::use_usbdk()])
    }

    #[cfg(not(windows))]
    fn new_ctx() -> rusb::Result<rusb::Context> {
        rusb::Context::new()
    }
}

impl Backend for Usb {
    type Device = UsbHidInterface;
    type Reader = UsbReportReader;

    fn enumerate(&self) -> Result<Vec<UsbHidInterface>> {
        let mut all: Vec<_> = (self.ctx.devices()?.iter())
            .flat_map(|dev| {
                Interface::discover(&dev)
                    .into_iter()
                    .map(move |ifc| UsbHidInterface {
                        dev: dev.clone(),
                        ifc,
                    })
            })
            .collect();
        all.sort_by_key(UsbHidInterface::sort_key);
        debug!("Found {} HID interface(s)", all.len());
        Ok(all)
    }

    fn properties(&self, hid: &UsbHidInterface) -> Result<DeviceProperties> {
        let desc = hid.dev.device_descriptor()?;
        let mut p = DeviceProperties {
            vendor_id: desc.vendor_id(),
            product_id: desc.product_id(),
            class: desc.class_code(),
            sub_class: desc.sub_class_code(),
            protocol: desc.protocol_code(),
            bcd_device: bcd(desc.device_version()),
            ..DeviceProperties::default()
        };
        match hid.dev.open() {
            Ok(h) => {
                let s = |r: rusb::Result<String>| r.unwrap_or_default();
                p.manufacturer = s(h.read_manufacturer_string_ascii(&desc));
                p.product = s(h.read_product_string_ascii(&desc));
                p.serial_number = s(h.read_serial_number_string_ascii(&desc));
            }
            Err(e) => debug!("Cannot read strings of {hid} ({e})"),
        }
        trace!("{hid}: {p:?}");
        Ok(p)
    }

    fn report_descriptor(&self, hid: &UsbHidInterface) -> Result<Vec<u8>> {
        if hid.ifc.report_len == 0 {
            return Err(Error::NoReportDescriptor);
        }
        let h = hid.claim()?;
        let mut b = vec![0; usize::from(hid.ifc.report_len)];
        // [HID] Section 7.1.1
        let r = h.read_control(
            rusb::request_type(
                rusb::Direction::In,
                rusb::RequestType::Standard,
                rusb::Recipient::Interface,
            ),
            GET_DESCRIPTOR,
            u16::from(REPORT_DESCRIPTOR) << 8,
            u16::from(hid.ifc.number),
            &mut b,
            TIMEOUT,
        );
        release(&h, hid.ifc.number);
        b.truncate(r?);
        trace!("{hid}: {} byte report descriptor", b.len());
        Ok(b)
    }

    fn open(&self, hid: &UsbHidInterface) -> Result<UsbReportReader> {
        let ep = hid.ifc.ep_in.ok_or(Error::NoInputEndpoint)?;
        debug!("Opening {hid}");
        Ok(UsbReportReader {
            dev: hid.claim()?,
            iface: hid.ifc.number,
            ep,
            max_packet: usize::from(hid.ifc.max_packet),
        })
    }
}

/// HID interface of a USB device.
#[derive(Clone, Debug)]
pub struct UsbHidInterface {
    dev: Device,
    ifc: Interface,
}

impl UsbHidInterface {
    fn sort_key(&self) -> (u8, u8, u8) {
        (self.dev.bus_number(), self.dev.address(), self.ifc.number)
    }

    /// Opens the device and claims the interface, detaching any kernel driver.
    fn claim(&self) -> Result<DeviceHandle> {
        let h = self.dev.open()?;
        if cfg!(unix) {
            // Not supported on Windows
            match h.set_auto_detach_kernel_driver(true) {
                Ok(()) | Err(rusb::Error::NotSupported) => {}
                Err(e) => return Err(e.into()),
            }
        }
        debug!("Claiming interface {} of {:?}", self.ifc.number, self.dev);
        h.claim_interface(self.ifc.number)?;
        Ok(h)
    }
}

impl Display for UsbHidInterface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} interface {}", self.dev, self.ifc.number)
    }
}

/// Claimed HID interface reading the interrupt IN endpoint.
#[derive(Debug)]
pub struct UsbReportReader {
    dev: DeviceHandle,
    iface: u8,
    ep: u8,
    max_packet: usize,
}

impl ReportReader for UsbReportReader {
    #[inline]
    fn max_report_len(&self) -> usize {
        self.max_packet
    }

    fn read(&mut self, b: &mut [u8], timeout: Duration) -> Result<Option<usize>> {
        match self.dev.read_interrupt(self.ep, b, timeout) {
            Ok(n) => Ok(Some(n)),
            Err(rusb::Error::Timeout) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for UsbReportReader {
    fn drop(&mut self) {
        release(&self.dev, self.iface);
    }
}

fn release(h: &DeviceHandle, iface: u8) {
    if let Err(e) = h.release_interface(iface) {
        debug!("Failed to release interface {iface} ({e})");
    }
}

/// HID interface number, report descriptor length, and input endpoint.
#[derive(Clone, Copy, Debug, Default)]
struct Interface {
    number: u8,
    report_len: u16,
    ep_in: Option<u8>,
    max_packet: u16,
}

impl Interface {
    /// Discovers HID interfaces from USB descriptors.
    fn discover(dev: &Device) -> Vec<Self> {
        let Ok(cfg) = dev.active_config_descriptor().map_err(|e| {
            warn!("Failed to get config descriptor for {dev:?} ({e})");
        }) else {
            return Vec::new();
        };
        let mut all = Vec::new();
        for ifc in cfg.interfaces() {
            let Some(ifd) = ifc.descriptors().find(|id| id.setting_number() == 0) else {
                continue;
            };
            if ifd.class_code() != HID_CLASS {
                continue;
            }
            if all.is_empty() {
                debug!("HID device at {dev:?}");
                trace!("|__ {:?}", dev.device_descriptor());
            }
            trace!("    |__ [HID] {ifd:?}");
            let mut v = Self {
                number: ifd.interface_number(),
                report_len: report_descriptor_len(ifd.extra()).unwrap_or(0),
                ..Self::default()
            };
            for epd in ifd.endpoint_descriptors() {
                trace!("        |__ {epd:?}");
                use rusb::{Direction::In, TransferType::Interrupt};
                if (epd.transfer_type(), epd.direction()) == (Interrupt, In) && v.ep_in.is_none() {
                    v.ep_in = Some(epd.address());
                    v.max_packet = epd.max_packet_size();
                }
            }
            if v.report_len == 0 {
                warn!("No report descriptor length for {dev:?} interface {}", v.number);
            }
            all.push(v);
        }
        all
    }
}

/// Returns the report descriptor length from the HID class descriptor found
/// in the extra bytes of an interface descriptor (\[HID\] Section 6.2.1).
fn report_descriptor_len(mut extra: &[u8]) -> Option<u16> {
    while let [n, typ, ..] = *extra {
        let n = usize::from(n);
        if n < 2 || extra.len() < n {
            return None;
        }
        let (d, rest) = extra.split_at(n);
        if typ == HID_DESCRIPTOR && n >= 6 {
            // bDescriptorType, wDescriptorLength follow bNumDescriptors
            let count = usize::from(d[5]);
            return (d[6..].chunks_exact(3).take(count))
                .find(|c| c[0] == REPORT_DESCRIPTOR)
                .map(|c| u16::from_le_bytes([c[1], c[2]]));
        }
        extra = rest;
    }
    None
}

/// Converts a decoded device version back into its BCD form.
fn bcd(v: rusb::Version) -> u16 {
    let major = v.major();
    u16::from(major / 10) << 12
        | u16::from(major % 10) << 8
        | u16::from(v.minor()) << 4
        | u16::from(v.sub_minor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hid_class_descriptor() {
        // Boot mouse
        let d = [0x09, 0x21, 0x11, 0x01, 0x00, 0x01, 0x22, 0x34, 0x00];
        assert_eq!(report_descriptor_len(&d), Some(0x34));

        // Physical descriptor listed first, preceded by a vendor descriptor
        let d = [
            0x03, 0x44, 0xAA, // Vendor
            0x0C, 0x21, 0x11, 0x01, 0x00, 0x02, 0x23, 0x10, 0x00, 0x22, 0xF0, 0x01,
        ];
        assert_eq!(report_descriptor_len(&d), Some(0x01F0));
    }

    #[test]
    fn hid_class_descriptor_malformed() {
        assert_eq!(report_descriptor_len(&[]), None);
        assert_eq!(report_descriptor_len(&[0x09, 0x21, 0x11]), None);
        assert_eq!(report_descriptor_len(&[0x00, 0x21]), None);
        assert_eq!(
            report_descriptor_len(&[0x06, 0x21, 0x11, 0x01, 0x00, 0x00]),
            None
        );
        // bNumDescriptors exceeds the descriptor
        assert_eq!(
            report_descriptor_len(&[0x09, 0x21, 0x11, 0x01, 0x00, 0x03, 0x23, 0x10, 0x00]),
            None
        );
    }

    #[test]
    fn bcd_version() {
        assert_eq!(bcd(rusb::Version(2, 1, 0)), 0x0210);
        assert_eq!(bcd(rusb::Version(1, 0, 0)), 0x0100);
        assert_eq!(bcd(rusb::Version(12, 3, 4)), 0x1234);
    }
}
