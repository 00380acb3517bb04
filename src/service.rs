//! Device queries and report monitoring over a host backend.

use std::time::{Duration, SystemTime};

use inspect_hid_report::ReportDescriptor;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::device::{DeviceDescriptor, DeviceInfo, DeviceSpecifier, HidReport};
use crate::host::{self, Backend, ReportReader};
use crate::{Error, Result};

/// Report monitoring options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonitorOptions {
    /// Maximum time that a single read waits for a report. Cancellation is
    /// checked between reads.
    pub read_timeout: Duration,
    /// Read buffer size. Defaults to the input endpoint packet size.
    pub max_report_len: Option<usize>,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(100),
            max_report_len: None,
        }
    }
}

/// Read buffer size used when neither the options nor the endpoint provide
/// one.
const DEFAULT_REPORT_LEN: usize = 64;

/// Provides HID device information and reports via a host backend.
#[derive(Debug)]
pub struct DeviceService<B> {
    host: B,
}

impl<B: Backend> DeviceService<B> {
    /// Creates a service that accesses devices via the specified backend.
    #[inline]
    pub const fn new(host: B) -> Self {
        Self { host }
    }

    /// Creates a service using the backend returned by `init`. Setup failures
    /// are reported like device access failures on the "USB" subsystem.
    pub fn init(init: impl FnOnce() -> host::Result<B>) -> Result<Self> {
        init().map(Self::new).map_err(|e| Error::host(e, &"USB"))
    }

    /// Returns all HID devices in enumeration order.
    pub fn list_devices(&self) -> Result<Vec<DeviceInfo>> {
        Ok(self.devices()?.into_iter().map(|(info, _)| info).collect())
    }

    /// Returns the USB device descriptor of the specified device.
    pub fn device_descriptor(&self, spec: &DeviceSpecifier) -> Result<DeviceDescriptor> {
        let (info, dev) = self.find(spec)?;
        let p = (self.host.properties(&dev)).map_err(|e| Error::host(e, &info))?;
        Ok(DeviceDescriptor::from(&p))
    }

    /// Returns the raw report descriptor of the specified device.
    pub fn report_descriptor(&self, spec: &DeviceSpecifier) -> Result<Vec<u8>> {
        let (info, dev) = self.find(spec)?;
        self.raw_report_descriptor(&info, &dev)
    }

    /// Returns the parsed report descriptor of the specified device.
    pub fn parse_report_descriptor(&self, spec: &DeviceSpecifier) -> Result<ReportDescriptor> {
        let raw = self.report_descriptor(spec)?;
        Ok(ReportDescriptor::parse(&raw)?)
    }

    /// Reads input reports from the specified device until the token is
    /// cancelled or the device fails. Each report is passed to `on_report`.
    pub fn monitor(
        &self,
        spec: &DeviceSpecifier,
        opts: &MonitorOptions,
        ct: &CancellationToken,
        mut on_report: impl FnMut(HidReport),
    ) -> Result<()> {
        let (info, dev) = self.find(spec)?;
        let host_err = |e| Error::host(e, &info);
        let uses_report_ids = match self.raw_report_descriptor(&info, &dev) {
            Ok(raw) => ReportDescriptor::parse(&raw)
                .map(|d| d.uses_report_ids())
                .unwrap_or_else(|e| {
                    warn!("Invalid report descriptor for {info} ({e})");
                    false
                }),
            Err(e) => {
                debug!("No report descriptor for {info} ({e})");
                false
            }
        };
        let mut r = self.host.open(&dev).map_err(host_err)?;
        let n = match opts.max_report_len.unwrap_or_else(|| r.max_report_len()) {
            0 => DEFAULT_REPORT_LEN,
            n => n,
        };
        let mut b = vec![0; n];
        debug!("Monitoring {info} (report IDs: {uses_report_ids}, buffer: {n})");
        while !ct.is_cancelled() {
            let Some(n) = r.read(&mut b, opts.read_timeout).map_err(host_err)? else {
                continue;
            };
            let rpt = HidReport::from_transfer(SystemTime::now(), &b[..n], uses_report_ids);
            trace!("{info}: {rpt:?}");
            on_report(rpt);
        }
        debug!("Monitoring of {info} cancelled");
        Ok(())
    }

    /// Returns the report descriptor of a resolved device, treating an empty
    /// descriptor as unavailable.
    fn raw_report_descriptor(&self, info: &DeviceInfo, dev: &B::Device) -> Result<Vec<u8>> {
        let raw = (self.host.report_descriptor(dev)).map_err(|e| Error::host(e, info))?;
        if raw.is_empty() {
            return Err(Error::ReportDescriptorNotAvailable);
        }
        Ok(raw)
    }

    /// Resolves a device specifier to a device handle.
    fn find(&self, spec: &DeviceSpecifier) -> Result<(DeviceInfo, B::Device)> {
        let mut all = self.devices()?;
        let infos: Vec<_> = all.iter().map(|(info, _)| info.clone()).collect();
        let i = spec.resolve(&infos)?.index;
        Ok(all.swap_remove(i))
    }

    /// Enumerates devices, skipping those whose properties cannot be read.
    /// Indices are assigned after skipping.
    fn devices(&self) -> Result<Vec<(DeviceInfo, B::Device)>> {
        let all = (self.host.enumerate()).map_err(|e| Error::host(e, &"USB"))?;
        let mut v = Vec::with_capacity(all.len());
        for dev in all {
            match self.host.properties(&dev) {
                Ok(p) => v.push((DeviceInfo::new(v.len(), &p), dev)),
                Err(e) => warn!("Skipping {dev:?} ({e})"),
            }
        }
        Ok(v)
    }
}

impl DeviceService<host::Usb> {
    /// Creates a service that accesses devices via libusb.
    pub fn usb() -> Result<Self> {
        Self::init(host::Usb::new)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use matches::assert_matches;

    use super::*;
    use crate::host::{self, DeviceProperties};

    type Script = VecDeque<host::Result<Option<Vec<u8>>>>;

    #[derive(Clone, Debug, Default)]
    struct Mock {
        devs: Vec<MockDev>,
        enumerate_err: Option<host::Error>,
    }

    #[derive(Clone, Debug)]
    struct MockDev {
        props: host::Result<DeviceProperties>,
        desc: host::Result<Vec<u8>>,
        open: Option<host::Error>,
        script: Arc<Mutex<Script>>,
        ct: CancellationToken,
    }

    impl MockDev {
        fn new(vendor_id: u16, product_id: u16, product: &str) -> Self {
            Self {
                props: Ok(DeviceProperties {
                    vendor_id,
                    product_id,
                    bcd_device: 0x0210,
                    product: product.to_owned(),
                    ..DeviceProperties::default()
                }),
                desc: Ok(MOUSE.to_vec()),
                open: None,
                script: Arc::default(),
                ct: CancellationToken::new(),
            }
        }

        fn reports(self, s: impl IntoIterator<Item = host::Result<Option<Vec<u8>>>>) -> Self {
            self.script.lock().unwrap().extend(s);
            self
        }
    }

    #[derive(Debug)]
    struct MockReader {
        script: Arc<Mutex<Script>>,
        ct: CancellationToken,
    }

    impl Backend for Mock {
        type Device = MockDev;
        type Reader = MockReader;

        fn enumerate(&self) -> host::Result<Vec<MockDev>> {
            self.enumerate_err.map_or_else(|| Ok(self.devs.clone()), Err)
        }

        fn properties(&self, dev: &MockDev) -> host::Result<DeviceProperties> {
            dev.props.clone()
        }

        fn report_descriptor(&self, dev: &MockDev) -> host::Result<Vec<u8>> {
            dev.desc.clone()
        }

        fn open(&self, dev: &MockDev) -> host::Result<MockReader> {
            dev.open.map_or_else(
                || {
                    Ok(MockReader {
                        script: Arc::clone(&dev.script),
                        ct: dev.ct.clone(),
                    })
                },
                Err,
            )
        }
    }

    impl ReportReader for MockReader {
        fn max_report_len(&self) -> usize {
            8
        }

        fn read(&mut self, b: &mut [u8], _: Duration) -> host::Result<Option<usize>> {
            let Some(next) = self.script.lock().unwrap().pop_front() else {
                // Script exhausted
                self.ct.cancel();
                return Ok(None);
            };
            Ok(next?.map(|v| {
                b[..v.len()].copy_from_slice(&v);
                v.len()
            }))
        }
    }

    const MOUSE: &[u8] = &[
        0x05, 0x01, 0x09, 0x02, 0xA1, 0x01, 0x09, 0x01, 0xA1, 0x00, 0x05, 0x09, 0x19, 0x01,
        0x29, 0x03, 0x15, 0x00, 0x25, 0x01, 0x95, 0x03, 0x75, 0x01, 0x81, 0x02, 0xC0, 0xC0,
    ];

    const KEYBOARD_WITH_IDS: &[u8] = &[
        0x05, 0x01, 0x09, 0x06, 0xA1, 0x01, 0x85, 0x01, 0x05, 0x07, 0x75, 0x08, 0x95, 0x06,
        0x81, 0x00, 0xC0,
    ];

    fn usb(e: rusb::Error) -> host::Error {
        host::Error::Usb { source: e }
    }

    fn svc(devs: impl IntoIterator<Item = MockDev>) -> DeviceService<Mock> {
        DeviceService::new(Mock {
            devs: devs.into_iter().collect(),
            enumerate_err: None,
        })
    }

    fn vid_pid(vendor_id: u16, product_id: u16) -> DeviceSpecifier {
        DeviceSpecifier::VidPid {
            vendor_id,
            product_id,
        }
    }

    #[test]
    fn list_devices() {
        let mut broken = MockDev::new(0xFFFF, 0xFFFF, "");
        broken.props = Err(usb(rusb::Error::Io));
        let s = svc([
            MockDev::new(0x046D, 0xC077, "Mouse"),
            broken,
            MockDev::new(0x05AC, 0x024F, "Keyboard"),
        ]);
        let devs = s.list_devices().unwrap();
        assert_eq!(devs.len(), 2);
        assert_eq!((devs[0].index, devs[0].product.as_str()), (0, "Mouse"));
        assert_eq!((devs[1].index, devs[1].vendor_id), (1, 0x05AC));

        assert!(svc([]).list_devices().unwrap().is_empty());

        let s = DeviceService::new(Mock {
            devs: Vec::new(),
            enumerate_err: Some(usb(rusb::Error::Access)),
        });
        assert_matches!(s.list_devices(), Err(Error::PermissionDenied { .. }));
    }

    #[test]
    fn backend_setup() {
        let s = DeviceService::init(|| Ok(Mock::default())).unwrap();
        assert!(s.list_devices().unwrap().is_empty());

        let tests = [
            (rusb::Error::Access, 2),
            (rusb::Error::Other, 1),
            (rusb::Error::NotSupported, 1),
        ];
        for (source, code) in tests {
            let e = DeviceService::<Mock>::init(|| Err(usb(source))).unwrap_err();
            assert_eq!(e.exit_code(), code, "{e:?}");
        }
        assert_eq!(
            DeviceService::<Mock>::init(|| Err(usb(rusb::Error::Access))).unwrap_err(),
            Error::PermissionDenied {
                device: "USB".to_owned()
            }
        );
        assert_eq!(
            DeviceService::<Mock>::init(|| Err(usb(rusb::Error::Other)))
                .unwrap_err()
                .to_string(),
            "USB error: Other error"
        );
    }

    #[test]
    fn device_descriptor() {
        let s = svc([
            MockDev::new(0x046D, 0xC077, "Mouse"),
            MockDev::new(0x05AC, 0x024F, "Keyboard"),
        ]);
        let d = s.device_descriptor(&DeviceSpecifier::Index(1)).unwrap();
        assert_eq!(
            (d.vendor_id, d.product.as_str(), d.bcd_device.as_str()),
            (0x05AC, "Keyboard", "2.10")
        );
        let d = s.device_descriptor(&vid_pid(0x046D, 0xC077)).unwrap();
        assert_eq!(d.product, "Mouse");
        assert_matches!(
            s.device_descriptor(&DeviceSpecifier::Index(2)),
            Err(Error::DeviceNotFound { specifier }) if specifier == "index 2"
        );
    }

    #[test]
    fn ambiguous_device() {
        let s = svc([
            MockDev::new(0x046D, 0xC077, "Mouse"),
            MockDev::new(0x046D, 0xC077, "Mouse"),
        ]);
        assert_matches!(
            s.report_descriptor(&vid_pid(0x046D, 0xC077)),
            Err(Error::AmbiguousDevice { count: 2 })
        );
    }

    #[test]
    fn report_descriptor() {
        let mut empty = MockDev::new(1, 2, "");
        empty.desc = Ok(Vec::new());
        let mut missing = MockDev::new(3, 4, "");
        missing.desc = Err(host::Error::NoReportDescriptor);
        let mut gone = MockDev::new(5, 6, "");
        gone.desc = Err(usb(rusb::Error::NoDevice));
        let mut busy = MockDev::new(7, 8, "");
        busy.desc = Err(usb(rusb::Error::Busy));
        let s = svc([MockDev::new(0x046D, 0xC077, "Mouse"), empty, missing, gone, busy]);

        assert_eq!(s.report_descriptor(&DeviceSpecifier::Index(0)).unwrap(), MOUSE);
        assert_matches!(
            s.report_descriptor(&DeviceSpecifier::Index(1)),
            Err(Error::ReportDescriptorNotAvailable)
        );
        assert_matches!(
            s.report_descriptor(&DeviceSpecifier::Index(2)),
            Err(Error::ReportDescriptorNotAvailable)
        );
        assert_matches!(
            s.report_descriptor(&DeviceSpecifier::Index(3)),
            Err(Error::DeviceDisconnected)
        );
        assert_matches!(
            s.report_descriptor(&DeviceSpecifier::Index(4)),
            Err(Error::ExclusiveAccess { device }) if device == "#4 0007:0008"
        );
    }

    #[test]
    fn parse_report_descriptor() {
        let mut bad = MockDev::new(1, 2, "");
        bad.desc = Ok(vec![0x05, 0x01, 0x26, 0xFF]);
        let s = svc([MockDev::new(0x046D, 0xC077, "Mouse"), bad]);

        let d = s.parse_report_descriptor(&DeviceSpecifier::Index(0)).unwrap();
        assert_eq!(d.raw(), MOUSE);
        assert_eq!(d.collections().len(), 1);
        assert_eq!(d.collections()[0].children.len(), 1);
        assert_matches!(
            s.parse_report_descriptor(&DeviceSpecifier::Index(1)),
            Err(Error::DescriptorParse(_))
        );
    }

    #[test]
    fn monitor_reports() {
        let dev = MockDev::new(0x046D, 0xC077, "Mouse").reports([
            Ok(Some(vec![0x01, 0x02, 0x03])),
            Ok(None),
            Ok(Some(Vec::new())),
            Ok(Some(vec![0xFF])),
        ]);
        let ct = dev.ct.clone();
        let s = svc([dev]);
        let mut got = Vec::new();
        let opts = MonitorOptions::default();
        (s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |r| got.push(r))).unwrap();
        let got: Vec<_> = got.into_iter().map(|r| (r.report_id, r.data)).collect();
        assert_eq!(
            got,
            [(0, vec![0x01, 0x02, 0x03]), (0, vec![]), (0, vec![0xFF])]
        );
    }

    #[test]
    fn monitor_report_ids() {
        let mut dev = MockDev::new(0x046D, 0xC31C, "Keyboard");
        dev.desc = Ok(KEYBOARD_WITH_IDS.to_vec());
        let dev = dev.reports([Ok(Some(vec![0x01, 0x00, 0x04, 0, 0, 0, 0]))]);
        let ct = dev.ct.clone();
        let s = svc([dev]);
        let mut got = Vec::new();
        let opts = MonitorOptions::default();
        (s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |r| got.push(r))).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].report_id, 1);
        assert_eq!(got[0].data, [0x00, 0x04, 0, 0, 0, 0]);
    }

    #[test]
    fn monitor_without_descriptor() {
        let mut dev = MockDev::new(1, 2, "");
        dev.desc = Err(host::Error::NoReportDescriptor);
        let dev = dev.reports([Ok(Some(vec![0x01, 0x02]))]);
        let ct = dev.ct.clone();
        let s = svc([dev]);
        let mut got = Vec::new();
        let opts = MonitorOptions::default();
        (s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |r| got.push(r))).unwrap();
        assert_eq!((got[0].report_id, got[0].data.as_slice()), (0, [0x01, 0x02].as_slice()));
    }

    #[test]
    fn monitor_disconnect() {
        let dev = MockDev::new(0x046D, 0xC077, "Mouse")
            .reports([Ok(Some(vec![0x01])), Err(usb(rusb::Error::NoDevice))]);
        let ct = CancellationToken::new();
        let s = svc([dev]);
        let mut n = 0;
        let opts = MonitorOptions::default();
        assert_matches!(
            s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |_| n += 1),
            Err(Error::DeviceDisconnected)
        );
        assert_eq!(n, 1);
    }

    #[test]
    fn monitor_open_errors() {
        let mut dev = MockDev::new(0x046D, 0xC077, "Mouse");
        dev.open = Some(usb(rusb::Error::Access));
        let s = svc([dev]);
        let ct = CancellationToken::new();
        let opts = MonitorOptions::default();
        assert_matches!(
            s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |_| {}),
            Err(Error::PermissionDenied { device }) if device == "#0 046D:C077 (Mouse)"
        );
        assert_matches!(
            s.monitor(&DeviceSpecifier::Index(1), &opts, &ct, |_| {}),
            Err(Error::DeviceNotFound { .. })
        );
    }

    #[test]
    fn monitor_cancelled() {
        let dev = MockDev::new(0x046D, 0xC077, "Mouse").reports([Ok(Some(vec![0x01]))]);
        let ct = CancellationToken::new();
        ct.cancel();
        let s = svc([dev]);
        let mut n = 0;
        let opts = MonitorOptions {
            max_report_len: Some(4),
            ..MonitorOptions::default()
        };
        (s.monitor(&DeviceSpecifier::Index(0), &opts, &ct, |_| n += 1)).unwrap();
        assert_eq!(n, 0);
    }
}
