//! Host device access layer.

use std::fmt::Debug;
use std::time::Duration;

pub use usb::*;

mod usb;

/// Host access errors.
#[derive(Clone, Copy, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("usb error: {source}")]
    Usb {
        #[from]
        source: rusb::Error,
    },
    #[error("interface has no report descriptor")]
    NoReportDescriptor,
    #[error("interface has no interrupt IN endpoint")]
    NoInputEndpoint,
}

/// Common host result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Identity and string properties of a HID interface's device.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeviceProperties {
    pub vendor_id: u16,
    pub product_id: u16,
    pub class: u8,
    pub sub_class: u8,
    pub protocol: u8,
    /// Device release number in binary-coded decimal.
    pub bcd_device: u16,
    pub manufacturer: String,
    pub product: String,
    pub serial_number: String,
}

/// HID device access backend.
pub trait Backend: Debug + Send + Sync {
    /// Enumerated HID interface.
    type Device: Clone + Debug + Send + Sync;
    /// Input report reader for an opened interface.
    type Reader: ReportReader;

    /// Returns all HID interfaces in a stable order.
    fn enumerate(&self) -> Result<Vec<Self::Device>>;

    /// Returns the properties of the device that owns the interface.
    fn properties(&self, dev: &Self::Device) -> Result<DeviceProperties>;

    /// Returns the raw report descriptor of the interface. An empty vector
    /// means that the device returned no descriptor.
    fn report_descriptor(&self, dev: &Self::Device) -> Result<Vec<u8>>;

    /// Opens the interface for reading input reports.
    fn open(&self, dev: &Self::Device) -> Result<Self::Reader>;
}

/// Input report source.
pub trait ReportReader: Send {
    /// Returns the maximum transfer size, which is also the largest report
    /// that [`ReportReader::read`] can return.
    fn max_report_len(&self) -> usize;

    /// Reads one input report into `buf`. Returns `None` if no report arrived
    /// before the timeout.
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<Option<usize>>;
}
