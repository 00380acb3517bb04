//! USB HID device inspector.
//!
//! Lists HID interfaces, reads their device and report descriptors, decodes
//! report descriptors into collection trees with named usages, and monitors
//! input reports. Devices are accessed via [libusb].
//!
//! [libusb]: https://github.com/libusb/libusb

pub use {
    device::{DeviceDescriptor, DeviceInfo, DeviceSpecifier, HidReport},
    error::*,
    inspect_hid_report as report,
    service::{DeviceService, MonitorOptions},
};

pub mod device;
mod error;
pub mod format;
pub mod host;
mod service;
