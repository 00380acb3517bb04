use inspect_hid_report::ParseError;

use crate::host;

/// Inspector errors.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Device not found: {specifier}")]
    DeviceNotFound { specifier: String },
    #[error("Multiple devices ({count}) match the specifier. Please be more specific.")]
    AmbiguousDevice { count: usize },
    #[error("Invalid device specifier: '{input}'. Use index number or VID:PID format.")]
    InvalidDeviceSpecifier { input: String },
    #[error("Permission denied opening {device}. Check the device node permissions or udev rules.")]
    PermissionDenied { device: String },
    #[error("Cannot access {device}: another process has exclusive access.")]
    ExclusiveAccess { device: String },
    #[error("Device was disconnected.")]
    DeviceDisconnected,
    #[error("USB error: {source}")]
    Usb { source: rusb::Error },
    #[error("Report descriptor not available for this device.")]
    ReportDescriptorNotAvailable,
    #[error("Failed to parse descriptor: {0}")]
    DescriptorParse(#[from] ParseError),
}

impl Error {
    /// Converts a host error for the specified device into an inspector
    /// error.
    pub(crate) fn host(e: host::Error, device: &impl ToString) -> Self {
        match e {
            host::Error::Usb { source } => match source {
                rusb::Error::Access => Self::PermissionDenied {
                    device: device.to_string(),
                },
                rusb::Error::Busy => Self::ExclusiveAccess {
                    device: device.to_string(),
                },
                rusb::Error::NoDevice => Self::DeviceDisconnected,
                source => Self::Usb { source },
            },
            host::Error::NoReportDescriptor => Self::ReportDescriptorNotAvailable,
            host::Error::NoInputEndpoint => Self::Usb {
                source: rusb::Error::NotSupported,
            },
        }
    }

    /// Returns the process exit code for the error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            Self::PermissionDenied { .. } | Self::ExclusiveAccess { .. } => 2,
            Self::DeviceDisconnected => 3,
            _ => 1,
        }
    }
}

/// Common inspector result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::*;

    #[test]
    fn exit_codes() {
        let tests = [
            (
                Error::DeviceNotFound {
                    specifier: "index 3".to_owned(),
                },
                1,
            ),
            (Error::AmbiguousDevice { count: 2 }, 1),
            (
                Error::InvalidDeviceSpecifier {
                    input: "x".to_owned(),
                },
                1,
            ),
            (
                Error::PermissionDenied {
                    device: String::new(),
                },
                2,
            ),
            (
                Error::ExclusiveAccess {
                    device: String::new(),
                },
                2,
            ),
            (Error::DeviceDisconnected, 3),
            (
                Error::Usb {
                    source: rusb::Error::Io,
                },
                1,
            ),
            (Error::ReportDescriptorNotAvailable, 1),
            (
                Error::from(ParseError::TruncatedLongItemHeader { offset: 0 }),
                1,
            ),
        ];
        for (e, code) in tests {
            assert_eq!(e.exit_code(), code, "{e:?}");
        }
    }

    #[test]
    fn host_errors() {
        let dev = "046D:C077";
        let usb = |source| host::Error::Usb { source };
        assert_matches!(
            Error::host(usb(rusb::Error::Access), &dev),
            Error::PermissionDenied { device } if device == dev
        );
        assert_matches!(
            Error::host(usb(rusb::Error::Busy), &dev),
            Error::ExclusiveAccess { device } if device == dev
        );
        assert_matches!(
            Error::host(usb(rusb::Error::NoDevice), &dev),
            Error::DeviceDisconnected
        );
        assert_matches!(
            Error::host(usb(rusb::Error::Pipe), &dev),
            Error::Usb {
                source: rusb::Error::Pipe
            }
        );
        assert_matches!(
            Error::host(host::Error::NoReportDescriptor, &dev),
            Error::ReportDescriptorNotAvailable
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::DeviceNotFound {
                specifier: "046D:C077".to_owned()
            }
            .to_string(),
            "Device not found: 046D:C077"
        );
        assert_eq!(
            Error::AmbiguousDevice { count: 2 }.to_string(),
            "Multiple devices (2) match the specifier. Please be more specific."
        );
        let e = Error::from(ParseError::TruncatedShortItem {
            offset: 2,
            expected_size: 1,
        });
        assert_eq!(
            e.to_string(),
            "Failed to parse descriptor: truncated item at offset 2: expected 1 bytes"
        );
    }
}
