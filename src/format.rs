//! Human-readable and JSON output.

use std::fmt::Write;
use std::time::SystemTime;

use chrono::{DateTime, Local, SecondsFormat, Utc};

pub mod json;
pub mod text;

/// Formats bytes as space-separated uppercase hex pairs.
#[must_use]
pub fn hex(b: &[u8]) -> String {
    let mut s = String::with_capacity(b.len() * 3);
    for (i, v) in b.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{v:02X}");
    }
    s
}

/// Returns the local time of day as `HH:MM:SS.mmm`.
fn clock(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format("%H:%M:%S%.3f").to_string()
}

/// Returns the UTC RFC 3339 representation with millisecond precision, such
/// as `2024-01-15T10:30:45.123Z`.
fn rfc3339(t: SystemTime) -> String {
    DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn hex_bytes() {
        assert_eq!(hex(&[]), "");
        assert_eq!(hex(&[0x05]), "05");
        assert_eq!(hex(&[0x05, 0x01, 0x09, 0xFF]), "05 01 09 FF");
    }

    #[test]
    fn local_clock() {
        let t = UNIX_EPOCH + Duration::from_millis(1_705_314_645_123);
        let s = clock(t);
        let want = Local.timestamp_millis_opt(1_705_314_645_123).unwrap();
        assert_eq!(s, want.format("%H:%M:%S%.3f").to_string());
        assert_eq!(s.len(), 12);
        assert!(s.ends_with(".123"), "{s}");
        let b = s.as_bytes();
        assert_eq!((b[2], b[5], b[8]), (b':', b':', b'.'));
        assert_eq!(s.bytes().filter(u8::is_ascii_digit).count(), 9, "{s}");

        let t = UNIX_EPOCH + Duration::from_nanos(1_705_314_645_999_999_999);
        assert!(clock(t).ends_with(".999"));
    }

    #[test]
    fn utc_rfc3339() {
        let t = UNIX_EPOCH + Duration::from_millis(1_705_314_645_123);
        assert_eq!(rfc3339(t), "2024-01-15T10:30:45.123Z");
        assert_eq!(rfc3339(UNIX_EPOCH), "1970-01-01T00:00:00.000Z");
        let t = UNIX_EPOCH + Duration::from_nanos(86_399_999_999_999);
        assert_eq!(rfc3339(t), "1970-01-01T23:59:59.999Z");
        let t = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(rfc3339(t), "1969-12-31T23:59:59.000Z");
    }
}
