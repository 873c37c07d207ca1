//! Fixed byte payloads sent by the menu actions.

use std::time::Duration;

pub const NORMAL_MESSAGE: &str = "hello\n";

/// 0xC3 opens a two-byte sequence, 0x28 ('(') is not a valid continuation byte
pub const INVALID_UTF8: [u8; 2] = [0xC3, 0x28];

pub const PARTIAL_FIRST: &str = "partial-";
pub const PARTIAL_SECOND: &str = "message\n";
pub const PARTIAL_DELAY: Duration = Duration::from_secs(1);

pub const LARGE_FILL: u8 = b'A';
pub const LARGE_FILL_LEN: usize = 8192;

pub const RAPID_PAYLOAD: &[u8] = b"\n";

/// Emoji (one with a variation selector) followed by three NULs and a newline
pub const GARBAGE: &str = "\u{1F4A5}\u{1F525}\u{26A0}\u{FE0F}\u{1F41B}\0\0\0\n";

/// TLS-shaped bytes that no TLS stack will accept.
/// The record and ClientHello lengths claim far more data than follows.
pub const FAKE_TLS_HELLO: [u8; 18] = [
    0x16, 0x03, 0x01, 0x00, 0x2e, // handshake record, TLS 1.0, length 46
    0x01, 0x00, 0x00, 0x2a, // ClientHello, length 42
    0x03, 0x03, // client version TLS 1.2
    0x53, 0x43, 0x4f, 0x4d, 0x0d, 0x0a, // start of "random"
    0x00, // cut off here
];

/// 8192 fill bytes plus the trailing newline
pub fn large_message() -> Vec<u8> {
    let mut buffer = vec![LARGE_FILL; LARGE_FILL_LEN];
    buffer.push(b'\n');
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_message_shape() {
        let data = large_message();
        assert_eq!(data.len(), 8193);
        assert!(data[..8192].iter().all(|&b| b == b'A'));
        assert_eq!(data[8192], b'\n');
    }

    #[test]
    fn test_invalid_utf8_is_invalid() {
        assert!(std::str::from_utf8(&INVALID_UTF8).is_err());
    }

    #[test]
    fn test_garbage_bytes() {
        let bytes = GARBAGE.as_bytes();
        assert_eq!(bytes.len(), 22);
        assert_eq!(&bytes[..4], &[0xF0, 0x9F, 0x92, 0xA5]);
        assert_eq!(&bytes[18..], &[0x00, 0x00, 0x00, b'\n']);
    }

    #[test]
    fn test_fake_tls_is_truncated() {
        let declared = u16::from_be_bytes([FAKE_TLS_HELLO[3], FAKE_TLS_HELLO[4]]) as usize;
        assert_eq!(FAKE_TLS_HELLO[0], 0x16);
        assert!(FAKE_TLS_HELLO.len() - 5 < declared);
    }
}
