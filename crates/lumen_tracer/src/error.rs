//! Error types for session and camera construction.

use thiserror::Error;

/// Errors that can occur while setting up a render session.
///
/// The steady-state per-pixel path is infallible; everything that can go
/// wrong does so at construction time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid canvas size {width}x{height}: both dimensions must be at least 1")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("camera basis is degenerate: look_from, look_at and vup must span a plane")]
    DegenerateCamera,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCanvas {
            width: 0,
            height: 768,
        };
        assert!(err.to_string().contains("0x768"));
    }
}
