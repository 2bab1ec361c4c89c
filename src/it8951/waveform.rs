//! Waveform mode selectors for area refreshes.
//!
//! The controller applies one of several refresh algorithms when redrawing
//! a region. The driver passes the mode byte through untouched, firmware
//! rejects modes its waveform tables do not carry, so raw values outside
//! this list are allowed on the wire.

/// Named waveform modes from the IT8951 programming guide.
pub struct Waveform;

impl Waveform {
    /// INIT: reset the region to white, slowest (about 2000 ms).
    pub const INIT: u8 = 0;

    /// DU: direct update, non-flashing, only for grey-to-mono transitions.
    pub const DU: u8 = 1;

    /// GC16: 16-level greyscale clear, best for images (about 450 ms).
    pub const GC16: u8 = 2;

    /// GL16: 16-level greyscale with a white background assumption.
    pub const GL16: u8 = 3;

    /// GLR16: GL16 variant with reduced ghosting.
    pub const GLR16: u8 = 4;

    /// GLD16: GL16 variant with dithered transitions.
    pub const GLD16: u8 = 5;

    /// A2: black/white only, non-flashing, fastest (about 120 ms).
    pub const A2: u8 = 6;

    /// DU4: 4-level direct update.
    pub const DU4: u8 = 7;
}
