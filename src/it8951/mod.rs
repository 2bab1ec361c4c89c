//! IT8951 protocol: commands, frame codec and the session driver.
//!
//! The controller speaks a small vendor command set over a block transport.
//! Geometry and the image memory base address come from the identify
//! exchange at session start; image data is uploaded into controller memory
//! in strips and made visible with an area refresh afterwards.

pub mod cmd;
pub mod codec;
pub mod driver;
pub mod waveform;

/// Hard ceiling on pixel bytes in a single load-image transfer.
///
/// The programming guide caps one packet at roughly 60 KB; uploads are split
/// into horizontal strips so every strip's pixel data stays under this.
pub const MAX_STRIP_BYTES: u32 = 60_000;

/// A rectangular region of controller pixel memory.
///
/// Coordinates are top-left origin, in pixels. Regions used for uploads and
/// refreshes must lie fully inside the panel; out-of-bounds regions are
/// rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    /// Leftmost column.
    pub x: u32,
    /// Topmost row.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Area {
    /// Create an area from position and size.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Area { x, y, w, h }
    }

    /// Number of 8-bit pixels covered.
    pub const fn pixel_count(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Whether the area lies fully inside a `width` x `height` panel.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.x.checked_add(self.w).is_some_and(|right| right <= width)
            && self.y.checked_add(self.h).is_some_and(|bottom| bottom <= height)
    }
}
