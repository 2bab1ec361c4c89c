//! IT8951 session driver: identify, image upload, refresh and power control.

use crate::error::Error;
use crate::it8951::codec::{self, DeviceInfo, DEVICE_INFO_LEN};
use crate::it8951::{Area, MAX_STRIP_BYTES};
use crate::transport::{Payload, Transport};

/// Driver for one identified IT8951 controller.
///
/// Owns the transport handle and the device descriptor read during
/// construction. The descriptor never changes afterwards. All operations
/// are synchronous; a failed exchange leaves the run in a terminal failed
/// state and is reported to the caller, retry policy is the caller's.
pub struct It8951<T> {
    transport: T,
    info: DeviceInfo,
}

impl<T: Transport> It8951<T> {
    /// Open a session by querying the device descriptor over `transport`.
    pub fn new(mut transport: T) -> Result<Self, Error> {
        let mut raw = [0u8; DEVICE_INFO_LEN];
        transport.exchange(&codec::identify_frame(), Payload::FromDevice(&mut raw))?;
        let info = DeviceInfo::parse(&raw)?;

        log::info!(
            "IT8951 found, {}x{} pixels, image memory at {:#010x}",
            info.width,
            info.height,
            info.memory_address
        );

        Ok(It8951 { transport, info })
    }

    /// Panel width in pixels.
    pub fn width(&self) -> u32 {
        self.info.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Base address of image memory on the controller.
    pub fn base_address(&self) -> u32 {
        self.info.memory_address
    }

    /// Full descriptor from the identify exchange.
    pub fn device_info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Convert a bottom-origin row coordinate to the controller's top-origin
    /// addressing, for a region `h` rows tall.
    pub fn flip_y(&self, y: u32, h: u32) -> u32 {
        self.info.height.saturating_sub(y).saturating_sub(h)
    }

    /// Upload greyscale pixels into `area` of controller image memory.
    ///
    /// `pixels` is row-major, one byte per pixel, length exactly `w * h`.
    /// The upload runs as horizontal strips of full rows so each transfer's
    /// pixel data stays within [`MAX_STRIP_BYTES`]; strips go out strictly
    /// in increasing row order and the first failed strip aborts the call.
    /// Already-written strips are not rolled back, re-issuing the whole
    /// call is safe.
    pub fn load_image(&mut self, area: Area, pixels: &[u8]) -> Result<(), Error> {
        if area.w == 0 {
            return Err(Error::InvalidArgument("area width must be non-zero"));
        }
        if area.w > MAX_STRIP_BYTES {
            return Err(Error::InvalidArgument(
                "area width exceeds the per-transfer byte ceiling",
            ));
        }
        self.check_bounds(&area)?;
        if pixels.len() != area.pixel_count() {
            return Err(Error::InvalidArgument(
                "pixel buffer length must equal area w * h",
            ));
        }

        // Full rows per strip under the transfer ceiling; the final strip
        // is clipped to the rows that remain.
        let strip_rows = MAX_STRIP_BYTES / area.w;
        let mut offset_rows = 0u32;

        while offset_rows < area.h {
            let rows = strip_rows.min(area.h - offset_rows);
            let strip = Area::new(area.x, area.y + offset_rows, area.w, rows);

            log::debug!(
                "sending strip x{},y{},w{},h{}",
                strip.x,
                strip.y,
                strip.w,
                strip.h
            );

            let from = offset_rows as usize * area.w as usize;
            let to = from + strip.pixel_count();
            let payload =
                codec::load_image_payload(self.info.memory_address, strip, &pixels[from..to]);
            self.transport
                .exchange(&codec::load_image_frame(), Payload::ToDevice(&payload))?;

            offset_rows += rows;
        }

        Ok(())
    }

    /// Refresh `area` of the panel from image memory with waveform `mode`.
    ///
    /// Success means the controller accepted the refresh request; the
    /// wait-ready flag makes the firmware, not the host, block until the
    /// panel is free.
    pub fn display_area(&mut self, area: Area, mode: u8) -> Result<(), Error> {
        self.check_bounds(&area)?;
        let payload = codec::display_area_payload(self.info.memory_address, mode, area);
        self.transport
            .exchange(&codec::display_area_frame(), Payload::ToDevice(&payload))
    }

    /// Switch the panel power state, optionally reprogramming the vcom
    /// voltage reference.
    ///
    /// `vcom_millivolts == 0` leaves the reference as-is and only changes
    /// the power state; `pmic_set(false, 0)` is the usual end-of-run call
    /// that returns the panel supplies to standby.
    pub fn pmic_set(&mut self, on: bool, vcom_millivolts: u16) -> Result<(), Error> {
        self.transport
            .exchange(&codec::pmic_frame(on, vcom_millivolts), Payload::None)
    }

    /// Consume the session and hand back the transport handle.
    pub fn release(self) -> T {
        self.transport
    }

    fn check_bounds(&self, area: &Area) -> Result<(), Error> {
        if !area.fits(self.info.width, self.info.height) {
            return Err(Error::InvalidArgument("area exceeds device geometry"));
        }
        Ok(())
    }
}
