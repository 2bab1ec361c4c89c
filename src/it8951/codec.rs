//! Command frame construction and identify-response parsing.
//!
//! Builders here are pure: they produce the exact wire bytes and leave all
//! I/O to the transport. Every multi-byte numeric field is big-endian on
//! the wire regardless of host byte order.

use crate::error::Error;
use crate::it8951::cmd::Cmd;
use crate::it8951::Area;

/// Size in bytes of the identify response structure.
pub const DEVICE_INFO_LEN: usize = 112;

/// Byte count of the area header preceding pixel data in a load transfer.
pub const LOAD_HEADER_LEN: usize = 20;

/// Device descriptor returned by the identify command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Base address of image memory on the controller.
    pub memory_address: u32,
    /// Firmware protocol version.
    pub version: u32,
    /// Signature tag, the ASCII digits "8951" on genuine parts.
    pub signature: u32,
}

impl DeviceInfo {
    /// Parse an identify response, converting fields from wire order.
    pub fn parse(raw: &[u8]) -> Result<Self, Error> {
        if raw.len() < DEVICE_INFO_LEN {
            return Err(Error::Protocol(format!(
                "identify response truncated to {} bytes",
                raw.len()
            )));
        }
        Ok(DeviceInfo {
            signature: read_u32(raw, 8),
            version: read_u32(raw, 12),
            width: read_u32(raw, 16),
            height: read_u32(raw, 20),
            memory_address: read_u32(raw, 28),
        })
    }
}

fn read_u32(raw: &[u8], offset: usize) -> u32 {
    let mut field = [0u8; 4];
    field.copy_from_slice(&raw[offset..offset + 4]);
    u32::from_be_bytes(field)
}

/// Fixed identify command descriptor.
///
/// Bytes 2..6 carry the ASCII digits "8951".
pub fn identify_frame() -> [u8; 11] {
    [
        Cmd::CUSTOMER,
        0x00,
        0x38,
        0x39,
        0x35,
        0x31,
        Cmd::GET_SYS,
        0x00,
        0x01,
        0x00,
        0x02,
    ]
}

/// Power and vcom control descriptor, no data phase.
///
/// A zero `vcom_millivolts` leaves the voltage reference untouched and only
/// switches the power state.
pub fn pmic_frame(on: bool, vcom_millivolts: u16) -> [u8; 16] {
    let mut frame = [0u8; 16];
    frame[0] = Cmd::CUSTOMER;
    frame[6] = Cmd::PMIC_CTRL;
    if vcom_millivolts != 0 {
        let vcom = vcom_millivolts.to_be_bytes();
        frame[7] = vcom[0];
        frame[8] = vcom[1];
        frame[9] = 1; // set vcom
    }
    frame[10] = 1; // set power
    frame[11] = u8::from(on);
    frame
}

/// Display-area command descriptor; the area payload travels in the data
/// phase, see [`display_area_payload`].
pub fn display_area_frame() -> [u8; 16] {
    let mut frame = [0u8; 16];
    frame[0] = Cmd::CUSTOMER;
    frame[6] = Cmd::DISPLAY_AREA;
    frame
}

/// Display-area data phase: base address, waveform mode and the target
/// rectangle, with the wait-ready flag raised so the firmware blocks
/// internally until the panel is free.
pub fn display_area_payload(base_address: u32, mode: u8, area: Area) -> [u8; 28] {
    let mut payload = [0u8; 28];
    let fields = [
        base_address,
        u32::from(mode),
        area.x,
        area.y,
        area.w,
        area.h,
        1, // wait for ready
    ];
    for (slot, value) in fields.into_iter().enumerate() {
        payload[slot * 4..slot * 4 + 4].copy_from_slice(&value.to_be_bytes());
    }
    payload
}

/// Load-image-area command descriptor; header and pixels travel in the data
/// phase, see [`load_image_payload`].
pub fn load_image_frame() -> [u8; 7] {
    let mut frame = [0u8; 7];
    frame[0] = Cmd::CUSTOMER;
    frame[6] = Cmd::LOAD_IMG_AREA;
    frame
}

/// Load-image-area data phase: a [`LOAD_HEADER_LEN`]-byte area header
/// followed by one byte per pixel.
pub fn load_image_payload(base_address: u32, area: Area, pixels: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(LOAD_HEADER_LEN + pixels.len());
    for value in [base_address, area.x, area.y, area.w, area.h] {
        payload.extend_from_slice(&value.to_be_bytes());
    }
    payload.extend_from_slice(pixels);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_frame_bytes() {
        assert_eq!(
            identify_frame(),
            [0xFE, 0x00, 0x38, 0x39, 0x35, 0x31, 0x80, 0x00, 0x01, 0x00, 0x02]
        );
    }

    #[test]
    fn pmic_frame_standby_leaves_vcom_untouched() {
        let frame = pmic_frame(false, 0);
        assert_eq!(frame[0], 0xFE);
        assert_eq!(frame[6], 0xA3);
        assert_eq!(&frame[7..10], &[0, 0, 0]); // vcom bytes and set-vcom flag
        assert_eq!(frame[10], 1); // set power
        assert_eq!(frame[11], 0); // power off
        assert_eq!(&frame[12..], &[0, 0, 0, 0]);
    }

    #[test]
    fn pmic_frame_with_vcom() {
        let frame = pmic_frame(true, 2500);
        assert_eq!(&frame[7..9], &2500u16.to_be_bytes());
        assert_eq!(frame[9], 1); // set vcom
        assert_eq!(frame[10], 1); // set power
        assert_eq!(frame[11], 1); // power on
    }

    #[test]
    fn display_area_payload_layout() {
        let payload = display_area_payload(0x0011_2233, 2, Area::new(10, 20, 30, 40));
        let field = |slot: usize| {
            let mut b = [0u8; 4];
            b.copy_from_slice(&payload[slot * 4..slot * 4 + 4]);
            u32::from_be_bytes(b)
        };
        assert_eq!(field(0), 0x0011_2233);
        assert_eq!(field(1), 2);
        assert_eq!(field(2), 10);
        assert_eq!(field(3), 20);
        assert_eq!(field(4), 30);
        assert_eq!(field(5), 40);
        assert_eq!(field(6), 1);
    }

    #[test]
    fn display_area_frame_layout() {
        let frame = display_area_frame();
        assert_eq!(frame.len(), 16);
        assert_eq!(frame[0], 0xFE);
        assert_eq!(&frame[1..6], &[0, 0, 0, 0, 0]);
        assert_eq!(frame[6], 0x94);
    }

    #[test]
    fn load_image_payload_header_then_pixels() {
        let pixels = [9u8, 8, 7, 6];
        let payload = load_image_payload(0xDEAD_BEEF, Area::new(1, 2, 2, 2), &pixels);
        assert_eq!(payload.len(), LOAD_HEADER_LEN + pixels.len());
        assert_eq!(&payload[0..4], &0xDEAD_BEEFu32.to_be_bytes());
        assert_eq!(&payload[4..8], &1u32.to_be_bytes());
        assert_eq!(&payload[8..12], &2u32.to_be_bytes());
        assert_eq!(&payload[12..16], &2u32.to_be_bytes());
        assert_eq!(&payload[16..20], &2u32.to_be_bytes());
        assert_eq!(&payload[20..], &pixels);
    }

    #[test]
    fn load_image_frame_layout() {
        let frame = load_image_frame();
        assert_eq!(frame.len(), 7);
        assert_eq!(frame[0], 0xFE);
        assert_eq!(frame[6], 0xA2);
    }

    #[test]
    fn device_info_parse_converts_from_wire_order() {
        let mut raw = [0u8; DEVICE_INFO_LEN];
        raw[8..12].copy_from_slice(&0x3839_3531u32.to_be_bytes());
        raw[12..16].copy_from_slice(&2u32.to_be_bytes());
        raw[16..20].copy_from_slice(&1872u32.to_be_bytes());
        raw[20..24].copy_from_slice(&1404u32.to_be_bytes());
        raw[28..32].copy_from_slice(&0x0012_3456u32.to_be_bytes());

        let info = DeviceInfo::parse(&raw).unwrap();
        assert_eq!(info.signature, 0x3839_3531);
        assert_eq!(info.version, 2);
        assert_eq!(info.width, 1872);
        assert_eq!(info.height, 1404);
        assert_eq!(info.memory_address, 0x0012_3456);
    }

    #[test]
    fn device_info_parse_rejects_short_response() {
        let raw = [0u8; 32];
        assert!(matches!(DeviceInfo::parse(&raw), Err(Error::Protocol(_))));
    }
}
