//! Vendor command opcodes for the IT8951 block protocol.

/// Command opcodes understood by the controller firmware.
///
/// Every command descriptor block starts with [`Cmd::CUSTOMER`]; the
/// sub-opcode sits at a fixed offset further in, with reserved zero bytes
/// in between.
pub struct Cmd;

impl Cmd {
    /// Vendor prefix, the first byte of every command descriptor block.
    pub const CUSTOMER: u8 = 0xFE;

    /// Query the device descriptor (geometry, memory layout, version).
    pub const GET_SYS: u8 = 0x80;

    /// Read controller memory. Not issued by this driver.
    pub const READ_MEM: u8 = 0x81;

    /// Write controller memory. Not issued by this driver.
    pub const WRITE_MEM: u8 = 0x82;

    /// Refresh a rectangular region of the panel from image memory.
    pub const DISPLAY_AREA: u8 = 0x94;

    /// Upload pixel data into a rectangular region of image memory.
    pub const LOAD_IMG_AREA: u8 = 0xA2;

    /// Power state and vcom voltage reference control.
    pub const PMIC_CTRL: u8 = 0xA3;
}
