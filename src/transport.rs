//! Block-command transport abstraction.
//!
//! The IT8951 accepts vendor-specific command descriptor blocks with an
//! optional data phase in either direction. Implementations wrap whatever
//! mechanism delivers those to the device, on Linux usually the SCSI generic
//! `SG_IO` ioctl on an open `/dev/sgX` handle.

use crate::error::Error;

/// Data phase accompanying a command descriptor block.
pub enum Payload<'a> {
    /// No data phase.
    None,
    /// Host-to-device data phase.
    ToDevice(&'a [u8]),
    /// Device-to-host data phase, filled by the transport.
    FromDevice(&'a mut [u8]),
}

impl Payload<'_> {
    /// Length in bytes of the data phase.
    pub fn len(&self) -> usize {
        match self {
            Payload::None => 0,
            Payload::ToDevice(data) => data.len(),
            Payload::FromDevice(data) => data.len(),
        }
    }

    /// Whether there is no data phase at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A synchronous block-command transport to a single identified device.
///
/// One call is one exchange: the command descriptor block goes out, the data
/// phase (if any) runs to completion, and the call returns. The driver never
/// overlaps exchanges and issues them strictly in order.
pub trait Transport {
    /// Perform one command exchange.
    ///
    /// Returns [`Error::Protocol`] when the exchange fails; implementations
    /// should include the underlying cause in the message.
    fn exchange(&mut self, cdb: &[u8], payload: Payload<'_>) -> Result<(), Error>;
}
