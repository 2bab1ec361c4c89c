//! IT8951 ePaper Controller Driver
//!
//! Drives ITE IT8951-based e-paper display boards (such as the Waveshare
//! 10.3" panels) that show up as a USB mass storage device and accept
//! vendor-specific block commands.
//!
//! The transport itself is not part of this crate: anything that can push a
//! command descriptor block plus an optional data phase to an already opened
//! device handle works, see [`transport::Transport`]. On Linux that is
//! typically an `SG_IO` ioctl against `/dev/sgX`.
//!
//! ### Usage
//!
//! 1. open a device handle and wrap it in a [`transport::Transport`]
//!    implementation
//! 1. construct an [`It8951`] session, which queries the panel geometry
//! 1. reorder raw pixel input for the controller's addressing with
//!    [`transform::transform`]
//! 1. upload pixels with [`It8951::load_image`], then refresh the region
//!    with [`It8951::display_area`]
//! 1. put the panel supplies back to standby with
//!    `pmic_set(false, 0)`
//!
//! Pixel data is 8-bit greyscale, one byte per pixel, row-major.

#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod it8951;
pub mod transform;
pub mod transport;

pub use crate::error::Error;

pub use crate::it8951::cmd::Cmd;
pub use crate::it8951::codec::DeviceInfo;
pub use crate::it8951::driver::It8951;
pub use crate::it8951::waveform::Waveform;
pub use crate::it8951::{Area, MAX_STRIP_BYTES};

pub use crate::transport::{Payload, Transport};
