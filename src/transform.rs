//! Pixel buffer reordering for the controller's native addressing.
//!
//! Raw image input arrives bottom-left-origin, row-major. The controller
//! addresses its image memory from the top left, so the buffer has to be
//! reordered before upload. An optional 90 degree rotation covers panels
//! mounted sideways.

use crate::error::Error;

/// Reorder a `w` x `h` greyscale buffer for upload.
///
/// * `rotation == 0` reverses the row order, turning bottom-origin input
///   into the controller's top-origin layout: input rows `[A, B, C]` come
///   out as `[C, B, A]`.
/// * `rotation == 90` applies the same origin flip combined with a 90 degree
///   rotation; the result is addressed as `h` columns by `w` rows, so the
///   caller swaps the dimensions it passes to later upload calls.
///
/// Any other rotation is rejected. The output length always equals the
/// input length.
pub fn transform(pixels: &[u8], w: u32, h: u32, rotation: u32) -> Result<Vec<u8>, Error> {
    let expected = (w as usize).checked_mul(h as usize);
    if expected != Some(pixels.len()) {
        return Err(Error::InvalidArgument(
            "pixel buffer length must equal w * h",
        ));
    }
    if pixels.is_empty() {
        return Ok(Vec::new());
    }

    match rotation {
        0 => Ok(flip_rows(pixels, w as usize)),
        90 => Ok(rotate_flipped(pixels, w as usize, h as usize)),
        _ => Err(Error::InvalidArgument("rotation must be 0 or 90 degrees")),
    }
}

/// Reverse the row order, keeping each row's left-to-right pixel order.
fn flip_rows(pixels: &[u8], w: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len());
    for row in pixels.chunks(w).rev() {
        out.extend_from_slice(row);
    }
    out
}

/// Origin flip combined with a 90 degree rotation.
///
/// Input is consumed strictly in linear order; byte `n` lands in the output
/// addressed as `h` columns by `w` rows, sweeping output columns outward and
/// output rows in reverse.
fn rotate_flipped(pixels: &[u8], w: usize, h: usize) -> Vec<u8> {
    let mut out = vec![0u8; pixels.len()];
    for (n, &px) in pixels.iter().enumerate() {
        let col = n / w;
        let row = w - 1 - (n % w);
        out[row * h + col] = px;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_0_reverses_row_order() {
        // Three rows of width 4: [A, A, A, A], [B, ...], [C, ...].
        let input = [1u8, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3];
        let out = transform(&input, 4, 3, 0).unwrap();
        assert_eq!(out, [3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1]);
    }

    #[test]
    fn rotation_0_keeps_pixel_order_within_rows() {
        let input = [1u8, 2, 3, 4, 5, 6];
        let out = transform(&input, 3, 2, 0).unwrap();
        assert_eq!(out, [4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn rotation_0_twice_is_identity() {
        let input: Vec<u8> = (0..24).collect();
        let once = transform(&input, 6, 4, 0).unwrap();
        let twice = transform(&once, 6, 4, 0).unwrap();
        assert_eq!(twice, input);
    }

    #[test]
    fn rotation_90_pinned_example() {
        // 2 wide, 3 tall; output is addressed as 3 wide, 2 tall.
        let input = [1u8, 2, 3, 4, 5, 6];
        let out = transform(&input, 2, 3, 90).unwrap();
        assert_eq!(out, [2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn rotation_90_single_column() {
        // A 1-wide strip becomes a single output row in input order.
        let input = [7u8, 8, 9];
        let out = transform(&input, 1, 3, 90).unwrap();
        assert_eq!(out, [7, 8, 9]);
    }

    #[test]
    fn output_length_matches_input() {
        let input = vec![0u8; 5 * 7];
        assert_eq!(transform(&input, 5, 7, 0).unwrap().len(), input.len());
        assert_eq!(transform(&input, 5, 7, 90).unwrap().len(), input.len());
    }

    #[test]
    fn unsupported_rotation_is_rejected() {
        let input = [0u8; 4];
        assert!(matches!(
            transform(&input, 2, 2, 180),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let input = [0u8; 5];
        assert!(matches!(
            transform(&input, 2, 3, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(transform(&[], 0, 0, 0).unwrap(), Vec::<u8>::new());
    }
}
