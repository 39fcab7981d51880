//! 1-bit uncompressed BMP encoding.
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, 2-entry palette
//! (index 0 = black, index 1 = white), then bottom-up rows packed MSB first
//! and zero-padded to a multiple of 4 bytes.

use tracing::debug;

use crate::{ConvertError, MonochromeImage, Result};

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const PALETTE_SIZE: u32 = 2 * 4;

/// Offset of the pixel array from the start of the file.
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE + PALETTE_SIZE;

const BITS_PER_PIXEL: u16 = 1;
const BI_RGB: u32 = 0;
/// 72 DPI.
const PIXELS_PER_METER: i32 = 2835;

/// Palette in BGRX order.
const PALETTE: [[u8; 4]; 2] = [[0x00, 0x00, 0x00, 0x00], [0xff, 0xff, 0xff, 0x00]];

/// Bytes per stored row, including padding.
pub fn row_stride(width: u32) -> usize {
    (width as usize).div_ceil(32) * 4
}

/// Pack one row of pixel flags 8 per byte, most significant bit first,
/// zero-padded to `stride` bytes.
fn pack_row(row: &[bool], stride: usize, out: &mut Vec<u8>) {
    let start = out.len();
    out.extend(row.chunks(8).map(|chunk| {
        chunk
            .iter()
            .enumerate()
            .filter(|&(_, &white)| white)
            .fold(0u8, |byte, (bit, _)| byte | (0x80 >> bit))
    }));
    out.resize(start + stride, 0);
}

/// Serialize a monochrome image into a 1-bpp BMP byte stream.
pub fn encode_bitmap(img: &MonochromeImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ConvertError::MalformedImage(format!(
            "cannot encode an empty {width}x{height} bitmap"
        )));
    }
    if img.pixels().len() != width as usize * height as usize {
        return Err(ConvertError::MalformedImage(format!(
            "pixel buffer holds {} values, expected {} for {width}x{height}",
            img.pixels().len(),
            width as usize * height as usize
        )));
    }

    let stride = row_stride(width);
    let too_large = || {
        ConvertError::MalformedImage(format!("{width}x{height} exceeds the BMP size limit"))
    };
    let image_size = u32::try_from(stride)
        .ok()
        .and_then(|s| s.checked_mul(height))
        .ok_or_else(too_large)?;
    let file_size = image_size
        .checked_add(PIXEL_DATA_OFFSET)
        .ok_or_else(too_large)?;
    let width_field = i32::try_from(width).map_err(|_| too_large())?;
    let height_field = i32::try_from(height).map_err(|_| too_large())?;

    let mut buf = Vec::with_capacity(file_size as usize);

    // BITMAPFILEHEADER
    buf.extend_from_slice(b"BM");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes());
    buf.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER (positive height = bottom-up)
    buf.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    buf.extend_from_slice(&width_field.to_le_bytes());
    buf.extend_from_slice(&height_field.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    buf.extend_from_slice(&BI_RGB.to_le_bytes());
    buf.extend_from_slice(&image_size.to_le_bytes());
    buf.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    buf.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    buf.extend_from_slice(&(PALETTE.len() as u32).to_le_bytes());
    buf.extend_from_slice(&(PALETTE.len() as u32).to_le_bytes());

    for entry in &PALETTE {
        buf.extend_from_slice(entry);
    }

    for y in (0..height).rev() {
        pack_row(img.row(y), stride, &mut buf);
    }

    debug_assert_eq!(buf.len(), file_size as usize);
    debug!(width, height, bytes = buf.len(), "Encoded 1-bit bitmap");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn read_u16(buf: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([buf[at], buf[at + 1]])
    }

    fn read_u32(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    }

    fn checkerboard(width: u32, height: u32) -> MonochromeImage {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x + y) % 2 == 0))
            .collect();
        MonochromeImage::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_row_stride_is_four_byte_aligned() {
        assert_eq!(row_stride(1), 4);
        assert_eq!(row_stride(8), 4);
        assert_eq!(row_stride(32), 4);
        assert_eq!(row_stride(33), 8);
        assert_eq!(row_stride(544), 68);
        assert_eq!(row_stride(576), 72);
    }

    #[test]
    fn test_pack_row_msb_first() {
        let mut out = Vec::new();
        pack_row(&[true, false, false, false, false, false, false, true, true], 4, &mut out);
        assert_eq!(out, vec![0x81, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_header_fields() {
        let img = checkerboard(544, 136);
        let buf = encode_bitmap(&img).unwrap();

        assert_eq!(&buf[0..2], b"BM");
        assert_eq!(read_u32(&buf, 2) as usize, buf.len());
        assert_eq!(read_u32(&buf, 10), 62);
        assert_eq!(read_u32(&buf, 14), 40);
        assert_eq!(read_u32(&buf, 18), 544);
        assert_eq!(read_u32(&buf, 22), 136);
        assert_eq!(read_u16(&buf, 26), 1, "planes");
        assert_eq!(read_u16(&buf, 28), 1, "bit depth");
        assert_eq!(read_u32(&buf, 30), 0, "compression");
        assert_eq!(read_u32(&buf, 34), 68 * 136);
        assert_eq!(read_u32(&buf, 46), 2, "colors used");
        assert_eq!(&buf[54..62], &[0, 0, 0, 0, 255, 255, 255, 0]);
        assert_eq!(buf.len(), 62 + 68 * 136);
    }

    #[test]
    fn test_rows_are_bottom_up() {
        // top row: white black, bottom row: black white
        let img = MonochromeImage::from_raw(2, 2, vec![true, false, false, true]).unwrap();
        let buf = encode_bitmap(&img).unwrap();
        let data = &buf[PIXEL_DATA_OFFSET as usize..];
        assert_eq!(data, &[0x40, 0, 0, 0, 0x80, 0, 0, 0]);
    }

    #[test]
    fn test_decodes_with_standard_reader() {
        let img = checkerboard(13, 5);
        let buf = encode_bitmap(&img).unwrap();

        let decoded = image::load_from_memory_with_format(&buf, ImageFormat::Bmp)
            .expect("bitmap should decode")
            .to_luma8();
        assert_eq!(decoded.dimensions(), (13, 5));
        for y in 0..5 {
            for x in 0..13 {
                let expected = if img.is_white(x, y) { 255 } else { 0 };
                assert_eq!(
                    decoded.get_pixel(x, y).0[0],
                    expected,
                    "pixel ({x}, {y}) does not round-trip"
                );
            }
        }
    }

    #[test]
    fn test_single_pixel_bitmap() {
        let img = MonochromeImage::from_raw(1, 1, vec![true]).unwrap();
        let buf = encode_bitmap(&img).unwrap();
        assert_eq!(buf.len(), 66);
        assert_eq!(buf[62], 0x80);
    }
}
