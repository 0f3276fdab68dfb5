// ICO container metadata reader.
//
// Layout: a 6-byte ICONDIR (reserved, type, image count, all u16 LE)
// followed by one 16-byte ICONDIRENTRY per image. The entry starts with
// single-byte width and height where 0 encodes 256, then palette size,
// a reserved byte, color planes and bits-per-pixel (u16 LE each), and
// the image data size/offset. Only the directory and the first entry
// are read; pixel data is never touched.

use std::io::Read;

use super::{DecodeError, IconDims};

const FORMAT: &str = "ico";

const ICONDIR_LEN: usize = 6;
const ICONDIRENTRY_LEN: usize = 16;

// ICONDIR type field: 1 = icon, 2 = cursor.
const TYPE_ICON: u16 = 1;

/// Report the dimensions of the first image in the directory.
pub fn read_dimensions<R: Read>(mut reader: R) -> Result<IconDims, DecodeError> {
    let mut dir = [0u8; ICONDIR_LEN];
    reader
        .read_exact(&mut dir)
        .map_err(|_| DecodeError::MalformedContainer(FORMAT))?;

    let reserved = u16::from_le_bytes([dir[0], dir[1]]);
    let image_type = u16::from_le_bytes([dir[2], dir[3]]);
    let count = u16::from_le_bytes([dir[4], dir[5]]);
    if reserved != 0 || image_type != TYPE_ICON || count == 0 {
        return Err(DecodeError::MalformedContainer(FORMAT));
    }

    let mut entry = [0u8; ICONDIRENTRY_LEN];
    reader
        .read_exact(&mut entry)
        .map_err(|_| DecodeError::MalformedContainer(FORMAT))?;

    Ok(IconDims {
        width: entry_extent(entry[0]),
        height: entry_extent(entry[1]),
    })
}

// A directory entry stores each extent in one byte; 0 means 256.
fn entry_extent(raw: u8) -> u32 {
    if raw == 0 {
        256
    } else {
        u32::from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_entry_ico(width: u8, height: u8) -> Vec<u8> {
        let mut ico = vec![0u8, 0, 1, 0, 1, 0]; // reserved, type=icon, count=1
        ico.extend_from_slice(&[width, height, 0, 0]); // extents, palette, reserved
        ico.extend_from_slice(&1u16.to_le_bytes()); // planes
        ico.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
        ico.extend_from_slice(&40u32.to_le_bytes()); // data size
        ico.extend_from_slice(&22u32.to_le_bytes()); // data offset
        ico
    }

    #[test]
    fn test_single_entry_dimensions() {
        let ico = single_entry_ico(32, 32);
        let dims = read_dimensions(ico.as_slice()).unwrap();
        assert_eq!(dims, IconDims { width: 32, height: 32 });
    }

    #[test]
    fn test_zero_extent_byte_means_256() {
        let ico = single_entry_ico(0, 0);
        let dims = read_dimensions(ico.as_slice()).unwrap();
        assert_eq!(dims, IconDims { width: 256, height: 256 });
    }

    #[test]
    fn test_first_entry_wins() {
        let mut ico = vec![0u8, 0, 1, 0, 2, 0]; // two entries
        ico.extend_from_slice(&[16, 16, 0, 0, 1, 0, 32, 0]);
        ico.extend_from_slice(&40u32.to_le_bytes());
        ico.extend_from_slice(&38u32.to_le_bytes());
        ico.extend_from_slice(&[48, 48, 0, 0, 1, 0, 32, 0]);
        ico.extend_from_slice(&40u32.to_le_bytes());
        ico.extend_from_slice(&78u32.to_le_bytes());
        let dims = read_dimensions(ico.as_slice()).unwrap();
        assert_eq!(dims, IconDims { width: 16, height: 16 });
    }

    #[test]
    fn test_truncated_directory() {
        let err = read_dimensions(&b"\x00\x00\x01"[..]).unwrap_err();
        assert_eq!(err, DecodeError::MalformedContainer("ico"));
    }

    #[test]
    fn test_truncated_entry() {
        // Valid directory that promises an entry which never arrives.
        let err = read_dimensions(&b"\x00\x00\x01\x00\x01\x00\x10\x10"[..]).unwrap_err();
        assert_eq!(err, DecodeError::MalformedContainer("ico"));
    }

    #[test]
    fn test_rejects_cursor_and_bad_reserved() {
        let mut cursor = single_entry_ico(16, 16);
        cursor[2] = 2; // type=cursor
        assert!(read_dimensions(cursor.as_slice()).is_err());

        let mut bad_reserved = single_entry_ico(16, 16);
        bad_reserved[0] = 1;
        assert!(read_dimensions(bad_reserved.as_slice()).is_err());
    }

    #[test]
    fn test_rejects_empty_directory() {
        let ico = [0u8, 0, 1, 0, 0, 0]; // count=0
        assert!(read_dimensions(&ico[..]).is_err());
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(
            read_dimensions(&b""[..]).unwrap_err(),
            DecodeError::MalformedContainer("ico")
        );
    }
}
