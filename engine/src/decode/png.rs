// PNG container metadata reader.
//
// A PNG stream opens with an 8-byte signature and the IHDR chunk, whose
// layout is fixed: 4-byte length, the literal type "IHDR", then width
// and height as big-endian u32. That prefix is all this reader touches:
// no chunk CRC is checked and no IDAT data is inflated.

use std::io::Read;

use super::{DecodeError, IconDims};

const FORMAT: &str = "png";

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

// signature + chunk length + chunk type + width + height
const HEADER_LEN: usize = 24;

/// Report the dimensions recorded in the IHDR chunk.
pub fn read_dimensions<R: Read>(mut reader: R) -> Result<IconDims, DecodeError> {
    let mut header = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut header)
        .map_err(|_| DecodeError::MalformedContainer(FORMAT))?;

    if header[..8] != SIGNATURE || &header[12..16] != b"IHDR" {
        return Err(DecodeError::MalformedContainer(FORMAT));
    }

    Ok(IconDims {
        width: u32::from_be_bytes([header[16], header[17], header[18], header[19]]),
        height: u32::from_be_bytes([header[20], header[21], header[22], header[23]]),
    })
}
