// Icon container metadata decoding.
//
// Reads pixel dimensions out of an icon's container header without
// decompressing or rasterizing anything. Dispatch is driven entirely by
// the media type the transport declared; the stream bytes are never
// sniffed for magic numbers to pick a format.

pub mod ico;
pub mod png;

use std::io::Read;

use thiserror::Error;

/// Pixel dimensions read from a container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDims {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The declared media type has no registered container reader.
    #[error("no decoder for media type: {0}")]
    UnsupportedFormat(String),
    /// The stream is too short for the container header, or its
    /// signature/reserved fields are invalid. Carries the format name.
    #[error("malformed {0} container")]
    MalformedContainer(&'static str),
}

/// Container formats with a registered metadata reader. Adding a format
/// means adding a variant, its media-type mapping, and a reader module;
/// the dispatch below stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Ico,
    Png,
}

impl IconFormat {
    /// Map a parameter-stripped media type to a container format.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "image/x-icon" | "image/vnd.microsoft.icon" => Some(IconFormat::Ico),
            "image/png" => Some(IconFormat::Png),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconFormat::Ico => "ico",
            IconFormat::Png => "png",
        }
    }

    /// Read the container header and report the image dimensions.
    pub fn read_dimensions<R: Read>(&self, reader: R) -> Result<IconDims, DecodeError> {
        match self {
            IconFormat::Ico => ico::read_dimensions(reader),
            IconFormat::Png => png::read_dimensions(reader),
        }
    }
}

/// Decode the pixel dimensions of the icon in `reader`, whose container
/// format is chosen by `media_type` alone. Stateless; each call consumes
/// only the header bytes it needs.
pub fn decode_metadata<R: Read>(reader: R, media_type: &str) -> Result<IconDims, DecodeError> {
    let format = IconFormat::from_media_type(media_type)
        .ok_or_else(|| DecodeError::UnsupportedFormat(media_type.to_string()))?;
    format.read_dimensions(reader)
}
