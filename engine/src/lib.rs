pub mod decode;
pub mod net;
pub mod parser;

// Re-export the pipeline surface the driver consumes
pub use decode::{decode_metadata, DecodeError, IconDims, IconFormat};
pub use net::{fetch, media_type, resolve_url, FetchConfig, FetchError, FetchedResource};
pub use parser::html::{extract_icon_links, DEFAULT_ICON_RELS};
