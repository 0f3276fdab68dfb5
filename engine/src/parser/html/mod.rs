pub mod links;
pub mod tokenizer;

pub use links::{extract_icon_links, DEFAULT_ICON_RELS};
pub use tokenizer::{Attribute, Token, Tokenizer};
