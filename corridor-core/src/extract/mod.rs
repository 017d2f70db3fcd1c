mod route_text_extractor;
mod section_tokenizer;

pub use route_text_extractor::{collapse_whitespace, RouteTextExtractor};
pub use section_tokenizer::{
    camera_section, construction_sections, Marker, MarkerKind, SectionTokenizer,
};
