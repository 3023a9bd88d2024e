//! Input decoding: bytes to [`Grid`].

mod delimiter;
mod extractor;
mod source;
mod spreadsheet;
mod text;
mod tokenizer;

pub use delimiter::{
    CANDIDATE_DELIMITERS, DEFAULT_DELIMITER, SAMPLE_LINES, count_delimiter_in_line,
    delimiter_score, detect_delimiter,
};
pub use extractor::{Extracted, RowExtractor};
pub use source::{Grid, Row, SourceFormat, SourceMetadata, content_hash, is_blank_row};
pub use spreadsheet::{display_text, read_first_sheet};
pub use text::{DecodedText, decode_text, normalize_newlines};
pub use tokenizer::{Tokenizer, TokenizerConfig};
