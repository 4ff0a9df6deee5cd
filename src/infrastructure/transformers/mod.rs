mod bit_encoder;
mod invariant_format;
mod numeral_codec;
mod vocabulary;
mod word_transcriber;

pub use bit_encoder::BitEncoder;
pub use invariant_format::format_invariant;
pub use numeral_codec::NumeralBaseCodec;
pub use vocabulary::{Language, Vocabulary};
pub use word_transcriber::WordTranscriber;
