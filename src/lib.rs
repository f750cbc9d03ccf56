mod chunker;
mod diffs;
mod markup;
mod review;
mod tokenizer;

pub use chunker::{
    chunk::{Chunk, ChunkKind},
    chunk_fragment, chunk_fragment_with_parser,
};
pub use diffs::diff_error::DiffError;
pub use markup::{FragmentScanner, MalformedMarkup, MarkupNode, MarkupParser, escape, plain_text};
pub use review::{
    ChangeRecord, ConflictGroup, DELETION_CLASS, Decision, DecisionArena, INSERTION_CLASS,
    MergeView, ResolutionPolicy, diff_blocks, diff_blocks_with_parser, diff_tokens,
    diff_tokens_with_tokenizer, resolve_blocks, resolve_conflicts,
};
pub use tokenizer::{Tokenizer, token::Token, word_tokenizer::word_tokenizer};

#[cfg(feature = "wasm")]
pub mod wasm;
