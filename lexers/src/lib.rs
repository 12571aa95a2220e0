#![deny(warnings)]

mod space_tokenizer;

pub use space_tokenizer::SpaceTokenizer;
