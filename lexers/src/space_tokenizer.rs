use std::str::Chars;

// A tokenizer that splits a character stream on whitespace.
// Runs of whitespace are collapsed, leading/trailing space yields no token.
pub struct SpaceTokenizer<I: Iterator<Item = char>> {
    src: I,
}

impl<'a> SpaceTokenizer<Chars<'a>> {
    pub fn from_str(src: &'a str) -> Self {
        SpaceTokenizer::new(src.chars())
    }
}

impl<I: Iterator<Item = char>> SpaceTokenizer<I> {
    pub fn new(source: I) -> Self {
        SpaceTokenizer { src: source }
    }
}

impl<I: Iterator<Item = char>> Iterator for SpaceTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        let mut token = String::new();
        for ch in self.src.by_ref() {
            if !ch.is_whitespace() {
                token.push(ch);
            } else if !token.is_empty() {
                return Some(token);
            }
        }
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}
