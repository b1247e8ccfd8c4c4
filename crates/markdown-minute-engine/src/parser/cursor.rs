/// Scan position inside the text handed to the inline tokenizer.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being tokenized.
    pub s: &'a str,
    /// Byte offset of the first unconsumed character.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed tail.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Consumes `n` bytes. Callers pass match lengths, so `n` always lands
    /// on a character boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
