/// A zero-based line/character location in a document.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Position {
    pub character: usize,
    pub line: usize,
}
impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { character, line }
    }

    /// The same column, `delta` lines up. Saturates at the first line.
    pub fn lines_up(&self, delta: usize) -> Self {
        Self {
            character: self.character,
            line: self.line.saturating_sub(delta),
        }
    }

    /// The byte offset of this position in `text`. Columns past the end of
    /// a line clamp to the line's end, before its `\n` or `\r\n`; lines
    /// past the end clamp to the end of `text`.
    pub fn to_byte_offset(&self, text: &str) -> usize {
        let mut offset = 0;
        for (line_idx, line) in text.split_inclusive('\n').enumerate() {
            if line_idx == self.line {
                let line_content = line.strip_suffix("\r\n")
                    .or_else(|| line.strip_suffix('\n'))
                    .unwrap_or(line);
                return offset + line_content.char_indices()
                    .nth(self.character)
                    .map(|(idx, _)| idx)
                    .unwrap_or(line_content.len());
            }
            offset += line.len();
        }
        text.len()
    }

    /// The position just past `text` when `text` is inserted here.
    pub fn after_insert(&self, text: &str) -> Self {
        match text.rfind('\n') {
            Some(last_newline) => Self {
                character: text[last_newline + 1..].chars().count(),
                line: self.line + text.matches('\n').count(),
            },
            None => Self {
                character: self.character + text.chars().count(),
                line: self.line,
            },
        }
    }
}
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}
