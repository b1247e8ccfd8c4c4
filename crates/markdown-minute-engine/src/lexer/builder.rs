use crate::options::Options;

use super::{
    classify::LineClass,
    kinds::CodeFence,
    types::{Block, BlockKind},
};

/// Lexer state. Multi-line states own the lines gathered so far.
#[derive(Debug)]
enum LexState {
    Neutral,
    List(Vec<String>),
    Pre {
        language: Option<String>,
        lines: Vec<String>,
    },
    /// A header row was seen; the alignment row must follow.
    TableHead(String),
    /// Header and alignment rows; a body row must follow.
    TableAlign(Vec<String>),
    TableBody(Vec<String>),
    BlockQuote(Vec<String>),
}

impl LexState {
    fn name(&self) -> &'static str {
        match self {
            Self::Neutral => "NEUTRAL",
            Self::List(_) => "LIST",
            Self::Pre { .. } => "PRE",
            Self::TableHead(_) => "TABLE_HEAD",
            Self::TableAlign(_) => "TABLE_ALIGN",
            Self::TableBody(_) => "TABLE_BODY",
            Self::BlockQuote(_) => "BLOCKQUOTE",
        }
    }
}

/// Line-driven state machine that groups lines into [`Block`]s.
pub struct BlockBuilder {
    state: LexState,
    blank_line_breaks: bool,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(options: &Options) -> Self {
        Self {
            state: LexState::Neutral,
            blank_line_breaks: options.blank_line_breaks,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match std::mem::replace(&mut self.state, LexState::Neutral) {
            LexState::Neutral => self.start(c),
            LexState::Pre {
                language,
                mut lines,
            } => {
                if c.closes_fence() {
                    self.emit_pre(language, lines);
                } else {
                    lines.push(CodeFence::escape(c.text).into_owned());
                    self.state = LexState::Pre { language, lines };
                }
            }
            LexState::List(mut lines) => {
                if c.is_list_item {
                    lines.push(c.text.to_string());
                    self.state = LexState::List(lines);
                } else {
                    self.emit(BlockKind::List, lines.join("\n"));
                    self.start(c);
                }
            }
            LexState::TableHead(header) => {
                if c.is_alignment_row {
                    self.state = LexState::TableAlign(vec![header, c.text.to_string()]);
                } else {
                    self.emit(BlockKind::Text, header);
                    self.start(c);
                }
            }
            LexState::TableAlign(mut lines) => {
                if c.is_table_row {
                    lines.push(c.text.to_string());
                    self.state = LexState::TableBody(lines);
                } else {
                    self.emit_as_text(lines);
                    self.start(c);
                }
            }
            LexState::TableBody(mut lines) => {
                if c.is_table_row {
                    lines.push(c.text.to_string());
                    self.state = LexState::TableBody(lines);
                } else {
                    self.emit(BlockKind::Table, lines.join("\n"));
                    self.start(c);
                }
            }
            LexState::BlockQuote(mut lines) => {
                if c.quote_depth > 0 {
                    lines.push(c.text.to_string());
                    self.state = LexState::BlockQuote(lines);
                } else {
                    self.emit(BlockKind::BlockQuote, lines.join("\n"));
                    self.start(c);
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        match std::mem::replace(&mut self.state, LexState::Neutral) {
            LexState::Neutral => {}
            LexState::List(lines) => self.emit(BlockKind::List, lines.join("\n")),
            LexState::Pre { language, lines } => {
                log::debug!("unterminated code fence flushed at end of document");
                self.emit_pre(language, lines);
            }
            LexState::TableHead(header) => self.emit(BlockKind::Text, header),
            LexState::TableAlign(lines) => self.emit_as_text(lines),
            LexState::TableBody(lines) => self.emit(BlockKind::Table, lines.join("\n")),
            LexState::BlockQuote(lines) => self.emit(BlockKind::BlockQuote, lines.join("\n")),
        }
        self.out
    }

    /// Handles a line from `NEUTRAL`, checking list, pre, table and
    /// blockquote openers in that order.
    fn start(&mut self, c: &LineClass<'_>) {
        let text = c.text.to_string();
        self.state = if c.is_blank {
            if self.blank_line_breaks {
                self.emit(BlockKind::Break, String::new());
            }
            LexState::Neutral
        } else if c.is_list_item {
            LexState::List(vec![text])
        } else if let Some(sig) = &c.fence {
            LexState::Pre {
                language: sig.language.clone(),
                lines: vec![],
            }
        } else if c.is_table_row {
            LexState::TableHead(text)
        } else if c.quote_depth > 0 {
            LexState::BlockQuote(vec![text])
        } else {
            self.emit(BlockKind::Text, text);
            LexState::Neutral
        };

        if !matches!(self.state, LexState::Neutral) {
            log::trace!("lexer entered {} at {:?}", self.state.name(), c.text);
        }
    }

    /// An opening that never became a table falls back to one text block per
    /// line.
    fn emit_as_text(&mut self, lines: Vec<String>) {
        log::debug!("table opening without body rows kept as text");
        for line in lines {
            self.emit(BlockKind::Text, line);
        }
    }

    fn emit_pre(&mut self, language: Option<String>, lines: Vec<String>) {
        let content = lines.iter().map(|l| format!("{l}\n")).collect();
        self.emit(BlockKind::Pre { language }, content);
    }

    fn emit(&mut self, kind: BlockKind, content: String) {
        log::trace!("lexer flushed {kind:?} block ({} bytes)", content.len());
        self.out.push(Block { kind, content });
    }
}
