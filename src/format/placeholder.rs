//! Tokenizing of format strings and classification of placeholder bodies.

/// Kinds of blocks a format string can open and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `{?N}` … `{?}`
    If,
    /// `{/N}` … `{/}`
    NotIf,
    /// `{#CODE}` … `{#}`
    Color,
}

impl Block {
    /// The literal text closing this kind of block.
    pub fn closing_marker(self) -> &'static str {
        match self {
            Block::If => "{?}",
            Block::NotIf => "{/}",
            Block::Color => "{#}",
        }
    }
}

/// A lexical unit of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// A run of text without any `{`.
    Literal(&'t str),
    /// `{{`, standing for a single literal `{`.
    Brace,
    /// `{}` or a lone `{` ending the format string. `literal` is the text
    /// written when no argument is left to draw.
    Empty { literal: &'static str },
    Placeholder(Placeholder<'t>),
}

/// A `{body}` span. `closed` is false when the format string ended before a
/// closing `}` was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'t> {
    pub body: &'t str,
    pub closed: bool,
}

impl<'t> Placeholder<'t> {
    pub fn directive(&self) -> Directive<'t> {
        Directive::parse(self.body)
    }

    /// Writes the placeholder back exactly as it appeared in the format string.
    pub fn write_literal(&self, buffer: &mut String) {
        buffer.push('{');
        buffer.push_str(self.body);
        if self.closed {
            buffer.push('}');
        }
    }
}

/// The action requested by a placeholder body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'t> {
    /// `-`: stop rendering.
    Stop,
    /// `?`, `/` or `#`: close the innermost block of that kind.
    Close(Block),
    /// `?N` or `/N`: open a conditional guarded by argument `N`.
    If { index: &'t str, negated: bool },
    /// `#CODE`: open a color block with the given SGR parameters.
    Color(&'t str),
    /// `N`: substitute argument `N`.
    Index(&'t str),
}

impl<'t> Directive<'t> {
    pub fn parse(body: &'t str) -> Self {
        match body {
            "-" => return Directive::Stop,
            "?" => return Directive::Close(Block::If),
            "/" => return Directive::Close(Block::NotIf),
            "#" => return Directive::Close(Block::Color),
            _ => {}
        }

        if let Some(index) = body.strip_prefix('?') {
            Directive::If { index, negated: false }
        } else if let Some(index) = body.strip_prefix('/') {
            Directive::If { index, negated: true }
        } else if let Some(code) = body.strip_prefix('#') {
            Directive::Color(code)
        } else {
            Directive::Index(body)
        }
    }
}

/// Parses a 1-based argument reference and returns its 0-based position.
///
/// Parsing follows `sscanf("%u")`: leading whitespace and a `+` sign are
/// accepted and anything after the leading digits is ignored. A leading `-`,
/// a missing number, overflow and `0` all yield `None`.
pub fn argument_index(value: &str) -> Option<usize> {
    if value.starts_with('-') {
        return None;
    }

    let value = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    let index: u32 = value[..end].parse().ok()?;
    (index as usize).checked_sub(1)
}

/// Single pass, left to right scanner over a format string.
///
/// The only way to move the cursor other than reading tokens is
/// [`Scanner::skip_past`], used to fast-forward over a failed conditional.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    template: &'t str,
    position: usize,
}

impl<'t> Scanner<'t> {
    pub fn new(template: &'t str) -> Self {
        Self {
            template,
            position: 0,
        }
    }

    /// The part of the format string not scanned yet.
    pub fn remaining(&self) -> &'t str {
        &self.template[self.position..]
    }

    pub fn next_token(&mut self) -> Option<Token<'t>> {
        let bytes = self.template.as_bytes();
        let start = self.position;

        if start >= bytes.len() {
            return None;
        }

        if bytes[start] != b'{' {
            let end = self.template[start..]
                .find('{')
                .map_or(bytes.len(), |offset| start + offset);
            self.position = end;
            return Some(Token::Literal(&self.template[start..end]));
        }

        if start == bytes.len() - 1 {
            self.position = bytes.len();
            return Some(Token::Empty { literal: "{" });
        }

        let body_start = start + 1;
        match bytes[body_start] {
            b'{' => {
                self.position = body_start + 1;
                Some(Token::Brace)
            }
            b'}' => {
                self.position = body_start + 1;
                Some(Token::Empty { literal: "{}" })
            }
            _ => {
                let placeholder = match self.template[body_start..].find('}') {
                    Some(offset) => {
                        self.position = body_start + offset + 1;
                        Placeholder {
                            body: &self.template[body_start..body_start + offset],
                            closed: true,
                        }
                    }
                    None => {
                        self.position = bytes.len();
                        Placeholder {
                            body: &self.template[body_start..],
                            closed: false,
                        }
                    }
                };
                Some(Token::Placeholder(placeholder))
            }
        }
    }

    /// Moves the cursor just past the next occurrence of `marker`, or to the
    /// end of the format string when there is none. Returns whether the
    /// marker was found.
    pub fn skip_past(&mut self, marker: &str) -> bool {
        match self.remaining().find(marker) {
            Some(offset) => {
                self.position += offset + marker.len();
                true
            }
            None => {
                self.position = self.template.len();
                false
            }
        }
    }
}
