use super::arg::FormatArg;
use super::placeholder::Placeholder;
use crate::constants::TEXT_MODIFIER_RESET;

/// Append-only sink the engine renders into.
///
/// [`Output::finish`] must be called exactly once; it writes the trailing
/// style reset.
#[derive(Debug)]
pub struct Output<'b> {
    buffer: &'b mut String,
}

impl<'b> Output<'b> {
    pub fn new(buffer: &'b mut String) -> Self {
        Self { buffer }
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn push_arg(&mut self, arg: &FormatArg<'_>) {
        arg.append_to(self.buffer);
    }

    /// Echoes a placeholder that could not be satisfied.
    pub fn push_invalid(&mut self, placeholder: &Placeholder<'_>) {
        placeholder.write_literal(self.buffer);
    }

    /// Writes `ESC [ code m`. The code is not validated.
    pub fn push_color(&mut self, code: &str) {
        self.buffer.push_str("\x1b[");
        self.buffer.push_str(code);
        self.buffer.push('m');
    }

    pub fn push_reset(&mut self) {
        self.buffer.push_str(TEXT_MODIFIER_RESET);
    }

    pub fn finish(mut self) {
        self.push_reset();
    }
}
