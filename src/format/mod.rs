//! The format string engine.
//!
//! A format string is plain text with `{...}` placeholders:
//!
//! * `{}` draws the next argument, `{N}` the N-th one (1-based).
//! * `{?N}` … `{?}` keeps its content only if argument N is set,
//!   `{/N}` … `{/}` only if it is not.
//! * `{#CODE}` … `{#}` wraps its content in the ANSI style `ESC[CODEm`.
//! * `{-}` stops rendering, `{{` is a literal `{`.
//!
//! Rendering never fails. Placeholders that cannot be satisfied are written
//! back unchanged, and the output always ends with a style reset.
//!
//! ```
//! use fetchfmt::format::{render, FormatArg};
//!
//! let args = [FormatArg::Str("Ryzen"), FormatArg::UInt16(16)];
//! assert_eq!(render("{1} ({2})", &args), "Ryzen (16)\x1b[0m");
//! ```

pub mod arg;
pub mod output;
pub mod placeholder;
pub mod state;

use std::ops::ControlFlow;

use log::trace;

pub use arg::FormatArg;
pub use output::Output;
pub use placeholder::{argument_index, Block, Directive, Placeholder, Scanner, Token};
pub use state::RenderState;

/// Renders `template` against `args` into a new string.
pub fn render(template: &str, args: &[FormatArg<'_>]) -> String {
    let mut buffer = String::with_capacity(template.len());
    render_into(&mut buffer, template, args);
    buffer
}

/// Renders `template` against `args`, appending to `buffer`.
pub fn render_into(buffer: &mut String, template: &str, args: &[FormatArg<'_>]) {
    let mut output = Output::new(buffer);
    let mut state = RenderState::new();
    let mut scanner = Scanner::new(template);

    while let Some(token) = scanner.next_token() {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Brace => output.push('{'),
            Token::Empty { literal } => match args.get(state.next_auto_index()) {
                Some(arg) => output.push_arg(arg),
                None => output.push_str(literal),
            },
            Token::Placeholder(placeholder) => {
                let flow = dispatch(placeholder, args, &mut state, &mut scanner, &mut output);
                if flow.is_break() {
                    break;
                }
            }
        }
    }

    output.finish();
}

fn dispatch<'t>(
    placeholder: Placeholder<'t>,
    args: &[FormatArg<'_>],
    state: &mut RenderState,
    scanner: &mut Scanner<'t>,
    output: &mut Output<'_>,
) -> ControlFlow<()> {
    match placeholder.directive() {
        Directive::Stop => return ControlFlow::Break(()),
        Directive::Close(block) => {
            if !state.close(block) {
                output.push_invalid(&placeholder);
            } else if block == Block::Color {
                output.push_reset();
            }
        }
        Directive::If { index, negated } => {
            let Some(arg) = argument_index(index).and_then(|i| args.get(i)) else {
                output.push_invalid(&placeholder);
                return ControlFlow::Continue(());
            };

            let block = if negated { Block::NotIf } else { Block::If };
            if arg.is_set() != negated {
                state.open(block);
            } else {
                let marker = block.closing_marker();
                if !scanner.skip_past(marker) {
                    trace!("No {} closes '{{{}}}', dropping the rest", marker, placeholder.body);
                }
            }
        }
        Directive::Color(code) => {
            state.open(Block::Color);
            output.push_color(code);
        }
        Directive::Index(index) => match argument_index(index).and_then(|i| args.get(i)) {
            Some(arg) => output.push_arg(arg),
            None => output.push_invalid(&placeholder),
        },
    }

    ControlFlow::Continue(())
}
