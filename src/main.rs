//! fetchfmt's main application entry point.
//! Handles command-line argument parsing and decides between rendering a
//! single format string and rendering a configured layout.

use std::path::Path;

use fetchfmt::{
    args::{as_format_args, load_from_stdin, ArgValue},
    cli::{get_args, Args},
    config::{find_config, get_config, Config},
    error::{default_error_handler, Error, Result},
    format,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Loads the layout named by `--config`, or the one in the current directory.
///
/// # Errors
/// * `Error::FormatMissing` if no path was given and the current directory has
///   no configuration file
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => get_config(path),
        None => {
            let path = find_config(".").ok_or(Error::FormatMissing)?;
            get_config(path)
        }
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects text arguments and, with `--stdin`, typed arguments
/// 2. Renders FORMAT against them when given
/// 3. Otherwise loads the layout and renders its modules (or their help)
fn run(args: Args) -> Result<()> {
    let output = match (&args.format, args.format_help) {
        (Some(template), false) => {
            let mut values: Vec<ArgValue> =
                args.args.iter().cloned().map(ArgValue::String).collect();
            if args.stdin {
                values.extend(load_from_stdin()?);
            }
            log::debug!("Rendering '{}' with {} argument(s)", template, values.len());
            format::render(template, &as_format_args(&values))
        }
        _ => {
            let config = resolve_config(args.config.as_deref())?;
            if config.modules.is_empty() {
                return Err(Error::FormatMissing);
            }
            if args.format_help {
                config.format_help()
            } else {
                config.render()
            }
        }
    };

    if args.no_newline {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}
