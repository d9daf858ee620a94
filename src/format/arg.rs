//! Typed argument cells consumed by the format engine.
//!
//! Every detected fact is handed to the engine as a [`FormatArg`] that borrows
//! the caller's data for the duration of a single render call.

use log::error;

/// One typed, read-only value available to a format string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    Int(i32),
    UInt(u32),
    UInt64(u64),
    UInt16(u16),
    UInt8(u8),
    /// Borrowed text.
    Str(&'a str),
    /// Text owned by a detector buffer.
    StrBuf(&'a String),
    Float(f32),
    Double(f64),
    Bool(bool),
    /// Rendered as its elements joined by `", "`.
    List(&'a [String]),
    /// A fact that could not be detected. Renders empty and is never set.
    Null,
    /// A kind the engine has no rendering for, carrying the kind's name.
    Unsupported(&'a str),
}

impl FormatArg<'_> {
    /// Appends the human readable form of the argument to `buffer`.
    ///
    /// Unsupported kinds contribute nothing and report a diagnostic on the
    /// error log channel instead.
    pub fn append_to(&self, buffer: &mut String) {
        match self {
            FormatArg::Int(value) => buffer.push_str(&value.to_string()),
            FormatArg::UInt(value) => buffer.push_str(&value.to_string()),
            FormatArg::UInt64(value) => buffer.push_str(&value.to_string()),
            FormatArg::UInt16(value) => buffer.push_str(&value.to_string()),
            FormatArg::UInt8(value) => buffer.push_str(&value.to_string()),
            FormatArg::Str(value) => buffer.push_str(value),
            FormatArg::StrBuf(value) => buffer.push_str(value),
            FormatArg::Float(value) => buffer.push_str(&format_fixed(*value)),
            FormatArg::Double(value) => buffer.push_str(&format_general(*value)),
            FormatArg::Bool(value) => buffer.push_str(if *value { "true" } else { "false" }),
            FormatArg::List(items) => buffer.push_str(&items.join(", ")),
            FormatArg::Null => {}
            FormatArg::Unsupported(kind) => {
                error!("Format argument is not implemented: {} (output so far: {:?})", kind, buffer);
            }
        }
    }

    /// Renders the argument into a fresh string.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        self.append_to(&mut buffer);
        buffer
    }

    /// Whether a conditional placeholder guarded by this argument passes.
    ///
    /// Numbers are set when strictly positive (NaN never is), text when non
    /// empty. A boolean is set whenever it is present, whatever its value.
    /// Floats, lists, null and unsupported arguments are never set.
    pub fn is_set(&self) -> bool {
        match self {
            FormatArg::Int(value) => *value > 0,
            FormatArg::UInt(value) => *value > 0,
            FormatArg::UInt64(value) => *value > 0,
            FormatArg::UInt16(value) => *value > 0,
            FormatArg::UInt8(value) => *value > 0,
            FormatArg::Double(value) => *value > 0.0,
            FormatArg::Str(value) => !value.is_empty(),
            FormatArg::StrBuf(value) => !value.is_empty(),
            FormatArg::Bool(_) => true,
            FormatArg::Float(_)
            | FormatArg::List(_)
            | FormatArg::Null
            | FormatArg::Unsupported(_) => false,
        }
    }
}

/// `printf("%f")`: six fractional digits.
fn format_fixed(value: f32) -> String {
    if let Some(special) = format_non_finite(f64::from(value)) {
        return special;
    }
    format!("{:.6}", value)
}

/// `printf("%g")`: six significant digits, trailing zeros removed, scientific
/// notation when the exponent is below -4 or at least the precision.
fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if let Some(special) = format_non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some(if value.is_sign_negative() { "-nan" } else { "nan" }.to_string())
    } else if value.is_infinite() {
        Some(if value < 0.0 { "-inf" } else { "inf" }.to_string())
    } else {
        None
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::StrBuf(value)
    }
}

impl<'a> From<&'a [String]> for FormatArg<'a> {
    fn from(value: &'a [String]) -> Self {
        FormatArg::List(value)
    }
}

impl<'a> From<&'a Vec<String>> for FormatArg<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        FormatArg::List(value.as_slice())
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(value: i32) -> Self {
        FormatArg::Int(value)
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(value: u32) -> Self {
        FormatArg::UInt(value)
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(value: u64) -> Self {
        FormatArg::UInt64(value)
    }
}

impl From<u16> for FormatArg<'_> {
    fn from(value: u16) -> Self {
        FormatArg::UInt16(value)
    }
}

impl From<u8> for FormatArg<'_> {
    fn from(value: u8) -> Self {
        FormatArg::UInt8(value)
    }
}

impl From<f32> for FormatArg<'_> {
    fn from(value: f32) -> Self {
        FormatArg::Float(value)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(value: f64) -> Self {
        FormatArg::Double(value)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl<'a, T> From<Option<T>> for FormatArg<'a>
where
    T: Into<FormatArg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FormatArg::Null, Into::into)
    }
}
