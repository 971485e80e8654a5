use crate::args::{fetch_int, fetch_integer, fetch_str, ArgCursor, ArgKind};
use crate::directive::{Case, Conversion, Directive, Scanned, Scanner, SignMode};
use crate::{FormatSink, SinkFailure};

/// Longest string `%s` will emit. The terminator scan stops here even if no
/// NUL has been found, and the text is truncated to this length.
pub const MAX_STR_LEN: usize = 255;

const NULL_STR: &[u8] = b"(null)";

/// Renders `format` with the arguments drawn from `args`, writing each
/// resulting character to `sink`.
///
/// Rendering stops at the first [`SinkFailure`], which is returned to the
/// caller; no further characters are written and no further arguments are
/// drawn. Directives with an unrecognized conversion character produce no
/// output. The format string ends at its first NUL byte, if any.
pub fn render<'a, S, A>(
    mut sink: S,
    format: impl AsRef<[u8]>,
    mut args: A,
) -> Result<(), SinkFailure>
where
    S: FormatSink,
    A: ArgCursor<'a>,
{
    let result = render_all(&mut sink, format.as_ref(), &mut args);
    if result.is_err() {
        log::debug!("sink failed, abandoning format string");
    }
    result
}

fn render_all<'a>(
    sink: &mut impl FormatSink,
    format: &[u8],
    args: &mut impl ArgCursor<'a>,
) -> Result<(), SinkFailure> {
    let mut fmt = Scanner::new(format);
    while let Some(c) = fmt.bump() {
        if c != b'%' {
            sink.put(c)?;
            continue;
        }
        if fmt.peek() == Some(b'%') {
            fmt.bump();
            sink.put(b'%')?;
            continue;
        }
        match fmt.scan_directive(args) {
            Scanned::Directive(directive) => render_directive(sink, &directive, args)?,
            Scanned::Discarded(c) => {
                log::trace!("ignoring directive with conversion {:?}", c as char);
            }
            Scanned::Truncated => {
                log::trace!("format string ends inside a directive");
                break;
            }
        }
    }
    Ok(())
}

fn render_directive<'a>(
    sink: &mut impl FormatSink,
    d: &Directive,
    args: &mut impl ArgCursor<'a>,
) -> Result<(), SinkFailure> {
    match d.conversion {
        // char promotes to int, only the low byte is meaningful
        Conversion::Char => render_char(sink, d, fetch_int(args) as u8),
        Conversion::String => render_str(sink, d, fetch_str(args).unwrap_or(NULL_STR)),
        Conversion::PercentLiteral => sink.put(b'%'),
        Conversion::SignedInt => {
            let bits = fetch_integer(args, ArgKind::integer(d.length, true));
            let value = bits as i64;
            if value < 0 {
                render_number(sink, d, value.unsigned_abs(), SignMode::Minus, 10)
            } else {
                render_number(sink, d, bits, d.sign, 10)
            }
        }
        conversion @ (Conversion::UnsignedInt
        | Conversion::Hex(_)
        | Conversion::Octal
        | Conversion::Binary) => {
            let bits = fetch_integer(args, ArgKind::integer(d.length, false));
            // sign flags only apply to signed conversions
            render_number(sink, d, bits, SignMode::None, conversion.radix().unwrap_or(10))
        }
    }
}

fn pad(sink: &mut impl FormatSink, count: usize, c: u8) -> Result<(), SinkFailure> {
    for _ in 0..count {
        sink.put(c)?;
    }
    Ok(())
}

fn render_char(sink: &mut impl FormatSink, d: &Directive, c: u8) -> Result<(), SinkFailure> {
    let padding = d.width.saturating_sub(1);
    if !d.left_justify {
        pad(sink, padding, b' ')?;
    }
    sink.put(c)?;
    if d.left_justify {
        pad(sink, padding, b' ')?;
    }
    Ok(())
}

fn render_str(sink: &mut impl FormatSink, d: &Directive, s: &[u8]) -> Result<(), SinkFailure> {
    let mut len = s
        .iter()
        .take(MAX_STR_LEN)
        .take_while(|&&c| c != 0)
        .count();
    if let Some(precision) = d.precision {
        len = len.min(precision);
    }
    let padding = d.width.saturating_sub(len);
    if !d.left_justify {
        pad(sink, padding, b' ')?;
    }
    for &c in &s[..len] {
        sink.put(c)?;
    }
    if d.left_justify {
        pad(sink, padding, b' ')?;
    }
    Ok(())
}

/// Place values of a number's digits, most significant first.
///
/// Digits are produced by dividing the magnitude by a shrinking divisor, so
/// no digit buffer is needed and nothing has to be reversed.
#[derive(Debug, Clone, Copy)]
struct Places {
    radix: u64,
    divisor: u64,
    count: usize,
}

impl Places {
    fn new(magnitude: u64, radix: u64) -> Self {
        // Highest power of the radix representable in a u64, and the number
        // of digits it has.
        let (mut divisor, mut count) = match radix {
            2 => (1 << 63, 64),
            8 => (0o1_000_000_000_000_000_000_000, 22),
            16 => (0x1000_0000_0000_0000, 16),
            _ => (10_000_000_000_000_000_000, 20),
        };
        while count > 1 && divisor > magnitude {
            divisor /= radix;
            count -= 1;
        }
        Self {
            radix,
            divisor,
            count,
        }
    }
}

fn digit_char(n: u8, case: Case) -> u8 {
    match (n, case) {
        (0..=9, _) => b'0' + n,
        (_, Case::Lower) => b'a' + n - 10,
        (_, Case::Upper) => b'A' + n - 10,
    }
}

fn render_number(
    sink: &mut impl FormatSink,
    d: &Directive,
    magnitude: u64,
    sign: SignMode,
    radix: u64,
) -> Result<(), SinkFailure> {
    let case = match d.conversion {
        Conversion::Hex(case) => case,
        _ => Case::Lower,
    };
    let mut places = Places::new(magnitude, radix);

    let sign = sign.char();
    let width = match sign {
        Some(_) => d.width.saturating_sub(1),
        None => d.width,
    };
    // Zero fill becomes a precision so that it lands between sign and digits.
    let precision = match d.precision {
        None if d.zero_pad && !d.left_justify => width,
        precision => precision.unwrap_or(0),
    };
    let precision = precision.max(places.count);
    let padding = width.saturating_sub(precision);

    if !d.left_justify {
        pad(sink, padding, b' ')?;
    }
    if let Some(sign) = sign {
        sink.put(sign)?;
    }
    pad(sink, precision - places.count, b'0')?;
    while places.count > 0 {
        let n = ((magnitude / places.divisor) % places.radix) as u8;
        sink.put(digit_char(n, case))?;
        places.divisor /= places.radix;
        places.count -= 1;
    }
    if d.left_justify {
        pad(sink, padding, b' ')?;
    }
    Ok(())
}
