use crate::args::{fetch_int, ArgCursor};

/// Which sign character, if any, precedes a rendered number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignMode {
    #[default]
    None,
    Space,
    Plus,
    Minus,
}

impl SignMode {
    #[inline(always)]
    pub const fn char(self) -> Option<u8> {
        match self {
            SignMode::None => None,
            SignMode::Space => Some(b' '),
            SignMode::Plus => Some(b'+'),
            SignMode::Minus => Some(b'-'),
        }
    }
}

/// Width of the integer a numeric conversion reads: none, `l` or `ll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthClass {
    #[default]
    Int,
    Long,
    LongLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Char,
    String,
    SignedInt,
    UnsignedInt,
    Hex(Case),
    Octal,
    Binary,
    PercentLiteral,
}

impl Conversion {
    pub const fn from_byte(c: u8) -> Option<Self> {
        Some(match c {
            b'c' => Conversion::Char,
            b's' => Conversion::String,
            b'd' | b'i' => Conversion::SignedInt,
            b'u' => Conversion::UnsignedInt,
            b'x' => Conversion::Hex(Case::Lower),
            b'X' => Conversion::Hex(Case::Upper),
            b'o' => Conversion::Octal,
            b'b' => Conversion::Binary,
            b'%' => Conversion::PercentLiteral,
            _ => return None,
        })
    }

    /// Radix for the numeric conversions, `None` for the others.
    pub const fn radix(self) -> Option<u64> {
        match self {
            Conversion::SignedInt | Conversion::UnsignedInt => Some(10),
            Conversion::Hex(_) => Some(16),
            Conversion::Octal => Some(8),
            Conversion::Binary => Some(2),
            Conversion::Char | Conversion::String | Conversion::PercentLiteral => None,
        }
    }
}

/// Everything parsed out of one `%...` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub left_justify: bool,
    pub zero_pad: bool,
    /// Sign requested by the `+` and ` ` flags. Numeric rendering refines
    /// this once the value is known.
    pub sign: SignMode,
    pub width: usize,
    /// `None` when no `.` appeared, which is distinct from an explicit zero.
    pub precision: Option<usize>,
    pub length: LengthClass,
    pub conversion: Conversion,
}

/// Outcome of scanning one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanned {
    Directive(Directive),
    /// The directive ended in an unrecognized conversion character and
    /// produces no output.
    Discarded(u8),
    /// The format string ended before a conversion character appeared.
    Truncated,
}

/// Cursor over a format string.
///
/// The string ends at the end of the slice or at the first NUL byte,
/// whichever comes first, so C-style buffers can be passed unchanged.
pub struct Scanner<'f> {
    fmt: &'f [u8],
    pos: usize,
}

impl<'f> Scanner<'f> {
    pub const fn new(fmt: &'f [u8]) -> Self {
        Self { fmt, pos: 0 }
    }

    /// The next character, or `None` at the end of the string. A NUL byte
    /// reads as the end, so the cursor never moves past it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        match self.fmt.get(self.pos) {
            Some(0) | None => None,
            Some(&c) => Some(c),
        }
    }

    #[inline(always)]
    pub fn bump(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    #[inline(always)]
    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> usize {
        let mut n: usize = 0;
        while let Some(c @ b'0'..=b'9') = self.peek() {
            n = n.saturating_mul(10).saturating_add((c - b'0') as usize);
            self.pos += 1;
        }
        n
    }

    /// Width or precision: either `*`, drawing an `int` argument, or a run
    /// of decimal digits. Negative arguments clamp to zero.
    fn count<'a>(&mut self, args: &mut impl ArgCursor<'a>) -> usize {
        if self.eat(b'*') {
            fetch_int(args).max(0) as usize
        } else {
            self.digits()
        }
    }

    /// Scans one directive, with the cursor positioned just after its `%`.
    ///
    /// Any `*` arguments are drawn as they are encountered, so they are
    /// consumed even if the directive later turns out to be discarded.
    pub fn scan_directive<'a>(&mut self, args: &mut impl ArgCursor<'a>) -> Scanned {
        let mut left_justify = false;
        let mut zero_pad = false;
        let mut sign = SignMode::None;
        loop {
            match self.peek() {
                Some(b'-') => left_justify = true,
                Some(b'0') => zero_pad = true,
                Some(b'+') => sign = SignMode::Plus,
                Some(b' ') => sign = SignMode::Space,
                // Common printf flags we have no use for.
                Some(b'#' | b'\'' | b'I') => {}
                _ => break,
            }
            self.pos += 1;
        }

        let width = self.count(args);
        let precision = if self.eat(b'.') {
            Some(self.count(args))
        } else {
            None
        };

        let length = if !self.eat(b'l') {
            LengthClass::Int
        } else if !self.eat(b'l') {
            LengthClass::Long
        } else {
            LengthClass::LongLong
        };

        let Some(c) = self.bump() else {
            return Scanned::Truncated;
        };
        match Conversion::from_byte(c) {
            Some(conversion) => Scanned::Directive(Directive {
                left_justify,
                zero_pad,
                sign,
                width,
                precision,
                length,
                conversion,
            }),
            None => Scanned::Discarded(c),
        }
    }
}
