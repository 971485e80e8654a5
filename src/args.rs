use crate::LengthClass;

/// The C type a directive asks the argument cursor for.
///
/// Integer kinds follow the LP64 model: `long` and `long long` are both
/// 64 bits wide, `int` is 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    /// A possibly-null reference to a NUL-terminated character sequence.
    Str,
}

impl ArgKind {
    /// Resolves the integer kind for a length class and signedness.
    pub const fn integer(length: LengthClass, signed: bool) -> Self {
        match (length, signed) {
            (LengthClass::Int, true) => ArgKind::Int,
            (LengthClass::Int, false) => ArgKind::UInt,
            (LengthClass::Long, true) => ArgKind::Long,
            (LengthClass::Long, false) => ArgKind::ULong,
            (LengthClass::LongLong, true) => ArgKind::LongLong,
            (LengthClass::LongLong, false) => ArgKind::ULongLong,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, ArgKind::Int | ArgKind::Long | ArgKind::LongLong)
    }

    /// Truncates a 64-bit register to this kind's width, then sign- or
    /// zero-extends it back to 64 bits.
    pub const fn narrow(self, bits: u64) -> u64 {
        match self {
            ArgKind::Int => bits as u32 as i32 as i64 as u64,
            ArgKind::UInt => bits as u32 as u64,
            ArgKind::Long | ArgKind::ULong | ArgKind::LongLong | ArgKind::ULongLong => bits,
            ArgKind::Str => 0,
        }
    }
}

/// One value drawn from an [`ArgCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgValue<'a> {
    /// An integer already extended into a 64-bit register. Signed kinds are
    /// sign-extended, so reinterpreting the register as `i64` recovers the value.
    Int(u64),
    Str(Option<&'a [u8]>),
}

/// Source of the successive arguments consumed by [`crate::render`].
///
/// Arguments are drawn strictly in order, at most once each. Asking for a
/// kind other than what the caller actually supplied is a caller-side
/// contract violation; implementations decide what to hand back in that
/// case but must not fail.
pub trait ArgCursor<'a> {
    fn next_arg(&mut self, kind: ArgKind) -> ArgValue<'a>;
}

impl<'a, C: ArgCursor<'a> + ?Sized> ArgCursor<'a> for &mut C {
    #[inline(always)]
    fn next_arg(&mut self, kind: ArgKind) -> ArgValue<'a> {
        (**self).next_arg(kind)
    }
}

/// A typed argument as supplied by the caller of [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    LongLong(i64),
    ULongLong(u64),
    Str(Option<&'a [u8]>),
}

impl<'a> Arg<'a> {
    /// Register image of an integer argument, as a variadic call would
    /// pass it. Strings have no integer image and read as zero.
    pub const fn bits(&self) -> u64 {
        match *self {
            Arg::Int(v) => v as i64 as u64,
            Arg::UInt(v) => v as u64,
            Arg::Long(v) | Arg::LongLong(v) => v as u64,
            Arg::ULong(v) | Arg::ULongLong(v) => v,
            Arg::Str(_) => 0,
        }
    }

    /// Reads this argument as the given kind.
    pub fn read_as(&self, kind: ArgKind) -> ArgValue<'a> {
        match (kind, *self) {
            (ArgKind::Str, Arg::Str(s)) => ArgValue::Str(s),
            (ArgKind::Str, _) => ArgValue::Str(None),
            (kind, arg) => ArgValue::Int(kind.narrow(arg.bits())),
        }
    }
}

macro_rules! arg_from {
    ($($t:ty => $variant:ident as $as:ty),* $(,)?) => {
        $(
            impl<'a> From<$t> for Arg<'a> {
                #[inline(always)]
                fn from(v: $t) -> Self {
                    Arg::$variant(v as $as)
                }
            }
        )*
    };
}

// Narrow types promote the same way C's default argument promotions do.
arg_from! {
    i8 => Int as i32,
    u8 => Int as i32,
    i16 => Int as i32,
    u16 => Int as i32,
    i32 => Int as i32,
    u32 => UInt as u32,
    i64 => Long as i64,
    u64 => ULong as u64,
    isize => Long as i64,
    usize => ULong as u64,
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(v: &'a [u8]) -> Self {
        Arg::Str(Some(v))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(Some(v.as_bytes()))
    }
}

impl<'a> From<Option<&'a [u8]>> for Arg<'a> {
    fn from(v: Option<&'a [u8]>) -> Self {
        Arg::Str(v)
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(v: Option<&'a str>) -> Self {
        Arg::Str(v.map(str::as_bytes))
    }
}

/// An [`ArgCursor`] over a slice of [`Arg`] values.
///
/// Each value is reinterpreted at whatever width the format string asks
/// for, truncating or extending it as a 64-bit variadic ABI would. Once the
/// slice is exhausted, integers read as zero and strings as null.
#[derive(Debug, Clone)]
pub struct SliceArgs<'s, 'a> {
    args: &'s [Arg<'a>],
    pos: usize,
}

impl<'s, 'a> SliceArgs<'s, 'a> {
    pub const fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, pos: 0 }
    }

    /// Number of arguments drawn so far, including any drawn past the end.
    #[inline(always)]
    pub const fn consumed(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn remaining(&self) -> &'s [Arg<'a>] {
        self.args.get(self.pos..).unwrap_or(&[])
    }
}

impl<'a> ArgCursor<'a> for SliceArgs<'_, 'a> {
    fn next_arg(&mut self, kind: ArgKind) -> ArgValue<'a> {
        let arg = self.args.get(self.pos).copied();
        self.pos += 1;
        match arg {
            Some(arg) => arg.read_as(kind),
            None if kind == ArgKind::Str => ArgValue::Str(None),
            None => ArgValue::Int(0),
        }
    }
}

/// Fetches an `int`, as used by `*` width and precision and by `%c`.
pub(crate) fn fetch_int<'a>(args: &mut impl ArgCursor<'a>) -> i32 {
    fetch_integer(args, ArgKind::Int) as i64 as i32
}

/// Fetches an integer of the given kind as a 64-bit register.
pub(crate) fn fetch_integer<'a>(args: &mut impl ArgCursor<'a>, kind: ArgKind) -> u64 {
    match args.next_arg(kind) {
        ArgValue::Int(bits) => kind.narrow(bits),
        ArgValue::Str(_) => 0,
    }
}

pub(crate) fn fetch_str<'a>(args: &mut impl ArgCursor<'a>) -> Option<&'a [u8]> {
    match args.next_arg(ArgKind::Str) {
        ArgValue::Str(s) => s,
        ArgValue::Int(_) => None,
    }
}
