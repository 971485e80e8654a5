use crate::SinkFailure;

/// Trait for implementations that consume the output of [`crate::render`],
/// one character at a time.
///
/// Returning [`SinkFailure`] from [`FormatSink::put`] stops rendering
/// immediately: no further characters are emitted and no further arguments
/// are fetched.
pub trait FormatSink {
    /// Accepts one output character.
    fn put(&mut self, c: u8) -> Result<(), SinkFailure>;
}

impl<S: FormatSink + ?Sized> FormatSink for &mut S {
    #[inline(always)]
    fn put(&mut self, c: u8) -> Result<(), SinkFailure> {
        (**self).put(c)
    }
}

/// Returns a [`FormatSink`] that calls the given function for each
/// character produced by [`crate::render`].
///
/// This is the closest match to a classic `putchar`-style callback.
pub fn sink_fn(f: impl FnMut(u8) -> Result<(), SinkFailure>) -> impl FormatSink {
    SinkFn { f }
}

struct SinkFn<F> {
    f: F,
}

impl<F: FnMut(u8) -> Result<(), SinkFailure>> FormatSink for SinkFn<F> {
    #[inline(always)]
    fn put(&mut self, c: u8) -> Result<(), SinkFailure> {
        (self.f)(c)
    }
}

/// A [`FormatSink`] that fills a caller-provided byte slice.
///
/// Once the slice is full every further write fails, so rendering into a
/// `SliceSink` stops at the first character that would not fit.
pub struct SliceSink<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> SliceSink<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Number of characters written so far.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The characters written so far.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Forgets everything written so far, so the slice can be reused.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Releases the borrowed slice, returning just the written prefix.
    pub fn into_written(self) -> &'b mut [u8] {
        let Self { buf, len } = self;
        &mut buf[..len]
    }
}

impl FormatSink for SliceSink<'_> {
    fn put(&mut self, c: u8) -> Result<(), SinkFailure> {
        let slot = self.buf.get_mut(self.len).ok_or(SinkFailure)?;
        *slot = c;
        self.len += 1;
        Ok(())
    }
}

/// Wraps another sink, emitting a carriage return before every newline.
///
/// Useful for serial consoles and other terminals that do not translate a
/// bare `\n` themselves.
pub struct CrlfSink<S> {
    inner: S,
}

impl<S> CrlfSink<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    #[inline(always)]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline(always)]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: FormatSink> FormatSink for CrlfSink<S> {
    #[inline(always)]
    fn put(&mut self, c: u8) -> Result<(), SinkFailure> {
        if c == b'\n' {
            self.inner.put(b'\r')?;
        }
        self.inner.put(c)
    }
}
