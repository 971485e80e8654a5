//! Allocation-free printf-style formatting.
//!
//! This library renders a printf-style format string and a sequence of
//! typed arguments one character at a time into a caller-provided sink. It
//! never allocates and never builds an intermediate string, not even for a
//! single number, which makes it suitable for firmware and other places
//! where `core::fmt` is too large or a heap is unavailable.
//!
//! The supported directive syntax is:
//!
//! ```plaintext
//! % [flags] [width|*] [. (precision|*)] [l|ll] conversion
//! ```
//!
//! with flags `-`, `0`, `+` and space (`#`, `'` and `I` are accepted and
//! ignored), and conversions `c s d i u x X o b %`. A directive ending in
//! any other character is dropped without producing output. There is no
//! floating point support.
//!
//! The main entry point is [`render`], which draws arguments from an
//! [`ArgCursor`] and delivers characters to a [`FormatSink`].
//!
//! ```rust
//! # use sinkfmt::{render, Arg, SliceArgs, SliceSink};
//! let mut buf = [0_u8; 32];
//! let mut sink = SliceSink::new(&mut buf);
//! let args = [Arg::from(-42), Arg::from("ok"), Arg::from(255_u32)];
//! render(&mut sink, "[%5d] %-4s|%#x", SliceArgs::new(&args)).unwrap();
//! assert_eq!(sink.as_bytes(), b"[  -42] ok  |ff");
//! ```
//!
//! Sinks report failure by returning [`SinkFailure`], which stops rendering
//! immediately and is passed back to the caller of [`render`].
#![no_std]

mod args;
mod directive;
mod error;
mod render;
mod sink;

pub use args::{Arg, ArgCursor, ArgKind, ArgValue, SliceArgs};
pub use directive::{Case, Conversion, Directive, LengthClass, Scanned, Scanner, SignMode};
pub use error::SinkFailure;
pub use render::{render, MAX_STR_LEN};
pub use sink::{sink_fn, CrlfSink, FormatSink, SliceSink};
