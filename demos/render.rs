use std::io::{stdout, Write};

use sinkfmt::{render, sink_fn, Arg, SinkFailure, SliceArgs};

// Usage: render FORMAT [ARG...]
//
// Arguments that parse as integers are passed as integers, everything else
// as strings. The literal argument `NULL` is passed as a null string.
fn main() -> Result<(), std::io::Error> {
    let mut argv = std::env::args().skip(1);
    let Some(format) = argv.next() else {
        eprintln!("usage: render FORMAT [ARG...]");
        return Ok(());
    };
    let words: Vec<String> = argv.collect();
    let args: Vec<Arg<'_>> = words
        .iter()
        .map(|w| match w.parse::<i64>() {
            Ok(v) => Arg::from(v),
            Err(_) if w == "NULL" => Arg::Str(None),
            Err(_) => Arg::from(w.as_str()),
        })
        .collect();

    let mut out = stdout().lock();
    let mut io_err = None;
    let result = render(
        sink_fn(|c| {
            out.write_all(&[c]).map_err(|e| {
                io_err = Some(e);
                SinkFailure
            })
        }),
        &format,
        SliceArgs::new(&args),
    );
    if let Err(e) = result {
        return Err(io_err.unwrap_or_else(|| std::io::Error::other(e)));
    }
    writeln!(out)?;
    Ok(())
}
