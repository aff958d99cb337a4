#![cfg(feature = "debug")]

use crate::reply::Reply;
use crate::stream::Stream;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

static DEPTH: AtomicUsize = AtomicUsize::new(0);

/// RAII guard bumping the shared trace indentation for the lifetime of one `trace()` call.
pub struct Depth(usize);

impl Depth {
    pub fn enter() -> Self {
        Self(DEPTH.fetch_add(1, Ordering::SeqCst))
    }
}

impl Drop for Depth {
    fn drop(&mut self) {
        DEPTH.fetch_sub(1, Ordering::SeqCst);
    }
}

impl core::ops::Deref for Depth {
    type Target = usize;
    fn deref(&self) -> &usize {
        &self.0
    }
}

fn stream() -> anstream::AutoStream<std::io::Stderr> {
    anstream::AutoStream::new(std::io::stderr(), choice())
}

fn choice() -> anstream::ColorChoice {
    if is_terminal_polyfill::is_terminal(&std::io::stderr()) {
        anstream::ColorChoice::Auto
    } else {
        anstream::ColorChoice::Never
    }
}

/// Caps indentation so deeply recursive grammars don't run traces off the edge of the
/// terminal; falls back to a reasonable default when the width can't be determined (e.g. when
/// output is redirected to a file).
fn max_depth() -> usize {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    (width / 4).max(10)
}

pub fn enter<S, N>(depth: usize, name: &N, input: &S)
where
    S: Stream,
    N: core::fmt::Display,
{
    let depth = depth.min(max_depth());
    let gutter = anstyle::Style::new().bold();
    let pos = anstyle::Style::new().dimmed();
    let mut out = stream();
    let _ = writeln!(
        out,
        "{gutter}{:depth$}> {name}{gutter:#} {pos}@{:?}{pos:#}",
        "",
        input.position(),
    );
    let _ = out.flush();
}

pub fn exit<S, R>(depth: usize, name: &dyn core::fmt::Display, reply: &Reply<S, R>)
where
    S: Stream,
{
    let depth = depth.min(max_depth());
    let (label, style) = match reply {
        Reply::Success(..) => ("Success", anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Green.into()))),
        Reply::Failure(..) => ("Failure", anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Yellow.into()))),
        Reply::Error(..) => ("Error", anstyle::Style::new().fg_color(Some(anstyle::AnsiColor::Red.into())).bold()),
    };
    let gutter = anstyle::Style::new().bold();
    let mut out = stream();
    let _ = writeln!(
        out,
        "{gutter}{:depth$}< {name}{gutter:#} {style}{label}{style:#} @{:?}",
        "",
        reply.stream().position(),
    );
    let _ = out.flush();
}
