#[cfg(not(any(feature = "cli")))]
fn main() {}

#[cfg(feature = "cli")]
fn main() -> wtvsym::prelude::SymResult<()> {
    wtvsym::cli::init(&wtvsym::prelude::CFG)
}
