use std::io::{self, Write};

/// Echo the rendered text on stdout exactly as produced, without a trailing
/// newline; status lines belong on stderr
pub fn print_rendered(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}
