use std::io::prelude::*;

use log::info;

use crate::{
    core::{config::generate_completion, sym},
    prelude::{Config, DumpCommand, SymResult},
};

pub fn init(cfg: &Config) -> SymResult<()> {
    if let Some(shell) = cfg.completions {
        generate_completion(shell);
        std::process::exit(0);
    }

    #[cfg(feature = "log")]
    simple_logger::init_with_level(match cfg.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    })
    .expect("Unable to init logger");

    match &cfg.command {
        crate::prelude::Commands::Dump(d) => dump(cfg, d),
    }
}

/// Read the whole symbol file into memory in chunks. The decoder needs
/// random access to the full buffer, so a short read is a hard failure
/// rather than a partial decode.
fn read_symbol_file(input: &mut dyn Read, chunk_size: usize) -> SymResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; chunk_size];

    loop {
        let n = input.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    info!("read {} bytes", buffer.len());
    Ok(buffer)
}

fn dump(cfg: &Config, cmd: &DumpCommand) -> SymResult<()> {
    let mut input = cmd.input()?;
    let mut output = cmd.output()?;

    let buffer = read_symbol_file(&mut input, cfg.chunk_size())?;
    let table = sym::decode(&buffer)?;

    for (address, name) in table.iter() {
        writeln!(output, "{} 0x{:08X}", sanitize_name(name), address)?;
    }
    Ok(())
}

/// Replace everything outside printable ascii with an underscore so the
/// listing stays one symbol per line no matter what the name contains.
fn sanitize_name(name: &[u8]) -> String {
    name.iter()
        .map(|b| match b {
            0x21..=0x7E => *b as char,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{read_symbol_file, sanitize_name};

    #[test]
    fn sanitize() {
        assert_eq!("Gadget::draw", sanitize_name(b"Gadget::draw"));
        assert_eq!("_Widget::go_", sanitize_name(b"\x00Widget::go\x7f"));
        assert_eq!("a_b", sanitize_name(b"a b"));
        assert_eq!("", sanitize_name(b""));
    }

    #[test]
    fn chunked_read() {
        let data: Vec<u8> = (0..=255).cycle().take(10_000).collect();
        let buffer = read_symbol_file(&mut data.as_slice(), 4096).unwrap();
        assert_eq!(data, buffer);
    }
}
