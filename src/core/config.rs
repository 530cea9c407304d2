use std::{
    io::{BufReader, LineWriter, Read, Write},
    path::PathBuf,
};

use crate::prelude::SymResult;
#[cfg(feature = "cli")]
use clap::{Args, CommandFactory, Parser, Subcommand};
#[cfg(feature = "cli")]
use clap_complete::{generate, Generator, Shell};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref CFG: Config = Config::new();
}

/// Default size of the chunks the symbol file is read in. Purely a
/// performance knob; it never changes the decoded result.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[cfg_attr(feature = "cli", derive(Args))]
#[derive(Clone, Debug, Default)]
pub struct DumpCommand {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl DumpCommand {
    pub fn input(&self) -> SymResult<Box<dyn Read>> {
        Ok(if let Some(path) = &self.input {
            Box::new(BufReader::new(std::fs::File::open(path)?))
        } else {
            Box::new(BufReader::new(std::io::stdin()))
        })
    }

    pub fn output(&self) -> SymResult<Box<dyn Write>> {
        Ok(if let Some(path) = &self.output {
            Box::new(LineWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(LineWriter::new(std::io::stdout().lock()))
        })
    }
}

#[cfg_attr(feature = "cli", derive(Subcommand))]
#[derive(Clone, Debug)]
pub enum Commands {
    /// Decode a symbol file and write one name per line
    Dump(DumpCommand),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Dump(Default::default())
    }
}

#[derive(Debug, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(author, version, about, long_about = None))]
pub struct Config {
    #[cfg_attr(feature = "cli", command(subcommand))]
    pub command: Commands,

    #[cfg_attr(feature = "cli", arg(short, long, action = clap::ArgAction::Count))]
    pub verbose: u8,

    // read buffer size in bytes
    #[cfg_attr(feature = "cli", clap(long))]
    pub chunk_size: Option<usize>,

    #[cfg_attr(feature = "cli", clap(long, value_name = "SHELL"))]
    #[cfg(feature = "cli")]
    pub completions: Option<Shell>,
}

impl Config {
    #[cfg(feature = "cli")]
    pub fn new() -> Self {
        Self::parse()
    }

    #[cfg(not(feature = "cli"))]
    pub fn new() -> Self {
        Default::default()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }
}

#[cfg(feature = "cli")]
pub fn generate_completion<G: Generator>(gen: G) {
    generate(
        gen,
        &mut Config::command(),
        Config::command().get_name(),
        &mut std::io::stdout(),
    );
}
