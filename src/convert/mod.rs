//! fish → zsh completion conversion.
//!
//! A [`Converter`] owns one fish completion source and the command name it
//! completes. Parsing extracts `complete -c` option declarations, rendering
//! turns them into a zsh `_arguments` script. Output is all-or-nothing: a
//! failed conversion yields no text.

use std::io::{self, Read};
use thiserror::Error;

mod escape;
mod model;
mod parse;
mod render;

pub use model::CompletionOption;
use parse::parse_declarations;
use render::render_completion;

/// Terminal failures while extracting options from a fish script.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no `complete -c` declarations found")]
    MissingDeclarations,
    #[error("declarations found but none yield an option spelling")]
    NoOptionsExtracted,
    #[error("read completion source: {0}")]
    UpstreamIo(#[from] io::Error),
}

/// Envelope returned by [`Converter::convert`].
#[derive(Debug, Error)]
#[error("convert error: {source}")]
pub struct ConversionFailed {
    #[from]
    source: ParseError,
}

impl ConversionFailed {
    pub fn cause(&self) -> &ParseError {
        &self.source
    }
}

pub struct Converter<R> {
    reader: Option<R>,
    command_name: String,
    options: Vec<CompletionOption>,
}

impl<R: Read> Converter<R> {
    pub fn new(reader: R, command_name: impl Into<String>) -> Self {
        Self {
            reader: Some(reader),
            command_name: command_name.into(),
            options: Vec::new(),
        }
    }

    /// Options from the last [`parse`](Self::parse), empty if it failed.
    pub fn options(&self) -> &[CompletionOption] {
        &self.options
    }

    /// Drain the source and extract its options.
    ///
    /// The reader is consumed by the first call; later calls see an empty
    /// source and fail with [`ParseError::MissingDeclarations`]. Options from
    /// an earlier call are dropped before reading.
    pub fn parse(&mut self) -> Result<&[CompletionOption], ParseError> {
        self.options.clear();
        let mut bytes = Vec::new();
        if let Some(mut reader) = self.reader.take() {
            reader.read_to_end(&mut bytes)?;
        }
        let text = String::from_utf8_lossy(&bytes);
        self.options = parse_declarations(&text)?;
        Ok(&self.options)
    }

    /// Only meaningful after a successful parse.
    fn render(&self) -> String {
        render_completion(&self.command_name, &self.options)
    }

    pub fn convert(mut self) -> Result<String, ConversionFailed> {
        self.parse()?;
        Ok(self.render())
    }
}
