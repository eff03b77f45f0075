//! Convert fish shell man page completions into zsh completions.
//!
//! The [`convert`] module holds the conversion engine; the binary wraps it in
//! a batch run over fish's `generated_completions` folder.

pub mod convert;
