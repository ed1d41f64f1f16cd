//! Error types for VM-to-assembly translation.
//!
//! Every parse error carries the source filename and 1-based line number so
//! the diagnostic points at the offending command. Translation aborts on the
//! first error; a partially translated program is worthless.

use thiserror::Error;

/// Translation error.
#[derive(Error, Debug)]
pub enum VMError {
    #[error("{file}:{line}: unknown command: {command}")]
    InvalidCommand {
        line: usize,
        file: String,
        command: String,
    },

    #[error("{file}:{line}: unknown segment: {segment}")]
    InvalidSegment {
        line: usize,
        file: String,
        segment: String,
    },

    #[error("{file}:{line}: cannot pop to the constant segment")]
    PopToConstant { line: usize, file: String },

    #[error("{file}:{line}: pointer index {index} out of range (0 or 1)")]
    InvalidPointerIndex {
        line: usize,
        file: String,
        index: u16,
    },

    #[error("{file}:{line}: temp index {index} out of range (0-7)")]
    InvalidTempIndex {
        line: usize,
        file: String,
        index: u16,
    },

    #[error("{file}:{line}: missing argument for {command}")]
    MissingArgument {
        line: usize,
        file: String,
        command: String,
    },

    #[error("{file}:{line}: not a number: {value}")]
    InvalidNumber {
        line: usize,
        file: String,
        value: String,
    },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("path is neither a .vm file nor a directory: {path}")]
    InvalidPath { path: String },
}

/// Result alias used throughout the translator.
pub type Result<T> = std::result::Result<T, VMError>;
