//! Stack-VM to Hack assembly translator.
//!
//! Translates VM bytecode (`.vm`) into Hack symbolic assembly (`.asm`).
//! Translation is single-pass and streaming: each command becomes one
//! assembly chunk, with no intermediate representation.
//!
//! # Modes
//!
//! - [`translate`] — one source string, no bootstrap (building block).
//! - [`translate_file`] — bootstrap plus one `.vm` file.
//! - [`translate_directory`] — bootstrap plus every `.vm` file in a
//!   directory, combined into one output.

pub mod bootstrap;
pub mod codegen;
pub mod error;
pub mod memory;
pub mod parser;
pub mod source;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bootstrap::write_bootstrap;
use crate::codegen::CodeGenerator;
pub use crate::error::{Result, VMError};
use crate::parser::parse_line;
use crate::source::LineSource;

/// Rough output bytes per source line, for buffer pre-sizing.
const BYTES_PER_LINE: usize = 60;

/// Translate one VM source string. No bootstrap is emitted.
///
/// `filename` is the basename used for static symbol mangling and for
/// diagnostics.
pub fn translate(source: &str, filename: &str) -> Result<String> {
    let mut codegen = CodeGenerator::new();
    let mut output = String::with_capacity(source.lines().count() * BYTES_PER_LINE);
    translate_source(source, filename, &mut codegen, &mut output)?;
    Ok(output)
}

/// Translate all commands of one source through a shared generator.
fn translate_source(
    source: &str,
    filename: &str,
    codegen: &mut CodeGenerator,
    output: &mut String,
) -> Result<()> {
    codegen.set_filename(filename);

    for (line_num, line) in LineSource::new(source) {
        let cmd = parse_line(line, line_num, filename)?;
        codegen.translate(&cmd, output);
    }
    Ok(())
}

/// Translate a single `.vm` file, bootstrap included.
pub fn translate_file(path: &Path) -> Result<String> {
    let source = read_source(path)?;

    let mut codegen = CodeGenerator::new();
    let mut output = String::with_capacity(source.lines().count() * BYTES_PER_LINE + 512);
    write_bootstrap(&mut codegen, &mut output);
    translate_source(&source, &file_basename(path), &mut codegen, &mut output)?;

    Ok(output)
}

/// Translate every `.vm` file in a directory into one combined output.
///
/// Files are processed in sorted pathname order through a single generator,
/// so generated labels stay unique across the whole run. A directory with no
/// `.vm` files yields just the bootstrap prologue.
pub fn translate_directory(dir_path: &Path) -> Result<String> {
    let mut vm_files: Vec<PathBuf> = fs::read_dir(dir_path)
        .map_err(|e| VMError::FileRead {
            path: dir_path.display().to_string(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "vm"))
        .collect();
    vm_files.sort();

    let mut codegen = CodeGenerator::new();
    let mut output = String::with_capacity(vm_files.len() * 2048 + 512);
    write_bootstrap(&mut codegen, &mut output);

    for vm_file in &vm_files {
        let source = read_source(vm_file)?;
        translate_source(&source, &file_basename(vm_file), &mut codegen, &mut output)?;
    }

    Ok(output)
}

/// Where the assembly output goes.
///
/// - `Input.vm` -> `Input.asm`
/// - `dir/` -> `dir/<basename(dir)>.asm`
pub fn output_path(input: &Path) -> PathBuf {
    if input.is_dir() {
        let dir_name = input
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        input.join(format!("{}.asm", dir_name))
    } else {
        input.with_extension("asm")
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| VMError::FileRead {
        path: path.display().to_string(),
        source: e,
    })
}

fn file_basename(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_string()
}
