//! vm2asm CLI.
//!
//! Translates VM bytecode to Hack assembly.
//!
//! # Usage
//!
//! ```bash
//! # Single file
//! vm2asm Prog.vm
//!
//! # Directory of .vm files
//! vm2asm FibonacciElement/
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use vm2asm::{VMError, output_path, translate_directory, translate_file};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "vm2asm v{} - stack VM to Hack assembly translator",
            env!("CARGO_PKG_VERSION")
        );
        eprintln!();
        eprintln!("Usage: vm2asm <file.vm | directory> [-v]");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -v, --verbose    Show detailed output");
        process::exit(1);
    }

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let input_path = Path::new(&args[1]);

    if !input_path.exists() {
        eprintln!("Error: path not found: {}", input_path.display());
        process::exit(1);
    }

    let start = Instant::now();

    let result = if input_path.extension().is_some_and(|ext| ext == "vm") {
        run_file_mode(input_path, verbose)
    } else if input_path.is_dir() {
        run_directory_mode(input_path, verbose)
    } else {
        Err(VMError::InvalidPath {
            path: input_path.display().to_string(),
        })
    };

    match result {
        Ok(output_file) => {
            if verbose {
                let elapsed = start.elapsed();
                println!(
                    "Translated -> {} ({:.2}ms)",
                    output_file.display(),
                    elapsed.as_secs_f64() * 1000.0
                );
            } else {
                println!("{}", output_file.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_file_mode(input: &Path, verbose: bool) -> Result<PathBuf, VMError> {
    if verbose {
        eprintln!("Translating file: {}", input.display());
    }

    let asm = translate_file(input)?;
    write_output(input, &asm, verbose)
}

fn run_directory_mode(input: &Path, verbose: bool) -> Result<PathBuf, VMError> {
    if verbose {
        eprintln!("Translating directory: {}", input.display());

        let mut vm_files: Vec<_> = fs::read_dir(input)
            .map_err(|e| VMError::FileRead {
                path: input.display().to_string(),
                source: e,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "vm"))
            .collect();
        vm_files.sort();

        eprintln!("Found {} .vm files:", vm_files.len());
        for f in &vm_files {
            eprintln!(
                "  - {}",
                f.file_name().unwrap_or_default().to_string_lossy()
            );
        }
    }

    let asm = translate_directory(input)?;
    write_output(input, &asm, verbose)
}

fn write_output(input: &Path, asm: &str, verbose: bool) -> Result<PathBuf, VMError> {
    let output = output_path(input);

    fs::write(&output, asm).map_err(|e| VMError::FileWrite {
        path: output.display().to_string(),
        source: e,
    })?;

    if verbose {
        eprintln!("Generated {} lines of assembly", asm.lines().count());
    }

    Ok(output)
}
