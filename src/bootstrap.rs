//! Bootstrap prologue.
//!
//! Emitted before any translated command: point SP at 256, then call
//! `Sys.init 0` through the ordinary call protocol so the program starts in
//! a well-formed frame. `Sys.init` is expected to be provided by the source
//! program and never return; a halt loop catches it if it does.

use crate::codegen::CodeGenerator;
use crate::parser::VMCommand;

/// Emit the bootstrap chunks through the run's shared generator.
///
/// Routing the `call Sys.init 0` through [`CodeGenerator::write_call`] keeps
/// its return symbol inside the global counter, like any other call site.
pub fn write_bootstrap(codegen: &mut CodeGenerator, buf: &mut String) {
    codegen.write_raw_chunk("bootstrap", "@256\nD=A\n@SP\nM=D\n", buf);

    codegen.translate(
        &VMCommand::Call {
            name: "Sys.init".to_string(),
            num_args: 0,
        },
        buf,
    );

    codegen.write_raw_chunk("halt", "(HALT)\n@HALT\n0;JMP\n", buf);
}
