//! VM command classification.
//!
//! The parser is stateless: one significant line in, one typed command out.
//! Lines reach it already stripped of comments and whitespace (see
//! [`crate::source`]), so classification is purely over the leading token.

use crate::error::{Result, VMError};

/// Arithmetic and logical mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl ArithmeticOp {
    /// The source-language spelling of the operation.
    pub fn mnemonic(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Sub => "sub",
            ArithmeticOp::Neg => "neg",
            ArithmeticOp::Eq => "eq",
            ArithmeticOp::Gt => "gt",
            ArithmeticOp::Lt => "lt",
            ArithmeticOp::And => "and",
            ArithmeticOp::Or => "or",
            ArithmeticOp::Not => "not",
        }
    }
}

/// Memory segments a push or pop may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Argument,
    Local,
    Static,
    Constant,
    This,
    That,
    Pointer,
    Temp,
}

impl Segment {
    /// The source-language spelling of the segment.
    pub fn name(self) -> &'static str {
        match self {
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::Constant => "constant",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
        }
    }
}

/// A classified VM command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VMCommand {
    Arithmetic(ArithmeticOp),
    Push { segment: Segment, index: u16 },
    Pop { segment: Segment, index: u16 },
    Label { name: String },
    Goto { label: String },
    IfGoto { label: String },
    Function { name: String, num_locals: u16 },
    Call { name: String, num_args: u16 },
    Return,
}

/// Classify one significant line.
///
/// `line_num` and `filename` are carried into any error for diagnostics.
pub fn parse_line(line: &str, line_num: usize, filename: &str) -> Result<VMCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let head = parts.first().copied().unwrap_or("").to_lowercase();

    match head.as_str() {
        "add" => Ok(VMCommand::Arithmetic(ArithmeticOp::Add)),
        "sub" => Ok(VMCommand::Arithmetic(ArithmeticOp::Sub)),
        "neg" => Ok(VMCommand::Arithmetic(ArithmeticOp::Neg)),
        "eq" => Ok(VMCommand::Arithmetic(ArithmeticOp::Eq)),
        "gt" => Ok(VMCommand::Arithmetic(ArithmeticOp::Gt)),
        "lt" => Ok(VMCommand::Arithmetic(ArithmeticOp::Lt)),
        "and" => Ok(VMCommand::Arithmetic(ArithmeticOp::And)),
        "or" => Ok(VMCommand::Arithmetic(ArithmeticOp::Or)),
        "not" => Ok(VMCommand::Arithmetic(ArithmeticOp::Not)),

        "push" => parse_push(&parts, line_num, filename),
        "pop" => parse_pop(&parts, line_num, filename),

        "label" => parse_label(&parts, line_num, filename),
        "goto" => parse_goto(&parts, line_num, filename),
        "if-goto" => parse_if_goto(&parts, line_num, filename),

        "function" => parse_function(&parts, line_num, filename),
        "call" => parse_call(&parts, line_num, filename),
        "return" => Ok(VMCommand::Return),

        _ => Err(VMError::InvalidCommand {
            line: line_num,
            file: filename.to_string(),
            command: head,
        }),
    }
}

fn parse_push(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    let (segment, index) = parse_segment_index(parts, "push", line_num, filename)?;
    Ok(VMCommand::Push { segment, index })
}

fn parse_pop(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    let (segment, index) = parse_segment_index(parts, "pop", line_num, filename)?;
    if segment == Segment::Constant {
        return Err(VMError::PopToConstant {
            line: line_num,
            file: filename.to_string(),
        });
    }
    Ok(VMCommand::Pop { segment, index })
}

/// Shared tail of push/pop: `<cmd> <segment> <index>` with range checks.
fn parse_segment_index(
    parts: &[&str],
    command: &str,
    line_num: usize,
    filename: &str,
) -> Result<(Segment, u16)> {
    if parts.len() < 3 {
        return Err(VMError::MissingArgument {
            line: line_num,
            file: filename.to_string(),
            command: command.to_string(),
        });
    }

    let segment = parse_segment(parts[1], line_num, filename)?;
    let index = parse_index(parts[2], line_num, filename)?;

    match segment {
        Segment::Pointer if index > 1 => Err(VMError::InvalidPointerIndex {
            line: line_num,
            file: filename.to_string(),
            index,
        }),
        Segment::Temp if index > 7 => Err(VMError::InvalidTempIndex {
            line: line_num,
            file: filename.to_string(),
            index,
        }),
        _ => Ok((segment, index)),
    }
}

fn parse_label(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    let name = symbol_argument(parts, "label", line_num, filename)?;
    Ok(VMCommand::Label { name })
}

fn parse_goto(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    let label = symbol_argument(parts, "goto", line_num, filename)?;
    Ok(VMCommand::Goto { label })
}

fn parse_if_goto(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    let label = symbol_argument(parts, "if-goto", line_num, filename)?;
    Ok(VMCommand::IfGoto { label })
}

fn parse_function(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    if parts.len() < 3 {
        return Err(VMError::MissingArgument {
            line: line_num,
            file: filename.to_string(),
            command: "function".to_string(),
        });
    }

    let name = parts[1].to_string();
    let num_locals = parse_index(parts[2], line_num, filename)?;

    Ok(VMCommand::Function { name, num_locals })
}

fn parse_call(parts: &[&str], line_num: usize, filename: &str) -> Result<VMCommand> {
    if parts.len() < 3 {
        return Err(VMError::MissingArgument {
            line: line_num,
            file: filename.to_string(),
            command: "call".to_string(),
        });
    }

    let name = parts[1].to_string();
    let num_args = parse_index(parts[2], line_num, filename)?;

    Ok(VMCommand::Call { name, num_args })
}

/// A single symbolic argument, as used by label/goto/if-goto.
fn symbol_argument(
    parts: &[&str],
    command: &str,
    line_num: usize,
    filename: &str,
) -> Result<String> {
    match parts.get(1) {
        Some(sym) => Ok((*sym).to_string()),
        None => Err(VMError::MissingArgument {
            line: line_num,
            file: filename.to_string(),
            command: command.to_string(),
        }),
    }
}

fn parse_segment(s: &str, line_num: usize, filename: &str) -> Result<Segment> {
    match s.to_lowercase().as_str() {
        "argument" => Ok(Segment::Argument),
        "local" => Ok(Segment::Local),
        "static" => Ok(Segment::Static),
        "constant" => Ok(Segment::Constant),
        "this" => Ok(Segment::This),
        "that" => Ok(Segment::That),
        "pointer" => Ok(Segment::Pointer),
        "temp" => Ok(Segment::Temp),
        _ => Err(VMError::InvalidSegment {
            line: line_num,
            file: filename.to_string(),
            segment: s.to_string(),
        }),
    }
}

fn parse_index(s: &str, line_num: usize, filename: &str) -> Result<u16> {
    s.parse::<u16>().map_err(|_| VMError::InvalidNumber {
        line: line_num,
        file: filename.to_string(),
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arithmetic_mnemonics() {
        for (line, op) in [
            ("add", ArithmeticOp::Add),
            ("sub", ArithmeticOp::Sub),
            ("neg", ArithmeticOp::Neg),
            ("eq", ArithmeticOp::Eq),
            ("gt", ArithmeticOp::Gt),
            ("lt", ArithmeticOp::Lt),
            ("and", ArithmeticOp::And),
            ("or", ArithmeticOp::Or),
            ("not", ArithmeticOp::Not),
        ] {
            assert_eq!(
                parse_line(line, 1, "Test.vm").unwrap(),
                VMCommand::Arithmetic(op)
            );
        }
    }

    #[test]
    fn test_parse_push() {
        assert_eq!(
            parse_line("push constant 7", 1, "Test.vm").unwrap(),
            VMCommand::Push {
                segment: Segment::Constant,
                index: 7
            }
        );
        assert_eq!(
            parse_line("push argument 2", 1, "Test.vm").unwrap(),
            VMCommand::Push {
                segment: Segment::Argument,
                index: 2
            }
        );
    }

    #[test]
    fn test_parse_pop() {
        assert_eq!(
            parse_line("pop local 0", 1, "Test.vm").unwrap(),
            VMCommand::Pop {
                segment: Segment::Local,
                index: 0
            }
        );
    }

    #[test]
    fn test_pop_constant_is_rejected() {
        assert!(matches!(
            parse_line("pop constant 5", 4, "Test.vm"),
            Err(VMError::PopToConstant { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_branching() {
        assert_eq!(
            parse_line("label LOOP", 1, "Test.vm").unwrap(),
            VMCommand::Label {
                name: "LOOP".to_string()
            }
        );
        assert_eq!(
            parse_line("goto END", 1, "Test.vm").unwrap(),
            VMCommand::Goto {
                label: "END".to_string()
            }
        );
        assert_eq!(
            parse_line("if-goto LOOP", 1, "Test.vm").unwrap(),
            VMCommand::IfGoto {
                label: "LOOP".to_string()
            }
        );
    }

    #[test]
    fn test_parse_function_commands() {
        assert_eq!(
            parse_line("function Mult.mul 2", 1, "Test.vm").unwrap(),
            VMCommand::Function {
                name: "Mult.mul".to_string(),
                num_locals: 2
            }
        );
        assert_eq!(
            parse_line("call Mult.mul 2", 1, "Test.vm").unwrap(),
            VMCommand::Call {
                name: "Mult.mul".to_string(),
                num_args: 2
            }
        );
        assert_eq!(parse_line("return", 1, "Test.vm").unwrap(), VMCommand::Return);
    }

    #[test]
    fn test_unknown_command_is_fatal() {
        assert!(matches!(
            parse_line("frobnicate", 2, "Test.vm"),
            Err(VMError::InvalidCommand { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_segment_is_fatal() {
        assert!(matches!(
            parse_line("push heap 1", 1, "Test.vm"),
            Err(VMError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_missing_arguments_are_fatal() {
        assert!(matches!(
            parse_line("push constant", 1, "Test.vm"),
            Err(VMError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_line("goto", 1, "Test.vm"),
            Err(VMError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_line("function Foo.bar", 1, "Test.vm"),
            Err(VMError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_non_numeric_index_is_fatal() {
        assert!(matches!(
            parse_line("push constant x", 1, "Test.vm"),
            Err(VMError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_pointer_index_range() {
        assert!(parse_line("push pointer 0", 1, "Test.vm").is_ok());
        assert!(parse_line("push pointer 1", 1, "Test.vm").is_ok());
        assert!(matches!(
            parse_line("push pointer 2", 1, "Test.vm"),
            Err(VMError::InvalidPointerIndex { index: 2, .. })
        ));
    }

    #[test]
    fn test_temp_index_range() {
        assert!(parse_line("pop temp 7", 1, "Test.vm").is_ok());
        assert!(matches!(
            parse_line("pop temp 8", 1, "Test.vm"),
            Err(VMError::InvalidTempIndex { index: 8, .. })
        ));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(
            parse_line("PUSH CONSTANT 3", 1, "Test.vm").unwrap(),
            VMCommand::Push {
                segment: Segment::Constant,
                index: 3
            }
        );
    }

    #[test]
    fn test_mnemonic_round_trip() {
        assert_eq!(ArithmeticOp::Add.mnemonic(), "add");
        assert_eq!(ArithmeticOp::Not.mnemonic(), "not");
        assert_eq!(Segment::Argument.name(), "argument");
        assert_eq!(Segment::Temp.name(), "temp");
    }
}
