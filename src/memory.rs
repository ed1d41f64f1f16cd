//! Segment resolution policy.
//!
//! Maps each VM segment to the way its addresses are formed in Hack RAM:
//! immediate constants, base-pointer indirection, fixed RAM windows, or
//! file-mangled assembly symbols.

use crate::parser::Segment;

/// How a segment's cells are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentAccess {
    /// Immediate literal; no backing storage.
    Constant,
    /// `*base + index`, where base is one of the LCL/ARG/THIS/THAT pointers.
    Indirect(&'static str),
    /// Fixed RAM window R5..R12; `temp i` is RAM[5+i].
    Temp,
    /// `pointer 0` aliases THIS, `pointer 1` aliases THAT.
    Pointer,
    /// A per-file assembly symbol; see [`write_static_symbol`].
    Static,
}

/// Resolve the access mode for a segment.
pub fn segment_access(segment: Segment) -> SegmentAccess {
    match segment {
        Segment::Constant => SegmentAccess::Constant,
        Segment::Local => SegmentAccess::Indirect("LCL"),
        Segment::Argument => SegmentAccess::Indirect("ARG"),
        Segment::This => SegmentAccess::Indirect("THIS"),
        Segment::That => SegmentAccess::Indirect("THAT"),
        Segment::Temp => SegmentAccess::Temp,
        Segment::Pointer => SegmentAccess::Pointer,
        Segment::Static => SegmentAccess::Static,
    }
}

/// RAM address backing `temp i`.
#[inline]
pub fn temp_address(index: u16) -> u16 {
    5 + index
}

/// Register symbol aliased by `pointer i`.
#[inline]
pub fn pointer_symbol(index: u16) -> &'static str {
    if index == 0 { "THIS" } else { "THAT" }
}

/// Append the assembly symbol for `static <index>` of the named file:
/// `static.<file>.<index>`.
///
/// The file basename keeps statics of distinct files from colliding when a
/// directory of sources is linked into one output.
pub fn write_static_symbol(filename: &str, index: u16, buf: &mut String) {
    buf.push_str("static.");
    buf.push_str(filename);
    buf.push('.');
    crate::codegen::write_num(u64::from(index), buf);
}
