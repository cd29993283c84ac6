//! Loop frame bookkeeping
//!
//! Every open `{l:...}` block owns one frame on a stack. The innermost frame
//! anchors relative paths and answers the position queries of the built-in
//! functions; its recorded cursor pair is where the interpreter jumps back to
//! when the matching end marker asks for another iteration.

/// One open iteration over a JSON collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopFrame {
    /// Absolute collection pattern, still holding its `[]` placeholder
    pub list_path: String,
    /// Current 0-based element position
    pub index: usize,
    /// Element count, fixed when the loop started
    pub length: usize,
    /// Directive index of the first body directive
    pub start_directive_index: usize,
    /// Byte offset just past the loop-start directive
    pub start_text_offset: usize,
}

impl LoopFrame {
    /// True on the first element
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// True on the final element
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.length
    }
}

/// Outcome of advancing the innermost frame at a loop end marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Elements remain: jump the cursor back to the recorded body start
    Continue {
        directive_index: usize,
        text_offset: usize,
    },
    /// The collection is exhausted, or no frame was open; fall through
    Exit,
}

/// Step the innermost frame to its next element
///
/// Pops the frame once the collection is exhausted. An end marker with no
/// open frame is tolerated as a no-op.
pub fn advance_frame(frames: &mut Vec<LoopFrame>) -> Advance {
    let Some(top) = frames.last_mut() else {
        return Advance::Exit;
    };
    top.index += 1;
    if top.index < top.length {
        Advance::Continue {
            directive_index: top.start_directive_index,
            text_offset: top.start_text_offset,
        }
    } else {
        frames.pop();
        Advance::Exit
    }
}
