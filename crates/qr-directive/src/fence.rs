//! Code fence tracking.
//!
//! Tracks whether processing is inside a fenced code block so directive
//! syntax within code examples is left alone.

/// Tracks fenced-code-block state during line-by-line processing.
///
/// `CommonMark` fences use three or more backticks or tildes. The closing
/// fence must use the same character and be at least as long as the opening
/// fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Open fence character and length, if inside a fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Update fence state from a line. Call once per line, in order.
    pub(crate) fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();

        match self.open {
            Some((ch, len)) if closes_fence(trimmed, ch, len) => self.open = None,
            Some(_) => {}
            None => self.open = opens_fence(trimmed),
        }
    }
}

/// Detect an opening fence, returning its character and length.
fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// A closing fence uses the opening character, is at least as long, and has
/// nothing but whitespace after it.
fn closes_fence(trimmed: &str, fence_char: char, min_len: usize) -> bool {
    let count = trimmed.chars().take_while(|&c| c == fence_char).count();
    count >= min_len && trimmed[count..].chars().all(char::is_whitespace)
}
