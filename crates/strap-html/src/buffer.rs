//! Session-scoped fragment accumulator.

/// Collects emitted fragments until the session drains them.
///
/// Accumulation and direct return are independent: components always return
/// their fragment, and additionally store it here unless the session was
/// created in return-only mode or the call asked for `return_only`.
#[derive(Debug)]
pub struct RenderBuffer {
    accumulate: bool,
    content: String,
}

impl RenderBuffer {
    #[must_use]
    pub fn new(accumulate: bool) -> Self {
        Self {
            accumulate,
            content: String::new(),
        }
    }

    /// Append a fragment unless accumulation is off or the call is return-only.
    pub fn store(&mut self, fragment: &str, return_only: bool) {
        if self.accumulate && !return_only {
            self.content.push_str(fragment);
        }
    }

    /// Take the buffered content, leaving the buffer empty.
    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.content)
    }

    /// Buffered content without draining.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length of the buffered content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new(true)
    }
}
