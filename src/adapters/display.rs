use crate::domain::ports::OutputSurface;
use std::io::Write;
use std::sync::Mutex;

/// Prints each rendering to stdout.
#[derive(Debug, Default, Clone)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSurface for TerminalSurface {
    fn replace(&self, rendered: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", rendered).and_then(|_| stdout.flush()) {
            tracing::error!("Failed to write lookup result: {}", e);
        }
    }
}

/// Keeps only the most recent rendering in memory.
#[derive(Debug, Default)]
pub struct BufferSurface {
    text: Mutex<String>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OutputSurface for BufferSurface {
    fn replace(&self, rendered: &str) {
        let mut text = self
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *text = rendered.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_surface_keeps_only_latest() {
        let surface = BufferSurface::new();
        assert_eq!(surface.contents(), "");

        surface.replace("first");
        surface.replace("second");

        assert_eq!(surface.contents(), "second");
    }
}
