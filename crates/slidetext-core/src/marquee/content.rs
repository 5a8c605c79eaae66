//! L4 Atomic Layer: Label content model
//!
//! A label is a single line of text plus an opaque style payload supplied by
//! the host (colors, alignment, truncation, borders...). Copies are taken as
//! plain values, so a copy never observes later edits to the primary.

/// Text and style of one marquee instance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label<S> {
    text: String,
    style: S,
}

impl<S> Label<S> {
    pub fn new(text: impl Into<String>, style: S) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut S {
        &mut self.style
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_style(&mut self, style: S) {
        self.style = style;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<S: Clone> Label<S> {
    /// Capture an inert copy of the current content and style
    pub fn snapshot(&self) -> Label<S> {
        self.clone()
    }
}

impl<S: Default> Label<S> {
    /// Label with the host's default style
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, S::default())
    }
}

/// Identifies one of the instances drawn inside a marquee container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instance {
    /// The label laid out in the container's frame
    Primary,
    /// One of the two transient duplicates (0 or 1)
    Copy(usize),
}

impl Instance {
    pub const ALL: [Instance; 3] = [Instance::Primary, Instance::Copy(0), Instance::Copy(1)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_decoupled() {
        let mut label = Label::new("breaking news", 7u8);
        let snapshot = label.snapshot();

        label.set_text("weather");
        label.set_style(3);

        assert_eq!(snapshot.text(), "breaking news");
        assert_eq!(*snapshot.style(), 7);
        assert_eq!(label.text(), "weather");
    }

    #[test]
    fn test_plain_uses_default_style() {
        let label: Label<u8> = Label::plain("hi");
        assert_eq!(*label.style(), 0);
        assert!(!label.is_empty());
        assert!(Label::<u8>::plain("").is_empty());
    }
}
