use crate::core::Layout;
use crate::error::ChartResult;
use crate::render::{LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one view draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub layout: Layout,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            paths: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    /// Appends every primitive of `other`, keeping this frame's layout.
    pub fn extend(&mut self, other: RenderFrame) {
        self.paths.extend(other.paths);
        self.lines.extend(other.lines);
        self.rects.extend(other.rects);
        self.texts.extend(other.texts);
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.layout.validate()?;

        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
