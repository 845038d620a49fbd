use std::fmt;

use crate::coords::Vec2;

/// Line box height as a multiple of the font size.
pub const LINE_HEIGHT_EM: f32 = 1.2;

/// Average advance used when no font is loaded, as a multiple of the font size.
const FALLBACK_ADVANCE_EM: f32 = 0.55;

/// Ascent used when no font metrics are available, as a multiple of the font size.
const FALLBACK_ASCENT_EM: f32 = 0.8;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts used for layout measurement.
///
/// Measurement never fails: an unknown or absent font falls back to a fixed
/// per-character advance so captions still lay out without any font files.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    fn get(&self, id: Option<FontId>) -> Option<&fontdue::Font> {
        id.and_then(|id| self.fonts.get(id.0))
    }

    /// Measures a single line of text: `(advance width, line height)` in logical pixels.
    #[must_use]
    pub fn measure_line(&self, text: &str, id: Option<FontId>, size: f32) -> Vec2 {
        let height = size * LINE_HEIGHT_EM;
        let width = match self.get(id) {
            Some(font) => text
                .chars()
                .map(|c| font.metrics(c, size).advance_width)
                .sum(),
            None => text.chars().count() as f32 * size * FALLBACK_ADVANCE_EM,
        };
        Vec2::new(width.max(0.0), height)
    }

    /// Distance from the top of the line box to the baseline.
    ///
    /// The ascent is centered inside the line box the way CSS distributes
    /// half-leading above and below the glyphs.
    #[must_use]
    pub fn baseline(&self, id: Option<FontId>, size: f32) -> f32 {
        let (ascent, descent) = self
            .get(id)
            .and_then(|font| font.horizontal_line_metrics(size))
            .map(|m| (m.ascent, -m.descent))
            .unwrap_or((size * FALLBACK_ASCENT_EM, size * (1.0 - FALLBACK_ASCENT_EM)));
        let half_leading = (size * LINE_HEIGHT_EM - (ascent + descent)) * 0.5;
        half_leading + ascent
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
