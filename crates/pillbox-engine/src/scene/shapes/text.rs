use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// CSS font family handed to the backend unchanged.
    pub family: Option<String>,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text run in logical pixels.
    pub origin: Vec2,
    /// Measured extent of the run (width, line height).
    pub extent: Vec2,
    /// Distance from `origin.y` to the alphabetic baseline.
    pub baseline: f32,
}

impl DrawList {
    /// Records a single-line text draw command.
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        self.push(z, DrawCmd::Text(cmd));
    }
}
