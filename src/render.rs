//! Abstract drawing surface
//!
//! The simulation only ever writes into this sink; it never reads back.
//! A real host backs it with a canvas-like 2D context; tests and the
//! headless demo use [`NullSurface`].

use glam::Vec2;

/// Logical name of an image resource.
///
/// Resolution, loading and readiness belong to the host; the simulation
/// hands these through to the sink as-is and assumes the resource
/// becomes displayable on its own time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetId(pub &'static str);

/// Axis-aligned rectangle, top-left origin, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Corners clockwise from top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }
}

/// Text styling for the score readout and tooltips (canvas-style values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub fill: &'static str,
    /// Outline color, if the text is stroked
    pub stroke: Option<&'static str>,
}

/// 2D drawing sink the simulation renders into once per frame
pub trait Surface {
    /// Wipe a region back to transparent
    fn clear(&mut self, region: Rect);

    /// Draw `src` (a sub-rectangle of `image`) scaled into `dst`
    fn draw_image(&mut self, image: AssetId, src: Rect, dst: Rect);

    /// Outline a closed polygon (debug hitboxes)
    fn stroke_polygon(&mut self, points: &[Vec2]);

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Sink that discards every draw call; headless runs and tests
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _region: Rect) {}

    fn draw_image(&mut self, _image: AssetId, _src: Rect, _dst: Rect) {}

    fn stroke_polygon(&mut self, _points: &[Vec2]) {}

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _style: &TextStyle) {}
}
