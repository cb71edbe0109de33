//! Animated, physics-bearing sprite
//!
//! Everything that falls, scrolls or walks in the game is one of these:
//! a horizontal frame-strip image plus position, velocity, gravity and
//! an inset AABB hitbox. Updates mutate only the sprite's own state;
//! drawing goes through the abstract [`Surface`].

use glam::Vec2;

use crate::render::{AssetId, Rect, Surface};

/// An animated sprite backed by a horizontal frame strip.
///
/// `width` is the full strip width; the visible frame is
/// `width / number_of_frames` wide and cycles at `ticks_per_frame`.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub pos: Vec2,
    pub speed: Vec2,
    /// Full strip dimensions
    pub width: f32,
    pub height: f32,
    pub image: AssetId,
    pub frame_index: u32,
    pub tick_count: u32,
    pub number_of_frames: u32,
    pub ticks_per_frame: u32,
    /// Added to vertical speed every airborne tick
    pub gravity: f32,
    /// Inset applied to all four hitbox edges
    pub hitbox_margin: f32,
    /// Keep the visible frame inside the playfield after every update
    pub bounded: bool,
    pub scale_ratio: f32,
    pub render_enabled: bool,
    blinking: bool,
    blink_ticks: u32,
    blink_tick_count: u32,
}

impl Sprite {
    pub fn new(image: AssetId, width: f32, height: f32, pos: Vec2) -> Self {
        Self {
            pos,
            speed: Vec2::ZERO,
            width,
            height,
            image,
            frame_index: 0,
            tick_count: 0,
            number_of_frames: 1,
            ticks_per_frame: 0,
            gravity: 0.0,
            hitbox_margin: 0.0,
            bounded: false,
            scale_ratio: 1.0,
            render_enabled: true,
            blinking: false,
            blink_ticks: 0,
            blink_tick_count: 0,
        }
    }

    /// Width of a single animation frame
    pub fn frame_width(&self) -> f32 {
        self.width / self.number_of_frames as f32
    }

    /// True while the sprite hangs above the ground line
    pub fn airborne(&self, surface_h: f32) -> bool {
        self.pos.y < surface_h - self.height
    }

    pub fn grounded(&self, surface_h: f32) -> bool {
        !self.airborne(surface_h)
    }

    /// Advance animation, blinking and physics by one tick.
    ///
    /// Clamping is per-axis and independent: horizontal displacement
    /// clamps against the side edges, then gravity (airborne only) and
    /// vertical displacement clamp against the ground line. A sprite
    /// past a side edge and below the floor corrects on both axes in
    /// the same tick.
    pub fn update(&mut self, surface_w: f32, surface_h: f32) {
        self.tick_count += 1;
        if self.tick_count > self.ticks_per_frame {
            self.tick_count = 0;
            self.frame_index = if self.frame_index + 1 < self.number_of_frames {
                self.frame_index + 1
            } else {
                0
            };
        }

        if self.blinking {
            self.blink_tick_count += 1;
            if self.blink_tick_count > self.blink_ticks {
                self.blink_tick_count = 0;
                self.render_enabled = !self.render_enabled;
            }
        }

        self.pos.x += self.speed.x;
        if self.bounded {
            self.pos.x = self.pos.x.clamp(0.0, surface_w - self.frame_width());
        }

        // Gravity only acts on sprites which are in the air
        if self.airborne(surface_h) {
            self.speed.y += self.gravity;
        }

        self.pos.y += self.speed.y;
        if self.bounded && self.pos.y + self.height > surface_h {
            self.pos.y = surface_h - self.height;
        }
    }

    /// Draw the current frame; outlines the hitbox when `debug` is set
    pub fn render(&self, surface: &mut dyn Surface, debug: bool) {
        if !self.render_enabled {
            return;
        }

        let fw = self.frame_width();
        let src = Rect::new(self.frame_index as f32 * fw, 0.0, fw, self.height);
        let dst = Rect::new(
            self.pos.x,
            self.pos.y,
            fw * self.scale_ratio,
            self.height * self.scale_ratio,
        );
        surface.draw_image(self.image, src, dst);

        if debug {
            surface.stroke_polygon(&self.hitbox().corners());
        }
    }

    /// Current hitbox: the visible frame inset by the margin
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.pos.x + self.hitbox_margin,
            self.pos.y + self.hitbox_margin,
            self.frame_width() - 2.0 * self.hitbox_margin,
            self.height - 2.0 * self.hitbox_margin,
        )
    }

    /// Axis-aligned overlap test between the two hitboxes; touching
    /// edges count as a crash
    pub fn crash_with(&self, other: &Sprite) -> bool {
        let a = self.hitbox();
        let b = other.hitbox();
        !(a.bottom() < b.top()
            || a.top() > b.bottom()
            || a.right() < b.left()
            || a.left() > b.right())
    }

    /// True once the visible frame has fully left the playfield
    pub fn is_off_screen(&self, surface_w: f32, surface_h: f32) -> bool {
        self.pos.x + self.frame_width() < 0.0
            || self.pos.y + self.height < 0.0
            || self.pos.x > surface_w
            || self.pos.y > surface_h
    }

    /// Flicker visibility every `ticks` ticks (the just-got-hurt cue)
    pub fn blink_every(&mut self, ticks: u32) {
        self.blink_ticks = ticks;
        self.blinking = true;
    }

    pub fn stop_blinking(&mut self) {
        self.blinking = false;
        self.blink_ticks = 0;
        self.blink_tick_count = 0;
        self.render_enabled = true;
    }

    pub fn blinking(&self) -> bool {
        self.blinking
    }
}
