//! Clipboard glyph rasterizer.
//!
//! Paints a rounded-rectangle gradient body, a white clip at the top and three
//! translucent "paper lines" underneath. All measurements derive from the edge
//! length and are clamped to small minimums so tiny sizes still produce a canvas.

use crate::canvas::{Canvas, Pixel};

/// Gradient endpoints of the body, top and bottom.
pub const BACKGROUND_TOP: Pixel = Pixel::rgba(99, 102, 241, 255);
pub const BACKGROUND_BOTTOM: Pixel = Pixel::rgba(79, 70, 229, 255);
pub const CLIP_COLOR: Pixel = Pixel::rgba(255, 255, 255, 255);
pub const PAPER_LINE_COLOR: Pixel = Pixel::rgba(255, 255, 255, 180);

pub const PAPER_LINE_COUNT: i32 = 3;

/// Measurements derived from the icon size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: i32,
    pub margin: i32,
    pub corner_radius: i32,
    pub clip_top_height: i32,
    pub clip_top_width: i32,
    pub clip_left: i32,
    pub clip_y_start: i32,
    pub clip_y_end: i32,
    pub line_margin: i32,
    pub line_spacing: i32,
    pub line_height: i32,
}

impl Layout {
    pub fn new(size: u32) -> Self {
        let n = size as i32;
        let margin = (n / 8).max(1);
        let clip_top_height = (n / 6).max(2);
        let clip_top_width = (n / 3).max(4);

        Self {
            size: n,
            margin,
            corner_radius: (n / 6).max(2),
            clip_top_height,
            clip_top_width,
            // floor, not truncation: the clip may hang off the left edge on tiny canvases
            clip_left: (n - clip_top_width).div_euclid(2),
            clip_y_start: margin - (n / 16).max(1),
            clip_y_end: margin + clip_top_height,
            line_margin: margin + n / 5,
            line_spacing: (n / 6).max(2),
            line_height: (n / 16).max(1),
        }
    }

    /// Whether `(x, y)` falls inside the inset rectangle with circular corners.
    pub fn in_rounded_rect(&self, x: i32, y: i32) -> bool {
        let (n, m, r) = (self.size, self.margin, self.corner_radius);
        if !(m <= x && x < n - m && m <= y && y < n - m) {
            return false;
        }

        let in_corner_region = (x < m + r || x >= n - m - r) && (y < m + r || y >= n - m - r);
        if !in_corner_region {
            return true;
        }

        let near = m + r;
        let far = n - m - r - 1;
        [(near, near), (far, near), (near, far), (far, far)]
            .iter()
            .any(|&(cx, cy)| {
                let (dx, dy) = ((x - cx) as i64, (y - cy) as i64);
                dx * dx + dy * dy <= (r as i64) * (r as i64)
            })
    }

    /// Vertical gradient colour for row `y`.
    pub fn gradient_at(&self, y: i32) -> Pixel {
        let t = y as f64 / self.size as f64;
        let lerp = |top: u8, bottom: u8| (top as f64 * (1.0 - t) + bottom as f64 * t) as u8;
        Pixel::rgba(
            lerp(BACKGROUND_TOP.r, BACKGROUND_BOTTOM.r),
            lerp(BACKGROUND_TOP.g, BACKGROUND_BOTTOM.g),
            lerp(BACKGROUND_TOP.b, BACKGROUND_BOTTOM.b),
            255,
        )
    }

    /// Top row of paper line `i`, or `None` when it would not fit above the bottom margin.
    pub fn paper_line_y(&self, i: i32) -> Option<i32> {
        let y = self.line_margin + self.clip_top_height + i * self.line_spacing;
        (y + self.line_height < self.size - self.margin).then_some(y)
    }

    pub fn paper_line_width(&self, i: i32) -> i32 {
        self.size - 2 * self.line_margin - (i * self.size / 8)
    }
}

/// Rasterizes the clipboard icon at `size` x `size` pixels.
pub fn draw_icon(size: u32) -> Canvas {
    let layout = Layout::new(size);
    log::debug!("icon layout for {size}px: {layout:?}");

    let mut canvas = Canvas::new(size);
    draw_background(&mut canvas, &layout);
    draw_clip(&mut canvas, &layout);
    draw_paper_lines(&mut canvas, &layout);
    canvas
}

fn draw_background(canvas: &mut Canvas, layout: &Layout) {
    for y in 0..layout.size {
        let color = layout.gradient_at(y);
        for x in 0..layout.size {
            if layout.in_rounded_rect(x, y) {
                canvas.set(x, y, color);
            }
        }
    }
}

fn draw_clip(canvas: &mut Canvas, layout: &Layout) {
    let x_end = layout.clip_left + layout.clip_top_width;
    for y in layout.clip_y_start.max(0)..layout.clip_y_end.min(layout.size) {
        for x in layout.clip_left..x_end {
            canvas.set(x, y, CLIP_COLOR);
        }
    }
}

fn draw_paper_lines(canvas: &mut Canvas, layout: &Layout) {
    let (n, lm) = (layout.size, layout.line_margin);
    for i in 0..PAPER_LINE_COUNT {
        let Some(line_y) = layout.paper_line_y(i) else {
            continue;
        };
        let y_end = (line_y + layout.line_height).min(n - layout.margin);
        let x_end = (lm + layout.paper_line_width(i)).min(n - lm);

        // Plain overwrite; the alpha is not composited over the body.
        for y in line_y..y_end {
            for x in lm..x_end {
                canvas.set(x, y, PAPER_LINE_COLOR);
            }
        }
    }
}
