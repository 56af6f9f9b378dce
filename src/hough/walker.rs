//! Rasterization of a (ρ, θ) line across the image.
//!
//! The infinite line is turned into a segment by stepping a diagonal length
//! either side of its foot point `ρ·(cosθ, sinθ)`, which puts both ends on or
//! outside the image. The segment is clipped to the pixel-cell rectangle
//! `[−½, W−½] × [−½, H−½]`, its ends are rounded to pixel centres, and the
//! pixels between them are produced with Bresenham's algorithm.
//!
//! Walk direction is `(sinθ, −cosθ)`: horizontal lines run left to right,
//! vertical lines bottom to top.
use super::feasibility::ImageGeometry;
use super::table::Angle;
use nalgebra::Vector2;

/// Integer pixel position inside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub x: usize,
    pub y: usize,
}

impl PixelCoord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Forward-only pixel iterator for one candidate line.
#[derive(Clone, Debug)]
pub struct LineWalker {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    step_x: i64,
    step_y: i64,
    err: i64,
    remaining: usize,
}

impl LineWalker {
    pub fn new(geometry: &ImageGeometry, rho: f32, angle: &Angle) -> Self {
        match clip_line(geometry, rho, angle) {
            Some((start, end)) => Self::between(start, end),
            None => Self::empty(),
        }
    }

    /// Walk between two pixel centres, both ends included.
    pub fn between(start: PixelCoord, end: PixelCoord) -> Self {
        let (x0, y0) = (start.x as i64, start.y as i64);
        let (x1, y1) = (end.x as i64, end.y as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            step_x: if x0 < x1 { 1 } else { -1 },
            step_y: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            remaining: dx.max(-dy) as usize + 1,
        }
    }

    pub fn empty() -> Self {
        Self {
            x: 0,
            y: 0,
            end_x: 0,
            end_y: 0,
            dx: 0,
            dy: 0,
            step_x: 1,
            step_y: 1,
            err: 0,
            remaining: 0,
        }
    }

    /// Last pixel the walk will produce, if any remain.
    pub fn end(&self) -> Option<PixelCoord> {
        (self.remaining > 0).then(|| PixelCoord::new(self.end_x as usize, self.end_y as usize))
    }
}

impl Iterator for LineWalker {
    type Item = PixelCoord;

    fn next(&mut self) -> Option<PixelCoord> {
        if self.remaining == 0 {
            return None;
        }
        let current = PixelCoord::new(self.x as usize, self.y as usize);
        self.remaining -= 1;
        if self.remaining > 0 {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.step_x;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.step_y;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LineWalker {}

impl std::iter::FusedIterator for LineWalker {}

/// Clip the line to the pixel-cell rectangle and return its end pixels.
fn clip_line(geometry: &ImageGeometry, rho: f32, angle: &Angle) -> Option<(PixelCoord, PixelCoord)> {
    if geometry.width == 0 || geometry.height == 0 {
        return None;
    }
    let x_max = geometry.width as f32 - 0.5;
    let y_max = geometry.height as f32 - 0.5;

    // Axis-aligned orientations are handled without touching the direction
    // vector so that neither component is ever divided by.
    if angle.sin == 0.0 {
        let x = rho * angle.cos;
        if !(-0.5..=x_max).contains(&x) {
            return None;
        }
        let col = snap(x, geometry.width);
        return Some((
            PixelCoord::new(col, geometry.height - 1),
            PixelCoord::new(col, 0),
        ));
    }
    if angle.cos == 0.0 {
        let y = rho * angle.sin;
        if !(-0.5..=y_max).contains(&y) {
            return None;
        }
        let row = snap(y, geometry.height);
        return Some((
            PixelCoord::new(0, row),
            PixelCoord::new(geometry.width - 1, row),
        ));
    }

    let normal = Vector2::new(angle.cos, angle.sin);
    let direction = Vector2::new(angle.sin, -angle.cos);
    let reach = geometry.diagonal_length.ceil() + 1.0;
    let foot = normal * rho;
    let p0 = foot - direction * reach;
    let delta = direction * (2.0 * reach);

    // Liang–Barsky against the four cell-rectangle edges.
    let checks = [
        (-delta.x, p0.x + 0.5),
        (delta.x, x_max - p0.x),
        (-delta.y, p0.y + 0.5),
        (delta.y, y_max - p0.y),
    ];
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let a = p0 + delta * t0;
    let b = p0 + delta * t1;
    Some((
        PixelCoord::new(snap(a.x, geometry.width), snap(a.y, geometry.height)),
        PixelCoord::new(snap(b.x, geometry.width), snap(b.y, geometry.height)),
    ))
}

/// Round a clipped coordinate to the nearest pixel centre inside `[0, extent)`.
#[inline]
fn snap(v: f32, extent: usize) -> usize {
    let max = (extent - 1) as f32;
    v.round().clamp(0.0, max) as usize
}
