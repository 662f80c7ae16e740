//! Viewport dimensions and pointer-to-NDC conversion

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; dimensions of zero count as one pixel
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Whether either dimension is zero (minimized window)
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert a pointer position to Normalized Device Coordinates
    ///
    /// NDC range: [-1, 1] where:
    /// - X: -1 = left, +1 = right
    /// - Y: -1 = bottom, +1 = top (screen Y grows downward, so it is inverted)
    ///
    /// Returns `None` for an empty viewport.
    ///
    /// # Examples
    /// ```
    /// # use scene_engine::input::Viewport;
    /// let viewport = Viewport::new(800, 600);
    /// assert_eq!(viewport.pointer_to_ndc(400.0, 300.0), Some((0.0, 0.0)));
    /// assert_eq!(viewport.pointer_to_ndc(0.0, 0.0), Some((-1.0, 1.0)));
    /// ```
    pub fn pointer_to_ndc(&self, x: f64, y: f64) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let ndc_x = (x / f64::from(self.width)) * 2.0 - 1.0;
        let ndc_y = -(y / f64::from(self.height)) * 2.0 + 1.0;
        Some((ndc_x as f32, ndc_y as f32))
    }

    /// Map a pointer position given in `window` units onto this viewport's pixels
    ///
    /// Window systems on HiDPI displays report the cursor in screen units
    /// while the framebuffer is larger. An empty `window` leaves the
    /// position unchanged.
    pub fn scale_pointer(&self, window: Viewport, x: f64, y: f64) -> (f64, f64) {
        if window.is_empty() {
            return (x, y);
        }
        (
            x * f64::from(self.width) / f64::from(window.width),
            y * f64::from(self.height) / f64::from(window.height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_to_ndc_corners() {
        let viewport = Viewport::new(1920, 1080);

        let (x, y) = viewport.pointer_to_ndc(960.0, 540.0).unwrap();
        assert!(x.abs() < 0.001 && y.abs() < 0.001);

        let (x, y) = viewport.pointer_to_ndc(1920.0, 1080.0).unwrap();
        assert!((x - 1.0).abs() < 0.001); // Right edge
        assert!((y + 1.0).abs() < 0.001); // Bottom edge
    }

    #[test]
    fn test_scale_pointer_to_framebuffer() {
        let framebuffer = Viewport::new(2560, 1440);
        let window = Viewport::new(1280, 720);

        let (x, y) = framebuffer.scale_pointer(window, 640.0, 360.0);
        assert_eq!((x, y), (1280.0, 720.0));
        assert_eq!(framebuffer.pointer_to_ndc(x, y), Some((0.0, 0.0)));

        // Unscaled, the same click lands in the upper-left quadrant
        let (ux, uy) = framebuffer.pointer_to_ndc(640.0, 360.0).unwrap();
        assert!(ux < -0.4 && uy > 0.4);

        assert_eq!(window.scale_pointer(window, 10.0, 20.0), (10.0, 20.0));
        assert_eq!(framebuffer.scale_pointer(Viewport::new(0, 0), 7.0, 9.0), (7.0, 9.0));
    }

    #[test]
    fn test_empty_viewport() {
        let viewport = Viewport::new(0, 600);
        assert!(viewport.pointer_to_ndc(1.0, 1.0).is_none());
        assert_eq!(Viewport::new(800, 0).aspect(), 800.0);
    }
}
