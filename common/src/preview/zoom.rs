//! Zoom level of the preview canvas.

use super::{ARTBOARD_HEIGHT, ARTBOARD_WIDTH};

pub const MIN_ZOOM: f64 = 0.4;
pub const MAX_ZOOM: f64 = 1.0;
pub const DEFAULT_ZOOM: f64 = 0.58;

/// Space kept around the artboard when fitting it into the container.
const FIT_PADDING: f64 = 56.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl Zoom {
    pub fn new(level: f64) -> Self {
        Self {
            level: level.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn adjust(&mut self, delta: f64) {
        *self = Self::new(self.level + delta);
    }

    /// Largest zoom at which the whole artboard fits the container.
    pub fn fit(container_width: f64, container_height: f64) -> Self {
        let zoom_x = (container_width - FIT_PADDING) / ARTBOARD_WIDTH;
        let zoom_y = (container_height - FIT_PADDING) / ARTBOARD_HEIGHT;
        Self::new(zoom_x.min(zoom_y).min(MAX_ZOOM))
    }

    /// Rounded percentage for the zoom label.
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.level)
    }

    /// Full size scales from the corner so the canvas can be scrolled; smaller
    /// sizes scale around the center.
    pub fn transform_origin(&self) -> &'static str {
        if self.level >= MAX_ZOOM {
            "top left"
        } else {
            "center center"
        }
    }

    /// Scroll offsets that center the scaled artboard in the container.
    ///
    /// The wrapper keeps the unscaled artboard size. Below full size the
    /// artboard shrinks around the wrapper center, and at full size it fills
    /// the wrapper, so in both cases the artboard center is the wrapper center.
    /// An axis where the wrapper fits needs no scrolling and gets zero.
    pub fn centered_scroll(&self, container_width: f64, container_height: f64) -> (f64, f64) {
        (
            ((ARTBOARD_WIDTH - container_width) / 2.0).max(0.0),
            ((ARTBOARD_HEIGHT - container_height) / 2.0).max(0.0),
        )
    }

    /// Horizontal and vertical extent of the scaled artboard inside the wrapper.
    pub fn artboard_span(&self) -> ((f64, f64), (f64, f64)) {
        let span = |full: f64| {
            let scaled = full * self.level;
            match self.transform_origin() {
                "top left" => (0.0, scaled),
                _ => ((full - scaled) / 2.0, (full + scaled) / 2.0),
            }
        };
        (span(ARTBOARD_WIDTH), span(ARTBOARD_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zoom_is_58_percent() {
        let zoom = Zoom::default();
        assert_eq!(zoom.percent(), 58);
        assert_eq!(zoom.transform_origin(), "center center");
    }

    #[test]
    fn adjust_is_clamped() {
        let mut zoom = Zoom::default();
        for _ in 0..10 {
            zoom.adjust(0.1);
        }
        assert_eq!(zoom.level(), MAX_ZOOM);
        assert_eq!(zoom.transform_origin(), "top left");
        for _ in 0..10 {
            zoom.adjust(-0.1);
        }
        assert_eq!(zoom.level(), MIN_ZOOM);
    }

    #[test]
    fn fit_uses_tighter_axis() {
        let zoom = Zoom::fit(656.0, 2000.0);
        assert!((zoom.level() - 0.6).abs() < 1e-9);

        assert_eq!(Zoom::fit(3000.0, 3000.0).level(), MAX_ZOOM);
        assert_eq!(Zoom::fit(100.0, 100.0).level(), MIN_ZOOM);
    }

    fn assert_artboard_visible(zoom: Zoom, container_width: f64, container_height: f64) {
        let (left, top) = zoom.centered_scroll(container_width, container_height);
        let ((x0, x1), (y0, y1)) = zoom.artboard_span();
        assert!(x0 >= left && x1 <= left + container_width, "x [{x0}, {x1}] outside view at {left}");
        assert!(y0 >= top && y1 <= top + container_height, "y [{y0}, {y1}] outside view at {top}");
        let view_center = (left + container_width / 2.0, top + container_height / 2.0);
        assert!(((x0 + x1) / 2.0 - view_center.0).abs() < 1e-9);
        assert!(((y0 + y1) / 2.0 - view_center.1).abs() < 1e-9);
    }

    #[test]
    fn centering_below_full_size_follows_center_origin() {
        let zoom = Zoom::default();
        assert_eq!(zoom.transform_origin(), "center center");
        assert_eq!(zoom.centered_scroll(600.0, 800.0), (200.0, 250.0));
        assert_artboard_visible(zoom, 600.0, 800.0);
        assert_artboard_visible(Zoom::new(MIN_ZOOM), 500.0, 600.0);
    }

    #[test]
    fn centering_at_full_size_follows_corner_origin() {
        let zoom = Zoom::new(1.0);
        assert_eq!(zoom.transform_origin(), "top left");
        assert_eq!(zoom.centered_scroll(800.0, 1400.0), (100.0, 0.0));
        let ((x0, x1), _) = zoom.artboard_span();
        assert_eq!((x0, x1), (0.0, 1000.0));
        assert_artboard_visible(zoom, 1000.0, 1300.0);
    }

    #[test]
    fn no_scroll_when_wrapper_fits() {
        assert_eq!(Zoom::default().centered_scroll(1200.0, 1500.0), (0.0, 0.0));
    }
}
