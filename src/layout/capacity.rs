//! Page capacity estimation from fixed page geometry
//!
//! The estimate counts logical lines, not rendered pixels. It trades
//! visual precision for determinism: actual rendered content may overflow
//! a page slightly, which is accepted.

/// A4 page height.
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Fixed top + bottom allowance (margins, padding, footer strip).
pub const MARGIN_ALLOWANCE_MM: f32 = 50.0;

/// Base font size of the page body.
pub const FONT_SIZE_PX: f32 = 16.0;

/// CSS line-height multiplier of the page body.
pub const LINE_HEIGHT_MULTIPLIER: f32 = 1.5;

/// CSS reference pixel at 96 dpi, in millimetres.
pub const PX_TO_MM: f32 = 25.4 / 96.0;

/// Fixed page geometry; the configuration surface of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub page_height_mm: f32,
    pub margin_allowance_mm: f32,
    pub font_size_px: f32,
    pub line_height_multiplier: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            page_height_mm: PAGE_HEIGHT_MM,
            margin_allowance_mm: MARGIN_ALLOWANCE_MM,
            font_size_px: FONT_SIZE_PX,
            line_height_multiplier: LINE_HEIGHT_MULTIPLIER,
        }
    }
}

impl PageMetrics {
    /// Content height left after the margin allowance.
    pub fn usable_height_mm(&self) -> f32 {
        self.page_height_mm - self.margin_allowance_mm
    }

    /// Height of one source line at the configured font metrics.
    pub fn line_height_mm(&self) -> f32 {
        self.font_size_px * self.line_height_multiplier * PX_TO_MM
    }

    /// Derive the capacity model for one pagination pass.
    ///
    /// Clamped to at least one line per page so degenerate configuration
    /// can never produce an infinite pagination loop.
    pub fn capacity(&self) -> CapacityModel {
        let usable_height_mm = self.usable_height_mm();
        let line_height_mm = self.line_height_mm();
        let raw = if line_height_mm > 0.0 {
            (usable_height_mm / line_height_mm).floor() as i64
        } else {
            0
        };
        CapacityModel {
            usable_height_mm,
            line_height_mm,
            max_lines_per_page: raw.max(1) as usize,
        }
    }
}

/// Derived capacity for one layout pass; recomputed each pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityModel {
    pub usable_height_mm: f32,
    pub line_height_mm: f32,
    pub max_lines_per_page: usize,
}
