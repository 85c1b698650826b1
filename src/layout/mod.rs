//! Page layout: capacity estimation and line chunking

mod capacity;
mod paginate;

pub use capacity::{
    CapacityModel, PageMetrics, FONT_SIZE_PX, LINE_HEIGHT_MULTIPLIER, MARGIN_ALLOWANCE_MM,
    PAGE_HEIGHT_MM, PX_TO_MM,
};
pub use paginate::{paginate, PageChunk};
