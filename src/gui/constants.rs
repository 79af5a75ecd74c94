//! GUI-specific constants for layout and status colors

use egui::Color32;

/// Smallest usable window
pub const WINDOW_MIN_WIDTH: f32 = 960.0;
pub const WINDOW_MIN_HEIGHT: f32 = 640.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Panel geometry
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const FEATURE_PANEL_WIDTH: f32 = 260.0;

/// Project status colors
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(0, 160, 70);
pub const STATUS_PLANNING: Color32 = Color32::from_rgb(200, 160, 0);
pub const STATUS_COMPLETED: Color32 = Color32::from_rgb(90, 90, 200);
pub const STATUS_ON_HOLD: Color32 = Color32::from_rgb(200, 60, 40);
