//! Editor-wide constants.
//!
//! Centralizes magic numbers and layout values so the scene store, the
//! gesture controller and the settings defaults agree on them.

// ============================================================================
// Canvas Layout
// ============================================================================

/// Default canvas width in canvas units
pub const DEFAULT_CANVAS_WIDTH: f32 = 960.0;

/// Default canvas height in canvas units
pub const DEFAULT_CANVAS_HEIGHT: f32 = 640.0;

/// Gap kept between a node and every canvas edge when clamping
pub const CANVAS_MARGIN: f32 = 8.0;

// ============================================================================
// Node Sizes
// ============================================================================

/// Rectangle-shaped entities
pub const ENTITY_SIZE: (f32, f32) = (140.0, 56.0);

/// Diamond-shaped relationships
pub const RELATIONSHIP_SIZE: (f32, f32) = (132.0, 80.0);

/// Ellipse-shaped attributes
pub const ATTRIBUTE_SIZE: (f32, f32) = (128.0, 52.0);

/// Triangle used for ISA hierarchies
pub const ISA_SIZE: (f32, f32) = (84.0, 72.0);

// ============================================================================
// Gestures
// ============================================================================

/// Pointer distance at which a press counts as hitting a connection anchor
pub const DEFAULT_ANCHOR_RADIUS: f32 = 10.0;

/// Pointer distance within which the nearest anchor is highlighted
pub const ANCHOR_HINT_DISTANCE: f32 = 60.0;

/// Offset applied to both axes when duplicating a node
pub const DEFAULT_DUPLICATE_OFFSET: f32 = 40.0;

/// Offset from the drop point to a palette node's top-left corner
pub const PALETTE_DROP_OFFSET: (f32, f32) = (60.0, 30.0);

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;
