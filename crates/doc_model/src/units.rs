//! Page geometry, language codes, and measurement conversions
//!
//! RTF control words take twips (1/20 point). The public model API speaks
//! points and converts at the edge.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Twips per point.
pub const TWIPS_PER_POINT: f32 = 20.0;

/// Convert points to twips, rounded to the nearest twip.
pub fn points_to_twips(points: f32) -> i32 {
    (points * TWIPS_PER_POINT).round() as i32
}

/// Convert points to half-points (the unit of `\fs`).
pub fn points_to_half_points(points: f32) -> i32 {
    (points * 2.0).round() as i32
}

// =============================================================================
// Paper Size & Orientation
// =============================================================================

/// Supported paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    #[default]
    A4,
    A3,
    Letter,
}

impl PaperSize {
    /// Portrait dimensions in twips: (width, height).
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            PaperSize::A4 => (11906, 16838),
            PaperSize::A3 => (16838, 23811),
            PaperSize::Letter => (12240, 15840),
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperOrientation {
    #[default]
    Portrait,
    Landscape,
}

/// Paper dimensions in twips after applying the orientation.
pub fn paper_dimensions(size: PaperSize, orientation: PaperOrientation) -> (i32, i32) {
    let (w, h) = size.dimensions();
    match orientation {
        PaperOrientation::Portrait => (w, h),
        PaperOrientation::Landscape => (h, w),
    }
}

// =============================================================================
// Language
// =============================================================================

/// Windows locale identifiers for the document default language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lcid {
    #[default]
    English,
    French,
    German,
    Italian,
    Japanese,
    Korean,
    Russian,
    Spanish,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Lcid {
    /// The numeric LCID emitted after `\deflang`.
    pub fn code(&self) -> u32 {
        match self {
            Lcid::English => 1033,
            Lcid::French => 1036,
            Lcid::German => 1031,
            Lcid::Italian => 1040,
            Lcid::Japanese => 1041,
            Lcid::Korean => 1042,
            Lcid::Russian => 1049,
            Lcid::Spanish => 3082,
            Lcid::SimplifiedChinese => 2052,
            Lcid::TraditionalChinese => 1028,
        }
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Edge selector for margins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// Per-edge margins in points, indexable by [`Direction`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// Uniform margins on all four edges.
    pub fn uniform(points: f32) -> Self {
        Self {
            top: points,
            right: points,
            bottom: points,
            left: points,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        // One inch on every side
        Self::uniform(72.0)
    }
}

impl Index<Direction> for Margins {
    type Output = f32;

    fn index(&self, direction: Direction) -> &f32 {
        match direction {
            Direction::Top => &self.top,
            Direction::Right => &self.right,
            Direction::Bottom => &self.bottom,
            Direction::Left => &self.left,
        }
    }
}

impl IndexMut<Direction> for Margins {
    fn index_mut(&mut self, direction: Direction) -> &mut f32 {
        match direction {
            Direction::Top => &mut self.top,
            Direction::Right => &mut self.right,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
