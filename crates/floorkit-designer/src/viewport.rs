//! Viewport and coordinate transformation for the floor map.
//!
//! Machine positions are stored as percentages of the map area; pointer
//! input and rendering work in pixels relative to the map's top-left
//! corner. Conversions are pure functions of the current viewport size and
//! never clamp: a percentage below 0 or above 100 maps to a pixel outside
//! the visible area and back again.

use floorkit_core::constants::{EXTENT_MIN_FACTOR, EXTENT_PADDING_PX, MIN_VIEWPORT_HEIGHT_PX};
use floorkit_core::EditorError;

/// A point in map-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise sum.
    pub fn offset_by(&self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

/// A position in percent of the map area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percent {
    pub x: f64,
    pub y: f64,
}

impl Percent {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a percentage along one axis to pixels.
pub fn to_pixel(percent: f64, axis_size: f64) -> f64 {
    percent / 100.0 * axis_size
}

/// Converts pixels along one axis to a percentage rounded to two decimals.
///
/// A non-positive axis size has no meaningful mapping and yields 0.
pub fn to_percent(pixel: f64, axis_size: f64) -> f64 {
    if axis_size <= 0.0 {
        return 0.0;
    }
    round2(pixel / axis_size * 100.0)
}

/// Size of the map area plus the view-only pan offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates a viewport of the given pixel size.
    ///
    /// Both dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, EditorError> {
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            pan_x: 0.0,
            pan_y: 0.0,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Resizes the map area, keeping the pan offset.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), EditorError> {
        validate_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Pixel position of a stored percentage position.
    pub fn percent_to_pixel(&self, percent: Percent) -> Point {
        Point::new(
            to_pixel(percent.x, self.width),
            to_pixel(percent.y, self.height),
        )
    }

    /// Percentage position of a pixel, rounded to two decimals.
    pub fn pixel_to_percent(&self, point: Point) -> Percent {
        Percent::new(
            to_percent(point.x, self.width),
            to_percent(point.y, self.height),
        )
    }

    /// Gets the pan offset. It is a rendering transform only.
    pub fn pan_offset(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to the origin.
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

fn validate_size(width: f64, height: f64) -> Result<(), EditorError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(EditorError::InvalidViewport { width, height })
    }
}

/// Parameters of the scrollable-extent calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentOptions {
    /// Floor for the base height, in pixels.
    pub min_base_height: f64,
    /// Margin kept above the highest and below the lowest machine, in pixels.
    pub padding: f64,
    /// The extent never drops below this multiple of the base height.
    pub min_factor: f64,
}

impl Default for ExtentOptions {
    fn default() -> Self {
        Self {
            min_base_height: MIN_VIEWPORT_HEIGHT_PX,
            padding: EXTENT_PADDING_PX,
            min_factor: EXTENT_MIN_FACTOR,
        }
    }
}

fn y_bounds(ys: impl IntoIterator<Item = f64>) -> (f64, f64) {
    ys.into_iter()
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
        .unwrap_or((0.0, 100.0))
}

fn top_margin(min_y: f64, vh: f64, options: &ExtentOptions) -> f64 {
    min_y.min(0.0).abs() / 100.0 * vh + options.padding
}

/// Space reserved above the map origin, in pixels.
///
/// Covers the overshoot of machines above the top edge plus padding. Drawing
/// the map this far down keeps those machines inside the extent.
pub fn required_top_margin(
    ys: impl IntoIterator<Item = f64>,
    base_height: f64,
    options: &ExtentOptions,
) -> f64 {
    let (min_y, _) = y_bounds(ys);
    top_margin(min_y, base_height.max(options.min_base_height), options).ceil()
}

/// Minimum map height that keeps every machine reachable by scrolling.
///
/// `ys` are the machines' y percentages. Machines above the top edge or
/// below the bottom edge grow the extent by their overshoot plus padding.
pub fn required_min_height(
    ys: impl IntoIterator<Item = f64>,
    base_height: f64,
    options: &ExtentOptions,
) -> f64 {
    let (min_y, max_y) = y_bounds(ys);

    let vh = base_height.max(options.min_base_height);
    let top = top_margin(min_y, vh, options);
    let bottom = (max_y.max(100.0) - 100.0) / 100.0 * vh + options.padding;

    (vh + top + bottom).max(options.min_factor * vh).ceil()
}
