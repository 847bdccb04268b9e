//! Viewport width in logical pixels.
//!
//! The drawer policy is expressed against a pixel breakpoint. A terminal
//! reports columns, so its width is scaled by a nominal cell width.

/// Width at and above which the drawer stays open.
pub const DEFAULT_BREAKPOINT: u32 = 1024;

/// Nominal width of one terminal cell in logical pixels.
pub const DEFAULT_CELL_WIDTH: u16 = 8;

/// Width of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Viewport for a terminal `columns` wide.
    pub fn from_columns(columns: u16, cell_width: u16) -> Self {
        Self::new(u32::from(columns) * u32::from(cell_width))
    }

    /// Whether this viewport is wide enough to keep the drawer open.
    pub fn is_wide(&self, breakpoint: u32) -> bool {
        self.width >= breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns() {
        assert_eq!(Viewport::from_columns(128, 8).width, 1024);
        assert_eq!(Viewport::from_columns(80, 8).width, 640);
    }

    #[test]
    fn test_breakpoint_inclusive() {
        assert!(Viewport::new(1024).is_wide(DEFAULT_BREAKPOINT));
        assert!(!Viewport::new(1023).is_wide(DEFAULT_BREAKPOINT));
    }
}
