//! Parent bounds contract

use std::cell::Cell;

use crate::math::Rect;

/// Supplies the rectangle a maximized window expands to fill
pub trait BoundsProvider {
    fn parent_bounds(&self) -> Rect;
}

/// Fixed bounds
impl BoundsProvider for Rect {
    fn parent_bounds(&self) -> Rect {
        *self
    }
}

/// Bounds that follow screen resizes: the owner calls `set` when the parent
/// panel changes size
impl BoundsProvider for Cell<Rect> {
    fn parent_bounds(&self) -> Rect {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bounds_track_updates() {
        let bounds = Cell::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(bounds.parent_bounds().width, 800.0);

        bounds.set(Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(bounds.parent_bounds(), Rect::new(0.0, 0.0, 1024.0, 768.0));
    }
}
