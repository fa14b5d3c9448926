//! Heart icons marking the start and the exit of the maze

use crate::canvas::{Canvas, CubicBezier, Point};
use crate::colors::Rgb;

/// Where the heart sits relative to the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum IconPlacement {
    Center,
    TopBorder,
    RightBorder,
    BottomBorder,
    LeftBorder,
}

/// Heart drawn on grid coordinates
///
/// `col` and `row` may lie one step outside of the grid for exit hearts.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Heart {
    pub col: i32,
    pub row: i32,
    pub size: f64,
    pub placement: IconPlacement,
}

impl Heart {
    const WIDTH_ADJUSTMENT: f64 = 0.6;

    pub fn new(col: i32, row: i32, size: f64, placement: IconPlacement) -> Self {
        Self {
            col,
            row,
            size,
            placement,
        }
    }

    /// Center point of the heart
    ///
    /// Border hearts move half a cell further out from the grid.
    pub fn center(&self) -> Point {
        let half = self.size / 2.0;
        let x = self.col as f64 * self.size;
        let y = self.row as f64 * self.size;
        let (x, y) = match self.placement {
            IconPlacement::Center => (x, y),
            IconPlacement::TopBorder => (x, y - half),
            IconPlacement::RightBorder => (x + half, y),
            IconPlacement::BottomBorder => (x, y + half),
            IconPlacement::LeftBorder => (x - half, y),
        };
        Point::new(x + half, y + half)
    }

    /// Outline as a start point and two mirrored cubic curves
    ///
    /// The path runs from the top notch down the left side to the bottom
    /// point and back up the right side.
    pub fn outline(&self, origin: Point) -> (Point, [CubicBezier; 2]) {
        let size = self.size;
        let half = size / 2.0;
        let quarter = size / 4.0;
        let lift = 0.4 * quarter;
        let c = self.center();
        let (cx, cy) = (origin.x + c.x, origin.y + c.y);

        let notch = Point::new(cx, cy - quarter - lift);
        let bottom = Point::new(cx, cy + half - lift);
        let left = CubicBezier {
            control1: Point::new(cx - half * Self::WIDTH_ADJUSTMENT, cy - half - lift),
            control2: Point::new(cx - size, cy - lift),
            end: bottom,
        };
        let right = CubicBezier {
            control1: Point::new(cx + size, cy - lift),
            control2: Point::new(cx + half * Self::WIDTH_ADJUSTMENT, cy - half - lift),
            end: notch,
        };
        (notch, [left, right])
    }

    /// Draw the heart with grid coordinates shifted by `origin`
    pub fn draw(&self, canvas: &mut impl Canvas, origin: Point, color: Rgb) {
        let (start, curves) = self.outline(origin);
        canvas.fill_bezier_path(start, &curves, color);
    }
}

#[cfg(test)]
mod tests {
    use super::{Heart, IconPlacement};
    use crate::canvas::Point;

    #[test]
    fn center_heart_sits_in_its_cell() {
        let heart = Heart::new(2, 3, 10.0, IconPlacement::Center);
        assert_eq!(heart.center(), Point::new(25.0, 35.0));
    }

    #[test]
    fn border_hearts_move_outwards() {
        let left = Heart::new(-1, 2, 10.0, IconPlacement::LeftBorder);
        assert_eq!(left.center(), Point::new(-10.0, 25.0));

        let right = Heart::new(4, 2, 10.0, IconPlacement::RightBorder);
        assert_eq!(right.center(), Point::new(50.0, 25.0));

        let top = Heart::new(1, -1, 10.0, IconPlacement::TopBorder);
        assert_eq!(top.center(), Point::new(15.0, -10.0));

        let bottom = Heart::new(1, 4, 10.0, IconPlacement::BottomBorder);
        assert_eq!(bottom.center(), Point::new(15.0, 50.0));
    }

    #[test]
    fn outline_is_closed_and_symmetric() {
        let heart = Heart::new(0, 0, 8.0, IconPlacement::Center);
        let (start, [left, right]) = heart.outline(Point::new(100.0, 100.0));

        assert_eq!(right.end, start);
        assert_eq!(left.end.x, start.x);
        assert!(left.end.y > start.y);

        let axis = start.x;
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(axis - left.control1.x, right.control2.x - axis));
        assert!(close(left.control1.y, right.control2.y));
        assert!(close(axis - left.control2.x, right.control1.x - axis));
        assert!(close(left.control2.y, right.control1.y));
    }
}
