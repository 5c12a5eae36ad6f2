use glam::Vec2;
use proto::DrawRect;

/// Axis-aligned rectangle with a top-left origin and y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

impl From<Rect> for DrawRect {
    fn from(rect: Rect) -> Self {
        DrawRect {
            x: rect.pos.x,
            y: rect.pos.y,
            w: rect.size.x,
            h: rect.size.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(40.0, 250.0, 20.0, 100.0);
        assert_eq!(rect.left(), 40.0);
        assert_eq!(rect.right(), 60.0);
        assert_eq!(rect.top(), 250.0);
        assert_eq!(rect.bottom(), 350.0);
        assert_eq!(rect.center(), Vec2::new(50.0, 300.0));
    }

    #[test]
    fn test_rect_set_center() {
        let mut rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        rect.set_center(Vec2::new(400.0, 300.0));
        assert_eq!(rect.pos, Vec2::new(390.0, 290.0));
        assert_eq!(
            Rect::from_center_size(Vec2::new(400.0, 300.0), Vec2::splat(20.0)),
            rect
        );
    }

    #[test]
    fn test_rect_overlap() {
        let paddle = Rect::new(40.0, 250.0, 20.0, 100.0);
        assert!(paddle.overlaps(&Rect::new(55.0, 290.0, 20.0, 20.0)));
        assert!(!paddle.overlaps(&Rect::new(100.0, 290.0, 20.0, 20.0)));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let paddle = Rect::new(40.0, 250.0, 20.0, 100.0);
        assert!(!paddle.overlaps(&Rect::new(60.0, 290.0, 20.0, 20.0)));
        assert!(!paddle.overlaps(&Rect::new(45.0, 350.0, 20.0, 20.0)));
    }
}
