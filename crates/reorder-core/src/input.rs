use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Up,
    Move,
    /// The platform took the pointer away (e.g. a system gesture).
    Cancel,
}

/// One sample of the pointer stream, positioned in the shared (global)
/// coordinate space.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            event,
            position,
        }
    }

    pub fn down(position: Vec2) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Vec2) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Vec2) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel(position: Vec2) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
