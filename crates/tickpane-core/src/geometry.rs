use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Pos<T>, size: Size<T>) -> Self {
        Rect {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn pos(&self) -> Pos<T> {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl<T> Rect<T>
where
    T: Copy + PartialOrd + Default,
{
    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= T::default() || self.height <= T::default()
    }
}

impl Rect<i32> {
    /// Half-open containment: the right and bottom edges are outside.
    ///
    /// Far edges saturate at `i32::MAX`.
    pub fn contains(&self, pos: Pos<i32>) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && pos.x < self.x.saturating_add(self.width)
            && pos.y < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub const fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl<T: Sub<Output = T>> Sub for Pos<T> {
    type Output = Pos<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Pos {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
