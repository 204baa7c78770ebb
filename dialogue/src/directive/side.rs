use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the three conversational roles a message can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Center];

    /// Map a message operator (`<`, `>`, `=`) to its side.
    pub fn from_operator(operator: char) -> Option<Side> {
        match operator {
            '<' => Some(Side::Left),
            '>' => Some(Side::Right),
            '=' => Some(Side::Center),
            _ => None,
        }
    }

    pub fn operator(self) -> char {
        match self {
            Side::Left => '<',
            Side::Right => '>',
            Side::Center => '=',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Center => "center",
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Center => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value per side. Keeps side → record selection in one place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BySide<T> {
    values: [T; 3],
}

impl<T> BySide<T> {
    pub fn new(left: T, right: T, center: T) -> Self {
        BySide {
            values: [left, right, center],
        }
    }

    /// Build a value for every side from a constructor.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        BySide::new(f(Side::Left), f(Side::Right), f(Side::Center))
    }
}

impl<T> Index<Side> for BySide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.values[side.index()]
    }
}

impl<T> IndexMut<Side> for BySide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.values[side.index()]
    }
}
