use serde::{Deserialize, Serialize};

/// Canvas coordinates of a node. Only used for layout, never by validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Side of a node where connections attach on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// Optional connection-side hints attached to a node at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutHints {
    pub source: Option<HandleSide>,
    pub target: Option<HandleSide>,
}

impl LayoutHints {
    /// Top-to-bottom flow: incoming on top, outgoing at the bottom.
    pub fn vertical() -> Self {
        Self {
            source: Some(HandleSide::Bottom),
            target: Some(HandleSide::Top),
        }
    }

    /// Left-to-right flow.
    pub fn horizontal() -> Self {
        Self {
            source: Some(HandleSide::Right),
            target: Some(HandleSide::Left),
        }
    }
}
