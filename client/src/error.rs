use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("failed to select inventory frame {frame}: {reason}")]
    FrameSelect { frame: u32, reason: String },

    #[error("failed to measure inventory frame {frame}: {reason}")]
    FrameSize { frame: u32, reason: String },

    #[error("failed to render {what}: {reason}")]
    Render { what: &'static str, reason: String },

    #[error("failed to create {what}: {reason}")]
    Widget { what: &'static str, reason: String },

    #[error("unknown item code '{0}'")]
    UnknownItemCode(String),

    #[error("unknown item affix '{0}'")]
    UnknownAffix(String),

    #[error("item request has no base code")]
    EmptyItemRequest,

    #[error("grid cell ({x}, {y}) cannot take the item: occupied or off the grid")]
    CellUnavailable { x: u32, y: u32 },

    #[error("inventory grid is full: placed {placed} of {requested} items")]
    GridFull { placed: usize, requested: usize },
}

pub type Result<T> = std::result::Result<T, PanelError>;
