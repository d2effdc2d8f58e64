//! Tool selection.

use crate::shapes::ElementKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Pick, move and resize existing elements.
    Selection,
    #[default]
    Line,
    Rectangle,
    /// Placeholder: accepted but does not draw yet.
    Pencil,
    /// Placeholder: accepted but does not draw yet.
    Text,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Selection,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Pencil,
        ToolKind::Text,
    ];

    /// The element kind this tool draws, if it draws at all.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Selection | ToolKind::Pencil | ToolKind::Text => None,
        }
    }

    pub fn is_selection(self) -> bool {
        self == ToolKind::Selection
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Selection => "Selection",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Pencil => "Pencil",
            ToolKind::Text => "Text",
        }
    }
}
