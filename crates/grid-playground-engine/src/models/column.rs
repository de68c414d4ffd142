use serde::Serialize;
use uuid::Uuid;

use crate::models::{Breakpoint, Height, Offset, OrderToken, PerBreakpoint, WidthToken};

/// Number of distinct cosmetic column colors
pub const COLOR_COUNT: u8 = 8;

/// Stable identifier for a column, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnId(pub Uuid);

impl ColumnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single grid cell with per-breakpoint sizing, offset and ordering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    id: ColumnId,
    color_index: u8,
    height: Option<Height>,
    widths: PerBreakpoint<Option<WidthToken>>,
    offsets: PerBreakpoint<Option<Offset>>,
    orders: PerBreakpoint<Option<OrderToken>>,
}

impl Column {
    /// Create an unconfigured column. The color index wraps into `0..8`.
    pub fn new(color_index: u8) -> Self {
        Self {
            id: ColumnId::new(),
            color_index: color_index % COLOR_COUNT,
            height: None,
            widths: PerBreakpoint::default(),
            offsets: PerBreakpoint::default(),
            orders: PerBreakpoint::default(),
        }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn color_index(&self) -> u8 {
        self.color_index
    }

    pub fn height(&self) -> Option<&Height> {
        self.height.as_ref()
    }

    pub fn widths(&self) -> &PerBreakpoint<Option<WidthToken>> {
        &self.widths
    }

    pub fn offsets(&self) -> &PerBreakpoint<Option<Offset>> {
        &self.offsets
    }

    pub fn orders(&self) -> &PerBreakpoint<Option<OrderToken>> {
        &self.orders
    }

    /// The width in force at `bp`: the explicit value there, otherwise the
    /// nearest explicit value below it. `None` when nothing at or below `bp`
    /// is set, i.e. no width class applies at all.
    pub fn effective_width(&self, bp: Breakpoint) -> Option<WidthToken> {
        let mut current = Some(bp);
        while let Some(bp) = current {
            if let Some(token) = self.widths[bp] {
                return Some(token);
            }
            current = bp.below();
        }
        None
    }

    pub fn set_width(&mut self, bp: Breakpoint, width: Option<WidthToken>) -> &mut Self {
        self.widths[bp] = width;
        self
    }

    pub fn set_offset(&mut self, bp: Breakpoint, offset: Option<Offset>) -> &mut Self {
        self.offsets[bp] = offset;
        self
    }

    pub fn set_order(&mut self, bp: Breakpoint, order: Option<OrderToken>) -> &mut Self {
        self.orders[bp] = order;
        self
    }

    pub fn set_height(&mut self, height: Option<Height>) -> &mut Self {
        self.height = height;
        self
    }
}
