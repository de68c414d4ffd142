pub mod breakpoint;
pub mod column;
pub mod row;
pub mod tokens;

pub use breakpoint::{Breakpoint, PerBreakpoint};
pub use column::{COLOR_COUNT, Column, ColumnId};
pub use row::{MAX_COLUMNS, Row, RowId};
pub use tokens::*;
