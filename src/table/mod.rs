//! Virtual table engine: the row/column model over an ordered collection and the
//! headless grid state driven by it.

pub mod model;
pub mod records;
pub mod view;

pub use model::{
    CellValue, ColumnDescriptor, ColumnKind, EditorKind, RejectedWrite, RowsDelta, TableRecord,
    VirtualTableModel,
};
pub use records::{ActionInsert, ActionInsertPolicy, RosterInsertPolicy};
pub use view::{
    CellEdit, ContextMenu, InsertOutcome, InsertPolicy, MenuCommand, MenuItem, SelectionChanged, TableEvent,
    TableView,
};
