use crate::collection::OrderedCollection;
use std::fmt;

/// Closed set of cell editor kinds. A write is accepted only when the value's kind
/// equals the column's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Choice,
    FreeText,
    BoundedInteger,
    Boolean,
}

/// Column kind together with its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Choice(&'static [&'static str]),
    FreeText,
    BoundedInteger { min: i64, max: i64 },
    Boolean,
}

impl ColumnKind {
    pub fn tag(&self) -> EditorKind {
        match self {
            ColumnKind::Choice(_) => EditorKind::Choice,
            ColumnKind::FreeText => EditorKind::FreeText,
            ColumnKind::BoundedInteger { .. } => EditorKind::BoundedInteger,
            ColumnKind::Boolean => EditorKind::Boolean,
        }
    }

    fn validate(&self, value: &CellValue) -> Result<(), RejectedWrite> {
        match (self, value) {
            (ColumnKind::Choice(options), CellValue::Choice(s)) => {
                if options.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(RejectedWrite::InvalidChoice(s.clone()))
                }
            }
            (ColumnKind::BoundedInteger { min, max }, CellValue::Integer(v)) => {
                if (*min..=*max).contains(v) {
                    Ok(())
                } else {
                    Err(RejectedWrite::OutOfRange {
                        value: *v,
                        min: *min,
                        max: *max,
                    })
                }
            }
            _ => Ok(()),
        }
    }
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDescriptor {
    pub label: &'static str,
    pub key: &'static str,
    pub kind: ColumnKind,
    pub editable: bool,
    /// Initial width in points.
    pub width: f32,
    /// The one column that absorbs leftover width on resize.
    pub flexible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Choice(String),
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl CellValue {
    pub fn kind(&self) -> EditorKind {
        match self {
            CellValue::Choice(_) => EditorKind::Choice,
            CellValue::Text(_) => EditorKind::FreeText,
            CellValue::Integer(_) => EditorKind::BoundedInteger,
            CellValue::Bool(_) => EditorKind::Boolean,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Choice(s) | CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Why a cell write was not applied. The displayed value stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectedWrite {
    #[error("the trailing row is not a real row yet")]
    TrailingRow,
    #[error("row {0} does not exist")]
    NoSuchRow(usize),
    #[error("column {0} does not exist")]
    NoSuchColumn(usize),
    #[error("column {column} expects {expected:?}, got {got:?}")]
    KindMismatch {
        column: &'static str,
        expected: EditorKind,
        got: EditorKind,
    },
    #[error("column {0} is read-only")]
    ReadOnly(&'static str),
    #[error("{0:?} is not one of the allowed values")]
    InvalidChoice(String),
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("{value} {unit} exceeds capacity {capacity}")]
    ExceedsCapacity {
        unit: String,
        value: u32,
        capacity: u32,
    },
    #[error("unknown army unit {0:?}")]
    UnknownUnit(String),
}

/// Row type that knows how to present itself as table cells.
pub trait TableRecord {
    fn schema() -> &'static [ColumnDescriptor];

    fn cell(&self, col: usize) -> CellValue;

    /// Value shown in the trailing add row.
    fn placeholder(col: usize) -> CellValue;

    /// Apply an already kind-checked and range-checked value.
    fn write_cell(&mut self, col: usize, value: CellValue) -> Result<(), RejectedWrite>;
}

/// Change in row count since the view last looked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsDelta {
    Unchanged,
    Appended(usize),
    Removed { at: usize, count: usize },
}

/// Grid-shaped view over an ordered collection: `len + 1` rows, the last of which
/// is the synthetic add row.
pub struct VirtualTableModel<'a, T> {
    data: &'a mut OrderedCollection<T>,
}

impl<'a, T: TableRecord> VirtualTableModel<'a, T> {
    pub fn new(data: &'a mut OrderedCollection<T>) -> Self {
        Self { data }
    }

    pub fn row_count(&self) -> usize {
        self.data.len() + 1
    }

    pub fn is_trailing_row(&self, row: usize) -> bool {
        row == self.data.len()
    }

    pub fn schema(&self) -> &'static [ColumnDescriptor] {
        T::schema()
    }

    /// Cell value, or the column placeholder for the trailing row.
    /// Out-of-range cells also read as placeholders.
    pub fn cell(&self, row: usize, col: usize) -> CellValue {
        match self.data.get(row) {
            Some(item) => item.cell(col),
            None => T::placeholder(col),
        }
    }

    pub fn can_accept(&self, row: usize, col: usize, kind: EditorKind) -> bool {
        row < self.row_count() && T::schema().get(col).is_some_and(|c| c.kind.tag() == kind)
    }

    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> Result<(), RejectedWrite> {
        let column = T::schema()
            .get(col)
            .ok_or(RejectedWrite::NoSuchColumn(col))?;
        if self.is_trailing_row(row) {
            return Err(RejectedWrite::TrailingRow);
        }
        let item = self
            .data
            .get_mut(row)
            .ok_or(RejectedWrite::NoSuchRow(row))?;
        if value.kind() != column.kind.tag() {
            return Err(RejectedWrite::KindMismatch {
                column: column.key,
                expected: column.kind.tag(),
                got: value.kind(),
            });
        }
        if !column.editable {
            return Err(RejectedWrite::ReadOnly(column.key));
        }
        column.kind.validate(&value)?;
        item.write_cell(col, value)
    }

    pub fn structural_delta(&self, previous_rows: usize) -> RowsDelta {
        let current = self.row_count();
        if current > previous_rows {
            RowsDelta::Appended(current - previous_rows)
        } else if current < previous_rows {
            RowsDelta::Removed {
                at: current,
                count: previous_rows - current,
            }
        } else {
            RowsDelta::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, EditorKind, RejectedWrite, RowsDelta, VirtualTableModel};
    use crate::collection::OrderedCollection;
    use crate::model::{Action, ActionKind};
    use crate::statics;

    fn actions(kinds: &[ActionKind]) -> OrderedCollection<Action> {
        kinds.iter().copied().map(Action::new).collect()
    }

    #[test]
    fn trailing_row_reads_placeholders_for_any_length() {
        for n in 0..4 {
            let mut data = actions(&vec![ActionKind::Move; n]);
            let model = VirtualTableModel::new(&mut data);
            assert_eq!(model.row_count(), n + 1);
            assert_eq!(
                model.cell(n, 0),
                CellValue::Choice(statics::EN_PLACEHOLDER_ADD_ROW.to_string())
            );
            assert_eq!(model.cell(n, 2), CellValue::Integer(0));
            assert_eq!(model.cell(n, 3), CellValue::Bool(false));
        }
    }

    #[test]
    fn trailing_row_write_is_rejected_without_inserting() {
        let mut data = actions(&[ActionKind::Load]);
        let mut model = VirtualTableModel::new(&mut data);
        assert_eq!(
            model.set_cell(1, 3, CellValue::Bool(false)),
            Err(RejectedWrite::TrailingRow)
        );
        assert_eq!(model.row_count(), 2);
    }

    #[test]
    fn kind_mismatch_is_rejected_not_coerced() {
        let mut data = actions(&[ActionKind::Load]);
        let mut model = VirtualTableModel::new(&mut data);
        assert!(!model.can_accept(0, 2, EditorKind::FreeText));
        assert!(model.can_accept(0, 2, EditorKind::BoundedInteger));
        let err = model
            .set_cell(0, 2, CellValue::Text("12".to_string()))
            .unwrap_err();
        assert!(matches!(err, RejectedWrite::KindMismatch { .. }));
        assert_eq!(model.cell(0, 2), CellValue::Integer(0));
    }

    #[test]
    fn range_choice_and_read_only_checks() {
        let mut data = actions(&[ActionKind::Load]);
        let mut model = VirtualTableModel::new(&mut data);
        assert!(matches!(
            model.set_cell(0, 2, CellValue::Integer(-1)),
            Err(RejectedWrite::OutOfRange { .. })
        ));
        assert!(matches!(
            model.set_cell(0, 0, CellValue::Choice("fly".to_string())),
            Err(RejectedWrite::InvalidChoice(_))
        ));
        assert!(matches!(
            model.set_cell(0, 1, CellValue::Text("x".to_string())),
            Err(RejectedWrite::ReadOnly(_))
        ));
        model
            .set_cell(0, 0, CellValue::Choice("attack".to_string()))
            .unwrap();
        model.set_cell(0, 2, CellValue::Integer(15)).unwrap();
        assert_eq!(model.cell(0, 0), CellValue::Choice("attack".to_string()));
        assert_eq!(model.cell(0, 2), CellValue::Integer(15));
    }

    #[test]
    fn structural_delta_reports_appended_and_removed() {
        let mut data = actions(&[ActionKind::Load, ActionKind::Move]);
        let model = VirtualTableModel::new(&mut data);
        assert_eq!(model.structural_delta(3), RowsDelta::Unchanged);
        assert_eq!(model.structural_delta(1), RowsDelta::Appended(2));
        assert_eq!(
            model.structural_delta(5),
            RowsDelta::Removed { at: 3, count: 2 }
        );
    }
}
