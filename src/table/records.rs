//! Column tables and insert policies for the two concrete grids: the actions table and
//! the adventure's general roster.

use super::model::{CellValue, ColumnDescriptor, ColumnKind, RejectedWrite, TableRecord};
use super::view::{InsertOutcome, InsertPolicy};
use crate::catalog::Catalog;
use crate::collection::OrderedCollection;
use crate::model::{Action, ActionKind, General};
use crate::statics;
use std::sync::Arc;

pub const ACTION_COL_TYPE: usize = 0;
pub const ACTION_COL_GENERALS: usize = 1;
pub const ACTION_COL_DELAY: usize = 2;
pub const ACTION_COL_ACTIVE: usize = 3;

static ACTION_COLUMNS: [ColumnDescriptor; 4] = [
    ColumnDescriptor {
        label: statics::EN_COL_TYPE,
        key: statics::ADV_KEY_TYPE,
        kind: ColumnKind::Choice(statics::ADV_ACTION_KINDS),
        editable: true,
        width: 80.0,
        flexible: false,
    },
    ColumnDescriptor {
        label: statics::EN_COL_GENERALS,
        key: statics::ADV_KEY_GENERALS,
        kind: ColumnKind::FreeText,
        editable: false,
        width: 200.0,
        flexible: true,
    },
    ColumnDescriptor {
        label: statics::EN_COL_DELAY,
        key: statics::ADV_KEY_DELAY,
        kind: ColumnKind::BoundedInteger {
            min: 0,
            max: statics::ADV_MAX_DELAY,
        },
        editable: true,
        width: 80.0,
        flexible: false,
    },
    ColumnDescriptor {
        label: statics::EN_COL_ACTIVE,
        key: statics::ADV_KEY_ACTIVE,
        kind: ColumnKind::Boolean,
        editable: true,
        width: 60.0,
        flexible: false,
    },
];

impl TableRecord for Action {
    fn schema() -> &'static [ColumnDescriptor] {
        &ACTION_COLUMNS
    }

    fn cell(&self, col: usize) -> CellValue {
        match col {
            ACTION_COL_TYPE => CellValue::Choice(self.kind().as_str().to_string()),
            ACTION_COL_GENERALS => CellValue::Text(self.generals_summary()),
            ACTION_COL_DELAY => CellValue::Integer(i64::from(self.delay())),
            ACTION_COL_ACTIVE => CellValue::Bool(self.active()),
            _ => Self::placeholder(col),
        }
    }

    fn placeholder(col: usize) -> CellValue {
        match col {
            ACTION_COL_TYPE => CellValue::Choice(statics::EN_PLACEHOLDER_ADD_ROW.to_string()),
            ACTION_COL_DELAY => CellValue::Integer(0),
            ACTION_COL_ACTIVE => CellValue::Bool(false),
            _ => CellValue::Text(String::new()),
        }
    }

    fn write_cell(&mut self, col: usize, value: CellValue) -> Result<(), RejectedWrite> {
        match (col, value) {
            (ACTION_COL_TYPE, CellValue::Choice(s)) => {
                let kind = ActionKind::parse(&s).ok_or(RejectedWrite::InvalidChoice(s))?;
                self.set_kind(kind);
                Ok(())
            }
            (ACTION_COL_DELAY, CellValue::Integer(v)) => {
                let delay = u32::try_from(v).map_err(|_| RejectedWrite::OutOfRange {
                    value: v,
                    min: 0,
                    max: statics::ADV_MAX_DELAY,
                })?;
                self.set_delay(delay)
            }
            (ACTION_COL_ACTIVE, CellValue::Bool(b)) => {
                self.set_active(b);
                Ok(())
            }
            (col, _) => Err(ACTION_COLUMNS
                .get(col)
                .map_or(RejectedWrite::NoSuchColumn(col), |c| {
                    RejectedWrite::ReadOnly(c.key)
                })),
        }
    }
}

pub const ROSTER_COL_TYPE: usize = 0;
pub const ROSTER_COL_NAME: usize = 1;
pub const ROSTER_COL_CAPACITY: usize = 2;

static ROSTER_COLUMNS: [ColumnDescriptor; 3] = [
    ColumnDescriptor {
        label: statics::EN_COL_TYPE,
        key: statics::ADV_KEY_TYPE,
        kind: ColumnKind::FreeText,
        editable: false,
        width: 140.0,
        flexible: false,
    },
    ColumnDescriptor {
        label: statics::EN_COL_NAME,
        key: statics::ADV_KEY_NAME,
        kind: ColumnKind::FreeText,
        editable: false,
        width: 200.0,
        flexible: true,
    },
    ColumnDescriptor {
        label: statics::EN_COL_CAPACITY,
        key: statics::ADV_KEY_CAPACITY,
        kind: ColumnKind::BoundedInteger {
            min: 0,
            max: statics::ADV_MAX_DELAY,
        },
        editable: false,
        width: 80.0,
        flexible: false,
    },
];

// Roster rows are display-only; generals change through the catalog menu.
impl TableRecord for General {
    fn schema() -> &'static [ColumnDescriptor] {
        &ROSTER_COLUMNS
    }

    fn cell(&self, col: usize) -> CellValue {
        match col {
            ROSTER_COL_TYPE => CellValue::Text(self.general_type().to_string()),
            ROSTER_COL_NAME => CellValue::Text(self.name().to_string()),
            ROSTER_COL_CAPACITY => CellValue::Integer(i64::from(self.capacity())),
            _ => Self::placeholder(col),
        }
    }

    fn placeholder(col: usize) -> CellValue {
        match col {
            ROSTER_COL_TYPE => CellValue::Text(statics::EN_PLACEHOLDER_ADD_ROW.to_string()),
            ROSTER_COL_CAPACITY => CellValue::Integer(0),
            _ => CellValue::Text(String::new()),
        }
    }

    fn write_cell(&mut self, col: usize, _value: CellValue) -> Result<(), RejectedWrite> {
        Err(ROSTER_COLUMNS
            .get(col)
            .map_or(RejectedWrite::NoSuchColumn(col), |c| {
                RejectedWrite::ReadOnly(c.key)
            }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionInsert {
    Above,
    Below,
}

/// "Add action above/below" entries; the new action becomes the selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionInsertPolicy;

impl InsertPolicy<Action> for ActionInsertPolicy {
    type Request = ActionInsert;

    fn insert_entries(
        &self,
        _data: &OrderedCollection<Action>,
        _row: usize,
    ) -> Vec<(String, ActionInsert)> {
        vec![
            (
                statics::EN_CTX_ADD_ACTION_ABOVE.to_string(),
                ActionInsert::Above,
            ),
            (
                statics::EN_CTX_ADD_ACTION_BELOW.to_string(),
                ActionInsert::Below,
            ),
        ]
    }

    fn insert(
        &self,
        data: &mut OrderedCollection<Action>,
        row: usize,
        request: &ActionInsert,
    ) -> InsertOutcome {
        let at = match request {
            ActionInsert::Above => row,
            ActionInsert::Below => row.saturating_add(1),
        };
        InsertOutcome::Inserted {
            reselect: Some(data.insert(at, Action::default())),
        }
    }
}

/// Offers every catalog general not yet in the roster (matched by name), inserting at
/// the right-clicked row.
#[derive(Debug, Clone)]
pub struct RosterInsertPolicy {
    catalog: Arc<Catalog>,
}

impl RosterInsertPolicy {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl InsertPolicy<General> for RosterInsertPolicy {
    /// Archetype type tag.
    type Request = String;

    fn insert_entries(&self, data: &OrderedCollection<General>, _row: usize) -> Vec<(String, String)> {
        self.catalog
            .archetypes()
            .iter()
            .filter(|a| !data.contains_name(&a.name))
            .map(|a| (a.name.clone(), a.general_type.clone()))
            .collect()
    }

    fn insert(
        &self,
        data: &mut OrderedCollection<General>,
        row: usize,
        request: &String,
    ) -> InsertOutcome {
        let Some(archetype) = self.catalog.by_type(request) else {
            return InsertOutcome::Skipped;
        };
        if data.contains_name(&archetype.name) {
            return InsertOutcome::Skipped;
        }
        data.insert_archetype(row, archetype);
        InsertOutcome::Inserted { reselect: None }
    }
}
