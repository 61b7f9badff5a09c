use super::model::{CellValue, RejectedWrite, RowsDelta, TableRecord, VirtualTableModel};
use crate::collection::OrderedCollection;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

pub const ROW_HEIGHT: f32 = 22.0;
/// Width of the row-number gutter left of the first column.
pub const ROW_LABEL_GUTTER: f32 = 40.0;

/// Emitted for pointer selection and programmatic selection alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    SelectionChanged(SelectionChanged),
    Reset(RowsDelta),
}

/// View-specific "insert new item" behaviour, supplied when the view is built.
pub trait InsertPolicy<T> {
    type Request: Clone + fmt::Debug;

    /// Labelled insert entries for a context menu opened on `row`.
    fn insert_entries(&self, data: &OrderedCollection<T>, row: usize)
    -> Vec<(String, Self::Request)>;

    fn insert(
        &self,
        data: &mut OrderedCollection<T>,
        row: usize,
        request: &Self::Request,
    ) -> InsertOutcome;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The collection is unchanged.
    Skipped,
    /// An item went in; `reselect` is the row to select afterwards, if any.
    Inserted { reselect: Option<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand<R> {
    Insert(R),
    Delete,
    MoveUp,
    MoveDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem<R> {
    Entry {
        label: String,
        command: MenuCommand<R>,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu<R> {
    /// Row the menu was opened on (may be the trailing row).
    pub row: usize,
    pub items: Vec<MenuItem<R>>,
}

impl<R> ContextMenu<R> {
    pub fn labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                MenuItem::Entry { label, .. } => Some(label.as_str()),
                MenuItem::Separator => None,
            })
            .collect()
    }

    pub fn has(&self, pred: impl Fn(&MenuCommand<R>) -> bool) -> bool {
        self.items.iter().any(|item| match item {
            MenuItem::Entry { command, .. } => pred(command),
            MenuItem::Separator => false,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEdit {
    pub row: usize,
    pub col: usize,
}

/// Headless state of one grid: selection, in-place edit, context menu, row bookkeeping
/// and column widths. The collection itself is borrowed per call.
pub struct TableView<T, P: InsertPolicy<T>> {
    policy: P,
    selected: Option<usize>,
    editing: Option<CellEdit>,
    menu: Option<ContextMenu<P::Request>>,
    rows_seen: usize,
    scroll_extent: f32,
    scroll_pending: bool,
    repaint_requested: bool,
    col_widths: Vec<f32>,
    events: VecDeque<TableEvent>,
    _record: PhantomData<fn() -> T>,
}

impl<T: TableRecord, P: InsertPolicy<T>> TableView<T, P> {
    /// Starts with the first data row selected, if there is one.
    pub fn new(policy: P, data: &OrderedCollection<T>) -> Self {
        let rows = data.len() + 1;
        Self {
            policy,
            selected: (!data.is_empty()).then_some(0),
            editing: None,
            menu: None,
            rows_seen: rows,
            scroll_extent: rows as f32 * ROW_HEIGHT,
            scroll_pending: false,
            repaint_requested: true,
            col_widths: T::schema().iter().map(|c| c.width).collect(),
            events: VecDeque::new(),
            _record: PhantomData,
        }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    pub fn editing(&self) -> Option<CellEdit> {
        self.editing
    }

    pub fn context_menu(&self) -> Option<&ContextMenu<P::Request>> {
        self.menu.as_ref()
    }

    pub fn close_context_menu(&mut self) {
        self.menu = None;
    }

    pub fn row_count(&self) -> usize {
        self.rows_seen
    }

    pub fn scroll_extent(&self) -> f32 {
        self.scroll_extent
    }

    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Row to bring into view after a structural change: the re-clamped selection, or
    /// the trailing row when nothing is selected.
    pub fn take_scroll_target(&mut self) -> Option<usize> {
        if !std::mem::take(&mut self.scroll_pending) {
            return None;
        }
        Some(self.selected.unwrap_or(self.rows_seen.saturating_sub(1)))
    }

    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    fn emit_selection(&mut self, row: usize) {
        self.events
            .push_back(TableEvent::SelectionChanged(SelectionChanged { row }));
    }

    /// Programmatic selection. Only data rows can be selected.
    pub fn select_row(&mut self, row: usize, data: &OrderedCollection<T>) -> bool {
        if row >= data.len() {
            return false;
        }
        self.selected = Some(row);
        self.emit_selection(row);
        true
    }

    /// Single click: selects, never starts editing.
    pub fn click(&mut self, row: usize, data: &OrderedCollection<T>) {
        if self.editing.is_some_and(|e| e.row != row) {
            self.editing = None;
        }
        self.select_row(row, data);
    }

    /// Double click: selects and opens the in-place editor right away when the cell
    /// is editable.
    pub fn double_click(&mut self, row: usize, col: usize, data: &OrderedCollection<T>) -> bool {
        if !self.select_row(row, data) {
            return false;
        }
        let editable = T::schema().get(col).is_some_and(|c| c.editable);
        self.editing = editable.then_some(CellEdit { row, col });
        editable
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit the open editor's value. A rejected value is simply not applied.
    pub fn commit_edit(
        &mut self,
        value: CellValue,
        data: &mut OrderedCollection<T>,
    ) -> Result<(), RejectedWrite> {
        let Some(edit) = self.editing.take() else {
            return Ok(());
        };
        self.write_cell(edit.row, edit.col, value, data)
    }

    /// Direct cell write (checkboxes and choice combos commit without an editor).
    pub fn write_cell(
        &mut self,
        row: usize,
        col: usize,
        value: CellValue,
        data: &mut OrderedCollection<T>,
    ) -> Result<(), RejectedWrite> {
        let result = VirtualTableModel::new(data).set_cell(row, col, value);
        match &result {
            Ok(()) => self.repaint_requested = true,
            Err(e) => tracing::debug!("Cell write ({row}, {col}) rejected: {e}"),
        }
        result
    }

    /// Right click: selects a data row, emits the selection, and opens the menu.
    pub fn secondary_click(
        &mut self,
        row: usize,
        data: &OrderedCollection<T>,
    ) -> ContextMenu<P::Request> {
        self.editing = None;
        self.select_row(row, data);

        let mut items: Vec<MenuItem<P::Request>> = self
            .policy
            .insert_entries(data, row)
            .into_iter()
            .map(|(label, request)| MenuItem::Entry {
                label,
                command: MenuCommand::Insert(request),
            })
            .collect();

        let len = data.len();
        if row < len {
            items.push(MenuItem::Separator);
            items.push(MenuItem::Entry {
                label: crate::statics::EN_CTX_DELETE.to_string(),
                command: MenuCommand::Delete,
            });
            if row != 0 {
                items.push(MenuItem::Entry {
                    label: crate::statics::EN_CTX_MOVE_UP.to_string(),
                    command: MenuCommand::MoveUp,
                });
            }
            if row + 1 < len {
                items.push(MenuItem::Entry {
                    label: crate::statics::EN_CTX_MOVE_DOWN.to_string(),
                    command: MenuCommand::MoveDown,
                });
            }
        }

        let menu = ContextMenu { row, items };
        self.menu = Some(menu.clone());
        menu
    }

    /// Run a context menu command. Structural commands act on the selected row and
    /// do nothing without one. Returns whether the collection changed.
    pub fn activate(
        &mut self,
        command: &MenuCommand<P::Request>,
        data: &mut OrderedCollection<T>,
    ) -> bool {
        let menu_row = self.menu.take().map(|m| m.row);
        match command {
            MenuCommand::Insert(request) => {
                let row = menu_row.or(self.selected).unwrap_or(data.len());
                let InsertOutcome::Inserted { reselect } = self.policy.insert(data, row, request)
                else {
                    tracing::debug!("Insert {request:?} at row {row} skipped");
                    return false;
                };
                tracing::debug!("Inserted {request:?} at row {row}");
                self.reset(data);
                if let Some(r) = reselect {
                    self.select_row(r, data);
                }
                true
            }
            MenuCommand::Delete => {
                let Some(row) = self.selected else {
                    return false;
                };
                if data.remove(row).is_none() {
                    return false;
                }
                tracing::debug!("Deleted row {row}");
                self.reset(data);
                if let Some(r) = self.selected {
                    self.emit_selection(r);
                }
                true
            }
            MenuCommand::MoveUp => {
                let Some(row) = self.selected.filter(|r| *r > 0) else {
                    return false;
                };
                self.move_row(row, row - 1, data)
            }
            MenuCommand::MoveDown => {
                let Some(row) = self.selected else {
                    return false;
                };
                self.move_row(row, row + 1, data)
            }
        }
    }

    fn move_row(&mut self, from: usize, to: usize, data: &mut OrderedCollection<T>) -> bool {
        if !data.swap(from, to) {
            return false;
        }
        tracing::debug!("Moved row {from} to {to}");
        self.reset(data);
        self.select_row(to, data);
        true
    }

    /// Reconcile with the collection after a structural change: consume the row delta,
    /// re-clamp selection, drop an editor that fell off the end, update the scroll
    /// extent and ask for a repaint.
    pub fn reset(&mut self, data: &mut OrderedCollection<T>) -> RowsDelta {
        let model = VirtualTableModel::new(data);
        let delta = model.structural_delta(self.rows_seen);
        self.rows_seen = model.row_count();

        let len = data.len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(r) => Some(r.min(len - 1)),
            None => None,
        };
        if self.editing.is_some_and(|e| e.row >= len) {
            self.editing = None;
        }

        self.scroll_extent = self.rows_seen as f32 * ROW_HEIGHT;
        self.scroll_pending = true;
        self.repaint_requested = true;
        self.events.push_back(TableEvent::Reset(delta));
        delta
    }

    pub fn col_widths(&self) -> &[f32] {
        &self.col_widths
    }

    /// Give the flexible column whatever the fixed columns and the gutter leave over.
    pub fn fit_flexible_column(&mut self, total_width: f32) {
        let Some(flex) = T::schema().iter().position(|c| c.flexible) else {
            return;
        };
        let fixed = self
            .col_widths
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != flex)
            .map(|(_, w)| *w);
        self.col_widths[flex] = flexible_width(total_width, fixed, ROW_LABEL_GUTTER);
    }
}

pub fn flexible_width(total: f32, fixed: impl IntoIterator<Item = f32>, gutter: f32) -> f32 {
    (total - fixed.into_iter().sum::<f32>() - gutter).max(0.0)
}
