use crate::catalog::Catalog;
use crate::detail::{EditorInput, TabCloseVeto};
use crate::document::AdventureDocument;
use crate::model::{Adventure, General};
use crate::panel::MasterDetailPanel;
use crate::table::{
    ActionInsert, CellValue, ContextMenu, MenuCommand, RejectedWrite, RosterInsertPolicy,
    TableView,
};
use std::path::Path;
use std::sync::Arc;

/// Everything bound to one open adventure: the general roster grid and the actions
/// master/detail panel. Swapping the document rebuilds all of it.
pub struct AdventureWorkspace {
    document: AdventureDocument,
    catalog: Arc<Catalog>,
    roster: TableView<General, RosterInsertPolicy>,
    actions: MasterDetailPanel,
}

impl AdventureWorkspace {
    pub fn new(document: AdventureDocument, catalog: Arc<Catalog>) -> Self {
        let roster = TableView::new(
            RosterInsertPolicy::new(catalog.clone()),
            document.adventure.generals(),
        );
        let actions = MasterDetailPanel::new(catalog.clone(), document.adventure.actions());
        Self {
            document,
            catalog,
            roster,
            actions,
        }
    }

    pub fn document(&self) -> &AdventureDocument {
        &self.document
    }

    pub fn adventure(&self) -> &Adventure {
        &self.document.adventure
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn roster(&self) -> &TableView<General, RosterInsertPolicy> {
        &self.roster
    }

    pub fn actions_panel(&self) -> &MasterDetailPanel {
        &self.actions
    }

    /// Replace the bound adventure. No state carries over from the old views.
    pub fn replace_document(&mut self, document: AdventureDocument) {
        *self = Self::new(document, self.catalog.clone());
    }

    /// Open an adventure file. On failure the current adventure is left as it was.
    pub fn open(&mut self, path: &Path) -> anyhow::Result<()> {
        let document = AdventureDocument::open(path)?;
        self.replace_document(document);
        Ok(())
    }

    pub fn import_json(&mut self, path: &Path) -> anyhow::Result<()> {
        let document = AdventureDocument::import_json(path)?;
        self.replace_document(document);
        Ok(())
    }

    pub fn save(&mut self, path: &Path) -> anyhow::Result<()> {
        self.document.save_to_path(path)
    }

    // Roster grid.

    pub fn roster_click(&mut self, row: usize) {
        self.roster.click(row, self.document.adventure.generals());
        self.roster.drain_events();
    }

    pub fn roster_secondary_click(&mut self, row: usize) -> ContextMenu<String> {
        let menu = self
            .roster
            .secondary_click(row, self.document.adventure.generals());
        self.roster.drain_events();
        menu
    }

    pub fn roster_close_menu(&mut self) {
        self.roster.close_context_menu();
    }

    pub fn roster_activate(&mut self, command: &MenuCommand<String>) -> bool {
        let changed = self
            .roster
            .activate(command, self.document.adventure.generals_mut());
        self.roster.drain_events();
        if changed {
            self.document.mark_dirty();
        }
        changed
    }

    // Actions grid and detail tabs.

    pub fn action_click(&mut self, row: usize) {
        self.actions.click(row, self.document.adventure.actions());
    }

    pub fn action_double_click(&mut self, row: usize, col: usize) -> bool {
        self.actions
            .double_click(row, col, self.document.adventure.actions())
    }

    pub fn action_secondary_click(&mut self, row: usize) -> ContextMenu<ActionInsert> {
        self.actions
            .secondary_click(row, self.document.adventure.actions())
    }

    pub fn action_close_menu(&mut self) {
        self.actions.close_context_menu();
    }

    pub fn action_activate(&mut self, command: &MenuCommand<ActionInsert>) -> bool {
        let changed = self
            .actions
            .activate(command, self.document.adventure.actions_mut());
        if changed {
            self.document.mark_dirty();
        }
        changed
    }

    pub fn action_cancel_edit(&mut self) {
        self.actions.cancel_edit();
    }

    pub fn action_commit_edit(&mut self, value: CellValue) -> Result<(), RejectedWrite> {
        self.actions
            .commit_edit(value, self.document.adventure.actions_mut())?;
        self.document.mark_dirty();
        Ok(())
    }

    pub fn action_write_cell(
        &mut self,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> Result<(), RejectedWrite> {
        self.actions
            .write_cell(row, col, value, self.document.adventure.actions_mut())?;
        self.document.mark_dirty();
        Ok(())
    }

    pub fn select_detail_tab(&mut self, tab: usize) {
        self.actions.details_mut().select_tab(tab);
    }

    pub fn close_detail_tab(&mut self, tab: usize) -> Result<(), TabCloseVeto> {
        self.actions
            .close_detail_tab(tab, self.document.adventure.actions_mut())?;
        self.document.mark_dirty();
        Ok(())
    }

    pub fn add_general_to_action(&mut self, general_type: &str) -> Option<usize> {
        let at = self
            .actions
            .add_general(general_type, self.document.adventure.actions_mut())?;
        self.document.mark_dirty();
        Some(at)
    }

    pub fn apply_editor_input(
        &mut self,
        tab: usize,
        input: EditorInput,
    ) -> Result<(), RejectedWrite> {
        self.actions
            .apply_editor_input(tab, input, self.document.adventure.actions_mut())?;
        self.document.mark_dirty();
        Ok(())
    }

    /// Whether either grid changed since the last frame.
    pub fn take_repaint_request(&mut self) -> bool {
        let roster = self.roster.take_repaint_request();
        let actions = self.actions.take_repaint_request();
        roster || actions
    }

    /// Rows to scroll into view after structural edits, as `(roster, actions)`.
    pub fn take_scroll_targets(&mut self) -> (Option<usize>, Option<usize>) {
        (
            self.roster.take_scroll_target(),
            self.actions.take_scroll_target(),
        )
    }

    /// Window resize: the flexible column of each grid takes the leftover width.
    pub fn resize(&mut self, width: f32) {
        self.actions.resize(width);
        self.roster.fit_flexible_column(width);
    }
}
