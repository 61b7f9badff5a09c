use crate::catalog::Catalog;
use crate::collection::OrderedCollection;
use crate::detail::{DetailPaneSynchronizer, EditorInput, TabCloseVeto};
use crate::model::Action;
use crate::table::{
    ActionInsert, ActionInsertPolicy, CellValue, ContextMenu, MenuCommand, RejectedWrite,
    TableEvent, TableView,
};
use std::sync::Arc;

/// The actions grid with its dependent general tabs.
pub struct MasterDetailPanel {
    table: TableView<Action, ActionInsertPolicy>,
    details: DetailPaneSynchronizer,
    last_row: Option<usize>,
}

impl MasterDetailPanel {
    pub fn new(catalog: Arc<Catalog>, actions: &OrderedCollection<Action>) -> Self {
        let table = TableView::new(ActionInsertPolicy, actions);
        let mut details = DetailPaneSynchronizer::new(catalog);
        let last_row = table.selected_row();
        if let Some(row) = last_row {
            details.show_details_for(row, actions);
        }
        Self {
            table,
            details,
            last_row,
        }
    }

    pub fn table(&self) -> &TableView<Action, ActionInsertPolicy> {
        &self.table
    }

    pub fn details(&self) -> &DetailPaneSynchronizer {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut DetailPaneSynchronizer {
        &mut self.details
    }

    /// Feed queued table events to the detail pane. Selecting the row that is already
    /// shown does not rebuild; a reset re-syncs with the (re-clamped) selection.
    pub fn process_events(&mut self, actions: &OrderedCollection<Action>) {
        for event in self.table.drain_events() {
            match event {
                TableEvent::SelectionChanged(sel) => {
                    if self.last_row != Some(sel.row) {
                        self.details.show_details_for(sel.row, actions);
                        self.last_row = Some(sel.row);
                    }
                }
                TableEvent::Reset(_) => match self.table.selected_row() {
                    Some(row) => {
                        self.details.show_details_for(row, actions);
                        self.last_row = Some(row);
                    }
                    None => {
                        self.details.unbind();
                        self.last_row = None;
                    }
                },
            }
        }
    }

    pub fn select_row(&mut self, row: usize, actions: &OrderedCollection<Action>) {
        self.table.select_row(row, actions);
        self.process_events(actions);
    }

    pub fn click(&mut self, row: usize, actions: &OrderedCollection<Action>) {
        self.table.click(row, actions);
        self.process_events(actions);
    }

    pub fn double_click(
        &mut self,
        row: usize,
        col: usize,
        actions: &OrderedCollection<Action>,
    ) -> bool {
        let editing = self.table.double_click(row, col, actions);
        self.process_events(actions);
        editing
    }

    pub fn cancel_edit(&mut self) {
        self.table.cancel_edit();
    }

    pub fn commit_edit(
        &mut self,
        value: CellValue,
        actions: &mut OrderedCollection<Action>,
    ) -> Result<(), RejectedWrite> {
        self.table.commit_edit(value, actions)
    }

    pub fn write_cell(
        &mut self,
        row: usize,
        col: usize,
        value: CellValue,
        actions: &mut OrderedCollection<Action>,
    ) -> Result<(), RejectedWrite> {
        self.table.write_cell(row, col, value, actions)
    }

    pub fn secondary_click(
        &mut self,
        row: usize,
        actions: &OrderedCollection<Action>,
    ) -> ContextMenu<ActionInsert> {
        let menu = self.table.secondary_click(row, actions);
        self.process_events(actions);
        menu
    }

    pub fn close_context_menu(&mut self) {
        self.table.close_context_menu();
    }

    pub fn activate(
        &mut self,
        command: &MenuCommand<ActionInsert>,
        actions: &mut OrderedCollection<Action>,
    ) -> bool {
        let changed = self.table.activate(command, actions);
        self.process_events(actions);
        changed
    }

    pub fn close_detail_tab(
        &mut self,
        tab: usize,
        actions: &mut OrderedCollection<Action>,
    ) -> Result<(), TabCloseVeto> {
        self.details.close_tab(tab, actions)?;
        self.table.request_repaint();
        Ok(())
    }

    /// Add a catalog general to the selected action, positioned at the selected
    /// action's row index.
    pub fn add_general(
        &mut self,
        general_type: &str,
        actions: &mut OrderedCollection<Action>,
    ) -> Option<usize> {
        let master_row = self.table.selected_row()?;
        let at = self
            .details
            .add_from_catalog(general_type, master_row, actions)?;
        self.table.request_repaint();
        Some(at)
    }

    /// Commit one general-editor input for the tab at `tab`.
    pub fn apply_editor_input(
        &mut self,
        tab: usize,
        input: EditorInput,
        actions: &mut OrderedCollection<Action>,
    ) -> Result<(), RejectedWrite> {
        let row = self.details.bound_index().ok_or(RejectedWrite::NoSuchRow(0))?;
        let editor = self
            .details
            .detail_tabs()
            .get(tab)
            .map(|t| t.editor)
            .ok_or(RejectedWrite::NoSuchRow(tab))?;
        let general = actions
            .get_mut(row)
            .and_then(|a| a.general_mut(editor.general_index()))
            .ok_or(RejectedWrite::NoSuchRow(editor.general_index()))?;
        editor.apply(general, input)
    }

    pub fn take_repaint_request(&mut self) -> bool {
        self.table.take_repaint_request()
    }

    pub fn take_scroll_target(&mut self) -> Option<usize> {
        self.table.take_scroll_target()
    }

    pub fn resize(&mut self, width: f32) {
        self.table.fit_flexible_column(width);
    }
}

#[cfg(test)]
mod tests {
    use super::MasterDetailPanel;
    use crate::catalog::{Catalog, GeneralArchetype};
    use crate::collection::OrderedCollection;
    use crate::detail::EditorInput;
    use crate::model::{Action, ActionKind};
    use crate::table::MenuCommand;
    use std::sync::Arc;

    fn catalog() -> Arc<Catalog> {
        Catalog::from_archetypes(vec![
            GeneralArchetype {
                general_type: "anslem".to_string(),
                name: "Anslem".to_string(),
                capacity: 50,
            },
            GeneralArchetype {
                general_type: "vargus".to_string(),
                name: "Vargus".to_string(),
                capacity: 50,
            },
        ])
    }

    fn actions() -> OrderedCollection<Action> {
        let catalog = catalog();
        let mut load = Action::new(ActionKind::Load);
        load.insert_general(0, catalog.by_type("anslem").unwrap());
        let mut attack = Action::new(ActionKind::Attack);
        attack.insert_general(0, catalog.by_type("vargus").unwrap());
        attack.insert_general(1, catalog.by_type("anslem").unwrap());
        vec![load, attack].into()
    }

    #[test]
    fn starts_bound_to_first_row() {
        let data = actions();
        let panel = MasterDetailPanel::new(catalog(), &data);
        assert_eq!(panel.details().bound_index(), Some(0));
        assert_eq!(panel.details().detail_tabs().len(), 1);
    }

    #[test]
    fn reselecting_same_row_does_not_rebuild() {
        let data = actions();
        let mut panel = MasterDetailPanel::new(catalog(), &data);
        panel.click(1, &data);
        let rebuilds = panel.details().rebuild_count();
        panel.click(1, &data);
        panel.secondary_click(1, &data);
        panel.close_context_menu();
        assert_eq!(panel.details().rebuild_count(), rebuilds);
        assert_eq!(panel.details().detail_tabs().len(), 2);
    }

    #[test]
    fn moving_selected_row_keeps_details_on_same_action() {
        let mut data = actions();
        let mut panel = MasterDetailPanel::new(catalog(), &data);
        panel.select_row(1, &data);
        assert!(panel.activate(&MenuCommand::MoveUp, &mut data));
        assert_eq!(panel.table().selected_row(), Some(0));
        assert_eq!(panel.details().bound_index(), Some(0));
        assert_eq!(panel.details().detail_tabs().len(), 2);
    }

    #[test]
    fn deleting_every_row_unbinds_details() {
        let mut data = actions();
        let mut panel = MasterDetailPanel::new(catalog(), &data);
        assert!(panel.activate(&MenuCommand::Delete, &mut data));
        assert_eq!(panel.details().bound_index(), Some(0));
        assert_eq!(panel.details().detail_tabs().len(), 2);
        assert!(panel.activate(&MenuCommand::Delete, &mut data));
        assert_eq!(panel.details().bound_index(), None);
        assert_eq!(panel.details().tab_count(), 1);
        assert!(!panel.activate(&MenuCommand::Delete, &mut data));
    }

    #[test]
    fn editor_input_reaches_bound_general() {
        let mut data = actions();
        let mut panel = MasterDetailPanel::new(catalog(), &data);
        panel.select_row(1, &data);
        panel
            .apply_editor_input(1, EditorInput::Preset(true), &mut data)
            .unwrap();
        assert!(data[1].generals()[1].preset());
        assert!(
            panel
                .apply_editor_input(
                    0,
                    EditorInput::Units {
                        key: "militia".to_string(),
                        value: 51,
                    },
                    &mut data,
                )
                .is_err()
        );
        assert_eq!(data[1].generals()[0].units("militia"), Some(0));
    }
}
