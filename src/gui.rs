use crate::catalog::Catalog;
use crate::detail::{EditorInput, GeneralEditor};
use crate::model::General;
use crate::statics;
use crate::table::view::ROW_HEIGHT;
use crate::table::{
    ActionInsert, CellValue, ColumnKind, ContextMenu, InsertPolicy, MenuCommand, MenuItem,
    TableRecord, TableView,
};
use crate::{AdventureDocument, AdventureWorkspace, OrderedCollection};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::PathBuf;
use std::sync::Arc;

const ROSTER_MAX_HEIGHT: f32 = 160.0;

pub fn run_gui(catalog: Arc<Catalog>) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([348.0, 788.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(AdvedApp::new(catalog)))),
    )
}

/// Everything the UI collected during one frame, applied once rendering is done so the
/// workspace is only read while widgets are laid out.
#[derive(Debug, Clone)]
enum UiOp {
    RosterClick(usize),
    RosterMenu(usize, egui::Pos2),
    RosterCommand(MenuCommand<String>),
    RosterMenuClose,
    ActionClick(usize),
    ActionDoubleClick(usize, usize),
    ActionMenu(usize, egui::Pos2),
    ActionCommand(MenuCommand<ActionInsert>),
    ActionMenuClose,
    ActionWrite(usize, usize, CellValue),
    ActionCommit(CellValue),
    ActionCancelEdit,
    SelectTab(usize),
    CloseTab(usize),
    AddGeneral(String),
    Editor(usize, EditorInput),
}

/// Placement of one grid within the frame.
struct GridFrame<'a> {
    id: &'a str,
    max_height: f32,
    scroll_to: Option<usize>,
}

enum MenuOutcome<R> {
    Open,
    Chosen(MenuCommand<R>),
    Dismissed,
}

/// Application shell: owns the workspace, status line and dialog state.
struct AdvedApp {
    workspace: AdventureWorkspace,
    dialog_dir: Option<PathBuf>,
    status: String,
    last_error: Option<String>,
    edit_int: i64,
    menu_pos: egui::Pos2,
    menu_just_opened: bool,
    last_width: f32,
    last_title: String,
    roster_scroll: Option<usize>,
    actions_scroll: Option<usize>,
}

impl AdvedApp {
    fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            workspace: AdventureWorkspace::new(AdventureDocument::default(), catalog),
            dialog_dir: None,
            status: String::new(),
            last_error: None,
            edit_int: 0,
            menu_pos: egui::Pos2::ZERO,
            menu_just_opened: false,
            last_width: 0.0,
            last_title: String::new(),
            roster_scroll: None,
            actions_scroll: None,
        }
    }

    fn file_dialog(&self, filter_name: &str, extensions: &[&str]) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().add_filter(filter_name, extensions);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn adventure_dialog(&self) -> rfd::FileDialog {
        self.file_dialog(
            statics::EN_FILTER_ADVENTURE,
            &[statics::ADV_EXT_ADVENTURE, statics::ADV_EXT_GZIP],
        )
    }

    fn open_file(&mut self) {
        let Some(path) = self.adventure_dialog().pick_file() else {
            return;
        };
        match self.workspace.open(&path) {
            Ok(()) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("Loaded {}", path.display());
                self.last_error = None;
                self.last_width = 0.0;
            }
            Err(e) => {
                tracing::error!("Failed to open {path:?}: {e:#}");
                self.last_error = Some(format!("Failed to load: {e:#}"));
            }
        }
    }

    fn import_json(&mut self) {
        let Some(path) = self
            .file_dialog(statics::EN_FILTER_JSON, &[statics::ADV_EXT_JSON])
            .pick_file()
        else {
            return;
        };
        match self.workspace.import_json(&path) {
            Ok(()) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("Imported {}", path.display());
                self.last_error = None;
                self.last_width = 0.0;
            }
            Err(e) => {
                tracing::error!("Failed to import {path:?}: {e:#}");
                self.last_error = Some(format!("Failed to import: {e:#}"));
            }
        }
    }

    fn save_file(&mut self) {
        let mut dlg = self.adventure_dialog();
        if let Some(file_name) = self
            .workspace
            .document()
            .source_path
            .as_ref()
            .and_then(|p| p.file_name())
        {
            dlg = dlg.set_file_name(file_name.to_string_lossy());
        }
        let Some(path) = dlg.save_file() else {
            return;
        };
        if let Err(e) = self.workspace.save(&path) {
            tracing::error!("Failed to save {path:?}: {e:#}");
            self.last_error = Some(format!("Failed to save: {e:#}"));
        } else {
            self.dialog_dir = path.parent().map(PathBuf::from);
            self.status = format!("Saved {}", path.display());
            self.last_error = None;
        }
    }

    fn cell_text(value: &CellValue) -> String {
        match value {
            CellValue::Bool(true) => "✔".to_string(),
            CellValue::Bool(false) => String::new(),
            other => other.to_string(),
        }
    }

    /// The trailing row's prompt, painted across the whole row instead of being clipped
    /// to the first cell.
    fn paint_spanning_prompt(ui: &egui::Ui, row_width: f32, text: &str) {
        let cell = ui.max_rect();
        let clip = ui.clip_rect();
        let span = egui::Rect::from_min_max(
            egui::pos2(cell.left(), clip.top()),
            egui::pos2(cell.left() + row_width, clip.bottom()),
        );
        let painter = ui.ctx().layer_painter(ui.layer_id()).with_clip_rect(span);
        painter.text(
            egui::pos2(cell.left(), cell.center().y),
            egui::Align2::LEFT_CENTER,
            text,
            egui::TextStyle::Body.resolve(ui.style()),
            ui.visuals().weak_text_color(),
        );
    }

    /// Read-only grid shared by both tables: header, `len + 1` rows, trailing row as a
    /// single prompt spanning the row. Clicks are reported through `on_row`.
    fn render_grid<T: TableRecord, P: InsertPolicy<T>>(
        ui: &mut egui::Ui,
        frame: GridFrame<'_>,
        data: &OrderedCollection<T>,
        view: &TableView<T, P>,
        mut cell_ui: impl FnMut(&mut egui::Ui, usize, usize, &CellValue) -> bool,
        mut on_row: impl FnMut(usize, &egui::Response),
    ) {
        let schema = T::schema();
        let len = data.len();
        let selected = view.selected_row();
        let row_width: f32 = view.col_widths().iter().sum();
        ui.push_id(frame.id, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .sense(egui::Sense::click())
                .min_scrolled_height(view.scroll_extent().min(frame.max_height))
                .max_scroll_height(frame.max_height)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            if let Some(row) = frame.scroll_to {
                builder = builder.scroll_to_row(row, Some(egui::Align::Center));
            }
            for w in view.col_widths() {
                builder = builder.column(Column::exact(*w));
            }
            builder
                .header(ROW_HEIGHT, |mut header| {
                    for c in schema {
                        header.col(|ui| {
                            ui.strong(c.label);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, len + 1, |mut row| {
                        let idx = row.index();
                        row.set_selected(selected == Some(idx));
                        for col in 0..schema.len() {
                            row.col(|ui| {
                                if idx == len {
                                    if col == 0 {
                                        let prompt = T::placeholder(0).to_string();
                                        Self::paint_spanning_prompt(ui, row_width, &prompt);
                                    }
                                    return;
                                }
                                let value = data[idx].cell(col);
                                if !cell_ui(ui, idx, col, &value) {
                                    ui.label(Self::cell_text(&value));
                                }
                            });
                        }
                        on_row(idx, &row.response());
                    });
                });
        });
    }

    fn render_roster(
        ws: &AdventureWorkspace,
        ui: &mut egui::Ui,
        scroll_to: Option<usize>,
        ops: &mut Vec<UiOp>,
    ) {
        Self::render_grid(
            ui,
            GridFrame {
                id: "roster_table",
                max_height: ROSTER_MAX_HEIGHT,
                scroll_to,
            },
            ws.adventure().generals(),
            ws.roster(),
            |_, _, _, _| false,
            |idx, resp| {
                if resp.secondary_clicked() {
                    let pos = resp.interact_pointer_pos().unwrap_or(resp.rect.left_bottom());
                    ops.push(UiOp::RosterMenu(idx, pos));
                } else if resp.clicked() {
                    ops.push(UiOp::RosterClick(idx));
                }
            },
        );
    }

    fn render_actions_table(
        ws: &AdventureWorkspace,
        edit_int: &mut i64,
        ui: &mut egui::Ui,
        frame: GridFrame<'_>,
        ops: &mut Vec<UiOp>,
    ) {
        let table = ws.actions_panel().table();
        let editing = table.editing();
        let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
        let mut cell_ops = Vec::new();
        let mut row_ops = Vec::new();

        Self::render_grid(
            ui,
            frame,
            ws.adventure().actions(),
            table,
            |ui, row, col, value| {
                if col == crate::table::records::ACTION_COL_GENERALS {
                    let text = value.to_string();
                    if !text.is_empty() {
                        ui.label(&text).on_hover_text(text.replace(", ", "\n"));
                        return true;
                    }
                    return false;
                }
                if editing != Some(crate::table::CellEdit { row, col }) {
                    return false;
                }
                if escape {
                    cell_ops.push(UiOp::ActionCancelEdit);
                }
                match (<crate::model::Action as TableRecord>::schema()[col].kind, value) {
                    (ColumnKind::Choice(options), CellValue::Choice(current)) => {
                        egui::ComboBox::from_id_salt(("action_choice", row))
                            .selected_text(current.as_str())
                            .show_ui(ui, |ui| {
                                for opt in options {
                                    if ui.selectable_label(current.as_str() == *opt, *opt).clicked() {
                                        cell_ops.push(UiOp::ActionCommit(CellValue::Choice(
                                            opt.to_string(),
                                        )));
                                    }
                                }
                            });
                    }
                    (ColumnKind::BoundedInteger { min, max }, _) => {
                        let resp = ui.add(egui::DragValue::new(&mut *edit_int).range(min..=max));
                        if resp.changed() {
                            cell_ops.push(UiOp::ActionWrite(
                                row,
                                col,
                                CellValue::Integer(*edit_int),
                            ));
                        }
                        if resp.lost_focus() {
                            cell_ops.push(UiOp::ActionCancelEdit);
                        }
                    }
                    (ColumnKind::Boolean, CellValue::Bool(b)) => {
                        let mut v = *b;
                        if ui.checkbox(&mut v, "").changed() {
                            cell_ops.push(UiOp::ActionCommit(CellValue::Bool(v)));
                        }
                    }
                    _ => return false,
                }
                true
            },
            |idx, resp| {
                if resp.secondary_clicked() {
                    let pos = resp.interact_pointer_pos().unwrap_or(resp.rect.left_bottom());
                    row_ops.push(UiOp::ActionMenu(idx, pos));
                } else if resp.double_clicked() {
                    let col = resp
                        .interact_pointer_pos()
                        .map(|p| Self::column_at(table.col_widths(), p.x - resp.rect.left()))
                        .unwrap_or(0);
                    row_ops.push(UiOp::ActionDoubleClick(idx, col));
                } else if resp.clicked() {
                    row_ops.push(UiOp::ActionClick(idx));
                }
            },
        );

        ops.extend(cell_ops);
        ops.extend(row_ops);
    }

    fn column_at(widths: &[f32], x: f32) -> usize {
        let mut acc = 0.0;
        for (i, w) in widths.iter().enumerate() {
            acc += *w;
            if x < acc {
                return i;
            }
        }
        widths.len().saturating_sub(1)
    }

    fn render_general_editor(
        ui: &mut egui::Ui,
        tab: usize,
        general: &General,
        ops: &mut Vec<UiOp>,
    ) {
        let (lo, hi) = GeneralEditor::unit_bounds(general);
        let keys: Vec<String> = general.army().keys().cloned().collect();

        egui::Grid::new(("general_editor", tab))
            .num_columns(3)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                for chunk in keys.chunks(3) {
                    for key in chunk {
                        ui.small(GeneralEditor::unit_label(key));
                    }
                    ui.end_row();
                    for key in chunk {
                        let mut v = general.units(key).unwrap_or(0);
                        if ui.add(egui::DragValue::new(&mut v).range(lo..=hi)).changed() {
                            ops.push(UiOp::Editor(
                                tab,
                                EditorInput::Units {
                                    key: key.clone(),
                                    value: v,
                                },
                            ));
                        }
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.small(statics::EN_LABEL_DELAY);
                let mut delay = general.delay();
                let max = u32::try_from(statics::ADV_MAX_DELAY).unwrap_or(u32::MAX);
                if ui
                    .add(egui::DragValue::new(&mut delay).range(0..=max))
                    .changed()
                {
                    ops.push(UiOp::Editor(tab, EditorInput::Delay(delay)));
                }
            });
            ui.vertical(|ui| {
                let mut preset = general.preset();
                if ui.checkbox(&mut preset, statics::EN_CHECKBOX_PRESET).changed() {
                    ops.push(UiOp::Editor(tab, EditorInput::Preset(preset)));
                }
                let mut init = general.init();
                if ui.checkbox(&mut init, statics::EN_CHECKBOX_INIT).changed() {
                    ops.push(UiOp::Editor(tab, EditorInput::Init(init)));
                }
            });
            ui.vertical(|ui| {
                let mut retreat = general.retreat();
                if ui.checkbox(&mut retreat, statics::EN_CHECKBOX_RETREAT).changed() {
                    ops.push(UiOp::Editor(tab, EditorInput::Retreat(retreat)));
                }
                let mut learned = GeneralEditor::coordinates_indicator(general);
                ui.add_enabled(
                    false,
                    egui::Checkbox::new(&mut learned, statics::EN_CHECKBOX_COORD_LEARNED),
                );
            });
        });
    }

    fn render_add_general(ws: &AdventureWorkspace, ui: &mut egui::Ui, ops: &mut Vec<UiOp>) {
        let details = ws.actions_panel().details();
        if let Some([w, h]) = details.append_min_size() {
            ui.set_min_size(egui::vec2(w, h));
        }
        ui.small(statics::EN_ADD_GENERAL_HINT);
        let offers = details.add_offers(ws.adventure().actions());
        if offers.is_empty() {
            ui.weak(statics::EN_ADD_GENERAL_NONE);
            return;
        }
        ui.push_id("add_general_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .sense(egui::Sense::click())
                .column(Column::initial(120.0))
                .column(Column::initial(160.0))
                .column(Column::remainder())
                .header(ROW_HEIGHT, |mut header| {
                    for label in [
                        statics::EN_COL_TYPE,
                        statics::EN_COL_NAME,
                        statics::EN_COL_CAPACITY,
                    ] {
                        header.col(|ui| {
                            ui.strong(label);
                        });
                    }
                })
                .body(|mut body| {
                    for archetype in offers {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.monospace(&archetype.general_type);
                            });
                            row.col(|ui| {
                                ui.label(&archetype.name);
                            });
                            row.col(|ui| {
                                ui.label(archetype.capacity.to_string());
                            });
                            if row.response().double_clicked() {
                                ops.push(UiOp::AddGeneral(archetype.general_type.clone()));
                            }
                        });
                    }
                });
        });
    }

    fn render_details(ws: &AdventureWorkspace, ui: &mut egui::Ui, ops: &mut Vec<UiOp>) {
        let details = ws.actions_panel().details();
        let selected = details.selected_tab();
        let append = details.append_tab_index();

        ui.horizontal_wrapped(|ui| {
            for (t, label) in details.tab_labels().into_iter().enumerate() {
                if ui.selectable_label(selected == t, label).clicked() {
                    ops.push(UiOp::SelectTab(t));
                }
                if t != append && ui.small_button("x").clicked() {
                    ops.push(UiOp::CloseTab(t));
                }
            }
        });
        ui.separator();

        if selected == append {
            if details.bound_index().is_some() {
                Self::render_add_general(ws, ui, ops);
            } else {
                ui.weak(statics::EN_SELECT_ACTION);
            }
            return;
        }

        let general = details
            .bound_index()
            .and_then(|row| ws.adventure().actions().get(row))
            .zip(details.detail_tabs().get(selected))
            .and_then(|(action, tab)| action.generals().get(tab.editor.general_index()));
        if let Some(general) = general {
            Self::render_general_editor(ui, selected, general, ops);
        }
    }

    fn render_context_menu<R: Clone>(
        ctx: &egui::Context,
        id: &str,
        pos: egui::Pos2,
        menu: &ContextMenu<R>,
        just_opened: bool,
    ) -> MenuOutcome<R> {
        let mut outcome = MenuOutcome::Open;
        let area = egui::Area::new(egui::Id::new(id))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(140.0);
                    for item in &menu.items {
                        match item {
                            MenuItem::Separator => {
                                ui.separator();
                            }
                            MenuItem::Entry { label, command } => {
                                if ui.button(label).clicked() {
                                    outcome = MenuOutcome::Chosen(command.clone());
                                }
                            }
                        }
                    }
                });
            });
        if matches!(outcome, MenuOutcome::Open)
            && !just_opened
            && ctx.input(|i| i.pointer.any_click())
            && !area.response.contains_pointer()
        {
            outcome = MenuOutcome::Dismissed;
        }
        outcome
    }

    fn apply_ops(&mut self, ops: Vec<UiOp>) {
        for op in ops {
            match op {
                UiOp::RosterClick(row) => self.workspace.roster_click(row),
                UiOp::RosterMenu(row, pos) => {
                    self.workspace.action_close_menu();
                    self.workspace.roster_secondary_click(row);
                    self.menu_pos = pos;
                    self.menu_just_opened = true;
                }
                UiOp::RosterCommand(cmd) => {
                    self.workspace.roster_activate(&cmd);
                }
                UiOp::RosterMenuClose => self.workspace.roster_close_menu(),
                UiOp::ActionClick(row) => self.workspace.action_click(row),
                UiOp::ActionDoubleClick(row, col) => {
                    if self.workspace.action_double_click(row, col)
                        && let Some(action) = self.workspace.adventure().actions().get(row)
                        && let CellValue::Integer(v) = action.cell(col)
                    {
                        self.edit_int = v;
                    }
                }
                UiOp::ActionMenu(row, pos) => {
                    self.workspace.roster_close_menu();
                    self.workspace.action_secondary_click(row);
                    self.menu_pos = pos;
                    self.menu_just_opened = true;
                }
                UiOp::ActionCommand(cmd) => {
                    self.workspace.action_activate(&cmd);
                }
                UiOp::ActionMenuClose => self.workspace.action_close_menu(),
                UiOp::ActionWrite(row, col, value) => {
                    // Rejected values simply do not show up.
                    let _ = self.workspace.action_write_cell(row, col, value);
                }
                UiOp::ActionCommit(value) => {
                    let _ = self.workspace.action_commit_edit(value);
                }
                UiOp::ActionCancelEdit => self.workspace.action_cancel_edit(),
                UiOp::SelectTab(t) => self.workspace.select_detail_tab(t),
                UiOp::CloseTab(t) => {
                    if let Err(e) = self.workspace.close_detail_tab(t) {
                        tracing::debug!("Tab close vetoed: {e}");
                    }
                }
                UiOp::AddGeneral(general_type) => {
                    self.workspace.add_general_to_action(&general_type);
                }
                UiOp::Editor(tab, input) => {
                    let _ = self.workspace.apply_editor_input(tab, input);
                }
            }
        }
    }

    fn window_title(&self) -> String {
        let doc = self.workspace.document();
        let mut title = format!("{} - {}", statics::EN_APP_TITLE, doc.adventure.name);
        if doc.dirty {
            title.push_str(&format!(" ({})", statics::EN_BADGE_DIRTY));
        }
        title
    }
}

impl eframe::App for AdvedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut ops: Vec<UiOp> = Vec::new();
        let roster_scroll = self.roster_scroll.take();
        let actions_scroll = self.actions_scroll.take();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }
                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    self.save_file();
                }
                if ui.button(statics::EN_BTN_IMPORT_JSON).clicked() {
                    self.import_json();
                }
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
            if let Some(err) = &self.last_error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let width = ui.available_width();
            if (width - self.last_width).abs() > f32::EPSILON {
                self.workspace.resize(width);
                self.last_width = width;
            }

            ui.heading(statics::EN_HEADING_ROSTER);
            Self::render_roster(&self.workspace, ui, roster_scroll, &mut ops);
            ui.separator();

            ui.heading(statics::EN_HEADING_ACTIONS);
            let table_height = (ui.available_height() * 0.45).max(ROW_HEIGHT * 3.0);
            Self::render_actions_table(
                &self.workspace,
                &mut self.edit_int,
                ui,
                GridFrame {
                    id: "actions_table",
                    max_height: table_height,
                    scroll_to: actions_scroll,
                },
                &mut ops,
            );
            ui.separator();
            Self::render_details(&self.workspace, ui, &mut ops);
        });

        let just_opened = self.menu_just_opened;
        self.menu_just_opened = false;
        if let Some(menu) = self.workspace.roster().context_menu() {
            match Self::render_context_menu(ctx, "roster_menu", self.menu_pos, menu, just_opened)
            {
                MenuOutcome::Open => {}
                MenuOutcome::Chosen(cmd) => ops.push(UiOp::RosterCommand(cmd)),
                MenuOutcome::Dismissed => ops.push(UiOp::RosterMenuClose),
            }
        }
        if let Some(menu) = self.workspace.actions_panel().table().context_menu() {
            match Self::render_context_menu(ctx, "actions_menu", self.menu_pos, menu, just_opened)
            {
                MenuOutcome::Open => {}
                MenuOutcome::Chosen(cmd) => ops.push(UiOp::ActionCommand(cmd)),
                MenuOutcome::Dismissed => ops.push(UiOp::ActionMenuClose),
            }
        }

        let applied = !ops.is_empty();
        self.apply_ops(ops);
        let (roster_target, actions_target) = self.workspace.take_scroll_targets();
        self.roster_scroll = roster_target;
        self.actions_scroll = actions_target;
        if self.workspace.take_repaint_request() || applied {
            ctx.request_repaint();
        }

        let title = self.window_title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AdvedApp;
    use crate::table::CellValue;

    #[test]
    fn column_at_maps_offsets_to_columns() {
        let widths = [80.0, 200.0, 80.0, 60.0];
        assert_eq!(AdvedApp::column_at(&widths, 10.0), 0);
        assert_eq!(AdvedApp::column_at(&widths, 100.0), 1);
        assert_eq!(AdvedApp::column_at(&widths, 285.0), 2);
        assert_eq!(AdvedApp::column_at(&widths, 9999.0), 3);
    }

    #[test]
    fn bool_cells_render_as_check_marks() {
        assert_eq!(AdvedApp::cell_text(&CellValue::Bool(true)), "✔");
        assert_eq!(AdvedApp::cell_text(&CellValue::Bool(false)), "");
        assert_eq!(AdvedApp::cell_text(&CellValue::Integer(5)), "5");
    }
}
