//! Detail pane: one editor tab per general of the selected action, plus the pinned
//! "Add general" tab which always sits last.

pub mod editor;

pub use editor::{EditorInput, GeneralEditor};

use crate::catalog::{Catalog, GeneralArchetype};
use crate::collection::OrderedCollection;
use crate::model::Action;
use crate::statics;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTab {
    pub label: String,
    pub editor: GeneralEditor,
    pub min_size: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TabCloseVeto {
    #[error("the add-general tab cannot be closed")]
    AppendTab,
    #[error("tab {0} does not exist")]
    NoSuchTab(usize),
}

/// Which action the tabs were built from, and the collection revisions at that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding {
    master_index: usize,
    master_revision: u64,
    nested_revision: u64,
}

pub struct DetailPaneSynchronizer {
    catalog: Arc<Catalog>,
    bound: Option<Binding>,
    tabs: Vec<DetailTab>,
    /// Index into the visible tab strip; `tabs.len()` is the append tab.
    selected_tab: usize,
    append_min_size: Option<[f32; 2]>,
    rebuilds: u64,
}

impl DetailPaneSynchronizer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            bound: None,
            tabs: Vec::new(),
            selected_tab: 0,
            append_min_size: None,
            rebuilds: 0,
        }
    }

    pub fn bound_index(&self) -> Option<usize> {
        self.bound.map(|b| b.master_index)
    }

    pub fn detail_tabs(&self) -> &[DetailTab] {
        &self.tabs
    }

    pub fn append_tab_index(&self) -> usize {
        self.tabs.len()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len() + 1
    }

    /// Labels of the full tab strip, append tab included.
    pub fn tab_labels(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .map(|t| t.label.as_str())
            .chain(std::iter::once(statics::EN_TAB_ADD_GENERAL))
            .collect()
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn select_tab(&mut self, tab: usize) {
        if tab <= self.append_tab_index() {
            self.selected_tab = tab;
        }
    }

    pub fn append_min_size(&self) -> Option<[f32; 2]> {
        self.append_min_size
    }

    /// How many times the tab set was torn down and rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Back to only the append tab.
    pub fn unbind(&mut self) {
        if self.bound.is_none() && self.tabs.is_empty() {
            return;
        }
        self.tabs.clear();
        self.bound = None;
        self.selected_tab = 0;
        self.rebuilds += 1;
    }

    /// Bind to `actions[index]` and rebuild its tabs. Repeating the call for the same
    /// index while neither collection changed structurally does nothing.
    /// Returns whether the tabs were rebuilt.
    pub fn show_details_for(&mut self, index: usize, actions: &OrderedCollection<Action>) -> bool {
        let Some(action) = actions.get(index) else {
            let was_bound = self.bound.is_some();
            self.unbind();
            return was_bound;
        };
        let binding = Binding {
            master_index: index,
            master_revision: actions.revision(),
            nested_revision: action.generals().revision(),
        };
        if self.bound == Some(binding) {
            return false;
        }

        self.tabs.clear();
        for (g_no, general) in action.generals().iter().enumerate() {
            self.tabs.push(DetailTab {
                label: general.tab_label(),
                editor: GeneralEditor::new(g_no),
                min_size: GeneralEditor::min_size(general),
            });
        }
        if let Some(first) = self.tabs.first() {
            self.append_min_size = Some(first.min_size);
        }
        // Focus the last general; with none, the append tab is all there is.
        self.selected_tab = self.tabs.len().saturating_sub(1);
        self.bound = Some(binding);
        self.rebuilds += 1;
        tracing::debug!(
            "Detail pane bound to action {index} with {} general tab(s)",
            self.tabs.len()
        );
        true
    }

    /// Closing a general tab deletes that general from the bound action. The append
    /// tab cannot be closed.
    pub fn close_tab(
        &mut self,
        tab: usize,
        actions: &mut OrderedCollection<Action>,
    ) -> Result<(), TabCloseVeto> {
        if tab == self.append_tab_index() {
            return Err(TabCloseVeto::AppendTab);
        }
        let Some(binding) = self.bound.filter(|_| tab < self.tabs.len()) else {
            return Err(TabCloseVeto::NoSuchTab(tab));
        };
        let removed = actions
            .get_mut(binding.master_index)
            .and_then(|a| a.generals_mut().remove(tab));
        if removed.is_none() {
            return Err(TabCloseVeto::NoSuchTab(tab));
        }
        tracing::info!(
            "Removed general {tab} from action {}",
            binding.master_index
        );
        self.show_details_for(binding.master_index, actions);
        Ok(())
    }

    /// Catalog generals whose type is not yet in the bound action.
    pub fn add_offers(&self, actions: &OrderedCollection<Action>) -> Vec<&GeneralArchetype> {
        let Some(action) = self.bound.and_then(|b| actions.get(b.master_index)) else {
            return Vec::new();
        };
        self.catalog
            .archetypes()
            .iter()
            .filter(|a| !action.generals().contains_type(&a.general_type))
            .collect()
    }

    /// Add a catalog general to the bound action at position `master_row` (clamped to
    /// the end of the general list), rebuild, and focus the new tab.
    pub fn add_from_catalog(
        &mut self,
        general_type: &str,
        master_row: usize,
        actions: &mut OrderedCollection<Action>,
    ) -> Option<usize> {
        let binding = self.bound?;
        let archetype = self.catalog.by_type(general_type)?;
        let action = actions.get_mut(binding.master_index)?;
        if action.generals().contains_type(general_type) {
            return None;
        }
        let at = action.insert_general(master_row, archetype);
        tracing::info!(
            "Added general {general_type} to action {} at {at}",
            binding.master_index
        );
        self.show_details_for(binding.master_index, actions);
        self.select_tab(at);
        Some(at)
    }
}
