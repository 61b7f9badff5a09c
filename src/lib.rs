//! Core library for ADVED, the adventure editor.
//! Holds the adventure data model, the spreadsheet-style table views over ordered
//! collections, and the master/detail sync between the actions grid and the general tabs.

pub mod catalog;
pub mod collection;
pub mod detail;
pub mod document;
mod gui;
pub mod model;
pub mod panel;
pub mod statics;
pub mod table;
pub mod workspace;

pub use catalog::{Catalog, CatalogProvider, EmbeddedCatalog, GeneralArchetype};
pub use collection::OrderedCollection;
pub use detail::{DetailPaneSynchronizer, EditorInput, GeneralEditor, TabCloseVeto};
pub use document::{AdventureDocument, AdventureFormat};
pub use gui::run_gui;
pub use model::{Action, ActionKind, Adventure, General};
pub use panel::MasterDetailPanel;
pub use workspace::AdventureWorkspace;
