use crate::model::General;
use crate::statics;
use crate::table::RejectedWrite;

const UNITS_PER_ROW: usize = 3;
const CELL_WIDTH: f32 = 110.0;
const CELL_HEIGHT: f32 = 22.0;
const SEPARATOR_HEIGHT: f32 = 9.0;

/// One input of the general editor. Every input commits on change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorInput {
    Units { key: String, value: u32 },
    Delay(u32),
    Preset(bool),
    Init(bool),
    Retreat(bool),
}

/// Editor for the general at `general_index` of the bound action. Holds no copy of the
/// general's values; reads and writes go straight to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralEditor {
    general_index: usize,
}

impl GeneralEditor {
    pub fn new(general_index: usize) -> Self {
        Self { general_index }
    }

    pub fn general_index(&self) -> usize {
        self.general_index
    }

    /// Inclusive bounds of an army unit input.
    pub fn unit_bounds(general: &General) -> (u32, u32) {
        (0, general.capacity())
    }

    pub fn unit_label(key: &str) -> &str {
        statics::ADV_UNITS
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, label)| *label)
    }

    /// Derived, read-only "Coord setted" indicator.
    pub fn coordinates_indicator(general: &General) -> bool {
        general.coordinates_learned()
    }

    pub fn apply(&self, general: &mut General, input: EditorInput) -> Result<(), RejectedWrite> {
        match input {
            EditorInput::Units { key, value } => general.set_units(&key, value),
            EditorInput::Delay(delay) => general.set_delay(delay),
            EditorInput::Preset(v) => {
                general.set_preset(v);
                Ok(())
            }
            EditorInput::Init(v) => {
                general.set_init(v);
                Ok(())
            }
            EditorInput::Retreat(v) => {
                general.set_retreat(v);
                Ok(())
            }
        }
    }

    /// Minimum size of the editor grid: label + input row per three units, a
    /// separator, then the delay/checkbox block.
    pub fn min_size(general: &General) -> [f32; 2] {
        let unit_rows = general.army().len().div_ceil(UNITS_PER_ROW);
        let height = (unit_rows * 2 + 2) as f32 * CELL_HEIGHT + SEPARATOR_HEIGHT;
        [UNITS_PER_ROW as f32 * CELL_WIDTH, height]
    }
}
