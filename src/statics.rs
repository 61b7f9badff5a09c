// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs and the table/detail code to reduce duplication.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "ADVED: Adventure Editor";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_SAVE: &str = "Save...";
pub const EN_BTN_IMPORT_JSON: &str = "Import JSON...";

pub const EN_FILTER_ADVENTURE: &str = "Adventure file";
pub const EN_FILTER_JSON: &str = "Adventure JSON";

pub const EN_HEADING_ROSTER: &str = "Generals";
pub const EN_HEADING_ACTIONS: &str = "Actions";

pub const EN_COL_TYPE: &str = "Type";
pub const EN_COL_GENERALS: &str = "Generals";
pub const EN_COL_DELAY: &str = "Delay";
pub const EN_COL_ACTIVE: &str = "Active";
pub const EN_COL_NAME: &str = "Name";
pub const EN_COL_CAPACITY: &str = "Capacity";

pub const EN_PLACEHOLDER_ADD_ROW: &str = "Click right to add";

pub const EN_CTX_DELETE: &str = "Delete";
pub const EN_CTX_MOVE_UP: &str = "Move Up";
pub const EN_CTX_MOVE_DOWN: &str = "Move Down";
pub const EN_CTX_ADD_ACTION_ABOVE: &str = "Add action above";
pub const EN_CTX_ADD_ACTION_BELOW: &str = "Add action below";

pub const EN_TAB_ADD_GENERAL: &str = "Add general";
pub const EN_ADD_GENERAL_HINT: &str = "Double click on general to add";
pub const EN_ADD_GENERAL_NONE: &str = "Every general is already part of this action.";
pub const EN_SELECT_ACTION: &str = "Select an action.";

pub const EN_LABEL_DELAY: &str = "Delay";
pub const EN_CHECKBOX_PRESET: &str = "Preset";
pub const EN_CHECKBOX_INIT: &str = "Init";
pub const EN_CHECKBOX_RETREAT: &str = "Retreat";
pub const EN_CHECKBOX_COORD_LEARNED: &str = "Coord setted";

pub const EN_EMPTY_ADVENTURE_NAME: &str = "Empty";
pub const EN_BADGE_DIRTY: &str = "dirty";

// Adventure data keys (ADV_ prefix). Column keys match the document field names.
pub const ADV_KEY_TYPE: &str = "type";
pub const ADV_KEY_GENERALS: &str = "generals";
pub const ADV_KEY_DELAY: &str = "delay";
pub const ADV_KEY_ACTIVE: &str = "active";
pub const ADV_KEY_NAME: &str = "name";
pub const ADV_KEY_CAPACITY: &str = "capacity";

pub const ADV_ACTION_LOAD: &str = "load";
pub const ADV_ACTION_UNLOAD: &str = "unload";
pub const ADV_ACTION_MOVE: &str = "move";
pub const ADV_ACTION_ATTACK: &str = "attack";
pub const ADV_ACTION_KINDS: &[&str] = &[
    ADV_ACTION_LOAD,
    ADV_ACTION_UNLOAD,
    ADV_ACTION_MOVE,
    ADV_ACTION_ATTACK,
];

pub const ADV_MAX_DELAY: i64 = 99_999_999;

/// Army unit keys with their editor labels, in display order (three per row).
pub const ADV_UNITS: &[(&str, &str)] = &[
    ("recruit", "Recruit:"),
    ("bowmen", "Bowmen:"),
    ("militia", "Militia:"),
    ("cavalry", "Cavalry:"),
    ("longbowman", "Longbowman:"),
    ("soldier", "Soldier:"),
    ("crossbowman", "Crossbowman:"),
    ("elite_soldier", "Elite soldier:"),
    ("cannoneer", "Cannoneer:"),
];

// File extensions.
pub const ADV_EXT_ADVENTURE: &str = "adv";
pub const ADV_EXT_GZIP: &str = "gz";
pub const ADV_EXT_JSON: &str = "json";
