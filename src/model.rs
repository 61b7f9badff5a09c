use crate::catalog::GeneralArchetype;
use crate::collection::OrderedCollection;
use crate::statics;
use crate::table::RejectedWrite;
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What an action does when the adventure script runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    #[default]
    Load,
    Unload,
    Move,
    Attack,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Load,
        ActionKind::Unload,
        ActionKind::Move,
        ActionKind::Attack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Load => statics::ADV_ACTION_LOAD,
            ActionKind::Unload => statics::ADV_ACTION_UNLOAD,
            ActionKind::Move => statics::ADV_ACTION_MOVE,
            ActionKind::Attack => statics::ADV_ACTION_ATTACK,
        }
    }

    pub fn parse(s: &str) -> Option<ActionKind> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// Map position learned by the game for a general. Once present it stays present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeCoordinates {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct General {
    #[serde(default)]
    id: u32,
    #[serde(rename = "type")]
    general_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    capacity: u32,
    #[serde(default = "default_army")]
    army: IndexMap<String, u32>,
    #[serde(default)]
    delay: u32,
    #[serde(default)]
    preset: bool,
    #[serde(default)]
    init: bool,
    #[serde(default)]
    retreat: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_coordinates: Option<RelativeCoordinates>,
}

fn default_army() -> IndexMap<String, u32> {
    statics::ADV_UNITS
        .iter()
        .map(|(key, _)| (key.to_string(), 0))
        .collect()
}

impl General {
    pub(crate) fn from_archetype(archetype: &GeneralArchetype, id: u32) -> Self {
        Self {
            id,
            general_type: archetype.general_type.clone(),
            name: archetype.name.clone(),
            capacity: archetype.capacity,
            army: default_army(),
            delay: 0,
            preset: false,
            init: false,
            retreat: false,
            relative_coordinates: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn general_type(&self) -> &str {
        &self.general_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn army(&self) -> &IndexMap<String, u32> {
        &self.army
    }

    pub fn units(&self, key: &str) -> Option<u32> {
        self.army.get(key).copied()
    }

    /// Set the count for one army unit. The key set is fixed; counts above `capacity`
    /// are rejected and leave the army unchanged.
    pub fn set_units(&mut self, key: &str, value: u32) -> Result<(), RejectedWrite> {
        let capacity = self.capacity;
        let Some(slot) = self.army.get_mut(key) else {
            return Err(RejectedWrite::UnknownUnit(key.to_string()));
        };
        if value > capacity {
            return Err(RejectedWrite::ExceedsCapacity {
                unit: key.to_string(),
                value,
                capacity,
            });
        }
        *slot = value;
        Ok(())
    }

    /// Put a loaded army on the fixed unit key set, in table order. Absent keys count
    /// zero; unknown keys and counts above `capacity` are rejected.
    fn normalize_army(&mut self) -> Result<(), RejectedWrite> {
        let mut army = default_army();
        for (key, count) in &self.army {
            let Some(slot) = army.get_mut(key) else {
                return Err(RejectedWrite::UnknownUnit(key.clone()));
            };
            if *count > self.capacity {
                return Err(RejectedWrite::ExceedsCapacity {
                    unit: key.clone(),
                    value: *count,
                    capacity: self.capacity,
                });
            }
            *slot = *count;
        }
        self.army = army;
        Ok(())
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: u32) -> Result<(), RejectedWrite> {
        check_delay(delay)?;
        self.delay = delay;
        Ok(())
    }

    pub fn preset(&self) -> bool {
        self.preset
    }

    pub fn set_preset(&mut self, preset: bool) {
        self.preset = preset;
    }

    pub fn init(&self) -> bool {
        self.init
    }

    pub fn set_init(&mut self, init: bool) {
        self.init = init;
    }

    pub fn retreat(&self) -> bool {
        self.retreat
    }

    pub fn set_retreat(&mut self, retreat: bool) {
        self.retreat = retreat;
    }

    pub fn coordinates_learned(&self) -> bool {
        self.relative_coordinates.is_some()
    }

    /// Record coordinates reported by the coordinate-learning process.
    /// Nothing clears them again.
    pub fn learn_coordinates(&mut self, coords: RelativeCoordinates) {
        self.relative_coordinates = Some(coords);
    }

    pub fn tab_label(&self) -> String {
        format!("{} ({})", self.general_type, self.id)
    }
}

fn check_delay(delay: u32) -> Result<(), RejectedWrite> {
    if i64::from(delay) > statics::ADV_MAX_DELAY {
        return Err(RejectedWrite::OutOfRange {
            value: i64::from(delay),
            min: 0,
            max: statics::ADV_MAX_DELAY,
        });
    }
    Ok(())
}

impl OrderedCollection<General> {
    /// Next free label id: one past the highest id in use.
    pub fn next_general_id(&self) -> u32 {
        self.iter().map(General::id).max().map_or(1, |id| id + 1)
    }

    pub fn insert_archetype(&mut self, index: usize, archetype: &GeneralArchetype) -> usize {
        let id = self.next_general_id();
        self.insert(index, General::from_archetype(archetype, id))
    }

    pub fn contains_type(&self, general_type: &str) -> bool {
        self.iter().any(|g| g.general_type == general_type)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.iter().any(|g| g.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: ActionKind,
    #[serde(default)]
    delay: u32,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    generals: OrderedCollection<General>,
}

fn default_active() -> bool {
    true
}

impl Default for Action {
    fn default() -> Self {
        Self::new(ActionKind::default())
    }
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            delay: 0,
            active: default_active(),
            generals: OrderedCollection::new(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ActionKind) {
        self.kind = kind;
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: u32) -> Result<(), RejectedWrite> {
        check_delay(delay)?;
        self.delay = delay;
        Ok(())
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn generals(&self) -> &OrderedCollection<General> {
        &self.generals
    }

    pub fn generals_mut(&mut self) -> &mut OrderedCollection<General> {
        &mut self.generals
    }

    /// New general from the catalog at `index` (clamped); returns where it landed.
    pub fn insert_general(&mut self, index: usize, archetype: &GeneralArchetype) -> usize {
        self.generals.insert_archetype(index, archetype)
    }

    pub fn general_mut(&mut self, index: usize) -> Option<&mut General> {
        self.generals.get_mut(index)
    }

    /// "type (id), type (id)" summary shown in the actions table.
    pub fn generals_summary(&self) -> String {
        self.generals
            .iter()
            .map(General::tab_label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adventure {
    pub name: String,
    #[serde(default)]
    generals: OrderedCollection<General>,
    #[serde(default)]
    actions: OrderedCollection<Action>,
}

impl Adventure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generals: OrderedCollection::new(),
            actions: OrderedCollection::new(),
        }
    }

    /// The document shown before anything is opened: one default action, empty roster.
    pub fn empty() -> Self {
        let mut adventure = Self::new(statics::EN_EMPTY_ADVENTURE_NAME);
        adventure.insert_action(0, Action::default());
        adventure
    }

    pub fn insert_action(&mut self, index: usize, action: Action) -> usize {
        self.actions.insert(index, action)
    }

    /// New roster general from the catalog at `index` (clamped).
    pub fn insert_general(&mut self, index: usize, archetype: &GeneralArchetype) -> usize {
        self.generals.insert_archetype(index, archetype)
    }

    /// Bring a freshly loaded adventure under the army rules. Every army gets the full
    /// unit key set; an unknown unit or a count above capacity fails the whole load.
    pub(crate) fn normalize(&mut self) -> anyhow::Result<()> {
        for (g_no, general) in self.generals.iter_mut().enumerate() {
            general
                .normalize_army()
                .with_context(|| format!("roster general {g_no} ({})", general.tab_label()))?;
        }
        for (a_no, action) in self.actions.iter_mut().enumerate() {
            for (g_no, general) in action.generals.iter_mut().enumerate() {
                general.normalize_army().with_context(|| {
                    format!("action {a_no}, general {g_no} ({})", general.tab_label())
                })?;
            }
        }
        Ok(())
    }

    pub(crate) fn from_parts(
        name: String,
        generals: OrderedCollection<General>,
        actions: OrderedCollection<Action>,
    ) -> Self {
        Self {
            name,
            generals,
            actions,
        }
    }

    pub fn generals(&self) -> &OrderedCollection<General> {
        &self.generals
    }

    pub fn generals_mut(&mut self) -> &mut OrderedCollection<General> {
        &mut self.generals
    }

    pub fn actions(&self) -> &OrderedCollection<Action> {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut OrderedCollection<Action> {
        &mut self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionKind, Adventure, General, RelativeCoordinates};
    use crate::catalog::GeneralArchetype;
    use crate::collection::OrderedCollection;
    use crate::table::RejectedWrite;

    fn archetype(t: &str, capacity: u32) -> GeneralArchetype {
        GeneralArchetype {
            general_type: t.to_string(),
            name: format!("{t} name"),
            capacity,
        }
    }

    #[test]
    fn set_units_rejects_over_capacity_and_unknown_keys() {
        let mut g = General::from_archetype(&archetype("vargus", 200), 1);
        assert!(g.set_units("recruit", 200).is_ok());
        assert_eq!(
            g.set_units("recruit", 201),
            Err(RejectedWrite::ExceedsCapacity {
                unit: "recruit".to_string(),
                value: 201,
                capacity: 200,
            })
        );
        assert_eq!(g.units("recruit"), Some(200));
        assert!(matches!(
            g.set_units("dragon", 1),
            Err(RejectedWrite::UnknownUnit(_))
        ));
    }

    #[test]
    fn learned_coordinates_stay_learned() {
        let mut g = General::from_archetype(&archetype("anslem", 10), 3);
        assert!(!g.coordinates_learned());
        g.learn_coordinates(RelativeCoordinates { x: 4, y: -2 });
        assert!(g.coordinates_learned());
        assert_eq!(g.tab_label(), "anslem (3)");
    }

    #[test]
    fn general_ids_continue_after_highest() {
        let mut c = OrderedCollection::new();
        assert_eq!(c.next_general_id(), 1);
        c.insert_archetype(0, &archetype("a", 1));
        c.insert_archetype(0, &archetype("b", 1));
        assert_eq!(c[0].id(), 2);
        assert_eq!(c[1].id(), 1);
        c.remove(0);
        assert_eq!(c.next_general_id(), 2);
        assert!(c.contains_type("a"));
        assert!(!c.contains_type("b"));
    }

    #[test]
    fn action_kind_parses_lowercase_names() {
        assert_eq!(ActionKind::parse("attack"), Some(ActionKind::Attack));
        assert_eq!(ActionKind::parse("Attack"), None);
    }

    #[test]
    fn normalize_fills_missing_units_in_table_order() {
        let mut g = General::from_archetype(&archetype("anslem", 50), 1);
        g.army.clear();
        g.army.insert("militia".to_string(), 5);
        g.army.insert("recruit".to_string(), 7);
        let mut adventure = Adventure::new("x");
        adventure.insert_action(0, Action::new(ActionKind::Attack));
        adventure.actions_mut().get_mut(0).unwrap().generals_mut().push(g);

        adventure.normalize().unwrap();
        let g = &adventure.actions()[0].generals()[0];
        let keys: Vec<&str> = g.army().keys().map(String::as_str).collect();
        let expected: Vec<&str> = crate::statics::ADV_UNITS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, expected);
        assert_eq!(g.units("recruit"), Some(7));
        assert_eq!(g.units("militia"), Some(5));
        assert_eq!(g.units("cannoneer"), Some(0));
    }

    #[test]
    fn normalize_rejects_over_capacity_and_unknown_units() {
        let mut over = General::from_archetype(&archetype("anslem", 10), 1);
        over.army.insert("recruit".to_string(), 500);
        let mut adventure = Adventure::new("x");
        adventure.generals_mut().push(over);
        let err = adventure.normalize().unwrap_err();
        assert!(format!("{err:#}").contains("anslem (1)"));
        assert!(matches!(
            err.downcast_ref::<RejectedWrite>(),
            Some(RejectedWrite::ExceedsCapacity { value: 500, .. })
        ));

        let mut odd = General::from_archetype(&archetype("vargus", 10), 2);
        odd.army.insert("dragon".to_string(), 1);
        let mut adventure = Adventure::new("y");
        adventure.generals_mut().push(odd);
        assert!(adventure.normalize().is_err());
    }
}
