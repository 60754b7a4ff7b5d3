use std::collections::BTreeSet;

use crate::Point;
use crate::goban::Goban;
use crate::stone::Stone;

/// Handle to a group record in a [`GroupArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

impl GroupId {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: u32) -> Self {
        GroupId(raw)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A maximal 4-connected set of same-colored stones.
///
/// `border` holds every on-board point orthogonally adjacent to the stones.
/// It records adjacency only: whether a border point is a liberty depends on
/// the board at the time of asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    stones: BTreeSet<Point>,
    border: BTreeSet<Point>,
    color: Stone,
}

impl Group {
    /// A one-stone group with an empty border. The caller adds the border
    /// points since a group does not know the board dimensions.
    pub fn singleton(point: Point, color: Stone) -> Self {
        Group {
            stones: BTreeSet::from([point]),
            border: BTreeSet::new(),
            color,
        }
    }

    pub fn add_border(&mut self, point: Point) {
        if !self.stones.contains(&point) {
            self.border.insert(point);
        }
    }

    /// Join two groups of the same color into a new one.
    ///
    /// Panics if the colors differ.
    pub fn merge(a: &Group, b: &Group) -> Group {
        assert_eq!(
            a.color, b.color,
            "only groups of the same color can be merged"
        );
        let stones: BTreeSet<Point> = a.stones.union(&b.stones).copied().collect();
        let border = a
            .border
            .union(&b.border)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        Group {
            stones,
            border,
            color: a.color,
        }
    }

    /// Number of border points currently empty on `goban`.
    pub fn liberties(&self, goban: &Goban) -> usize {
        self.border
            .iter()
            .filter(|&&p| goban.get(p).is_none())
            .count()
    }

    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn color(&self) -> Stone {
        self.color
    }

    pub fn stones(&self) -> &BTreeSet<Point> {
        &self.stones
    }

    pub fn border(&self) -> &BTreeSet<Point> {
        &self.border
    }
}

/// Storage for the groups on a board. Retired slots are reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupArena {
    slots: Vec<Option<Group>>,
    free: Vec<u32>,
}

impl GroupArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: Group) -> GroupId {
        match self.free.pop() {
            Some(raw) => {
                self.slots[raw as usize] = Some(group);
                GroupId(raw)
            }
            None => {
                self.slots.push(Some(group));
                GroupId(self.slots.len() as u32 - 1)
            }
        }
    }

    /// Panics if `id` has been retired.
    pub fn get(&self, id: GroupId) -> &Group {
        match self.slots.get(id.index()) {
            Some(Some(group)) => group,
            _ => panic!("group {id:?} is not live"),
        }
    }

    /// Remove a group and hand back its record. Panics if `id` is not live.
    pub fn retire(&mut self, id: GroupId) -> Group {
        match self.slots.get_mut(id.index()).and_then(Option::take) {
            Some(group) => {
                self.free.push(id.0);
                group
            }
            None => panic!("group {id:?} is not live"),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|g| (GroupId(i as u32), g)))
    }
}
