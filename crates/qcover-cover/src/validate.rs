use std::collections::BTreeMap;

use qcover_core::{Graph, NodeId};
use qcover_qubo::{VariableKey, VariableLayout};
use serde::{Deserialize, Serialize};

/// Read access to a candidate "vertex in slot" assignment.
///
/// Pairs the assignment knows nothing about read as unassigned.
pub trait SlotAssignment {
    /// Returns whether `vertex` is placed in `slot`.
    fn is_assigned(&self, vertex: NodeId, slot: usize) -> bool;
}

impl SlotAssignment for BTreeMap<VariableKey, bool> {
    fn is_assigned(&self, vertex: NodeId, slot: usize) -> bool {
        self.get(&VariableKey::new(vertex, slot))
            .copied()
            .unwrap_or(false)
    }
}

/// A sampler bit vector labelled through the layout of the model it solved.
#[derive(Debug, Clone, Copy)]
pub struct LabelledSample<'a> {
    layout: &'a VariableLayout,
    state: &'a [bool],
}

impl<'a> LabelledSample<'a> {
    /// Labels `state` with `layout`.
    pub fn new(layout: &'a VariableLayout, state: &'a [bool]) -> Self {
        Self { layout, state }
    }

    /// Key/value view of the assigned variables.
    pub fn to_map(&self) -> BTreeMap<VariableKey, bool> {
        self.state
            .iter()
            .enumerate()
            .filter_map(|(index, &bit)| self.layout.key_of(index).map(|key| (key, bit)))
            .collect()
    }
}

impl SlotAssignment for LabelledSample<'_> {
    fn is_assigned(&self, vertex: NodeId, slot: usize) -> bool {
        self.layout
            .index_of(VariableKey::new(vertex, slot))
            .and_then(|index| self.state.get(index).copied())
            .unwrap_or(false)
    }
}

/// Vertices placed in one clique slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueGroup {
    /// Slot the group was read from.
    pub slot: usize,
    /// Members in ascending identifier order.
    pub members: Vec<NodeId>,
}

/// A validated clique cover: every group is a clique and every vertex
/// belongs to at least one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueCover {
    slots: usize,
    groups: Vec<CliqueGroup>,
}

impl CliqueCover {
    /// Number of slots the candidate was drawn with (k).
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Non-empty groups in slot order.
    pub fn groups(&self) -> &[CliqueGroup] {
        &self.groups
    }

    /// Number of non-empty groups. At most `slots()`.
    pub fn num_cliques(&self) -> usize {
        self.groups.len()
    }

    /// Members of `slot`, if that slot is occupied.
    pub fn members_of(&self, slot: usize) -> Option<&[NodeId]> {
        self.groups
            .iter()
            .find(|group| group.slot == slot)
            .map(|group| group.members.as_slice())
    }

    /// Returns whether some group contains `vertex`.
    pub fn covers(&self, vertex: NodeId) -> bool {
        self.groups
            .iter()
            .any(|group| group.members.binary_search(&vertex).is_ok())
    }
}

/// Checks whether `assignment` encodes a clique cover of `graph` with `k`
/// slots.
///
/// Returns `None` if any slot holds a non-adjacent pair or some vertex is
/// left in no slot. Entries for vertices outside the graph are ignored.
pub fn validate<A>(graph: &dyn Graph, assignment: &A, k: usize) -> Option<CliqueCover>
where
    A: SlotAssignment + ?Sized,
{
    let vertices: Vec<NodeId> = graph.nodes().collect();
    let mut covered = vec![false; vertices.len()];
    let mut groups = Vec::new();

    for slot in 0..k {
        let mut members = Vec::new();
        for (position, &vertex) in vertices.iter().enumerate() {
            if assignment.is_assigned(vertex, slot) {
                members.push(vertex);
                covered[position] = true;
            }
        }
        for (i, &u) in members.iter().enumerate() {
            if members[i + 1..].iter().any(|&v| !graph.has_edge(u, v)) {
                return None;
            }
        }
        if !members.is_empty() {
            members.sort_unstable();
            groups.push(CliqueGroup { slot, members });
        }
    }

    if covered.iter().all(|&hit| hit) {
        Some(CliqueCover { slots: k, groups })
    } else {
        None
    }
}
