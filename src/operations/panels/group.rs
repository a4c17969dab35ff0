use slotmap::SlotMap;

use super::Panel;

/// Two sides touch when their offset vectors differ by less than this.
pub const TOUCH_TOLERANCE: f64 = 1e-3;

slotmap::new_key_type! {
    /// Key of a panel still waiting to be assigned to a group.
    struct PendingId;
}

impl Panel {
    /// Returns `true` if some side of `self` and some side of `other` are
    /// anchored at the same vertex with near-identical offset vectors.
    ///
    /// Sharing a vertex alone is not enough: panels meeting at a junction
    /// from different directions do not touch.
    #[must_use]
    pub fn touches(&self, other: &Panel) -> bool {
        self.sides().into_iter().any(|a| {
            other.sides().into_iter().any(|b| {
                a.vertex == b.vertex && (b.direction - a.direction).norm() < TOUCH_TOLERANCE
            })
        })
    }
}

/// Partition of panels into maximal touching groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelGroups {
    /// Group id of every panel, indexed by panel.
    pub panel_group: Vec<usize>,
    /// Panel indices of every group, in absorption order.
    pub groups: Vec<Vec<usize>>,
}

impl PanelGroups {
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Source line of every member, grouped like [`groups`](Self::groups).
    #[must_use]
    pub fn group_lines(&self, panels: &[Panel]) -> Vec<Vec<usize>> {
        self.groups
            .iter()
            .map(|members| members.iter().map(|&p| panels[p].line).collect())
            .collect()
    }
}

/// Partitions `panels` into groups closed under [`Panel::touches`].
///
/// The first pending panel seeds a group; pending panels touching any member
/// are absorbed pass by pass until a pass finds nothing, then the next
/// pending panel seeds the next group. Every pass removes at least one
/// pending panel or ends the group, so the loop is bounded by the panel
/// count.
///
/// A pass takes at most one panel per source line and appends its finds in
/// reverse discovery order, so `groups` lists members the way downstream
/// consumers of the group tree expect them.
#[must_use]
pub fn group_panels(panels: &[Panel]) -> PanelGroups {
    let mut pending: SlotMap<PendingId, usize> = SlotMap::with_capacity_and_key(panels.len());
    for index in 0..panels.len() {
        pending.insert(index);
    }

    let mut panel_group = vec![0; panels.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    loop {
        let Some((seed_key, seed)) = pending.iter().next().map(|(k, &p)| (k, p)) else {
            break;
        };
        pending.remove(seed_key);
        let mut members = vec![seed];

        loop {
            let absorbed = touching_pass(panels, &members, &pending);
            if absorbed.is_empty() {
                break;
            }
            members.extend(
                absorbed
                    .into_iter()
                    .rev()
                    .filter_map(|key| pending.remove(key)),
            );
        }

        for &m in &members {
            panel_group[m] = groups.len();
        }
        groups.push(members);
    }

    tracing::debug!(panels = panels.len(), groups = groups.len(), "grouped panels");

    PanelGroups {
        panel_group,
        groups,
    }
}

/// Pending panels touching some member, in member-then-pool order, keeping
/// only the first find of each source line.
fn touching_pass(
    panels: &[Panel],
    members: &[usize],
    pending: &SlotMap<PendingId, usize>,
) -> Vec<PendingId> {
    let mut found: Vec<(PendingId, usize)> = Vec::new();
    for &m in members {
        for (key, &candidate) in pending {
            let line = panels[candidate].line;
            if panels[m].touches(&panels[candidate]) && found.iter().all(|&(_, l)| l != line) {
                found.push((key, line));
            }
        }
    }
    found.into_iter().map(|(key, _)| key).collect()
}
