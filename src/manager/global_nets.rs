//! Aggregation of nets into user-facing named groups.

use std::collections::HashMap;

use super::Manager;
use crate::topology::NetId;

/// A display group of nets sharing a name.
///
/// Anonymous nets get a synthesized `N001`-style name and never share a
/// group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalNet {
    /// Display name of the group.
    pub name: String,
    /// Member nets, in insertion order.
    pub nets: Vec<NetId>,
}

impl Manager {
    /// Aggregates all nets into display groups, deterministically.
    ///
    /// Nets are visited in insertion order. A named net joins the
    /// existing group of that exact name, or opens a new one at the
    /// current position. An anonymous net always opens a fresh group
    /// named `N` plus a zero-padded counter that starts at 1 and counts
    /// anonymous nets only. Counter and name lookup are scoped to this
    /// call, so re-running is idempotent for an unchanged net set.
    #[must_use]
    pub fn global_nets(&self) -> Vec<GlobalNet> {
        let mut groups: Vec<GlobalNet> = Vec::new();
        let mut named_groups: HashMap<String, usize> = HashMap::new();
        let mut anonymous_counter = 0_usize;

        for &id in &self.net_order {
            let Ok(net) = self.net(id) else {
                continue;
            };
            if net.name().is_empty() {
                anonymous_counter += 1;
                groups.push(GlobalNet {
                    name: format!("N{anonymous_counter:03}"),
                    nets: vec![id],
                });
            } else if let Some(&index) = named_groups.get(net.name()) {
                groups[index].nets.push(id);
            } else {
                named_groups.insert(net.name().to_owned(), groups.len());
                groups.push(GlobalNet {
                    name: net.name().to_owned(),
                    nets: vec![id],
                });
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Net;

    fn manager_with_names(names: &[&str]) -> Manager {
        let mut manager = Manager::new();
        for &name in names {
            manager.add_net(Net::with_name(name));
        }
        manager
    }

    #[test]
    fn distinct_names_stay_separate() {
        let manager = manager_with_names(&["A", "B", "C"]);

        let groups = manager.global_nets();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[1].name, "B");
        assert_eq!(groups[2].name, "C");
        assert!(groups.iter().all(|g| g.nets.len() == 1));
    }

    #[test]
    fn shared_names_group_together() {
        let manager = manager_with_names(&["A", "B", "C", "A"]);

        let groups = manager.global_nets();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].nets.len(), 2);
        assert_eq!(groups[1].name, "B");
        assert_eq!(groups[1].nets.len(), 1);
        assert_eq!(groups[2].name, "C");
        assert_eq!(groups[2].nets.len(), 1);
    }

    #[test]
    fn anonymous_nets_get_sequential_names() {
        let manager = manager_with_names(&["", "", "", ""]);

        let groups = manager.global_nets();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].name, "N001");
        assert_eq!(groups[1].name, "N002");
        assert_eq!(groups[2].name, "N003");
        assert_eq!(groups[3].name, "N004");
        assert!(groups.iter().all(|g| g.nets.len() == 1));
    }

    #[test]
    fn mixed_named_and_anonymous_nets() {
        let manager = manager_with_names(&["A", "", "", "A", "B", ""]);

        let groups = manager.global_nets();
        assert_eq!(groups.len(), 5);

        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].nets.len(), 2);

        assert_eq!(groups[1].name, "N001");
        assert_eq!(groups[1].nets.len(), 1);

        assert_eq!(groups[2].name, "N002");
        assert_eq!(groups[2].nets.len(), 1);

        assert_eq!(groups[3].name, "B");
        assert_eq!(groups[3].nets.len(), 1);

        assert_eq!(groups[4].name, "N003");
        assert_eq!(groups[4].nets.len(), 1);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let manager = manager_with_names(&["A", "", "B", ""]);
        assert_eq!(manager.global_nets(), manager.global_nets());
    }

    #[test]
    fn a_named_net_never_joins_a_synthesized_group() {
        // The synthesized "N001" must not capture a real net named "N001".
        let manager = manager_with_names(&["", "N001"]);

        let groups = manager.global_nets();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "N001");
        assert_eq!(groups[1].name, "N001");
    }
}
