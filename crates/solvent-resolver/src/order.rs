//! Install ordering for resolved change plans.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use solvent_core::plan::{ChangePlan, PlannedChange};
use solvent_util::errors::SolventError;

use crate::universe::{Universe, UniversePackage};

/// Imposes an execution order on a successful plan.
pub trait PlanOrderer {
    fn order(&self, universe: &Universe, plan: &mut ChangePlan) -> Result<(), SolventError>;
}

/// Orders additions so that dependencies are installed before their
/// dependents, and removals so that dependents are removed first.
///
/// Independent additions are ordered by name, removals in the reverse of that
/// order. When planned packages depend on each other in a cycle, the affected
/// list falls back to the same name-based order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyOrderer;

impl PlanOrderer for DependencyOrderer {
    fn order(&self, universe: &Universe, plan: &mut ChangePlan) -> Result<(), SolventError> {
        if !plan.is_success() {
            return Err(SolventError::Resolution {
                message: "only a successful plan can be ordered".to_string(),
            });
        }
        let packages: HashMap<String, &UniversePackage> = universe
            .iter()
            .map(|pkg| (pkg.package.id(), pkg))
            .collect();

        let additions = dependency_order(plan.additions(), &packages);
        let mut removals = dependency_order(plan.removals(), &packages);
        removals.reverse();
        plan.reorder(additions, removals)
    }
}

/// Graph of planned changes with an edge from each dependency to its dependent.
struct ChangeGraph {
    graph: DiGraph<PlannedChange, ()>,
}

impl ChangeGraph {
    fn build(changes: &[PlannedChange], packages: &HashMap<String, &UniversePackage>) -> Self {
        let mut graph = DiGraph::new();
        let mut by_universe_name: HashMap<&str, NodeIndex> = HashMap::new();
        let mut nodes = Vec::with_capacity(changes.len());
        for change in changes {
            let idx = graph.add_node(change.clone());
            if let Some(pkg) = packages.get(&change.id()) {
                by_universe_name.insert(pkg.universe_name.as_str(), idx);
            }
            nodes.push(idx);
        }
        for (change, &dependent) in changes.iter().zip(&nodes) {
            let Some(pkg) = packages.get(&change.id()) else {
                continue;
            };
            for dep in &pkg.package.dependencies {
                if let Some(&dependency) = by_universe_name.get(dep.name.as_str()) {
                    if dependency != dependent && graph.find_edge(dependency, dependent).is_none() {
                        graph.add_edge(dependency, dependent, ());
                    }
                }
            }
        }
        Self { graph }
    }

    fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    /// Kahn's algorithm, always taking the ready node with the smallest name.
    fn topological(&self) -> Option<Vec<PlannedChange>> {
        let mut in_degree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|idx| {
                let degree = self
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count();
                (idx, degree)
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<(String, NodeIndex)>> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&idx, _)| Reverse((self.name(idx).to_string(), idx)))
            .collect();

        let mut ordered = Vec::with_capacity(self.graph.node_count());
        while let Some(Reverse((_, idx))) = ready.pop() {
            ordered.push(self.graph[idx].clone());
            for next in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse((self.name(next).to_string(), next)));
                    }
                }
            }
        }

        (ordered.len() == self.graph.node_count()).then_some(ordered)
    }
}

fn dependency_order(
    changes: &[PlannedChange],
    packages: &HashMap<String, &UniversePackage>,
) -> Vec<PlannedChange> {
    let graph = ChangeGraph::build(changes, packages);
    graph.topological().unwrap_or_else(|| {
        tracing::warn!("Dependency cycle between planned packages, ordering by name");
        let mut by_name = changes.to_vec();
        by_name.sort_by(|a, b| a.name.cmp(&b.name));
        by_name
    })
}
