mod accounts;
mod catalog;
mod organization;
mod plans;
mod taxonomies;

use crate::app::domain::{HierarchyDomain, NodeCode, NodeId};
use crate::app::hierarchy::{tree, HierarchyError, HierarchyNode, NodeAttributes};
use crate::app::workspace::Workspace;

/// Outcome of running a seed. Skipped seeds found their data already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seed executed and made changes.
    Applied,
    /// Seed chose not to run (target already populated).
    Skipped,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed forest rejected: {0}")]
    Hierarchy(#[from] HierarchyError),
    #[error("Seed data references missing {0}")]
    MissingReference(String),
}

/// Demo data for the in-memory workspace. Seeds run in version order.
pub trait Seed: Send + Sync {
    /// Unique version identifier (timestamp format: YYYYMMDDHHMMSS).
    fn version(&self) -> i64;

    /// Human-readable description of the seed.
    fn description(&self) -> &str;

    /// Execute the seed. Return Skipped when the data it owns is already there.
    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError>;
}

/// All seeds in execution order (sorted by version).
pub fn all_seeds() -> Vec<Box<dyn Seed>> {
    let mut seeds: Vec<Box<dyn Seed>> = vec![
        Box::new(organization::DemoOrganization),
        Box::new(taxonomies::CourseTaxonomy),
        Box::new(taxonomies::StudentCategories),
        Box::new(catalog::CourseCatalog),
        Box::new(catalog::QuestionSamples),
        Box::new(plans::AnnualPlans),
        Box::new(plans::CurrentUser),
        Box::new(accounts::DemoAccounts),
        Box::new(accounts::AuditHistory),
    ];
    seeds.sort_by_key(|s| s.version());
    seeds
}

/// Run every seed against `workspace`. Returns how many applied.
pub fn run_seeds(workspace: &mut Workspace) -> Result<usize, SeedError> {
    let mut applied = 0;
    for seed in all_seeds() {
        match seed.run(workspace)? {
            SeedOutcome::Applied => {
                applied += 1;
                tracing::info!(version = seed.version(), description = seed.description(), "seed applied");
            }
            SeedOutcome::Skipped => {
                tracing::debug!(version = seed.version(), description = seed.description(), "seed skipped");
            }
        }
    }
    Ok(applied)
}

/// A seed node with a fixed code. Codes are checked when the forest is installed.
pub(crate) fn node(code: &str, name: &str, attributes: NodeAttributes, children: Vec<HierarchyNode>) -> HierarchyNode {
    HierarchyNode {
        id: NodeId::new(),
        code: NodeCode::new(code),
        name: name.to_string(),
        attributes,
        children,
    }
}

/// Id of the seeded organization unit with `code`.
pub(crate) fn org_unit(workspace: &Workspace, code: &str) -> Result<NodeId, SeedError> {
    tree::find_by_code(workspace.hierarchy.forest(HierarchyDomain::Organization), code)
        .map(|n| n.id.clone())
        .ok_or_else(|| SeedError::MissingReference(format!("organization unit {}", code)))
}

pub(crate) fn leaf(code: &str, name: &str) -> HierarchyNode {
    node(code, name, NodeAttributes::default(), Vec::new())
}
