use crate::app::domain::{HierarchyDomain, RiskLevel};
use crate::app::hierarchy::{tree, HierarchyNode, NodeAttributes};
use crate::app::workspace::Workspace;
use crate::seeds::{node, Seed, SeedError, SeedOutcome};

/// Demo group: G-Pharma with QA and QC departments, plus two sister sites.
pub struct DemoOrganization;

fn company(code: &str, name: &str, address: &str, manager: &str, departments: Vec<HierarchyNode>) -> HierarchyNode {
    let attributes = NodeAttributes {
        address: Some(address.to_string()),
        manager: Some(manager.to_string()),
        ..NodeAttributes::default()
    };
    node(code, name, attributes, departments)
}

fn department(code: &str, name: &str, manager: &str, positions: Vec<HierarchyNode>) -> HierarchyNode {
    let attributes = NodeAttributes {
        manager: Some(manager.to_string()),
        is_gxp: true,
        ..NodeAttributes::default()
    };
    node(code, name, attributes, positions)
}

fn position(code: &str, name: &str, risk_level: RiskLevel) -> HierarchyNode {
    let attributes = NodeAttributes {
        risk_level: Some(risk_level),
        ..NodeAttributes::default()
    };
    node(code, name, attributes, Vec::new())
}

impl Seed for DemoOrganization {
    fn version(&self) -> i64 {
        20260101000100
    }

    fn description(&self) -> &str {
        "demo_organization"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        let domain = HierarchyDomain::Organization;
        if !workspace.hierarchy.forest(domain).is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let forest = vec![
            company(
                "01",
                "G-Pharma Ltd.",
                "Biomedical Park, Building A1",
                "Wang Limin",
                vec![
                    department(
                        "0101",
                        "Quality Assurance (QA)",
                        "Zhang Limin",
                        vec![
                            position("010101", "QA Manager", RiskLevel::High),
                            position("010102", "Validation Engineer", RiskLevel::High),
                            position("010103", "Documentation Specialist", RiskLevel::Medium),
                        ],
                    ),
                    department(
                        "0102",
                        "Quality Control (QC)",
                        "Li Xiaohua",
                        vec![
                            position("010201", "QC Analyst", RiskLevel::High),
                            position("010202", "QC Lead", RiskLevel::High),
                        ],
                    ),
                ],
            ),
            company("02", "G-Pharma R&D Center (Shanghai)", "Zhangjiang Hi-Tech Park", "Chen Jie", Vec::new()),
            company("03", "G-Pharma Biologics Plant", "Riverside Industrial Zone", "Liu Yang", Vec::new()),
        ];
        workspace.hierarchy.seed_forest(domain, forest)?;

        // QC starts collapsed.
        let qc = tree::find_by_code(workspace.hierarchy.forest(domain), "0102")
            .map(|n| n.id.clone())
            .ok_or_else(|| SeedError::MissingReference("department 0102".to_string()))?;
        workspace.hierarchy.toggle_open(domain, &qc);

        Ok(SeedOutcome::Applied)
    }
}
