//! Organization settings: a company → department → position reading of the organization
//! forest. Additions go through the same store operations as the generic hierarchy manager,
//! so both views always show the same data.

use serde::Serialize;

use super::node::{HierarchyNode, NewNode, NodeAttributes};
use super::store::HierarchyStore;
use super::{tree, HierarchyError};
use crate::app::domain::{HierarchyDomain, NodeCode, NodeId, RiskLevel};

const ORG: HierarchyDomain = HierarchyDomain::Organization;

pub const COMPANY_DEPTH: usize = 0;
pub const DEPARTMENT_DEPTH: usize = 1;
pub const POSITION_DEPTH: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct PositionView {
    pub id: NodeId,
    pub code: NodeCode,
    pub name: String,
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentView {
    pub id: NodeId,
    pub code: NodeCode,
    pub name: String,
    pub manager: Option<String>,
    pub is_gxp: bool,
    pub is_open: bool,
    pub positions: Vec<PositionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyView {
    pub id: NodeId,
    pub code: NodeCode,
    pub name: String,
    pub address: Option<String>,
    pub manager: Option<String>,
    pub is_open: bool,
    pub departments: Vec<DepartmentView>,
}

/// A company, one of its departments and one of that department's positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub company_id: NodeId,
    pub department_id: NodeId,
    pub position_id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("Company [{0}] is not in the organization")]
    UnknownCompany(String),
    #[error("Department [{0}] is not part of the selected company")]
    UnknownDepartment(String),
    #[error("Position [{0}] is not part of the selected department")]
    UnknownPosition(String),
}

impl PlacementError {
    /// The placement column the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            PlacementError::UnknownCompany(_) => "company",
            PlacementError::UnknownDepartment(_) => "department",
            PlacementError::UnknownPosition(_) => "position",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub address: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub manager: Option<String>,
    pub is_gxp: bool,
}

#[derive(Debug, Clone)]
pub struct NewPosition {
    pub name: String,
    pub risk_level: RiskLevel,
}

/// Project the organization forest. Nodes below position level are not part of this view.
pub fn companies(store: &HierarchyStore) -> Vec<CompanyView> {
    let expansion = &store.view(ORG).expansion;
    store
        .forest(ORG)
        .iter()
        .map(|company| CompanyView {
            id: company.id.clone(),
            code: company.code.clone(),
            name: company.name.clone(),
            address: company.attributes.address.clone(),
            manager: company.attributes.manager.clone(),
            is_open: expansion.is_open(&company.id),
            departments: company
                .children
                .iter()
                .map(|dept| DepartmentView {
                    id: dept.id.clone(),
                    code: dept.code.clone(),
                    name: dept.name.clone(),
                    manager: dept.attributes.manager.clone(),
                    is_gxp: dept.attributes.is_gxp,
                    is_open: expansion.is_open(&dept.id),
                    positions: dept
                        .children
                        .iter()
                        .map(|pos| PositionView {
                            id: pos.id.clone(),
                            code: pos.code.clone(),
                            name: pos.name.clone(),
                            risk_level: pos.attributes.risk_level,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

pub fn add_company(store: &mut HierarchyStore, new: NewCompany) -> Result<HierarchyNode, HierarchyError> {
    let attributes = NodeAttributes {
        address: new.address,
        manager: new.manager,
        ..NodeAttributes::default()
    };
    store.add_sibling(ORG, None, NewNode::named(new.name).with_attributes(attributes))
}

pub fn add_department(
    store: &mut HierarchyStore,
    company_id: &NodeId,
    new: NewDepartment,
) -> Result<HierarchyNode, HierarchyError> {
    require_depth(store, company_id, COMPANY_DEPTH, "Departments can only be added to a company")?;
    let attributes = NodeAttributes {
        manager: new.manager,
        is_gxp: new.is_gxp,
        ..NodeAttributes::default()
    };
    store.add_child(ORG, company_id, NewNode::named(new.name).with_attributes(attributes))
}

pub fn add_position(
    store: &mut HierarchyStore,
    department_id: &NodeId,
    new: NewPosition,
) -> Result<HierarchyNode, HierarchyError> {
    require_depth(store, department_id, DEPARTMENT_DEPTH, "Positions can only be added to a department")?;
    let attributes = NodeAttributes {
        risk_level: Some(new.risk_level),
        ..NodeAttributes::default()
    };
    store.add_child(ORG, department_id, NewNode::named(new.name).with_attributes(attributes))
}

fn require_depth(
    store: &HierarchyStore,
    id: &NodeId,
    depth: usize,
    message: &str,
) -> Result<(), HierarchyError> {
    let location = tree::locate(store.forest(ORG), id).ok_or_else(|| HierarchyError::NodeNotFound(id.clone()))?;
    if location.depth != depth {
        return Err(HierarchyError::WrongLevel(message.to_string()));
    }
    Ok(())
}

/// Whether `id` is an organization unit at `depth` (company 0, department 1, position 2).
pub fn is_unit_at(store: &HierarchyStore, id: &NodeId, depth: usize) -> bool {
    tree::locate(store.forest(ORG), id).is_some_and(|location| location.depth == depth)
}

fn is_child_of(store: &HierarchyStore, id: &NodeId, depth: usize, parent: Option<&NodeId>) -> bool {
    tree::locate(store.forest(ORG), id)
        .is_some_and(|location| location.depth == depth && location.parent_id.as_ref() == parent)
}

/// Require the three ids to form one company → department → position path.
pub fn check_placement(store: &HierarchyStore, placement: &Placement) -> Result<(), PlacementError> {
    if !is_child_of(store, &placement.company_id, COMPANY_DEPTH, None) {
        return Err(PlacementError::UnknownCompany(placement.company_id.to_string()));
    }
    if !is_child_of(store, &placement.department_id, DEPARTMENT_DEPTH, Some(&placement.company_id)) {
        return Err(PlacementError::UnknownDepartment(placement.department_id.to_string()));
    }
    if !is_child_of(store, &placement.position_id, POSITION_DEPTH, Some(&placement.department_id)) {
        return Err(PlacementError::UnknownPosition(placement.position_id.to_string()));
    }
    Ok(())
}

fn child_named<'a>(nodes: &'a [HierarchyNode], name: &str) -> Option<&'a HierarchyNode> {
    nodes.iter().find(|n| n.name.trim() == name.trim())
}

/// Resolve a placement from unit names, each looked up under the previous one.
pub fn placement_by_names(
    store: &HierarchyStore,
    company: &str,
    department: &str,
    position: &str,
) -> Result<Placement, PlacementError> {
    let company_node = child_named(store.forest(ORG), company)
        .ok_or_else(|| PlacementError::UnknownCompany(company.to_string()))?;
    let department_node = child_named(&company_node.children, department)
        .ok_or_else(|| PlacementError::UnknownDepartment(department.to_string()))?;
    let position_node = child_named(&department_node.children, position)
        .ok_or_else(|| PlacementError::UnknownPosition(position.to_string()))?;
    Ok(Placement {
        company_id: company_node.id.clone(),
        department_id: department_node.id.clone(),
        position_id: position_node.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str) -> NewCompany {
        NewCompany {
            name: name.to_string(),
            address: Some("Biopark A1".to_string()),
            manager: Some("Wang".to_string()),
        }
    }

    fn department(name: &str) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            manager: None,
            is_gxp: true,
        }
    }

    #[test]
    fn builds_three_level_structure_with_generated_codes() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        let d = add_department(&mut store, &c.id, department("QA")).unwrap();
        let p = add_position(
            &mut store,
            &d.id,
            NewPosition {
                name: "QA Manager".to_string(),
                risk_level: RiskLevel::High,
            },
        )
        .unwrap();

        assert_eq!(c.code.as_str(), "01");
        assert_eq!(d.code.as_str(), "0101");
        assert_eq!(p.code.as_str(), "010101");

        let view = companies(&store);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].address.as_deref(), Some("Biopark A1"));
        assert!(view[0].departments[0].is_gxp);
        assert_eq!(view[0].departments[0].positions[0].risk_level, Some(RiskLevel::High));
    }

    #[test]
    fn generic_edits_show_up_in_org_view() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        store
            .add_child(ORG, &c.id, NewNode::named("Engineering"))
            .unwrap();
        store.rename(ORG, &c.id, "G-Pharma Group").unwrap();

        let view = companies(&store);
        assert_eq!(view[0].name, "G-Pharma Group");
        assert_eq!(view[0].departments[0].name, "Engineering");
        assert_eq!(view[0].departments[0].code.as_str(), "0101");
    }

    #[test]
    fn org_additions_show_up_in_generic_forest() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        let d = add_department(&mut store, &c.id, department("QC")).unwrap();

        let node = store.find(ORG, &d.id).unwrap();
        assert_eq!(node.name, "QC");
        assert!(node.attributes.is_gxp);
    }

    #[test]
    fn departments_only_under_companies() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        let d = add_department(&mut store, &c.id, department("QA")).unwrap();

        let err = add_department(&mut store, &d.id, department("Nested")).unwrap_err();
        assert!(matches!(err, HierarchyError::WrongLevel(_)));

        let err = add_position(
            &mut store,
            &c.id,
            NewPosition {
                name: "Operator".into(),
                risk_level: RiskLevel::Low,
            },
        )
        .unwrap_err();
        assert!(matches!(err, HierarchyError::WrongLevel(_)));
    }

    #[test]
    fn unknown_parent_is_not_found() {
        let mut store = HierarchyStore::new();
        let err = add_department(&mut store, &NodeId::new(), department("QA")).unwrap_err();
        assert!(matches!(err, HierarchyError::NodeNotFound(_)));
    }

    #[test]
    fn unit_depth_checks() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        let d = add_department(&mut store, &c.id, department("QA")).unwrap();

        assert!(is_unit_at(&store, &c.id, COMPANY_DEPTH));
        assert!(is_unit_at(&store, &d.id, DEPARTMENT_DEPTH));
        assert!(!is_unit_at(&store, &d.id, POSITION_DEPTH));
        assert!(!is_unit_at(&store, &NodeId::new(), COMPANY_DEPTH));
    }

    #[test]
    fn placements_must_nest() {
        let mut store = HierarchyStore::new();
        let c = add_company(&mut store, company("G-Pharma")).unwrap();
        let other = add_company(&mut store, company("Biologics")).unwrap();
        let d = add_department(&mut store, &c.id, department("QA")).unwrap();
        let p = add_position(
            &mut store,
            &d.id,
            NewPosition {
                name: "QA Manager".into(),
                risk_level: RiskLevel::High,
            },
        )
        .unwrap();

        let placement = Placement {
            company_id: c.id.clone(),
            department_id: d.id.clone(),
            position_id: p.id.clone(),
        };
        assert_eq!(check_placement(&store, &placement), Ok(()));

        let wrong_company = Placement {
            company_id: other.id.clone(),
            ..placement.clone()
        };
        let err = check_placement(&store, &wrong_company).unwrap_err();
        assert_eq!(err.field(), "department");

        let position_as_department = Placement {
            department_id: p.id.clone(),
            ..placement.clone()
        };
        assert!(check_placement(&store, &position_as_department).is_err());

        assert_eq!(placement_by_names(&store, "G-Pharma", " QA ", "QA Manager"), Ok(placement));
        let err = placement_by_names(&store, "G-Pharma", "Clinical", "QA Manager").unwrap_err();
        assert_eq!(err, PlacementError::UnknownDepartment("Clinical".into()));
        assert_eq!(err.to_string(), "Department [Clinical] is not part of the selected company");
    }
}
