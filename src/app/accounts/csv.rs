//! Trainee bulk import. Units are given by name and resolved against the organization forest,
//! so a department must exist in organization settings before trainees can be placed in it.

use std::collections::HashMap;

use serde::Serialize;

use super::{AccountDirectory, AccountError, NewAccount, UserAccount};
use crate::app::csv_text;
use crate::app::domain::Role;
use crate::app::hierarchy::{org_settings, HierarchyStore};

pub const TEMPLATE_HEADER: &str =
    "Name,Username,Employee ID,Role (EMPLOYEE/QA_OFFICER/SYSTEM_ADMIN),Company,Department,Position";

const TEMPLATE_ROW: &str =
    "Wang Xiaoming,wangxm,EMP-8801,EMPLOYEE,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist";

const FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraineeImportFailure {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub name: String,
    pub field: String,
    pub reason: String,
}

/// A row identical to an earlier row of the same file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraineeDuplicate {
    pub row: usize,
    pub name: String,
    pub first_row: usize,
}

/// `total` is always `imported + failures + duplicates`.
#[derive(Debug, Clone, Serialize)]
pub struct TraineeImportReport {
    pub total: usize,
    pub imported: Vec<UserAccount>,
    pub failures: Vec<TraineeImportFailure>,
    pub duplicates: Vec<TraineeDuplicate>,
}

pub fn template() -> String {
    csv_text::document(TEMPLATE_HEADER, [TEMPLATE_ROW])
}

fn failure(field: &str, reason: impl Into<String>) -> (String, String) {
    (field.to_string(), reason.into())
}

fn parse_row(fields: &[String], store: &HierarchyStore) -> Result<NewAccount, (String, String)> {
    if fields.len() != FIELD_COUNT {
        return Err(failure(
            "row",
            format!("Expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }
    let field = |i: usize| fields[i].trim();

    for (i, column) in [(0, "name"), (1, "username"), (2, "employee_id")] {
        if field(i).is_empty() {
            return Err(failure(column, format!("Missing {}", column.replace('_', " "))));
        }
    }

    let role: Role = field(3).parse().map_err(|_| {
        failure(
            "role",
            format!(
                "Role [{}] is not valid; expected EMPLOYEE / QA_OFFICER / SYSTEM_ADMIN",
                field(3)
            ),
        )
    })?;

    let placement = org_settings::placement_by_names(store, field(4), field(5), field(6))
        .map_err(|e| failure(e.field(), e.to_string()))?;

    Ok(NewAccount {
        name: field(0).to_string(),
        username: field(1).to_string(),
        employee_id: field(2).to_string(),
        role,
        placement,
    })
}

/// Validate every data row and enrol the valid ones into a copy of `directory`.
/// Returns the updated directory and the report; `directory` itself is untouched.
pub fn import_csv(
    text: &str,
    store: &HierarchyStore,
    directory: &AccountDirectory,
) -> (AccountDirectory, TraineeImportReport) {
    let records = csv_text::data_records(text, "name");
    let mut next = directory.clone();
    let mut first_seen: HashMap<Vec<String>, usize> = HashMap::new();
    let mut imported = Vec::new();
    let mut failures = Vec::new();
    let mut duplicates = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let row = i + 1;
        let name = record.first().map(|n| n.trim().to_string()).unwrap_or_default();

        let key: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
        if let Some(&first_row) = first_seen.get(&key) {
            duplicates.push(TraineeDuplicate { row, name, first_row });
            continue;
        }
        first_seen.insert(key, row);

        let added = parse_row(record, store).and_then(|new| {
            next.add(new).map_err(|e| match e {
                AccountError::EmployeeIdTaken { .. } => failure("employee_id", e.to_string()),
                AccountError::UsernameTaken(_) => failure("username", e.to_string()),
                AccountError::UserNotFound(_) => failure("row", e.to_string()),
            })
        });
        match added {
            Ok(account) => imported.push(account),
            Err((field, reason)) => failures.push(TraineeImportFailure { row, name, field, reason }),
        }
    }

    tracing::info!(
        total = records.len(),
        imported = imported.len(),
        failed = failures.len(),
        duplicates = duplicates.len(),
        "trainee import processed"
    );

    let report = TraineeImportReport {
        total: records.len(),
        imported,
        failures,
        duplicates,
    };
    (next, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::accounts::tests::new_account;
    use crate::app::domain::RiskLevel;
    use crate::app::hierarchy::org_settings::{NewCompany, NewDepartment, NewPosition};

    fn org() -> HierarchyStore {
        let mut store = HierarchyStore::new();
        let company = org_settings::add_company(
            &mut store,
            NewCompany {
                name: "G-Pharma Ltd.".into(),
                address: None,
                manager: None,
            },
        )
        .unwrap();
        let qa = org_settings::add_department(
            &mut store,
            &company.id,
            NewDepartment {
                name: "Quality Assurance (QA)".into(),
                manager: None,
                is_gxp: true,
            },
        )
        .unwrap();
        org_settings::add_position(
            &mut store,
            &qa.id,
            NewPosition {
                name: "Documentation Specialist".into(),
                risk_level: RiskLevel::Medium,
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn template_row_imports_against_matching_org() {
        let store = org();
        let text = template();
        assert!(text.starts_with(csv_text::BOM));

        let (directory, report) = import_csv(&text, &store, &AccountDirectory::default());
        assert_eq!(report.total, 1);
        assert!(report.failures.is_empty(), "{:?}", report.failures);
        assert_eq!(report.imported[0].employee_id, "EMP-8801");
        assert_eq!(directory.all().len(), 1);
    }

    #[test]
    fn rows_fail_with_the_offending_field() {
        let store = org();
        let mut existing = AccountDirectory::default();
        existing.add(new_account("Zhang Limin", "zhanglm", "EMP-102")).unwrap();

        let text = "Name,Username,Employee ID,Role,Company,Department,Position\n\
            Chen Hai,chenh,EMP-102,EMPLOYEE,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist\n\
            Zhang Han,zhangh,EMP-103,EMPLOYEE,G-Pharma Ltd.,Clinical Medicine,Documentation Specialist\n\
            Liz Smith,lsmith,EMP-104,ADMIN,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist\n\
            ,nobody,EMP-105,EMPLOYEE,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist\n\
            Short Row,short\n\
            Ok Person,okp,EMP-106,QA_OFFICER,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist\n";
        let (directory, report) = import_csv(text, &store, &existing);

        let fields: Vec<(usize, &str)> = report
            .failures
            .iter()
            .map(|f| (f.row, f.field.as_str()))
            .collect();
        assert_eq!(
            fields,
            vec![(1, "employee_id"), (2, "department"), (3, "role"), (4, "name"), (5, "row")]
        );
        assert_eq!(report.failures[0].reason, "Employee ID [EMP-102] is already held by Zhang Limin");
        assert_eq!(report.imported.len(), 1);
        assert_eq!(report.imported[0].role, Role::QaOfficer);
        assert_eq!(directory.all().len(), 2);
        assert_eq!(existing.all().len(), 1);
    }

    #[test]
    fn repeated_rows_are_counted_as_duplicates() {
        let store = org();
        let row = "Ana Li,anali,EMP-200,EMPLOYEE,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist";
        let text = format!("{row}\n{row}\n \"Ana Li\" ,anali,EMP-200,EMPLOYEE,G-Pharma Ltd.,Quality Assurance (QA),Documentation Specialist\n");
        let (_, report) = import_csv(&text, &store, &AccountDirectory::default());

        assert_eq!(report.total, 3);
        assert_eq!(report.imported.len(), 1);
        assert_eq!(report.failures.len(), 0);
        assert_eq!(
            report.duplicates,
            vec![
                TraineeDuplicate { row: 2, name: "Ana Li".into(), first_row: 1 },
                TraineeDuplicate { row: 3, name: "Ana Li".into(), first_row: 1 },
            ]
        );
    }
}
