use crate::app::accounts::{AccountStatus, UserAccount};
use crate::app::audit::{AuditEvent, AuditModule, Severity};
use crate::app::domain::{Role, UserId};
use crate::app::hierarchy::org_settings::Placement;
use crate::app::workspace::Workspace;
use crate::seeds::{org_unit, Seed, SeedError, SeedOutcome};

struct DemoAccount {
    name: &'static str,
    username: &'static str,
    employee_id: &'static str,
    role: Role,
    units: [&'static str; 3],
    status: AccountStatus,
    last_login: Option<&'static str>,
}

const DEMO_ACCOUNTS: [DemoAccount; 5] = [
    DemoAccount {
        name: "Alex Johnson",
        username: "ajohnson",
        employee_id: "EMP-9401",
        role: Role::QaOfficer,
        units: ["01", "0101", "010101"],
        status: AccountStatus::Active,
        last_login: Some("2026-03-02 08:41:12"),
    },
    DemoAccount {
        name: "Sarah Miller",
        username: "smiller",
        employee_id: "EMP-9402",
        role: Role::Employee,
        units: ["01", "0101", "010103"],
        status: AccountStatus::Active,
        last_login: Some("2026-03-01 16:05:47"),
    },
    DemoAccount {
        name: "Zhang Wei",
        username: "zhangw",
        employee_id: "EMP-9403",
        role: Role::Employee,
        units: ["01", "0102", "010201"],
        status: AccountStatus::Active,
        last_login: Some("2026-02-27 10:22:03"),
    },
    DemoAccount {
        name: "Li Na",
        username: "lina",
        employee_id: "EMP-9404",
        role: Role::Employee,
        units: ["01", "0101", "010102"],
        status: AccountStatus::Suspended,
        last_login: Some("2026-01-15 09:12:30"),
    },
    DemoAccount {
        name: "Admin",
        username: "admin",
        employee_id: "SYS-001",
        role: Role::SystemAdmin,
        units: ["01", "0102", "010202"],
        status: AccountStatus::Active,
        last_login: None,
    },
];

/// Trainee directory matching the demo organization.
pub struct DemoAccounts;

impl Seed for DemoAccounts {
    fn version(&self) -> i64 {
        20260101000700
    }

    fn description(&self) -> &str {
        "demo_accounts"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        if !workspace.accounts.all().is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        for demo in &DEMO_ACCOUNTS {
            let [company, department, position] = demo.units;
            let account = UserAccount {
                id: UserId::new(),
                name: demo.name.to_string(),
                username: demo.username.to_string(),
                employee_id: demo.employee_id.to_string(),
                role: demo.role,
                placement: Placement {
                    company_id: org_unit(workspace, company)?,
                    department_id: org_unit(workspace, department)?,
                    position_id: org_unit(workspace, position)?,
                },
                status: demo.status,
                last_login: demo.last_login.map(str::to_string),
            };
            workspace.accounts.insert_existing(account);
        }
        Ok(SeedOutcome::Applied)
    }
}

/// A few historical audit records, oldest first.
pub struct AuditHistory;

impl Seed for AuditHistory {
    fn version(&self) -> i64 {
        20260101000800
    }

    fn description(&self) -> &str {
        "audit_history"
    }

    fn run(&self, workspace: &mut Workspace) -> Result<SeedOutcome, SeedError> {
        if !workspace.audit.is_empty() {
            return Ok(SeedOutcome::Skipped);
        }

        let history = [
            (
                "2026-02-20 14:30:05",
                "Alex Johnson",
                "EMP-9401",
                "RESET_PASSWORD",
                AuditModule::User,
                "Reset the password of Sarah Miller [EMP-9402]",
                Some("10.20.1.45"),
                Severity::Warning,
            ),
            (
                "2026-02-24 09:15:22",
                "Sarah Miller",
                "EMP-9402",
                "UPDATE_COURSE",
                AuditModule::Course,
                "Updated materials of course SOP-QA-012 to version 2.1",
                Some("10.20.1.88"),
                Severity::Info,
            ),
            (
                "2026-02-28 23:59:59",
                "System",
                "SYS-001",
                "AUTO_ARCHIVE",
                AuditModule::System,
                "Archived training records older than 2025",
                None,
                Severity::Info,
            ),
            (
                "2026-03-01 11:02:47",
                "Alex Johnson",
                "EMP-9401",
                "SUSPEND_ACCOUNT",
                AuditModule::User,
                "Suspended account of Li Na [EMP-9404] after role change",
                Some("10.20.1.45"),
                Severity::Danger,
            ),
        ];

        for (timestamp, actor_name, actor_id, action, module, details, ip, severity) in history {
            workspace.audit.append(
                AuditEvent {
                    actor_name: actor_name.to_string(),
                    actor_id: actor_id.to_string(),
                    action,
                    module,
                    details: details.to_string(),
                    severity,
                },
                timestamp.to_string(),
                ip.map(str::to_string),
            );
        }
        Ok(SeedOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::accounts::UserFilter;
    use crate::app::audit::AuditFilter;

    #[test]
    fn demo_accounts_are_placed_in_the_demo_organization() {
        let mut workspace = Workspace::empty();
        crate::seeds::run_seeds(&mut workspace).unwrap();

        let suspended = UserFilter {
            status: Some(AccountStatus::Suspended),
            ..UserFilter::default()
        };
        assert_eq!(workspace.accounts.filter(&suspended)[0].employee_id, "EMP-9404");
        for account in workspace.accounts.all() {
            assert!(crate::app::hierarchy::org_settings::check_placement(&workspace.hierarchy, &account.placement).is_ok());
        }
    }

    #[test]
    fn audit_history_lists_newest_first() {
        let mut workspace = Workspace::empty();
        crate::seeds::run_seeds(&mut workspace).unwrap();

        let records = workspace.audit.filter(&AuditFilter::default());
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].action, "SUSPEND_ACCOUNT");
        assert_eq!(records[3].ip.as_deref(), Some("10.20.1.45"));
    }
}
