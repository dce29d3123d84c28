//! Trainee accounts: directory listing with filters, manual enrolment, suspension and CSV import.

pub mod csv;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::app::domain::{NodeId, Role, UserId};
use crate::app::hierarchy::org_settings::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn toggled(self) -> Self {
        match self {
            AccountStatus::Active => AccountStatus::Suspended,
            AccountStatus::Suspended => AccountStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub employee_id: String,
    pub role: Role,
    #[serde(flatten)]
    pub placement: Placement,
    pub status: AccountStatus,
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub employee_id: String,
    pub role: Role,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Username [{0}] is already taken")]
    UsernameTaken(String),
    #[error("Employee ID [{employee_id}] is already held by {holder}")]
    EmployeeIdTaken { employee_id: String, holder: String },
}

/// Directory list filter. Unset fields do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive match against name, employee ID and username.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub status: Option<AccountStatus>,
    pub company_id: Option<NodeId>,
}

impl UserFilter {
    pub fn matches(&self, account: &UserAccount) -> bool {
        let search_ok = self.search.as_deref().map(str::trim).map_or(true, |term| {
            let haystack = format!("{} {} {}", account.name, account.employee_id, account.username).to_lowercase();
            haystack.contains(&term.to_lowercase())
        });
        search_ok
            && self.role.map_or(true, |role| account.role == role)
            && self.status.map_or(true, |status| account.status == status)
            && self
                .company_id
                .as_ref()
                .map_or(true, |company| account.placement.company_id == *company)
    }
}

/// Every account, newest first.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<UserAccount>,
}

impl AccountDirectory {
    pub fn all(&self) -> &[UserAccount] {
        &self.accounts
    }

    pub fn filter(&self, filter: &UserFilter) -> Vec<&UserAccount> {
        self.accounts.iter().filter(|a| filter.matches(a)).collect()
    }

    pub fn find(&self, id: &UserId) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.id == *id)
    }

    fn check_unique(&self, username: &str, employee_id: &str) -> Result<(), AccountError> {
        if let Some(holder) = self
            .accounts
            .iter()
            .find(|a| a.employee_id.eq_ignore_ascii_case(employee_id))
        {
            return Err(AccountError::EmployeeIdTaken {
                employee_id: employee_id.to_string(),
                holder: holder.name.clone(),
            });
        }
        if self.accounts.iter().any(|a| a.username.eq_ignore_ascii_case(username)) {
            return Err(AccountError::UsernameTaken(username.to_string()));
        }
        Ok(())
    }

    /// Enrol a new active account. Username and employee ID must be unused (any case).
    pub fn add(&mut self, new: NewAccount) -> Result<UserAccount, AccountError> {
        self.check_unique(&new.username, &new.employee_id)?;
        let account = UserAccount {
            id: UserId::new(),
            name: new.name,
            username: new.username,
            employee_id: new.employee_id,
            role: new.role,
            placement: new.placement,
            status: AccountStatus::Active,
            last_login: None,
        };
        tracing::info!(user_id = %account.id, employee_id = %account.employee_id, "account added");
        self.accounts.insert(0, account.clone());
        Ok(account)
    }

    /// Flip between active and suspended.
    pub fn toggle_status(&mut self, id: &UserId) -> Result<UserAccount, AccountError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| AccountError::UserNotFound(id.clone()))?;
        account.status = account.status.toggled();
        tracing::info!(user_id = %account.id, status = %account.status, "account status changed");
        Ok(account.clone())
    }

    /// Seeded history: keeps the given login timestamp.
    pub(crate) fn insert_existing(&mut self, account: UserAccount) {
        self.accounts.push(account);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn placement() -> Placement {
        Placement {
            company_id: NodeId::new(),
            department_id: NodeId::new(),
            position_id: NodeId::new(),
        }
    }

    pub(crate) fn new_account(name: &str, username: &str, employee_id: &str) -> NewAccount {
        NewAccount {
            name: name.to_string(),
            username: username.to_string(),
            employee_id: employee_id.to_string(),
            role: Role::Employee,
            placement: placement(),
        }
    }

    #[test]
    fn new_accounts_are_active_and_listed_first() {
        let mut directory = AccountDirectory::default();
        directory.add(new_account("Ada", "ada", "EMP-1")).unwrap();
        let second = directory.add(new_account("Ben", "ben", "EMP-2")).unwrap();

        assert_eq!(second.status, AccountStatus::Active);
        assert_eq!(second.last_login, None);
        assert_eq!(directory.all()[0].name, "Ben");
    }

    #[test]
    fn employee_id_and_username_are_unique() {
        let mut directory = AccountDirectory::default();
        directory.add(new_account("Ada", "ada", "EMP-1")).unwrap();

        let err = directory.add(new_account("Eve", "eve", "emp-1")).unwrap_err();
        assert_eq!(
            err,
            AccountError::EmployeeIdTaken {
                employee_id: "emp-1".into(),
                holder: "Ada".into()
            }
        );
        let err = directory.add(new_account("Ada 2", "ADA", "EMP-3")).unwrap_err();
        assert_eq!(err, AccountError::UsernameTaken("ADA".into()));
        assert_eq!(directory.all().len(), 1);
    }

    #[test]
    fn toggle_flips_status() {
        let mut directory = AccountDirectory::default();
        let ada = directory.add(new_account("Ada", "ada", "EMP-1")).unwrap();

        assert_eq!(directory.toggle_status(&ada.id).unwrap().status, AccountStatus::Suspended);
        assert_eq!(directory.toggle_status(&ada.id).unwrap().status, AccountStatus::Active);
        assert!(matches!(
            directory.toggle_status(&UserId::new()),
            Err(AccountError::UserNotFound(_))
        ));
    }

    #[test]
    fn filter_combines_search_role_status_and_company() {
        let mut directory = AccountDirectory::default();
        let ada = directory.add(new_account("Ada Lovelace", "ada", "EMP-1")).unwrap();
        let mut officer = new_account("Ben Chen", "bchen", "EMP-2");
        officer.role = Role::QaOfficer;
        directory.add(officer).unwrap();
        directory.toggle_status(&ada.id).unwrap();

        let by_search = UserFilter {
            search: Some("emp-2".into()),
            ..UserFilter::default()
        };
        assert_eq!(directory.filter(&by_search)[0].name, "Ben Chen");

        let by_role = UserFilter {
            role: Some(Role::QaOfficer),
            ..UserFilter::default()
        };
        assert_eq!(directory.filter(&by_role).len(), 1);

        let suspended = UserFilter {
            status: Some(AccountStatus::Suspended),
            ..UserFilter::default()
        };
        assert_eq!(directory.filter(&suspended)[0].id, ada.id);

        let by_company = UserFilter {
            company_id: Some(ada.placement.company_id.clone()),
            search: Some("lovelace".into()),
            ..UserFilter::default()
        };
        assert_eq!(directory.filter(&by_company).len(), 1);
        assert_eq!(directory.filter(&UserFilter::default()).len(), 2);
    }
}
