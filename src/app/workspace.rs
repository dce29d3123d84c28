use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::app::accounts::AccountDirectory;
use crate::app::audit::{AuditEvent, AuditModule, AuditTrail, Severity};
use crate::app::error::AppError;
use crate::app::hierarchy::HierarchyStore;
use crate::app::question_bank::QuestionBank;
use crate::app::training::{TrainingBook, UserProfile};

/// All console state: hierarchy forests, training data, question bank, accounts and audit trail.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub hierarchy: HierarchyStore,
    pub training: TrainingBook,
    pub questions: QuestionBank,
    pub accounts: AccountDirectory,
    pub audit: AuditTrail,
}

impl Workspace {
    /// Empty forests, no plans, an anonymous current user.
    pub fn empty() -> Self {
        Self {
            hierarchy: HierarchyStore::new(),
            training: TrainingBook::new(UserProfile::default()),
            questions: QuestionBank::default(),
            accounts: AccountDirectory::default(),
            audit: AuditTrail::default(),
        }
    }

    /// Record an operation performed by the current user.
    pub fn record_audit(&mut self, action: &'static str, module: AuditModule, severity: Severity, details: String) {
        let user = &self.training.current_user;
        let (actor_name, actor_id) = if user.name.is_empty() {
            ("System".to_string(), "SYS-001".to_string())
        } else {
            (user.name.clone(), user.employee_id.clone())
        };
        self.audit.record(AuditEvent {
            actor_name,
            actor_id,
            action,
            module,
            details,
            severity,
        });
    }
}

/// Workspace shared between handlers. Guards must be dropped before any `.await`.
#[derive(Debug, Clone)]
pub struct SharedWorkspace(Arc<RwLock<Workspace>>);

impl SharedWorkspace {
    pub fn new(workspace: Workspace) -> Self {
        Self(Arc::new(RwLock::new(workspace)))
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Workspace>, AppError> {
        self.0.read().map_err(|_| {
            tracing::error!("workspace lock poisoned");
            AppError::Internal
        })
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Workspace>, AppError> {
        self.0.write().map_err(|_| {
            tracing::error!("workspace lock poisoned");
            AppError::Internal
        })
    }
}
