//! Compliance audit trail: an append-only record of key console operations.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use time::{macros::format_description, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AuditModule {
    User,
    Course,
    Organization,
    Plan,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub id: u64,
    /// `YYYY-MM-DD hh:mm:ss`, UTC.
    pub timestamp: String,
    pub actor_name: String,
    pub actor_id: String,
    pub action: String,
    pub module: AuditModule,
    pub details: String,
    pub ip: Option<String>,
    pub severity: Severity,
}

/// What happened, before the trail stamps it with an id and time.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub actor_name: String,
    pub actor_id: String,
    pub action: &'static str,
    pub module: AuditModule,
    pub details: String,
    pub severity: Severity,
}

/// Trail list filter. Unset fields do not filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditFilter {
    /// Case-insensitive match against actor name, actor ID, details and action.
    pub search: Option<String>,
    pub module: Option<AuditModule>,
    pub severity: Option<Severity>,
}

impl AuditFilter {
    pub fn matches(&self, record: &AuditRecord) -> bool {
        let search_ok = self.search.as_deref().map(str::trim).map_or(true, |term| {
            let haystack = format!(
                "{} {} {} {}",
                record.actor_name, record.actor_id, record.details, record.action
            )
            .to_lowercase();
            haystack.contains(&term.to_lowercase())
        });
        search_ok
            && self.module.map_or(true, |module| record.module == module)
            && self.severity.map_or(true, |severity| record.severity == severity)
    }
}

pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// Records in insertion order; listing returns newest first.
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    records: Vec<AuditRecord>,
    next_id: u64,
}

impl AuditTrail {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record stamped now.
    pub fn record(&mut self, event: AuditEvent) -> &AuditRecord {
        self.append(event, now_timestamp(), None)
    }

    /// Append a record with a given time and source address (imported history).
    pub fn append(&mut self, event: AuditEvent, timestamp: String, ip: Option<String>) -> &AuditRecord {
        self.next_id += 1;
        tracing::debug!(action = event.action, module = %event.module, "audit record appended");
        self.records.push(AuditRecord {
            id: self.next_id,
            timestamp,
            actor_name: event.actor_name,
            actor_id: event.actor_id,
            action: event.action.to_string(),
            module: event.module,
            details: event.details,
            ip,
            severity: event.severity,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn filter(&self, filter: &AuditFilter) -> Vec<&AuditRecord> {
        self.records.iter().rev().filter(|r| filter.matches(r)).collect()
    }
}
