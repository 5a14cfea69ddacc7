//! Dependency bump regrouping
//!
//! Dependency sections from bots tend to list one bump per PR. Entries are
//! partitioned by ecosystem and each non-empty ecosystem collapses into a
//! single line such as `[1](a), [2](b) & [3](c) Bump Go dependencies`.

use chronicle_core::config::DependencyGroupConfig;
use tracing::debug;

use crate::types::ChangeRecord;

/// Change records of one ecosystem
#[derive(Debug, Clone)]
pub struct DependencyGroup<'a> {
    config: &'a DependencyGroupConfig,
    members: Vec<ChangeRecord>,
}

impl<'a> DependencyGroup<'a> {
    fn new(config: &'a DependencyGroupConfig) -> Self {
        Self {
            config,
            members: Vec::new(),
        }
    }

    /// Ecosystem name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Records assigned to this group, in document order
    pub fn members(&self) -> &[ChangeRecord] {
        &self.members
    }

    /// Check if no record matched
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Collapse the group into a single entry; `None` when empty
    pub fn format(&self) -> Option<String> {
        let first = self.members.first()?;
        let title = self.config.title.as_deref().unwrap_or(&first.title);
        let references: Vec<String> = self.members.iter().map(ChangeRecord::reference).collect();
        Some(format!("{} {}", join_with_ampersand(&references), title))
    }
}

/// Records split into ecosystem groups and everything else
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    /// Groups in configured order, including empty ones
    pub groups: Vec<DependencyGroup<'a>>,
    /// Records that matched no group, in document order
    pub ordinary: Vec<ChangeRecord>,
}

impl Partition<'_> {
    /// Formatted entries of the non-empty groups, in configured order
    pub fn group_entries(&self) -> Vec<String> {
        self.groups.iter().filter_map(DependencyGroup::format).collect()
    }

    /// Formatted entries of the ordinary records
    pub fn ordinary_entries(&self) -> Vec<String> {
        self.ordinary.iter().map(ChangeRecord::entry).collect()
    }
}

/// Assign each record to the first group whose markers its raw description contains
pub fn partition(records: Vec<ChangeRecord>, configs: &[DependencyGroupConfig]) -> Partition<'_> {
    let mut groups: Vec<DependencyGroup<'_>> = configs.iter().map(DependencyGroup::new).collect();
    let mut ordinary = Vec::new();

    for record in records {
        match groups.iter_mut().find(|g| g.config.matches(&record.description)) {
            Some(group) => group.members.push(record),
            None => ordinary.push(record),
        }
    }

    debug!(
        ordinary = ordinary.len(),
        grouped = groups.iter().map(|g| g.members.len()).sum::<usize>(),
        "dependency records partitioned"
    );

    Partition { groups, ordinary }
}

/// Join parts as prose: `a`, `a & b`, `a, b & c`
pub fn join_with_ampersand(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} & {}", init.join(", "), last),
    }
}
