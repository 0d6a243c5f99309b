//! Soft contract checks on a decoded episode.
//!
//! The prompt asks the model for 15–28 sequential ten-second groups. Those
//! are requests, not guarantees, so a violation is reported and never fails
//! a generation.

use crate::{Episode, episode::parse_seconds};
use std::collections::HashSet;

/// Fewest groups the prompt asks for.
pub const MIN_GROUPS: usize = 15;
/// Most groups the prompt asks for.
pub const MAX_GROUPS: usize = 28;
/// Fixed length of every group, in seconds.
pub const GROUP_SECONDS: f64 = 10.0;

/// One way an episode departs from what the prompt requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContractViolation {
    /// Group count outside 15–28
    #[display("episode has {} shot groups, expected 15-28", _0)]
    GroupCount(usize),
    /// `groupId` differs from the 1-based position
    #[display("group at position {} has groupId {}", position, group_id)]
    GroupIdOutOfSequence {
        /// 1-based position in the episode
        position: usize,
        /// Identifier the model assigned
        group_id: u32,
    },
    /// Same `groupId` used twice
    #[display("groupId {} appears more than once", _0)]
    DuplicateGroupId(u32),
    /// Duration missing, unreadable, or not ten seconds
    #[display("group {} has duration '{}', expected 10.0s", group_id, duration)]
    GroupDuration {
        /// Offending group
        group_id: u32,
        /// Duration as written by the model
        duration: String,
    },
}

/// List every soft-contract violation, in group order.
///
/// # Examples
///
/// ```
/// use storyboard_core::{Episode, contract_report};
///
/// # fn check(episode: &Episode) {
/// for violation in contract_report(episode) {
///     eprintln!("{violation}");
/// }
/// # }
/// ```
pub fn contract_report(episode: &Episode) -> Vec<ContractViolation> {
    let mut violations = Vec::new();

    let count = episode.groups.len();
    if !(MIN_GROUPS..=MAX_GROUPS).contains(&count) {
        violations.push(ContractViolation::GroupCount(count));
    }

    let mut seen = HashSet::new();
    for (offset, group) in episode.groups.iter().enumerate() {
        let position = offset + 1;
        if !seen.insert(group.group_id) {
            violations.push(ContractViolation::DuplicateGroupId(group.group_id));
        } else if group.group_id as usize != position {
            violations.push(ContractViolation::GroupIdOutOfSequence {
                position,
                group_id: group.group_id,
            });
        }

        let on_time = parse_seconds(&group.duration)
            .is_some_and(|secs| (secs - GROUP_SECONDS).abs() < f64::EPSILON);
        if !on_time {
            violations.push(ContractViolation::GroupDuration {
                group_id: group.group_id,
                duration: group.duration.clone(),
            });
        }
    }

    violations
}
