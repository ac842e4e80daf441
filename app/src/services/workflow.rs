//! Validation rules for editing a project's status workflow.
//!
//! The workflow list may grow, shrink or be reordered at will, with one
//! restriction: a status still used by tasks cannot be dropped. Unknown codes
//! are collected exhaustively so the caller can fix the whole submission in
//! one round trip; the in-use check fails fast on the first offender.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Status workflow cannot be empty")]
    EmptyWorkflow,

    #[error("Only project leaders can update status workflow")]
    NotProjectLeader,

    #[error("Invalid status codes")]
    UnknownStatusCodes { codes: Vec<String> },

    #[error("Cannot remove status '{0}' because tasks exist with this status")]
    StatusInUse(String),
}

/// Checks that run before any task-existence query: the list must be
/// non-empty, the requester must lead the project, and every code must exist
/// in the status-definition catalog.
pub fn validate_workflow_request(
    requested: &[String],
    is_leader: bool,
    catalog: &[String],
) -> Result<(), WorkflowError> {
    if requested.is_empty() {
        return Err(WorkflowError::EmptyWorkflow);
    }

    if !is_leader {
        return Err(WorkflowError::NotProjectLeader);
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|code| !catalog.contains(code))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(WorkflowError::UnknownStatusCodes { codes: unknown });
    }

    Ok(())
}

/// Statuses present in the current workflow but absent from the requested
/// one. Order follows the current list; this is a set difference, so a pure
/// reorder yields nothing.
pub fn removed_statuses(current: &[String], requested: &[String]) -> Vec<String> {
    current
        .iter()
        .filter(|status| !requested.contains(status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn catalog() -> Vec<String> {
        codes(&[
            "TO_DO",
            "IN_PROGRESS",
            "IN_REVIEW",
            "DONE",
            "TESTING",
            "AWAITING_APPROVAL",
            "READY_FOR_DEPLOY",
            "ICEBOX",
        ])
    }

    #[test]
    fn empty_workflow_is_rejected_before_authorization() {
        // Even a non-leader sees the emptiness error first.
        let err = validate_workflow_request(&[], false, &catalog()).unwrap_err();
        assert_eq!(err, WorkflowError::EmptyWorkflow);
    }

    #[test]
    fn non_leader_is_rejected() {
        let err =
            validate_workflow_request(&codes(&["TO_DO"]), false, &catalog()).unwrap_err();
        assert_eq!(err, WorkflowError::NotProjectLeader);
    }

    #[test]
    fn known_codes_pass() {
        let requested = codes(&["TO_DO", "IN_PROGRESS", "DONE"]);
        assert!(validate_workflow_request(&requested, true, &catalog()).is_ok());
    }

    #[test]
    fn unknown_codes_are_reported_exhaustively() {
        let requested = codes(&["TO_DO", "FAKE_ONE", "DONE", "FAKE_TWO"]);
        let err = validate_workflow_request(&requested, true, &catalog()).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::UnknownStatusCodes {
                codes: codes(&["FAKE_ONE", "FAKE_TWO"])
            }
        );
    }

    #[test]
    fn single_status_workflow_is_allowed() {
        assert!(validate_workflow_request(&codes(&["DONE"]), true, &catalog()).is_ok());
    }

    #[test]
    fn removed_statuses_is_a_set_difference() {
        let current = codes(&["TO_DO", "IN_PROGRESS", "IN_REVIEW", "DONE"]);
        let requested = codes(&["TO_DO", "IN_PROGRESS", "DONE"]);
        assert_eq!(removed_statuses(&current, &requested), codes(&["IN_REVIEW"]));
    }

    #[test]
    fn reordering_removes_nothing() {
        let current = codes(&["TO_DO", "IN_PROGRESS", "DONE"]);
        let requested = codes(&["DONE", "TO_DO", "IN_PROGRESS"]);
        assert!(removed_statuses(&current, &requested).is_empty());
    }

    #[test]
    fn identical_resubmission_removes_nothing() {
        let current = codes(&["TO_DO", "DONE"]);
        assert!(removed_statuses(&current, &current.clone()).is_empty());
    }

    #[test]
    fn additions_are_never_reported_as_removals() {
        let current = codes(&["TO_DO", "DONE"]);
        let requested = codes(&["TO_DO", "TESTING", "DONE"]);
        assert!(removed_statuses(&current, &requested).is_empty());
    }

    #[test]
    fn shrinking_reports_every_dropped_status_in_current_order() {
        let current = codes(&["TO_DO", "IN_PROGRESS", "IN_REVIEW", "DONE"]);
        let requested = codes(&["DONE"]);
        assert_eq!(
            removed_statuses(&current, &requested),
            codes(&["TO_DO", "IN_PROGRESS", "IN_REVIEW"])
        );
    }

    #[test]
    fn status_in_use_error_names_the_status() {
        let err = WorkflowError::StatusInUse("IN_REVIEW".to_string());
        assert_eq!(
            err.to_string(),
            "Cannot remove status 'IN_REVIEW' because tasks exist with this status"
        );
    }
}
