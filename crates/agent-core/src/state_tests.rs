// SPDX-License-Identifier: MIT

use crate::entry::{Entry, Operation};
use crate::service::Service;
use crate::state::State;
use crate::tag_entry::TagEntry;

fn entry(value: &str) -> Entry {
    Entry::try_new(
        Operation::Create,
        Some(value.to_string()),
        None,
        None,
        0,
        None,
    )
    .unwrap()
}

#[test]
fn fresh_state_is_empty() {
    assert!(State::default().is_empty());
}

#[test]
fn stage_then_get_round_trips() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/app/cfg", entry("v1"));
    assert_eq!(state.get_entry(Service::Param, "/app/cfg").unwrap().value.as_deref(), Some("v1"));
    assert!(!state.is_empty());
}

#[test]
fn stage_replaces_never_merges() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state.stage_entry(Service::Param, "/k", entry("v2"));
    assert_eq!(state.get_entry(Service::Param, "/k").unwrap().value.as_deref(), Some("v2"));
}

#[test]
fn unstage_on_absent_name_returns_false() {
    let mut state = State::default();
    assert!(!state.unstage_entry(Service::Param, "/missing"));
}

#[test]
fn unstage_tag_leaves_entry_intact() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state
        .stage_tag(
            Service::Param,
            "/k",
            TagEntry::try_new(
                [("env".to_string(), "prod".to_string())].into_iter().collect(),
                Default::default(),
                0,
            )
            .unwrap(),
        );

    assert!(state.unstage_tag(Service::Param, "/k"));
    assert!(state.get_entry(Service::Param, "/k").is_some());
    assert!(state.get_tag(Service::Param, "/k").is_none());
}

#[test]
fn unstage_all_with_service_leaves_other_service_untouched() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state.stage_entry(Service::Secret, "/k", entry("v2"));

    state.unstage_all(Some(Service::Param));

    assert!(state.get_entry(Service::Param, "/k").is_none());
    assert!(state.get_entry(Service::Secret, "/k").is_some());
}

#[test]
fn unstage_all_with_no_service_clears_everything() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state.stage_entry(Service::Secret, "/k", entry("v2"));

    state.unstage_all(None);

    assert!(state.is_empty());
}

#[test]
fn unstage_all_on_empty_state_is_idempotent() {
    let mut state = State::default();
    state.unstage_all(None);
    assert!(state.is_empty());
}

#[test]
fn list_entries_with_filter_only_returns_that_service() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state.stage_entry(Service::Secret, "/k", entry("v2"));

    let filtered = state.list_entries(Some(Service::Param));
    assert_eq!(filtered.param.len(), 1);
    assert!(filtered.secret.is_empty());
}

#[test]
fn list_entries_without_filter_returns_both_services() {
    let mut state = State::default();
    state.stage_entry(Service::Param, "/k", entry("v1"));
    state.stage_entry(Service::Secret, "/k", entry("v2"));

    let all = state.list_entries(None);
    assert_eq!(all.param.len(), 1);
    assert_eq!(all.secret.len(), 1);
}
