// SPDX-License-Identifier: MIT

use agent_core::{Entry, Operation, Scope, Service, State, TagEntry};
use agent_protocol::{Hint, Request, ResponseData};
use std::collections::{HashMap, HashSet};

use crate::handler::Handler;

fn scope() -> Scope {
    Scope::new("acct-1", "us-east-1")
}

fn other_scope() -> Scope {
    Scope::new("acct-2", "us-east-1")
}

fn entry() -> Entry {
    Entry::try_new(Operation::Create, Some("v".into()), None, None, 1, None).unwrap()
}

#[test]
fn ping_always_succeeds() {
    let handler = Handler::new();
    let response = handler.dispatch(&Request::Ping);
    assert!(response.success);
}

#[test]
fn is_empty_reflects_store_state() {
    let handler = Handler::new();
    assert!(handler.is_empty());

    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });
    assert!(!handler.is_empty());

    let response = handler.dispatch(&Request::IsEmpty);
    match response.data {
        Some(ResponseData::Empty { empty }) => assert!(!empty),
        other => panic!("unexpected data: {other:?}"),
    }
}

#[test]
fn stage_then_get_entry_round_trips() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    let response = handler.dispatch(&Request::GetEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
    });
    assert!(response.success);
    match response.data {
        Some(ResponseData::Entry { entry: Some(got) }) => assert_eq!(got, entry()),
        other => panic!("unexpected data: {other:?}"),
    }
}

#[test]
fn unstage_missing_entry_returns_not_staged() {
    let handler = Handler::new();
    let response = handler.dispatch(&Request::UnstageEntry {
        scope: scope(),
        service: Service::Param,
        name: "missing".into(),
        hint: Hint::None,
    });
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(agent_protocol::NOT_STAGED));
}

#[test]
fn unstage_present_entry_leaves_scope_empty() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });
    let response = handler.dispatch(&Request::UnstageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        hint: Hint::None,
    });
    assert!(response.success);
    assert!(handler.is_empty());
}

#[test]
fn load_is_an_alias_for_get_state() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    let via_load = handler.dispatch(&Request::Load { scope: scope() });
    let via_get_state = handler.dispatch(&Request::GetState { scope: scope() });
    assert_eq!(via_load.data, via_get_state.data);
}

#[test]
fn take_without_keep_clears_the_scope() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    let response = handler.dispatch(&Request::Take {
        scope: scope(),
        keep: false,
    });
    assert!(response.success);
    match response.data {
        Some(ResponseData::State { state }) => assert!(!state.is_empty()),
        other => panic!("unexpected data: {other:?}"),
    }
    assert!(handler.is_empty());
}

#[test]
fn take_with_keep_preserves_the_scope() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    handler.dispatch(&Request::Take {
        scope: scope(),
        keep: true,
    });
    assert!(!handler.is_empty());

    let response = handler.dispatch(&Request::GetEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
    });
    match response.data {
        Some(ResponseData::Entry { entry: Some(_) }) => {}
        other => panic!("unexpected data: {other:?}"),
    }
}

#[test]
fn two_scopes_never_interfere() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    let other = handler.dispatch(&Request::GetEntry {
        scope: other_scope(),
        service: Service::Param,
        name: "db-url".into(),
    });
    match other.data {
        Some(ResponseData::Entry { entry: None }) => {}
        other => panic!("unexpected data: {other:?}"),
    }
}

#[test]
fn set_state_replaces_the_scope_wholesale() {
    let handler = Handler::new();
    handler.dispatch(&Request::StageEntry {
        scope: scope(),
        service: Service::Param,
        name: "db-url".into(),
        entry: entry(),
    });

    let mut tags = HashMap::new();
    tags.insert(
        "env".into(),
        TagEntry::try_new(
            HashMap::from([("team".to_string(), "payments".to_string())]),
            HashSet::new(),
            2,
        )
        .unwrap(),
    );
    let mut replacement = State::default();
    replacement.tags.secret = tags;

    handler.dispatch(&Request::SetState {
        scope: scope(),
        state: replacement.clone(),
    });

    let response = handler.dispatch(&Request::GetState { scope: scope() });
    match response.data {
        Some(ResponseData::State { state }) => assert_eq!(state, replacement),
        other => panic!("unexpected data: {other:?}"),
    }
}
