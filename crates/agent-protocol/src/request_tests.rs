// SPDX-License-Identifier: MIT

use agent_core::{Entry, Operation, Scope, Service, State, TagEntry};

use crate::hint::Hint;
use crate::request::Request;

fn scope() -> Scope {
    Scope::new("111111111111", "us-east-1")
}

fn sample_entry() -> Entry {
    Entry::try_new(
        Operation::Create,
        Some("v1".to_string()),
        None,
        None,
        0,
        None,
    )
    .unwrap()
}

fn sample_tag() -> TagEntry {
    TagEntry::try_new(
        [("env".to_string(), "prod".to_string())].into_iter().collect(),
        Default::default(),
        0,
    )
    .unwrap()
}

fn all_requests() -> Vec<Request> {
    vec![
        Request::Ping,
        Request::Shutdown,
        Request::GetEntry {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
        },
        Request::GetTag {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
        },
        Request::ListEntries {
            scope: scope(),
            service: None,
        },
        Request::ListEntries {
            scope: scope(),
            service: Some(Service::Secret),
        },
        Request::ListTags {
            scope: scope(),
            service: None,
        },
        Request::Load { scope: scope() },
        Request::StageEntry {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
            entry: sample_entry(),
        },
        Request::StageTag {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
            tag_entry: sample_tag(),
        },
        Request::UnstageEntry {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
            hint: Hint::Reset,
        },
        Request::UnstageTag {
            scope: scope(),
            service: Service::Param,
            name: "/k".to_string(),
            hint: Hint::None,
        },
        Request::UnstageAll {
            scope: scope(),
            service: None,
            hint: Hint::Apply,
        },
        Request::GetState { scope: scope() },
        Request::SetState {
            scope: scope(),
            state: State::default(),
        },
        Request::IsEmpty,
        Request::Take {
            scope: scope(),
            keep: true,
        },
    ]
}

#[test]
fn every_method_round_trips_through_json() {
    for request in all_requests() {
        let json = serde_json::to_string(&request).unwrap();
        let decoded: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request, "round trip failed for {json}");
    }
}

#[test]
fn unknown_method_is_rejected_at_decode_time() {
    let json = r#"{"method":"Frobnicate","account_id":"a","region":"r"}"#;
    assert!(serde_json::from_str::<Request>(json).is_err());
}

#[test]
fn wire_shape_is_flat_with_method_tag() {
    let request = Request::GetEntry {
        scope: scope(),
        service: Service::Param,
        name: "/k".to_string(),
    };
    let value: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["method"], "GetEntry");
    assert_eq!(value["account_id"], "111111111111");
    assert_eq!(value["region"], "us-east-1");
    assert_eq!(value["service"], "param");
    assert_eq!(value["name"], "/k");
}
