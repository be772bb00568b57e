// SPDX-License-Identifier: MIT

//! The client-supplied hint annotating why an unstage was issued (spec
//! GLOSSARY "Hint"), used only to classify the auto-shutdown reason.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "apply")]
    Apply,
    #[serde(rename = "reset")]
    Reset,
    #[serde(rename = "persist")]
    Persist,
}
