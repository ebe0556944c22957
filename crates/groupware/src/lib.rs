/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::borrow::Cow;
use std::fmt::{self, Display};

pub mod avatar;
pub mod contact;
pub mod sharing;

/// Opaque failure reported by a storage backend. Never interpreted or
/// retried by the callers, only propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub reason: Cow<'static, str>,
}

impl StoreError {
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        StoreError {
            reason: reason.into(),
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "storage failure: {}", self.reason)
    }
}

impl std::error::Error for StoreError {}
