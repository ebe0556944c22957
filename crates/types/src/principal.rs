/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::{self, Display};

use compact_str::CompactString;

use crate::acl::Href;

pub const SYSTEM_PRINCIPAL: &str = "principals/system/system";

/// A principal URI such as `principals/users/alice`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Principal(CompactString);

impl Principal {
    pub fn new(uri: impl AsRef<str>) -> Self {
        Principal(CompactString::from(uri.as_ref()))
    }

    pub fn system() -> Self {
        Principal(CompactString::const_new(SYSTEM_PRINCIPAL))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    // Last path segment, or the full URI when it has no slash.
    pub fn local_name(&self) -> &str {
        self.0
            .rsplit_once('/')
            .map_or(self.0.as_str(), |(_, name)| name)
    }

    pub fn is_system(&self) -> bool {
        self.0 == SYSTEM_PRINCIPAL
    }

    pub fn share_href(&self) -> Href {
        Href(format!("principal:{}", self.0))
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
