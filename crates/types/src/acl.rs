/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::{self, Display};

use crate::principal::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Privilege {
    Read = 0,
    Write = 1,
    WriteProperties = 2,
    WriteContent = 3,
    ReadAcl = 4,
    WriteAcl = 5,
    Bind = 6,
    Unbind = 7,
    All = 8,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Href(pub String);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum AcePrincipal {
    Href(Href),
    Authenticated,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Ace {
    pub principal: AcePrincipal,
    pub privilege: Privilege,
    pub protected: bool,
}

impl Ace {
    pub fn new(principal: AcePrincipal, privilege: Privilege) -> Self {
        Ace {
            principal,
            privilege,
            protected: false,
        }
    }

    pub fn protected(principal: AcePrincipal, privilege: Privilege) -> Self {
        Ace {
            principal,
            privilege,
            protected: true,
        }
    }
}

impl Privilege {
    pub fn parse(value: &str) -> Option<Self> {
        hashify::tiny_map!(value.as_bytes(),
            "read" => Privilege::Read,
            "write" => Privilege::Write,
            "write-properties" => Privilege::WriteProperties,
            "write-content" => Privilege::WriteContent,
            "read-acl" => Privilege::ReadAcl,
            "write-acl" => Privilege::WriteAcl,
            "bind" => Privilege::Bind,
            "unbind" => Privilege::Unbind,
            "all" => Privilege::All,
        )
    }

    fn as_str(&self) -> &'static str {
        match self {
            Privilege::Read => "read",
            Privilege::Write => "write",
            Privilege::WriteProperties => "write-properties",
            Privilege::WriteContent => "write-content",
            Privilege::ReadAcl => "read-acl",
            Privilege::WriteAcl => "write-acl",
            Privilege::Bind => "bind",
            Privilege::Unbind => "unbind",
            Privilege::All => "all",
        }
    }
}

impl Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Privilege {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Href {
    pub fn new(value: impl Into<String>) -> Self {
        Href(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Principal> for AcePrincipal {
    fn from(principal: &Principal) -> Self {
        AcePrincipal::Href(Href(principal.as_str().to_string()))
    }
}
