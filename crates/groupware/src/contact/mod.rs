/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod storage;

use ahash::AHashSet;
use calcard::vcard::{VCard, VCardProperty};
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use types::{ResourceId, acl::Href, dead_property::DeadProperty, principal::Principal};

/// Snapshot of an address book collection as loaded from the backend.
///
/// `owner_principal` is set when the book was shared into the account it
/// was loaded from; it then names the sharer, while the resolver that
/// produced the snapshot keeps the base owner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBook {
    pub id: ResourceId,
    pub name: CompactString,
    pub owner_principal: Option<Principal>,
    pub read_only: bool,
    pub dead_properties: DeadProperty,
    pub created: i64,
    pub modified: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: CompactString,
    pub display_name: Option<String>,
    pub card: VCard,
    pub size: u32,
    pub created: i64,
    pub modified: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Share {
    pub href: Href,
    pub common_name: Option<String>,
    pub summary: Option<String>,
    pub read_only: bool,
    pub status: ShareStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ShareStatus {
    Accepted,
    Declined,
    #[default]
    NoResponse,
    Invalid,
}

impl AddressBook {
    pub fn is_share(&self) -> bool {
        self.owner_principal.is_some()
    }
}

impl ContactCard {
    pub fn property_values<'x>(
        &'x self,
        property: &'x VCardProperty,
    ) -> impl Iterator<Item = &'x str> {
        self.card
            .properties(property)
            .flat_map(|e| e.values.iter().filter_map(|v| v.as_text()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.property_values(&VCardProperty::Categories)
    }

    pub fn address_data(&self) -> String {
        self.card.to_string()
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.modified, 0)
    }
}

/// Collect the distinct values of a vCard property across a set of cards,
/// in encounter order.
pub fn collect_card_properties<'x>(
    cards: impl Iterator<Item = &'x ContactCard>,
    property: &VCardProperty,
) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut values = Vec::new();
    for card in cards {
        for value in card.property_values(property) {
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}
