/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

mod acl;
mod delete;
mod proppatch;

use calcard::vcard::VCardProperty;
use chrono::{DateTime, Utc};
use groupware::{
    contact::{AddressBook, ContactCard, Share, storage::ContactStore},
    sharing::DavCollection,
};
use types::{ResourceId, acl::Href, principal::Principal};

use crate::DavError;

/// A CardDAV address book node built from an immutable backend snapshot.
///
/// The node owns no state transitions: every operation is a function of
/// the snapshot plus live backend queries, and mutations go straight to
/// the backend or the base collection.
pub struct AddressBookNode<'x, S: ContactStore, C: DavCollection> {
    store: &'x S,
    base: C,
    book: AddressBook,
}

impl<'x, S: ContactStore, C: DavCollection> AddressBookNode<'x, S, C> {
    pub fn new(store: &'x S, base: C, book: AddressBook) -> Self {
        AddressBookNode { store, base, book }
    }

    pub fn resource_id(&self) -> ResourceId {
        self.book.id
    }

    pub fn name(&self) -> &str {
        self.book.name.as_str()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// The declared sharing owner when this node is a share, otherwise
    /// the owner of the underlying collection.
    pub fn owner(&self) -> Principal {
        self.book
            .owner_principal
            .clone()
            .unwrap_or_else(|| self.base.owner())
    }

    pub async fn resolve_child(&self, name: &str) -> crate::Result<ContactCard> {
        self.store
            .get_card(self.book.id, name)
            .await?
            .ok_or(DavError::NotFound)
    }

    pub async fn shares(&self) -> crate::Result<Vec<Share>> {
        self.store
            .get_shares(self.book.id)
            .await
            .map_err(Into::into)
    }

    pub async fn update_shares(&self, add: &[Share], remove: &[Href]) -> crate::Result<()> {
        tracing::debug!(
            book_id = self.book.id,
            added = add.len(),
            removed = remove.len(),
            "updating address book shares"
        );
        self.store
            .update_shares(self.book.id, add, remove)
            .await
            .map_err(Into::into)
    }

    pub async fn contact_groups(&self) -> crate::Result<Vec<String>> {
        self.store
            .collect_card_properties(self.book.id, &VCardProperty::Categories)
            .await
            .map_err(Into::into)
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.book.modified, 0)
    }
}
