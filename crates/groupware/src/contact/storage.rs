/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use calcard::vcard::VCardProperty;
use types::{
    ResourceId,
    acl::{Ace, Href},
};

use super::{ContactCard, Share};
use crate::StoreError;

/// Backend contract for address book contents and sharing state.
///
/// The backend is authoritative for everything behind this trait: share
/// targets are not validated locally and ACL expansion may rewrite or
/// suppress the entries it is given.
pub trait ContactStore: Sync + Send {
    fn get_card(
        &self,
        book_id: ResourceId,
        name: &str,
    ) -> impl Future<Output = Result<Option<ContactCard>, StoreError>> + Send;

    fn get_shares(
        &self,
        book_id: ResourceId,
    ) -> impl Future<Output = Result<Vec<Share>, StoreError>> + Send;

    fn update_shares(
        &self,
        book_id: ResourceId,
        add: &[Share],
        remove: &[Href],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Expand the sharing grants of a book into the ACL built so far and
    /// return the merged list.
    fn apply_share_acl(
        &self,
        book_id: ResourceId,
        acl: Vec<Ace>,
    ) -> impl Future<Output = Result<Vec<Ace>, StoreError>> + Send;

    fn collect_card_properties(
        &self,
        book_id: ResourceId,
        property: &VCardProperty,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;
}
