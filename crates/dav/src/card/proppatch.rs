/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use groupware::{contact::storage::ContactStore, sharing::DavCollection};
use types::dead_property::PropPatch;

use super::AddressBookNode;
use crate::DavError;

impl<S: ContactStore, C: DavCollection> AddressBookNode<'_, S, C> {
    /// Shared recipients may never alter address book properties.
    pub async fn prop_patch(&self, patch: &PropPatch) -> crate::Result<()> {
        if self.book.is_share() {
            return Err(DavError::PermissionDenied);
        }
        self.base.prop_patch(patch).await.map_err(Into::into)
    }
}
