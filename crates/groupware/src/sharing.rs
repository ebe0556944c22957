/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use types::{acl::Ace, dead_property::PropPatch, principal::Principal};

use crate::StoreError;

/// Base behavior of a DAV collection node. Address book nodes hold an
/// implementation of this trait and selectively override parts of it.
pub trait DavCollection: Sync + Send {
    /// ACL of the collection itself before sharing grants are applied.
    fn acl(&self) -> Vec<Ace>;

    /// ACL template for the collection's children before sharing grants
    /// are applied.
    fn child_acl(&self) -> Vec<Ace>;

    /// The principal that owns the underlying collection.
    fn owner(&self) -> Principal;

    fn delete(&self) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn prop_patch(&self, patch: &PropPatch)
    -> impl Future<Output = Result<(), StoreError>> + Send;
}
