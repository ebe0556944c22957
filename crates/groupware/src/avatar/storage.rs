/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use super::AvatarImage;
use crate::StoreError;

/// Backend contract for avatar lookups. Resolving a user yields a handle,
/// which is then asked for size variants.
pub trait AvatarStore: Sync + Send {
    type Handle: AvatarHandle;

    fn avatar(
        &self,
        user: &str,
    ) -> impl Future<Output = Result<Option<Self::Handle>, StoreError>> + Send;
}

pub trait AvatarHandle: Sync + Send {
    /// A scaled variant of the avatar, or `None` when the backend cannot
    /// produce one at this size.
    fn scaled(
        &self,
        size: u32,
    ) -> impl Future<Output = Result<Option<AvatarImage>, StoreError>> + Send;
}
