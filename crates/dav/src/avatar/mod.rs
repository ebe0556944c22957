/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use chrono::{DateTime, Utc};
use groupware::avatar::{
    AvatarImage, ImageFormat,
    storage::{AvatarHandle, AvatarStore},
};
use types::principal::Principal;

use crate::DavError;

pub const MAX_AVATAR_SIZE: u32 = 2048;

/// Synthetic per-user avatar collection. Children are size variants
/// named `<size>.<ext>` and exist only when requested exactly; the
/// collection itself is read-only.
pub struct AvatarCollection<'x, A: AvatarStore> {
    store: &'x A,
    principal: Principal,
}

impl<'x, A: AvatarStore> AvatarCollection<'x, A> {
    pub fn new(store: &'x A, principal: Principal) -> Self {
        AvatarCollection { store, principal }
    }

    pub async fn resolve_child(&self, name: &str) -> crate::Result<AvatarImage> {
        // Validate the extension
        let (size, extension) = name.rsplit_once('.').unwrap_or(("", name));
        let format = ImageFormat::parse(extension).ok_or(DavError::UnsupportedMediaKind)?;

        // Validate the size
        let size = parse_avatar_size(size).ok_or(DavError::InvalidSize)?;

        // Fetch the scaled image
        let image = self
            .store
            .avatar(self.principal.local_name())
            .await?
            .ok_or(DavError::NotFound)?
            .scaled(size)
            .await?
            .ok_or(DavError::NotFound)?;

        // A representation stored under a mismatched name is not served
        if image.format().is_some_and(|stored| stored != format) {
            tracing::debug!(
                user = self.principal.local_name(),
                name,
                content_type = image.content_type,
                "avatar content type does not match the requested extension"
            );
            return Err(DavError::NotFound);
        }

        Ok(image)
    }

    pub async fn child_exists(&self, name: &str) -> crate::Result<bool> {
        match self.resolve_child(name).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_existence() => Ok(false),
            Err(err) => Err(err),
        }
    }

    // Enumeration would materialize the synthetic size namespace.
    pub fn list_children(&self) -> crate::Result<Vec<AvatarImage>> {
        Err(DavError::ListingForbidden)
    }

    pub fn create_child(&self, _name: &str, _data: &[u8]) -> crate::Result<()> {
        Err(DavError::PermissionDenied)
    }

    pub fn create_subcollection(&self, _name: &str) -> crate::Result<()> {
        Err(DavError::PermissionDenied)
    }

    pub fn delete(&self) -> crate::Result<()> {
        Err(DavError::PermissionDenied)
    }

    pub fn rename(&self, _name: &str) -> crate::Result<()> {
        Err(DavError::PermissionDenied)
    }

    pub fn name(&self) -> &str {
        self.principal.local_name()
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        None
    }
}

fn parse_avatar_size(value: &str) -> Option<u32> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value
            .parse::<u32>()
            .ok()
            .filter(|size| (1..=MAX_AVATAR_SIZE).contains(size))
    } else {
        None
    }
}
