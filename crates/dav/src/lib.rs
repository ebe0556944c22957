/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod avatar;
pub mod card;

use std::fmt::{self, Display};

use groupware::StoreError;
use hyper::StatusCode;

pub type Result<T> = std::result::Result<T, DavError>;

/// Terminal protocol-level outcomes. None of these are retried locally;
/// the engine picks the response status via [`DavError::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DavError {
    PermissionDenied,
    ListingForbidden,
    NotFound,
    InvalidSize,
    UnsupportedMediaKind,
    Store(StoreError),
}

impl DavError {
    pub fn status(&self) -> StatusCode {
        match self {
            DavError::PermissionDenied | DavError::ListingForbidden => StatusCode::FORBIDDEN,
            DavError::NotFound => StatusCode::NOT_FOUND,
            DavError::InvalidSize | DavError::UnsupportedMediaKind => {
                StatusCode::METHOD_NOT_ALLOWED
            }
            DavError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Existence-style outcomes, the only ones an existence probe may
    // fold into a boolean.
    pub(crate) fn is_existence(&self) -> bool {
        matches!(
            self,
            DavError::NotFound | DavError::InvalidSize | DavError::UnsupportedMediaKind
        )
    }
}

impl From<StoreError> for DavError {
    fn from(err: StoreError) -> Self {
        DavError::Store(err)
    }
}

impl Display for DavError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DavError::PermissionDenied => f.write_str("permission denied"),
            DavError::ListingForbidden => f.write_str("listing is not supported"),
            DavError::NotFound => f.write_str("resource not found"),
            DavError::InvalidSize => f.write_str("invalid avatar size"),
            DavError::UnsupportedMediaKind => f.write_str("unsupported media kind"),
            DavError::Store(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for DavError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        for (err, status) in [
            (DavError::PermissionDenied, StatusCode::FORBIDDEN),
            (DavError::ListingForbidden, StatusCode::FORBIDDEN),
            (DavError::NotFound, StatusCode::NOT_FOUND),
            (DavError::InvalidSize, StatusCode::METHOD_NOT_ALLOWED),
            (DavError::UnsupportedMediaKind, StatusCode::METHOD_NOT_ALLOWED),
            (
                DavError::Store(StoreError::new("backend offline")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ] {
            assert_eq!(err.status(), status, "{err}");
        }
    }
}
