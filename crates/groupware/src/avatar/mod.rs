/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

pub mod storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl ImageFormat {
    /// Case sensitive, `jpeg` is not accepted as an extension.
    pub fn parse(extension: &str) -> Option<Self> {
        hashify::tiny_map!(extension.as_bytes(),
            "png" => ImageFormat::Png,
            "jpg" => ImageFormat::Jpeg,
        )
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl AvatarImage {
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        AvatarImage {
            data,
            content_type: content_type.into(),
        }
    }

    /// The stored format when the content type is a known image type.
    pub fn format(&self) -> Option<ImageFormat> {
        hashify::tiny_map!(self.content_type.as_bytes(),
            "image/png" => ImageFormat::Png,
            "image/jpeg" => ImageFormat::Jpeg,
        )
    }
}
