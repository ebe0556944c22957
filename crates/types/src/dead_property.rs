/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "test_mode", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "test_mode", serde(tag = "type", content = "data"))]
pub enum DeadPropertyTag {
    ElementStart(DeadElementTag),
    ElementEnd,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "test_mode", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadElementTag {
    pub name: String,
    pub attrs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "test_mode", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "test_mode", serde(transparent))]
#[repr(transparent)]
pub struct DeadProperty(pub Vec<DeadPropertyTag>);

/// An ordered batch of dead property changes: removals are applied first,
/// then additions, so setting an element replaces any previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropPatch {
    pub set: Vec<(DeadElementTag, Vec<DeadPropertyTag>)>,
    pub remove: Vec<DeadElementTag>,
}

impl DeadProperty {
    pub fn find_tag(&self, needle: &str) -> Option<DeadProperty> {
        let mut depth: u32 = 0;
        let mut tags = Vec::new();
        let mut found_tag = false;

        for tag in self.0.iter() {
            match tag {
                DeadPropertyTag::ElementStart(start) => {
                    if depth == 0 && start.name == needle {
                        found_tag = true;
                    } else if found_tag {
                        tags.push(tag.clone());
                    }

                    depth += 1;
                }
                DeadPropertyTag::ElementEnd => {
                    if found_tag {
                        if depth == 1 {
                            break;
                        } else {
                            tags.push(tag.clone());
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                DeadPropertyTag::Text(_) => {
                    if found_tag {
                        tags.push(tag.clone());
                    }
                }
            }
        }

        if found_tag {
            Some(DeadProperty(tags))
        } else {
            None
        }
    }

    pub fn remove_element(&mut self, element: &DeadElementTag) {
        let mut depth = 0;
        let mut remove = false;
        self.0.retain(|item| match item {
            DeadPropertyTag::ElementStart(tag) => {
                if depth == 0 && !remove && tag.name == element.name {
                    remove = true;
                }
                depth += 1;

                !remove
            }
            DeadPropertyTag::ElementEnd => {
                depth -= 1;
                if remove && depth == 0 {
                    remove = false;
                    false
                } else {
                    !remove
                }
            }
            _ => !remove,
        });
    }

    pub fn add_element(&mut self, element: DeadElementTag, values: Vec<DeadPropertyTag>) {
        self.0.push(DeadPropertyTag::ElementStart(element));
        self.0.extend(values);
        self.0.push(DeadPropertyTag::ElementEnd);
    }

    pub fn size(&self) -> usize {
        let mut size = 0;
        for item in &self.0 {
            match item {
                DeadPropertyTag::ElementStart(tag) => {
                    size += tag.size();
                }
                DeadPropertyTag::ElementEnd => {
                    size += 1;
                }
                DeadPropertyTag::Text(text) => {
                    size += text.len();
                }
            }
        }
        size
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl DeadElementTag {
    pub fn new(name: String, attrs: Option<String>) -> Self {
        DeadElementTag { name, attrs }
    }

    pub fn size(&self) -> usize {
        self.name.len() + self.attrs.as_ref().map_or(0, |attrs| attrs.len())
    }
}

impl Default for DeadProperty {
    fn default() -> Self {
        DeadProperty(Vec::with_capacity(4))
    }
}

impl PropPatch {
    pub fn set(mut self, element: DeadElementTag, values: Vec<DeadPropertyTag>) -> Self {
        self.set.push((element, values));
        self
    }

    pub fn remove(mut self, element: DeadElementTag) -> Self {
        self.remove.push(element);
        self
    }

    pub fn has_changes(&self) -> bool {
        !self.set.is_empty() || !self.remove.is_empty()
    }

    pub fn apply(&self, props: &mut DeadProperty) {
        for element in &self.remove {
            props.remove_element(element);
        }
        for (element, values) in &self.set {
            props.remove_element(element);
            props.add_element(element.clone(), values.clone());
        }
    }
}
