//! Tags

use serde::{Deserialize, Serialize};

use super::de::{lenient_id, lenient_string, null_as_default};

/// A client tag, e.g. a store location or `"VIP"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub tag_id: Option<i64>,

    /// Tag name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tag_name: String,
}

/// All tags of the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    /// Tags, empty when the service sends `null` or nothing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// Answer of a single tag lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagName {
    /// Tag name, missing for unknown ids.
    #[serde(default)]
    pub tag_name: Option<String>,
}

/// Whether a tag creation request matched an existing tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    /// The tag already existed.
    Exists,

    /// The tag was created.
    #[default]
    New,
}

/// A tag returned by tag creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTag {
    /// Tag name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Tag id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,

    /// Whether the tag was new.
    #[serde(default)]
    pub status: TagStatus,
}

/// `{"tags": [...]}` request body.
#[derive(Debug, Serialize)]
pub(crate) struct TagBatch {
    pub(crate) tags: Vec<String>,
}
