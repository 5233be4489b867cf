//! Card templates

use serde::{Deserialize, Serialize};

use super::de::{lenient_id, lenient_string};

/// A card template (layout) clients can be issued with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Template id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,

    /// Template name, e.g. `"Discount 5%"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}
