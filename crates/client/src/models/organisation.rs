//! Organisation registration and integration updates

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::de::lenient_string;

/// A store or restaurant running the integration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    /// Organisation identifier.
    pub organisation_id: String,

    /// Organisation name.
    pub organisation_name: String,

    /// Version of the integration plugin.
    pub version_plugin: String,

    /// Name of the software being integrated, e.g. a point-of-sale system.
    pub integration_soft_name: String,

    /// Version of that software.
    pub version_integration_soft: String,
}

/// Installed versions of the optional integration modules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationModules {
    /// Uploading new clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unloading_new_clients: Option<String>,

    /// Loading card types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_types_cards: Option<String>,

    /// Loading clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_new_clients: Option<String>,

    /// Transaction synchronisation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronization_order: Option<String>,
}

/// Request for available integration updates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationQuery {
    /// Name of the integrated software.
    pub integration_soft_name: String,

    /// Version of the integrated software.
    pub version_integration_soft: String,

    /// Installed module versions.
    #[serde(rename = "additionModul")]
    pub modules: IntegrationModules,
}

/// Available update for one integration module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleUpdate {
    /// Version available.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,

    /// Base64 encoded binary of the new version.
    #[serde(default, alias = "'base64", deserialize_with = "lenient_string")]
    pub base64: String,

    /// Download link of the new version.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

/// Updates the service offers for an integration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationUpdates {
    /// Name of the integrated software.
    #[serde(default, deserialize_with = "lenient_string")]
    pub integration_soft_name: String,

    /// Version of the integrated software.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version_integration_soft: String,

    /// Updates keyed by module name, `None` when there is nothing to install.
    #[serde(default)]
    pub update: Option<BTreeMap<String, ModuleUpdate>>,
}
