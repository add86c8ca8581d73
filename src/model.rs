//! Typed server record and the accessor surface over it.

use serde::Deserialize;

use crate::client::MinehutClient;
use crate::error::Error;

/// One hosted server's configuration and status, as returned by the API.
///
/// Every field is optional on the wire: the API omits keys depending on the
/// server's configuration. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerRecord {
    pub categories: Option<Vec<String>>,
    #[serde(rename = "inheritedCategories")]
    pub inherited_categories: Option<Vec<String>>,
    pub purchased_icons: Option<Vec<String>>,
    pub backup_slots: Option<i32>,
    pub server_version_type: Option<String>,
    /// Empty when the proxy is disabled.
    #[serde(rename = "connectedServers")]
    pub connected_servers: Option<Vec<String>>,
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub motd: Option<String>,
    pub server_plan: Option<String>,
    pub storage_node: Option<String>,
    /// ID of the owning account, not a display name.
    pub owner: Option<String>,
    pub name: Option<String>,
    pub name_lower: Option<String>,
    /// Creation timestamp, epoch milliseconds.
    pub creation: Option<i64>,
    pub platform: Option<String>,
    pub credits_per_day: Option<i32>,
    pub port: Option<i32>,
    /// Last-online timestamp, epoch milliseconds.
    pub last_online: Option<i64>,
    #[serde(rename = "maxPlayers")]
    pub max_players: Option<i32>,
    #[serde(rename = "rawPlan")]
    pub raw_plan: Option<String>,
    #[serde(rename = "activeServerPlan")]
    pub active_server_plan: Option<String>,
    pub visibility: Option<bool>,
    pub proxy: Option<bool>,
    pub suspended: Option<bool>,
    pub using_cosmetics: Option<bool>,
    pub online: Option<bool>,
}

/// Result of a server lookup.
///
/// Holds the record fetched at lookup time, or nothing if the API answered
/// "not found". Accessors never touch the network; they read the record
/// fetched when the lookup ran.
///
/// Optional fields degrade to a sentinel when absent: `None` for strings,
/// sequences and timestamps, `-1` for [`backup_slots`](Self::backup_slots),
/// [`credits_per_day`](Self::credits_per_day), [`port`](Self::port) and
/// [`max_players`](Self::max_players). The API always sends `visibility`,
/// `proxy`, `suspended` and `online` for an existing server, so their
/// accessors return [`Error::MissingField`] instead of a default when the
/// record lacks them (typically after a failed lookup).
#[derive(Debug, Clone, Default)]
pub struct ServerInfo {
    record: Option<ServerRecord>,
}

impl ServerInfo {
    pub(crate) fn resolved(record: ServerRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    pub(crate) fn not_found() -> Self {
        Self { record: None }
    }

    /// Looks up a server by name with a default client.
    ///
    /// Shorthand for [`MinehutClient::new`] followed by
    /// [`server_by_name`](MinehutClient::server_by_name).
    pub fn fetch(name: &str) -> Result<Self, Error> {
        MinehutClient::new()?.server_by_name(name)
    }

    /// Whether the lookup resolved to a record.
    pub fn found(&self) -> bool {
        self.record.is_some()
    }

    /// The full typed record, if the lookup resolved.
    pub fn record(&self) -> Option<&ServerRecord> {
        self.record.as_ref()
    }

    fn has(&self, present: fn(&ServerRecord) -> bool) -> bool {
        self.record.as_ref().is_some_and(present)
    }

    fn required_bool(
        &self,
        field: &'static str,
        get: fn(&ServerRecord) -> Option<bool>,
    ) -> Result<bool, Error> {
        self.record
            .as_ref()
            .and_then(get)
            .ok_or(Error::MissingField(field))
    }

    // Field accessors

    pub fn categories(&self) -> Option<&[String]> {
        self.record.as_ref()?.categories.as_deref()
    }

    pub fn inherited_categories(&self) -> Option<&[String]> {
        self.record.as_ref()?.inherited_categories.as_deref()
    }

    pub fn purchased_icons(&self) -> Option<&[String]> {
        self.record.as_ref()?.purchased_icons.as_deref()
    }

    /// Servers reachable through this one's proxy; empty when the proxy is
    /// disabled.
    pub fn connected_servers(&self) -> Option<&[String]> {
        self.record.as_ref()?.connected_servers.as_deref()
    }

    /// Number of backup slots, `-1` if the API did not send the field.
    pub fn backup_slots(&self) -> i32 {
        self.record
            .as_ref()
            .and_then(|r| r.backup_slots)
            .unwrap_or(-1)
    }

    /// Server version type, e.g. `PAPER`.
    pub fn server_version_type(&self) -> Option<&str> {
        self.record.as_ref()?.server_version_type.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.record.as_ref()?.id.as_deref()
    }

    pub fn motd(&self) -> Option<&str> {
        self.record.as_ref()?.motd.as_deref()
    }

    pub fn server_plan(&self) -> Option<&str> {
        self.record.as_ref()?.server_plan.as_deref()
    }

    /// Storage node the server's data lives on.
    pub fn storage_node(&self) -> Option<&str> {
        self.record.as_ref()?.storage_node.as_deref()
    }

    /// ID of the owning account.
    pub fn owner_id(&self) -> Option<&str> {
        self.record.as_ref()?.owner.as_deref()
    }

    /// Server name as the API stores it, which may differ in case from the
    /// name the lookup was made with.
    pub fn name(&self) -> Option<&str> {
        self.record.as_ref()?.name.as_deref()
    }

    pub fn name_lower(&self) -> Option<&str> {
        self.record.as_ref()?.name_lower.as_deref()
    }

    /// Creation timestamp in epoch milliseconds.
    pub fn creation(&self) -> Option<i64> {
        self.record.as_ref()?.creation
    }

    pub fn platform(&self) -> Option<&str> {
        self.record.as_ref()?.platform.as_deref()
    }

    /// Credits the server earns per day, `-1` if the API did not send the
    /// field.
    pub fn credits_per_day(&self) -> i32 {
        self.record
            .as_ref()
            .and_then(|r| r.credits_per_day)
            .unwrap_or(-1)
    }

    /// Port the server listens on, `-1` if the API did not send the field.
    pub fn port(&self) -> i32 {
        self.record.as_ref().and_then(|r| r.port).unwrap_or(-1)
    }

    /// Last-online timestamp in epoch milliseconds.
    pub fn last_online(&self) -> Option<i64> {
        self.record.as_ref()?.last_online
    }

    /// Player limit, `-1` if the API did not send the field.
    pub fn max_players(&self) -> i32 {
        self.record
            .as_ref()
            .and_then(|r| r.max_players)
            .unwrap_or(-1)
    }

    pub fn raw_plan(&self) -> Option<&str> {
        self.record.as_ref()?.raw_plan.as_deref()
    }

    pub fn active_server_plan(&self) -> Option<&str> {
        self.record.as_ref()?.active_server_plan.as_deref()
    }

    // Status flags

    /// Whether the server is publicly listed.
    pub fn is_visible(&self) -> Result<bool, Error> {
        self.required_bool("visibility", |r| r.visibility)
    }

    pub fn is_proxy(&self) -> Result<bool, Error> {
        self.required_bool("proxy", |r| r.proxy)
    }

    pub fn is_suspended(&self) -> Result<bool, Error> {
        self.required_bool("suspended", |r| r.suspended)
    }

    pub fn is_online(&self) -> Result<bool, Error> {
        self.required_bool("online", |r| r.online)
    }

    /// Whether cosmetics are enabled; `false` when the API did not send the
    /// field.
    pub fn is_using_cosmetics(&self) -> bool {
        self.record
            .as_ref()
            .and_then(|r| r.using_cosmetics)
            .unwrap_or(false)
    }

    // Existence checks

    pub fn has_categories(&self) -> bool {
        self.has(|r| r.categories.is_some())
    }

    pub fn has_inherited_categories(&self) -> bool {
        self.has(|r| r.inherited_categories.is_some())
    }

    pub fn has_purchased_icons(&self) -> bool {
        self.has(|r| r.purchased_icons.is_some())
    }

    pub fn has_backup_slots(&self) -> bool {
        self.has(|r| r.backup_slots.is_some())
    }

    pub fn has_server_version_type(&self) -> bool {
        self.has(|r| r.server_version_type.is_some())
    }

    pub fn has_connected_servers(&self) -> bool {
        self.has(|r| r.connected_servers.is_some())
    }

    pub fn has_id(&self) -> bool {
        self.has(|r| r.id.is_some())
    }

    pub fn has_motd(&self) -> bool {
        self.has(|r| r.motd.is_some())
    }

    pub fn has_server_plan(&self) -> bool {
        self.has(|r| r.server_plan.is_some())
    }

    pub fn has_storage_node(&self) -> bool {
        self.has(|r| r.storage_node.is_some())
    }

    pub fn has_owner_id(&self) -> bool {
        self.has(|r| r.owner.is_some())
    }

    pub fn has_name(&self) -> bool {
        self.has(|r| r.name.is_some())
    }

    pub fn has_name_lower(&self) -> bool {
        self.has(|r| r.name_lower.is_some())
    }

    pub fn has_creation(&self) -> bool {
        self.has(|r| r.creation.is_some())
    }

    pub fn has_platform(&self) -> bool {
        self.has(|r| r.platform.is_some())
    }

    pub fn has_credits_per_day(&self) -> bool {
        self.has(|r| r.credits_per_day.is_some())
    }

    pub fn has_port(&self) -> bool {
        self.has(|r| r.port.is_some())
    }

    pub fn has_last_online(&self) -> bool {
        self.has(|r| r.last_online.is_some())
    }

    pub fn has_max_players(&self) -> bool {
        self.has(|r| r.max_players.is_some())
    }

    pub fn has_raw_plan(&self) -> bool {
        self.has(|r| r.raw_plan.is_some())
    }

    pub fn has_active_server_plan(&self) -> bool {
        self.has(|r| r.active_server_plan.is_some())
    }

    pub fn has_visibility(&self) -> bool {
        self.has(|r| r.visibility.is_some())
    }

    pub fn has_proxy(&self) -> bool {
        self.has(|r| r.proxy.is_some())
    }

    pub fn has_suspended(&self) -> bool {
        self.has(|r| r.suspended.is_some())
    }

    pub fn has_using_cosmetics(&self) -> bool {
        self.has(|r| r.using_cosmetics.is_some())
    }

    pub fn has_online(&self) -> bool {
        self.has(|r| r.online.is_some())
    }
}
