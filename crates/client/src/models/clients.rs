//! Clients

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::de::{lenient_id, lenient_string, null_as_default};

/// Client gender as encoded by the service (`0` unknown, `1` male, `2` female).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sex {
    /// Not specified.
    #[default]
    Unknown,

    /// Male.
    Male,

    /// Female.
    Female,
}

impl Sex {
    /// Wire code.
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Decode a wire code; unknown codes map to [`Sex::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_id(deserializer)?.map_or(Self::Unknown, Self::from_code))
    }
}

/// Card state (`0` created, `1` active, `2` deleted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientStatus {
    /// Card issued but not yet activated.
    #[default]
    Created,

    /// Card in use.
    Active,

    /// Card removed.
    Deleted,

    /// A code this library does not know.
    Other(i64),
}

impl ClientStatus {
    /// Wire code.
    pub fn code(self) -> i64 {
        match self {
            Self::Created => 0,
            Self::Active => 1,
            Self::Deleted => 2,
            Self::Other(code) => code,
        }
    }

    /// Decode a wire code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Created,
            1 => Self::Active,
            2 => Self::Deleted,
            other => Self::Other(other),
        }
    }
}

impl Serialize for ClientStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ClientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_id(deserializer)?.map_or(Self::Created, Self::from_code))
    }
}

/// Client card details returned by a lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub client_id: Option<i64>,

    /// Card template id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub template_id: Option<i64>,

    /// Card template name, e.g. `"Discount 5%"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub template_name: String,

    /// Printed card number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_number: String,

    /// Card token or barcode.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_barcode: String,

    /// Phone number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,

    /// Last name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,

    /// First name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,

    /// Patronymic.
    #[serde(default, deserialize_with = "lenient_string")]
    pub patronymic: String,

    /// E-mail address.
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    /// Gender.
    #[serde(default)]
    pub sex: Sex,

    /// Birthday as sent by the service, e.g. `"2018-01-01"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub birthday: String,

    /// Free-form comment.
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment: String,

    /// Tag ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<i64>,

    /// Bonus balance.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bonus_balance: Decimal,

    /// Maximum share of a purchase payable with bonuses, in percent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_percent_bonus_write_off: Decimal,

    /// Deposit balance.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit_balance: Decimal,

    /// Sum of all visits after discounts.
    // The service has been seen spelling this key with a Cyrillic "с".
    #[serde(
        default,
        alias = "sumAllDisсount",
        deserialize_with = "null_as_default"
    )]
    pub sum_all_discount: Decimal,
}

/// A client as listed by the client feeds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Client id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub client_id: Option<i64>,

    /// Card link hash.
    #[serde(default, deserialize_with = "lenient_string")]
    pub hash: String,

    /// Card state.
    #[serde(default)]
    pub status: ClientStatus,

    /// Last name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,

    /// First name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,

    /// Patronymic.
    #[serde(default, deserialize_with = "lenient_string")]
    pub patronymic: String,

    /// Phone number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,

    /// E-mail address.
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    /// Gender.
    #[serde(default)]
    pub sex: Sex,

    /// Birthday as sent by the service.
    #[serde(default, deserialize_with = "lenient_string")]
    pub birthday: String,

    /// Card template id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub template_id: Option<i64>,

    /// Printed card number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_number: String,

    /// Card token or barcode.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_barcode: String,

    /// Free-form comment.
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment: String,

    /// Tag ids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<i64>,
}

/// A page of the client feed. The service sends `null` when there are no clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientList {
    /// Clients on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clients: Vec<ClientRecord>,
}

/// A client to register.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// Last name.
    pub last_name: String,

    /// First name.
    pub first_name: String,

    /// Patronymic.
    pub patronymic: String,

    /// Phone number, required and unique.
    pub phone: String,

    /// E-mail address.
    pub email: String,

    /// Gender.
    pub sex: Sex,

    /// Birthday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Date>,

    /// Card template id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,

    /// Printed card number, unique.
    pub card_number: String,

    /// Card token or barcode, latin letters and digits only.
    pub card_barcode: String,

    /// Free-form comment.
    pub comment: String,

    /// Tag ids.
    pub tags: Vec<i64>,
}

impl NewClient {
    /// A client with the required fields set and every optional field empty.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        card_number: impl Into<String>,
        card_barcode: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            card_number: card_number.into(),
            card_barcode: card_barcode.into(),
            ..Self::default()
        }
    }
}

/// Changes to an existing client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    /// Client to update.
    pub client_id: i64,

    /// New client details.
    #[serde(flatten)]
    pub client: NewClient,
}

/// Identifiers of a client the service created or updated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClient {
    /// Client id.
    #[serde(default, deserialize_with = "lenient_id")]
    pub client_id: Option<i64>,

    /// Phone number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,

    /// Printed card number.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_number: String,

    /// Card token or barcode.
    #[serde(default, deserialize_with = "lenient_string")]
    pub card_barcode: String,

    /// Card link hash.
    #[serde(default, deserialize_with = "lenient_string")]
    pub hash: String,
}

/// `{"clients": [...]}` request body.
#[derive(Debug, Serialize)]
pub(crate) struct ClientBatch<T> {
    pub(crate) clients: Vec<T>,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn client_info_decodes_mixed_types() -> TestResult {
        let info: ClientInfo = serde_json::from_value(json!({
            "clientId": 1234,
            "templateId": 123,
            "cardNumber": "1234",
            "cardBarcode": "dld123s",
            "phone": "79777121350",
            "lastName": "Chekhov",
            "firstName": "Anton",
            "patronymic": "Pavlovich",
            "email": "mail@mail.ru",
            "sex": 1,
            "birthday": "2018-01-01",
            "templateName": "Discount 5%",
            "comment": "Stingy with tips",
            "tags": [123, 124],
            "bonusBalance": "125.00",
            "maxPercentBonusWriteOff": "10",
            "depositBalance": "10.00",
            "sumAllDisсount": "1200.00",
        }))?;

        assert_eq!(info.client_id, Some(1234));
        assert_eq!(info.sex, Sex::Male);
        assert_eq!(info.tags, vec![123, 124]);
        assert_eq!(info.bonus_balance, dec!(125.00));
        assert_eq!(info.max_percent_bonus_write_off, dec!(10));
        assert_eq!(info.sum_all_discount, dec!(1200.00));

        Ok(())
    }

    #[test]
    fn client_list_null_is_empty() -> TestResult {
        let list: ClientList = serde_json::from_value(json!({ "clients": null }))?;

        assert!(list.clients.is_empty());

        Ok(())
    }

    #[test]
    fn client_record_status_codes() -> TestResult {
        let list: ClientList = serde_json::from_value(json!({
            "clients": [
                { "clientId": 1, "status": 1 },
                { "clientId": 2, "status": "2" },
                { "clientId": 3, "status": 9 },
            ]
        }))?;

        let statuses: Vec<ClientStatus> = list.clients.iter().map(|client| client.status).collect();

        assert_eq!(
            statuses,
            vec![
                ClientStatus::Active,
                ClientStatus::Deleted,
                ClientStatus::Other(9)
            ]
        );

        Ok(())
    }

    #[test]
    fn new_client_serializes_to_wire_shape() -> TestResult {
        let client = NewClient {
            birthday: Some(date(2018, 1, 1)),
            template_id: Some(123),
            sex: Sex::Male,
            tags: vec![123, 124],
            ..NewClient::new("Anton", "Chekhov", "79777121350", "1234", "dld123s")
        };

        let value = serde_json::to_value(&client)?;

        assert_eq!(
            value,
            json!({
                "lastName": "Chekhov",
                "firstName": "Anton",
                "patronymic": "",
                "phone": "79777121350",
                "email": "",
                "sex": 1,
                "birthday": "2018-01-01",
                "templateId": 123,
                "cardNumber": "1234",
                "cardBarcode": "dld123s",
                "comment": "",
                "tags": [123, 124],
            })
        );

        Ok(())
    }

    #[test]
    fn new_client_omits_unset_optionals() -> TestResult {
        let client = NewClient::new("Anton", "Chekhov", "79777121350", "1234", "dld123s");

        let value = serde_json::to_value(&client)?;

        assert!(value.get("birthday").is_none());
        assert!(value.get("templateId").is_none());

        Ok(())
    }

    #[test]
    fn client_update_flattens_client() -> TestResult {
        let update = ClientUpdate {
            client_id: 1234,
            client: NewClient::new("Anton", "Chekhov", "79777121350", "1234", "dld123s"),
        };

        let value = serde_json::to_value(&update)?;

        assert_eq!(value["clientId"], json!(1234));
        assert_eq!(value["phone"], json!("79777121350"));

        Ok(())
    }
}
