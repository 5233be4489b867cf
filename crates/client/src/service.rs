//! Loyalty service facade.
//!
//! [`LoyaltyService`] wraps any [`LoyaltyApi`] with the operations an integration actually
//! performs: single-client registration, recording [`Order`]s and interpreting the service's
//! status answers as plain values.

use std::{fmt, sync::Arc};

use cardloyalty::order::Order;
use jiff::Timestamp;

use crate::{
    api::LoyaltyApi,
    errors::{ClientError, NO_UPDATES_ERROR_ID},
    lookup::ClientLookup,
    models::{
        CardSms, ClientInfo, ClientRecord, ClientUpdate, ClientVariables, CreatedClient,
        CreatedTag, IntegrationQuery, IntegrationUpdates, NewClient, NewOrder, Organisation, Tag,
        Template, TransactionReceipt,
    },
};

/// High-level loyalty operations.
#[derive(Clone)]
pub struct LoyaltyService {
    api: Arc<dyn LoyaltyApi>,
}

impl LoyaltyService {
    /// Create a facade over the given endpoints.
    pub fn new(api: Arc<dyn LoyaltyApi>) -> Self {
        Self { api }
    }

    /// Check if the configured token is accepted.
    pub async fn is_token_valid(&self) -> Result<bool, ClientError> {
        Ok(self.api.ping().await?.is_ok())
    }

    /// Register the organisation. Returns `true` when the service accepted it.
    pub async fn register(&self, organisation: Organisation) -> Result<bool, ClientError> {
        Ok(self.api.register_organisation(organisation).await?.is_ok())
    }

    /// Create a single client.
    pub async fn add_client(&self, client: NewClient) -> Result<CreatedClient, ClientError> {
        self.api
            .create_clients(vec![client])
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse("createClients"))
    }

    /// Update a single client.
    pub async fn update_client(
        &self,
        client_id: i64,
        client: NewClient,
    ) -> Result<CreatedClient, ClientError> {
        self.api
            .update_clients(vec![ClientUpdate { client_id, client }])
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse("updateClients"))
    }

    /// Look up a client card.
    pub async fn client(&self, lookup: ClientLookup) -> Result<ClientInfo, ClientError> {
        self.api.client_info(lookup).await
    }

    /// Page through all clients.
    pub async fn all_clients(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ClientRecord>, ClientError> {
        Ok(self.api.all_clients(limit, offset).await?.clients)
    }

    /// Clients created since the last poll.
    pub async fn new_clients(&self, limit: u32) -> Result<Vec<ClientRecord>, ClientError> {
        Ok(self.api.new_clients(limit).await?.clients)
    }

    /// Record an order for a client.
    #[tracing::instrument(
        name = "cardloyalty.service.create_order",
        skip(self, order),
        fields(client = %lookup, guid = order.transaction_id()),
        err
    )]
    pub async fn create_order(
        &self,
        lookup: ClientLookup,
        order: &Order,
    ) -> Result<TransactionReceipt, ClientError> {
        self.api.create_order(lookup, order.export()).await
    }

    /// Replace a previously recorded order.
    #[tracing::instrument(
        name = "cardloyalty.service.update_order",
        skip(self, order),
        fields(client = %lookup, guid = order.transaction_id()),
        err
    )]
    pub async fn update_order(
        &self,
        lookup: ClientLookup,
        order: &Order,
    ) -> Result<TransactionReceipt, ClientError> {
        self.api.update_order(lookup, order.export()).await
    }

    /// Record a partial return.
    pub async fn return_cart(
        &self,
        lookup: ClientLookup,
        order: &Order,
    ) -> Result<TransactionReceipt, ClientError> {
        self.api.return_cart(lookup, order.export()).await
    }

    /// Replace a previously recorded partial return.
    pub async fn update_return_cart(
        &self,
        lookup: ClientLookup,
        order: &Order,
    ) -> Result<TransactionReceipt, ClientError> {
        self.api.update_return_cart(lookup, order.export()).await
    }

    /// Cancel an order.
    #[tracing::instrument(
        name = "cardloyalty.service.return_order",
        skip(self, order),
        fields(guid = order.transaction_id()),
        err
    )]
    pub async fn return_order(&self, order: &Order) -> Result<TransactionReceipt, ClientError> {
        self.api.return_order(order.cancellation()).await
    }

    /// Transactions recorded on the service side since the last poll.
    pub async fn new_orders(&self, limit: u32) -> Result<Vec<NewOrder>, ClientError> {
        Ok(self.api.new_orders(limit).await?.orders)
    }

    /// Create a tag, or find the existing one with the same name.
    pub async fn add_tag(&self, name: impl Into<String>) -> Result<CreatedTag, ClientError> {
        self.api
            .create_tags(vec![name.into()])
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::EmptyResponse("createTags"))
    }

    /// All tags of the account.
    pub async fn all_tags(&self) -> Result<Vec<Tag>, ClientError> {
        Ok(self.api.tags().await?.tags)
    }

    /// Name of a tag, `None` when the service does not know it.
    pub async fn tag_name(&self, tag_id: i64) -> Result<Option<String>, ClientError> {
        Ok(self.api.tag(tag_id).await?.tag_name)
    }

    /// Card templates of the account.
    pub async fn templates(&self) -> Result<Vec<Template>, ClientError> {
        self.api.templates().await
    }

    /// Schedule an SMS with the client's card link. Returns `true` when the service queued it.
    pub async fn send_sms(
        &self,
        client_id: i64,
        message: impl Into<String>,
        send_at: Timestamp,
    ) -> Result<bool, ClientError> {
        let sms = CardSms {
            client_id,
            message: message.into(),
            time: send_at.as_second().to_string(),
        };

        Ok(self.api.send_card_sms(sms).await?.is_ok())
    }

    /// Set card template variables. Returns `true` when the service accepted them.
    pub async fn update_vars(
        &self,
        client_id: i64,
        variables: ClientVariables,
    ) -> Result<bool, ClientError> {
        Ok(self.api.update_vars(client_id, variables).await?.is_ok())
    }

    /// Ask for integration module updates. Returns `None` when there are none.
    pub async fn check_integration_updates(
        &self,
        query: IntegrationQuery,
    ) -> Result<Option<IntegrationUpdates>, ClientError> {
        match self.api.update_integration(query).await {
            Ok(updates) => Ok(Some(updates)),
            Err(error) if error.is_api_error(NO_UPDATES_ERROR_ID) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

impl fmt::Debug for LoyaltyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoyaltyService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use cardloyalty::prelude::*;
    use jiff::civil::date;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        api::MockLoyaltyApi,
        errors::{ApiErrorDetail, ApiErrors},
        models::{
            Acknowledgement, ClientList, NewOrderList, Status, TagList, TagName, TagStatus,
        },
    };

    use super::*;

    fn service(api: MockLoyaltyApi) -> LoyaltyService {
        LoyaltyService::new(Arc::new(api))
    }

    fn order() -> Result<Order, BasketError> {
        let mut basket = Basket::new();

        basket.add_item(LineItem::new("84", "Potatoes", dec!(5), dec!(30.00), dec!(25.00)))?;
        basket.add_item(LineItem::new("97", "Carrots", dec!(2), dec!(50.00), dec!(40.00)))?;

        Ok(Order::new(
            "2-43F2",
            "005",
            date(2020, 2, 18).at(18, 18, 18, 0),
            &basket,
        ))
    }

    fn api_error(error_id: i64) -> ClientError {
        ClientError::Api(ApiErrors(vec![ApiErrorDetail {
            error_id: Some(error_id),
            ..ApiErrorDetail::default()
        }]))
    }

    #[tokio::test]
    async fn token_is_valid_on_status_one() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_ping().once().return_once(|| {
            Ok(Status {
                status: "1".to_string(),
                message: "Token ok".to_string(),
            })
        });

        assert!(service(api).is_token_valid().await?);

        Ok(())
    }

    #[tokio::test]
    async fn token_is_invalid_on_other_status() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_ping()
            .once()
            .return_once(|| Ok(Status::default()));

        assert!(!service(api).is_token_valid().await?);

        Ok(())
    }

    #[tokio::test]
    async fn add_client_returns_first_created() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_create_clients()
            .once()
            .withf(|clients| {
                clients.len() == 1
                    && clients
                        .first()
                        .is_some_and(|client| client.phone == "79777121350")
            })
            .return_once(|_| {
                Ok(vec![CreatedClient {
                    client_id: Some(4321),
                    ..CreatedClient::default()
                }])
            });

        let created = service(api)
            .add_client(NewClient::new(
                "Anton",
                "Chekhov",
                "79777121350",
                "1234",
                "dld123s",
            ))
            .await?;

        assert_eq!(created.client_id, Some(4321));

        Ok(())
    }

    #[tokio::test]
    async fn add_client_empty_response_is_an_error() {
        let mut api = MockLoyaltyApi::new();

        api.expect_create_clients()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let result = service(api)
            .add_client(NewClient::new("A", "B", "7", "1", "b"))
            .await;

        assert!(matches!(
            result,
            Err(ClientError::EmptyResponse("createClients"))
        ));
    }

    #[tokio::test]
    async fn update_client_sends_client_id() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_update_clients()
            .once()
            .withf(|clients| {
                clients.len() == 1 && clients.first().is_some_and(|update| update.client_id == 1234)
            })
            .return_once(|_| Ok(vec![CreatedClient::default()]));

        service(api)
            .update_client(1234, NewClient::new("A", "B", "7", "1", "b"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn null_client_list_is_empty() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_all_clients()
            .once()
            .withf(|limit, offset| *limit == 100 && *offset == 200)
            .return_once(|_, _| Ok(ClientList::default()));

        assert!(service(api).all_clients(100, 200).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_order_exports_snapshot() -> TestResult {
        let order = order()?;
        let mut api = MockLoyaltyApi::new();

        api.expect_create_order()
            .once()
            .withf(|lookup, payload| {
                *lookup == ClientLookup::Phone("79777121350".to_string())
                    && payload.guid == "2-43F2"
                    && payload.sum == dec!(250.00)
                    && payload.sum_discount == dec!(205.00)
                    && payload.cart.len() == 2
            })
            .return_once(|_, payload| {
                Ok(TransactionReceipt {
                    guid: payload.guid,
                })
            });

        let receipt = service(api)
            .create_order(ClientLookup::Phone("79777121350".to_string()), &order)
            .await?;

        assert_eq!(receipt.guid, "2-43F2");

        Ok(())
    }

    #[tokio::test]
    async fn return_order_sends_cancellation() -> TestResult {
        let order = order()?;
        let mut api = MockLoyaltyApi::new();

        api.expect_return_order()
            .once()
            .withf(|cancellation| {
                *cancellation
                    == OrderCancellation {
                        guid: "2-43F2".to_string(),
                        date: "2020-02-18 18:18:18".to_string(),
                        sum: dec!(250.00),
                    }
            })
            .return_once(|cancellation| {
                Ok(TransactionReceipt {
                    guid: cancellation.guid,
                })
            });

        service(api).return_order(&order).await?;

        Ok(())
    }

    #[tokio::test]
    async fn return_cart_and_updates_use_lookup() -> TestResult {
        let order = order()?;
        let mut api = MockLoyaltyApi::new();

        api.expect_update_order()
            .once()
            .withf(|lookup, _| *lookup == ClientLookup::ClientId(1))
            .return_once(|_, _| Ok(TransactionReceipt::default()));
        api.expect_return_cart()
            .once()
            .withf(|lookup, _| *lookup == ClientLookup::CardNumber("1234".to_string()))
            .return_once(|_, _| Ok(TransactionReceipt::default()));
        api.expect_update_return_cart()
            .once()
            .withf(|lookup, _| *lookup == ClientLookup::CardBarcode("dld123s".to_string()))
            .return_once(|_, _| Ok(TransactionReceipt::default()));

        let service = service(api);

        service
            .update_order(ClientLookup::ClientId(1), &order)
            .await?;
        service
            .return_cart(ClientLookup::CardNumber("1234".to_string()), &order)
            .await?;
        service
            .update_return_cart(ClientLookup::CardBarcode("dld123s".to_string()), &order)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn new_orders_unwraps_list() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_new_orders()
            .once()
            .withf(|limit| *limit == 10)
            .return_once(|_| {
                Ok(NewOrderList {
                    orders: vec![NewOrder::default(), NewOrder::default()],
                })
            });

        assert_eq!(service(api).new_orders(10).await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn tag_operations() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_create_tags()
            .once()
            .withf(|names| names.as_slice() == ["VIP"])
            .return_once(|_| {
                Ok(vec![CreatedTag {
                    name: "VIP".to_string(),
                    id: Some(1838),
                    status: TagStatus::New,
                }])
            });
        api.expect_tags().once().return_once(|| {
            Ok(TagList {
                tags: vec![Tag {
                    tag_id: Some(1838),
                    tag_name: "VIP".to_string(),
                }],
            })
        });
        api.expect_tag()
            .once()
            .withf(|id| *id == 1838)
            .return_once(|_| {
                Ok(TagName {
                    tag_name: Some("VIP".to_string()),
                })
            });

        let service = service(api);

        assert_eq!(service.add_tag("VIP").await?.id, Some(1838));
        assert_eq!(service.all_tags().await?.len(), 1);
        assert_eq!(service.tag_name(1838).await?.as_deref(), Some("VIP"));

        Ok(())
    }

    #[tokio::test]
    async fn send_sms_uses_unix_seconds() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_send_card_sms()
            .once()
            .withf(|sms| sms.client_id == 1234 && sms.time == "1543415640")
            .return_once(|_| {
                Ok(Acknowledgement {
                    response: json!("ok"),
                })
            });

        let sent = service(api)
            .send_sms(1234, "Your card: %LINK%", Timestamp::from_second(1_543_415_640)?)
            .await?;

        assert!(sent);

        Ok(())
    }

    #[tokio::test]
    async fn update_vars_reports_rejection() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_update_vars()
            .once()
            .withf(|client_id, variables| *client_id == 1234 && variables.get(1) == Some("10%"))
            .return_once(|_, _| {
                Ok(Acknowledgement {
                    response: json!("fail"),
                })
            });

        let mut variables = ClientVariables::new();
        variables.set(1, "10%");

        assert!(!service(api).update_vars(1234, variables).await?);

        Ok(())
    }

    #[tokio::test]
    async fn no_updates_is_none() -> TestResult {
        let mut api = MockLoyaltyApi::new();

        api.expect_update_integration()
            .once()
            .return_once(|_| Err(api_error(NO_UPDATES_ERROR_ID)));

        let updates = service(api)
            .check_integration_updates(IntegrationQuery::default())
            .await?;

        assert_eq!(updates, None);

        Ok(())
    }

    #[tokio::test]
    async fn other_integration_errors_propagate() {
        let mut api = MockLoyaltyApi::new();

        api.expect_update_integration()
            .once()
            .return_once(|_| Err(api_error(716)));

        let result = service(api)
            .check_integration_updates(IntegrationQuery::default())
            .await;

        assert!(result.is_err_and(|error| error.is_api_error(716)));
    }
}
