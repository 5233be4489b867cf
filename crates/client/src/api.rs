//! Loyalty service endpoints.

use async_trait::async_trait;
use cardloyalty::order::{OrderCancellation, OrderPayload};
use mockall::automock;

use crate::{
    errors::ClientError,
    lookup::ClientLookup,
    models::{
        Acknowledgement, CardSms, ClientInfo, ClientList, ClientUpdate, ClientVariables,
        CreatedClient, CreatedTag, IntegrationQuery, IntegrationUpdates, NewClient, NewOrderList,
        Organisation, Status, TagList, TagName, Template, TransactionReceipt,
    },
};

#[automock]
#[async_trait]
/// One method per loyalty service endpoint.
pub trait LoyaltyApi: Send + Sync {
    /// Check the access token.
    async fn ping(&self) -> Result<Status, ClientError>;

    /// Register the organisation running the integration.
    async fn register_organisation(
        &self,
        organisation: Organisation,
    ) -> Result<Status, ClientError>;

    /// List card templates.
    async fn templates(&self) -> Result<Vec<Template>, ClientError>;

    /// Look up a client card.
    async fn client_info(&self, lookup: ClientLookup) -> Result<ClientInfo, ClientError>;

    /// List all tags.
    async fn tags(&self) -> Result<TagList, ClientError>;

    /// Look up a tag by id.
    async fn tag(&self, tag_id: i64) -> Result<TagName, ClientError>;

    /// Page through all clients.
    async fn all_clients(&self, limit: u32, offset: u32) -> Result<ClientList, ClientError>;

    /// Fetch clients created since the last poll.
    async fn new_clients(&self, limit: u32) -> Result<ClientList, ClientError>;

    /// Create clients.
    async fn create_clients(
        &self,
        clients: Vec<NewClient>,
    ) -> Result<Vec<CreatedClient>, ClientError>;

    /// Update existing clients.
    async fn update_clients(
        &self,
        clients: Vec<ClientUpdate>,
    ) -> Result<Vec<CreatedClient>, ClientError>;

    /// Create tags, reusing existing ones with the same name.
    async fn create_tags(&self, names: Vec<String>) -> Result<Vec<CreatedTag>, ClientError>;

    /// Record a transaction for a client.
    async fn create_order(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Replace a previously recorded transaction.
    async fn update_order(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Cancel a transaction.
    async fn return_order(
        &self,
        cancellation: OrderCancellation,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Record a partial return of a transaction.
    async fn return_cart(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Replace a previously recorded partial return.
    async fn update_return_cart(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Fetch transactions recorded on the service side since the last poll.
    async fn new_orders(&self, limit: u32) -> Result<NewOrderList, ClientError>;

    /// Set card template variables of a client.
    async fn update_vars(
        &self,
        client_id: i64,
        variables: ClientVariables,
    ) -> Result<Acknowledgement, ClientError>;

    /// Send a client their card link by SMS.
    async fn send_card_sms(&self, sms: CardSms) -> Result<Acknowledgement, ClientError>;

    /// Ask for integration module updates.
    async fn update_integration(
        &self,
        query: IntegrationQuery,
    ) -> Result<IntegrationUpdates, ClientError>;
}
