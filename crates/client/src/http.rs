//! HTTP transport for the loyalty service.

use async_trait::async_trait;
use cardloyalty::order::{OrderCancellation, OrderPayload};
use reqwest::{Client, Method, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    api::LoyaltyApi,
    config::ClientConfig,
    errors::{ApiErrors, ClientError},
    lookup::ClientLookup,
    models::{
        Acknowledgement, CardSms, ClientBatch, ClientInfo, ClientList, ClientUpdate,
        ClientVariables, ClientVariablesEntry, CreatedClient, CreatedTag, Envelope,
        IntegrationQuery, IntegrationUpdates, NewClient, NewOrderList, Organisation, Status,
        TagBatch, TagList, TagName, Template, TransactionReceipt,
    },
};

/// HTTP client for the loyalty service API.
#[derive(Debug, Clone)]
pub struct CardLoyaltyClient {
    config: ClientConfig,
    http: Client,
}

impl CardLoyaltyClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get<T>(
        &self,
        endpoint: &'static str,
        query: &[(&'static str, String)],
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        self.send::<(), T>(Method::GET, endpoint, query, None).await
    }

    async fn post<B, T>(
        &self,
        endpoint: &'static str,
        query: &[(&'static str, String)],
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, query, Some(body)).await
    }

    #[tracing::instrument(
        name = "cardloyalty.http.request",
        level = "debug",
        skip(self, query, body),
        fields(method = %method, endpoint = endpoint, status = tracing::field::Empty),
        err
    )]
    async fn send<B, T>(
        &self,
        method: Method,
        endpoint: &'static str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut request = self
            .http
            .request(method, self.config.endpoint_url(endpoint))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .query(query)
            .query(&[("token", self.config.token.as_str())]);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        tracing::Span::current().record("status", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            warn!(endpoint, %status, "loyalty service answered with an unexpected status");

            return Err(ClientError::UnexpectedStatus { status, body });
        }

        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes)?;

        if let Some(errors) = ApiErrors::from_response(&payload) {
            let params: Vec<String> = query
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();

            warn!(
                endpoint,
                %status,
                ?params,
                %errors,
                "loyalty service reported an error"
            );

            return Err(ClientError::Api(errors));
        }

        debug!(endpoint, %status, "loyalty service answered");

        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl LoyaltyApi for CardLoyaltyClient {
    async fn ping(&self) -> Result<Status, ClientError> {
        self.get::<Envelope<Status>>("ping", &[])
            .await
            .map(Envelope::into_inner)
    }

    async fn register_organisation(
        &self,
        organisation: Organisation,
    ) -> Result<Status, ClientError> {
        self.post::<_, Envelope<Status>>("updateRegistrationOrganisation", &[], &organisation)
            .await
            .map(Envelope::into_inner)
    }

    async fn templates(&self) -> Result<Vec<Template>, ClientError> {
        self.get("getTemplates", &[]).await
    }

    async fn client_info(&self, lookup: ClientLookup) -> Result<ClientInfo, ClientError> {
        self.get("clientInfo", &lookup.query()).await
    }

    async fn tags(&self) -> Result<TagList, ClientError> {
        self.get("getTags", &[]).await
    }

    async fn tag(&self, tag_id: i64) -> Result<TagName, ClientError> {
        self.get("getTag", &[("id", tag_id.to_string())]).await
    }

    async fn all_clients(&self, limit: u32, offset: u32) -> Result<ClientList, ClientError> {
        self.get(
            "getAllClients",
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    async fn new_clients(&self, limit: u32) -> Result<ClientList, ClientError> {
        self.get("getNewClients", &[("limit", limit.to_string())])
            .await
    }

    async fn create_clients(
        &self,
        clients: Vec<NewClient>,
    ) -> Result<Vec<CreatedClient>, ClientError> {
        self.post::<_, Envelope<Vec<CreatedClient>>>("createClients", &[], &ClientBatch { clients })
            .await
            .map(Envelope::into_inner)
    }

    async fn update_clients(
        &self,
        clients: Vec<ClientUpdate>,
    ) -> Result<Vec<CreatedClient>, ClientError> {
        self.post::<_, Envelope<Vec<CreatedClient>>>("updateClients", &[], &ClientBatch { clients })
            .await
            .map(Envelope::into_inner)
    }

    async fn create_tags(&self, names: Vec<String>) -> Result<Vec<CreatedTag>, ClientError> {
        self.post("createTags", &[], &TagBatch { tags: names }).await
    }

    async fn create_order(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError> {
        self.post::<_, Envelope<TransactionReceipt>>("createOrder", &lookup.query(), &order)
            .await
            .map(Envelope::into_inner)
    }

    async fn update_order(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError> {
        self.post::<_, Envelope<TransactionReceipt>>("updateOrder", &lookup.query(), &order)
            .await
            .map(Envelope::into_inner)
    }

    async fn return_order(
        &self,
        cancellation: OrderCancellation,
    ) -> Result<TransactionReceipt, ClientError> {
        self.post::<_, Envelope<TransactionReceipt>>("returnOrder", &[], &cancellation)
            .await
            .map(Envelope::into_inner)
    }

    async fn return_cart(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError> {
        self.post::<_, Envelope<TransactionReceipt>>("returnCart", &lookup.query(), &order)
            .await
            .map(Envelope::into_inner)
    }

    async fn update_return_cart(
        &self,
        lookup: ClientLookup,
        order: OrderPayload,
    ) -> Result<TransactionReceipt, ClientError> {
        self.post::<_, Envelope<TransactionReceipt>>("updateReturnCart", &lookup.query(), &order)
            .await
            .map(Envelope::into_inner)
    }

    async fn new_orders(&self, limit: u32) -> Result<NewOrderList, ClientError> {
        self.get("getNewOrder", &[("limit", limit.to_string())])
            .await
    }

    async fn update_vars(
        &self,
        client_id: i64,
        variables: ClientVariables,
    ) -> Result<Acknowledgement, ClientError> {
        let body = ClientBatch {
            clients: vec![ClientVariablesEntry {
                client_id,
                variables,
            }],
        };

        self.post("updateVars", &[], &body).await
    }

    async fn send_card_sms(&self, sms: CardSms) -> Result<Acknowledgement, ClientError> {
        self.post("sendCardSMS", &[], &sms).await
    }

    async fn update_integration(
        &self,
        query: IntegrationQuery,
    ) -> Result<IntegrationUpdates, ClientError> {
        self.post("getUpdateIntegration", &[], &query).await
    }
}
