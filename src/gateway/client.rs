use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::gateway::error::{GatewayError, Operation};
use crate::gateway::types::{NewPost, Post, PostId, PostPatch};

const POSTS_PATH: &str = "/posts";

/// Remote operations on the posts resource.
///
/// Each call is one round trip: no retries, no timeouts, no batching.
pub trait PostsApi: Send + Sync + 'static {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, GatewayError>> + Send;

    fn create_post(
        &self,
        draft: &NewPost,
    ) -> impl Future<Output = Result<Post, GatewayError>> + Send;

    fn update_post(
        &self,
        id: PostId,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post, GatewayError>> + Send;

    /// Returns the requested id. The response body is not consulted.
    fn delete_post(&self, id: PostId) -> impl Future<Output = Result<PostId, GatewayError>> + Send;
}

/// HTTP gateway for `{base_url}/posts`.
#[derive(Debug, Clone)]
pub struct PostsGateway {
    client: Client,
    base_url: String,
}

impl PostsGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, POSTS_PATH)
    }

    fn item_url(&self, id: PostId) -> String {
        format!("{}{}/{}", self.base_url, POSTS_PATH, id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Sends the request and checks for a 2xx status.
    async fn send(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<Response, GatewayError> {
        let response = builder.send().await.map_err(|source| {
            tracing::warn!(
                operation = operation.as_str(),
                error = %source,
                "Request failed before a response arrived"
            );
            GatewayError::Transport {
                operation,
                source: source.without_url(),
            }
        })?;

        let status = response.status();
        tracing::debug!(
            operation = operation.as_str(),
            status = status.as_u16(),
            url = %response.url(),
            "Response received"
        );

        if !status.is_success() {
            tracing::warn!(
                operation = operation.as_str(),
                status = status.as_u16(),
                "Non-success status from posts API"
            );
            return Err(GatewayError::Status { operation, status });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = self.send(operation, builder).await?;
        response.json::<T>().await.map_err(|source| {
            tracing::warn!(
                operation = operation.as_str(),
                error = %source,
                "Failed to decode response body"
            );
            GatewayError::Transport {
                operation,
                source: source.without_url(),
            }
        })
    }
}

impl PostsApi for PostsGateway {
    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        tracing::debug!("GET {}", POSTS_PATH);
        let builder = self.request(Method::GET, self.collection_url());
        self.send_json(Operation::List, builder).await
    }

    async fn create_post(&self, draft: &NewPost) -> Result<Post, GatewayError> {
        tracing::debug!(title = %draft.title, "POST {}", POSTS_PATH);
        let builder = self
            .request(Method::POST, self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .json(draft);
        self.send_json(Operation::Create, builder).await
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> Result<Post, GatewayError> {
        tracing::debug!("PATCH {}/{}", POSTS_PATH, id);
        let builder = self
            .request(Method::PATCH, self.item_url(id))
            .header(CONTENT_TYPE, "application/json")
            .json(patch);
        self.send_json(Operation::Update, builder).await
    }

    async fn delete_post(&self, id: PostId) -> Result<PostId, GatewayError> {
        tracing::debug!("DELETE {}/{}", POSTS_PATH, id);
        let builder = self.request(Method::DELETE, self.item_url(id));
        self.send(Operation::Delete, builder).await?;
        Ok(id)
    }
}
