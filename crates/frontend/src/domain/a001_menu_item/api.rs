use super::error::{GatewayError, MutationAction, MutationError};
use super::gateway::MenuGateway;
use async_trait::async_trait;
use contracts::domain::a001_menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use contracts::enums::Category;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// `MenuGateway` over the JSON HTTP API (`/{category}` and `/{category}/{id}`)
#[derive(Debug, Clone)]
pub struct HttpMenuGateway {
    base: String,
}

impl HttpMenuGateway {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self, category: Category) -> String {
        format!("{}/{}", self.base, category.code())
    }

    pub fn item_url(&self, category: Category, id: MenuItemId) -> String {
        format!("{}/{}/{}", self.base, category.code(), id)
    }
}

fn ensure_ok(response: &Response, url: &str) -> Result<(), GatewayError> {
    if !response.ok() {
        return Err(GatewayError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, GatewayError> {
    ensure_ok(&response, url)?;
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

async fn send_draft(request: Request, url: &str) -> Result<MenuItem, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    read_json(response, url).await
}

#[async_trait(?Send)]
impl MenuGateway for HttpMenuGateway {
    async fn fetch_category(&self, category: Category) -> Result<Vec<MenuItem>, GatewayError> {
        let url = self.collection_url(category);
        log::debug!("Fetching: {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        read_json(response, &url).await
    }

    async fn create_item(
        &self,
        category: Category,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError> {
        let url = self.collection_url(category);
        let fail = |source: GatewayError| MutationError::new(MutationAction::Create, source);

        let request = Request::post(&url)
            .json(draft)
            .map_err(|e| fail(GatewayError::Encode(e.to_string())))?;
        send_draft(request, &url).await.map_err(fail)
    }

    async fn update_item(
        &self,
        category: Category,
        id: MenuItemId,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError> {
        let url = self.item_url(category, id);
        let fail = |source: GatewayError| MutationError::new(MutationAction::Update, source);

        let request = Request::put(&url)
            .json(draft)
            .map_err(|e| fail(GatewayError::Encode(e.to_string())))?;
        send_draft(request, &url).await.map_err(fail)
    }

    async fn delete_item(&self, category: Category, id: MenuItemId) -> Result<(), MutationError> {
        let url = self.item_url(category, id);
        let fail = |source: GatewayError| MutationError::new(MutationAction::Delete, source);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| fail(GatewayError::Transport(e.to_string())))?;
        ensure_ok(&response, &url).map_err(fail)
    }
}
