//! REST implementation of [`ItemRepository`].
//!
//! Endpoints (relative to [`API_BASE_URL`]):
//! - `GET    /?parentId=`       list children (no `parentId` for the root)
//! - `GET    /{id}/path`        ancestors, root first
//! - `POST   /` JSON            create folder
//! - `POST   /` multipart       upload (`parentId?`, repeated `files`)
//! - `PATCH  /{id}` JSON        rename (`name`) or move (`parentId`, `null` = root)
//! - `DELETE /{id}`             delete
//!
//! Reads and JSON mutations are raced against [`FETCH_TIMEOUT_MS`]; uploads
//! use [`UPLOAD_TIMEOUT_MS`], which is unbounded.

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{API_BASE_URL, FETCH_TIMEOUT_MS, PARTIAL_SUCCESS_CODE, UPLOAD_TIMEOUT_MS};
use crate::models::{FileFailure, FolderId, Item, ItemId, UploadOutcome};

use super::error::{ApiErrorBody, RepositoryError};
use super::repository::ItemRepository;

/// Download URL of a file's binary content.
pub fn download_url(id: &ItemId) -> String {
    format!("{}/{}", API_BASE_URL, urlencoding::encode(id.as_str()))
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ItemsResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFolderBody<'a> {
    name: &'a str,
    folder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a FolderId>,
}

#[derive(Debug, Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

/// `parentId` is always sent; `null` moves to the root.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveBody<'a> {
    parent_id: Option<&'a FolderId>,
}

#[derive(Debug, Default, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    successful: Vec<Item>,
    #[serde(default)]
    failed: Vec<FileFailure>,
}

impl From<UploadResponse> for UploadOutcome {
    fn from(resp: UploadResponse) -> Self {
        if resp.code.as_deref() == Some(PARTIAL_SUCCESS_CODE) {
            UploadOutcome::Partial {
                succeeded: resp.successful,
                failed: resp.failed,
            }
        } else {
            UploadOutcome::Complete(resp.items)
        }
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Race `fut` against `limit` milliseconds. `None` waits for completion.
async fn with_timeout<F: Future>(
    limit: Option<u32>,
    fut: F,
) -> Result<F::Output, RepositoryError> {
    let Some(limit) = limit else {
        return Ok(fut.await);
    };
    let fut = pin!(fut);
    match select(fut, TimeoutFuture::new(limit)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(RepositoryError::Timeout),
    }
}

fn build_error(err: impl ToString) -> RepositoryError {
    RepositoryError::RequestBuild(err.to_string())
}

/// Send a request within `limit`; non-2xx answers become [`RepositoryError::Http`].
async fn send(request: Request, limit: Option<u32>) -> Result<Response, RepositoryError> {
    let response = with_timeout(limit, request.send())
        .await?
        .map_err(|e| RepositoryError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        return Err(RepositoryError::Http { status, body });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
    response
        .json::<T>()
        .await
        .map_err(|e| RepositoryError::Decode(e.to_string()))
}

// =============================================================================
// HttpRepository
// =============================================================================

/// Item repository talking to the REST API with `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    fn path_url(&self, id: &ItemId) -> String {
        format!("{}/path", self.item_url(id))
    }
}

impl Default for HttpRepository {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ItemRepository for HttpRepository {
    type File = web_sys::File;

    async fn list_children(&self, parent: Option<&FolderId>) -> Result<Vec<Item>, RepositoryError> {
        let mut builder = Request::get(&self.base_url);
        if let Some(parent) = parent {
            builder = builder.query([("parentId", parent.as_str())]);
        }
        let request = builder.build().map_err(build_error)?;
        let body: ItemsResponse = decode(send(request, Some(FETCH_TIMEOUT_MS)).await?).await?;
        Ok(body.items)
    }

    async fn get_path(&self, id: &ItemId) -> Result<Vec<Item>, RepositoryError> {
        let request = Request::get(&self.path_url(id))
            .build()
            .map_err(build_error)?;
        let body: ItemsResponse = decode(send(request, Some(FETCH_TIMEOUT_MS)).await?).await?;
        Ok(body.items)
    }

    async fn create_folder(
        &self,
        name: &str,
        parent: Option<&FolderId>,
    ) -> Result<Item, RepositoryError> {
        let body = CreateFolderBody {
            name,
            folder: true,
            parent_id: parent,
        };
        let request = Request::post(&self.base_url)
            .json(&body)
            .map_err(build_error)?;
        decode(send(request, Some(FETCH_TIMEOUT_MS)).await?).await
    }

    async fn rename(&self, id: &ItemId, name: &str) -> Result<Item, RepositoryError> {
        let request = Request::patch(&self.item_url(id))
            .json(&RenameBody { name })
            .map_err(build_error)?;
        decode(send(request, Some(FETCH_TIMEOUT_MS)).await?).await
    }

    async fn delete(&self, id: &ItemId) -> Result<(), RepositoryError> {
        let request = Request::delete(&self.item_url(id))
            .build()
            .map_err(build_error)?;
        send(request, Some(FETCH_TIMEOUT_MS)).await?;
        Ok(())
    }

    async fn move_item(
        &self,
        id: &ItemId,
        new_parent: Option<&FolderId>,
    ) -> Result<Item, RepositoryError> {
        let request = Request::patch(&self.item_url(id))
            .json(&MoveBody {
                parent_id: new_parent,
            })
            .map_err(build_error)?;
        decode(send(request, Some(FETCH_TIMEOUT_MS)).await?).await
    }

    async fn upload(
        &self,
        files: Vec<web_sys::File>,
        parent: Option<&FolderId>,
    ) -> Result<UploadOutcome, RepositoryError> {
        let form = web_sys::FormData::new().map_err(|e| build_error(format!("{:?}", e)))?;
        if let Some(parent) = parent {
            form.append_with_str("parentId", parent.as_str())
                .map_err(|e| build_error(format!("{:?}", e)))?;
        }
        for file in &files {
            form.append_with_blob_and_filename("files", file, &file.name())
                .map_err(|e| build_error(format!("{:?}", e)))?;
        }

        let request = Request::post(&self.base_url)
            .body(form)
            .map_err(build_error)?;
        let body: UploadResponse = decode(send(request, UPLOAD_TIMEOUT_MS).await?).await?;
        Ok(body.into())
    }
}
