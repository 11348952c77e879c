//! File API

use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::ports::FilePart;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

#[derive(Clone)]
pub struct FileApi {
    client: ApiClient,
}

impl FileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// multipart 上传，表单字段名为 `file`
    pub async fn upload(&self, file: FilePart) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::post("/file/upload").multipart(file))
            .await
    }
}
