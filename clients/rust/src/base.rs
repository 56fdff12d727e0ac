use attendance_reminders_api_structs::failed_invocation;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

pub(crate) struct BaseClient {
    address: String,
    api_key: Option<String>,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    Unauthorized,
    /// The server reported a failed invocation with this message
    InvocationFailed(String),
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            api_key: None,
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let client = Client::new();
        let url = format!("{}/{}", self.address, path);
        let builder = client.request(method, &url);

        if let Some(api_key) = &self.api_key {
            builder.bearer_auth(api_key)
        } else {
            builder
        }
    }

    async fn check_status_code(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> Result<Response, APIError> {
        match res.status() {
            status if status == expected_status_code => Ok(res),
            StatusCode::UNAUTHORIZED => Err(APIError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR => {
                match res.json::<failed_invocation::APIResponse>().await {
                    Ok(body) => Err(APIError::InvocationFailed(body.error)),
                    Err(_) => Err(APIError::UnexpectedStatusCode(
                        StatusCode::INTERNAL_SERVER_ERROR,
                    )),
                }
            }
            status => Err(APIError::UnexpectedStatusCode(status)),
        }
    }

    async fn get_json_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.check_status_code(res, expected_status_code).await?;
        self.get_json_response(res).await
    }

    pub async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        method: Method,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(method, path).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(Method::GET, path, expected_status_code).await
    }
}
