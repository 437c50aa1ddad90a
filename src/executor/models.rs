use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Which base URL a request targets. Event tracking lives on a separate
/// host with a reduced header set; everything else goes to the main API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHost {
    Api,
    Tracker,
}

#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub host: ApiHost,
    pub path: String,
    pub query: Option<Vec<(String, String)>>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            host: ApiHost::Api,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            host: ApiHost::Api,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn on_tracker(mut self) -> Self {
        self.host = ApiHost::Tracker;
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Outcome of one executed request. `success` mirrors the 2xx range;
/// error statuses are reported here rather than raised.
#[derive(Debug, Clone)]
pub struct ApiResult {
    pub success: bool,
    pub status: u16,
    pub body: Value,
    pub duration_ms: f64,
}
