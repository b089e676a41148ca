use serde::Serialize;

/// One query parameter in the `/api/` endpoint index, optionally with the
/// live set of accepted values.
#[derive(Debug, Clone, Serialize)]
pub struct GetParam {
    pub param: String,
    pub description: String,
    pub values: Option<Vec<String>>,
}

impl GetParam {
    pub fn new(param: &str, description: &str) -> Self {
        GetParam {
            param: param.to_string(),
            description: description.to_string(),
            values: None,
        }
    }

    pub fn with_values(param: &str, description: &str, values: Vec<String>) -> Self {
        GetParam {
            values: Some(values),
            ..GetParam::new(param, description)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    pub url: String,
    pub description: String,
    pub get_params: Vec<GetParam>,
}

impl Endpoint {
    pub fn new(url: &str, description: &str) -> Self {
        Endpoint {
            url: url.to_string(),
            description: description.to_string(),
            get_params: Vec::new(),
        }
    }

    pub fn with_params(url: &str, description: &str, get_params: Vec<GetParam>) -> Self {
        Endpoint {
            get_params,
            ..Endpoint::new(url, description)
        }
    }
}
