use serde::{Deserialize, Serialize};

use super::status::HttpStatusCode;

/// Envelope wrapping a response payload with status, messages and paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonResponse<T> {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> CommonResponse<T> {
    fn empty(status: HttpStatusCode) -> Self {
        Self {
            status_code: status.value(),
            message: None,
            payload: None,
            error_messages: Vec::new(),
            page: None,
            limit: None,
            total: None,
        }
    }

    /// `200 OK` carrying `payload`.
    #[must_use]
    pub fn ok(payload: T) -> Self {
        Self::with_payload(HttpStatusCode::Ok, payload)
    }

    #[must_use]
    pub fn of(status: HttpStatusCode, message: impl Into<String>, payload: T) -> Self {
        Self {
            message: Some(message.into()),
            payload: Some(payload),
            ..Self::empty(status)
        }
    }

    #[must_use]
    pub fn with_message(status: HttpStatusCode, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(status)
        }
    }

    #[must_use]
    pub fn with_payload(status: HttpStatusCode, payload: T) -> Self {
        Self {
            payload: Some(payload),
            ..Self::empty(status)
        }
    }

    #[must_use]
    pub fn with_errors(status: HttpStatusCode, error_messages: Vec<String>) -> Self {
        Self {
            error_messages,
            ..Self::empty(status)
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// The status as a known code, if it is one.
    #[must_use]
    pub fn status(&self) -> Option<HttpStatusCode> {
        HttpStatusCode::try_from(self.status_code).ok()
    }
}
