/// What came back from one POST, before any interpretation of the body.
///
/// A transport failure has no body, a `status_code` of 0 and the error text
/// in `transport_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawApiResult {
    pub body: Option<String>,
    pub status_code: u16,
    pub transport_error: Option<String>,
}

impl RawApiResult {
    pub fn response(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            status_code,
            transport_error: None,
        }
    }

    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            body: None,
            status_code: 0,
            transport_error: Some(message.into()),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.transport_error.is_some() || self.body.is_none()
    }
}
