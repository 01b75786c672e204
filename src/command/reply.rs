use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::parse::MenuItem;

pub const USAGE: &str = "Incorrect usage. Correct format is `/lunch [office]`\n*Note* Only the Santa Clara office is currently supported";
pub const CLOSED: &str = "The cafeteria is closed on the weekends";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const MENU_HEADER: &str = "Todays menu options";

/// One Slack message attachment. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Attachment {
    /// Shown in place of the menu when the page couldn't be fetched or read.
    pub fn fetch_failed() -> Self {
        Self {
            title: Some("Failed to get menu options".to_string()),
            text: Some(
                "There was an error retrieving the menu options, please try again later"
                    .to_string(),
            ),
            color: Some("danger".to_string()),
            ..Self::default()
        }
    }

    pub fn nothing_today() -> Self {
        Self {
            text: Some("No menu items available today".to_string()),
            ..Self::default()
        }
    }

    pub fn full_menu(url: &str) -> Self {
        Self {
            title: Some("Click here for the full menu".to_string()),
            title_link: Some(url.to_string()),
            ..Self::default()
        }
    }
}

impl From<MenuItem> for Attachment {
    fn from(item: MenuItem) -> Self {
        Self {
            title: Some(item.title().to_string()),
            text: Some(item.text().to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "no_attachments")]
    attachments: &'a [Attachment],
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde hands over a reference to the field
fn no_attachments(attachments: &&[Attachment]) -> bool {
    attachments.is_empty()
}

/// Status code plus the JSON message, in the shape API Gateway style handlers return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    status_code: u16,
    body: String,
}

impl Envelope {
    fn new(status_code: u16, text: &str, attachments: &[Attachment]) -> Self {
        let body = serde_json::to_string(&Message { text, attachments })
            .expect("a message of plain strings should always serialize");
        Self { status_code, body }
    }

    pub fn unauthorized() -> Self {
        Self::new(401, UNAUTHORIZED, &[])
    }

    pub fn text(text: &str) -> Self {
        Self::new(200, text, &[])
    }

    pub fn menu(attachments: &[Attachment]) -> Self {
        Self::new(200, MENU_HEADER, attachments)
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_envelope_shape() {
        let envelope = Envelope::unauthorized();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"statusCode": 401, "body": "{\"text\":\"Unauthorized\"}"})
        );
    }

    #[test]
    fn test_menu_body() {
        let envelope = Envelope::menu(&[
            Attachment::from(MenuItem::new("Pizza", "Salad")),
            Attachment::fetch_failed(),
            Attachment::full_menu("http://menu.test/"),
        ]);
        assert_eq!(envelope.status_code(), 200);
        let body: Value = serde_json::from_str(envelope.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "text": "Todays menu options",
                "attachments": [
                    {"title": "Pizza", "text": "Salad"},
                    {
                        "title": "Failed to get menu options",
                        "text": "There was an error retrieving the menu options, please try again later",
                        "color": "danger"
                    },
                    {"title": "Click here for the full menu", "title_link": "http://menu.test/"}
                ]
            })
        );
    }

    #[test]
    fn test_into_response() {
        let response = Envelope::text(CLOSED).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            Envelope::unauthorized().into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
