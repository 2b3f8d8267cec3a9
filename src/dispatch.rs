// The whole request: resolve the action, build and encode its payload,
// announce, send, print. Lookup failures happen before anything is printed
// or sent.

use std::io::Write;

use tracing::{debug, warn};

use crate::action::Action;
use crate::api::{ApiClient, Reply};
use crate::error::Result;
use crate::payload::Payload;
use crate::ui;

/// Run one request for `action` with `input` and print the reply to `out`.
pub fn dispatch(client: &ApiClient, action: &str, input: &str, out: &mut impl Write) -> Result<Reply> {
    let action: Action = action.parse()?;
    let body = Payload::for_action(action, input)?.to_json()?;
    debug!(%action, %body, "payload built");

    ui::announce(out, client.endpoint(), action)?;
    out.flush()?;

    let spinner = ui::spinner("Waiting for server...");
    let reply = client.post(action, body);
    spinner.finish_and_clear();
    let reply = reply?;

    if let Some(summary) = reply.summary() {
        if summary.status == Some(2) {
            warn!(
                status = reply.status,
                error = summary.error_description.as_deref().unwrap_or(""),
                "server rejected request"
            );
        }
    }

    ui::print_reply(out, &reply)?;
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;
    use crate::error::DispatchError;

    // Port 9 on localhost is never contacted: lookups fail first.
    fn offline_client() -> ApiClient {
        ApiClient::with_endpoint(Endpoint {
            host: "127.0.0.1".into(),
            port: 9,
        })
        .unwrap()
    }

    #[test]
    fn unknown_action_prints_nothing() {
        let mut out = Vec::new();
        let err = dispatch(&offline_client(), "resize", "http://x/a.jpg", &mut out).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownAction(ref a) if a == "resize"));
        assert!(out.is_empty());
    }

    #[test]
    fn ocr_fails_before_announcing() {
        let mut out = Vec::new();
        let err = dispatch(&offline_client(), "ocr", "http://x/a.jpg", &mut out).unwrap_err();
        assert!(matches!(err, DispatchError::MissingTemplate(Action::Ocr)));
        assert!(out.is_empty());
    }
}
