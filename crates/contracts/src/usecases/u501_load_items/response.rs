/// Reply of `POST /item`: a human readable message, surfaced verbatim.
///
/// The request body is the user's raw text and has no DTO of its own.
pub type LoadItemsResponse = String;

/// Extracts the message from a creation response body.
///
/// The server encodes the message as a JSON string; anything else is shown
/// as the raw body text.
pub fn decode_message(body: &str) -> LoadItemsResponse {
    match serde_json::from_str::<String>(body) {
        Ok(message) => message,
        Err(_) => body.trim().to_string(),
    }
}
