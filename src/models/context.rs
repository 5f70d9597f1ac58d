use serde::{Deserialize, Serialize};

use super::response::RpcResponse;

/// Correlation state a caller carries across the quote workflow.
///
/// The vendor keeps quotes server-side, so the quote number returned by
/// `requestQuote` has to be fed back into `updateService` and
/// `quoteToCollection`. The gateway never reads or writes this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteContext {
    pub orig_place_id: Option<i64>,
    pub dest_place_id: Option<i64>,
    pub quote_no: Option<String>,
    pub selected_service: Option<String>,
}

impl QuoteContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_places(orig_place_id: i64, dest_place_id: i64) -> Self {
        Self {
            orig_place_id: Some(orig_place_id),
            dest_place_id: Some(dest_place_id),
            ..Self::default()
        }
    }

    /// Records the quote number from a response. Returns whether one was found;
    /// an existing number is kept when the response has none.
    pub fn capture_quote_no(&mut self, response: &RpcResponse) -> bool {
        match response.quote_no() {
            Some(quote_no) => {
                self.quote_no = Some(quote_no.to_string());
                true
            }
            None => false,
        }
    }

    pub fn places(&self) -> Option<(i64, i64)> {
        Some((self.orig_place_id?, self.dest_place_id?))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
