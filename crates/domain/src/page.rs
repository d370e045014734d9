//! Pagination for envelope listings.

use crate::envelope::Envelope;

/// Fixed page size requested from the envelope list endpoint.
pub const ENVELOPES_PAGE_SIZE: usize = 50;

/// Infers whether another page exists from the size of the returned batch.
///
/// The API exposes no total or cursor, so a full page is read as "probably
/// more". This over-estimates exactly when the true total is a multiple of
/// the page size; the follow-up fetch then comes back empty.
#[must_use]
pub const fn has_more(returned: usize) -> bool {
    returned == ENVELOPES_PAGE_SIZE
}

/// One fetched page of envelopes, with its continuation hint.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopePage {
    /// Envelopes in server order.
    pub envelopes: Vec<Envelope>,
    /// 1-based page number that was fetched.
    pub page: u32,
    /// Whether a further page is assumed to exist.
    pub has_more: bool,
}

impl EnvelopePage {
    /// Wraps a fetched batch, deriving the continuation hint from its size.
    #[must_use]
    pub fn new(envelopes: Vec<Envelope>, page: u32) -> Self {
        let more = has_more(envelopes.len());
        Self {
            envelopes,
            page,
            has_more: more,
        }
    }
}
