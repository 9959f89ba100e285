//! Concurrent equity fetching.

use crate::api::{DataConverter, QuoteClient};
use crate::state::{ExchangeRate, QuoteRequest, QuoteResult};
use futures::future;
use futures::stream::{self, StreamExt};

/// Fetch all `symbols` with at most `max_concurrency` requests in flight.
///
/// NYSE quotes are converted with `rate` when one is given. Failed symbols
/// are left out. Results come back in completion order.
pub async fn fetch_equities(
    client: &QuoteClient,
    symbols: &[QuoteRequest],
    rate: Option<ExchangeRate>,
    max_concurrency: usize,
) -> Vec<QuoteResult> {
    stream::iter(symbols)
        .map(|request| async move {
            let info = client.fetch_quote(&request.symbol).await?;
            DataConverter::convert_equity(request, &info, rate)
        })
        .buffer_unordered(max_concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await
}
