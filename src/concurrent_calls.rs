use crate::{Batcher, Error, Fetch, Logger, Response};
use futures::future::try_join_all;
use serde::de::DeserializeOwned;

/// Fires every fetch of `urls` at once and waits for all of them.
pub async fn concurrent_call<F: Fetch>(fetcher: &F, urls: &[impl AsRef<str>]) -> Result<Vec<F::Response>, Error> {
    try_join_all(urls.iter().map(|url| fetcher.fetch(url.as_ref()))).await
}

/// Fetches and decodes `urls`, at most `max_concurrency` at a time.
///
/// The urls are split in chunks of `max_concurrency`. Chunks run one after the
/// other; inside a chunk every request is in flight at the same time and the
/// next chunk only starts once the whole chunk has been fetched and decoded.
/// Results come back in the order of `urls`. A non-positive `max_concurrency`
/// fetches nothing and returns an empty list.
///
/// The first failing fetch or decode fails the whole call. Requests still in
/// flight in that chunk are dropped and later chunks never start.
pub async fn concurrent_calls<F, U, T>(fetcher: &F, urls: &[U], max_concurrency: isize, logger: &Logger) -> Result<Vec<T>, Error>
where
    F: Fetch,
    U: AsRef<str> + Clone,
    T: DeserializeOwned,
{
    let mut result = Vec::new();
    for (index, chunk) in Batcher::new(urls.to_vec(), max_concurrency).enumerate() {
        logger.log(format!(
            "fetching chunk {} ({} urls, {} done of {})",
            index,
            chunk.len(),
            result.len(),
            urls.len()
        ));
        let responses = concurrent_call(fetcher, &chunk[..]).await?;
        let values = try_join_all(responses.into_iter().map(|response| response.json::<T>())).await?;
        result.extend(values);
    }
    Ok(result)
}
