use async_stream::stream;
use futures::Stream;

use crate::{Page, Result, VacancySource};

/// Lazily walks the search result pages of `language`, one request per poll.
/// Stops after `max_pages` or after the first page holding fewer than `per_page` items.
/// A failed page is yielded as an error and the walk goes on with the next index.
pub fn pages<'a, S>(source: &'a S, language: &'a str) -> impl Stream<Item = Result<Page>> + 'a
where
    S: VacancySource + ?Sized + 'a,
{
    stream! {
        let per_page = source.per_page() as usize;
        for page in 0..source.max_pages() {
            let result = source.fetch_page(language, page).await;
            let last_page = matches!(&result, Ok(p) if p.items_seen() < per_page);
            yield result;
            if last_page {
                log::debug!(
                    "short page {} for language: {}, stopping pagination",
                    page,
                    language
                );
                break;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Error, VacancyRecord};

    /// Serves `sizes[page]` records per page, `None` fails the page
    struct CannedSource {
        sizes: Vec<Option<usize>>,
        requested: Mutex<Vec<u32>>,
    }

    impl CannedSource {
        fn new(sizes: Vec<Option<usize>>) -> Self {
            Self {
                sizes,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VacancySource for CannedSource {
        fn title(&self) -> &str {
            "canned"
        }

        fn expected_currency(&self) -> &str {
            "RUR"
        }

        fn max_pages(&self) -> u32 {
            4
        }

        fn per_page(&self) -> u32 {
            2
        }

        async fn fetch_page(&self, _language: &str, page: u32) -> Result<Page> {
            self.requested.lock().unwrap().push(page);
            match self.sizes.get(page as usize).copied().flatten() {
                Some(size) => Ok(Page {
                    records: vec![VacancyRecord::without_salary(); size],
                    ..Page::default()
                }),
                None => Err(Error::Json(serde_json::from_str::<u8>("x").unwrap_err())),
            }
        }
    }

    #[tokio::test]
    async fn test_stops_on_short_page() {
        let source = CannedSource::new(vec![Some(2), Some(1), Some(2)]);
        let results = pages(&source, "Go").collect::<Vec<_>>().await;
        assert_eq!(results.len(), 2);
        assert_eq!(*source.requested.lock().unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_capped_by_max_pages() {
        let source = CannedSource::new(vec![Some(2); 10]);
        let results = pages(&source, "Go").collect::<Vec<_>>().await;
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[tokio::test]
    async fn test_failed_page_does_not_stop_pagination() {
        let source = CannedSource::new(vec![Some(2), None, Some(0)]);
        let results = pages(&source, "Go").collect::<Vec<_>>().await;
        assert_eq!(results.len(), 3);
        assert!(results[1].is_err());
        assert_eq!(*source.requested.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_restarts_from_first_page() {
        let source = CannedSource::new(vec![Some(0)]);
        pages(&source, "Go").collect::<Vec<_>>().await;
        pages(&source, "Go").collect::<Vec<_>>().await;
        assert_eq!(*source.requested.lock().unwrap(), vec![0, 0]);
    }
}
