use super::{ListFeedKind, ListQuery};
use crate::model::{ListPage, ListRow};
use crate::CorridorReportError;

/// a server-side paged list endpoint.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(
        &self,
        kind: ListFeedKind,
        query: &ListQuery,
    ) -> Result<ListPage, CorridorReportError>;
}

/// drives a [`PageSource`] to exhaustion for one feed.
#[derive(Debug, Clone, Copy)]
pub struct ListPaginator {
    page_size: usize,
}

impl ListPaginator {
    pub fn new(page_size: usize) -> Result<Self, CorridorReportError> {
        if page_size == 0 {
            return Err(CorridorReportError::InvalidUserInput(String::from(
                "list page size must be greater than zero",
            )));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// fetches every page of a feed in offset order and concatenates them.
    /// the row total declared on the first page is used for the whole run,
    /// later pages cannot extend or shorten the loop.
    pub async fn fetch_all<S: PageSource>(
        &self,
        source: &S,
        kind: ListFeedKind,
    ) -> Result<Vec<ListRow>, CorridorReportError> {
        let first = source
            .fetch_page(kind, &ListQuery::new(kind, 0, self.page_size))
            .await?;
        let total = first.records_total;
        let mut rows = first.data;
        log::debug!("{kind}: {total} rows declared, page size {}", self.page_size);

        let mut start = self.page_size;
        while start < total {
            let query = ListQuery::new(kind, start, self.page_size);
            let page = source.fetch_page(kind, &query).await?;
            log::debug!("{kind}: fetched {} rows at offset {start}", page.data.len());
            rows.extend(page.data);
            start += self.page_size;
        }

        log::info!("{kind}: collected {} rows", rows.len());
        Ok(rows)
    }
}
