//! Shortcuts used by the price inquiry workflow.

use foodapp_domain::pricing::{
    Inquiry, InquiryCreate, InquiryItem, InquiryItemCreate, InquiryListQuery,
};
use foodapp_domain::{Ack, Page};

use super::{InquiryApi, InquiryItemApi};
use crate::error::ApiResult;
use crate::http::ApiClient;

/// The three calls the inquiry workflow needs, routed to the same endpoints
/// as [`InquiryApi`] and [`InquiryItemApi`].
#[derive(Debug, Clone)]
pub struct PriceApi {
    inquiries: InquiryApi,
    items: InquiryItemApi,
}

impl PriceApi {
    /// Creates the wrapper.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            inquiries: InquiryApi::new(client.clone()),
            items: InquiryItemApi::new(client),
        }
    }

    /// Same as [`InquiryApi::create`].
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn inquiry_create(&self, inquiry: &InquiryCreate) -> ApiResult<Ack> {
        self.inquiries.create(inquiry).await
    }

    /// Same as [`InquiryApi::list`].
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn inquiry_list(&self, query: &InquiryListQuery) -> ApiResult<Page<Inquiry>> {
        self.inquiries.list(query).await
    }

    /// Same as [`InquiryItemApi::create`].
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn inquiry_item_create(&self, item: &InquiryItemCreate) -> ApiResult<InquiryItem> {
        self.items.create(item).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_aliases_hit_inquiry_routes() {
        let harness = Harness::new().logged_in().await;
        harness
            .transport
            .respond(201, r#"{"ID":"i-1"}"#)
            .respond(200, r#"{"total":0,"items":[]}"#);
        let api = PriceApi::new(harness.client.clone());

        api.inquiry_create(&InquiryCreate {
            org_id: "o-1".into(),
            inquiry_title: "四月中旬".into(),
            inquiry_date: "2024-04-15".into(),
        })
        .await
        .unwrap();
        api.inquiry_list(&InquiryListQuery {
            org_id: "o-1".into(),
            ..InquiryListQuery::default()
        })
        .await
        .unwrap();

        let sent = harness.transport.requests();
        assert_eq!(sent[0].path, "/api/v1/inquiry/create_inquiry");
        assert_eq!(sent[1].path, "/api/v1/inquiry/list_inquiries?org_id=o-1");
    }
}
