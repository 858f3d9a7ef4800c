//! Price inquiry sheets.

use foodapp_domain::pricing::{Inquiry, InquiryCreate, InquiryListQuery, InquiryUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/inquiry/*`
#[derive(Debug, Clone)]
pub struct InquiryApi {
    client: ApiClient,
}

impl InquiryApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Opens an inquiry sheet.
    ///
    /// The backend answers with the sheet and whatever it derived from it,
    /// so the payload is left untyped.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, inquiry: &InquiryCreate) -> ApiResult<Ack> {
        self.client
            .post_json("/inquiry/create_inquiry", inquiry)
            .await
    }

    /// Fetches one sheet.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Inquiry> {
        self.client
            .post_json("/inquiry/get_inquiry", &IdRequest::new(id))
            .await
    }

    /// Lists sheets, filtered by period and title.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &InquiryListQuery) -> ApiResult<Page<Inquiry>> {
        self.client
            .post_query("/inquiry/list_inquiries", query)
            .await
    }

    /// Updates title or date.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &InquiryUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/inquiry/update_inquiry", update)
            .await
    }

    /// Soft-deletes a sheet.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/inquiry/soft_delete_inquiry", &IdRequest::new(id))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_by_period() {
        let harness = Harness::new().logged_in().await;
        harness.transport.respond(
            200,
            r#"{"total":1,"items":[{"ID":"i-1","OrgID":"o-1","InquiryTitle":"三月上旬","InquiryDate":"2024-03-05","InquiryYear":2024,"InquiryMonth":3,"InquiryTenDay":1,"IsDeleted":0}]}"#,
        );

        let page = InquiryApi::new(harness.client.clone())
            .list(&InquiryListQuery {
                org_id: "o-1".into(),
                year: Some(2024),
                month: Some(3),
                ten_day: Some(1),
                ..InquiryListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(page.items[0].inquiry_ten_day, Some(1));
        assert_eq!(
            harness.transport.last_request().path,
            "/api/v1/inquiry/list_inquiries?org_id=o-1&year=2024&month=3&ten_day=1"
        );
    }
}
