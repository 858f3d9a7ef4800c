//! The list/get/create/update/delete shape shared by most resources.

use foodapp_application::{
    AccountApi, ApiResult, CategoryApi, DictApi, GoodsApi, InquiryApi, InquiryItemApi, MarketApi,
    MarketInquiryApi, OrganApi, SupplierApi, SupplierSettlementApi,
};
use foodapp_domain::acl::{Account, AccountCreate, AccountListQuery, AccountUpdate};
use foodapp_domain::acl::{Organ, OrganCreate, OrganListQuery, OrganUpdate};
use foodapp_domain::catalog::{Category, CategoryCreate, CategoryListQuery, CategoryUpdate};
use foodapp_domain::catalog::{DictCreate, DictEntry, DictKind, DictListQuery, DictUpdate};
use foodapp_domain::catalog::{Goods, GoodsCreate, GoodsListQuery, GoodsUpdate};
use foodapp_domain::pricing::{Inquiry, InquiryCreate, InquiryListQuery, InquiryUpdate};
use foodapp_domain::pricing::{
    InquiryItem, InquiryItemCreate, InquiryItemListQuery, InquiryItemUpdate,
};
use foodapp_domain::pricing::{Market, MarketCreate, MarketListQuery, MarketUpdate};
use foodapp_domain::pricing::{
    MarketInquiry, MarketInquiryCreate, MarketInquiryListQuery, MarketInquiryUpdate,
};
use foodapp_domain::supply::{Settlement, SettlementCreate, SettlementListQuery, SettlementUpdate};
use foodapp_domain::supply::{Supplier, SupplierCreate, SupplierListQuery, SupplierUpdate};
use foodapp_domain::{Ack, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A resource the generic CRUD commands can drive.
pub trait CrudResource {
    type Row: Serialize;
    type Created: Serialize;
    type Query: DeserializeOwned + Default;
    type Create: DeserializeOwned;
    type Update: DeserializeOwned;

    async fn list(&self, query: &Self::Query) -> ApiResult<Page<Self::Row>>;
    async fn get(&self, id: &str) -> ApiResult<Self::Row>;
    async fn create(&self, body: &Self::Create) -> ApiResult<Self::Created>;
    async fn update(&self, body: &Self::Update) -> ApiResult<Ack>;
    async fn delete(&self, id: &str) -> ApiResult<Ack>;
}

macro_rules! crud_resource {
    ($api:ty, $row:ty, $created:ty, $query:ty, $create:ty, $update:ty, $delete:ident) => {
        impl CrudResource for $api {
            type Row = $row;
            type Created = $created;
            type Query = $query;
            type Create = $create;
            type Update = $update;

            async fn list(&self, query: &Self::Query) -> ApiResult<Page<Self::Row>> {
                <$api>::list(self, query).await
            }

            async fn get(&self, id: &str) -> ApiResult<Self::Row> {
                <$api>::get(self, id).await
            }

            async fn create(&self, body: &Self::Create) -> ApiResult<Self::Created> {
                <$api>::create(self, body).await
            }

            async fn update(&self, body: &Self::Update) -> ApiResult<Ack> {
                <$api>::update(self, body).await
            }

            async fn delete(&self, id: &str) -> ApiResult<Ack> {
                <$api>::$delete(self, id).await
            }
        }
    };
}

crud_resource!(AccountApi, Account, Ack, AccountListQuery, AccountCreate, AccountUpdate, remove);
crud_resource!(OrganApi, Organ, Organ, OrganListQuery, OrganCreate, OrganUpdate, remove);
crud_resource!(
    CategoryApi,
    Category,
    Category,
    CategoryListQuery,
    CategoryCreate,
    CategoryUpdate,
    delete
);
crud_resource!(GoodsApi, Goods, Goods, GoodsListQuery, GoodsCreate, GoodsUpdate, remove);
crud_resource!(
    SupplierApi,
    Supplier,
    Supplier,
    SupplierListQuery,
    SupplierCreate,
    SupplierUpdate,
    remove
);
crud_resource!(
    SupplierSettlementApi,
    Settlement,
    Settlement,
    SettlementListQuery,
    SettlementCreate,
    SettlementUpdate,
    delete
);
crud_resource!(MarketApi, Market, Market, MarketListQuery, MarketCreate, MarketUpdate, remove);
crud_resource!(InquiryApi, Inquiry, Ack, InquiryListQuery, InquiryCreate, InquiryUpdate, remove);
crud_resource!(
    InquiryItemApi,
    InquiryItem,
    InquiryItem,
    InquiryItemListQuery,
    InquiryItemCreate,
    InquiryItemUpdate,
    remove
);
crud_resource!(
    MarketInquiryApi,
    MarketInquiry,
    MarketInquiry,
    MarketInquiryListQuery,
    MarketInquiryCreate,
    MarketInquiryUpdate,
    remove
);

/// One dictionary, seen as a resource.
pub struct Dictionary {
    pub api: DictApi,
    pub kind: DictKind,
}

impl CrudResource for Dictionary {
    type Row = DictEntry;
    type Created = DictEntry;
    type Query = DictListQuery;
    type Create = DictCreate;
    type Update = DictUpdate;

    async fn list(&self, query: &Self::Query) -> ApiResult<Page<Self::Row>> {
        self.api.list(self.kind, query).await
    }

    async fn get(&self, id: &str) -> ApiResult<Self::Row> {
        self.api.get(self.kind, id).await
    }

    async fn create(&self, body: &Self::Create) -> ApiResult<Self::Created> {
        self.api.create(self.kind, body).await
    }

    async fn update(&self, body: &Self::Update) -> ApiResult<Ack> {
        self.api.update(self.kind, body).await
    }

    async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api.delete(self.kind, id).await
    }
}
