//! Collaborator ports
//!
//! The intake core talks to the customer directory, the material catalog
//! and the job-order service only through these traits. `HttpClient`
//! from `tailor-client` implements all three against the back office.

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{Customer, CustomerCreate, JobOrder, JobOrderCreate, Material};
use tailor_client::HttpClient;

#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    async fn search(&self, query: &str) -> AppResult<Vec<Customer>>;
    async fn create(&self, data: &CustomerCreate) -> AppResult<Customer>;
}

#[async_trait]
pub trait CatalogDirectory: Send + Sync {
    async fn search(&self, query: &str) -> AppResult<Vec<Material>>;
}

#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn submit(&self, payload: &JobOrderCreate) -> AppResult<JobOrder>;
}

#[async_trait]
impl CustomerDirectory for HttpClient {
    async fn search(&self, query: &str) -> AppResult<Vec<Customer>> {
        Ok(self.search_customers(query).await?)
    }

    async fn create(&self, data: &CustomerCreate) -> AppResult<Customer> {
        Ok(self.create_customer(data).await?)
    }
}

#[async_trait]
impl CatalogDirectory for HttpClient {
    async fn search(&self, query: &str) -> AppResult<Vec<Material>> {
        Ok(self.search_materials(query).await?)
    }
}

#[async_trait]
impl OrderSink for HttpClient {
    async fn submit(&self, payload: &JobOrderCreate) -> AppResult<JobOrder> {
        Ok(self.create_job_order(payload).await?)
    }
}
