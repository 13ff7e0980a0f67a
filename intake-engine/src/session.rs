//! Intake session - one draft, one clerk, one submission at a time
//!
//! The session owns the draft and the in-flight guard. Edits go through
//! the reducer and never fail; collaborator calls return `IntakeError`
//! and leave the draft as it was.

use crate::core::IntakeConfig;
use crate::draft::{apply, assemble};
use crate::error::{IntakeError, IntakeResult};
use crate::invoice::InvoiceData;
use crate::ports::{CatalogDirectory, CustomerDirectory, OrderSink};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{Customer, CustomerCreate, JobOrder, JobOrderCreate, Material};
use shared::order::{IntakeCommand, OrderDraft};
use tracing::{info, warn};

/// Outcome of a successful submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub order: JobOrder,
    /// Invoice built from the draft as it was submitted
    pub invoice: InvoiceData,
}

#[derive(Debug)]
pub struct IntakeSession {
    draft: OrderDraft,
    config: IntakeConfig,
    submitting: bool,
}

impl IntakeSession {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            draft: OrderDraft::new(),
            config,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply a clerk edit
    pub fn apply(&mut self, command: &IntakeCommand) {
        apply(&mut self.draft, command, &self.config);
    }

    /// Payload for the current draft, without touching the guard
    pub fn payload(&self) -> JobOrderCreate {
        assemble(&self.draft, &self.config)
    }

    // ========== Submission ==========

    /// Raise the guard and assemble the payload
    pub fn begin_submission(&mut self) -> IntakeResult<JobOrderCreate> {
        if self.submitting {
            warn!(draft_id = %self.draft.draft_id, "Submission already in progress");
            return Err(IntakeError::SubmissionInProgress);
        }
        self.submitting = true;
        Ok(self.payload())
    }

    /// Lower the guard and settle the draft
    ///
    /// On success the draft is replaced by a fresh one; on failure it is
    /// kept so the clerk can correct and retry.
    pub fn finish_submission(
        &mut self,
        outcome: AppResult<JobOrder>,
    ) -> IntakeResult<SubmissionReceipt> {
        self.submitting = false;
        match outcome {
            Ok(order) => {
                info!(
                    draft_id = %self.draft.draft_id,
                    order_id = order.id,
                    order_number = %order.job_order_number,
                    total = %self.draft.totals.total,
                    "Job order submitted"
                );
                let invoice = InvoiceData::from_draft(&self.draft).with_order(&order);
                self.draft = OrderDraft::new();
                Ok(SubmissionReceipt { order, invoice })
            }
            Err(e) => {
                warn!(draft_id = %self.draft.draft_id, code = %e.code, error = %e, "Job order submission failed");
                Err(IntakeError::Submission(e))
            }
        }
    }

    /// Assemble, send and settle in one step
    pub async fn submit<S>(&mut self, sink: &S) -> IntakeResult<SubmissionReceipt>
    where
        S: OrderSink + ?Sized,
    {
        let payload = self.begin_submission()?;
        let outcome = sink.submit(&payload).await;
        self.finish_submission(outcome)
    }

    // ========== Directories ==========

    pub async fn search_customers<D>(&self, directory: &D, query: &str) -> IntakeResult<Vec<Customer>>
    where
        D: CustomerDirectory + ?Sized,
    {
        directory.search(query).await.map_err(|e| {
            warn!(query, error = %e, "Customer search failed");
            IntakeError::Directory(e)
        })
    }

    pub async fn search_materials<C>(&self, catalog: &C, query: &str) -> IntakeResult<Vec<Material>>
    where
        C: CatalogDirectory + ?Sized,
    {
        catalog.search(query).await.map_err(|e| {
            warn!(query, error = %e, "Material search failed");
            IntakeError::Directory(e)
        })
    }

    /// Create a customer in the directory and attach it to the draft
    pub async fn create_customer<D>(
        &mut self,
        directory: &D,
        data: &CustomerCreate,
    ) -> IntakeResult<Customer>
    where
        D: CustomerDirectory + ?Sized,
    {
        let customer = directory.create(data).await.map_err(|e| {
            warn!(name = %data.name, error = %e, "Customer creation failed");
            IntakeError::Directory(e)
        })?;
        self.apply(&IntakeCommand::SelectCustomer {
            customer: customer.clone(),
        });
        Ok(customer)
    }
}
