//! Maintenance record operations against the Supabase `maintenance` table

use shared::error::{AppError, ErrorCode};
use shared::models::{
    MAINTENANCE_TABLE, Maintenance, MaintenanceCreate, MaintenanceFieldsUpdate,
    UpdateMaintenanceRequest,
};

use crate::error::ServiceResult;
use crate::supabase::{Order, PostgrestClient, Query, RestResponse};
use crate::util::generate_maintenance_number;

/// Insert attempts before number generation gives up
pub const MAX_NUMBER_ATTEMPTS: usize = 10_000;

/// Column carrying the UNIQUE constraint on maintenance numbers
const NUMBER_COLUMN: &str = "maintenanceNumber";

#[derive(Debug, Clone)]
pub struct MaintenanceService {
    rest: PostgrestClient,
    max_number_attempts: usize,
}

impl MaintenanceService {
    pub fn new(rest: PostgrestClient) -> Self {
        Self {
            rest,
            max_number_attempts: MAX_NUMBER_ATTEMPTS,
        }
    }

    pub fn with_max_number_attempts(mut self, attempts: usize) -> Self {
        self.max_number_attempts = attempts;
        self
    }

    /// Insert a new record under a freshly generated maintenance number.
    ///
    /// The candidate is inserted directly; a unique violation on the number
    /// column draws a new candidate and retries.
    pub async fn create(&self, req: &MaintenanceCreate) -> ServiceResult<RestResponse> {
        if req.inspection_number.trim().is_empty() {
            return Err(AppError::new(ErrorCode::InspectionNumberRequired).into());
        }

        for attempt in 1..=self.max_number_attempts {
            let number = generate_maintenance_number();
            match self
                .rest
                .insert(MAINTENANCE_TABLE, &req.to_insert(&number))
                .await
            {
                Ok(response) => {
                    tracing::info!(
                        maintenance_number = %number,
                        inspection_number = %req.inspection_number,
                        attempt,
                        "Maintenance record created"
                    );
                    return Ok(response);
                }
                Err(e) if e.is_unique_violation(NUMBER_COLUMN) => {
                    tracing::debug!(
                        maintenance_number = %number,
                        attempt,
                        "Maintenance number taken, retrying"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            attempts = self.max_number_attempts,
            "Could not allocate a unique maintenance number"
        );
        Err(AppError::new(ErrorCode::MaintenanceNumberExhausted)
            .with_detail("attempts", self.max_number_attempts)
            .into())
    }

    /// All records, newest first
    pub async fn list_all(&self) -> ServiceResult<RestResponse> {
        let query = Query::new().select("*").order("created_at", Order::Desc);
        Ok(self.rest.select(MAINTENANCE_TABLE, &query).await?)
    }

    pub async fn get_by_id(&self, mid: i64) -> ServiceResult<Maintenance> {
        self.find(mid).await?.ok_or_else(|| not_found(mid).into())
    }

    /// Records for one inspection, newest first
    pub async fn list_by_inspection_number(
        &self,
        inspection_number: &str,
    ) -> ServiceResult<RestResponse> {
        let query = Query::new()
            .eq("inspectionNumber", inspection_number)
            .select("*")
            .order("created_at", Order::Desc);
        Ok(self.rest.select(MAINTENANCE_TABLE, &query).await?)
    }

    /// Patch only the columns present in `update`
    pub async fn update_fields(
        &self,
        mid: i64,
        update: &MaintenanceFieldsUpdate,
    ) -> ServiceResult<RestResponse> {
        self.get_by_id(mid).await?;

        let response = self
            .rest
            .update(MAINTENANCE_TABLE, &by_mid(mid), update)
            .await?;
        tracing::info!(mid, "Maintenance record updated");
        Ok(response)
    }

    /// Patch scalar columns and merge `details` into the stored document
    pub async fn update(
        &self,
        mid: i64,
        req: &UpdateMaintenanceRequest,
    ) -> ServiceResult<RestResponse> {
        let existing = self.get_by_id(mid).await?;
        let patch = req.to_patch(existing.details.as_ref());

        let response = self
            .rest
            .update(MAINTENANCE_TABLE, &by_mid(mid), &patch)
            .await?;
        tracing::info!(mid, fields = patch.len(), "Maintenance record updated");
        Ok(response)
    }

    pub async fn delete(&self, mid: i64) -> ServiceResult<RestResponse> {
        self.get_by_id(mid).await?;

        let response = self.rest.delete(MAINTENANCE_TABLE, &by_mid(mid)).await?;
        tracing::info!(mid, "Maintenance record deleted");
        Ok(response)
    }

    /// Single-row lookup; a remote 404 or an empty result means absent
    async fn find(&self, mid: i64) -> ServiceResult<Option<Maintenance>> {
        let query = by_mid(mid).select("*").limit(1);
        match self
            .rest
            .select_rows::<Maintenance>(MAINTENANCE_TABLE, &query)
            .await
        {
            Ok(rows) => Ok(rows.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn by_mid(mid: i64) -> Query {
    Query::new().eq("mid", mid)
}

fn not_found(mid: i64) -> AppError {
    AppError::with_message(
        ErrorCode::MaintenanceNotFound,
        format!("Maintenance record with MID {mid} not found"),
    )
    .with_detail("mid", mid)
}
