use async_trait::async_trait;
use futures_util::future::try_join_all;

use crate::{company::CompanyId, core::Reading, ops::DateRange, prelude::*};

#[async_trait]
pub trait MeterSource: Sync {
    /// Fetch the readings of the meter within the date range.
    async fn get_readings(
        &self,
        company: &CompanyId,
        serial_number: &str,
        range: DateRange,
    ) -> Result<Vec<Reading>>;

    /// Fetch all the meters concurrently, failing as soon as any of them fails.
    #[instrument(skip_all, fields(company = %company, n_meters = serial_numbers.len()))]
    async fn get_all_readings(
        &self,
        company: &CompanyId,
        serial_numbers: &[String],
        range: DateRange,
    ) -> Result<Vec<Vec<Reading>>> {
        try_join_all(
            serial_numbers
                .iter()
                .map(|serial_number| self.get_readings(company, serial_number, range)),
        )
        .await
    }
}
