use serde::Serialize;
use tracing::debug;

use crate::domain::CaseType;
use crate::error::StatewiseError;
use crate::export::CsvExporter;
use crate::feed::FeedClient;
use crate::reshape::reshape;
use crate::table::DailyTable;

#[derive(Debug, Clone, Serialize)]
pub struct ExportRunResult {
    pub items: Vec<ExportReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub case_type: String,
    pub states: usize,
    pub dates: usize,
    pub output_path: String,
    pub exported_at: String,
}

pub struct App<F: FeedClient> {
    feed: F,
    exporter: CsvExporter,
}

impl<F: FeedClient> App<F> {
    pub fn new(feed: F, exporter: CsvExporter) -> Self {
        Self { feed, exporter }
    }

    pub fn export(&self, case_types: &[CaseType]) -> Result<ExportRunResult, StatewiseError> {
        let records = self.feed.fetch_states_daily()?;
        let table = DailyTable::from_records(records)?;
        debug!(
            statuses = table.statuses().len(),
            dates = table.dates().len(),
            states = table.state_codes().len(),
            "tabulated feed"
        );

        let mut items = Vec::with_capacity(case_types.len());
        for case_type in case_types {
            items.push(self.export_from_table(&table, *case_type)?);
        }
        Ok(ExportRunResult { items })
    }

    pub fn export_one(&self, case_type: CaseType) -> Result<ExportReport, StatewiseError> {
        let records = self.feed.fetch_states_daily()?;
        let table = DailyTable::from_records(records)?;
        self.export_from_table(&table, case_type)
    }

    fn export_from_table(
        &self,
        table: &DailyTable,
        case_type: CaseType,
    ) -> Result<ExportReport, StatewiseError> {
        let matrix = reshape(table, case_type)?;
        let path = self.exporter.write(case_type, &matrix)?;
        Ok(ExportReport {
            case_type: case_type.to_string(),
            states: matrix.state_count(),
            dates: matrix.date_count(),
            output_path: path.into_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
