use crate::domain::DailyRecord;
use crate::error::StatewiseError;

#[derive(Debug, Clone)]
pub struct DailyTable {
    records: Vec<DailyRecord>,
    statuses: Vec<String>,
    dates: Vec<String>,
    state_codes: Vec<String>,
}

impl DailyTable {
    pub fn from_records(records: Vec<DailyRecord>) -> Result<Self, StatewiseError> {
        let first = records.first().ok_or(StatewiseError::EmptyFeed)?;
        let state_codes: Vec<String> = first.state_codes().map(str::to_string).collect();

        let mut statuses: Vec<String> = Vec::new();
        let mut dates: Vec<String> = Vec::new();
        for record in &records {
            if !statuses.contains(&record.status) {
                statuses.push(record.status.clone());
            }
            if !dates.contains(&record.date) {
                dates.push(record.date.clone());
            }
        }

        Ok(Self {
            records,
            statuses,
            dates,
            state_codes,
        })
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn state_codes(&self) -> &[String] {
        &self.state_codes
    }

    pub fn rows_for<'a>(
        &'a self,
        date: &'a str,
        status: &'a str,
    ) -> impl Iterator<Item = &'a DailyRecord> {
        self.records
            .iter()
            .filter(move |record| record.date == date && record.status == status)
    }
}
