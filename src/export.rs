use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::domain::CaseType;
use crate::error::StatewiseError;
use crate::names;
use crate::reshape::SeriesMatrix;

#[derive(Debug, Clone)]
pub struct CsvExporter {
    out_dir: Utf8PathBuf,
}

impl CsvExporter {
    pub fn new(out_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Utf8Path {
        &self.out_dir
    }

    pub fn write(
        &self,
        case_type: CaseType,
        matrix: &SeriesMatrix,
    ) -> Result<Utf8PathBuf, StatewiseError> {
        let codes: Vec<&str> = matrix
            .series
            .iter()
            .map(|(code, _)| code.as_str())
            .collect();
        names::validate_codes(&codes)?;

        fs::create_dir_all(self.out_dir.as_std_path())
            .map_err(|err| StatewiseError::Filesystem(err.to_string()))?;

        let target = self.out_dir.join(case_type.file_name());
        let temp = NamedTempFile::new_in(self.out_dir.as_std_path())
            .map_err(|err| StatewiseError::Filesystem(err.to_string()))?;

        let mut writer = csv::Writer::from_writer(temp);

        let mut header: Vec<&str> = Vec::with_capacity(matrix.dates.len() + 1);
        header.push("");
        header.extend(matrix.dates.iter().map(String::as_str));
        writer
            .write_record(&header)
            .map_err(|err| StatewiseError::Csv(err.to_string()))?;

        for (code, values) in &matrix.series {
            let name = names::display_name(code)
                .ok_or_else(|| StatewiseError::UnknownStateColumn(code.clone()))?;
            let mut row: Vec<&str> = Vec::with_capacity(values.len() + 1);
            row.push(name);
            row.extend(values.iter().map(|value| value.as_deref().unwrap_or("")));
            writer
                .write_record(&row)
                .map_err(|err| StatewiseError::Csv(err.to_string()))?;
        }

        let temp = writer
            .into_inner()
            .map_err(|err| StatewiseError::Csv(err.to_string()))?;
        temp.persist(target.as_std_path())
            .map_err(|err| StatewiseError::Filesystem(err.to_string()))?;

        info!(path = %target, rows = matrix.state_count(), "csv written");
        Ok(target)
    }
}
