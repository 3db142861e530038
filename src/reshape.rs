use tracing::warn;

use crate::domain::CaseType;
use crate::error::StatewiseError;
use crate::table::DailyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMatrix {
    pub dates: Vec<String>,
    pub series: Vec<(String, Vec<Option<String>>)>,
}

impl SeriesMatrix {
    pub fn state_count(&self) -> usize {
        self.series.len()
    }

    pub fn date_count(&self) -> usize {
        self.dates.len()
    }
}

pub fn reshape(table: &DailyTable, case_type: CaseType) -> Result<SeriesMatrix, StatewiseError> {
    let status = case_type.as_str();
    if !table.statuses().iter().any(|candidate| candidate == status) {
        return Err(StatewiseError::CaseTypeNotFound {
            requested: status.to_string(),
            available: table.statuses().join(", "),
        });
    }

    let mut series: Vec<(String, Vec<Option<String>>)> = table
        .state_codes()
        .iter()
        .map(|code| (code.clone(), Vec::with_capacity(table.dates().len())))
        .collect();

    for date in table.dates() {
        let mut rows = table.rows_for(date, status);
        let row = rows.next();
        if rows.next().is_some() {
            warn!(%date, status, "multiple rows match, taking the first");
        }
        for (code, values) in &mut series {
            let value = row
                .and_then(|record| record.value_for(code))
                .map(str::to_string);
            values.push(value);
        }
    }

    Ok(SeriesMatrix {
        dates: table.dates().to_vec(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::domain::DailyRecord;
    use crate::error::StatewiseError;

    fn two_day_table() -> DailyTable {
        DailyTable::from_records(vec![
            DailyRecord::new("01-Apr-20", "Confirmed")
                .with_value("mh", "10")
                .with_value("dl", "5"),
            DailyRecord::new("01-Apr-20", "Recovered")
                .with_value("mh", "1")
                .with_value("dl", "0"),
            DailyRecord::new("02-Apr-20", "Confirmed")
                .with_value("mh", "15")
                .with_value("dl", "8"),
            DailyRecord::new("02-Apr-20", "Recovered")
                .with_value("mh", "2")
                .with_value("dl", "1"),
        ])
        .unwrap()
    }

    #[test]
    fn reshapes_in_date_order() {
        let matrix = reshape(&two_day_table(), CaseType::Confirmed).unwrap();

        assert_eq!(matrix.dates, ["01-Apr-20", "02-Apr-20"]);
        assert_eq!(
            matrix.series,
            vec![
                (
                    "mh".to_string(),
                    vec![Some("10".to_string()), Some("15".to_string())]
                ),
                (
                    "dl".to_string(),
                    vec![Some("5".to_string()), Some("8".to_string())]
                ),
            ]
        );
    }

    #[test]
    fn missing_date_yields_missing_markers() {
        let table = DailyTable::from_records(vec![
            DailyRecord::new("01-Apr-20", "Confirmed")
                .with_value("mh", "10")
                .with_value("dl", "5"),
            DailyRecord::new("02-Apr-20", "Recovered")
                .with_value("mh", "2")
                .with_value("dl", "1"),
        ])
        .unwrap();

        let matrix = reshape(&table, CaseType::Confirmed).unwrap();
        assert_eq!(
            matrix.series[0].1,
            vec![Some("10".to_string()), None],
        );
        assert_eq!(matrix.series[1].1, vec![Some("5".to_string()), None]);
    }

    #[test]
    fn sparse_record_yields_missing_marker_for_absent_state() {
        let table = DailyTable::from_records(vec![
            DailyRecord::new("01-Apr-20", "Confirmed")
                .with_value("mh", "10")
                .with_value("dl", "5"),
            DailyRecord::new("02-Apr-20", "Confirmed").with_value("mh", "15"),
        ])
        .unwrap();

        let matrix = reshape(&table, CaseType::Confirmed).unwrap();
        assert_eq!(matrix.series[1].1, vec![Some("5".to_string()), None]);
    }

    #[test]
    fn duplicate_rows_take_the_first() {
        let table = DailyTable::from_records(vec![
            DailyRecord::new("01-Apr-20", "Confirmed")
                .with_value("mh", "10")
                .with_value("dl", "5"),
            DailyRecord::new("01-Apr-20", "Confirmed")
                .with_value("mh", "99")
                .with_value("dl", "99"),
        ])
        .unwrap();

        let matrix = reshape(&table, CaseType::Confirmed).unwrap();
        assert_eq!(matrix.series[0].1, vec![Some("10".to_string())]);
    }

    #[test]
    fn absent_case_type_is_an_error() {
        let table = DailyTable::from_records(vec![
            DailyRecord::new("01-Apr-20", "Confirmed").with_value("mh", "10"),
        ])
        .unwrap();

        let err = reshape(&table, CaseType::Deceased).unwrap_err();
        assert_matches!(
            err,
            StatewiseError::CaseTypeNotFound { requested, available }
                if requested == "Deceased" && available == "Confirmed"
        );
    }

    #[test]
    fn all_series_share_one_length() {
        let matrix = reshape(&two_day_table(), CaseType::Recovered).unwrap();
        for (_, values) in &matrix.series {
            assert_eq!(values.len(), matrix.date_count());
        }
    }
}
