use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes rows to CSV bytes. The header row is written explicitly so an
/// empty table still produces a headed CSV.
pub fn to_csv_bytes<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);

        writer.write_record(headers).context("writing CSV header")?;
        for row in rows {
            writer.serialize(row).context("serializing CSV row")?;
        }
        writer.flush().context("flushing CSV buffer")?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExclusionType, Pathogen, PointExclusion, StateExclusion};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table_still_has_header() {
        let rows: Vec<PointExclusion> = Vec::new();
        let bytes = to_csv_bytes(&PointExclusion::CSV_HEADERS, &rows).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "reference_date,report_date,state,disease\n"
        );
    }

    #[test]
    fn test_point_exclusion_row_rendering() {
        let rows = vec![
            PointExclusion {
                reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
                report_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                state: Some("AK".to_string()),
                disease: Pathogen::Covid19,
            },
            PointExclusion {
                reference_date: None,
                report_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                state: Some("AL".to_string()),
                disease: Pathogen::Rsv,
            },
        ];

        let bytes = to_csv_bytes(&PointExclusion::CSV_HEADERS, &rows).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "reference_date,report_date,state,disease\n\
             2025-01-01,2025-06-01,AK,COVID-19\n\
             ,2025-06-01,AL,RSV\n"
        );
    }

    #[test]
    fn test_state_exclusion_row_rendering() {
        let rows = vec![
            StateExclusion {
                state_abb: Some("AK".to_string()),
                pathogen: Pathogen::Influenza,
                exclusion_type: Some(ExclusionType::Data),
            },
            StateExclusion {
                state_abb: Some("AL".to_string()),
                pathogen: Pathogen::Covid19,
                exclusion_type: None,
            },
        ];

        let bytes = to_csv_bytes(&StateExclusion::CSV_HEADERS, &rows).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "state_abb,pathogen,type\nAK,Influenza,Data\nAL,COVID-19,\n"
        );
    }
}
