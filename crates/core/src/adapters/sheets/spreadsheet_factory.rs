use google_sheets4::api::{
    GridProperties, Sheet, SheetProperties, Spreadsheet, SpreadsheetProperties,
};

use crate::domain::report::DocumentConfig;

pub trait SpreadsheetFactory {
    fn from_document_config(config: &DocumentConfig) -> Self;
}

impl SpreadsheetFactory for Spreadsheet {
    fn from_document_config(config: &DocumentConfig) -> Self {
        let sheets = config
            .sheets
            .iter()
            .map(|sheet| Sheet {
                properties: Some(SheetProperties {
                    sheet_type: Some(sheet.properties.sheet_type.to_string()),
                    sheet_id: Some(sheet.properties.sheet_id),
                    title: Some(sheet.properties.title.clone()),
                    grid_properties: Some(GridProperties {
                        row_count: Some(sheet.properties.grid_properties.row_count),
                        column_count: Some(sheet.properties.grid_properties.column_count),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .collect();

        Spreadsheet {
            properties: Some(SpreadsheetProperties {
                title: Some(config.properties.title.clone()),
                locale: Some(config.properties.locale.clone()),
                ..Default::default()
            }),
            sheets: Some(sheets),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{build_document_config, ReportTemplate};
    use chrono::NaiveDate;

    #[test]
    fn test_from_document_config() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 1, 10)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        let config = build_document_config(&ReportTemplate::default(), timestamp);
        let spreadsheet = Spreadsheet::from_document_config(&config);

        let properties = spreadsheet.properties.unwrap();
        assert_eq!(
            properties.title.as_deref(),
            Some("Отчет по инвестициям на 2023/01/10 15:30:00")
        );
        assert_eq!(properties.locale.as_deref(), Some("ru_RU"));

        let sheets = spreadsheet.sheets.unwrap();
        assert_eq!(sheets.len(), 1);
        let sheet = sheets[0].properties.as_ref().unwrap();
        assert_eq!(sheet.sheet_type.as_deref(), Some("GRID"));
        assert_eq!(sheet.sheet_id, Some(0));
        assert_eq!(sheet.title.as_deref(), Some("Лист1"));
        let grid = sheet.grid_properties.as_ref().unwrap();
        assert_eq!(grid.row_count, Some(100));
        assert_eq!(grid.column_count, Some(3));
        assert_eq!(spreadsheet.spreadsheet_id, None);
    }
}
