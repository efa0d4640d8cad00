// conferia-core/src/infrastructure/decode.rs

use csv::ReaderBuilder;

use crate::domain::table::Table;
use crate::infrastructure::error::InfrastructureError;

/// Decodes one fetched CSV body into a Table. First record = header row.
/// Flexible width: short or long data rows are kept as-is and validated at
/// schema-binding time. An empty body or a header-only export yields a
/// typed EmptyTable error (the loader collapses it to absence).
pub fn decode_csv(source: &str, data: &[u8]) -> Result<Table, InfrastructureError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    if headers.iter().all(|h| h.is_empty()) || rows.is_empty() {
        return Err(InfrastructureError::EmptyTable(source.to_string()));
    }

    Ok(Table::new(headers, rows))
}
