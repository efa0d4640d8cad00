// conferia-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Essential data missing: {missing}")]
    #[diagnostic(
        code(conferia::domain::essentials),
        help("Check the source links and sharing permissions.")
    )]
    EssentialDataMissing { missing: String },

    #[error("Unexpected column layout in the {table} table: {detail}")]
    #[diagnostic(
        code(conferia::domain::schema),
        help("The published sheet layout changed; update the variant schema bindings.")
    )]
    UnexpectedColumnLayout { table: String, detail: String },

    #[error("Non-numeric value '{value}' in summary column '{column}' (row {row})")]
    #[diagnostic(code(conferia::domain::summary_cell))]
    MalformedSummaryCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Unknown dashboard variant '{0}'")]
    #[diagnostic(code(conferia::domain::variant))]
    UnknownVariant(String),
}
