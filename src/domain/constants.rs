//! Source-page and report constants
//!
//! Literal phrases and markup values of the patent office's saved search pages,
//! plus the fixed layout of the consolidated report.

/// Placeholder written for any field that has no value
pub const PLACEHOLDER: &str = "-";

/// Saved search-result page characteristics
pub mod source {
    /// Phrase printed by the patent office when a query matched nothing
    pub const EMPTY_SENTINEL: &str = "Nenhum resultado foi encontrado para a sua pesquisa";

    /// Start of "Foram encontrados N processos que satisfazem à pesquisa."
    pub const RESULTS_SENTINEL: &str = "Foram encontrados";

    /// Depositor tax ID as echoed in the query summary; group 1 is the value
    pub const CNPJ_PATTERN: &str = r"CNPJ do Depositante: '(.+?)'";

    /// Alternating `bgcolor` stripes of the result table rows
    pub const ROW_COLORS: [&str; 2] = ["#E0E0E0", "white"];

    /// Attribute carrying the stripe colour on a result row
    pub const ROW_COLOR_ATTRIBUTE: &str = "bgcolor";

    /// Number, deposit date, title and IPC
    pub const EXPECTED_CELLS: usize = 4;

    /// Only entries with this exact (case-sensitive) suffix are read
    pub const FILE_SUFFIX: &str = ".html";
}

/// Consolidated report layout
pub mod report {
    pub const DEFAULT_TITLE: &str = "Patentes";

    pub const HEADER_COLUMNS: [&str; 7] = [
        "Arquivo",
        "CNPJ",
        "Resultado",
        "Número do Pedido",
        "Data do Depósito",
        "Título",
        "IPC",
    ];

    pub const COLUMN_COUNT: usize = HEADER_COLUMNS.len();
}

/// Default locations, relative to the working directory
pub mod paths {
    pub const DEFAULT_INPUT_DIR: &str = "./PATENTES";

    pub const DEFAULT_OUTPUT_FILE: &str = "PATENTES.HTML";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_shape_matches_header() {
        // Two file-level columns plus result count plus the row cells
        assert_eq!(report::COLUMN_COUNT, 3 + source::EXPECTED_CELLS);
    }

    #[test]
    fn test_cnpj_pattern_compiles() {
        let re = regex::Regex::new(source::CNPJ_PATTERN).unwrap();
        assert_eq!(re.captures_len(), 2);
    }
}
