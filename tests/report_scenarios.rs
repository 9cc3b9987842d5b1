//! End-to-end runs of the report over temporary page directories
use std::fs;
use std::path::Path;

use patent_report_lib::GenerateReportUseCase;
use patent_report_lib::infrastructure::config::{AppConfig, PathsConfig};
use patent_report_lib::infrastructure::encoding::decode_latin1;
use tempfile::TempDir;

const HEADER: &str = "<tr><th>Arquivo</th><th>CNPJ</th><th>Resultado</th>\
    <th>Número do Pedido</th><th>Data do Depósito</th><th>Título</th><th>IPC</th></tr>";

const NO_RESULTS_PAGE: &str = "<html><body>\
    <font>Pesquisa: CNPJ do Depositante: '12.345.678/0001-99'</font>\
    <p>Nenhum resultado foi encontrado para a sua pesquisa.</p>\
    </body></html>";

const TWO_RESULTS_PAGE: &str = r##"<html><body>
<font>CNPJ do Depositante: '33.000.167/0001-01'</font>
<p>Foram encontrados 2 processos que satisfazem à pesquisa. Mostrando página 1 de 1.</p>
<table width="780">
  <tr bgcolor="#F0F0F0"><td><b>Pedido</b></td><td><b>Depósito</b></td><td><b>Título</b></td><td><b>IPC</b></td></tr>
  <tr bgcolor="#E0E0E0">
    <td align="center"><font class="normal"><a href="/pePI/servlet?CodPedido=1">BR 10 2018 001234-5</a></font></td>
    <td align="center"><font class="normal">20/01/2018</font></td>
    <td><font class="normal"><b>PROCESSO DE REFINO</b></font></td>
    <td><font class="normal">C10G 45/00</font></td>
  </tr>
  <tr bgcolor="white">
    <td align="center"><font class="normal"><a href="/pePI/servlet?CodPedido=2">BR 10 2019 005678-9</a></font></td>
    <td align="center"><font class="normal">03/07/2019</font></td>
    <td><font class="normal"><b>SISTEMA DE PERFURACAO</b></font></td>
    <td><font class="normal">E21B 7/00</font></td>
  </tr>
</table>
</body></html>"##;

struct Workspace {
    _dir: TempDir,
    config: AppConfig,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input_dir = dir.path().join("PATENTES");
        fs::create_dir(&input_dir).unwrap();

        let mut config = AppConfig::default();
        config.paths = PathsConfig {
            input_dir,
            output_file: dir.path().join("PATENTES.HTML"),
        };
        config.extraction.sort_entries = true;

        Self { _dir: dir, config }
    }

    fn add_page(&self, name: &str, content: &str) {
        fs::write(self.config.paths.input_dir.join(name), content).unwrap();
    }

    fn add_raw_page(&self, name: &str, bytes: &[u8]) {
        fs::write(self.config.paths.input_dir.join(name), bytes).unwrap();
    }

    fn output_path(&self) -> &Path {
        &self.config.paths.output_file
    }

    fn run(&self) -> String {
        GenerateReportUseCase::new(self.config.clone())
            .unwrap()
            .execute()
            .unwrap();
        decode_latin1(&fs::read(self.output_path()).unwrap())
    }
}

/// Cell texts of every data row, header excluded
fn data_rows(html: &str) -> Vec<Vec<String>> {
    html.split("<tr>")
        .skip(1)
        .filter(|row| row.starts_with("<td>"))
        .map(|row| {
            row.split("<td>")
                .skip(1)
                .map(|cell| cell.split("</td>").next().unwrap_or_default().to_string())
                .collect()
        })
        .collect()
}

#[test]
fn scenario_a_no_results_page_yields_placeholder_row() {
    let ws = Workspace::new();
    ws.add_page("a.html", NO_RESULTS_PAGE);

    let rows = data_rows(&ws.run());

    assert_eq!(
        rows,
        vec![vec!["a.html", "12.345.678/0001-99", "0", "-", "-", "-", "-"]]
    );
}

#[test]
fn scenario_b_results_page_yields_one_row_per_application() {
    let ws = Workspace::new();
    ws.add_page("b.html", TWO_RESULTS_PAGE);

    let rows = data_rows(&ws.run());

    assert_eq!(
        rows,
        vec![
            vec![
                "b.html",
                "33.000.167/0001-01",
                "2",
                "BR 10 2018 001234-5",
                "20/01/2018",
                "PROCESSO DE REFINO",
                "C10G 45/00",
            ],
            vec![
                "b.html",
                "33.000.167/0001-01",
                "2",
                "BR 10 2019 005678-9",
                "03/07/2019",
                "SISTEMA DE PERFURACAO",
                "E21B 7/00",
            ],
        ]
    );
}

#[test]
fn scenario_c_empty_directory_yields_header_only() {
    let ws = Workspace::new();

    let html = ws.run();

    assert_eq!(
        html,
        format!(
            "<html><head><title>Patentes</title></head><body><table border='1'>{HEADER}</table></body></html>"
        )
    );
}

#[test]
fn scenario_d_unrecognized_page_contributes_nothing() {
    let ws = Workspace::new();
    ws.add_page("d.html", "<html><body>Erro interno do servidor</body></html>");
    ws.add_page("a.html", NO_RESULTS_PAGE);

    let html = ws.run();

    assert_eq!(data_rows(&html).len(), 1);
    assert!(!html.contains("d.html"));
}

#[test]
fn mixed_directory_keeps_file_order_and_row_count() {
    let ws = Workspace::new();
    ws.add_page("a.html", NO_RESULTS_PAGE);
    ws.add_page("b.html", TWO_RESULTS_PAGE);
    ws.add_page("c.html", NO_RESULTS_PAGE);
    ws.add_page("readme.txt", NO_RESULTS_PAGE);

    let html = ws.run();
    let rows = data_rows(&html);

    assert_eq!(html.matches("<tr>").count(), 1 + rows.len());
    let files: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(files, ["a.html", "b.html", "b.html", "c.html"]);

    for row in rows.iter().filter(|r| r[0] == "b.html") {
        assert_eq!(row[1], "33.000.167/0001-01");
        assert_eq!(row[2], "2");
    }
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let ws = Workspace::new();
    ws.add_page("a.html", NO_RESULTS_PAGE);
    ws.add_page("b.html", TWO_RESULTS_PAGE);

    ws.run();
    let first = fs::read(ws.output_path()).unwrap();
    ws.run();
    let second = fs::read(ws.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn latin1_text_survives_the_round_trip() {
    let ws = Workspace::new();
    let mut page = Vec::new();
    page.extend_from_slice(b"CNPJ do Depositante: '1' Foram encontrados 1 processos\
        <table><tr bgcolor=\"white\"><td>BR 1</td><td>01/01/2001</td>\
        <td>COMPOSI\xc7\xc3O FARMAC\xcaUTICA</td><td>A61K 9/00</td></tr></table>");
    ws.add_raw_page("e.html", &page);

    ws.run();
    let bytes = fs::read(ws.output_path()).unwrap();

    let title: &[u8] = b"COMPOSI\xc7\xc3O FARMAC\xcaUTICA";
    assert!(bytes.windows(title.len()).any(|w| w == title));
}

#[test]
fn legacy_mode_writes_titles_unescaped() {
    let mut ws = Workspace::new();
    ws.config.report.escape_html = false;
    ws.add_page(
        "f.html",
        "CNPJ do Depositante: '1' Foram encontrados 1 processos<table>\
         <tr bgcolor=\"white\"><td>BR 1</td><td>d</td><td>A &amp; B</td><td>X</td></tr></table>",
    );

    let html = ws.run();

    assert!(html.contains("<td>A & B</td>"));
}

#[test]
fn missing_input_directory_is_an_error() {
    let ws = Workspace::new();
    fs::remove_dir(&ws.config.paths.input_dir).unwrap();

    let result = GenerateReportUseCase::new(ws.config.clone())
        .unwrap()
        .execute();

    assert!(result.is_err());
    assert!(!ws.output_path().exists());
}

#[cfg(unix)]
#[test]
fn unreadable_page_aborts_before_writing() {
    use patent_report_lib::infrastructure::ReportError;
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    ws.add_page("a.html", NO_RESULTS_PAGE);
    ws.add_page("b.html", TWO_RESULTS_PAGE);
    let locked = ws.config.paths.input_dir.join("b.html");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user
    if fs::read(&locked).is_ok() {
        return;
    }

    let result = GenerateReportUseCase::new(ws.config.clone())
        .unwrap()
        .execute();

    assert!(matches!(result, Err(ReportError::ReadFile { .. })));
    assert!(!ws.output_path().exists());
}
