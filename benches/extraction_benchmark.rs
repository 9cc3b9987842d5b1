//! Result page parsing and report rendering throughput
//!
//! A synthetic page with a few hundred striped rows stands in for a large
//! saved search.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use patent_report_lib::application::{ExtractionStats, PatentExtractor};
use patent_report_lib::infrastructure::{
    ExtractionConfig, HtmlReportWriter, ParsingConfig, ResultPageParser,
};

fn synthetic_results_page(rows: usize) -> String {
    let mut page = String::from(
        "<html><body><p>CNPJ do Depositante: '12.345.678/0001-99'</p>\
         <p>Foram encontrados muitos processos que satisfazem à pesquisa.</p><table>",
    );
    for i in 0..rows {
        let color = if i % 2 == 0 { "#E0E0E0" } else { "white" };
        page.push_str(&format!(
            "<tr bgcolor=\"{color}\"><td><a href=\"#\">BR 10 2020 {i:06}-0</a></td>\
             <td>01/01/2020</td><td><b>TITULO {i}</b></td><td>G06F {i}/00</td></tr>"
        ));
    }
    page.push_str("</table></body></html>");
    page
}

fn extraction_benchmark(c: &mut Criterion) {
    let page = synthetic_results_page(500);
    let parser = ResultPageParser::new().unwrap();
    let extractor =
        PatentExtractor::new(&ParsingConfig::default(), ExtractionConfig::default()).unwrap();

    c.bench_function("result page - classify", |b| {
        b.iter(|| black_box(parser.classify(black_box(&page))))
    });

    c.bench_function("result page - extract 500 rows", |b| {
        b.iter(|| black_box(parser.extract_rows(black_box(&page))))
    });

    let mut stats = ExtractionStats::default();
    let records = extractor.extract_document("bench.html", &page, &mut stats);
    let writer = HtmlReportWriter::default();

    c.bench_function("report - render 500 records", |b| {
        b.iter(|| black_box(writer.render(black_box(&records))))
    });
}

criterion_group!(benches, extraction_benchmark);
criterion_main!(benches);
