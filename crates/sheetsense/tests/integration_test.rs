//! Integration tests for SheetSense.

use std::io::Write;
use tempfile::NamedTempFile;

use rust_xlsxwriter::Workbook;
use sheetsense::{
    Mapping, NormalizeOptions, SheetError, SheetSense, SheetSenseConfig, TokenizerConfig,
};

/// Helper to create a temporary file with given content and suffix.
fn create_test_file(content: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write to temp file");
    file
}

fn contact_sheet() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Nome").unwrap();
    worksheet.write_string(0, 1, "Telefone").unwrap();
    worksheet.write_string(0, 2, "Cidade").unwrap();

    worksheet.write_string(1, 0, "Ana Souza").unwrap();
    worksheet.write_number(1, 1, 11999998888.0).unwrap();
    worksheet.write_string(1, 2, "Recife").unwrap();

    worksheet.write_string(2, 0, "Bruno Lima").unwrap();
    worksheet.write_string(2, 1, "(21) 98888-7777").unwrap();
    worksheet.write_string(2, 2, "Natal").unwrap();

    workbook.save_to_buffer().unwrap()
}

// =============================================================================
// Delimited Text
// =============================================================================

#[test]
fn test_comma_csv_end_to_end() {
    let content = b"Nome,Telefone,Email\n\
                    Ana,(11) 99999-8888,ana@example.com\n\
                    Bruno,21 98888-7777,bruno@example.com\n";
    let file = create_test_file(content, ".csv");

    let sense = SheetSense::new();
    let analysis = sense.analyze_file(file.path()).expect("Analysis failed");

    assert_eq!(analysis.source.format, "csv");
    assert_eq!(analysis.source.delimiter, Some(','));
    assert_eq!(analysis.source.row_count, 3);
    assert_eq!(analysis.source.column_count, 3);
    assert!(analysis.source.hash.starts_with("sha256:"));
    assert!(analysis.has_header);
    assert_eq!(analysis.mapping, Mapping::new().with_name(0).with_phone(1));

    let contacts = sense.contacts(&analysis, &analysis.mapping);
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name.as_deref(), Some("Ana"));
    assert_eq!(contacts[0].phone.as_deref(), Some("11999998888"));
    assert_eq!(contacts[1].phone.as_deref(), Some("21988887777"));
}

#[test]
fn test_semicolon_with_quoted_commas() {
    let content = b"Nome;Telefone;Endereco\n\
                    \"Silva, Ana\";11999998888;\"Rua A, 10\"\n\
                    \"Lima, Bruno\";21988887777;\"Rua B, 20\"\n";

    let sense = SheetSense::new();
    let analysis = sense.analyze(content, "contatos.csv").unwrap();

    assert_eq!(analysis.source.format, "csv-semicolon");
    assert_eq!(analysis.headers, vec!["Nome", "Telefone", "Endereco"]);
    assert_eq!(analysis.body_rows[0], vec!["Silva, Ana", "11999998888", "Rua A, 10"]);
}

#[test]
fn test_tsv_detected() {
    let content = b"Cliente\tCelular\nAna\t11999998888\nBruno\t21988887777\n";

    let analysis = SheetSense::new().analyze(content, "export.txt").unwrap();

    assert_eq!(analysis.source.format, "tsv");
    assert_eq!(analysis.mapping.name, Some(0));
    assert_eq!(analysis.mapping.phone, Some(1));
}

#[test]
fn test_utf8_bom_and_crlf() {
    let content = "\u{feff}Nome,Telefone\r\nJoão,11999998888\r\n".as_bytes();

    let analysis = SheetSense::new().analyze(content, "bom.csv").unwrap();

    assert_eq!(analysis.source.encoding, "utf-8");
    assert_eq!(analysis.headers, vec!["Nome", "Telefone"]);
    assert_eq!(analysis.body_rows, vec![vec!["João", "11999998888"]]);
}

#[test]
fn test_windows_1252_fallback() {
    let content = b"Nome;Telefone\nJos\xe9;11999998888\nConcei\xe7\xe3o;21988887777\n";

    let sense = SheetSense::new();
    let analysis = sense.analyze(content, "legado.csv").unwrap();

    assert_eq!(analysis.source.encoding, "windows-1252");
    let contacts = sense.contacts(&analysis, &analysis.mapping);
    assert_eq!(contacts[0].name.as_deref(), Some("José"));
    assert_eq!(contacts[1].name.as_deref(), Some("Conceição"));
}

#[test]
fn test_delimiter_override() {
    let sense = SheetSense::with_config(SheetSenseConfig {
        tokenizer: TokenizerConfig {
            delimiter: Some(b'|'),
            ..TokenizerConfig::default()
        },
        ..SheetSenseConfig::default()
    });

    let analysis = sense.analyze(b"Nome,Sobrenome|Telefone\nAna,Souza|11999998888\n", "x.csv").unwrap();

    assert_eq!(analysis.source.format, "psv");
    assert_eq!(analysis.headers, vec!["Nome,Sobrenome", "Telefone"]);
}

#[test]
fn test_headerless_file() {
    let content = b"Ana,11999998888,ana@x.com\nBruno,21988887777,bruno@x.com\nCarla,31977776666,\n";

    let analysis = SheetSense::new().analyze(content, "sem_cabecalho.csv").unwrap();

    assert!(!analysis.has_header);
    assert_eq!(analysis.headers, vec!["Column 1", "Column 2", "Column 3"]);
    assert_eq!(analysis.total_rows, 3);
    assert_eq!(analysis.mapping.name, Some(0));
    assert_eq!(analysis.mapping.phone, Some(1));
}

#[test]
fn test_ragged_rows_and_blank_lines() {
    let content = b"Nome,Telefone,Cidade\n\nAna,11999998888\n,,\nBruno,21988887777,Natal,extra\n";

    let sense = SheetSense::new();
    let analysis = sense.analyze(content, "irregular.csv").unwrap();

    assert_eq!(analysis.total_rows, 2);
    assert_eq!(analysis.preview[0], vec!["Ana", "11999998888", ""]);
    assert_eq!(analysis.preview[1], vec!["Bruno", "21988887777", "Natal"]);

    let records = sense.records(&analysis);
    assert_eq!(records[0]["cidade"], "");
    assert_eq!(records[1].len(), 3);
}

#[test]
fn test_empty_file() {
    let file = create_test_file(b"", ".csv");

    let sense = SheetSense::new();
    let analysis = sense.analyze_file(file.path()).unwrap();

    assert!(!analysis.has_header);
    assert!(analysis.headers.is_empty());
    assert_eq!(analysis.total_rows, 0);
    assert_eq!(analysis.mapping, Mapping::new());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SheetSense::new()
        .analyze_file("/nonexistent/contatos.csv")
        .unwrap_err();
    assert!(matches!(err, SheetError::Io { .. }));
}

// =============================================================================
// Spreadsheets
// =============================================================================

#[test]
fn test_xlsx_end_to_end() {
    let bytes = contact_sheet();
    let file = create_test_file(&bytes, ".xlsx");

    let sense = SheetSense::new();
    let analysis = sense.analyze_file(file.path()).unwrap();

    assert_eq!(analysis.source.format, "xlsx");
    assert_eq!(analysis.source.delimiter, None);
    assert!(analysis.has_header);
    assert_eq!(analysis.headers, vec!["Nome", "Telefone", "Cidade"]);
    assert_eq!(analysis.mapping.phone, Some(1));

    let contacts = sense.contacts(&analysis, &analysis.mapping);
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].phone.as_deref(), Some("11999998888"));
    assert_eq!(contacts[1].phone.as_deref(), Some("21988887777"));
}

#[test]
fn test_xlsx_suffix_case_insensitive() {
    let analysis = SheetSense::new().analyze(&contact_sheet(), "LISTA.XLSX").unwrap();
    assert_eq!(analysis.source.format, "xlsx");
}

#[test]
fn test_corrupt_xlsx_is_format_error() {
    let err = SheetSense::new()
        .analyze(b"this is not a workbook", "quebrado.xlsx")
        .unwrap_err();
    assert!(err.is_format_error());
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_country_code_and_extras() {
    let content = b"Nome,Telefone,Cidade,Obs\n\
                    Ana,(11) 99999-8888,Recife,\n\
                    Bruno,5521988887777,Natal,vip\n\
                    ,123,Salvador,\n";

    let sense = SheetSense::with_config(SheetSenseConfig {
        normalize: NormalizeOptions::with_country_code(true),
        ..SheetSenseConfig::default()
    });
    let analysis = sense.analyze(content, "c.csv").unwrap();
    let mapping = analysis.mapping.overridden_by(&Mapping::new().with_extra(2).with_extra(3));
    let contacts = sense.contacts(&analysis, &mapping);

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].phone.as_deref(), Some("5511999998888"));
    assert_eq!(contacts[1].phone.as_deref(), Some("5521988887777"));

    let extras = contacts[0].extras.as_ref().unwrap();
    assert_eq!(extras.len(), 1);
    assert_eq!(extras["Cidade"], "Recife");
    assert_eq!(contacts[1].extras.as_ref().unwrap()["Obs"], "vip");
}

#[test]
fn test_out_of_range_mapping_reads_empty() {
    let sense = SheetSense::new();
    let analysis = sense.analyze(b"Nome,Telefone\nAna,11999998888\n", "a.csv").unwrap();

    let mapping = Mapping::new().with_name(0).with_phone(9).with_extra(7);
    let contacts = sense.contacts(&analysis, &mapping);

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name.as_deref(), Some("Ana"));
    assert_eq!(contacts[0].phone, None);
    assert_eq!(contacts[0].extras, None);
}

#[test]
fn test_edited_mapping_from_json() {
    let sense = SheetSense::new();
    let analysis = sense
        .analyze(b"Telefone,Nome,Cidade\n11999998888,Ana,Recife\n", "a.csv")
        .unwrap();

    let edited = Mapping::from_json(r#"{"extras": [2]}"#).unwrap();
    let mapping = analysis.mapping.overridden_by(&edited);
    let contacts = sense.contacts(&analysis, &mapping);

    let json = serde_json::to_value(&contacts).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"name": "Ana", "phone": "11999998888", "extras": {"Cidade": "Recife"}}])
    );
}

#[test]
fn test_contacts_idempotent() {
    let content = b"Nome,Telefone\nAna,11999998888\nBruno,21988887777\n";
    let sense = SheetSense::new();

    let first = sense.analyze(content, "a.csv").unwrap();
    let second = sense.analyze(content, "a.csv").unwrap();

    assert_eq!(first.mapping, second.mapping);
    assert_eq!(first.source.hash, second.source.hash);
    assert_eq!(
        sense.contacts(&first, &first.mapping),
        sense.contacts(&second, &second.mapping)
    );
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_records_use_machine_keys() {
    let content = "Nome,Nome,E-mail,Situação Atual\nAna,Souza,ana@x.com,ativo\n".as_bytes();
    let sense = SheetSense::new();
    let analysis = sense.analyze(content, "r.csv").unwrap();

    let records = sense.records(&analysis);
    let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["nome", "nome_2", "email", "situacao_atual"]);
    assert_eq!(records[0]["email"], "ana@x.com");
}
