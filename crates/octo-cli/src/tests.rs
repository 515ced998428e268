use super::*;

#[test]
fn parses_product_command_with_urls() {
    let cli = Cli::try_parse_from([
        "octo-cli",
        "product",
        "https://cuddlyoctopus.com/product/asuna/",
        "https://cuddlyoctopus.com/product/rem/",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Product { urls, compact } => {
            assert_eq!(urls.len(), 2);
            assert!(!compact);
        }
    }
}

#[test]
fn parses_compact_flag() {
    let cli = Cli::try_parse_from([
        "octo-cli",
        "product",
        "--compact",
        "https://cuddlyoctopus.com/product/asuna/",
    ])
    .expect("expected valid cli args");

    assert!(matches!(cli.command, Commands::Product { compact: true, .. }));
}

#[test]
fn product_requires_at_least_one_url() {
    assert!(Cli::try_parse_from(["octo-cli", "product"]).is_err());
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["octo-cli"]).is_err());
}

#[test]
fn render_compact_is_single_line() {
    let record = octo_core::ProductRecord {
        context: "https://schema.org/".to_owned(),
        kind: "Product".to_owned(),
        id: String::new(),
        name: "Asuna".to_owned(),
        url: "https://cuddlyoctopus.com/product/asuna/".to_owned(),
        description: "line one\nline two".to_owned(),
        main_image: "https://cuddlyoctopus.com/wp-content/uploads/2020/01/919-asuna.jpg"
            .to_owned(),
        sku: 919,
        offers: Vec::new(),
        alternate_image: None,
    };

    let compact = product::render(&record, true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(compact.contains("\"alternateImage\":null"));
    assert!(product::render(&record, false).unwrap().lines().count() > 1);
}

#[test]
fn help_is_handled_by_the_parser() {
    let err = Cli::try_parse_from(["octo-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
