use pdf_images::*;

#[test]
fn test_default_options_are_valid() {
    let options = ConversionOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.layout_mode, LayoutMode::Single);
    assert_eq!(options.padding_mm, 5.0);
    assert_eq!(options.quality, 92);
}

#[test]
fn test_validation_negative_padding() {
    let options = ConversionOptions {
        padding_mm: -2.0,
        ..Default::default()
    };
    match options.validate() {
        Err(ConvertError::InvalidConfig(msg)) => assert!(msg.contains("Padding")),
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_validation_quality_range() {
    let mut options = ConversionOptions::default();

    options.quality = 0;
    assert!(options.validate().is_err());

    options.quality = 101;
    assert!(options.validate().is_err());

    options.quality = 1;
    assert!(options.validate().is_ok());

    options.quality = 100;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_custom_paper() {
    let options = ConversionOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(ConvertError::InvalidConfig(_))
    ));
}

#[test]
fn test_layout_config_applies_orientation() {
    let options = ConversionOptions {
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    let config = options.layout_config().unwrap();
    assert_eq!(config.page.width_mm, 297.0);
    assert_eq!(config.page.height_mm, 210.0);
    assert_eq!(options.oriented_page_size(), config.page);
}

#[test]
fn test_default_output_path() {
    let path = default_output_path("/tmp/out");
    assert!(path.ends_with("converted-images.pdf"));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = ConversionOptions {
        paper_size: PaperSize::Custom {
            width_mm: 120.0,
            height_mm: 180.0,
        },
        orientation: Orientation::Landscape,
        layout_mode: LayoutMode::Quad,
        padding_mm: 3.5,
        border_color: Color::new(10, 20, 30),
        border_style: BorderStyle::Dotted,
        quality: 70,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = ConversionOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "layout_mode": "Double" }"#).unwrap();

    let loaded = ConversionOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.layout_mode, LayoutMode::Double);
    assert_eq!(loaded.paper_size, PaperSize::A4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    let result = ConversionOptions::load(temp_file.path()).await;
    assert!(matches!(result, Err(ConvertError::InvalidConfig(_))));
}
