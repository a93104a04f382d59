use pdf_images::*;

fn specs(count: usize) -> Vec<ImageSpec> {
    (0..count)
        .map(|i| ImageSpec::new(format!("{}.jpg", i), 1600, 1200))
        .collect()
}

#[test]
fn test_stats_no_images() {
    let result = calculate_statistics(&[], &ConversionOptions::default());
    assert!(matches!(result, Err(ConvertError::NoImages)));
}

#[test]
fn test_stats_single() {
    let stats = calculate_statistics(&specs(3), &ConversionOptions::default()).unwrap();
    assert_eq!(stats.images, 3);
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.images_per_page, vec![1, 1, 1]);
    assert_eq!(stats.layout_mode, LayoutMode::Single);
}

#[test]
fn test_stats_double() {
    let options = ConversionOptions {
        layout_mode: LayoutMode::Double,
        ..Default::default()
    };
    let stats = calculate_statistics(&specs(5), &options).unwrap();
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.images_per_page, vec![2, 2, 1]);
}

#[test]
fn test_stats_quad() {
    let options = ConversionOptions {
        layout_mode: LayoutMode::Quad,
        ..Default::default()
    };
    let stats = calculate_statistics(&specs(9), &options).unwrap();
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.images_per_page, vec![4, 4, 1]);
}

#[test]
fn test_stats_full() {
    let options = ConversionOptions {
        layout_mode: LayoutMode::Full,
        ..Default::default()
    };
    let stats = calculate_statistics(&specs(4), &options).unwrap();
    assert_eq!(stats.pages, 1);
    assert_eq!(stats.images_per_page, vec![4]);
}

#[test]
fn test_stats_invalid_options() {
    let options = ConversionOptions {
        padding_mm: -3.0,
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(&specs(2), &options),
        Err(ConvertError::InvalidConfig(_))
    ));
}
