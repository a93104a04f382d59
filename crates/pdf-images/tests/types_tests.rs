use pdf_images::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    assert_eq!(PaperSize::Tabloid.dimensions_mm(), (279.4, 431.8));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_orientation_swaps_dimensions() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::Letter.dimensions_with_orientation(Orientation::Portrait),
        (215.9, 279.4)
    );
}

#[test]
fn test_rotation_degrees() {
    assert_eq!(Rotation::None.degrees(), 0);
    assert_eq!(Rotation::Clockwise90.degrees(), 90);
    assert_eq!(Rotation::Clockwise180.degrees(), 180);
    assert_eq!(Rotation::Clockwise270.degrees(), 270);
}

#[test]
fn test_rotation_from_degrees() {
    assert_eq!(Rotation::from_degrees(0), Some(Rotation::None));
    assert_eq!(Rotation::from_degrees(90), Some(Rotation::Clockwise90));
    assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Clockwise270));
    assert_eq!(Rotation::from_degrees(450), Some(Rotation::Clockwise90));
    assert_eq!(Rotation::from_degrees(45), None);
}

#[test]
fn test_rotation_cycles() {
    let mut rotation = Rotation::None;
    for expected in [90, 180, 270, 0] {
        rotation = rotation.rotate_clockwise();
        assert_eq!(rotation.degrees(), expected);
    }
    assert!(Rotation::Clockwise90.swaps_axes());
    assert!(!Rotation::Clockwise180.swaps_axes());
}

#[test]
fn test_layout_mode_images_per_page() {
    assert_eq!(LayoutMode::Full.images_per_page(), None);
    assert_eq!(LayoutMode::Single.images_per_page(), Some(1));
    assert_eq!(LayoutMode::Double.images_per_page(), Some(2));
    assert_eq!(LayoutMode::Quad.images_per_page(), Some(4));
}

#[test]
fn test_color_hex() {
    let red = Color::from_hex("#ff0000").unwrap();
    assert_eq!(red, Color::new(255, 0, 0));
    assert_eq!(red.to_hex(), "#ff0000");

    assert_eq!(Color::from_hex("1A2b3C").unwrap(), Color::new(0x1a, 0x2b, 0x3c));

    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
    assert!(Color::from_hex("#ff00é").is_err());
}

#[test]
fn test_image_spec_aspect_ratio() {
    let spec = ImageSpec::new("a.png", 100, 50);
    assert_eq!(spec.aspect_ratio(), 2.0);
    assert_eq!(spec.with_rotation(Rotation::Clockwise270).aspect_ratio(), 0.5);
}
