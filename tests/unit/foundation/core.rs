use super::*;

#[test]
fn orientation_split_swaps_axes() {
    let size = Size::new(300.0, 12.0);
    assert_eq!(Orientation::Horizontal.split(size), (300.0, 12.0));
    assert_eq!(Orientation::Vertical.split(size), (12.0, 300.0));
}

#[test]
fn orientation_point_maps_back() {
    assert_eq!(Orientation::Horizontal.point(5.0, 1.0), Point::new(5.0, 1.0));
    assert_eq!(Orientation::Vertical.point(5.0, 1.0), Point::new(1.0, 5.0));
}

#[test]
fn argb_unpacks_channels() {
    let c = Rgba8::from_argb(0x80FF_4020);
    assert_eq!(c, Rgba8::new(0xFF, 0x40, 0x20, 0x80));
    assert_eq!(c.with_alpha(0xFF).a, 0xFF);
    assert_eq!(c.with_alpha(0xFF).r, 0xFF);
}

#[test]
fn orientation_serializes_snake_case() {
    let s = serde_json::to_string(&Orientation::Vertical).unwrap();
    assert_eq!(s, "\"vertical\"");
}
