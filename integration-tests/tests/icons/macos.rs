use icon_compose::{argb, BuildStatus};
use integration_tests::*;

#[test]
fn should_keep_template_artwork_for_release() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let family = workdir.read_icns("platform/macos/icons/Blazium_release.icns");

    let ic07 = decode_png(&element(&family, b"ic07").data);
    assert_eq!(ic07.get_pixel(0, 0), &TEMPLATE);
    let ic04 = argb::decode(&element(&family, b"ic04").data, 16, 16).unwrap();
    assert!(ic04.pixels().all(|p| p == &TEMPLATE));
    assert_eq!(element(&family, b"info").data, TEMPLATE_INFO);
}

#[test]
fn should_badge_each_representation_for_unstable_builds() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for status in [BuildStatus::Dev, BuildStatus::Nightly, BuildStatus::Pr] {
        let family = workdir.read_icns(format!("platform/macos/icons/Blazium_{}.icns", status));

        let ic07 = decode_png(&element(&family, b"ic07").data);
        assert_eq!(ic07.get_pixel(0, 0), &status_color(status));
        assert_eq!(ic07.get_pixel(31, 31), &status_color(status));
        assert_eq!(ic07.get_pixel(32, 32), &TEMPLATE);

        // 128pt@2x: the 128 placement doubled
        let ic13 = decode_png(&element(&family, b"ic13").data);
        assert_eq!(ic13.dimensions(), (256, 256));
        assert_eq!(ic13.get_pixel(63, 63), &status_color(status));
        assert_eq!(ic13.get_pixel(64, 64), &TEMPLATE);

        let ic04 = argb::decode(&element(&family, b"ic04").data, 16, 16).unwrap();
        assert_eq!(ic04.get_pixel(0, 0), &mini_status_color(status));
        assert_eq!(ic04.get_pixel(8, 8), &TEMPLATE);

        assert_eq!(element(&family, b"info").data, TEMPLATE_INFO);
    }
}

#[test]
fn should_keep_table_of_contents_in_sync_with_elements() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for status in BuildStatus::ALL {
        let family = workdir.read_icns(format!("platform/macos/icons/Blazium_{}.icns", status));

        assert_eq!(&family.elements[0].ostype.0, b"TOC ", "{}", status);
        assert_eq!(table_of_contents(&family), element_lengths(&family), "{}", status);
    }
}
