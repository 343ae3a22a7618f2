use base64::{engine::general_purpose::STANDARD, Engine};
use icon_compose::{platform::linux::SIZES, BuildStatus};
use integration_tests::*;

#[test]
fn should_badge_every_png_size_for_dev() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for size in SIZES {
        let image = workdir.read_png(format!("platform/linuxbsd/icons/blazium_dev_{}px.png", size));
        assert_eq!(image.dimensions(), (size, size));
        assert_eq!(
            image.get_pixel(0, 0),
            &badge_color(BuildStatus::Dev, size),
            "{}px",
            size
        );
        assert_eq!(image.get_pixel(size - 1, size - 1), &MASTER, "{}px", size);
    }
}

#[test]
fn should_not_badge_release_pngs() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for size in SIZES {
        let image =
            workdir.read_png(format!("platform/linuxbsd/icons/blazium_release_{}px.png", size));
        assert!(image.pixels().all(|p| p == &MASTER), "{}px", size);
    }
}

#[test]
fn should_embed_status_badge_in_svg() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let badge = std::fs::read(
        workdir.output("misc/dist/icon_generation/icon_badges/status_nightly.svg"),
    )
    .unwrap();
    let nightly = std::fs::read_to_string(workdir.output("platform/linuxbsd/icons/blazium_nightly.svg"))
        .unwrap();
    let release =
        std::fs::read_to_string(workdir.output("platform/linuxbsd/icons/blazium_release.svg"))
            .unwrap();

    assert!(nightly.contains(&STANDARD.encode(badge)));
    assert!(nightly.contains(r#"x="0" y="10" width="186" height="186""#));
    assert_eq!(release.matches("<image ").count(), 1);
}
