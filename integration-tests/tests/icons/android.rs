use icon_compose::{
    platform::android::{AndroidIconSpec, Density},
    BuildStatus,
};
use image::Rgba;
use integration_tests::*;

const LAYERS: [&str; 4] = [
    "icon.png",
    "icon_foreground.png",
    "icon_background.png",
    "icon_monochrome.png",
];

fn mipmap(status: BuildStatus, density: &str, file: &str) -> String {
    format!("platform/android/icons/{}/mipmap-{}/{}", status, density, file)
}

#[test]
fn should_write_every_layer_at_density_sizes() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for density in Density::ALL {
        let spec = AndroidIconSpec::new(density, vec![]);
        let icon = workdir.read_png(mipmap(BuildStatus::Release, density.name(), "icon.png"));
        assert_eq!(icon.dimensions(), (spec.icon_size, spec.icon_size));
        for layer in &LAYERS[1..] {
            let image = workdir.read_png(mipmap(BuildStatus::Release, density.name(), layer));
            assert_eq!(
                image.dimensions(),
                (spec.foreground_size, spec.foreground_size),
                "{} {}",
                density.name(),
                layer
            );
        }
    }
}

#[test]
fn should_keep_release_legacy_icon_unbadged() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for density in Density::ALL {
        let icon = workdir.read_png(mipmap(BuildStatus::Release, density.name(), "icon.png"));
        let far = icon.width() - 1;

        assert_eq!(icon.get_pixel(0, 0), &MASTER, "{}", density.name());
        assert_eq!(icon.get_pixel(far, far), &MASTER, "{}", density.name());
    }
}

#[test]
fn should_center_foreground_content_and_derive_monochrome() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let spec = AndroidIconSpec::new(Density::Xxhdpi, vec![]);
    let margin = spec.foreground_margin();
    let far = margin + spec.foreground_content_size - 1;
    let foreground = workdir.read_png(mipmap(BuildStatus::Release, "xxhdpi", "icon_foreground.png"));
    let monochrome = workdir.read_png(mipmap(BuildStatus::Release, "xxhdpi", "icon_monochrome.png"));

    assert_eq!(foreground.get_pixel(margin, margin), &MASTER);
    assert_eq!(foreground.get_pixel(far, far), &MASTER);
    assert_eq!(foreground.get_pixel(margin - 1, margin - 1).0[3], 0);
    assert_eq!(foreground.get_pixel(far + 1, far + 1).0[3], 0);
    assert_eq!(monochrome.get_pixel(margin, margin), &Rgba([255, 255, 255, 255]));
    assert_eq!(monochrome.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
}

#[test]
fn should_fill_background_with_configured_colour() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let background = workdir.read_png(mipmap(BuildStatus::Dev, "hdpi", "icon_background.png"));

    assert!(background.pixels().all(|p| p.0 == [0x22, 0x0f, 0x25, 255]));
}

#[test]
fn should_badge_legacy_and_foreground_icons_for_unstable_builds() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for status in [BuildStatus::Dev, BuildStatus::Nightly, BuildStatus::Pr] {
        for density in Density::ALL {
            let spec = AndroidIconSpec::new(density, vec![]);
            let icon = workdir.read_png(mipmap(status, density.name(), "icon.png"));
            let foreground =
                workdir.read_png(mipmap(status, density.name(), "icon_foreground.png"));
            let margin = spec.foreground_margin();

            assert_eq!(icon.get_pixel(0, 0), &status_color(status));
            assert_eq!(
                icon.get_pixel(spec.icon_size - 1, spec.icon_size - 1),
                &MASTER
            );
            assert_eq!(foreground.get_pixel(margin, margin), &status_color(status));
        }
    }
}

#[test]
fn should_copy_mdpi_icons_to_plain_mipmap_directory() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for layer in LAYERS {
        let mdpi = std::fs::read(workdir.output(mipmap(BuildStatus::Dev, "mdpi", layer))).unwrap();
        let plain = std::fs::read(workdir.output(format!(
            "platform/android/icons/dev/mipmap/{}",
            layer
        )))
        .unwrap();
        assert_eq!(mdpi, plain, "{}", layer);
    }
}
