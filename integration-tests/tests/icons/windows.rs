use icon_compose::{platform::windows::SIZES, BuildStatus};
use integration_tests::*;

#[test]
fn should_embed_every_size_without_badges_for_release() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let images = workdir.read_ico("platform/windows/icons/blazium_release.ico");

    let mut sizes = images.iter().map(|(size, _)| *size).collect::<Vec<_>>();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sizes, SIZES.to_vec());
    for (size, image) in &images {
        assert_eq!(image.dimensions(), (*size, *size));
        assert_eq!(image.get_pixel(0, 0), &MASTER, "{}px", size);
        assert_eq!(image.get_pixel(size - 1, size - 1), &MASTER, "{}px", size);
    }
}

#[test]
fn should_badge_every_size_for_dev() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for (size, image) in workdir.read_ico("platform/windows/icons/blazium_dev.ico") {
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
fn should_add_status_and_console_badges_for_pr_console_icon() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    let images = workdir.read_ico("platform/windows/icons/blazium_console_pr.ico");

    assert_eq!(images.len(), SIZES.len());
    for (size, image) in images {
        assert_eq!(
            image.get_pixel(0, 0),
            &badge_color(BuildStatus::Pr, size),
            "{}px",
            size
        );
        let inset = if size >= 128 { 10 } else { 0 };
        let corner = size - 1 - inset;
        assert_eq!(image.get_pixel(corner, corner), &CONSOLE, "{}px", size);
        if inset > 0 {
            assert_eq!(image.get_pixel(size - 1, size - 1), &MASTER, "{}px", size);
        }
    }
}

#[test]
fn should_add_only_console_badge_for_release_console_icon() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for (size, image) in workdir.read_ico("platform/windows/icons/blazium_console_release.ico") {
        assert_eq!(image.get_pixel(0, 0), &MASTER, "{}px", size);
        assert_eq!(image.get_pixel(size / 4, size / 4), &MASTER, "{}px", size);
    }
    let large = workdir
        .read_ico("platform/windows/icons/blazium_console_release.ico")
        .into_iter()
        .find(|(size, _)| *size == 256)
        .unwrap()
        .1;
    assert_eq!(large.get_pixel(200, 200), &CONSOLE);
}
