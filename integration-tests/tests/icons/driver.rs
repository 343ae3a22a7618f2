use icon_compose::BuildStatus;
use integration_tests::*;

#[test]
fn should_write_every_output_for_every_status() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for status in BuildStatus::ALL {
        for path in [
            format!("platform/windows/icons/blazium_{}.ico", status),
            format!("platform/windows/icons/blazium_console_{}.ico", status),
            format!("platform/android/icons/{}/mipmap/icon.png", status),
            format!("platform/android/icons/{}/mipmap-xxxhdpi/icon_monochrome.png", status),
            format!("platform/macos/icons/Blazium_{}.icns", status),
            format!("platform/linuxbsd/icons/blazium_{}.svg", status),
            format!("platform/linuxbsd/icons/blazium_{}_256px.png", status),
            format!("main/icons/app_icon_{}.png", status),
        ] {
            assert!(workdir.output(&path).is_file(), "{}", path);
        }
    }
}

#[test]
fn should_badge_main_icon_for_unstable_builds_only() {
    let workdir = Workdir::new();
    workdir.generate().unwrap();

    for status in BuildStatus::ALL {
        let icon = workdir.read_png(format!("main/icons/app_icon_{}.png", status));
        assert_eq!(icon.dimensions(), (128, 128));
        assert_eq!(icon.get_pixel(0, 0), &status_color(status), "{}", status);
        assert_eq!(icon.get_pixel(100, 100), &MASTER);
    }
}

#[test]
fn should_fail_without_master_icon() {
    let workdir = Workdir::new();
    workdir.remove("icon.svg");

    let err = workdir.generate().unwrap_err();

    assert!(format!("{:#}", err).contains("icon.svg"));
}

#[test]
fn should_fail_without_console_badge() {
    let workdir = Workdir::new();
    workdir.remove("misc/dist/icon_generation/icon_badges/console.svg");

    let err = workdir.generate().unwrap_err();

    assert!(format!("{:#}", err).contains("console.svg"));
}

#[test]
fn should_fail_for_invalid_background_colour() {
    let workdir = Workdir::new();
    let config = blazium_build_scripts::config::Config {
        android_background: "purple".to_owned(),
        ..workdir.config()
    };
    let sh = xshell::Shell::new().unwrap();

    assert!(blazium_build_scripts::generate_icons::run(&sh, &config).is_err());
}
