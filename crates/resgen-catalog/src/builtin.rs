//! Built-in platform tables
//!
//! Platform order here is the order platforms are generated in.

use crate::types::{IconSpec, Platform, SplashSpec};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Platforms generated when the caller does not choose any
pub const DEFAULT_PLATFORMS: &[&str] = &["ios", "android"];

/// Built-in platforms keyed by name, all inactive
pub(crate) static BUILTIN: Lazy<IndexMap<String, Platform>> = Lazy::new(|| {
    builtin_platforms()
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect()
});

fn icon(name: &str, size: u32) -> IconSpec {
    IconSpec::new(name, size)
}

fn splash(name: &str, width: u32, height: u32) -> SplashSpec {
    SplashSpec::new(name, width, height)
}

/// Every built-in platform, inactive, in generation order
#[must_use]
pub fn builtin_platforms() -> Vec<Platform> {
    vec![ios(), android(), wp8(), windows(), store()]
}

fn ios() -> Platform {
    Platform::new("ios", "resources/ios/icon", "resources/ios/splash")
        .with_icons(vec![
            // Default icon, required by App Store submission
            icon("icon.png", 57),
            icon("icon@2x.png", 114),
            // Spotlight
            icon("icon-40.png", 40),
            icon("icon-40@2x.png", 80),
            icon("icon-40@3x.png", 120),
            // iPad Spotlight and Settings
            icon("icon-50.png", 50),
            icon("icon-50@2x.png", 100),
            // iPhone / iPod Touch
            icon("icon-60.png", 60),
            icon("icon-60@2x.png", 120),
            icon("icon-60@3x.png", 180),
            // iPad
            icon("icon-72.png", 72),
            icon("icon-72@2x.png", 144),
            icon("icon-76.png", 76),
            icon("icon-76@2x.png", 152),
            // iPad Pro
            icon("icon-83.5@2x.png", 167),
            // iPhone Spotlight and Settings
            icon("icon-small.png", 29),
            icon("icon-small@2x.png", 58),
            icon("icon-small@3x.png", 87),
        ])
        .with_splashes(vec![
            splash("Default-568h@2x~iphone.png", 640, 1136),
            splash("Default-667h.png", 750, 1334),
            splash("Default-736h.png", 1242, 2208),
            splash("Default-Landscape-736h.png", 2208, 1242),
            splash("Default-Landscape@~ipadpro.png", 2732, 2048),
            splash("Default-Landscape@2x~ipad.png", 2048, 1536),
            splash("Default-Landscape~ipad.png", 1024, 768),
            splash("Default-Portrait@~ipadpro.png", 2048, 2732),
            splash("Default-Portrait@2x~ipad.png", 1536, 2048),
            splash("Default-Portrait~ipad.png", 768, 1024),
            splash("Default@2x~iphone.png", 640, 960),
            splash("Default~iphone.png", 320, 480),
        ])
}

fn android() -> Platform {
    Platform::new("android", "resources/android/icon", "resources/android/splash")
        .with_icons(vec![
            icon("drawable-ldpi-icon.png", 36).with_density("ldpi"),
            icon("drawable-mdpi-icon.png", 48).with_density("mdpi"),
            icon("drawable-hdpi-icon.png", 72).with_density("hdpi"),
            icon("drawable-xhdpi-icon.png", 96).with_density("xhdpi"),
            icon("drawable-xxhdpi-icon.png", 144).with_density("xxhdpi"),
            icon("drawable-xxxhdpi-icon.png", 192).with_density("xxxhdpi"),
        ])
        .with_splashes(vec![
            splash("drawable-land-hdpi-screen.png", 640, 480).with_density("land-hdpi"),
            splash("drawable-land-ldpi-screen.png", 426, 320).with_density("land-ldpi"),
            splash("drawable-land-mdpi-screen.png", 470, 320).with_density("land-mdpi"),
            splash("drawable-land-xhdpi-screen.png", 960, 720).with_density("land-xhdpi"),
            splash("drawable-land-xxhdpi-screen.png", 1600, 960).with_density("land-xxhdpi"),
            splash("drawable-land-xxxhdpi-screen.png", 1920, 1280).with_density("land-xxxhdpi"),
            splash("drawable-port-hdpi-screen.png", 480, 640).with_density("port-hdpi"),
            splash("drawable-port-ldpi-screen.png", 320, 426).with_density("port-ldpi"),
            splash("drawable-port-mdpi-screen.png", 320, 470).with_density("port-mdpi"),
            splash("drawable-port-xhdpi-screen.png", 720, 960).with_density("port-xhdpi"),
            splash("drawable-port-xxhdpi-screen.png", 960, 1600).with_density("port-xxhdpi"),
            splash("drawable-port-xxxhdpi-screen.png", 1280, 1920).with_density("port-xxxhdpi"),
        ])
}

fn wp8() -> Platform {
    Platform::new("wp8", "resources/wp8/icon", "resources/wp8/splash")
        .with_icons(vec![
            icon("ApplicationIcon.png", 99),
            icon("Background.png", 159),
        ])
        .with_splashes(vec![
            splash("SplashScreenImage.jpg", 768, 1280),
            splash("SplashScreenImage.screen-WVGA.jpg", 480, 800),
            splash("SplashScreenImage.screen-WXGA.jpg", 768, 1280),
            splash("SplashScreenImage.screen-720p.jpg", 720, 1280),
        ])
}

fn windows() -> Platform {
    Platform::new("windows", "resources/windows/icon", "resources/windows/splash")
        .with_icons(vec![
            icon("Square150x150Logo.scale-100.png", 150),
            icon("Square150x150Logo.scale-240.png", 360),
            icon("Square30x30Logo.scale-100.png", 30),
            icon("Square310x310Logo.scale-100.png", 310),
            icon("Square44x44Logo.scale-240.png", 106),
            icon("Square70x70Logo.scale-100.png", 70),
            icon("Square71x71Logo.scale-240.png", 170),
            icon("StoreLogo.scale-100.png", 50),
            icon("StoreLogo.scale-240.png", 120),
            icon("Wide310x150Logo.scale-100.png", 310),
            icon("Wide310x150Logo.scale-240.png", 744),
        ])
        .with_splashes(vec![
            splash("SplashScreen.scale-100.png", 620, 300),
            splash("SplashScreen.scale-240.png", 1152, 1920),
            splash("SplashScreenPhone.scale-240.png", 1152, 1920),
        ])
}

// Storefront submission assets, written next to each platform's own output.
fn store() -> Platform {
    Platform::new("store", "store/icons", "store/screens")
        .with_icons(vec![
            icon("icon-512.png", 512).with_sub_path("resources/android/icon"),
            icon("icon-300.png", 300).with_sub_path("resources/wp8/icon"),
            // App Store
            icon("icon-1024.jpg", 1024).with_sub_path("resources/ios/icon"),
        ])
        .with_splashes(vec![
            splash("cover-store.png", 1024, 500).with_sub_path("resources/android/splash"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_tables_are_valid() {
        for platform in builtin_platforms() {
            platform.validate().unwrap();
            assert!(!platform.is_active);
        }
    }

    #[test]
    fn builtin_order() {
        let names: Vec<_> = BUILTIN.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["ios", "android", "wp8", "windows", "store"]);
    }

    #[test]
    fn android_icon_table() {
        let android = &BUILTIN["android"];
        let pairs: Vec<_> = android
            .targets(AssetKind::Icon)
            .into_iter()
            .map(|t| (t.file_name, t.width))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("drawable-ldpi-icon.png".to_string(), 36),
                ("drawable-mdpi-icon.png".to_string(), 48),
                ("drawable-hdpi-icon.png".to_string(), 72),
                ("drawable-xhdpi-icon.png".to_string(), 96),
                ("drawable-xxhdpi-icon.png".to_string(), 144),
                ("drawable-xxxhdpi-icon.png".to_string(), 192),
            ]
        );
    }

    #[test]
    fn ios_splash_table() {
        let ios = &BUILTIN["ios"];
        let targets = ios.targets(AssetKind::Splash);
        assert_eq!(targets.len(), 12);

        let iphone5 = targets
            .iter()
            .find(|t| t.file_name == "Default-568h@2x~iphone.png")
            .unwrap();
        assert_eq!((iphone5.width, iphone5.height), (640, 1136));
    }

    #[test]
    fn store_points_into_sibling_folders() {
        let store = &BUILTIN["store"];
        assert!(store.icons.iter().all(|i| i.sub_path.is_some()));
        assert!(store.splashes.iter().all(|s| s.sub_path.is_some()));

        let paths: Vec<_> = AssetKind::ALL
            .iter()
            .flat_map(|&kind| store.targets(kind))
            .map(|t| t.relative_path)
            .collect();
        assert!(paths.iter().all(|p| !p.starts_with("store")), "{paths:?}");
        assert_eq!(
            paths,
            vec![
                std::path::PathBuf::from("resources/android/icon/icon-512.png"),
                std::path::PathBuf::from("resources/wp8/icon/icon-300.png"),
                std::path::PathBuf::from("resources/ios/icon/icon-1024.jpg"),
                std::path::PathBuf::from("resources/android/splash/cover-store.png"),
            ]
        );
    }

    #[test]
    fn android_carries_density_qualifiers() {
        let android = &BUILTIN["android"];
        assert_eq!(android.densities(AssetKind::Icon).len(), 6);
        assert_eq!(android.densities(AssetKind::Splash)[5], "land-xxxhdpi");
        assert_eq!(android.densities(AssetKind::Splash)[11], "port-xxxhdpi");
        assert!(BUILTIN["ios"].densities(AssetKind::Icon).is_empty());
    }
}
