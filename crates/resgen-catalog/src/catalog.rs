//! Asset catalog filtered by the active platform list

use crate::builtin::BUILTIN;
use crate::error::CatalogError;
use crate::types::{AssetKind, Platform};
use indexmap::IndexMap;

/// Immutable mapping from platform name to platform, in generation order
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    platforms: IndexMap<String, Platform>,
}

impl AssetCatalog {
    /// Built-in catalog with the named platforms marked active
    ///
    /// Unknown names are ignored.
    #[must_use]
    pub fn builtin<S: AsRef<str>>(active: &[S]) -> Self {
        let mut platforms = BUILTIN.clone();
        activate(&mut platforms, active);
        Self { platforms }
    }

    /// Catalog over caller-supplied platforms
    ///
    /// # Errors
    /// - `CatalogError::DuplicatePlatform` if two platforms share a name
    /// - Any error from [`Platform::validate`]
    pub fn with_platforms<I, S>(platforms: I, active: &[S]) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Platform>,
        S: AsRef<str>,
    {
        let mut map = IndexMap::new();
        for platform in platforms {
            platform.validate()?;
            let name = platform.name.clone();
            if map.insert(name.clone(), platform).is_some() {
                return Err(CatalogError::DuplicatePlatform(name));
            }
        }
        activate(&mut map, active);
        Ok(Self { platforms: map })
    }

    /// Active platforms that take part in icon generation
    #[inline]
    #[must_use]
    pub fn list_icon_platforms(&self) -> Vec<&Platform> {
        self.active().collect()
    }

    /// Active platforms that take part in splash generation
    #[inline]
    #[must_use]
    pub fn list_splash_platforms(&self) -> Vec<&Platform> {
        self.active().collect()
    }

    /// Active platforms for one lane, in catalog order
    #[must_use]
    pub fn list_platforms(&self, kind: AssetKind) -> Vec<&Platform> {
        match kind {
            AssetKind::Icon => self.list_icon_platforms(),
            AssetKind::Splash => self.list_splash_platforms(),
        }
    }

    fn active(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values().filter(|p| p.is_active)
    }

    /// Look up a platform by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Platform> {
        self.platforms.get(name)
    }

    /// All platforms, active or not
    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// Number of platforms known to the catalog
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Whether the catalog has no platforms
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

fn activate<S: AsRef<str>>(platforms: &mut IndexMap<String, Platform>, active: &[S]) {
    for platform in platforms.values_mut() {
        platform.is_active = false;
    }
    for name in active {
        let name = name.as_ref();
        match platforms.get_mut(name) {
            Some(platform) => platform.is_active = true,
            None => tracing::warn!("ignoring unknown platform '{}'", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IconSpec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn names(platforms: &[&Platform]) -> Vec<String> {
        platforms.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn inactive_platforms_are_excluded() {
        let catalog = AssetCatalog::builtin(&["android"]);

        assert_eq!(names(&catalog.list_icon_platforms()), vec!["android"]);
        assert_eq!(names(&catalog.list_splash_platforms()), vec!["android"]);
        assert!(!catalog.get("ios").unwrap().is_active);
    }

    #[test]
    fn listing_follows_catalog_order() {
        // Request order must not matter
        let catalog = AssetCatalog::builtin(&["store", "android", "ios"]);
        assert_eq!(
            names(&catalog.list_icon_platforms()),
            vec!["ios", "android", "store"]
        );
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let catalog = AssetCatalog::builtin(&["blackberry"]);
        assert!(catalog.list_icon_platforms().is_empty());
        assert!(catalog.list_splash_platforms().is_empty());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn custom_platforms_are_validated() {
        let bad = Platform::new("bad", "i", "s").with_icons(vec![IconSpec::new("x.png", 0)]);
        assert!(AssetCatalog::with_platforms(vec![bad], &["bad"]).is_err());
    }

    #[test]
    fn duplicate_platform_is_rejected() {
        let a = Platform::new("dup", "i", "s");
        let b = Platform::new("dup", "i2", "s2");
        assert_eq!(
            AssetCatalog::with_platforms(vec![a, b], &["dup"]).unwrap_err(),
            CatalogError::DuplicatePlatform("dup".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_listing_is_exactly_the_active_subset(mask in proptest::collection::vec(any::<bool>(), 5)) {
            let all = ["ios", "android", "wp8", "windows", "store"];
            let active: Vec<&str> = all
                .iter()
                .zip(&mask)
                .filter(|(_, on)| **on)
                .map(|(name, _)| *name)
                .collect();

            let catalog = AssetCatalog::builtin(active.as_slice());
            let listed = names(&catalog.list_icon_platforms());

            prop_assert_eq!(listed.clone(), active.iter().map(|s| s.to_string()).collect::<Vec<_>>());
            prop_assert_eq!(listed, names(&catalog.list_splash_platforms()));
        }
    }
}
