//! Mihon source ids and their Kotatsu counterparts.
//!
//! Mihon derives a source's id from its name, language and version, so an
//! id can be computed for any source without the extension installed.
//! Kotatsu instead names sources with upper-case keys (`MANGADEX`,
//! `MANGAFIRE_EN`, ...) that don't follow any derivable rule. A small
//! curated table maps the keys that have an obvious Mihon equivalent;
//! anything else gets a stable fingerprint id that no real extension will
//! claim, so the importing app shows it as a missing source rather than
//! attaching it to the wrong one.

use md5::{Digest, Md5};
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

const SIGN_BIT_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;
const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Kotatsu source keys with a known Mihon equivalent.
static KNOWN_SOURCES: LazyLock<BTreeMap<&'static str, SourceTarget>> = LazyLock::new(|| {
    BTreeMap::from([
        ("MANGADEX", SourceTarget::new("MangaDex", "all", 1)),
        ("MANGAPARK", SourceTarget::new("MangaPark", "en", 1)),
        // No official extension; the closest community one.
        ("MANGAFIRE_EN", SourceTarget::new("mangafire", "en", 1)),
    ])
});

/// Compute a Mihon source id the way Mihon's `HttpSource` does.
///
/// ```
/// use bkconv_convert::derive_source_id;
///
/// assert_eq!(derive_source_id("MangaDex", "all", 1), 6404943692147160087);
/// ```
pub fn derive_source_id(name: &str, lang: &str, version: u32) -> i64 {
    let key = format!("{}/{lang}/{version}", name.to_lowercase());
    let digest = Md5::digest(key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) & SIGN_BIT_MASK) as i64
}

/// 64-bit FNV-1a of `name` with the sign bit cleared.
pub fn fingerprint(name: &str) -> i64 {
    let hash = name
        .bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));
    (hash & SIGN_BIT_MASK) as i64
}

/// The keys and targets of the built-in table, in key order.
pub fn known_sources() -> impl Iterator<Item = (&'static str, &'static SourceTarget)> {
    KNOWN_SOURCES.iter().map(|(key, target)| (*key, target))
}

/// A Mihon source, identified the way its id is derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceTarget {
    /// Display name; case is ignored when deriving the id.
    pub name: String,
    pub lang: String,
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    pub version: u32,
}
impl SourceTarget {
    pub fn new(name: impl Into<String>, lang: impl Into<String>, version: u32) -> Self {
        Self { name: name.into(), lang: lang.into(), version }
    }

    pub fn id(&self) -> i64 {
        derive_source_id(&self.name, &self.lang, self.version)
    }
}
impl Default for SourceTarget {
    fn default() -> Self {
        Self::new("MangaDex", "all", 1)
    }
}
impl Display for SourceTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}/{}", self.name, self.lang, self.version)
    }
}

#[cfg(feature = "serde")]
fn default_version() -> u32 {
    1
}

/// How a [`ResolvedSource`] was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A configured override matched the key.
    Override,
    /// The built-in table matched the key.
    Known,
    /// No key was given.
    Default,
    /// Unrecognised key; the id is a fingerprint of it.
    Fingerprint,
}
impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Override => "override",
            Resolution::Known => "known",
            Resolution::Default => "default",
            Resolution::Fingerprint => "fingerprint",
        }
    }
}
impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub id: i64,
    /// Name to register the source under in a Mihon backup.
    pub name: String,
    pub resolution: Resolution,
}

/// Maps Kotatsu source keys to Mihon source ids and back.
///
/// Overrides take precedence over the built-in table, both when resolving a
/// key and when looking a key up by id.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    overrides: BTreeMap<String, SourceTarget>,
    default: SourceTarget,
    by_id: HashMap<i64, String>,
}
impl SourceResolver {
    pub fn new() -> Self {
        Self::with(BTreeMap::new(), SourceTarget::default())
    }

    pub fn with(overrides: BTreeMap<String, SourceTarget>, default: SourceTarget) -> Self {
        let mut by_id: HashMap<i64, String> =
            known_sources().map(|(key, target)| (target.id(), key.to_string())).collect();
        for (key, target) in &overrides {
            by_id.insert(target.id(), key.clone());
        }
        Self { overrides, default, by_id }
    }

    pub fn default_target(&self) -> &SourceTarget {
        &self.default
    }

    /// The target configured for `key`, exact and case-sensitive.
    pub fn lookup(&self, key: &str) -> Option<(&SourceTarget, Resolution)> {
        if let Some(target) = self.overrides.get(key) {
            return Some((target, Resolution::Override));
        }
        KNOWN_SOURCES.get(key).map(|target| (target, Resolution::Known))
    }

    /// Resolve a Kotatsu source key. Never fails: unknown keys get a
    /// fingerprint id and keep their own name.
    pub fn resolve(&self, key: &str) -> ResolvedSource {
        if key.is_empty() {
            return ResolvedSource {
                id: self.default.id(),
                name: self.default.name.clone(),
                resolution: Resolution::Default,
            };
        }
        match self.lookup(key) {
            Some((target, resolution)) => ResolvedSource { id: target.id(), name: target.name.clone(), resolution },
            None => {
                tracing::trace!(key, "unknown source, using fingerprint");
                ResolvedSource { id: fingerprint(key), name: key.to_string(), resolution: Resolution::Fingerprint }
            },
        }
    }

    /// The Kotatsu key whose target derives to `id`, if any.
    pub fn key_for_id(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }
}
impl Default for SourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mangadex", "all", 1, 6404943692147160087)]
    #[case("MangaDex", "all", 1, 6404943692147160087)]
    #[case("MangaDex", "en", 1, 2499283573021220255)]
    #[case("MangaDex", "all", 2, 3294846655751099518)]
    #[case("MangaPark", "en", 1, 6259531251211001503)]
    #[case("mangafire", "en", 1, 6084907896154116083)]
    fn test_derive_source_id(#[case] name: &str, #[case] lang: &str, #[case] version: u32, #[case] expected: i64) {
        assert_eq!(derive_source_id(name, lang, version), expected);
    }

    #[rstest]
    #[case("", 5472609002491880229)]
    #[case("a", 3414815163700866188)]
    #[case("MANGAKAKALOT", 7567481402749852526)]
    fn test_fingerprint(#[case] name: &str, #[case] expected: i64) {
        assert_eq!(fingerprint(name), expected);
        assert!(fingerprint(name) >= 0);
    }

    #[rstest]
    #[case("MANGADEX", 6404943692147160087, "MangaDex")]
    #[case("MANGAPARK", 6259531251211001503, "MangaPark")]
    #[case("MANGAFIRE_EN", 6084907896154116083, "mangafire")]
    fn test_resolve_known(#[case] key: &str, #[case] id: i64, #[case] name: &str) {
        let resolved = SourceResolver::new().resolve(key);
        assert_eq!(resolved, ResolvedSource { id, name: name.to_string(), resolution: Resolution::Known });
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let resolved = SourceResolver::new().resolve("mangadex");
        assert_eq!(resolved.resolution, Resolution::Fingerprint);
        assert_eq!(resolved.id, fingerprint("mangadex"));
        assert_eq!(resolved.name, "mangadex");
    }

    #[test]
    fn test_resolve_empty_uses_default() {
        let resolved = SourceResolver::new().resolve("");
        assert_eq!(resolved.id, 6404943692147160087);
        assert_eq!(resolved.name, "MangaDex");
        assert_eq!(resolved.resolution, Resolution::Default);
    }

    #[test]
    fn test_override_takes_precedence() {
        let overrides = BTreeMap::from([
            ("MANGADEX".to_string(), SourceTarget::new("MangaDex", "en", 1)),
            ("MANGAKAKALOT".to_string(), SourceTarget::new("Mangakakalot", "en", 1)),
        ]);
        let resolver = SourceResolver::with(overrides, SourceTarget::new("Local source", "other", 0));
        let resolved = resolver.resolve("MANGADEX");
        assert_eq!(resolved.id, 2499283573021220255);
        assert_eq!(resolved.resolution, Resolution::Override);
        assert_eq!(resolver.resolve("MANGAKAKALOT").resolution, Resolution::Override);
        assert_eq!(resolver.resolve("").name, "Local source");
        assert_eq!(resolver.key_for_id(2499283573021220255), Some("MANGADEX"));
        assert_eq!(resolver.key_for_id(fingerprint("MANGAKAKALOT")), None);
        assert_eq!(resolver.key_for_id(6259531251211001503), Some("MANGAPARK"));
    }

    #[test]
    fn test_key_for_id() {
        let resolver = SourceResolver::new();
        assert_eq!(resolver.key_for_id(6404943692147160087), Some("MANGADEX"));
        assert_eq!(resolver.key_for_id(6084907896154116083), Some("MANGAFIRE_EN"));
        assert_eq!(resolver.key_for_id(1), None);
    }
}
