use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The tables of a Kotatsu archive that survive a conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KotatsuBackup {
    pub favourites: Vec<KotatsuManga>,
    pub categories: Vec<KotatsuCategory>,
    /// Flat list as stored in the archive; see [`KotatsuBackup::chapter_index`].
    pub chapters: Vec<KotatsuChapter>,
}
impl KotatsuBackup {
    pub fn chapter_index(&self) -> ChapterIndex<'_> {
        ChapterIndex::new(&self.chapters)
    }
}

/// A favourited manga.
///
/// `id` is only meaningful inside one archive: it links the entry to its
/// chapters and has no relation to any id the source uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KotatsuManga {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub public_url: String,
    pub cover_url: String,
    pub large_cover_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Kotatsu source key, e.g. `MANGADEX`.
    pub source: String,
    /// `ONGOING`, `FINISHED`, `ABANDONED`, `PAUSED` or `UPCOMING`. Kept as
    /// a string so unknown states pass through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub tags: Vec<KotatsuTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KotatsuTag {
    pub title: String,
    pub key: String,
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KotatsuCategory {
    pub category_id: i64,
    /// Creation timestamp in Kotatsu's own backups.
    pub created_at: i64,
    pub sort_key: i64,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KotatsuChapter {
    /// [`KotatsuManga::id`] of the owning entry.
    pub manga_id: i64,
    pub url: String,
    pub name: String,
    pub number: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanlator: Option<String>,
    pub read: bool,
    pub bookmarked: bool,
    /// Last page read.
    pub page: i64,
    pub upload_date: i64,
}

/// Chapters grouped by owning manga id, each group in archive order.
#[derive(Debug, Clone, Default)]
pub struct ChapterIndex<'a> {
    by_manga: BTreeMap<i64, Vec<&'a KotatsuChapter>>,
}
impl<'a> ChapterIndex<'a> {
    pub fn new(chapters: &'a [KotatsuChapter]) -> Self {
        let mut by_manga: BTreeMap<i64, Vec<&'a KotatsuChapter>> = BTreeMap::new();
        for chapter in chapters {
            by_manga.entry(chapter.manga_id).or_default().push(chapter);
        }
        Self { by_manga }
    }

    /// Chapters of `manga_id`; empty if it has none.
    pub fn get(&self, manga_id: i64) -> &[&'a KotatsuChapter] {
        self.by_manga.get(&manga_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Manga ids that own at least one chapter.
    pub fn manga_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_manga.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(manga_id: i64, name: &str) -> KotatsuChapter {
        KotatsuChapter { manga_id, name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_chapter_index_groups_in_order() {
        let chapters = vec![chapter(2, "a"), chapter(1, "b"), chapter(2, "c")];
        let index = ChapterIndex::new(&chapters);
        let names: Vec<_> = index.get(2).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(index.get(1).len(), 1);
        assert!(index.get(3).is_empty());
        assert_eq!(index.manga_ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_manga_tolerates_missing_keys() {
        let manga: KotatsuManga = serde_json::from_str(r#"{"id":7,"title":"Test","url":"/m","tags":[]}"#).unwrap();
        assert_eq!(manga.id, 7);
        assert_eq!(manga.author, None);
        assert_eq!(manga.category_id, None);
        assert!(manga.source.is_empty());
    }

    #[test]
    fn test_manga_ignores_unknown_keys() {
        let json = r#"{"id":1,"title":"T","url":"/m","rating":0.5,"nsfw":false,
            "tags":[{"id":3,"title":"Action","key":"action","source":"MANGADEX","pinned":false}]}"#;
        let manga: KotatsuManga = serde_json::from_str(json).unwrap();
        assert_eq!(
            manga.tags,
            vec![KotatsuTag {
                title: "Action".to_string(),
                key: "action".to_string(),
                source: "MANGADEX".to_string(),
            }]
        );
    }

    #[test]
    fn test_manga_serializes_expected_keys() {
        let manga = KotatsuManga {
            id: 1,
            title: "Test".to_string(),
            category_id: Some(4),
            ..Default::default()
        };
        let value = serde_json::to_value(&manga).unwrap();
        let object = value.as_object().unwrap();
        for key in ["id", "title", "url", "public_url", "cover_url", "large_cover_url", "source", "tags", "category_id"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert!(!object.contains_key("author"));
        assert!(!object.contains_key("state"));
    }
}
