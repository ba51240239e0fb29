use crate::state;
use crate::{IdSequence, SourceResolver};
use bkconv_kotatsu::{KotatsuBackup, KotatsuCategory, KotatsuChapter, KotatsuManga, KotatsuTag};
use bkconv_mihon::{Backup, BackupManga};
use tracing::instrument;

/// Convert a Mihon backup into Kotatsu tables.
///
/// Every entry gets the next id from `ids`, which also keys its chapters.
/// Kotatsu files an entry under a single category, so only the first of
/// an entry's categories is kept. Artist, description and the Mihon-only
/// bookkeeping fields (date added, version, ...) have nowhere to go.
#[instrument(skip_all, fields(mangas = backup.mangas.len(), categories = backup.categories.len()))]
pub fn mihon_to_kotatsu(backup: &Backup, resolver: &SourceResolver, ids: &mut IdSequence) -> KotatsuBackup {
    let mut output = KotatsuBackup::default();
    for manga in &backup.mangas {
        let id = ids.next_id();
        let source = source_key(backup, resolver, manga.source);
        output.chapters.extend(manga.chapters.iter().map(|chapter| KotatsuChapter {
            manga_id: id,
            url: chapter.url.clone(),
            name: chapter.name.clone(),
            number: chapter.chapter_number,
            scanlator: chapter.scanlator.clone(),
            read: chapter.read,
            bookmarked: chapter.bookmark,
            page: chapter.last_page_read,
            upload_date: chapter.date_upload,
        }));
        output.favourites.push(convert_manga(manga, id, source));
    }
    output.categories = backup
        .categories
        .iter()
        .enumerate()
        .map(|(position, category)| KotatsuCategory {
            category_id: category.id,
            created_at: category.order,
            sort_key: position as i64,
            title: category.name.clone(),
        })
        .collect();
    tracing::debug!(
        favourites = output.favourites.len(),
        chapters = output.chapters.len(),
        "converted to kotatsu"
    );
    output
}

fn convert_manga(manga: &BackupManga, id: i64, source: String) -> KotatsuManga {
    if manga.categories.len() > 1 {
        tracing::warn!(
            title = %manga.title,
            kept = manga.categories[0],
            dropped = manga.categories.len() - 1,
            "entry is in several categories, keeping only the first"
        );
    }
    let cover = manga.thumbnail_url.clone().unwrap_or_default();
    KotatsuManga {
        id,
        title: manga.title.clone(),
        url: manga.url.clone(),
        public_url: manga.url.clone(),
        cover_url: cover.clone(),
        large_cover_url: cover,
        author: manga.author.clone(),
        state: state::to_kotatsu(manga.status()),
        tags: manga
            .genres
            .iter()
            .map(|genre| KotatsuTag { title: genre.clone(), key: genre.to_lowercase(), source: source.clone() })
            .collect(),
        category_id: manga.categories.first().copied(),
        source,
    }
}

/// Best available Kotatsu name for a Mihon source id.
fn source_key(backup: &Backup, resolver: &SourceResolver, source_id: i64) -> String {
    resolver.key_for_id(source_id).or_else(|| backup.source_name(source_id)).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bkconv_mihon::{BackupCategory, BackupChapter, BackupSource};
    use rstest::rstest;

    fn manga(title: &str, categories: Vec<i64>) -> BackupManga {
        BackupManga {
            title: title.to_string(),
            url: format!("/manga/{}", title.to_lowercase()),
            categories,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(vec![5, 9, 2], Some(5))]
    #[case(vec![7], Some(7))]
    #[case(vec![], None)]
    fn test_first_category_wins(#[case] categories: Vec<i64>, #[case] expected: Option<i64>) {
        let backup = Backup { mangas: vec![manga("Test", categories)], ..Default::default() };
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut IdSequence::new());
        assert_eq!(output.favourites[0].category_id, expected);
    }

    #[test]
    fn test_ids_are_sequential() {
        let backup = Backup {
            mangas: vec![manga("A", vec![]), manga("B", vec![]), manga("C", vec![])],
            ..Default::default()
        };
        let mut ids = IdSequence::new();
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut ids);
        let assigned: Vec<_> = output.favourites.iter().map(|m| m.id).collect();
        assert_eq!(assigned, vec![1, 2, 3]);
        assert_eq!(ids.peek(), 4);
    }

    #[test]
    fn test_entry_fields() {
        let entry = BackupManga {
            source: 6404943692147160087,
            author: Some("A".to_string()),
            artist: Some("B".to_string()),
            genres: vec!["Action".to_string(), "Slice of Life".to_string()],
            status: 1,
            thumbnail_url: Some("https://x/cover.jpg".to_string()),
            ..manga("Test", vec![3])
        };
        let backup = Backup { mangas: vec![entry], ..Default::default() };
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut IdSequence::new());
        let favourite = &output.favourites[0];
        assert_eq!(favourite.public_url, "/manga/test");
        assert_eq!(favourite.cover_url, "https://x/cover.jpg");
        assert_eq!(favourite.large_cover_url, "https://x/cover.jpg");
        assert_eq!(favourite.author.as_deref(), Some("A"));
        assert_eq!(favourite.source, "MANGADEX");
        assert_eq!(favourite.state.as_deref(), Some("ONGOING"));
        assert_eq!(favourite.tags[1].title, "Slice of Life");
        assert_eq!(favourite.tags[1].key, "slice of life");
        assert_eq!(favourite.tags[1].source, "MANGADEX");
    }

    #[rstest]
    #[case(6259531251211001503, vec![], "MANGAPARK")]
    #[case(42, vec![BackupSource { name: "Local source".to_string(), source_id: 42 }], "Local source")]
    #[case(42, vec![], "")]
    fn test_source_key(#[case] source: i64, #[case] sources: Vec<BackupSource>, #[case] expected: &str) {
        let backup = Backup { mangas: vec![BackupManga { source, ..manga("T", vec![]) }], sources, ..Default::default() };
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut IdSequence::new());
        assert_eq!(output.favourites[0].source, expected);
    }

    #[test]
    fn test_categories() {
        let backup = Backup {
            categories: vec![
                BackupCategory { name: "Reading".to_string(), order: 3, id: 10 },
                BackupCategory { name: "Done".to_string(), order: 1, id: 11 },
            ],
            ..Default::default()
        };
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut IdSequence::new());
        assert_eq!(
            output.categories,
            vec![
                KotatsuCategory { category_id: 10, created_at: 3, sort_key: 0, title: "Reading".to_string() },
                KotatsuCategory { category_id: 11, created_at: 1, sort_key: 1, title: "Done".to_string() },
            ]
        );
    }

    #[test]
    fn test_chapters_keyed_by_entry_id() {
        let chapter = BackupChapter {
            url: "/c1".to_string(),
            name: "Ch1".to_string(),
            chapter_number: 10.5,
            bookmark: true,
            last_page_read: 4,
            ..Default::default()
        };
        let backup = Backup {
            mangas: vec![manga("A", vec![]), BackupManga { chapters: vec![chapter], ..manga("B", vec![]) }],
            ..Default::default()
        };
        let output = mihon_to_kotatsu(&backup, &SourceResolver::new(), &mut IdSequence::new());
        let index = output.chapter_index();
        assert!(index.get(1).is_empty());
        let chapters = index.get(2);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].number.to_bits(), 10.5f32.to_bits());
        assert!(chapters[0].bookmarked);
        assert_eq!(chapters[0].page, 4);
    }
}
