use crate::SourceResolver;
use crate::error::{ErrorKind, Result};
use crate::state;
use bkconv_kotatsu::{KotatsuBackup, KotatsuChapter, KotatsuManga};
use bkconv_mihon::{Backup, BackupCategory, BackupChapter, BackupManga, BackupSource};
use std::collections::HashSet;
use tracing::instrument;

/// Knobs for [`kotatsu_to_mihon`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Copy Kotatsu's `author` back into the entry. Off by default: Kotatsu
    /// often stores a scraped, comma-joined list that Mihon would then keep
    /// over the extension's own metadata.
    pub restore_author: bool,
}

/// Convert Kotatsu tables into a Mihon backup.
///
/// Sources are resolved through `resolver`, and one [`BackupSource`] is
/// registered per distinct resolved id. Every entry is marked as a
/// favourite. Chapters come from the archive's chapter index, matched on
/// the entry id.
#[instrument(skip_all, fields(favourites = backup.favourites.len(), categories = backup.categories.len()))]
pub fn kotatsu_to_mihon(backup: &KotatsuBackup, resolver: &SourceResolver, options: &MapOptions) -> Result<Backup> {
    let mut seen_ids = HashSet::new();
    if let Some(duplicate) = backup.favourites.iter().find(|manga| !seen_ids.insert(manga.id)) {
        exn::bail!(ErrorKind::DuplicateEntry(duplicate.id));
    }

    let index = backup.chapter_index();
    let mut output = Backup::default();
    let mut registered = HashSet::new();
    for manga in &backup.favourites {
        let resolved = resolver.resolve(&manga.source);
        if registered.insert(resolved.id) {
            output.sources.push(BackupSource { name: resolved.name.clone(), source_id: resolved.id });
        }
        let chapters = index.get(manga.id).iter().enumerate().map(|(position, chapter)| convert_chapter(chapter, position));
        output.mangas.push(BackupManga {
            chapters: chapters.collect(),
            ..convert_manga(manga, resolved.id, options)
        });
    }
    output.categories = backup
        .categories
        .iter()
        .map(|category| BackupCategory {
            name: category.title.clone(),
            order: category.created_at,
            id: category.category_id,
        })
        .collect();
    tracing::debug!(
        mangas = output.mangas.len(),
        sources = output.sources.len(),
        "converted to mihon"
    );
    Ok(output)
}

fn convert_manga(manga: &KotatsuManga, source: i64, options: &MapOptions) -> BackupManga {
    BackupManga {
        source,
        url: manga.url.clone(),
        title: manga.title.clone(),
        author: manga.author.clone().filter(|_| options.restore_author),
        status: state::from_kotatsu(manga.state.as_deref()).into(),
        thumbnail_url: Some(manga.cover_url.clone()).filter(|url| !url.is_empty()),
        categories: manga.category_id.into_iter().collect(),
        favorite: true,
        ..Default::default()
    }
}

fn convert_chapter(chapter: &KotatsuChapter, position: usize) -> BackupChapter {
    BackupChapter {
        url: chapter.url.clone(),
        name: chapter.name.clone(),
        scanlator: chapter.scanlator.clone(),
        read: chapter.read,
        bookmark: chapter.bookmarked,
        last_page_read: chapter.page,
        date_upload: chapter.upload_date,
        chapter_number: chapter.number,
        source_order: position as i64,
        ..Default::default()
    }
}
