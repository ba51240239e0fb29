use super::{BackupChapter, MangaStatus};
use bkconv_wire::error::Result;
use bkconv_wire::{Message, Reader, Tag, Writer};

const SOURCE: u32 = 1;
const URL: u32 = 2;
const TITLE: u32 = 3;
const ARTIST: u32 = 4;
const AUTHOR: u32 = 5;
const DESCRIPTION: u32 = 6;
const GENRE: u32 = 7;
const STATUS: u32 = 8;
const THUMBNAIL_URL: u32 = 9;
const DATE_ADDED: u32 = 13;
const CHAPTERS: u32 = 16;
const CATEGORIES: u32 = 17;
const FAVORITE: u32 = 100;
const LAST_MODIFIED_AT: u32 = 106;
const VERSION: u32 = 109;
const INITIALIZED: u32 = 111;

/// One library entry.
///
/// Identity within Mihon is `(source, url)`; nothing here enforces it.
///
/// The optional text fields are `Option`s, but the wire format can't tell an
/// empty string from an absent field: `Some("")` encodes to nothing and
/// decodes as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupManga {
    /// Source (extension) id, see `BackupSource`.
    pub source: i64,
    /// Source-relative URL of the title.
    pub url: String,
    pub title: String,
    pub artist: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    /// Raw status integer, see [`BackupManga::status`].
    pub status: i32,
    pub thumbnail_url: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub date_added: i64,
    pub chapters: Vec<BackupChapter>,
    /// Ids of the `BackupCategory`s the entry is filed under, in order.
    pub categories: Vec<i64>,
    pub favorite: bool,
    /// Milliseconds since the Unix epoch.
    pub last_modified_at: i64,
    pub version: i64,
    pub initialized: bool,
}
impl BackupManga {
    pub fn status(&self) -> MangaStatus {
        MangaStatus::from(self.status)
    }
}
impl Message for BackupManga {
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool> {
        match tag.field {
            SOURCE => self.source = reader.int64(tag, "manga.source")?,
            URL => self.url = reader.string(tag, "manga.url")?,
            TITLE => self.title = reader.string(tag, "manga.title")?,
            ARTIST => self.artist = reader.optional_string(tag, "manga.artist")?,
            AUTHOR => self.author = reader.optional_string(tag, "manga.author")?,
            DESCRIPTION => self.description = reader.optional_string(tag, "manga.description")?,
            GENRE => self.genres.push(reader.string(tag, "manga.genre")?),
            STATUS => self.status = reader.int32(tag, "manga.status")?,
            THUMBNAIL_URL => self.thumbnail_url = reader.optional_string(tag, "manga.thumbnail_url")?,
            DATE_ADDED => self.date_added = reader.int64(tag, "manga.date_added")?,
            CHAPTERS => self.chapters.push(reader.message(tag, "manga.chapters")?),
            CATEGORIES => self.categories.push(reader.int64(tag, "manga.categories")?),
            FAVORITE => self.favorite = reader.bool(tag, "manga.favorite")?,
            LAST_MODIFIED_AT => self.last_modified_at = reader.int64(tag, "manga.last_modified_at")?,
            VERSION => self.version = reader.int64(tag, "manga.version")?,
            INITIALIZED => self.initialized = reader.bool(tag, "manga.initialized")?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut Writer) {
        writer.int64(SOURCE, self.source);
        writer.string(URL, &self.url);
        writer.string(TITLE, &self.title);
        writer.optional_string(ARTIST, self.artist.as_deref());
        writer.optional_string(AUTHOR, self.author.as_deref());
        writer.optional_string(DESCRIPTION, self.description.as_deref());
        writer.repeated_string(GENRE, &self.genres);
        writer.int32(STATUS, self.status);
        writer.optional_string(THUMBNAIL_URL, self.thumbnail_url.as_deref());
        writer.int64(DATE_ADDED, self.date_added);
        writer.repeated_message(CHAPTERS, &self.chapters);
        writer.repeated_int64(CATEGORIES, &self.categories);
        writer.bool(FAVORITE, self.favorite);
        writer.int64(LAST_MODIFIED_AT, self.last_modified_at);
        writer.int64(VERSION, self.version);
        writer.bool(INITIALIZED, self.initialized);
    }
}
