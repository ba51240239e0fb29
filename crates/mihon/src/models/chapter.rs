use bkconv_wire::error::Result;
use bkconv_wire::{Message, Reader, Tag, Writer};

const URL: u32 = 1;
const NAME: u32 = 2;
const SCANLATOR: u32 = 3;
const READ: u32 = 4;
const BOOKMARK: u32 = 5;
const LAST_PAGE_READ: u32 = 6;
const DATE_FETCH: u32 = 7;
const DATE_UPLOAD: u32 = 8;
const CHAPTER_NUMBER: u32 = 9;
const SOURCE_ORDER: u32 = 10;

/// A chapter of a [`BackupManga`](super::BackupManga), with read progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackupChapter {
    pub url: String,
    pub name: String,
    pub scanlator: Option<String>,
    pub read: bool,
    pub bookmark: bool,
    pub last_page_read: i64,
    /// Milliseconds since the Unix epoch.
    pub date_fetch: i64,
    /// Milliseconds since the Unix epoch.
    pub date_upload: i64,
    /// Fractional numbers ("10.5") are common. Stored as raw IEEE-754 bits
    /// on the wire, so the value round-trips exactly.
    pub chapter_number: f32,
    pub source_order: i64,
}
impl Message for BackupChapter {
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool> {
        match tag.field {
            URL => self.url = reader.string(tag, "chapter.url")?,
            NAME => self.name = reader.string(tag, "chapter.name")?,
            SCANLATOR => self.scanlator = reader.optional_string(tag, "chapter.scanlator")?,
            READ => self.read = reader.bool(tag, "chapter.read")?,
            BOOKMARK => self.bookmark = reader.bool(tag, "chapter.bookmark")?,
            LAST_PAGE_READ => self.last_page_read = reader.int64(tag, "chapter.last_page_read")?,
            DATE_FETCH => self.date_fetch = reader.int64(tag, "chapter.date_fetch")?,
            DATE_UPLOAD => self.date_upload = reader.int64(tag, "chapter.date_upload")?,
            CHAPTER_NUMBER => self.chapter_number = reader.float(tag, "chapter.chapter_number")?,
            SOURCE_ORDER => self.source_order = reader.int64(tag, "chapter.source_order")?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut Writer) {
        writer.string(URL, &self.url);
        writer.string(NAME, &self.name);
        writer.optional_string(SCANLATOR, self.scanlator.as_deref());
        writer.bool(READ, self.read);
        writer.bool(BOOKMARK, self.bookmark);
        writer.int64(LAST_PAGE_READ, self.last_page_read);
        writer.int64(DATE_FETCH, self.date_fetch);
        writer.int64(DATE_UPLOAD, self.date_upload);
        writer.float(CHAPTER_NUMBER, self.chapter_number);
        writer.int64(SOURCE_ORDER, self.source_order);
    }
}
