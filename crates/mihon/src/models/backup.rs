use super::{BackupCategory, BackupManga, BackupSource};
use bkconv_wire::error::Result;
use bkconv_wire::{Message, Reader, Tag, Writer};

const MANGA: u32 = 1;
const CATEGORIES: u32 = 2;
const SOURCES: u32 = 101;

/// The root message of a `.tachibk` file.
///
/// Preferences, extension repositories and the other top-level sections are
/// not modelled and are dropped on decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backup {
    pub mangas: Vec<BackupManga>,
    pub categories: Vec<BackupCategory>,
    /// Source registrations, so the importing app can show a name for
    /// sources it doesn't have installed.
    pub sources: Vec<BackupSource>,
}
impl Backup {
    /// Display name registered for `source_id`, if any.
    pub fn source_name(&self, source_id: i64) -> Option<&str> {
        self.sources.iter().find(|s| s.source_id == source_id).map(|s| s.name.as_str())
    }
}
impl Message for Backup {
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool> {
        match tag.field {
            MANGA => self.mangas.push(reader.message(tag, "backup.manga")?),
            CATEGORIES => self.categories.push(reader.message(tag, "backup.categories")?),
            SOURCES => self.sources.push(reader.message(tag, "backup.sources")?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut Writer) {
        writer.repeated_message(MANGA, &self.mangas);
        writer.repeated_message(CATEGORIES, &self.categories);
        writer.repeated_message(SOURCES, &self.sources);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackupChapter;
    use bkconv_wire::error::ErrorKind;

    fn sample() -> Backup {
        Backup {
            mangas: vec![
                BackupManga {
                    source: 6404943692147160087,
                    url: "/title/1".to_string(),
                    title: "One".to_string(),
                    categories: vec![1],
                    chapters: vec![BackupChapter {
                        url: "/chapter/1".to_string(),
                        name: "Chapter 1".to_string(),
                        chapter_number: 1.0,
                        ..Default::default()
                    }],
                    favorite: true,
                    ..Default::default()
                },
                BackupManga { source: 42, url: "/title/2".to_string(), title: "Two".to_string(), ..Default::default() },
            ],
            categories: vec![BackupCategory { name: "Reading".to_string(), order: 1, id: 1 }],
            sources: vec![BackupSource { name: "MangaDex".to_string(), source_id: 6404943692147160087 }],
        }
    }

    #[test]
    fn test_backup_roundtrip() {
        let backup = sample();
        assert_eq!(Backup::decode(&backup.encode()).unwrap(), backup);
    }

    #[test]
    fn test_empty_backup_encodes_to_nothing() {
        assert!(Backup::default().encode().is_empty());
        assert_eq!(Backup::decode(&[]).unwrap(), Backup::default());
    }

    #[test]
    fn test_unknown_top_level_sections_are_skipped() {
        let backup = sample();
        let mut writer = Writer::new();
        // backupPreferences (104) and backupExtensionRepo (106) are not modelled.
        writer.write_length_delimited(104, b"\x0a\x03key");
        writer.write_length_delimited(106, b"\x0a\x04repo");
        let mut bytes = writer.into_inner();
        bytes.extend(backup.encode());
        assert_eq!(Backup::decode(&bytes).unwrap(), backup);
    }

    #[test]
    fn test_source_name() {
        let backup = sample();
        assert_eq!(backup.source_name(6404943692147160087), Some("MangaDex"));
        assert_eq!(backup.source_name(42), None);
    }

    #[test]
    fn test_nested_error_names_path() {
        // backup.manga containing a manga.url encoded as a varint.
        let bytes = [0x0A, 0x02, 0x10, 0x01];
        let err = Backup::decode(&bytes).unwrap_err();
        assert_eq!(*err, ErrorKind::Nested("backup.manga"));
    }
}
