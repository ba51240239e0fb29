use bkconv_wire::error::Result;
use bkconv_wire::{Message, Reader, Tag, Writer};

const NAME: u32 = 1;
const SOURCE_ID: u32 = 2;

/// A source (extension) registration: lets the importing app put a name on
/// entries whose source isn't installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupSource {
    pub name: String,
    pub source_id: i64,
}
impl Message for BackupSource {
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool> {
        match tag.field {
            NAME => self.name = reader.string(tag, "source.name")?,
            SOURCE_ID => self.source_id = reader.int64(tag, "source.source_id")?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut Writer) {
        writer.string(NAME, &self.name);
        writer.int64(SOURCE_ID, self.source_id);
    }
}
