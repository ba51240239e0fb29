use bkconv_wire::error::Result;
use bkconv_wire::{Message, Reader, Tag, Writer};

const NAME: u32 = 1;
const ORDER: u32 = 2;
const ID: u32 = 3;

/// A user-defined category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupCategory {
    pub name: String,
    /// Sort position in Mihon. Kotatsu keeps a creation timestamp in the
    /// equivalent slot, and conversions copy the number across as-is.
    pub order: i64,
    pub id: i64,
}
impl Message for BackupCategory {
    fn merge_field(&mut self, tag: Tag, reader: &mut Reader<'_>) -> Result<bool> {
        match tag.field {
            NAME => self.name = reader.string(tag, "category.name")?,
            ORDER => self.order = reader.int64(tag, "category.order")?,
            ID => self.id = reader.int64(tag, "category.id")?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn encode_fields(&self, writer: &mut Writer) {
        writer.string(NAME, &self.name);
        writer.int64(ORDER, self.order);
        writer.int64(ID, self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_bytes() {
        let category = BackupCategory { name: "Fav".to_string(), order: 2, id: 7 };
        let bytes = category.encode();
        assert_eq!(bytes, vec![0x0A, 0x03, b'F', b'a', b'v', 0x10, 0x02, 0x18, 0x07]);
        assert_eq!(BackupCategory::decode(&bytes).unwrap(), category);
    }

    #[test]
    fn test_category_skips_flags() {
        // Mihon also writes `flags` as field 100.
        let bytes = [0xA0, 0x06, 0x05, 0x0A, 0x01, b'A', 0x18, 0x01];
        let category = BackupCategory::decode(&bytes).unwrap();
        assert_eq!(category, BackupCategory { name: "A".to_string(), order: 0, id: 1 });
    }
}
