//! Test-only builder for minimal stored-method zip archives.

use byteorder::{LittleEndian, WriteBytesExt};

use super::structures::{EndOfCentralDirectory, CDFH_SIGNATURE, LFH_SIGNATURE};

/// Build a zip archive holding the given (name, data) entries, stored
/// without compression. CRCs are left zero; the analysis never checks them.
pub(crate) fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    build_zip_with_comment(entries, b"")
}

pub(crate) fn build_zip_with_comment(entries: &[(&str, &[u8])], comment: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut offsets = Vec::with_capacity(entries.len());

    for (name, data) in entries {
        offsets.push(out.len() as u32);
        out.extend_from_slice(LFH_SIGNATURE);
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(0).unwrap(); // method: stored
        out.write_u16::<LittleEndian>(0).unwrap(); // mod time
        out.write_u16::<LittleEndian>(0).unwrap(); // mod date
        out.write_u32::<LittleEndian>(0).unwrap(); // crc32
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra len
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(data);
    }

    let cd_offset = out.len() as u32;
    for ((name, data), lfh_offset) in entries.iter().zip(&offsets) {
        out.extend_from_slice(CDFH_SIGNATURE);
        out.write_u16::<LittleEndian>(20).unwrap(); // version made by
        out.write_u16::<LittleEndian>(20).unwrap(); // version needed
        out.write_u16::<LittleEndian>(0).unwrap(); // flags
        out.write_u16::<LittleEndian>(0).unwrap(); // method: stored
        out.write_u16::<LittleEndian>(0).unwrap(); // mod time
        out.write_u16::<LittleEndian>(0).unwrap(); // mod date
        out.write_u32::<LittleEndian>(0).unwrap(); // crc32
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(data.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap(); // extra len
        out.write_u16::<LittleEndian>(0).unwrap(); // comment len
        out.write_u16::<LittleEndian>(0).unwrap(); // disk number start
        out.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        out.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        out.write_u32::<LittleEndian>(*lfh_offset).unwrap();
        out.extend_from_slice(name.as_bytes());
    }
    let cd_size = out.len() as u32 - cd_offset;

    out.extend_from_slice(EndOfCentralDirectory::SIGNATURE);
    out.write_u16::<LittleEndian>(0).unwrap(); // disk number
    out.write_u16::<LittleEndian>(0).unwrap(); // disk with cd
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(entries.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(cd_size).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(comment.len() as u16).unwrap();
    out.extend_from_slice(comment);

    out
}
