//! Kernel header parsing
//!
//! Extracts `#define __NR_<name> <number>` lines from an installed
//! `unistd_64.h` into a [`SyscallTable`]. Lines that carry the `__NR_`
//! prefix but do not match the full pattern (conditional defines, aliases
//! to other macros) are skipped silently; the table only ever holds
//! name/number pairs the header states outright.

use crate::error::{GenError, Result};
use crate::table::{SyscallEntry, SyscallTable};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

const NR_PREFIX: &str = "#define __NR_";

fn define_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#define __NR_(\w+)\s+(\d+)").expect("syscall define pattern is valid")
    })
}

/// Parse one architecture header into a syscall table.
///
/// All-or-nothing: any I/O failure mid-read discards the partial table.
pub fn parse_header(path: &Path) -> Result<SyscallTable> {
    if !path.exists() {
        return Err(GenError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| GenError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let mut table = SyscallTable::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| GenError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.trim();

        // Cheap prefix check before the regex; headers are mostly other text
        if !line.starts_with(NR_PREFIX) {
            continue;
        }

        if let Some(caps) = define_pattern().captures(line) {
            // \d+ can still overflow i64; treat that like any malformed line
            if let Ok(number) = caps[2].parse::<i64>() {
                table.push(SyscallEntry::new(&caps[1], number));
            }
        } else {
            debug!(line, "skipping malformed __NR_ define");
        }
    }

    debug!(path = %path.display(), entries = table.len(), "parsed header");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn header_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_extracts_and_sorts_alphabetically() {
        let f = header_file(
            "#define __NR_read 0\n#define __NR_write 1\n#define __NR_open 2\n",
        );
        let table = parse_header(f.path()).unwrap();
        let sorted = table.sorted_entries();
        assert_eq!(sorted.len(), 3);
        assert_eq!((sorted[0].name.as_str(), sorted[0].number), ("open", 2));
        assert_eq!((sorted[1].name.as_str(), sorted[1].number), ("read", 0));
        assert_eq!((sorted[2].name.as_str(), sorted[2].number), ("write", 1));
    }

    #[test]
    fn test_malformed_define_dropped_silently() {
        let f = header_file("#define __NR_bad\n#define __NR_read 0\n");
        let table = parse_header(f.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].name, "read");
    }

    #[test]
    fn test_non_prefixed_lines_ignored() {
        let f = header_file(
            "/* unistd_64.h */\n\n#ifndef _ASM_UNISTD_64_H\n#define _ASM_UNISTD_64_H\n\
             #define __NR_close 3\n#endif\n",
        );
        let table = parse_header(f.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0], SyscallEntry::new("close", 3));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = parse_header(Path::new("/nonexistent/unistd_64.h")).unwrap_err();
        assert!(matches!(err, GenError::NotFound(_)));
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        let f = header_file("   #define __NR_lseek 8\n");
        let table = parse_header(f.path()).unwrap();
        assert_eq!(table.entries()[0], SyscallEntry::new("lseek", 8));
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        // No whitespace between name and number: the name swallows the digits
        // as part of \w+, then no number follows
        let f = header_file("#define __NR_read0\n");
        let table = parse_header(f.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_negative_number_is_malformed() {
        let f = header_file("#define __NR_odd -1\n");
        let table = parse_header(f.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_trailing_text_after_number_accepted() {
        // Pattern anchors at start only; trailing comments do not disqualify
        let f = header_file("#define __NR_openat 257 /* since 2.6.16 */\n");
        let table = parse_header(f.path()).unwrap();
        assert_eq!(table.entries()[0], SyscallEntry::new("openat", 257));
    }

    #[test]
    fn test_duplicate_defines_both_kept() {
        let f = header_file("#define __NR_sync 162\n#define __NR_sync 306\n");
        let table = parse_header(f.path()).unwrap();
        assert_eq!(table.len(), 2);
        let sorted = table.sorted_entries();
        assert_eq!(sorted[0].number, 162);
        assert_eq!(sorted[1].number, 306);
    }

    #[test]
    fn test_empty_header_yields_empty_table() {
        let f = header_file("");
        let table = parse_header(f.path()).unwrap();
        assert!(table.is_empty());
    }
}
